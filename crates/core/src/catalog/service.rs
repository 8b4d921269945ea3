//! Event catalog client - cache, validation, and mutation flow.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use wayfest_domain::{clock, messages, Event, EventInput, Result, WayfestError};

use super::ports::CatalogGateway;

/// Client-side view of the event catalog.
///
/// Holds the last successfully fetched event sequence. The cache is only
/// ever replaced wholesale by a fresh full fetch - there is no patching and
/// no version reconciliation, so a refresh after each mutation keeps it
/// consistent with the server.
pub struct CatalogService {
    gateway: Arc<dyn CatalogGateway>,
    cache: RwLock<Vec<Event>>,
}

impl CatalogService {
    /// Create a new catalog service with an empty cache.
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway, cache: RwLock::new(Vec::new()) }
    }

    /// The cached event sequence, in server order.
    pub fn cached(&self) -> Vec<Event> {
        self.cache.read().clone()
    }

    /// Look up a cached event by id.
    pub fn find(&self, id: i64) -> Option<Event> {
        self.cache.read().iter().find(|event| event.id == id).cloned()
    }

    /// Fetch the full catalog and replace the cache.
    ///
    /// On transport or decode failure the previous cache is left untouched;
    /// the failure is logged and returned, and callers treating the fetch as
    /// a background refresh simply drop it.
    pub async fn refresh(&self) -> Result<Vec<Event>> {
        match self.gateway.fetch_events().await {
            Ok(events) => {
                debug!(count = events.len(), "catalog refreshed");
                *self.cache.write() = events.clone();
                Ok(events)
            }
            Err(err) => {
                warn!(error = %err, "catalog refresh failed; keeping cached events");
                Err(err)
            }
        }
    }

    /// Create an event from user input.
    ///
    /// Validates locally before any network call: every field must be
    /// non-empty and the computed wraparound duration positive. On success
    /// the catalog is re-fetched so the cache reflects the new event.
    pub async fn create(&self, input: &EventInput) -> Result<Event> {
        let duration = validate(input)?;

        let event = self.gateway.create_event(input, duration).await?;
        info!(event_id = event.id, duration, "event created");

        self.refresh_after_mutation().await;
        Ok(event)
    }

    /// Replace an event's fields. Same local validation as [`Self::create`].
    pub async fn update(&self, id: i64, input: &EventInput) -> Result<Event> {
        let duration = validate(input)?;

        let event = self.gateway.update_event(id, input, duration).await?;
        info!(event_id = id, duration, "event updated");

        self.refresh_after_mutation().await;
        Ok(event)
    }

    /// Delete an event.
    ///
    /// `confirmed` carries the user's answer to the destructive-action
    /// prompt; an unconfirmed delete is a no-op and returns `false`.
    pub async fn delete(&self, id: i64, confirmed: bool) -> Result<bool> {
        if !confirmed {
            debug!(event_id = id, "delete cancelled by user");
            return Ok(false);
        }

        self.gateway.delete_event(id).await?;
        info!(event_id = id, "event deleted");

        self.refresh_after_mutation().await;
        Ok(true)
    }

    /// Refresh issued only after a mutation's response has arrived, so the
    /// cache reflects the mutation's outcome rather than a race.
    async fn refresh_after_mutation(&self) {
        if self.refresh().await.is_err() {
            debug!("post-mutation refresh failed; cache is stale until the next fetch");
        }
    }
}

/// Validate user input and return the computed duration in minutes.
fn validate(input: &EventInput) -> Result<i64> {
    if input.has_missing_fields() {
        return Err(WayfestError::Validation(messages::MISSING_FIELDS.to_string()));
    }

    let duration = clock::duration_minutes(&input.start_time, &input.end_time);
    if duration <= 0 {
        return Err(WayfestError::Validation(messages::INVALID_TIME_RANGE.to_string()));
    }

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::*;

    /// In-memory catalog standing in for the server.
    #[derive(Default)]
    struct FakeCatalogGateway {
        events: Mutex<Vec<Event>>,
        fetch_calls: AtomicUsize,
        mutation_calls: AtomicUsize,
        fail_fetches: Mutex<bool>,
        reject_mutations: Option<String>,
    }

    impl FakeCatalogGateway {
        fn with_events(events: Vec<Event>) -> Self {
            Self { events: Mutex::new(events), ..Default::default() }
        }

        fn build(&self, id: i64, input: &EventInput, duration: i64) -> Event {
            Event {
                id,
                name: input.name.clone(),
                start_time: input.start_time.clone(),
                end_time: input.end_time.clone(),
                location: input.location.clone(),
                duration,
            }
        }

        fn check_rejection(&self) -> Result<()> {
            match &self.reject_mutations {
                Some(message) => Err(WayfestError::Rejected(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CatalogGateway for FakeCatalogGateway {
        async fn fetch_events(&self) -> Result<Vec<Event>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if *self.fail_fetches.lock() {
                return Err(WayfestError::Network("connection reset".into()));
            }
            Ok(self.events.lock().clone())
        }

        async fn create_event(&self, input: &EventInput, duration: i64) -> Result<Event> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            self.check_rejection()?;
            let mut events = self.events.lock();
            let id = events.iter().map(|event| event.id).max().unwrap_or(0) + 1;
            let event = self.build(id, input, duration);
            events.push(event.clone());
            Ok(event)
        }

        async fn update_event(&self, id: i64, input: &EventInput, duration: i64) -> Result<Event> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            self.check_rejection()?;
            let updated = self.build(id, input, duration);
            let mut events = self.events.lock();
            let slot = events
                .iter_mut()
                .find(|event| event.id == id)
                .ok_or_else(|| WayfestError::Rejected("Событие не найдено".into()))?;
            *slot = updated.clone();
            Ok(updated)
        }

        async fn delete_event(&self, id: i64) -> Result<()> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            self.check_rejection()?;
            self.events.lock().retain(|event| event.id != id);
            Ok(())
        }
    }

    fn sample_event(id: i64) -> Event {
        Event {
            id,
            name: format!("Event {id}"),
            start_time: "10:00".into(),
            end_time: "11:00".into(),
            location: "Stage".into(),
            duration: 60,
        }
    }

    fn valid_input() -> EventInput {
        EventInput::new("Fireworks", "21:30", "22:00", "Riverside")
    }

    #[tokio::test]
    async fn refresh_replaces_cache_in_server_order() {
        let gateway = Arc::new(FakeCatalogGateway::with_events(vec![
            sample_event(2),
            sample_event(1),
        ]));
        let service = CatalogService::new(gateway);

        let events = service.refresh().await.unwrap();
        assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(service.cached(), events);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_cache() {
        let gateway = Arc::new(FakeCatalogGateway::with_events(vec![sample_event(1)]));
        let service = CatalogService::new(gateway.clone());
        service.refresh().await.unwrap();

        *gateway.fail_fetches.lock() = true;
        assert!(service.refresh().await.is_err());
        assert_eq!(service.cached().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_missing_fields_without_network_call() {
        let gateway = Arc::new(FakeCatalogGateway::default());
        let service = CatalogService::new(gateway.clone());

        let input = EventInput::new("", "10:00", "11:00", "Stage");
        let err = service.create(&input).await.unwrap_err();

        assert!(matches!(err, WayfestError::Validation(_)));
        assert_eq!(gateway.mutation_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_rejects_zero_duration_without_network_call() {
        let gateway = Arc::new(FakeCatalogGateway::default());
        let service = CatalogService::new(gateway.clone());

        let input = EventInput::new("Fireworks", "21:30", "21:30", "Riverside");
        let err = service.create(&input).await.unwrap_err();

        assert_eq!(err.to_string(), messages::INVALID_TIME_RANGE);
        assert_eq!(gateway.mutation_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_submits_computed_duration_and_refreshes() {
        let gateway = Arc::new(FakeCatalogGateway::default());
        let service = CatalogService::new(gateway.clone());

        let event = service.create(&valid_input()).await.unwrap();
        assert_eq!(event.duration, 30);
        // Mutation response first, then a fresh full fetch.
        assert_eq!(gateway.fetch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.cached().len(), 1);
    }

    #[tokio::test]
    async fn overnight_event_is_accepted() {
        let gateway = Arc::new(FakeCatalogGateway::default());
        let service = CatalogService::new(gateway);

        let input = EventInput::new("Night parade", "23:00", "01:00", "Old town");
        let event = service.create(&input).await.unwrap();
        assert_eq!(event.duration, 120);
    }

    #[tokio::test]
    async fn server_rejection_is_surfaced_verbatim() {
        let gateway = Arc::new(FakeCatalogGateway {
            reject_mutations: Some("Только организаторы могут добавлять события".into()),
            ..Default::default()
        });
        let service = CatalogService::new(gateway);

        let err = service.create(&valid_input()).await.unwrap_err();
        assert_eq!(err.to_string(), "Только организаторы могут добавлять события");
    }

    #[tokio::test]
    async fn unconfirmed_delete_is_a_no_op() {
        let gateway = Arc::new(FakeCatalogGateway::with_events(vec![sample_event(1)]));
        let service = CatalogService::new(gateway.clone());

        let deleted = service.delete(1, false).await.unwrap();
        assert!(!deleted);
        assert_eq!(gateway.mutation_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_event_from_cache() {
        let gateway = Arc::new(FakeCatalogGateway::with_events(vec![
            sample_event(1),
            sample_event(2),
        ]));
        let service = CatalogService::new(gateway);
        service.refresh().await.unwrap();

        let deleted = service.delete(1, true).await.unwrap();
        assert!(deleted);
        assert!(service.find(1).is_none());
        assert!(service.find(2).is_some());
    }

    #[tokio::test]
    async fn update_refreshes_cache_with_new_fields() {
        let gateway = Arc::new(FakeCatalogGateway::with_events(vec![sample_event(1)]));
        let service = CatalogService::new(gateway);
        service.refresh().await.unwrap();

        let input = EventInput::new("Renamed", "10:00", "12:00", "Stage");
        let event = service.update(1, &input).await.unwrap();
        assert_eq!(event.duration, 120);
        assert_eq!(service.find(1).map(|e| e.name), Some("Renamed".to_string()));
    }
}
