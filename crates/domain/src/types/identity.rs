//! Authenticated identity and role.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Who the current session belongs to.
///
/// Exists only while a session is active; created by a successful login,
/// registration-then-login, or session resolution, and destroyed by logout
/// or a failed session probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "user")]
    pub username: String,
    pub role: Role,
}

/// Catalog permission level attached to an identity.
///
/// The server sends the role as a free-form string; only the exact value
/// `"organizer"` grants mutation affordances, every other value is a
/// participant. Authoritative enforcement stays server-side — this value
/// gates the client UI only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Organizer,
    Participant,
}

impl Role {
    /// Map a wire value onto a role. Unknown values are participants.
    pub fn from_wire(value: &str) -> Self {
        if value == "organizer" {
            Self::Organizer
        } else {
            Self::Participant
        }
    }

    /// The wire representation of this role.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Organizer => "organizer",
            Self::Participant => "participant",
        }
    }

    pub fn is_organizer(self) -> bool {
        matches!(self, Self::Organizer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&value))
    }
}
