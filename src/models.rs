//! Persons, credentials (ijazas) and transmissions as stored and served.

use serde::{Deserialize, Serialize};

/// Opaque person identifier (UUID v4 string when created by the store).
pub type PersonId = String;

/// A scholar or reciter in the transmission graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Free-form birth marker, e.g. `"1920"` or `"245 AH"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<String>,
}

/// A credential of authorization, optionally attached to transmissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ijaza {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A recorded transmission from teacher to student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transmission {
    pub id: String,
    pub teacher_id: PersonId,
    pub student_id: PersonId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ijaza_id: Option<String>,
}

/// Request body for creating a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPerson {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub death_date: Option<String>,
}

/// Request body for creating a credential.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIjaza {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issued_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for recording a transmission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTransmission {
    #[serde(default)]
    pub teacher_id: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub ijaza_id: Option<String>,
}

/// Treat empty and whitespace-only markers as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
