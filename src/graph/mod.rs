//! Transmission graph: shortest chains and generation layering.
//!
//! Both operations are pure functions over caller-supplied snapshots. Each
//! call builds its own adjacency map from the edge slice and never touches
//! storage, so they are safe to run concurrently from any number of requests.

mod generations;
mod path;

pub use generations::partition_generations;
pub use path::find_shortest_chain;

use serde::{Deserialize, Serialize};

use crate::models::{PersonId, Transmission};

/// A directed transmission edge: teacher → student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub teacher: PersonId,
    pub student: PersonId,
}

impl Edge {
    pub fn new(teacher: impl Into<PersonId>, student: impl Into<PersonId>) -> Self {
        Self {
            teacher: teacher.into(),
            student: student.into(),
        }
    }
}

impl From<&Transmission> for Edge {
    fn from(t: &Transmission) -> Self {
        Self::new(t.teacher_id.clone(), t.student_id.clone())
    }
}
