//! SQLite persistence for persons, ijazas and transmissions.
//!
//! Every list returns rows in insertion order so that graph queries built on
//! top of them break ties the same way on every call.

mod ijazas;
mod persons;
mod transmissions;

pub use ijazas::{insert_ijaza, list_ijazas};
pub use persons::{insert_person, list_persons};
pub use transmissions::{insert_transmission, list_transmissions, load_edges};
