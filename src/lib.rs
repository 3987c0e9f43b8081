pub mod config;
pub mod error;
pub mod db;
pub mod models;
pub mod graph;
pub mod store;
pub mod tree;
pub mod http;

pub use config::Config;
pub use error::{IsnadError, Result};
pub use graph::{find_shortest_chain, partition_generations, Edge};
pub use models::{Ijaza, Person, PersonId, Transmission};
