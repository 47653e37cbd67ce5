//! Repository implementations module.
//!
//! - `local`: In-memory implementation, filled from a JSON dataset file or
//!   directly through its setters
pub mod local;

pub use local::LocalRepository;
