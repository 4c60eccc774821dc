//! File-backed record storage shared by the four daily-boost services.
//!
//! Each service owns one JSON array file on disk. [`JsonStore`] reads and
//! rewrites that file whole, and [`Repository`] layers the resource
//! operations (random pick, lookup, append, in-place update) on top of it
//! behind a single-writer lock.

pub mod error;
pub mod file_store;
pub mod records;
pub mod repository;

pub use error::StoreError;
pub use file_store::JsonStore;
pub use records::{today, FunFact, Goal, Quote, Record, Reflection};
pub use repository::Repository;
