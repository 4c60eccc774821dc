//! The four record types and their shared id contract.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A persisted record with a numeric id.
///
/// Ids are allocated by the repository as `max(existing ids) + 1` under its
/// write lock, so they stay collision-free across concurrent creates.
pub trait Record: Clone {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunFact {
    pub id: u64,
    pub fact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reflection {
    pub id: u64,
    pub date: String,
    pub reflection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u64,
    pub goal: String,
    #[serde(default)]
    pub completed: bool,
}

impl Record for Quote {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for FunFact {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Reflection {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Goal {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Today's local date as `YYYY-MM-DD`, the format reflections are keyed by.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
