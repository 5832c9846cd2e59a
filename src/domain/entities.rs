//! Domain entities: persisted tree records

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored build: the input as typed and the tree it produced.
///
/// Records are created once per successful build and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRecord {
    /// Assigned by the store, strictly increasing from 1
    pub id: u64,
    /// Display text of the parsed sequence, e.g. `[7, 3, 9]`
    pub input_numbers: String,
    /// Canonical JSON text of the serialized tree
    pub tree_json: String,
    /// Assigned by the store at append time (local time)
    pub created_at: NaiveDateTime,
}

/// What the core hands to the store; id and timestamp are the store's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTreeRecord {
    pub input_numbers: String,
    pub tree_json: String,
}

impl NewTreeRecord {
    pub fn new(input_numbers: impl Into<String>, tree_json: impl Into<String>) -> Self {
        Self {
            input_numbers: input_numbers.into(),
            tree_json: tree_json.into(),
        }
    }

    /// Complete the record with store-assigned fields.
    pub fn into_record(self, id: u64, created_at: NaiveDateTime) -> TreeRecord {
        TreeRecord {
            id,
            input_numbers: self.input_numbers,
            tree_json: self.tree_json,
            created_at,
        }
    }
}
