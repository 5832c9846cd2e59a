//! Tree building service
//!
//! Runs the pipeline raw text → numbers → tree → JSON, and hands successful
//! builds to the record store.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    build_tree, format_numbers, parse_numbers, to_document, to_json, NewTreeRecord, Tree,
    TreeRecord,
};
use crate::infrastructure::traits::TreeStore;

/// Result of one build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    /// Parsed sequence, in input order with duplicates
    pub numbers: Vec<i32>,
    pub tree: Tree,
    /// Canonical JSON text of `tree`
    pub tree_json: String,
    /// Stored record, `None` when the build was not persisted
    pub record: Option<TreeRecord>,
}

/// Service for building, storing and listing trees.
pub struct TreeService {
    store: Arc<dyn TreeStore>,
    pretty_json: bool,
}

impl TreeService {
    /// Create a new tree service.
    pub fn new(store: Arc<dyn TreeStore>, pretty_json: bool) -> Self {
        Self { store, pretty_json }
    }

    /// Parse raw input into its ordered number sequence.
    pub fn parse(&self, raw: Option<&str>) -> ApplicationResult<Vec<i32>> {
        Ok(parse_numbers(raw)?)
    }

    /// Parse and build, returning the structural document without storing anything.
    #[instrument(level = "debug", skip(self))]
    pub fn build(&self, raw: Option<&str>) -> ApplicationResult<Value> {
        let numbers = parse_numbers(raw)?;
        let tree = build_tree(&numbers);
        Ok(to_document(&tree)?)
    }

    /// Parse, build and serialize to JSON text; nothing is stored.
    #[instrument(level = "debug", skip(self))]
    pub fn prepare(&self, raw: Option<&str>) -> ApplicationResult<BuildOutput> {
        let numbers = parse_numbers(raw)?;
        let tree = build_tree(&numbers);
        let tree_json = to_json(&tree, self.pretty_json)?;
        debug!(
            "prepare: {} numbers -> {} nodes, depth {}",
            numbers.len(),
            tree.len(),
            tree.depth()
        );

        Ok(BuildOutput {
            numbers,
            tree,
            tree_json,
            record: None,
        })
    }

    /// Build and append the result to the store.
    ///
    /// The store is only called once parsing and serialization succeeded.
    #[instrument(level = "debug", skip(self))]
    pub fn build_and_save(&self, raw: Option<&str>) -> ApplicationResult<BuildOutput> {
        let mut output = self.prepare(raw)?;
        let record = self.store.append(NewTreeRecord::new(
            format_numbers(&output.numbers),
            output.tree_json.clone(),
        ))?;
        info!("stored tree #{} for {}", record.id, record.input_numbers);
        output.record = Some(record);
        Ok(output)
    }

    /// All stored records, most recent first.
    pub fn history(&self) -> ApplicationResult<Vec<TreeRecord>> {
        let records = self.store.list_recent()?;
        debug!("history: {} records", records.len());
        Ok(records)
    }

    /// A single stored record.
    pub fn get(&self, id: u64) -> ApplicationResult<TreeRecord> {
        self.store
            .get(id)?
            .ok_or(ApplicationError::RecordNotFound(id))
    }

    /// Rebuild the tree of a stored record from its input text.
    ///
    /// Building is deterministic, so this yields the tree that was stored.
    pub fn rebuild(&self, record: &TreeRecord) -> ApplicationResult<Tree> {
        let text = record
            .input_numbers
            .trim_matches(|c: char| c == '[' || c == ']');
        let numbers = parse_numbers(Some(text))?;
        Ok(build_tree(&numbers))
    }
}
