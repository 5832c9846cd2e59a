//! bstree: binary search trees built from integer sequences by plain insertion,
//! serialized to nested JSON and kept in a local, most-recent-first history.
//!
//! Layers, innermost first:
//! - [`domain`]: tree, parser, serializer, records (no I/O)
//! - [`application`]: the [`TreeService`](application::services::TreeService) pipeline
//! - [`infrastructure`]: filesystem and record store implementations, DI container
//! - [`cli`]: argument parsing, command dispatch, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
