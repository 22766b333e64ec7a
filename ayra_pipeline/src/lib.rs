#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! The conversation-to-activity pipeline: extraction orchestration,
//! duplicate suppression, materialization, and the merged upcoming feed.

pub mod aggregate;
pub mod dedup;
pub mod materialize;
pub mod orchestrator;

pub use aggregate::list_upcoming;
pub use materialize::{Materialized, Materializer};
pub use orchestrator::Orchestrator;
