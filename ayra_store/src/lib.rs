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

//! Storage-port implementations.
//!
//! The pipeline only ever sees `dyn ActivityStore`; the composition root
//! picks the backing. [`StorageEngine`] talks to the database through
//! sea-orm, [`MemStore`] keeps everything in process for offline use and
//! tests. Neither branches on "is the network available" internally.

mod convert;
mod engine;
mod memory;

pub use engine::StorageEngine;
pub use memory::MemStore;
