#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious
)]

//! sea-orm entity models for the Ayra tables.
//!
//! `date` and `time` are TEXT on purpose: they may hold a raw captured
//! phrase when calendar parsing failed, and the feed filters compare them
//! lexically. Order items are serialized JSON in a TEXT column.

pub mod conversations;
pub mod hospital_appointments;
pub mod hospital_reminders;
pub mod restaurant_orders;
pub mod restaurant_reservations;
