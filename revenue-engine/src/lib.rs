//! Order revenue recognition engine
//!
//! Pure, deterministic derivation of revenue events from order lifecycle
//! snapshots, plus day-bucketed report aggregation. Every operation is a
//! total function of its explicit inputs: no I/O, no shared state, no clock
//! reads (callers pass `now` in). All arithmetic runs on `Decimal`; floats
//! exist only at the serialization boundary.

pub mod business_day;
pub mod deriver;
mod engine;
pub mod error;
pub mod money;
pub mod projector;
pub mod report;
pub mod resolver;
pub mod status;

pub use business_day::{BusinessDayPolicy, TimeRange};
pub use engine::RevenueEngine;
pub use error::EngineError;
