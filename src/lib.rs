//! Compliance scoring core for an ESG supplier portal.
//!
//! The [`portal::compliance`] module holds the pure scoring engine: a typed
//! category catalog, document-checklist completion math, risk tiering, and
//! fleet-wide aggregation. Everything operates on immutable snapshots handed
//! in by the caller; the engine keeps no state of its own.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
