//! Observability subsystem.
//!
//! Structured logging only: there is no metrics pipeline and no tracing
//! export here, just the subscriber setup every binary calls first.

pub mod logging;
