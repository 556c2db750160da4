//! Request middleware.
//!
//! Purpose: cross-cutting request concerns applied before route dispatch,
//! namely trace correlation and the cross-origin policy.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::{Trace, TraceId};
