//! Book and user catalogue service.
//!
//! Layout follows ports and adapters: [`domain`] holds the records and the
//! repository ports, [`inbound::http`] exposes them over REST, and
//! [`outbound::persistence`] implements the ports on PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by tooling.
pub use doc::ApiDoc;
pub use middleware::{Cors, Trace};
