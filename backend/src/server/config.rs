//! HTTP server configuration object and helpers.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use crate::outbound::persistence::DbPool;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}

/// Resolve the listening address from the raw `PORT` value.
///
/// Binds all interfaces. An absent value selects [`DEFAULT_PORT`].
///
/// # Errors
/// Returns [`io::ErrorKind::InvalidInput`] when the value is not a port
/// number.
///
/// # Examples
/// ```
/// use bookshelf::server::bind_addr_from_port;
///
/// let addr = bind_addr_from_port(Some("9000")).expect("valid port");
/// assert_eq!(addr.to_string(), "0.0.0.0:9000");
/// ```
pub fn bind_addr_from_port(raw: Option<&str>) -> io::Result<SocketAddr> {
    let port = match raw.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(value) => value.parse::<u16>().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid PORT value {value:?}: {err}"),
            )
        })?,
    };
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}
