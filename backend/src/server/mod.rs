//! Server construction and middleware wiring.

mod config;

pub use config::{DEFAULT_PORT, ServerConfig, bind_addr_from_port};

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::middleware::{Cors, Trace};
use crate::outbound::persistence::{DieselBookRepository, DieselUserRepository};

/// Build the application around `state`.
///
/// `Trace` is the outermost layer so preflight responses produced by `Cors`
/// also carry a `trace-id`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use bookshelf::inbound::http::state::HttpState;
/// use bookshelf::server::build_app;
/// use bookshelf::test_support::{InMemoryBookRepository, InMemoryUserRepository};
///
/// let state = web::Data::new(HttpState::new(
///     Arc::new(InMemoryUserRepository::default()),
///     Arc::new(InMemoryBookRepository::default()),
/// ));
/// let _app = build_app(state);
/// ```
pub fn build_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Cors)
        .wrap(Trace)
        .configure(configure)
}

/// Construct the HTTP server backed by the Diesel repositories.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let state = web::Data::new(HttpState::new(
        Arc::new(DieselUserRepository::new(db_pool.clone())),
        Arc::new(DieselBookRepository::new(db_pool)),
    ));

    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::net::{Ipv4Addr, SocketAddr, TcpListener};

    use rstest::rstest;

    use super::*;
    use crate::outbound::persistence::{DbPool, PoolConfig};

    #[rstest]
    #[actix_web::test]
    async fn create_server_binds_the_configured_address() {
        let occupied = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
            .expect("ephemeral port");
        let addr = occupied.local_addr().expect("bound address");
        let pool = DbPool::new(
            PoolConfig::new("postgres://unused@localhost/unused").with_min_idle(None),
        );

        let result = create_server(ServerConfig::new(addr, pool));

        let err = result.err().expect("port already in use");
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
    }
}
