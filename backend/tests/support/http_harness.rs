//! Live server harness for behaviour tests.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. Dropping the harness stops the server
//! even if a step panics.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::http::header::{CONTENT_TYPE, HeaderMap};
use actix_web::{HttpServer, web};
use bookshelf::inbound::http::state::HttpState;
use bookshelf::server::build_app;
use bookshelf::test_support::{InMemoryBookRepository, InMemoryUserRepository};
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

/// Captured response from the last request.
pub(crate) struct Reply {
    pub(crate) status: u16,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
}

pub(crate) struct Harness {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: ServerHandle,
    pub(crate) users: Arc<InMemoryUserRepository>,
    pub(crate) books: Arc<InMemoryBookRepository>,
}

impl Harness {
    /// Start a server on an ephemeral port backed by fresh in-memory
    /// repositories.
    pub(crate) fn start() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        let local = LocalSet::new();
        let users = Arc::new(InMemoryUserRepository::default());
        let books = Arc::new(InMemoryBookRepository::default());
        let state = web::Data::new(HttpState::new(users.clone(), books.clone()));

        let (base_url, server) = local
            .block_on(&runtime, spawn_server(state))
            .expect("server should start");

        Self {
            runtime,
            local,
            base_url,
            server,
            users,
            books,
        }
    }

    /// Send one request and collect the full response.
    pub(crate) fn send(&self, method: Method, path: &str, body: Option<&str>) -> Reply {
        let url = format!("{}{path}", self.base_url);
        let body = body.map(str::to_owned);
        self.local.block_on(&self.runtime, async move {
            let client = awc::Client::default();
            let request = client
                .request(method, url)
                .insert_header((CONTENT_TYPE, "application/json"));
            let mut response = match body {
                Some(body) => request.send_body(body).await,
                None => request.send().await,
            }
            .expect("request should reach the server");
            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.body().await.expect("response body").to_vec();
            Reply {
                status,
                headers,
                body,
            }
        })
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        let server = self.server.clone();
        self.local.block_on(&self.runtime, async move {
            server.stop(true).await;
        });
    }
}

async fn spawn_server(state: web::Data<HttpState>) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let server = HttpServer::new(move || build_app(state.clone()))
        .disable_signals()
        .workers(1)
        .listen(listener)
        .map_err(|err| err.to_string())?
        .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}
