//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};

use super::configure;
use super::state::HttpState;
use crate::test_support::{InMemoryBookRepository, InMemoryUserRepository};

/// State backed by fresh in-memory repositories, returned alongside them.
pub fn in_memory_state() -> (
    HttpState,
    Arc<InMemoryUserRepository>,
    Arc<InMemoryBookRepository>,
) {
    let users = Arc::new(InMemoryUserRepository::default());
    let books = Arc::new(InMemoryBookRepository::default());
    let state = HttpState::new(users.clone(), books.clone());
    (state, users, books)
}

/// Build the routed app around `state` and send one request through it.
pub async fn call(state: &HttpState, request: TestRequest) -> ServiceResponse {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure),
    )
    .await;
    actix_test::call_service(&app, request.to_request()).await
}
