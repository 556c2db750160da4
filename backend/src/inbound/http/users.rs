//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Ada Lovelace"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users`.
///
/// Example JSON: `{"name":"Ada Lovelace"}`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    /// Ignored; the store assigns identifiers.
    #[serde(default)]
    pub id: Option<i32>,
    /// Display name; may be `null` or omitted.
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self::new(value.name)
    }
}

/// Insert a user and return it with its new id.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bookshelf::inbound::http::users::create_user;
///
/// let app = App::new().service(create_user);
/// ```
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users
        .create(payload.into_inner().into())
        .await
        .map_err(map_store_error("insert user"))?;
    Ok(HttpResponse::Created().json(user))
}
