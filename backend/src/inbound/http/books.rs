//! Books API handlers.
//!
//! ```text
//! GET    /books
//! POST   /books {"title":"Dune","author":"Frank Herbert"}
//! PUT    /books
//! DELETE /books/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Book, Error, NewBook};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::state::HttpState;

/// Message returned by `PUT /books`.
pub const UPDATED_MESSAGE: &str = "Updated successfully";

/// Request body for `POST /books`.
///
/// Example JSON: `{"title":"Dune","author":"Frank Herbert"}`
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBookRequest {
    /// Ignored; the store assigns identifiers.
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
}

impl From<CreateBookRequest> for NewBook {
    fn from(value: CreateBookRequest) -> Self {
        Self::new(value.title, value.author)
    }
}

/// Acknowledgement body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Updated successfully")]
    pub message: String,
}

/// List every stored book in storage order.
#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "Stored books", body = [Book]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("/books")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Book>>> {
    let books = state
        .books
        .list()
        .await
        .map_err(map_store_error("list books"))?;
    Ok(web::Json(books))
}

/// Insert a book and echo it with its new id.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bookshelf::inbound::http::books::create_book;
///
/// let app = App::new().service(create_book);
/// ```
#[utoipa::path(
    post,
    path = "/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed body", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("/books")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookRequest>,
) -> ApiResult<HttpResponse> {
    let book = state
        .books
        .create(payload.into_inner().into())
        .await
        .map_err(map_store_error("insert book"))?;
    Ok(HttpResponse::Created().json(book))
}

/// Accept an update request without touching the store.
///
/// The body is neither read nor validated.
#[utoipa::path(
    put,
    path = "/books",
    responses(
        (status = 200, description = "Acknowledged", body = MessageResponse)
    ),
    tags = ["books"],
    operation_id = "updateBooks"
)]
#[put("/books")]
pub async fn update_books() -> web::Json<MessageResponse> {
    web::Json(MessageResponse {
        message: UPDATED_MESSAGE.to_owned(),
    })
}

/// Delete the book with the given id.
///
/// Succeeds whether or not a row matched.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = i32, Path, description = "Book identifier")),
    responses(
        (status = 204, description = "Deleted or absent"),
        (status = 400, description = "Non-integer id", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .books
        .delete(id.into_inner())
        .await
        .map_err(map_store_error("delete book"))?;
    Ok(HttpResponse::NoContent().finish())
}
