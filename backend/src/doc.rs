//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the five REST operations and the DTO schemas. The
//! document is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Book, Error, ErrorCode, User};
use crate::inbound::http::books::{CreateBookRequest, MessageResponse};
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        description = "Create users, and create, list and delete books."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::update_books,
        crate::inbound::http::books::delete_book,
    ),
    components(schemas(
        User,
        Book,
        Error,
        ErrorCode,
        CreateUserRequest,
        CreateBookRequest,
        MessageResponse
    )),
    tags(
        (name = "users", description = "User registration"),
        (name = "books", description = "Book catalogue")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's paths and schemas.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    #[case("/users")]
    #[case("/books")]
    #[case("/books/{id}")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn books_path_exposes_three_methods() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/books").expect("books path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
        assert!(item.put.is_some());
    }

    #[rstest]
    #[case("Book", &["id", "title", "author"])]
    #[case("User", &["id", "name"])]
    #[case("Error", &["code", "message", "traceId"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let present = object_fields(name);
        for field in fields {
            assert!(present.iter().any(|p| p == field), "{name} lacks {field}");
        }
    }
}
