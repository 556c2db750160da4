//! Extractor configuration shared by every route.
//!
//! Malformed bodies and path segments are answered with the generic
//! `400 Bad request` payload; the decoder's reason is only logged.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use tracing::warn;

use crate::domain::Error;

/// Largest accepted JSON body.
pub const JSON_LIMIT: usize = 64 * 1024;

fn reject_json(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected request body");
    Error::bad_request().into()
}

fn reject_path(err: PathError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "rejected path parameter");
    Error::bad_request().into()
}

/// JSON extractor settings. Any content type is accepted.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .content_type_required(false)
        .error_handler(reject_json)
}

/// Path extractor settings.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(reject_path)
}
