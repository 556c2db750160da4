//! Domain records, errors, and ports.
//!
//! Purpose: define the records the HTTP layer exchanges with the store and the
//! transport-agnostic error payload. Nothing here knows about Actix or Diesel.
//!
//! Public surface:
//! - `User`, `NewUser`: user rows and their insert payload.
//! - `Book`, `NewBook`: book rows and their insert payload.
//! - `Error`, `ErrorCode`: client-facing error payload.
//! - `TraceId`: request correlation identifier.
//! - `ports`: repository traits implemented by outbound adapters.

pub mod book;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::book::{Book, NewBook};
pub use self::error::{
    BAD_REQUEST_MESSAGE, Error, ErrorCode, ErrorValidationError, INTERNAL_ERROR_MESSAGE,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User};
