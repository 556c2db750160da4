//! HTTP inbound adapter exposing the REST endpoints.

pub mod books;
pub mod error;
pub mod extract;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register every route and the shared extractor settings.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bookshelf::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extract::json_config())
        .app_data(extract::path_config())
        .service(users::create_user)
        .service(books::list_books)
        .service(books::create_book)
        .service(books::update_books)
        .service(books::delete_book);
}
