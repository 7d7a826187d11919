use actix_web::web;

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pdf;
pub mod templates_structs;
pub mod validate;

/// Route table, shared by the server binary and the HTTP tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::form_handlers::index))
        .route("/requests/pdf", web::post().to(handlers::form_handlers::export_pdf))
        .route("/requests/preview", web::post().to(handlers::form_handlers::preview));
}
