use actix_web::{web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index));
}

/// Serve the single-page form front-end
///
/// The page holds the sidebar menu and renders exactly one of the three
/// forms at a time, rebuilding the view from the schema endpoint whenever
/// the selection changes.
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
