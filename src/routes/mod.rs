// Route exports
pub mod pages;
pub mod screening;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(pages::configure).service(
        web::scope("/api/v1")
            .configure(screening::configure),
    );
}
