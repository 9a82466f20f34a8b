use crate::handlers;
use actix_web::web;

/// Configures the AI enrichment routes. Mounted under the "/api" scope in
/// main.rs; the health endpoint is registered there directly.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ai") // Base path: /api/ai
            .route(
                "/autotag",
                web::post().to(handlers::ai_handlers::autotag_handler),
            )
            .route(
                "/describe",
                web::post().to(handlers::ai_handlers::describe_handler),
            ),
    );
}

// Make sure all modules are properly compiled
#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[test]
    async fn test_routes_compile() {
        let _app = test::init_service(actix_web::App::new().configure(configure_routes));
    }
}
