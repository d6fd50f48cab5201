use axum::Router;

use domain_categories::{CategoryService, SqliteCategoryRepository};
use domain_products::{ProductService, SqliteProductRepository};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Services are constructed here with explicit dependencies: each domain
/// gets its repository over a clone of the shared connection pool, wired
/// into its service and router. No ambient container, no globals.
pub fn routes(state: &crate::state::AppState) -> Router {
    let product_service =
        ProductService::new(SqliteProductRepository::new(state.db.clone()));
    let category_service =
        CategoryService::new(SqliteCategoryRepository::new(state.db.clone()));

    Router::new()
        .nest("/products", domain_products::handlers::router(product_service))
        .nest(
            "/categories",
            domain_categories::handlers::router(category_service),
        )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`. The /ready endpoint checks the database
/// connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
