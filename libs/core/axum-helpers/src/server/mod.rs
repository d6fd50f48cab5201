//! Server setup: router assembly, health endpoints, graceful shutdown.

mod app;
mod health;
mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{
    health_router, run_health_checks, HealthCheckFuture, HealthResponse,
};
pub use shutdown::{coordinated_shutdown, shutdown_signal, ShutdownCoordinator};
