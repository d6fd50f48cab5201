//! HTTP middleware: CORS configuration and security headers.

mod cors;
mod security;

pub use cors::cors_layer;
pub use security::security_headers;
