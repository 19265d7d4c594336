//! Read-only pokedex HTTP service library.

pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod query;
pub mod render;

pub use config::schema::ServerConfig;
pub use data::Pokedex;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
