pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServerOptions;
pub use routes::create_router;
pub use state::AppState;
