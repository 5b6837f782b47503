//! HTTP transport for the game client.
//!
//! The client posts every request to `/login.php` as JSON and expects a JSON
//! body with status 200 in return, including for errors.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ClientError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
