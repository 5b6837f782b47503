//! Wire types for the client endpoint.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
