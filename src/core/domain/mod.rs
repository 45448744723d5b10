//! Domain types.

mod connection;
mod details;
mod target;

pub use connection::Connection;
pub use details::AllDetails;
pub use target::Target;
