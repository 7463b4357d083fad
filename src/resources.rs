//! Endpoint methods, one file per resource family, all implemented on [`Client`](crate::Client).
//!
//! Every method validates its own arguments first and returns [`Error::Argument`](crate::Error)
//! without touching the transport when they are unusable. It then composes the request with
//! [`crate::request`] and hands it to the client's service handler.

pub mod common;
pub mod fs;
pub mod groups;
pub mod links;
pub mod permissions;
pub mod search;
pub mod users;

pub use fs::*;
pub use groups::*;
pub use links::*;
pub use search::*;
pub use users::*;
