//! Plain records exchanged with the provider.
//!
//! Response field names follow the provider's casing (a mix of snake_case and camelCase,
//! depending on the endpoint) and are mapped onto Rust names with serde attributes. Every
//! record is flat; shapes that extend another shape repeat its fields.

pub mod fs;
pub mod group;
pub mod link;
pub mod permission;
pub mod search;
pub mod user;

pub use fs::*;
pub use group::*;
pub use link::*;
pub use permission::*;
pub use search::*;
pub use user::*;
