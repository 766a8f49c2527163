/*
[INPUT]:  IAM API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization and validation support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod api_clients;
pub mod cidr;
pub mod credentials;
pub mod enums;
pub mod groups;
pub mod helper;
pub mod models;
pub mod properties;
pub mod roles;
pub mod support;
pub mod users;

pub use api_clients::*;
pub use cidr::*;
pub use credentials::*;
pub use enums::*;
pub use groups::*;
pub use helper::*;
pub use models::ClientId;
pub use properties::*;
pub use roles::*;
pub use support::*;
pub use users::*;
