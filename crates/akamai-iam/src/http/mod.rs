/*
[INPUT]:  HTTP client configuration and IAM endpoints
[OUTPUT]: Typed IAM API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoint groups or changing client behavior
*/

pub mod client;
pub mod error;
pub mod signature;
pub mod transport;

pub mod api_clients;
pub mod blocked_properties;
pub mod cidr;
pub mod credentials;
pub mod groups;
pub mod helper;
pub mod ip_allowlist;
pub mod properties;
pub mod roles;
pub mod support;
pub mod user_lock;
pub mod user_password;
pub mod users;

pub use error::{ApiError, BoxError, IamError, Operation, Result};
pub use signature::{RequestSigner, StaticAuthorization};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

pub use client::{ClientConfig, IamClient};

pub use api_clients::ApiClients;
pub use blocked_properties::BlockedProperties;
pub use cidr::CidrBlocks;
pub use credentials::Credentials;
pub use groups::Groups;
pub use helper::Helper;
pub use ip_allowlist::IpAllowlist;
pub use properties::Properties;
pub use roles::Roles;
pub use support::Support;
pub use user_lock::UserLock;
pub use user_password::UserPassword;
pub use users::Users;
