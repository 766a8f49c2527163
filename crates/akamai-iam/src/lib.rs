/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Akamai IAM client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;
pub mod validation;

pub use crate::config::IamConfig;
pub use http::error::UNPARSEABLE_ERROR_TITLE;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiRequest,
    ApiResponse,
    ClientConfig,
    IamClient,
    IamError,
    Operation,
    ReqwestTransport,
    RequestSigner,
    Result,
    StaticAuthorization,
    Transport,
};

// Operation traits, so `use akamai_iam::prelude::*` brings every call into scope
pub mod prelude {
    pub use crate::http::{
        ApiClients,
        BlockedProperties,
        CidrBlocks,
        Credentials,
        Groups,
        Helper,
        IpAllowlist,
        Properties,
        Roles,
        Support,
        UserLock,
        UserPassword,
        Users,
    };
}

// Re-export all types
pub use types::*;
