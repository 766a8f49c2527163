/*
[INPUT]:  None (account-wide toggle)
[OUTPUT]: IP allowlist enforcement state
[POS]:    HTTP layer - IP allowlist toggle endpoints
[UPDATE]: When the allowlist toggle API changes
*/

use async_trait::async_trait;

use crate::http::cidr::ALLOWLIST;
use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::IpAllowlistStatus;

/// Account-wide IP allowlist enforcement
#[async_trait]
pub trait IpAllowlist {
    /// POST /identity-management/v3/user-admin/ip-acl/allowlist/disable
    async fn disable_ip_allowlist(&self) -> Result<()>;

    /// POST /identity-management/v3/user-admin/ip-acl/allowlist/enable
    async fn enable_ip_allowlist(&self) -> Result<()>;

    /// GET /identity-management/v3/user-admin/ip-acl/allowlist/status
    async fn get_ip_allowlist_status(&self) -> Result<IpAllowlistStatus>;
}

#[async_trait]
impl IpAllowlist for IamClient {
    async fn disable_ip_allowlist(&self) -> Result<()> {
        let request = ApiRequest::post(format!("{ALLOWLIST}/disable"));
        self.send_empty(Operation::DisableIpAllowlist, request, &[204]).await
    }

    async fn enable_ip_allowlist(&self) -> Result<()> {
        let request = ApiRequest::post(format!("{ALLOWLIST}/enable"));
        self.send_empty(Operation::EnableIpAllowlist, request, &[204]).await
    }

    async fn get_ip_allowlist_status(&self) -> Result<IpAllowlistStatus> {
        let request = ApiRequest::get(format!("{ALLOWLIST}/status"));
        self.send_json(Operation::GetIpAllowlistStatus, request, &[200]).await
    }
}
