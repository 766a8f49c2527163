/*
[INPUT]:  CIDR block bodies and ids
[OUTPUT]: CIDR allowlist entries
[POS]:    HTTP layer - CIDR allowlist endpoints
[UPDATE]: When adding allowlist endpoints
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{
    CidrBlock, CreateCidrBlockRequest, DeleteCidrBlockRequest, GetCidrBlockRequest, ListCidrBlocksRequest,
    UpdateCidrBlockRequest, ValidateCidrBlockRequest,
};

pub(crate) const ALLOWLIST: &str = "/identity-management/v3/user-admin/ip-acl/allowlist";

/// CIDR blocks on the account IP allowlist
#[async_trait]
pub trait CidrBlocks {
    /// GET /identity-management/v3/user-admin/ip-acl/allowlist?actions={actions}
    async fn list_cidr_blocks(&self, params: ListCidrBlocksRequest) -> Result<Vec<CidrBlock>>;

    /// POST /identity-management/v3/user-admin/ip-acl/allowlist
    async fn create_cidr_block(&self, params: CreateCidrBlockRequest) -> Result<CidrBlock>;

    /// GET /identity-management/v3/user-admin/ip-acl/allowlist/{cidrBlockId}
    async fn get_cidr_block(&self, params: GetCidrBlockRequest) -> Result<CidrBlock>;

    /// PUT /identity-management/v3/user-admin/ip-acl/allowlist/{cidrBlockId}
    async fn update_cidr_block(&self, params: UpdateCidrBlockRequest) -> Result<CidrBlock>;

    /// DELETE /identity-management/v3/user-admin/ip-acl/allowlist/{cidrBlockId}
    async fn delete_cidr_block(&self, params: DeleteCidrBlockRequest) -> Result<()>;

    /// Server-side syntax check of a CIDR block
    ///
    /// GET /identity-management/v3/user-admin/ip-acl/allowlist/validate?cidrblock={cidrBlock}
    async fn validate_cidr_block(&self, params: ValidateCidrBlockRequest) -> Result<()>;
}

#[async_trait]
impl CidrBlocks for IamClient {
    async fn list_cidr_blocks(&self, params: ListCidrBlocksRequest) -> Result<Vec<CidrBlock>> {
        let request = ApiRequest::get(ALLOWLIST).query("actions", params.actions);
        self.send_json(Operation::ListCidrBlocks, request, &[200]).await
    }

    async fn create_cidr_block(&self, params: CreateCidrBlockRequest) -> Result<CidrBlock> {
        self.validate(Operation::CreateCidrBlock, &params)?;

        let body = self.body(Operation::CreateCidrBlock, &params)?;
        let request = ApiRequest::post(ALLOWLIST).json(body);
        self.send_json(Operation::CreateCidrBlock, request, &[201]).await
    }

    async fn get_cidr_block(&self, params: GetCidrBlockRequest) -> Result<CidrBlock> {
        self.validate(Operation::GetCidrBlock, &params)?;

        let request = ApiRequest::get(format!("{ALLOWLIST}/{}", params.cidr_block_id))
            .query("actions", params.actions);
        self.send_json(Operation::GetCidrBlock, request, &[200]).await
    }

    async fn update_cidr_block(&self, params: UpdateCidrBlockRequest) -> Result<CidrBlock> {
        self.validate(Operation::UpdateCidrBlock, &params)?;

        let body = self.body(Operation::UpdateCidrBlock, &params.body)?;
        let request = ApiRequest::put(format!("{ALLOWLIST}/{}", params.cidr_block_id)).json(body);
        self.send_json(Operation::UpdateCidrBlock, request, &[200]).await
    }

    async fn delete_cidr_block(&self, params: DeleteCidrBlockRequest) -> Result<()> {
        self.validate(Operation::DeleteCidrBlock, &params)?;

        let request = ApiRequest::delete(format!("{ALLOWLIST}/{}", params.cidr_block_id));
        self.send_empty(Operation::DeleteCidrBlock, request, &[204]).await
    }

    async fn validate_cidr_block(&self, params: ValidateCidrBlockRequest) -> Result<()> {
        self.validate(Operation::ValidateCidrBlock, &params)?;

        let request = ApiRequest::get(format!("{ALLOWLIST}/validate")).query("cidrblock", &params.cidr_block);
        self.send_empty(Operation::ValidateCidrBlock, request, &[204]).await
    }
}
