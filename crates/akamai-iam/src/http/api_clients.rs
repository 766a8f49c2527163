/*
[INPUT]:  API client identifiers and create/update bodies
[OUTPUT]: API client records, account switch keys
[POS]:    HTTP layer - API clients endpoints
[UPDATE]: When adding API client endpoints or changing query parameters
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{
    AccountSwitchKey, ApiClient, ApiClientDetails, CreateApiClientRequest, CreateApiClientResponse,
    DeleteApiClientRequest, GetApiClientRequest, ListAccountSwitchKeysRequest, ListApiClientsItem,
    ListApiClientsRequest, LockApiClientRequest, UnlockApiClientRequest, UpdateApiClientRequest,
};

const API_CLIENTS: &str = "/identity-management/v3/api-clients";

/// API client management
#[async_trait]
pub trait ApiClients {
    /// Lock an API client
    ///
    /// PUT /identity-management/v3/api-clients/{clientId}/lock
    async fn lock_api_client(&self, params: LockApiClientRequest) -> Result<ApiClient>;

    /// Unlock an API client
    ///
    /// PUT /identity-management/v3/api-clients/{clientId}/unlock
    async fn unlock_api_client(&self, params: UnlockApiClientRequest) -> Result<ApiClient>;

    /// GET /identity-management/v3/api-clients?actions={actions}
    async fn list_api_clients(&self, params: ListApiClientsRequest) -> Result<Vec<ListApiClientsItem>>;

    /// GET /identity-management/v3/api-clients/{clientId}
    async fn get_api_client(&self, params: GetApiClientRequest) -> Result<ApiClientDetails>;

    /// POST /identity-management/v3/api-clients
    async fn create_api_client(&self, params: CreateApiClientRequest) -> Result<CreateApiClientResponse>;

    /// PUT /identity-management/v3/api-clients/{clientId}
    async fn update_api_client(&self, params: UpdateApiClientRequest) -> Result<ApiClientDetails>;

    /// DELETE /identity-management/v3/api-clients/{clientId}
    async fn delete_api_client(&self, params: DeleteApiClientRequest) -> Result<()>;

    /// Account switch keys available to an API client
    ///
    /// GET /identity-management/v3/api-clients/{clientId}/account-switch-keys?search={search}
    async fn list_account_switch_keys(
        &self,
        params: ListAccountSwitchKeysRequest,
    ) -> Result<Vec<AccountSwitchKey>>;
}

#[async_trait]
impl ApiClients for IamClient {
    async fn lock_api_client(&self, params: LockApiClientRequest) -> Result<ApiClient> {
        let endpoint = format!("{API_CLIENTS}/{}/lock", params.client_id);
        self.send_json(Operation::LockApiClient, ApiRequest::put(endpoint), &[200])
            .await
    }

    async fn unlock_api_client(&self, params: UnlockApiClientRequest) -> Result<ApiClient> {
        self.validate(Operation::UnlockApiClient, &params)?;

        let endpoint = format!("{API_CLIENTS}/{}/unlock", params.client_id);
        self.send_json(Operation::UnlockApiClient, ApiRequest::put(endpoint), &[200])
            .await
    }

    async fn list_api_clients(&self, params: ListApiClientsRequest) -> Result<Vec<ListApiClientsItem>> {
        let request = ApiRequest::get(API_CLIENTS).query("actions", params.actions);
        self.send_json(Operation::ListApiClients, request, &[200]).await
    }

    async fn get_api_client(&self, params: GetApiClientRequest) -> Result<ApiClientDetails> {
        let request = ApiRequest::get(format!("{API_CLIENTS}/{}", params.client_id))
            .query("actions", params.actions)
            .query("apiAccess", params.api_access)
            .query("credentials", params.credentials)
            .query("groupAccess", params.group_access)
            .query("ipAcl", params.ip_acl);
        self.send_json(Operation::GetApiClient, request, &[200]).await
    }

    async fn create_api_client(&self, params: CreateApiClientRequest) -> Result<CreateApiClientResponse> {
        self.validate(Operation::CreateApiClient, &params)?;

        let body = self.body(Operation::CreateApiClient, &params)?;
        let request = ApiRequest::post(API_CLIENTS).json(body);
        self.send_json(Operation::CreateApiClient, request, &[201]).await
    }

    async fn update_api_client(&self, params: UpdateApiClientRequest) -> Result<ApiClientDetails> {
        self.validate(Operation::UpdateApiClient, &params)?;

        let body = self.body(Operation::UpdateApiClient, &params.body)?;
        let request = ApiRequest::put(format!("{API_CLIENTS}/{}", params.client_id)).json(body);
        self.send_json(Operation::UpdateApiClient, request, &[200]).await
    }

    async fn delete_api_client(&self, params: DeleteApiClientRequest) -> Result<()> {
        let request = ApiRequest::delete(format!("{API_CLIENTS}/{}", params.client_id));
        self.send_empty(Operation::DeleteApiClient, request, &[204]).await
    }

    async fn list_account_switch_keys(
        &self,
        params: ListAccountSwitchKeysRequest,
    ) -> Result<Vec<AccountSwitchKey>> {
        let search = params.search.filter(|search| !search.is_empty());
        let request = ApiRequest::get(format!(
            "{API_CLIENTS}/{}/account-switch-keys",
            params.client_id
        ))
        .query_opt("search", search);
        self.send_json(Operation::ListAccountSwitchKeys, request, &[200]).await
    }
}
