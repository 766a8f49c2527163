/*
[INPUT]:  API client id plus credential id / update body
[OUTPUT]: Credential records and the one-time secret on create
[POS]:    HTTP layer - API client credentials endpoints
[UPDATE]: When adding credential endpoints or changing the expiry encoding
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{
    ClientId, CreateCredentialRequest, CreateCredentialResponse, Credential, DeactivateCredentialRequest,
    DeactivateCredentialsRequest, DeleteCredentialRequest, GetCredentialRequest, ListCredentialsRequest,
    UpdateCredentialRequest, UpdateCredentialResponse,
};

fn credentials_path(client_id: &ClientId) -> String {
    format!("/identity-management/v3/api-clients/{client_id}/credentials")
}

/// Credential management for an API client
#[async_trait]
pub trait Credentials {
    /// POST /identity-management/v3/api-clients/{clientId}/credentials
    async fn create_credential(&self, params: CreateCredentialRequest) -> Result<CreateCredentialResponse>;

    /// GET /identity-management/v3/api-clients/{clientId}/credentials?actions={actions}
    async fn list_credentials(&self, params: ListCredentialsRequest) -> Result<Vec<Credential>>;

    /// GET /identity-management/v3/api-clients/{clientId}/credentials/{credentialId}
    async fn get_credential(&self, params: GetCredentialRequest) -> Result<Credential>;

    /// PUT /identity-management/v3/api-clients/{clientId}/credentials/{credentialId}
    async fn update_credential(&self, params: UpdateCredentialRequest) -> Result<UpdateCredentialResponse>;

    /// DELETE /identity-management/v3/api-clients/{clientId}/credentials/{credentialId}
    async fn delete_credential(&self, params: DeleteCredentialRequest) -> Result<()>;

    /// POST /identity-management/v3/api-clients/{clientId}/credentials/{credentialId}/deactivate
    async fn deactivate_credential(&self, params: DeactivateCredentialRequest) -> Result<()>;

    /// Deactivate every credential of the API client
    ///
    /// POST /identity-management/v3/api-clients/{clientId}/credentials/deactivate
    async fn deactivate_credentials(&self, params: DeactivateCredentialsRequest) -> Result<()>;
}

#[async_trait]
impl Credentials for IamClient {
    async fn create_credential(&self, params: CreateCredentialRequest) -> Result<CreateCredentialResponse> {
        let request = ApiRequest::post(credentials_path(&params.client_id));
        self.send_json(Operation::CreateCredential, request, &[201]).await
    }

    async fn list_credentials(&self, params: ListCredentialsRequest) -> Result<Vec<Credential>> {
        let request = ApiRequest::get(credentials_path(&params.client_id)).query("actions", params.actions);
        self.send_json(Operation::ListCredentials, request, &[200]).await
    }

    async fn get_credential(&self, params: GetCredentialRequest) -> Result<Credential> {
        self.validate(Operation::GetCredential, &params)?;

        let endpoint = format!("{}/{}", credentials_path(&params.client_id), params.credential_id);
        let request = ApiRequest::get(endpoint).query("actions", params.actions);
        self.send_json(Operation::GetCredential, request, &[200]).await
    }

    async fn update_credential(&self, params: UpdateCredentialRequest) -> Result<UpdateCredentialResponse> {
        self.validate(Operation::UpdateCredential, &params)?;

        let body = self.body(Operation::UpdateCredential, &params.body.to_wire())?;
        let endpoint = format!("{}/{}", credentials_path(&params.client_id), params.credential_id);
        let request = ApiRequest::put(endpoint).json(body);
        self.send_json(Operation::UpdateCredential, request, &[200]).await
    }

    async fn delete_credential(&self, params: DeleteCredentialRequest) -> Result<()> {
        self.validate(Operation::DeleteCredential, &params)?;

        let endpoint = format!("{}/{}", credentials_path(&params.client_id), params.credential_id);
        self.send_empty(Operation::DeleteCredential, ApiRequest::delete(endpoint), &[204])
            .await
    }

    async fn deactivate_credential(&self, params: DeactivateCredentialRequest) -> Result<()> {
        self.validate(Operation::DeactivateCredential, &params)?;

        let endpoint = format!(
            "{}/{}/deactivate",
            credentials_path(&params.client_id),
            params.credential_id
        );
        self.send_empty(Operation::DeactivateCredential, ApiRequest::post(endpoint), &[204])
            .await
    }

    async fn deactivate_credentials(&self, params: DeactivateCredentialsRequest) -> Result<()> {
        let endpoint = format!("{}/deactivate", credentials_path(&params.client_id));
        self.send_empty(Operation::DeactivateCredentials, ApiRequest::post(endpoint), &[204])
            .await
    }
}
