/*
[INPUT]:  None, or a country for state lookups
[OUTPUT]: Reference catalogs used when filling in user profiles
[POS]:    HTTP layer - support catalog endpoints
[UPDATE]: When adding catalog endpoints
*/

use async_trait::async_trait;

use crate::http::{ApiRequest, IamClient, Operation, Result};
use crate::types::{ListStatesRequest, PasswordPolicy, TimeoutPolicy, Timezone};

const COMMON: &str = "/identity-management/v3/user-admin/common";

/// Reference data for user profile fields
#[async_trait]
pub trait Support {
    /// GET /identity-management/v3/user-admin/common/password-policy
    async fn get_password_policy(&self) -> Result<PasswordPolicy>;

    /// GET /identity-management/v3/user-admin/common/countries
    async fn list_countries(&self) -> Result<Vec<String>>;

    /// GET /identity-management/v3/user-admin/common/countries/{country}/states
    async fn list_states(&self, params: ListStatesRequest) -> Result<Vec<String>>;

    /// GET /identity-management/v3/user-admin/common/timezones
    async fn list_time_zones(&self) -> Result<Vec<Timezone>>;

    /// GET /identity-management/v3/user-admin/common/contact-types
    async fn list_contact_types(&self) -> Result<Vec<String>>;

    /// GET /identity-management/v3/user-admin/common/supported-languages
    async fn list_supported_languages(&self) -> Result<Vec<String>>;

    /// Products a user can subscribe to for notifications
    ///
    /// GET /identity-management/v3/user-admin/common/notification-products
    async fn list_products(&self) -> Result<Vec<String>>;

    /// GET /identity-management/v3/user-admin/common/timeout-policies
    async fn list_timeout_policies(&self) -> Result<Vec<TimeoutPolicy>>;
}

impl IamClient {
    async fn get_common<T: serde::de::DeserializeOwned>(&self, operation: Operation, resource: &str) -> Result<T> {
        self.send_json(operation, ApiRequest::get(format!("{COMMON}/{resource}")), &[200])
            .await
    }
}

#[async_trait]
impl Support for IamClient {
    async fn get_password_policy(&self) -> Result<PasswordPolicy> {
        self.get_common(Operation::GetPasswordPolicy, "password-policy").await
    }

    async fn list_countries(&self) -> Result<Vec<String>> {
        self.get_common(Operation::ListCountries, "countries").await
    }

    async fn list_states(&self, params: ListStatesRequest) -> Result<Vec<String>> {
        self.validate(Operation::ListStates, &params)?;

        self.get_common(Operation::ListStates, &format!("countries/{}/states", params.country))
            .await
    }

    async fn list_time_zones(&self) -> Result<Vec<Timezone>> {
        self.get_common(Operation::ListTimeZones, "timezones").await
    }

    async fn list_contact_types(&self) -> Result<Vec<String>> {
        self.get_common(Operation::ListContactTypes, "contact-types").await
    }

    async fn list_supported_languages(&self) -> Result<Vec<String>> {
        self.get_common(Operation::ListSupportedLanguages, "supported-languages")
            .await
    }

    async fn list_products(&self) -> Result<Vec<String>> {
        self.get_common(Operation::ListProducts, "notification-products").await
    }

    async fn list_timeout_policies(&self) -> Result<Vec<TimeoutPolicy>> {
        self.get_common(Operation::ListTimeoutPolicies, "timeout-policies").await
    }
}
