/*
[INPUT]:  Property ids, group ids, user blocks and move targets
[OUTPUT]: Property listings/details and the users attached to them
[POS]:    HTTP layer - properties endpoints and id/name mapping
[UPDATE]: When adding property endpoints or lookup helpers
*/

use async_trait::async_trait;
use tracing::debug;

use crate::http::{ApiRequest, IamClient, IamError, Operation, Result};
use crate::types::{
    BlockUsersRequest, GetPropertyRequest, ListPropertiesRequest, ListUsersForPropertyRequest,
    MapPropertyIdToNameRequest, MapPropertyNameToIdRequest, MovePropertyRequest, Property, PropertyDetails,
    PropertyUser,
};

const PROPERTIES: &str = "/identity-management/v3/user-admin/properties";

/// Property access within groups
#[async_trait]
pub trait Properties {
    /// GET /identity-management/v3/user-admin/properties
    async fn list_properties(&self, params: ListPropertiesRequest) -> Result<Vec<Property>>;

    /// GET /identity-management/v3/user-admin/properties/{propertyId}?groupId={groupId}
    async fn get_property(&self, params: GetPropertyRequest) -> Result<PropertyDetails>;

    /// GET /identity-management/v3/user-admin/properties/{propertyId}/users
    async fn list_users_for_property(&self, params: ListUsersForPropertyRequest) -> Result<Vec<PropertyUser>>;

    /// Move a property between groups
    ///
    /// PUT /identity-management/v3/user-admin/properties/{propertyId}
    async fn move_property(&self, params: MovePropertyRequest) -> Result<()>;

    /// PUT /identity-management/v3/user-admin/properties/{propertyId}/users/block
    async fn block_users(&self, params: BlockUsersRequest) -> Result<Vec<PropertyUser>>;

    /// Resolve a property id to its name within a group
    async fn map_property_id_to_name(&self, params: MapPropertyIdToNameRequest) -> Result<String>;

    /// Resolve a property name to its id within a group
    async fn map_property_name_to_id(&self, params: MapPropertyNameToIdRequest) -> Result<i64>;
}

#[async_trait]
impl Properties for IamClient {
    async fn list_properties(&self, params: ListPropertiesRequest) -> Result<Vec<Property>> {
        let request = ApiRequest::get(PROPERTIES)
            .query("actions", params.actions)
            .query_opt("groupId", params.group_id);
        self.send_json(Operation::ListProperties, request, &[200]).await
    }

    async fn get_property(&self, params: GetPropertyRequest) -> Result<PropertyDetails> {
        self.validate(Operation::GetProperty, &params)?;

        let request = ApiRequest::get(format!("{PROPERTIES}/{}", params.property_id))
            .query("groupId", params.group_id);
        self.send_json(Operation::GetProperty, request, &[200]).await
    }

    async fn list_users_for_property(&self, params: ListUsersForPropertyRequest) -> Result<Vec<PropertyUser>> {
        self.validate(Operation::ListUsersForProperty, &params)?;

        let request = ApiRequest::get(format!("{PROPERTIES}/{}/users", params.property_id))
            .query_opt("userType", params.user_type);
        self.send_json(Operation::ListUsersForProperty, request, &[200]).await
    }

    async fn move_property(&self, params: MovePropertyRequest) -> Result<()> {
        self.validate(Operation::MoveProperty, &params)?;

        let body = self.body(Operation::MoveProperty, &params.body)?;
        let request = ApiRequest::put(format!("{PROPERTIES}/{}", params.property_id)).json(body);
        self.send_empty(Operation::MoveProperty, request, &[204]).await
    }

    async fn block_users(&self, params: BlockUsersRequest) -> Result<Vec<PropertyUser>> {
        self.validate(Operation::BlockUsers, &params)?;

        let body = self.body(Operation::BlockUsers, &params.users)?;
        let request = ApiRequest::put(format!("{PROPERTIES}/{}/users/block", params.property_id)).json(body);
        self.send_json(Operation::BlockUsers, request, &[200]).await
    }

    async fn map_property_id_to_name(&self, params: MapPropertyIdToNameRequest) -> Result<String> {
        self.validate(Operation::MapPropertyIdToName, &params)?;

        let property = self
            .get_property(GetPropertyRequest {
                property_id: params.property_id,
                group_id: params.group_id,
            })
            .await
            .map_err(|err| IamError::Transport {
                operation: Operation::MapPropertyIdToName,
                source: Box::new(err),
            })?;

        Ok(property.property_name)
    }

    async fn map_property_name_to_id(&self, params: MapPropertyNameToIdRequest) -> Result<i64> {
        self.validate(Operation::MapPropertyNameToId, &params)?;

        let properties = self
            .list_properties(ListPropertiesRequest {
                group_id: Some(params.group_id),
                actions: false,
            })
            .await
            .map_err(|err| IamError::Transport {
                operation: Operation::MapPropertyNameToId,
                source: Box::new(err),
            })?;

        debug!(
            group_id = params.group_id,
            candidates = properties.len(),
            "resolving property name"
        );

        properties
            .into_iter()
            .find(|property| property.property_name == params.property_name)
            .map(|property| property.property_id)
            .ok_or_else(|| IamError::NotFound {
                operation: Operation::MapPropertyNameToId,
                message: format!(
                    "no property with name '{}' in group {}",
                    params.property_name, params.group_id
                ),
            })
    }
}
