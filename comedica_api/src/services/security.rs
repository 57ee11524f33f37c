use crate::{
    auth::CookieSource,
    envelope::Endpoint,
    query::RequestCommon,
    types::{ApiResponse, GroupInput, Role, RoleAssignment, SecurityGroup},
    Client, Error,
};

impl Client {
    pub async fn list_groups(
        &self,
        cookies: &dyn CookieSource,
    ) -> Result<ApiResponse<Vec<SecurityGroup>>, Error> {
        self.call(Endpoint::ListGroups, None, (), &RequestCommon::default(), cookies)
            .await
    }

    pub async fn create_group(
        &self,
        cookies: &dyn CookieSource,
        input: &GroupInput,
    ) -> Result<ApiResponse<SecurityGroup>, Error> {
        self.call(
            Endpoint::CreateGroup,
            None,
            input,
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    pub async fn update_group(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &GroupInput,
    ) -> Result<ApiResponse<SecurityGroup>, Error> {
        let id = id.to_string();
        let common = RequestCommon {
            request_id: Some(id.clone()),
            ..Default::default()
        };
        self.call(Endpoint::UpdateGroup, Some(&id), input, &common, cookies)
            .await
    }

    pub async fn delete_group(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::DeleteGroup,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    pub async fn list_roles(&self, cookies: &dyn CookieSource) -> Result<ApiResponse<Vec<Role>>, Error> {
        self.call(Endpoint::ListRoles, None, (), &RequestCommon::default(), cookies)
            .await
    }

    /// Replaces the roles granted to a group.
    pub async fn assign_group_roles(
        &self,
        cookies: &dyn CookieSource,
        group_id: i64,
        assignment: &RoleAssignment,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        let id = group_id.to_string();
        self.call(
            Endpoint::AssignGroupRoles,
            Some(&id),
            assignment,
            &RequestCommon::default(),
            cookies,
        )
        .await
    }
}
