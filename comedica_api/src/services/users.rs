use crate::{
    auth::CookieSource,
    envelope::Endpoint,
    query::{Query, RequestCommon, UserFilter},
    types::{ApiResponse, User, UserInput},
    Client, Error,
};

impl Client {
    pub async fn list_users(
        &self,
        cookies: &dyn CookieSource,
        filter: &UserFilter,
    ) -> Result<ApiResponse<Vec<User>>, Error> {
        self.call(Endpoint::ListUsers, None, filter, filter.common(), cookies)
            .await
    }

    pub async fn create_user(
        &self,
        cookies: &dyn CookieSource,
        input: &UserInput,
    ) -> Result<ApiResponse<User>, Error> {
        self.call(
            Endpoint::CreateUser,
            None,
            input,
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    pub async fn update_user(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &UserInput,
    ) -> Result<ApiResponse<User>, Error> {
        let id = id.to_string();
        let common = RequestCommon {
            request_id: Some(id.clone()),
            ..Default::default()
        };
        self.call(Endpoint::UpdateUser, Some(&id), input, &common, cookies)
            .await
    }

    pub async fn delete_user(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::DeleteUser,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    /// Asks the backend to issue a new temporary password for the user.
    pub async fn reset_user_password(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::ResetUserPassword,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }
}
