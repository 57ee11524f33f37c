use crate::{
    auth::{CookieSource, NoCookies},
    envelope::Endpoint,
    query::RequestCommon,
    types::{
        ApiResponse, Credentials, LoginData, PasswordChange, SoftTokenChallenge,
        SoftTokenValidation,
    },
    Client, Error,
};

impl Client {
    /// Submits credentials. Never sends an `Authorization` header.
    pub async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<LoginData>, Error> {
        self.call(
            Endpoint::Login,
            None,
            credentials,
            &RequestCommon::default(),
            &NoCookies,
        )
        .await
    }

    pub async fn logout(&self, cookies: &dyn CookieSource) -> Result<ApiResponse<serde_json::Value>, Error> {
        self.call(Endpoint::Logout, None, (), &RequestCommon::default(), cookies)
            .await
    }

    pub async fn change_password(
        &self,
        cookies: &dyn CookieSource,
        change: &PasswordChange,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        self.call(
            Endpoint::ChangePassword,
            None,
            change,
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    /// Requests a soft token for `usuario`. Sent form-urlencoded.
    pub async fn request_soft_token(
        &self,
        cookies: &dyn CookieSource,
        usuario: &str,
    ) -> Result<ApiResponse<SoftTokenChallenge>, Error> {
        self.call_form(
            Endpoint::RequestSoftToken,
            vec![("usuario".to_string(), usuario.to_string())],
            cookies,
        )
        .await
    }

    /// Validates the soft token the user typed against the challenge reference.
    pub async fn validate_soft_token(
        &self,
        cookies: &dyn CookieSource,
        referencia: &str,
        token: &str,
    ) -> Result<ApiResponse<SoftTokenValidation>, Error> {
        self.call_form(
            Endpoint::ValidateSoftToken,
            vec![
                ("referencia".to_string(), referencia.to_string()),
                ("token".to_string(), token.to_string()),
            ],
            cookies,
        )
        .await
    }
}
