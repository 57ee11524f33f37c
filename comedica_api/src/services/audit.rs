use crate::{
    auth::CookieSource,
    envelope::Endpoint,
    query::{AuditFilter, Query},
    types::{ApiResponse, AuditRecord},
    Client, Error,
};

impl Client {
    /// Fetches audit trail entries. The action label is left as the backend sent it.
    pub async fn audit_log(
        &self,
        cookies: &dyn CookieSource,
        filter: &AuditFilter,
    ) -> Result<ApiResponse<Vec<AuditRecord>>, Error> {
        self.call(Endpoint::AuditLog, None, filter, filter.common(), cookies)
            .await
    }
}
