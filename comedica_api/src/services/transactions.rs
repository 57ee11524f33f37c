use crate::{
    auth::CookieSource,
    client::BinaryPayload,
    envelope::Endpoint,
    query::{Query, RequestCommon, TransactionFilter},
    types::{ApiResponse, Transaction},
    Client, Error,
};

impl Client {
    pub async fn list_transactions(
        &self,
        cookies: &dyn CookieSource,
        filter: &TransactionFilter,
    ) -> Result<ApiResponse<Vec<Transaction>>, Error> {
        self.call(
            Endpoint::ListTransactions,
            None,
            filter,
            filter.common(),
            cookies,
        )
        .await
    }

    pub async fn get_transaction(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<Transaction>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::GetTransaction,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    /// Exports the matching transactions as an XML document. Returns the raw
    /// bytes rather than an envelope.
    pub async fn export_transactions(
        &self,
        cookies: &dyn CookieSource,
        filter: &TransactionFilter,
    ) -> Result<BinaryPayload, Error> {
        self.call_binary(Endpoint::ExportTransactions, filter, filter.common(), cookies)
            .await
    }
}
