use crate::{
    auth::CookieSource,
    envelope::Endpoint,
    query::{Query, ReportFilter, TransactionFilter},
    types::{ApiResponse, Complaint, ConsolidatedRow, Transaction},
    Client, Error,
};

impl Client {
    pub async fn consolidated_report(
        &self,
        cookies: &dyn CookieSource,
        filter: &ReportFilter,
    ) -> Result<ApiResponse<Vec<ConsolidatedRow>>, Error> {
        self.call(
            Endpoint::ConsolidatedReport,
            None,
            filter,
            filter.common(),
            cookies,
        )
        .await
    }

    pub async fn transactions_report(
        &self,
        cookies: &dyn CookieSource,
        filter: &TransactionFilter,
    ) -> Result<ApiResponse<Vec<Transaction>>, Error> {
        self.call(
            Endpoint::TransactionsReport,
            None,
            filter,
            filter.common(),
            cookies,
        )
        .await
    }

    pub async fn complaints_report(
        &self,
        cookies: &dyn CookieSource,
        filter: &ReportFilter,
    ) -> Result<ApiResponse<Vec<Complaint>>, Error> {
        self.call(
            Endpoint::ComplaintsReport,
            None,
            filter,
            filter.common(),
            cookies,
        )
        .await
    }
}
