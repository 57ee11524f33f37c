use crate::{
    auth::CookieSource,
    envelope::Endpoint,
    query::{ComplaintFilter, Query, RequestCommon},
    types::{ApiResponse, Complaint, ComplaintInput},
    Client, Error,
};

impl Client {
    /// Fetches the complaints matching the filter.
    pub async fn list_complaints(
        &self,
        cookies: &dyn CookieSource,
        filter: &ComplaintFilter,
    ) -> Result<ApiResponse<Vec<Complaint>>, Error> {
        self.call(Endpoint::ListComplaints, None, filter, filter.common(), cookies)
            .await
    }

    pub async fn get_complaint(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<Complaint>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::GetComplaint,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    pub async fn create_complaint(
        &self,
        cookies: &dyn CookieSource,
        input: &ComplaintInput,
    ) -> Result<ApiResponse<Complaint>, Error> {
        self.call(
            Endpoint::CreateComplaint,
            None,
            input,
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    pub async fn update_complaint(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &ComplaintInput,
    ) -> Result<ApiResponse<Complaint>, Error> {
        let id = id.to_string();
        let common = RequestCommon {
            request_id: Some(id.clone()),
            ..Default::default()
        };
        self.call(Endpoint::UpdateComplaint, Some(&id), input, &common, cookies)
            .await
    }

    pub async fn delete_complaint(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::DeleteComplaint,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }
}
