use crate::{
    auth::CookieSource,
    client::MultipartUpload,
    envelope::Endpoint,
    query::{CorrespondentFilter, Query, RequestCommon},
    types::{ApiResponse, Correspondent, CorrespondentInput, UploadSummary},
    Client, Error,
};

impl Client {
    pub async fn list_correspondents(
        &self,
        cookies: &dyn CookieSource,
        filter: &CorrespondentFilter,
    ) -> Result<ApiResponse<Vec<Correspondent>>, Error> {
        self.call(
            Endpoint::ListCorrespondents,
            None,
            filter,
            filter.common(),
            cookies,
        )
        .await
    }

    pub async fn create_correspondent(
        &self,
        cookies: &dyn CookieSource,
        input: &CorrespondentInput,
    ) -> Result<ApiResponse<Correspondent>, Error> {
        self.call(
            Endpoint::CreateCorrespondent,
            None,
            input,
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    pub async fn update_correspondent(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &CorrespondentInput,
    ) -> Result<ApiResponse<Correspondent>, Error> {
        let id = id.to_string();
        let common = RequestCommon {
            request_id: Some(id.clone()),
            ..Default::default()
        };
        self.call(Endpoint::UpdateCorrespondent, Some(&id), input, &common, cookies)
            .await
    }

    pub async fn delete_correspondent(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
    ) -> Result<ApiResponse<serde_json::Value>, Error> {
        let id = id.to_string();
        self.call(
            Endpoint::DeleteCorrespondent,
            Some(&id),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }

    /// Uploads a correspondents file as multipart form data.
    pub async fn upload_correspondents(
        &self,
        cookies: &dyn CookieSource,
        upload: MultipartUpload,
    ) -> Result<ApiResponse<UploadSummary>, Error> {
        self.call_multipart(Endpoint::UploadCorrespondents, upload, cookies)
            .await
    }
}
