use crate::{
    auth::CookieSource,
    envelope::Endpoint,
    query::RequestCommon,
    types::{ApiResponse, CatalogItem},
    Client, Error,
};

impl Client {
    /// Fetches a catalog by its kind (e.g. `tipos-reclamo`, `estados`).
    pub async fn list_catalog(
        &self,
        cookies: &dyn CookieSource,
        kind: &str,
    ) -> Result<ApiResponse<Vec<CatalogItem>>, Error> {
        self.call(
            Endpoint::ListCatalog,
            Some(kind),
            (),
            &RequestCommon::default(),
            cookies,
        )
        .await
    }
}
