use comedica_api::types::CatalogItem;
use comedica_api::CookieSource;

use super::{messages, Backoffice};
use crate::action::{from_error, normalize, ActionResult};
use crate::validation::validate_catalog_kind;

impl Backoffice {
    /// Entries of a lookup catalog such as `tipo-reclamo` or `estado-transaccion`.
    pub async fn list_catalog(&self, cookies: &dyn CookieSource, kind: &str) -> ActionResult<Vec<CatalogItem>> {
        const LABEL: &str = "list_catalog";
        let kind = match validate_catalog_kind(kind) {
            Ok(k) => k,
            Err(e) => return from_error(LABEL, messages::LIST_CATALOG, e),
        };
        normalize(
            LABEL,
            messages::LIST_CATALOG,
            self.client.list_catalog(cookies, &kind).await,
        )
    }
}
