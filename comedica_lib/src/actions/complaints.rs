use comedica_api::types::{Complaint, ComplaintInput};
use comedica_api::{ComplaintFilter, CookieSource, Query};

use super::{check_common, messages, sanitize_search, Backoffice};
use crate::action::{from_error, normalize, normalize_with, ActionResult};
use crate::error::BackofficeError;

fn prepare(filter: Option<&ComplaintFilter>) -> Result<ComplaintFilter, BackofficeError> {
    let mut filter = filter.cloned().unwrap_or_default();
    check_common(filter.common())?;
    sanitize_search(&mut filter.busqueda)?;
    Ok(filter)
}

impl Backoffice {
    /// Lists complaints. Without a filter the endpoint's default paging applies.
    pub async fn list_complaints(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&ComplaintFilter>,
    ) -> ActionResult<Vec<Complaint>> {
        const LABEL: &str = "list_complaints";
        let filter = match prepare(filter) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::LIST_COMPLAINTS, e),
        };
        normalize(
            LABEL,
            messages::LIST_COMPLAINTS,
            self.client.list_complaints(cookies, &filter).await,
        )
    }

    pub async fn get_complaint(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<Complaint> {
        normalize(
            "get_complaint",
            messages::GET_COMPLAINT,
            self.client.get_complaint(cookies, id).await,
        )
    }

    pub async fn create_complaint(
        &self,
        cookies: &dyn CookieSource,
        input: &ComplaintInput,
    ) -> ActionResult<Complaint> {
        normalize(
            "create_complaint",
            messages::CREATE_COMPLAINT,
            self.client.create_complaint(cookies, input).await,
        )
    }

    pub async fn update_complaint(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &ComplaintInput,
    ) -> ActionResult<Complaint> {
        normalize(
            "update_complaint",
            messages::UPDATE_COMPLAINT,
            self.client.update_complaint(cookies, id, input).await,
        )
    }

    pub async fn delete_complaint(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<bool> {
        normalize_with(
            "delete_complaint",
            messages::DELETE_COMPLAINT,
            self.client.delete_complaint(cookies, id).await,
            |_, _| true,
        )
    }
}
