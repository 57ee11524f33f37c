use comedica_api::types::{Correspondent, CorrespondentInput, UploadSummary};
use comedica_api::{CookieSource, CorrespondentFilter, FilePart, MultipartUpload, Query};

use super::{check_common, messages, sanitize_search, Backoffice};
use crate::action::{from_error, normalize, normalize_with, ActionResult};
use crate::error::BackofficeError;
use crate::paging::Paged;

/// Multipart field the backend reads the spreadsheet from.
const UPLOAD_FIELD: &str = "archivo";
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

fn prepare(filter: Option<&CorrespondentFilter>) -> Result<CorrespondentFilter, BackofficeError> {
    let mut filter = filter.cloned().unwrap_or_default();
    check_common(filter.common())?;
    sanitize_search(&mut filter.nombre)?;
    Ok(filter)
}

impl Backoffice {
    pub async fn list_correspondents(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&CorrespondentFilter>,
    ) -> ActionResult<Paged<Correspondent>> {
        const LABEL: &str = "list_correspondents";
        let filter = match prepare(filter) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::LIST_CORRESPONDENTS, e),
        };
        normalize_with(
            LABEL,
            messages::LIST_CORRESPONDENTS,
            self.client.list_correspondents(cookies, &filter).await,
            |items, blocks| Paged::from_blocks(items, &blocks),
        )
    }

    pub async fn create_correspondent(
        &self,
        cookies: &dyn CookieSource,
        input: &CorrespondentInput,
    ) -> ActionResult<Correspondent> {
        normalize(
            "create_correspondent",
            messages::CREATE_CORRESPONDENT,
            self.client.create_correspondent(cookies, input).await,
        )
    }

    pub async fn update_correspondent(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &CorrespondentInput,
    ) -> ActionResult<Correspondent> {
        normalize(
            "update_correspondent",
            messages::UPDATE_CORRESPONDENT,
            self.client.update_correspondent(cookies, id, input).await,
        )
    }

    pub async fn delete_correspondent(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<bool> {
        normalize_with(
            "delete_correspondent",
            messages::DELETE_CORRESPONDENT,
            self.client.delete_correspondent(cookies, id).await,
            |_, _| true,
        )
    }

    /// Uploads a correspondent spreadsheet for bulk creation.
    pub async fn upload_correspondents(
        &self,
        cookies: &dyn CookieSource,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ActionResult<UploadSummary> {
        const LABEL: &str = "upload_correspondents";
        if bytes.is_empty() {
            return from_error(
                LABEL,
                messages::UPLOAD_CORRESPONDENTS,
                BackofficeError::InvalidInput("el archivo está vacío".to_string()),
            );
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return from_error(
                LABEL,
                messages::UPLOAD_CORRESPONDENTS,
                BackofficeError::InvalidInput(format!(
                    "el archivo excede el máximo de {} bytes",
                    MAX_UPLOAD_BYTES
                )),
            );
        }
        let upload = MultipartUpload::default().with_file(FilePart {
            field: UPLOAD_FIELD.to_string(),
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        });
        normalize(
            LABEL,
            messages::UPLOAD_CORRESPONDENTS,
            self.client.upload_correspondents(cookies, upload).await,
        )
    }
}
