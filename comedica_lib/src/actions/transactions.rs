use comedica_api::types::Transaction;
use comedica_api::{CookieSource, Query, TransactionFilter};

use super::{check_common, messages, Backoffice};
use crate::action::{from_error, normalize, normalize_with, ActionResult};
use crate::error::BackofficeError;
use crate::export::ExportedDocument;
use crate::paging::Paged;

pub const EXPORT_FILE_NAME: &str = "transacciones.xml";
pub const EXPORT_CONTENT_TYPE: &str = "application/xml";

pub(super) fn prepare(filter: Option<&TransactionFilter>) -> Result<TransactionFilter, BackofficeError> {
    let filter = filter.cloned().unwrap_or_default();
    check_common(filter.common())?;
    if let (Some(min), Some(max)) = (filter.monto_minimo, filter.monto_maximo) {
        if min > max {
            return Err(BackofficeError::InvalidInput(format!(
                "el monto mínimo {} es mayor que el máximo {}",
                min, max
            )));
        }
    }
    if let (Some(from), Some(to)) = (filter.fecha_desde, filter.fecha_hasta) {
        if from > to {
            return Err(BackofficeError::InvalidInput(format!(
                "la fecha inicial {} es posterior a la fecha final {}",
                from, to
            )));
        }
    }
    Ok(filter)
}

impl Backoffice {
    pub async fn list_transactions(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&TransactionFilter>,
    ) -> ActionResult<Paged<Transaction>> {
        const LABEL: &str = "list_transactions";
        let filter = match prepare(filter) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::LIST_TRANSACTIONS, e),
        };
        normalize_with(
            LABEL,
            messages::LIST_TRANSACTIONS,
            self.client.list_transactions(cookies, &filter).await,
            |items, blocks| Paged::from_blocks(items, &blocks),
        )
    }

    pub async fn get_transaction(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<Transaction> {
        normalize(
            "get_transaction",
            messages::GET_TRANSACTION,
            self.client.get_transaction(cookies, id).await,
        )
    }

    /// Exports the matching transactions as XML, base64-encoded.
    pub async fn export_transactions_xml(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&TransactionFilter>,
    ) -> ActionResult<ExportedDocument> {
        const LABEL: &str = "export_transactions_xml";
        let filter = match prepare(filter) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::EXPORT_TRANSACTIONS, e),
        };
        match self.client.export_transactions(cookies, &filter).await {
            Ok(payload) => {
                tracing::debug!("exported {} bytes of transactions", payload.bytes.len());
                ActionResult::success(ExportedDocument::from_payload(
                    payload,
                    EXPORT_FILE_NAME,
                    EXPORT_CONTENT_TYPE,
                ))
            }
            Err(e) => from_error(LABEL, messages::EXPORT_TRANSACTIONS, e.into()),
        }
    }
}
