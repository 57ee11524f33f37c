use comedica_api::{AuditFilter, CookieSource, Query};

use super::reports::resolve_range;
use super::{check_common, messages, sanitize_search, Backoffice};
use crate::action::{from_error, normalize_with, ActionResult};
use crate::dates::DateRange;
use crate::error::BackofficeError;
use crate::mapping::AuditEntry;
use crate::paging::Paged;

fn prepare(filter: Option<&AuditFilter>, range: Option<DateRange>) -> Result<AuditFilter, BackofficeError> {
    let mut filter = filter.cloned().unwrap_or_default();
    check_common(filter.common())?;
    sanitize_search(&mut filter.usuario)?;
    if let Some((from, to)) = resolve_range(range)? {
        filter = filter.with_date_range(from, to);
    }
    Ok(filter)
}

impl Backoffice {
    /// Audit trail, with each entry's action label resolved through its fallbacks.
    pub async fn audit_log(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&AuditFilter>,
        range: Option<DateRange>,
    ) -> ActionResult<Paged<AuditEntry>> {
        const LABEL: &str = "audit_log";
        let filter = match prepare(filter, range) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::AUDIT_LOG, e),
        };
        normalize_with(
            LABEL,
            messages::AUDIT_LOG,
            self.client.audit_log(cookies, &filter).await,
            |records, blocks| {
                let entries = records.into_iter().map(AuditEntry::from).collect();
                Paged::from_blocks(entries, &blocks)
            },
        )
    }
}
