use chrono::NaiveDate;
use comedica_api::types::{Complaint, ConsolidatedRow, Transaction};
use comedica_api::{CookieSource, Query, ReportFilter, TransactionFilter};

use super::{check_common, messages, Backoffice};
use crate::action::{from_error, normalize_with, ActionResult};
use crate::dates::DateRange;
use crate::error::BackofficeError;
use crate::paging::Paged;

/// Resolves an optional preset into the bounds that override the filter's.
pub(super) fn resolve_range(
    range: Option<DateRange>,
) -> Result<Option<(NaiveDate, NaiveDate)>, BackofficeError> {
    range.map(DateRange::resolve_today).transpose()
}

fn prepare(
    filter: Option<&ReportFilter>,
    range: Option<DateRange>,
) -> Result<ReportFilter, BackofficeError> {
    let mut filter = filter.cloned().unwrap_or_default();
    check_common(filter.common())?;
    if let Some((from, to)) = resolve_range(range)? {
        filter = filter.with_date_range(from, to);
    }
    Ok(filter)
}

impl Backoffice {
    /// Consolidated totals per correspondent and period.
    pub async fn consolidated_report(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&ReportFilter>,
        range: Option<DateRange>,
    ) -> ActionResult<Paged<ConsolidatedRow>> {
        const LABEL: &str = "consolidated_report";
        let filter = match prepare(filter, range) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::CONSOLIDATED_REPORT, e),
        };
        normalize_with(
            LABEL,
            messages::CONSOLIDATED_REPORT,
            self.client.consolidated_report(cookies, &filter).await,
            |items, blocks| Paged::from_blocks(items, &blocks),
        )
    }

    pub async fn transactions_report(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&TransactionFilter>,
        range: Option<DateRange>,
    ) -> ActionResult<Paged<Transaction>> {
        const LABEL: &str = "transactions_report";
        let prepared = resolve_range(range).and_then(|bounds| {
            let mut filter = filter.cloned().unwrap_or_default();
            if let Some((from, to)) = bounds {
                filter = filter.with_date_range(from, to);
            }
            super::transactions::prepare(Some(&filter))
        });
        let filter = match prepared {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::TRANSACTIONS_REPORT, e),
        };
        normalize_with(
            LABEL,
            messages::TRANSACTIONS_REPORT,
            self.client.transactions_report(cookies, &filter).await,
            |items, blocks| Paged::from_blocks(items, &blocks),
        )
    }

    pub async fn complaints_report(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&ReportFilter>,
        range: Option<DateRange>,
    ) -> ActionResult<Paged<Complaint>> {
        const LABEL: &str = "complaints_report";
        let filter = match prepare(filter, range) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::COMPLAINTS_REPORT, e),
        };
        normalize_with(
            LABEL,
            messages::COMPLAINTS_REPORT,
            self.client.complaints_report(cookies, &filter).await,
            |items, blocks| Paged::from_blocks(items, &blocks),
        )
    }
}
