mod common;
pub use self::common::{Query, RequestCommon, SortDirection};

mod complaint;
pub use self::complaint::ComplaintFilter;

mod correspondent;
pub use self::correspondent::CorrespondentFilter;

mod transaction;
pub use self::transaction::TransactionFilter;

mod user;
pub use self::user::UserFilter;

mod report;
pub use self::report::{AuditFilter, ReportFilter};
