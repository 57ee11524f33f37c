mod response;
pub use self::response::{ApiResponse, Metadata, Pagination, ResultStatus};

mod auth;
pub use self::auth::{
    Credentials, LoginData, PasswordChange, SoftTokenChallenge, SoftTokenValidation, UserProfile,
};

mod complaint;
pub use self::complaint::{Complaint, ComplaintInput};

mod correspondent;
pub use self::correspondent::{Correspondent, CorrespondentInput, UploadSummary};

mod transaction;
pub use self::transaction::Transaction;

mod user;
pub use self::user::{User, UserInput};

mod security;
pub use self::security::{GroupInput, Role, RoleAssignment, SecurityGroup};

mod report;
pub use self::report::{AuditRecord, CatalogItem, ConsolidatedRow};
