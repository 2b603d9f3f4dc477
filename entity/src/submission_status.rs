use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};

/// Stored as a plain string so the rows stay readable from SQL.
/// Only the `New -> Read` transition is ever performed.
#[derive(Clone, PartialEq, Eq, Debug, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(10))")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "new")]
    New,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "replied")]
    Replied,
}
