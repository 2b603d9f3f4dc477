use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::submission_status::SubmissionStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Epoch milliseconds, set server-side at insert time.
    pub submitted_at: i64,
    pub status: SubmissionStatus,
    pub ip_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
