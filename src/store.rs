use entity::prelude::Submission;
use entity::submission;
use entity::submission_status::SubmissionStatus;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set,
};
use thiserror::Error;

/// At most this many rows come back from [`list_recent`] unless the
/// deployment configures its own cap. There is no pagination past it.
pub const DEFAULT_LIST_LIMIT: u64 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("submission {0} does not exist")]
    NotFound(i32),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// A submission as handed to the store, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: i64,
    pub status: SubmissionStatus,
    pub ip_address: Option<String>,
}

/// Appends one row and returns the identifier the store assigned to it.
pub async fn insert(db: &DatabaseConnection, new: NewSubmission) -> Result<i32, DbErr> {
    let row = submission::ActiveModel {
        name: Set(new.name),
        email: Set(new.email),
        subject: Set(new.subject),
        message: Set(new.message),
        submitted_at: Set(new.submitted_at),
        status: Set(new.status),
        ip_address: Set(new.ip_address),
        ..Default::default()
    };

    let res = Submission::insert(row).exec(db).await?;

    Ok(res.last_insert_id)
}

/// Patches the status of exactly one row to `read`. The transition is
/// one-way and idempotent; marking an already-read row succeeds.
pub async fn mark_as_read(db: &DatabaseConnection, id: i32) -> Result<(), StoreError> {
    let row = Submission::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(id))?;

    let mut row: submission::ActiveModel = row.into();
    row.status = Set(SubmissionStatus::Read);
    row.update(db).await?;

    Ok(())
}

/// Up to `limit` rows, newest first. Point-in-time snapshot; callers cannot
/// retrieve rows older than the cap through this operation.
pub async fn list_recent(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<submission::Model>, DbErr> {
    Submission::find()
        .order_by_desc(submission::Column::SubmittedAt)
        .limit(limit)
        .all(db)
        .await
}
