use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submission::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Submission::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Submission::Email).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Submission::Subject)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submission::Message).text().not_null())
                    .col(
                        ColumnDef::new(Submission::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Submission::Status)
                            .string_len(10)
                            .not_null()
                            .default("new"),
                    )
                    .col(ColumnDef::new(Submission::IpAddress).string_len(45))
                    .clone(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_submittedat")
                    .if_not_exists()
                    .table(Submission::Table)
                    .col(Submission::SubmittedAt)
                    .clone(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_submission_status")
                    .if_not_exists()
                    .table(Submission::Table)
                    .col(Submission::Status)
                    .clone(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submission::Table).clone())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    SubmittedAt,
    Status,
    IpAddress,
}
