use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DataRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DataRequests::HubId).uuid().not_null())
                    .col(
                        ColumnDef::new(DataRequests::SubjectName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataRequests::SubjectEmail)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataRequests::RequestType)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataRequests::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(DataRequests::CompletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(DataRequests::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(DataRequests::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(DataRequests::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(DataRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataRequests::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gdpr_datarequest_hub_deleted")
                    .table(DataRequests::Table)
                    .col(DataRequests::HubId)
                    .col(DataRequests::IsDeleted)
                    .to_owned(),
            )
            .await?;

        // AIツールは作成日の降順で一覧する
        manager
            .create_index(
                Index::create()
                    .name("idx_gdpr_datarequest_created_at")
                    .table(DataRequests::Table)
                    .col(DataRequests::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DataRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DataRequests {
    #[iden = "gdpr_datarequest"]
    Table,
    Id,
    HubId,
    SubjectName,
    SubjectEmail,
    RequestType,
    Status,
    CompletedAt,
    Notes,
    IsDeleted,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
