use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ConsentRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ConsentRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ConsentRecords::HubId).uuid().not_null())
                    .col(
                        ColumnDef::new(ConsentRecords::SubjectName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsentRecords::SubjectEmail)
                            .string_len(254)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsentRecords::Purpose)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsentRecords::Consented)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ConsentRecords::ConsentDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(ConsentRecords::WithdrawalDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(ConsentRecords::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ConsentRecords::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(ConsentRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ConsentRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // テナント + 論理削除での絞り込み用
        manager
            .create_index(
                Index::create()
                    .name("idx_gdpr_consentrecord_hub_deleted")
                    .table(ConsentRecords::Table)
                    .col(ConsentRecords::HubId)
                    .col(ConsentRecords::IsDeleted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ConsentRecords::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ConsentRecords {
    #[iden = "gdpr_consentrecord"]
    Table,
    Id,
    HubId,
    SubjectName,
    SubjectEmail,
    Purpose,
    Consented,
    ConsentDate,
    WithdrawalDate,
    IsDeleted,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
