use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gyms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gyms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Gyms::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Gyms::Name).string().not_null())
                    .col(ColumnDef::new(Gyms::Description).text().not_null())
                    .col(ColumnDef::new(Gyms::Address).text().not_null())
                    .col(ColumnDef::new(Gyms::City).string().not_null())
                    .col(ColumnDef::new(Gyms::Area).string().not_null())
                    .col(ColumnDef::new(Gyms::Phone).string().not_null())
                    .col(ColumnDef::new(Gyms::Amenities).json_binary().not_null())
                    .col(ColumnDef::new(Gyms::Hours).string().not_null())
                    .col(ColumnDef::new(Gyms::ImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(Gyms::Status)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Gyms::Capacity).integer().null())
                    .col(
                        ColumnDef::new(Gyms::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Gyms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Gyms::Table, Gyms::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gyms_owner_id")
                    .table(Gyms::Table)
                    .col(Gyms::OwnerId)
                    .to_owned(),
            )
            .await?;

        // The public list filters on status.
        manager
            .create_index(
                Index::create()
                    .name("idx_gyms_status")
                    .table(Gyms::Table)
                    .col(Gyms::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gyms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Gyms {
    Table,
    Id,
    OwnerId,
    Name,
    Description,
    Address,
    City,
    Area,
    Phone,
    Amenities,
    Hours,
    ImageUrl,
    Status,
    Capacity,
    Featured,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
