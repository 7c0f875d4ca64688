use entity::shows;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(shows::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(shows::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(shows::Column::Title).text().not_null())
                    .col(
                        ColumnDef::new(shows::Column::Description)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(shows::Column::Category).text().not_null())
                    .col(ColumnDef::new(shows::Column::Image).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(shows::Entity).to_owned())
            .await
    }
}
