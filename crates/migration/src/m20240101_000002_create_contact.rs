//! Create `contact`: append-only log of contact-form submissions with a
//! store-assigned ascending id and creation timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(big_integer(Contact::Id).primary_key().auto_increment())
                    .col(text(Contact::Name).not_null())
                    .col(ColumnDef::new(Contact::Company).text().null())
                    .col(text(Contact::Email).not_null())
                    .col(text(Contact::ProjectType).not_null())
                    .col(text(Contact::Message).not_null())
                    .col(ColumnDef::new(Contact::Timeline).text().null())
                    .col(timestamp_with_time_zone(Contact::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Contact { Table, Id, Name, Company, Email, ProjectType, Message, Timeline, CreatedAt }
