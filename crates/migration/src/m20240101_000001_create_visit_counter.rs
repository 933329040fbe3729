//! Create `visit_counter`: a single-row table holding the site visit total.
//! The fixed-id row itself is seeded at startup, not here, so re-running the
//! migration can never reset the count.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitCounter::Table)
                    .if_not_exists()
                    .col(integer(VisitCounter::Id).primary_key())
                    .col(big_integer(VisitCounter::Visits).not_null().default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(VisitCounter::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum VisitCounter { Table, Id, Visits }
