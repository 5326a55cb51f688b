//! Create `contact` table.
//!
//! One row per person; the integer id is assigned by the database.
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
                    .col(pk_auto(Contact::Id))
                    .col(string(Contact::Name))
                    .col(string(Contact::Surname))
                    .col(string(Contact::Email))
                    .col(string(Contact::PhoneNumber))
                    .col(date(Contact::Birthday))
                    .col(text_null(Contact::AdditionalInfo))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Contact::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    Name,
    Surname,
    Email,
    PhoneNumber,
    Birthday,
    AdditionalInfo,
}
