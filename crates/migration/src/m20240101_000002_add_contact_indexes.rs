//! Secondary indexes for the search and birthday queries.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_contact::Contact;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_birthday")
                    .table(Contact::Table)
                    .col(Contact::Birthday)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_contact_email")
                    .table(Contact::Table)
                    .col(Contact::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_contact_email").table(Contact::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_contact_birthday").table(Contact::Table).to_owned())
            .await
    }
}
