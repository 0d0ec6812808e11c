//! Create `department` table.
//!
//! Only persisted fields live here; the employee count is derived at read time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string_len(Department::Name, 128).unique_key().not_null())
                    .col(
                        ColumnDef::new(Department::Description)
                            .string_len(1024)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Department::Manager)
                            .string_len(255)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Department::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Department { Table, Id, Name, Description, Manager }
