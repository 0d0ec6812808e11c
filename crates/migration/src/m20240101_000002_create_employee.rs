//! Create `employee` table.
//!
//! `department` is free text matched by name, so there is no FK to `department`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len(Employee::FirstName, 128).not_null())
                    .col(string_len(Employee::LastName, 128).not_null())
                    .col(string_len(Employee::Email, 255).unique_key().not_null())
                    .col(string_len(Employee::Phone, 64).not_null())
                    .col(string_len(Employee::Department, 128).not_null())
                    .col(string_len(Employee::Position, 128).not_null())
                    .col(double(Employee::Salary).not_null())
                    .col(date(Employee::HireDate).not_null())
                    .col(
                        ColumnDef::new(Employee::Address)
                            .string_len(512)
                            .null(),
                    )
                    .col(string_len(Employee::Status, 32).not_null())
                    .col(date(Employee::CreatedAt).not_null())
                    .col(date(Employee::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    Salary,
    HireDate,
    Address,
    Status,
    CreatedAt,
    UpdatedAt,
}
