use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, SqlErr};
use anyhow::Result;

use super::setup_test_db;
use crate::{department, employee};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn employee_am(email: &str, department: &str) -> employee::ActiveModel {
    employee::ActiveModel {
        first_name: Set("Anna".into()),
        last_name: Set("Lee".into()),
        email: Set(email.into()),
        phone: Set("555-0100".into()),
        department: Set(department.into()),
        position: Set("Engineer".into()),
        salary: Set(1000.0),
        hire_date: Set(day(2022, 5, 1)),
        address: Set(None),
        status: Set(employee::DEFAULT_STATUS.into()),
        created_at: Set(day(2024, 1, 1)),
        updated_at: Set(day(2024, 1, 1)),
        ..Default::default()
    }
}

/// Test employee CRUD operations
#[tokio::test]
async fn test_employee_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = employee_am("anna@example.com", "Engineering").insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.hire_date, day(2022, 5, 1));

    let found = employee::Entity::find_by_id(created.id).one(&db).await?.expect("stored");
    assert_eq!(found, created);

    let by_email = employee::Entity::find()
        .filter(employee::Column::Email.eq("anna@example.com"))
        .one(&db)
        .await?;
    assert_eq!(by_email.map(|e| e.id), Some(created.id));

    let mut am: employee::ActiveModel = found.into();
    am.salary = Set(2000.0);
    let updated = am.update(&db).await?;
    assert_eq!(updated.salary, 2000.0);
    assert_eq!(updated.email, "anna@example.com");

    employee::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(employee::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// The unique index on email rejects a second row
#[tokio::test]
async fn test_employee_email_unique_index() -> Result<()> {
    let db = setup_test_db().await?;
    employee_am("dup@example.com", "Sales").insert(&db).await?;

    let err = employee_am("dup@example.com", "Sales").insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))), "got {err:?}");
    assert_eq!(employee::Entity::find().count(&db).await?, 1);
    Ok(())
}

/// Test department CRUD and name uniqueness
#[tokio::test]
async fn test_department_crud_and_unique_name() -> Result<()> {
    let db = setup_test_db().await?;

    let am = department::ActiveModel {
        name: Set("Engineering".into()),
        description: Set(Some("Builds things".into())),
        manager: Set(None),
        ..Default::default()
    };
    let created = am.insert(&db).await?;
    assert_eq!(created.name, "Engineering");

    let dup = department::ActiveModel { name: Set("Engineering".into()), ..Default::default() };
    let err = dup.insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))), "got {err:?}");

    department::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(department::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Employees reference departments by name only; orphans are allowed
#[tokio::test]
async fn test_employee_department_is_free_text() -> Result<()> {
    let db = setup_test_db().await?;
    let e = employee_am("orphan@example.com", "Does Not Exist").insert(&db).await?;
    assert_eq!(e.department, "Does Not Exist");
    Ok(())
}
