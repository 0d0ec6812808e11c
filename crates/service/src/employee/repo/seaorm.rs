use models::employee;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::Db(e.to_string())
}

/// Every column as `Set`, so an update writes the full record.
fn to_active(record: employee::Model) -> employee::ActiveModel {
    employee::ActiveModel {
        id: Set(record.id),
        first_name: Set(record.first_name),
        last_name: Set(record.last_name),
        email: Set(record.email),
        phone: Set(record.phone),
        department: Set(record.department),
        position: Set(record.position),
        salary: Set(record.salary),
        hire_date: Set(record.hire_date),
        address: Set(record.address),
        status: Set(record.status),
        created_at: Set(record.created_at),
        updated_at: Set(record.updated_at),
    }
}

/// `%keyword%` with LIKE wildcards in the keyword taken literally.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait::async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
        employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
        employee::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        let n = employee::Entity::find()
            .filter(employee::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(n > 0)
    }

    async fn insert(&self, record: employee::Model) -> Result<employee::Model, ServiceError> {
        let email = record.email.clone();
        let mut am = to_active(record);
        am.id = NotSet;
        am.insert(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, || ServiceError::email_taken(&email)))
    }

    async fn save(&self, record: employee::Model) -> Result<employee::Model, ServiceError> {
        let (id, email) = (record.id, record.email.clone());
        to_active(record).update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ServiceError::not_found("Employee", id),
            e => ServiceError::from_db(e, || ServiceError::email_taken(&email)),
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = employee::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn find_by_department(&self, department: &str) -> Result<Vec<employee::Model>, ServiceError> {
        employee::Entity::find()
            .filter(employee::Column::Department.eq(department))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<employee::Model>, ServiceError> {
        employee::Entity::find()
            .filter(employee::Column::Status.eq(status))
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn search_by_name(&self, keyword: &str) -> Result<Vec<employee::Model>, ServiceError> {
        let pattern = contains_pattern(keyword);
        let lower_like = |col: employee::Column| {
            Expr::expr(Func::lower(Expr::col((employee::Entity, col))))
                .like(LikeExpr::new(pattern.clone()).escape('\\'))
        };
        employee::Entity::find()
            .filter(
                Condition::any()
                    .add(lower_like(employee::Column::FirstName))
                    .add(lower_like(employee::Column::LastName)),
            )
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_by_department(&self, department: &str) -> Result<u64, ServiceError> {
        employee::Entity::find()
            .filter(employee::Column::Department.eq(department))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn record(first: &str, last: &str, email: &str, department: &str) -> employee::Model {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        employee::Model {
            id: 0,
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: "555".into(),
            department: department.into(),
            position: "Staff".into(),
            salary: 10.0,
            hire_date: day,
            address: None,
            status: "Active".into(),
            created_at: day,
            updated_at: day,
        }
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("An"), "%an%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_rejects_duplicate_email() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        let a = repo.insert(record("Anna", "Lee", "a@x.com", "Eng")).await?;
        let b = repo.insert(record("Dan", "Cruz", "d@x.com", "Eng")).await?;
        assert!(a.id > 0 && b.id > a.id);

        let err = repo.insert(record("Other", "Anna", "a@x.com", "Eng")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(repo.list().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn save_unique_violation_is_conflict_and_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        let a = repo.insert(record("Anna", "Lee", "a@x.com", "Eng")).await?;
        let b = repo.insert(record("Dan", "Cruz", "d@x.com", "Eng")).await?;

        let err = repo.save(employee::Model { email: a.email.clone(), ..b.clone() }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

        let err = repo.save(employee::Model { id: 999, ..b }).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn search_matches_first_or_last_name_ignoring_case() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        repo.insert(record("Anna", "Lee", "anna@x.com", "Eng")).await?;
        repo.insert(record("Dan", "Cruz", "dan@x.com", "Eng")).await?;
        repo.insert(record("Bob", "Stone", "bob@x.com", "Ops")).await?;

        let names: Vec<String> = repo.search_by_name("an").await?.into_iter().map(|e| e.first_name).collect();
        assert_eq!(names, vec!["Anna", "Dan"]);

        let names: Vec<String> = repo.search_by_name("STONE").await?.into_iter().map(|e| e.first_name).collect();
        assert_eq!(names, vec!["Bob"]);

        assert!(repo.search_by_name("%").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn department_and_status_filters_are_exact() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        repo.insert(record("Anna", "Lee", "anna@x.com", "Eng")).await?;
        repo.insert(record("Dan", "Cruz", "dan@x.com", "Engineering")).await?;
        let mut bob = record("Bob", "Stone", "bob@x.com", "Eng");
        bob.status = "Inactive".into();
        repo.insert(bob).await?;

        assert_eq!(repo.find_by_department("Eng").await?.len(), 2);
        assert_eq!(repo.count_by_department("Eng").await?, 2);
        assert_eq!(repo.count_by_department("Engineering").await?, 1);
        assert_eq!(repo.find_by_status("Inactive").await?.len(), 1);
        assert!(repo.find_by_status("inactive").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() -> Result<(), anyhow::Error> {
        let repo = SeaOrmEmployeeRepository::new(get_db().await?);
        let a = repo.insert(record("Anna", "Lee", "a@x.com", "Eng")).await?;
        assert!(repo.delete(a.id).await?);
        assert!(!repo.delete(a.id).await?);
        assert!(repo.get(a.id).await?.is_none());
        Ok(())
    }
}
