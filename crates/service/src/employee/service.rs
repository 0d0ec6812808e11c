use std::sync::Arc;

use models::employee::{self, EmployeeInput};
use tracing::{debug, info, instrument};

use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::today;

/// Employee business service independent of web framework and storage.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<employee::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("Employee", id))
    }

    /// Validate and store a new employee.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{EmployeeService, repository::mock::InMemoryEmployeeRepository};
    /// use models::employee::EmployeeInput;
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::default()));
    /// let input = EmployeeInput {
    ///     first_name: "Anna".into(), last_name: "Lee".into(), email: "anna@example.com".into(),
    ///     phone: "555-0100".into(), department: "Engineering".into(), position: "Engineer".into(),
    ///     salary: Some(1000.0), hire_date: Some("2022-05-01".into()),
    ///     ..Default::default()
    /// };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.status, "Active");
    /// assert_eq!(created.created_at, created.updated_at);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
        let data = input.validate()?;
        if self.repo.exists_by_email(&data.email).await? {
            debug!("email already registered");
            return Err(ServiceError::email_taken(&data.email));
        }

        let now = today();
        let record = employee::Model {
            id: 0,
            status: data.status_or_default(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            department: data.department,
            position: data.position,
            salary: data.salary,
            hire_date: data.hire_date,
            address: data.address,
            created_at: now,
            updated_at: now,
        };
        let created = self.repo.insert(record).await?;
        info!(id = created.id, department = %created.department, "employee_created");
        Ok(created)
    }

    /// Full-record update. Email is only touched (and re-checked) when it changes;
    /// `createdAt` is kept.
    #[instrument(skip(self, input), fields(id = id))]
    pub async fn update(&self, id: i32, input: EmployeeInput) -> Result<employee::Model, ServiceError> {
        let data = input.validate()?;
        let mut current = self.get(id).await?;

        if current.email != data.email {
            if self.repo.exists_by_email(&data.email).await? {
                debug!(new_email = %data.email, "email already registered");
                return Err(ServiceError::email_taken(&data.email));
            }
            current.email = data.email.clone();
        }

        current.status = data.status_or_default();
        current.first_name = data.first_name;
        current.last_name = data.last_name;
        current.phone = data.phone;
        current.department = data.department;
        current.position = data.position;
        current.salary = data.salary;
        current.hire_date = data.hire_date;
        current.address = data.address;
        current.updated_at = today();

        let updated = self.repo.save(current).await?;
        info!(id = updated.id, "employee_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let found = self.get(id).await?;
        if !self.repo.delete(found.id).await? {
            // removed concurrently between the lookup and the delete
            return Err(ServiceError::not_found("Employee", id));
        }
        info!(id, "employee_deleted");
        Ok(())
    }

    pub async fn find_by_department(&self, department: &str) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.find_by_department(department).await
    }

    pub async fn find_by_status(&self, status: &str) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.find_by_status(status).await
    }

    pub async fn search_by_name(&self, keyword: &str) -> Result<Vec<employee::Model>, ServiceError> {
        self.repo.search_by_name(keyword).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::repo::SeaOrmEmployeeRepository;
    use crate::employee::repository::mock::InMemoryEmployeeRepository;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn input(first: &str, last: &str, email: &str) -> EmployeeInput {
        EmployeeInput {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: "555-0100".into(),
            department: "Engineering".into(),
            position: "Engineer".into(),
            salary: Some(85_000.0),
            hire_date: Some("2021-03-01".into()),
            address: Some("1 Main St".into()),
            status: None,
        }
    }

    fn as_input(e: &employee::Model) -> EmployeeInput {
        EmployeeInput {
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: e.department.clone(),
            position: e.position.clone(),
            salary: Some(e.salary),
            hire_date: Some(e.hire_date.to_string()),
            address: e.address.clone(),
            status: Some(e.status.clone()),
        }
    }

    fn mock_service() -> (Arc<InMemoryEmployeeRepository>, EmployeeService<InMemoryEmployeeRepository>) {
        let repo = Arc::new(InMemoryEmployeeRepository::default());
        (repo.clone(), EmployeeService::new(repo))
    }

    #[tokio::test]
    async fn create_applies_defaults_and_get_returns_input_fields() {
        let (_, svc) = mock_service();
        let created = svc.create(input("Anna", "Lee", "anna@example.com")).await.unwrap();
        assert_eq!(created.status, "Active");
        assert_eq!(created.created_at, today());
        assert_eq!(created.updated_at, today());

        let found = svc.get(created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(as_input(&found), EmployeeInput { status: Some("Active".into()), ..input("Anna", "Lee", "anna@example.com") });
    }

    #[tokio::test]
    async fn duplicate_email_on_create_is_conflict_and_store_unchanged() {
        let (repo, svc) = mock_service();
        svc.create(input("Anna", "Lee", "a@x.com")).await.unwrap();
        let err = svc.create(input("Other", "Person", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_any_write() {
        let (repo, svc) = mock_service();
        let err = svc.create(EmployeeInput { email: "bad".into(), salary: None, ..input("A", "B", "") }).await.unwrap_err();
        match err {
            ServiceError::Validation(errs) => {
                assert!(errs.has("email"));
                assert!(errs.has("salary"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let (_, svc) = mock_service();
        let err = svc.get(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn update_salary_only_keeps_other_fields_and_created_at() {
        let (repo, svc) = mock_service();
        let long_ago = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let seeded = employee::Model {
            id: 1,
            first_name: "Anna".into(),
            last_name: "Lee".into(),
            email: "anna@example.com".into(),
            phone: "555-0100".into(),
            department: "Engineering".into(),
            position: "Engineer".into(),
            salary: 1000.0,
            hire_date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            address: None,
            status: "Active".into(),
            created_at: long_ago,
            updated_at: long_ago,
        };
        repo.seed(seeded.clone()).await;

        let updated = svc.update(1, EmployeeInput { salary: Some(2000.0), ..as_input(&seeded) }).await.unwrap();
        assert_eq!(updated.salary, 2000.0);
        assert_eq!(updated.created_at, long_ago);
        assert!(updated.updated_at > long_ago);
        assert_eq!(employee::Model { salary: 1000.0, updated_at: long_ago, ..updated.clone() }, seeded);
    }

    #[tokio::test]
    async fn update_with_unchanged_email_never_conflicts() {
        let (_, svc) = mock_service();
        let a = svc.create(input("Anna", "Lee", "a@x.com")).await.unwrap();
        let updated = svc.update(a.id, EmployeeInput { position: "Lead".into(), ..as_input(&a) }).await.unwrap();
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.position, "Lead");
    }

    #[tokio::test]
    async fn update_to_taken_email_is_conflict() {
        let (_, svc) = mock_service();
        let a = svc.create(input("Anna", "Lee", "a@x.com")).await.unwrap();
        let b = svc.create(input("Dan", "Cruz", "d@x.com")).await.unwrap();
        let err = svc.update(b.id, EmployeeInput { email: a.email.clone(), ..as_input(&b) }).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");
        assert_eq!(svc.get(b.id).await.unwrap().email, "d@x.com");

        let moved = svc.update(b.id, EmployeeInput { email: "dan@x.com".into(), ..as_input(&b) }).await.unwrap();
        assert_eq!(moved.email, "dan@x.com");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (_, svc) = mock_service();
        let err = svc.update(42, input("Anna", "Lee", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn update_without_status_resets_to_default() {
        let (_, svc) = mock_service();
        let a = svc.create(EmployeeInput { status: Some("On Leave".into()), ..input("Anna", "Lee", "a@x.com") }).await.unwrap();
        assert_eq!(a.status, "On Leave");
        let updated = svc.update(a.id, EmployeeInput { status: None, ..as_input(&a) }).await.unwrap();
        assert_eq!(updated.status, "Active");
    }

    #[tokio::test]
    async fn delete_removes_and_second_delete_is_not_found() {
        let (repo, svc) = mock_service();
        let a = svc.create(input("Anna", "Lee", "a@x.com")).await.unwrap();
        svc.delete(a.id).await.unwrap();
        assert!(repo.is_empty().await);
        let err = svc.delete(a.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn search_by_name_matches_first_or_last_name() {
        let (_, svc) = mock_service();
        svc.create(input("Anna", "Lee", "anna@x.com")).await.unwrap();
        svc.create(input("Dan", "Cruz", "dan@x.com")).await.unwrap();
        svc.create(input("Bob", "Stone", "bob@x.com")).await.unwrap();

        let mut names: Vec<String> = svc
            .search_by_name("an")
            .await
            .unwrap()
            .into_iter()
            .map(|e| format!("{} {}", e.first_name, e.last_name))
            .collect();
        names.sort();
        assert_eq!(names, vec!["Anna Lee", "Dan Cruz"]);
    }

    #[tokio::test]
    async fn filters_by_department_and_status() {
        let (_, svc) = mock_service();
        svc.create(input("Anna", "Lee", "anna@x.com")).await.unwrap();
        svc.create(EmployeeInput { department: "Sales".into(), status: Some("Inactive".into()), ..input("Dan", "Cruz", "dan@x.com") })
            .await
            .unwrap();

        assert_eq!(svc.find_by_department("Engineering").await.unwrap().len(), 1);
        assert_eq!(svc.find_by_department("Sales").await.unwrap()[0].first_name, "Dan");
        assert_eq!(svc.find_by_status("Active").await.unwrap()[0].first_name, "Anna");
        assert!(svc.find_by_status("Terminated").await.unwrap().is_empty());
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn employee_crud_service_on_sqlite() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = EmployeeService::new(Arc::new(SeaOrmEmployeeRepository::new(db)));

        let a = svc.create(input("Anna", "Lee", "a@x.com")).await?;
        let err = svc.create(input("Again", "Anna", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(svc.list().await?.len(), 1);

        let updated = svc.update(a.id, EmployeeInput { salary: Some(1.0), ..as_input(&a) }).await?;
        assert_eq!(updated.salary, 1.0);
        assert_eq!(updated.created_at, a.created_at);

        svc.delete(a.id).await?;
        assert!(matches!(svc.get(a.id).await.unwrap_err(), ServiceError::NotFound(_)));
        Ok(())
    }
}
