use std::sync::Arc;

use models::department::{self, DepartmentInput};
use tracing::{debug, info, instrument};

use crate::department::domain::DepartmentView;
use crate::department::repository::DepartmentRepository;
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;

/// Department business service. Reads employee storage to derive counts but
/// never writes to it.
pub struct DepartmentService<D: DepartmentRepository, E: EmployeeRepository> {
    departments: Arc<D>,
    employees: Arc<E>,
}

impl<D: DepartmentRepository, E: EmployeeRepository> DepartmentService<D, E> {
    pub fn new(departments: Arc<D>, employees: Arc<E>) -> Self {
        Self { departments, employees }
    }

    async fn view(&self, record: department::Model) -> Result<DepartmentView, ServiceError> {
        let count = self.employees.count_by_department(&record.name).await?;
        Ok(DepartmentView::new(record, count))
    }

    async fn find(&self, id: i32) -> Result<department::Model, ServiceError> {
        self.departments.get(id).await?.ok_or_else(|| ServiceError::not_found("Department", id))
    }

    pub async fn list(&self) -> Result<Vec<DepartmentView>, ServiceError> {
        let records = self.departments.list().await?;
        let mut views = Vec::with_capacity(records.len());
        for record in records {
            views.push(self.view(record).await?);
        }
        Ok(views)
    }

    pub async fn get(&self, id: i32) -> Result<DepartmentView, ServiceError> {
        let record = self.find(id).await?;
        self.view(record).await
    }

    /// Store a new department.
    ///
    /// # Examples
    /// ```
    /// use service::department::DepartmentService;
    /// use service::department::repository::mock::InMemoryDepartmentRepository;
    /// use service::employee::repository::mock::InMemoryEmployeeRepository;
    /// use models::department::DepartmentInput;
    /// use std::sync::Arc;
    /// let svc = DepartmentService::new(
    ///     Arc::new(InMemoryDepartmentRepository::default()),
    ///     Arc::new(InMemoryEmployeeRepository::default()),
    /// );
    /// let input = DepartmentInput { name: "Engineering".into(), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.employee_count, 0);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: DepartmentInput) -> Result<DepartmentView, ServiceError> {
        let data = input.validate()?;
        if self.departments.exists_by_name(&data.name).await? {
            debug!("department name taken");
            return Err(ServiceError::department_name_taken(&data.name));
        }
        let record = department::Model { id: 0, name: data.name, description: data.description, manager: data.manager };
        let created = self.departments.insert(record).await?;
        info!(id = created.id, "department_created");
        self.view(created).await
    }

    /// Rename only when the name changes; description and manager are always
    /// overwritten. The returned count reflects the name after the update.
    #[instrument(skip(self, input), fields(id = id))]
    pub async fn update(&self, id: i32, input: DepartmentInput) -> Result<DepartmentView, ServiceError> {
        let data = input.validate()?;
        let mut current = self.find(id).await?;

        if current.name != data.name {
            if self.departments.exists_by_name(&data.name).await? {
                debug!(new_name = %data.name, "department name taken");
                return Err(ServiceError::department_name_taken(&data.name));
            }
            current.name = data.name;
        }
        current.description = data.description;
        current.manager = data.manager;

        let saved = self.departments.save(current).await?;
        info!(id = saved.id, "department_updated");
        self.view(saved).await
    }

    /// Remove the department. Employees naming it are left untouched.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let found = self.find(id).await?;
        if !self.departments.delete(found.id).await? {
            return Err(ServiceError::not_found("Department", id));
        }
        info!(id, name = %found.name, "department_deleted");
        Ok(())
    }
}
