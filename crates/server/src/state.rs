use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::department::repo::SeaOrmDepartmentRepository;
use service::employee::repo::SeaOrmEmployeeRepository;
use service::{DepartmentService, EmployeeService};

pub type Employees = EmployeeService<SeaOrmEmployeeRepository>;
pub type Departments = DepartmentService<SeaOrmDepartmentRepository, SeaOrmEmployeeRepository>;

/// Shared handler state. Both services read the same employee repository.
#[derive(Clone)]
pub struct ServerState {
    pub employees: Arc<Employees>,
    pub departments: Arc<Departments>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo = Arc::new(SeaOrmEmployeeRepository::new(db.clone()));
        let department_repo = Arc::new(SeaOrmDepartmentRepository::new(db));
        Self {
            employees: Arc::new(EmployeeService::new(employee_repo.clone())),
            departments: Arc::new(DepartmentService::new(department_repo, employee_repo)),
        }
    }
}
