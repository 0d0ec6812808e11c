use async_trait::async_trait;
use models::employee;

use crate::errors::ServiceError;

/// Storage for employee records.
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation as [`ServiceError::Conflict`]; the service's own pre-check is
/// not atomic with the write.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    /// Persist a new record. `record.id` is ignored; the store assigns one.
    async fn insert(&self, record: employee::Model) -> Result<employee::Model, ServiceError>;
    /// Overwrite the stored record with the same id.
    async fn save(&self, record: employee::Model) -> Result<employee::Model, ServiceError>;
    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn find_by_department(&self, department: &str) -> Result<Vec<employee::Model>, ServiceError>;
    async fn find_by_status(&self, status: &str) -> Result<Vec<employee::Model>, ServiceError>;
    /// Records whose first or last name contains `keyword`, ignoring case.
    async fn search_by_name(&self, keyword: &str) -> Result<Vec<employee::Model>, ServiceError>;
    async fn count_by_department(&self, department: &str) -> Result<u64, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        rows: Mutex<BTreeMap<i32, employee::Model>>, // key: id
        last_id: AtomicI32,
    }

    impl InMemoryEmployeeRepository {
        /// Store a record verbatim, keeping its id and timestamps.
        pub async fn seed(&self, record: employee::Model) {
            self.last_id.fetch_max(record.id, Ordering::SeqCst);
            self.rows.lock().await.insert(record.id, record);
        }

        pub async fn len(&self) -> usize {
            self.rows.lock().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.rows.lock().await.is_empty()
        }
    }

    fn email_clash(rows: &BTreeMap<i32, employee::Model>, email: &str, except: Option<i32>) -> bool {
        rows.values().any(|e| e.email == email && Some(e.id) != except)
    }

    fn filtered(rows: &BTreeMap<i32, employee::Model>, pred: impl Fn(&employee::Model) -> bool) -> Vec<employee::Model> {
        rows.values().filter(|e| pred(e)).cloned().collect()
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(self.rows.lock().await.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<employee::Model>, ServiceError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
            Ok(email_clash(&*self.rows.lock().await, email, None))
        }

        async fn insert(&self, mut record: employee::Model) -> Result<employee::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if email_clash(&rows, &record.email, None) {
                return Err(ServiceError::email_taken(&record.email));
            }
            // ids are never reused, like an auto-increment column
            record.id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
            rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn save(&self, record: employee::Model) -> Result<employee::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if !rows.contains_key(&record.id) {
                return Err(ServiceError::not_found("Employee", record.id));
            }
            if email_clash(&rows, &record.email, Some(record.id)) {
                return Err(ServiceError::email_taken(&record.email));
            }
            rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.remove(&id).is_some())
        }

        async fn find_by_department(&self, department: &str) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(filtered(&*self.rows.lock().await, |e| e.department == department))
        }

        async fn find_by_status(&self, status: &str) -> Result<Vec<employee::Model>, ServiceError> {
            Ok(filtered(&*self.rows.lock().await, |e| e.status == status))
        }

        async fn search_by_name(&self, keyword: &str) -> Result<Vec<employee::Model>, ServiceError> {
            let needle = keyword.to_lowercase();
            Ok(filtered(&*self.rows.lock().await, |e| {
                e.first_name.to_lowercase().contains(&needle) || e.last_name.to_lowercase().contains(&needle)
            }))
        }

        async fn count_by_department(&self, department: &str) -> Result<u64, ServiceError> {
            Ok(self.rows.lock().await.values().filter(|e| e.department == department).count() as u64)
        }
    }
}
