use async_trait::async_trait;
use models::department;

use crate::errors::ServiceError;

/// Storage for department records. Name uniqueness must be enforced by the
/// store and reported as [`ServiceError::Conflict`].
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<department::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<department::Model>, ServiceError>;
    async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError>;
    /// Persist a new record. `record.id` is ignored; the store assigns one.
    async fn insert(&self, record: department::Model) -> Result<department::Model, ServiceError>;
    async fn save(&self, record: department::Model) -> Result<department::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryDepartmentRepository {
        rows: Mutex<BTreeMap<i32, department::Model>>, // key: id
        last_id: AtomicI32,
    }

    impl InMemoryDepartmentRepository {
        pub async fn len(&self) -> usize {
            self.rows.lock().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.rows.lock().await.is_empty()
        }
    }

    fn name_clash(rows: &BTreeMap<i32, department::Model>, name: &str, except: Option<i32>) -> bool {
        rows.values().any(|d| d.name == name && Some(d.id) != except)
    }

    #[async_trait]
    impl DepartmentRepository for InMemoryDepartmentRepository {
        async fn list(&self) -> Result<Vec<department::Model>, ServiceError> {
            Ok(self.rows.lock().await.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<department::Model>, ServiceError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError> {
            Ok(name_clash(&*self.rows.lock().await, name, None))
        }

        async fn insert(&self, mut record: department::Model) -> Result<department::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if name_clash(&rows, &record.name, None) {
                return Err(ServiceError::department_name_taken(&record.name));
            }
            record.id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
            rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn save(&self, record: department::Model) -> Result<department::Model, ServiceError> {
            let mut rows = self.rows.lock().await;
            if !rows.contains_key(&record.id) {
                return Err(ServiceError::not_found("Department", record.id));
            }
            if name_clash(&rows, &record.name, Some(record.id)) {
                return Err(ServiceError::department_name_taken(&record.name));
            }
            rows.insert(record.id, record.clone());
            Ok(record)
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.remove(&id).is_some())
        }
    }
}
