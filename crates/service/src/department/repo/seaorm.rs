use models::department;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::department::repository::DepartmentRepository;
use crate::errors::ServiceError;

pub struct SeaOrmDepartmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_active(record: department::Model) -> department::ActiveModel {
    department::ActiveModel {
        id: Set(record.id),
        name: Set(record.name),
        description: Set(record.description),
        manager: Set(record.manager),
    }
}

#[async_trait::async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn list(&self) -> Result<Vec<department::Model>, ServiceError> {
        department::Entity::find()
            .order_by_asc(department::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn get(&self, id: i32) -> Result<Option<department::Model>, ServiceError> {
        department::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, ServiceError> {
        let n = department::Entity::find()
            .filter(department::Column::Name.eq(name))
            .count(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(n > 0)
    }

    async fn insert(&self, record: department::Model) -> Result<department::Model, ServiceError> {
        let name = record.name.clone();
        let mut am = to_active(record);
        am.id = NotSet;
        am.insert(&self.db)
            .await
            .map_err(|e| ServiceError::from_db(e, || ServiceError::department_name_taken(&name)))
    }

    async fn save(&self, record: department::Model) -> Result<department::Model, ServiceError> {
        let (id, name) = (record.id, record.name.clone());
        to_active(record).update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ServiceError::not_found("Department", id),
            e => ServiceError::from_db(e, || ServiceError::department_name_taken(&name)),
        })
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = department::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
