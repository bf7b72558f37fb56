use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait, QueryOrder, RuntimeErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        fridge_item::{entities::FridgeItem, ports::FridgeItemRepository, value_objects::NewFridgeItem},
    },
    entity::fridge_items::{ActiveModel, Column, Entity},
};

/// PostgreSQL `undefined_table`.
pub const UNDEFINED_TABLE: &str = "42P01";

#[derive(Debug, Clone)]
pub struct PostgresFridgeItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresFridgeItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn is_undefined_table_code(code: Option<&str>) -> bool {
    code == Some(UNDEFINED_TABLE)
}

fn is_undefined_table(err: &DbErr) -> bool {
    let runtime = match err {
        DbErr::Conn(e) | DbErr::Exec(e) | DbErr::Query(e) => e,
        _ => return false,
    };

    match runtime {
        RuntimeErr::SqlxError(e) => {
            let code = e.as_database_error().and_then(|db_err| db_err.code());
            is_undefined_table_code(code.as_deref())
        }
        _ => false,
    }
}

fn map_db_error(action: &str, e: DbErr) -> CoreError {
    if is_undefined_table(&e) {
        error!("Failed to {}: fridge_items table is missing ({})", action, e);
        return CoreError::TableNotFound;
    }

    error!("Failed to {}: {}", action, e);
    CoreError::RowStore(e.to_string())
}

fn map_update_error(e: DbErr) -> CoreError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => CoreError::NotFound,
        e => map_db_error("update fridge item", e),
    }
}

fn active_model(item: NewFridgeItem) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(item.name),
        quantity: Set(item.quantity),
        unit: Set(item.unit.into()),
        expiry_date: Set(item.expiry_date),
        category: Set(item.category.into()),
        created_at: NotSet,
    }
}

impl FridgeItemRepository for PostgresFridgeItemRepository {
    async fn insert(&self, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let created = Entity::insert(active_model(item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_db_error("create fridge item", e))?;

        Ok(FridgeItem::from(created))
    }

    async fn update(&self, id: Uuid, item: NewFridgeItem) -> Result<FridgeItem, CoreError> {
        let mut model = active_model(item);
        model.id = Set(id);

        let updated = Entity::update(model)
            .exec(&self.db)
            .await
            .map_err(map_update_error)?;

        Ok(FridgeItem::from(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| map_db_error("delete fridge item", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<FridgeItem>, CoreError> {
        let items = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| map_db_error("get fridge items", e))?;

        Ok(items.into_iter().map(FridgeItem::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<FridgeItem>, CoreError> {
        let item = Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| map_db_error("get fridge item by id", e))?;

        Ok(item.map(FridgeItem::from))
    }
}
