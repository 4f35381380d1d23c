use chrono::Utc;
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::domain::f003_work_order::aggregate::{
    WorkOrder, WorkOrderHistoryEntry, WorkOrderId,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "f003_work_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub category: String,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub location_ref: Option<String>,
    pub assignee_ref: Option<String>,
    pub due_date: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for WorkOrder {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        WorkOrder {
            base: BaseAggregate::with_metadata(
                WorkOrderId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            category: m.category,
            priority: m.priority,
            status: m.status,
            location_ref: m.location_ref,
            assignee_ref: m.assignee_ref,
            due_date: m.due_date,
        }
    }
}

/// Per-order status history table
pub mod history {
    use contracts::domain::f003_work_order::aggregate::WorkOrderHistoryEntry;
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "f003_work_order_history")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub work_order_ref: String,
        pub status: String,
        pub changed_at: String,
        pub note: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl From<Model> for WorkOrderHistoryEntry {
        fn from(m: Model) -> Self {
            WorkOrderHistoryEntry {
                status: m.status,
                changed_at: m.changed_at,
                note: m.note,
            }
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<WorkOrder>> {
    let mut items: Vec<WorkOrder> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.base.code.to_lowercase().cmp(&b.base.code.to_lowercase()));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<WorkOrder>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &WorkOrder) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        category: Set(aggregate.category.clone()),
        priority: Set(aggregate.priority.clone()),
        status: Set(aggregate.status.clone()),
        location_ref: Set(aggregate.location_ref.clone()),
        assignee_ref: Set(aggregate.assignee_ref.clone()),
        due_date: Set(aggregate.due_date.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &WorkOrder) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        category: Set(aggregate.category.clone()),
        priority: Set(aggregate.priority.clone()),
        status: Set(aggregate.status.clone()),
        location_ref: Set(aggregate.location_ref.clone()),
        assignee_ref: Set(aggregate.assignee_ref.clone()),
        due_date: Set(aggregate.due_date.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    let Some(mut aggregate) = get_by_id(id).await? else {
        return Ok(false);
    };
    aggregate.base.metadata.is_deleted = true;
    aggregate.base.touch();
    update(&aggregate).await?;
    Ok(true)
}

/// Append one history entry for a status transition
pub async fn insert_history(
    work_order_id: Uuid,
    status: &str,
    note: Option<String>,
) -> anyhow::Result<()> {
    let active = history::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        work_order_ref: Set(work_order_id.to_string()),
        status: Set(status.to_string()),
        changed_at: Set(Utc::now().to_rfc3339()),
        note: Set(note),
    };
    active.insert(conn()).await?;
    Ok(())
}

/// Ordered history of one work order, oldest first
pub async fn list_history(work_order_id: Uuid) -> anyhow::Result<Vec<WorkOrderHistoryEntry>> {
    let items = history::Entity::find()
        .filter(history::Column::WorkOrderRef.eq(work_order_id.to_string()))
        .order_by_asc(history::Column::ChangedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}
