use chrono::Utc;
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::domain::f002_asset::aggregate::{Asset, AssetId};
use contracts::domain::f002_asset::schedule::MaintenanceSchedule;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "f002_asset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub category: String,
    pub serial_number: String,
    pub location_ref: Option<String>,
    pub status: Option<String>,
    /// Maintenance schedule descriptor as JSON text
    pub maintenance: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Asset {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        // A descriptor that fails to parse is dropped, not fatal: the
        // asset then simply renders "No schedule".
        let maintenance: Option<MaintenanceSchedule> = m
            .maintenance
            .as_deref()
            .and_then(|json| match serde_json::from_str(json) {
                Ok(schedule) => Some(schedule),
                Err(e) => {
                    tracing::warn!("asset {}: unreadable maintenance descriptor: {}", m.id, e);
                    None
                }
            });

        Asset {
            base: BaseAggregate::with_metadata(
                AssetId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            category: m.category,
            serial_number: m.serial_number,
            location_ref: m.location_ref,
            status: m.status,
            maintenance,
        }
    }
}

fn maintenance_json(aggregate: &Asset) -> anyhow::Result<Option<String>> {
    aggregate
        .maintenance
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(Into::into)
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Asset>> {
    let mut items: Vec<Asset> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Asset>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Asset) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        category: Set(aggregate.category.clone()),
        serial_number: Set(aggregate.serial_number.clone()),
        location_ref: Set(aggregate.location_ref.clone()),
        status: Set(aggregate.status.clone()),
        maintenance: Set(maintenance_json(aggregate)?),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Asset) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        category: Set(aggregate.category.clone()),
        serial_number: Set(aggregate.serial_number.clone()),
        location_ref: Set(aggregate.location_ref.clone()),
        status: Set(aggregate.status.clone()),
        maintenance: Set(maintenance_json(aggregate)?),
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
