use chrono::Utc;
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::domain::f004_booking::aggregate::{Booking, BookingId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "f004_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub venue_ref: Option<String>,
    pub organizer: String,
    pub contact_email: Option<String>,
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
    pub attendees: Option<i32>,
    pub status: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Booking {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Booking {
            base: BaseAggregate::with_metadata(
                BookingId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            venue_ref: m.venue_ref,
            organizer: m.organizer,
            contact_email: m.contact_email,
            starts_at: m.starts_at,
            ends_at: m.ends_at,
            attendees: m.attendees,
            status: m.status,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Booking>> {
    let mut items: Vec<Booking> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Soonest event first; open-ended bookings go last
    items.sort_by(|a, b| match (&a.starts_at, &b.starts_at) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Booking>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Booking) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        venue_ref: Set(aggregate.venue_ref.clone()),
        organizer: Set(aggregate.organizer.clone()),
        contact_email: Set(aggregate.contact_email.clone()),
        starts_at: Set(aggregate.starts_at.clone()),
        ends_at: Set(aggregate.ends_at.clone()),
        attendees: Set(aggregate.attendees),
        status: Set(aggregate.status.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Booking) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        venue_ref: Set(aggregate.venue_ref.clone()),
        organizer: Set(aggregate.organizer.clone()),
        contact_email: Set(aggregate.contact_email.clone()),
        starts_at: Set(aggregate.starts_at.clone()),
        ends_at: Set(aggregate.ends_at.clone()),
        attendees: Set(aggregate.attendees),
        status: Set(aggregate.status.clone()),
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
