use contracts::system::users::User;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sys_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact_phone: Option<String>,
    pub department: Option<String>,
    pub work_group: Option<String>,
    pub staff_type: Option<String>,
    /// Role names as JSON text
    pub roles: String,
    pub status: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        let roles: Vec<String> = serde_json::from_str(&m.roles).unwrap_or_default();
        User {
            id: m.id,
            username: m.username,
            full_name: m.full_name,
            email: m.email,
            contact_phone: m.contact_phone,
            department: m.department,
            work_group: m.work_group,
            staff_type: m.staff_type,
            roles,
            status: m.status,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

fn roles_json(user: &User) -> String {
    serde_json::to_string(&user.roles).unwrap_or_else(|_| "[]".to_string())
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<User>> {
    let mut items: Vec<User> = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.username.to_lowercase().cmp(&b.username.to_lowercase()));
    Ok(items)
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<User>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn find_by_username(username: &str) -> anyhow::Result<Option<User>> {
    let result = Entity::find()
        .filter(Column::Username.eq(username))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(user: &User) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(user.id.clone()),
        username: Set(user.username.clone()),
        full_name: Set(user.full_name.clone()),
        email: Set(user.email.clone()),
        contact_phone: Set(user.contact_phone.clone()),
        department: Set(user.department.clone()),
        work_group: Set(user.work_group.clone()),
        staff_type: Set(user.staff_type.clone()),
        roles: Set(roles_json(user)),
        status: Set(user.status.clone()),
        is_active: Set(user.is_active),
        created_at: Set(user.created_at.clone()),
        updated_at: Set(user.updated_at.clone()),
    };
    active.insert(conn()).await?;
    Ok(())
}

pub async fn update(user: &User) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(user.id.clone()),
        username: Set(user.username.clone()),
        full_name: Set(user.full_name.clone()),
        email: Set(user.email.clone()),
        contact_phone: Set(user.contact_phone.clone()),
        department: Set(user.department.clone()),
        work_group: Set(user.work_group.clone()),
        staff_type: Set(user.staff_type.clone()),
        roles: Set(roles_json(user)),
        status: Set(user.status.clone()),
        is_active: Set(user.is_active),
        created_at: Set(user.created_at.clone()),
        updated_at: Set(user.updated_at.clone()),
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn delete(id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
