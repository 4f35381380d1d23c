use super::repository;
use chrono::Utc;
use contracts::shared::validation::ValidationErrors;
use contracts::system::users::{RegisterUserDto, ReviewUserDto, UpdateUserDto, User};
use uuid::Uuid;

use crate::shared::error::{ServiceError, ServiceResult};

fn validate_registration(dto: &RegisterUserDto) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if dto.username.trim().is_empty() {
        errors.add("username", "Username is required");
    }
    if let Some(email) = dto.email.as_deref() {
        if !email.trim().is_empty() && !email.contains('@') {
            errors.add("email", "Email address is not valid");
        }
    }
    errors.into_result()
}

/// Register a new user; the account stays Pending (and inactive) until
/// an administrator reviews it.
pub async fn register(dto: RegisterUserDto) -> ServiceResult<String> {
    validate_registration(&dto)?;

    if repository::find_by_username(dto.username.trim())
        .await?
        .is_some()
    {
        let mut errors = ValidationErrors::new();
        errors.add("username", "Username is already taken");
        return Err(errors.into());
    }

    let now = Utc::now().to_rfc3339();
    let user = User {
        id: Uuid::new_v4().to_string(),
        username: dto.username.trim().to_string(),
        full_name: dto.full_name,
        email: dto.email,
        contact_phone: dto.contact_phone,
        department: dto.department,
        work_group: dto.work_group,
        staff_type: dto.staff_type,
        roles: dto.roles,
        status: Some("Pending".to_string()),
        is_active: false,
        created_at: now.clone(),
        updated_at: now,
    };

    repository::insert(&user).await?;
    Ok(user.id)
}

/// Update a user record
pub async fn update(dto: UpdateUserDto) -> ServiceResult<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if let Some(email) = dto.email.as_deref() {
        if !email.trim().is_empty() && !email.contains('@') {
            let mut errors = ValidationErrors::new();
            errors.add("email", "Email address is not valid");
            return Err(errors.into());
        }
    }

    user.full_name = dto.full_name;
    user.email = dto.email;
    user.contact_phone = dto.contact_phone;
    user.department = dto.department;
    user.work_group = dto.work_group;
    user.staff_type = dto.staff_type;
    user.roles = dto.roles;
    user.is_active = dto.is_active;
    user.updated_at = Utc::now().to_rfc3339();

    Ok(repository::update(&user).await?)
}

/// Apply an approve/reject decision to a pending registration
pub async fn review(dto: ReviewUserDto) -> ServiceResult<()> {
    let mut user = repository::get_by_id(&dto.user_id)
        .await?
        .ok_or(ServiceError::NotFound)?;

    match dto.decision.to_lowercase().as_str() {
        "approve" => {
            user.status = Some("Approved".to_string());
            user.is_active = true;
        }
        "reject" => {
            user.status = Some("Rejected".to_string());
            user.is_active = false;
        }
        other => {
            let mut errors = ValidationErrors::new();
            errors.add(
                "decision",
                format!("Decision must be \"approve\" or \"reject\", got \"{}\"", other),
            );
            return Err(errors.into());
        }
    }
    user.updated_at = Utc::now().to_rfc3339();

    tracing::info!(
        "user {} reviewed: {} -> {:?}",
        user.username,
        dto.decision,
        user.status
    );
    Ok(repository::update(&user).await?)
}

/// Delete a user
pub async fn delete(id: &str) -> ServiceResult<bool> {
    Ok(repository::delete(id).await?)
}

/// Fetch one user
pub async fn get_by_id(id: &str) -> ServiceResult<Option<User>> {
    Ok(repository::get_by_id(id).await?)
}

/// Fetch all users
pub async fn list_all() -> ServiceResult<Vec<User>> {
    Ok(repository::list_all().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_requires_username() {
        let dto = RegisterUserDto {
            username: "  ".into(),
            ..Default::default()
        };
        let err = validate_registration(&dto).unwrap_err();
        assert!(err.get("username").is_some());
    }

    #[test]
    fn registration_checks_email_shape() {
        let dto = RegisterUserDto {
            username: "mquan".into(),
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        let err = validate_registration(&dto).unwrap_err();
        assert!(err.get("email").is_some());

        let dto = RegisterUserDto {
            username: "mquan".into(),
            email: Some("mquan@example.com".into()),
            ..Default::default()
        };
        assert!(validate_registration(&dto).is_ok());
    }
}
