//! System users: self-registration followed by administrator review.
//!
//! Users are plain records, not aggregates: no business code, no soft
//! delete; an account is either pending review, approved or rejected.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact_phone: Option<String>,

    /// Organizational classification. Presence of any of the three marks
    /// the account as internal staff; all empty means an external user.
    pub department: Option<String>,
    pub work_group: Option<String>,
    pub staff_type: Option<String>,

    pub roles: Vec<String>,

    /// Pending / Approved / Rejected; absent on legacy records
    pub status: Option<String>,

    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl User {
    /// Internal/external classification heuristic: an account with a
    /// department, work group or staff type filled in belongs to internal
    /// staff; everything else is external. Kept exactly as the product
    /// behaves today, pending product confirmation whether "none of the
    /// three set" really means external.
    pub fn is_internal(&self) -> bool {
        is_set(&self.department) || is_set(&self.work_group) || is_set(&self.staff_type)
    }
}

/// Registration payload (public form)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterUserDto {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact_phone: Option<String>,
    pub department: Option<String>,
    pub work_group: Option<String>,
    pub staff_type: Option<String>,
    pub roles: Vec<String>,
}

/// Admin update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact_phone: Option<String>,
    pub department: Option<String>,
    pub work_group: Option<String>,
    pub staff_type: Option<String>,
    pub roles: Vec<String>,
    pub is_active: bool,
}

/// Approve/reject decision for a pending registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewUserDto {
    pub user_id: String,
    /// "approve" or "reject"
    pub decision: String,
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".into(),
            username: "mquan".into(),
            full_name: Some("Minh Quan".into()),
            email: Some("mquan@example.com".into()),
            contact_phone: None,
            department: None,
            work_group: None,
            staff_type: None,
            roles: vec!["Requester".into()],
            status: Some("Approved".into()),
            is_active: true,
            created_at: "2026-01-05T09:00:00Z".into(),
            updated_at: "2026-01-05T09:00:00Z".into(),
        }
    }

    #[test]
    fn bare_account_is_external() {
        assert!(!user().is_internal());
    }

    #[test]
    fn any_classification_field_makes_internal() {
        let mut u = user();
        u.department = Some("Engineering".into());
        assert!(u.is_internal());

        let mut u = user();
        u.work_group = Some("Night shift".into());
        assert!(u.is_internal());

        let mut u = user();
        u.staff_type = Some("Contractor".into());
        assert!(u.is_internal());
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let mut u = user();
        u.department = Some("   ".into());
        assert!(!u.is_internal());
    }
}
