//! Status and priority badges.
//!
//! The mapping from a server-supplied status string to a presentation
//! tone is total: any unknown or missing status renders as a neutral
//! "Pending" badge instead of failing.

use leptos::prelude::*;

/// Presentation category of a status/priority value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Neutral,
    Positive,
    Negative,
    Informational,
}

/// Tone of a status string, case-insensitive. Total: never panics.
pub fn status_tone(status: &str) -> StatusTone {
    match status.trim().to_lowercase().as_str() {
        "approved" | "confirmed" | "completed" | "operational" | "active" => StatusTone::Positive,
        "rejected" | "cancelled" | "overdue" | "retired" => StatusTone::Negative,
        "in progress" | "under maintenance" | "scheduled" => StatusTone::Informational,
        _ => StatusTone::Neutral,
    }
}

/// Tone of a priority string, case-insensitive. Total: never panics.
pub fn priority_tone(priority: &str) -> StatusTone {
    match priority.trim().to_lowercase().as_str() {
        "high" | "critical" => StatusTone::Negative,
        "medium" => StatusTone::Informational,
        _ => StatusTone::Neutral,
    }
}

/// Badge CSS modifier for a tone
pub fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Neutral => "badge badge--neutral",
        StatusTone::Positive => "badge badge--success",
        StatusTone::Negative => "badge badge--error",
        StatusTone::Informational => "badge badge--info",
    }
}

/// Label shown for a possibly missing status
pub fn status_label(status: Option<&str>) -> String {
    match status {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => "Pending".to_string(),
    }
}

/// Status badge; missing status renders a neutral "Pending"
#[component]
pub fn StatusBadge(status: Option<String>) -> impl IntoView {
    let label = status_label(status.as_deref());
    let tone = match status.as_deref() {
        Some(s) if !s.trim().is_empty() => status_tone(s),
        _ => StatusTone::Neutral,
    };
    view! { <span class=tone_class(tone)>{label}</span> }
}

/// Priority badge; missing priority renders a neutral dash
#[component]
pub fn PriorityBadge(priority: Option<String>) -> impl IntoView {
    match priority {
        Some(p) if !p.trim().is_empty() => {
            let tone = priority_tone(&p);
            view! { <span class=tone_class(tone)>{p.trim().to_string()}</span> }.into_any()
        }
        _ => view! { <span class="badge badge--neutral">"-"</span> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_is_case_insensitive() {
        assert_eq!(status_tone("APPROVED"), StatusTone::Positive);
        assert_eq!(status_tone("cancelled"), StatusTone::Negative);
        assert_eq!(status_tone("In Progress"), StatusTone::Informational);
    }

    #[test]
    fn unknown_status_is_neutral() {
        assert_eq!(status_tone("frobnicated"), StatusTone::Neutral);
        assert_eq!(status_tone(""), StatusTone::Neutral);
        assert_eq!(status_tone("pending"), StatusTone::Neutral);
    }

    #[test]
    fn missing_status_labels_as_pending() {
        assert_eq!(status_label(None), "Pending");
        assert_eq!(status_label(Some("  ")), "Pending");
        assert_eq!(status_label(Some("Confirmed")), "Confirmed");
    }

    #[test]
    fn priority_tones() {
        assert_eq!(priority_tone("Critical"), StatusTone::Negative);
        assert_eq!(priority_tone("high"), StatusTone::Negative);
        assert_eq!(priority_tone("Medium"), StatusTone::Informational);
        assert_eq!(priority_tone("Low"), StatusTone::Neutral);
        assert_eq!(priority_tone("whatever"), StatusTone::Neutral);
    }
}
