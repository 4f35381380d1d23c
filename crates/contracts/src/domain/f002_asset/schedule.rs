//! Preventive-maintenance schedule descriptor and its display formatter.
//!
//! The descriptor arrives from the server as an internally tagged JSON
//! object (`{"unit": "monthly", "weekOrdinal": 2, "weekday": "Tuesday"}`).
//! Formatting is total: anything missing or out of range renders as
//! "No schedule" rather than failing.

use serde::{Deserialize, Serialize};

/// Recurrence descriptor of a preventive-maintenance plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "lowercase")]
pub enum MaintenanceSchedule {
    /// Every `interval` weeks
    Weekly { interval: u32 },
    /// Every n-th given weekday of the month (e.g. 2nd Tuesday)
    Monthly {
        #[serde(rename = "weekOrdinal")]
        week_ordinal: u32,
        weekday: String,
    },
    /// Once a year on a fixed month and day
    Yearly { month: u32, day: u32 },
}

const NO_SCHEDULE: &str = "No schedule";

/// English ordinal indicator: 1 -> "st", 2 -> "nd", 3 -> "rd", else "th";
/// 11..=13 always take "th".
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn month_name(month: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Human-readable recurrence phrase for a schedule descriptor.
///
/// A missing or invalid descriptor renders as "No schedule".
pub fn format_schedule(schedule: Option<&MaintenanceSchedule>) -> String {
    let Some(schedule) = schedule else {
        return NO_SCHEDULE.to_string();
    };
    match schedule {
        MaintenanceSchedule::Weekly { interval } => match interval {
            0 => NO_SCHEDULE.to_string(),
            1 => "Every 1 week".to_string(),
            n => format!("Every {} weeks", n),
        },
        MaintenanceSchedule::Monthly {
            week_ordinal,
            weekday,
        } => {
            let weekday = weekday.trim();
            if !(1..=5).contains(week_ordinal) || weekday.is_empty() {
                return NO_SCHEDULE.to_string();
            }
            format!(
                "Every {}{} {} of the month",
                week_ordinal,
                ordinal_suffix(*week_ordinal),
                weekday
            )
        }
        MaintenanceSchedule::Yearly { month, day } => {
            let Some(name) = month_name(*month) else {
                return NO_SCHEDULE.to_string();
            };
            if !(1..=31).contains(day) {
                return NO_SCHEDULE.to_string();
            }
            format!("Every {} {}{}", name, day, ordinal_suffix(*day))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_pluralizes() {
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Weekly { interval: 1 })),
            "Every 1 week"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Weekly { interval: 6 })),
            "Every 6 weeks"
        );
    }

    #[test]
    fn monthly_uses_ordinal_of_week() {
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Monthly {
                week_ordinal: 2,
                weekday: "Tuesday".to_string(),
            })),
            "Every 2nd Tuesday of the month"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Monthly {
                week_ordinal: 1,
                weekday: "Friday".to_string(),
            })),
            "Every 1st Friday of the month"
        );
    }

    #[test]
    fn yearly_spells_out_month_and_day() {
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Yearly { month: 3, day: 15 })),
            "Every March 15th"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Yearly { month: 12, day: 1 })),
            "Every December 1st"
        );
    }

    #[test]
    fn missing_or_invalid_renders_no_schedule() {
        assert_eq!(format_schedule(None), "No schedule");
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Weekly { interval: 0 })),
            "No schedule"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Monthly {
                week_ordinal: 6,
                weekday: "Monday".to_string(),
            })),
            "No schedule"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Monthly {
                week_ordinal: 2,
                weekday: "  ".to_string(),
            })),
            "No schedule"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Yearly { month: 13, day: 5 })),
            "No schedule"
        );
        assert_eq!(
            format_schedule(Some(&MaintenanceSchedule::Yearly { month: 4, day: 0 })),
            "No schedule"
        );
    }

    #[test]
    fn ordinal_suffix_teens_are_th() {
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(111), "th");
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let json = r#"{"unit":"monthly","weekOrdinal":2,"weekday":"Tuesday"}"#;
        let parsed: MaintenanceSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            MaintenanceSchedule::Monthly {
                week_ordinal: 2,
                weekday: "Tuesday".to_string(),
            }
        );
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }
}
