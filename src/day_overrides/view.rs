use serde::Serialize;

use crate::day_overrides::codec::{compress_to_grouped, expand_to_individual};
use crate::day_overrides::label::{format_group_label, WEEK_ORDER};
use crate::day_overrides::policy::{DayKey, DayType, OverrideGroup, WorkingHoursPolicy};
use crate::day_overrides::time_format::{format_time_for_display, EmptyTimeDisplay};
use crate::error::PolicyResult;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub label: String,
    pub days: Vec<DayKey>,
    pub enabled: bool,
    pub day_type: DayType,
    /// `None` while the group follows the policy's default hours.
    pub hours: Option<String>,
    pub break_time: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub name: Option<String>,
    pub default_hours: String,
    pub default_break: String,
    pub groups: Vec<GroupSummary>,
}

fn time_range(start: &str, end: &str, empty: EmptyTimeDisplay) -> String {
    format!(
        "{} - {}",
        format_time_for_display(start, empty),
        format_time_for_display(end, empty)
    )
}

fn optional_time(time: Option<&String>) -> &str {
    time.map(String::as_str).unwrap_or_default()
}

fn summarize_group(group: &OverrideGroup) -> PolicyResult<GroupSummary> {
    let settings = &group.settings;
    Ok(GroupSummary {
        label: format_group_label(&group.days, &WEEK_ORDER)?,
        days: group.days.clone(),
        enabled: settings.enabled,
        day_type: settings.day_type,
        hours: settings.override_hours.then(|| {
            time_range(
                &settings.start_time,
                &settings.end_time,
                EmptyTimeDisplay::Placeholder,
            )
        }),
        break_time: settings.override_break.then(|| {
            time_range(
                &settings.start_break_time,
                &settings.end_break_time,
                EmptyTimeDisplay::Placeholder,
            )
        }),
    })
}

/// Read-only view of a policy: default hours plus one entry per group of days
/// sharing a schedule. Accepts either stored form of the day overrides.
pub fn summarize_policy(policy: &WorkingHoursPolicy) -> PolicyResult<PolicySummary> {
    let individual = expand_to_individual(policy.day_overrides.as_ref());
    let groups = compress_to_grouped(&individual)
        .iter()
        .map(summarize_group)
        .collect::<PolicyResult<Vec<_>>>()?;

    Ok(PolicySummary {
        name: policy.name.clone(),
        default_hours: time_range(
            optional_time(policy.start_time.as_ref()),
            optional_time(policy.end_time.as_ref()),
            EmptyTimeDisplay::NotApplicable,
        ),
        default_break: time_range(
            optional_time(policy.start_break_time.as_ref()),
            optional_time(policy.end_break_time.as_ref()),
            EmptyTimeDisplay::NotApplicable,
        ),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, str::FromStr};

    use crate::day_overrides::codec::read_policy;

    use super::*;

    #[test]
    fn test_summarize_grouped_policy() {
        let path = PathBuf::from_str("./test_datasets/policy_grouped_response.json").unwrap();
        let policy = read_policy(&path).unwrap();

        let summary = summarize_policy(&policy).unwrap();

        assert_eq!(summary.name.as_deref(), Some("Head office"));
        assert_eq!(summary.default_hours, "09:00 AM - 06:00 PM");
        assert_eq!(summary.default_break, "01:00 PM - 02:00 PM");
        assert_eq!(summary.groups.len(), 3);

        assert_eq!(summary.groups[0].label, "Mon-Thu");
        assert!(summary.groups[0].enabled);
        assert_eq!(summary.groups[0].hours, None);

        assert_eq!(summary.groups[1].label, "Friday");
        assert_eq!(summary.groups[1].day_type, DayType::Custom);
        assert_eq!(
            summary.groups[1].hours.as_deref(),
            Some("10:00 AM - 02:00 PM")
        );
        assert_eq!(summary.groups[1].break_time, None);

        assert_eq!(summary.groups[2].label, "Sat-Sun");
        assert!(!summary.groups[2].enabled);
    }

    #[test]
    fn test_summarize_policy_without_overrides() {
        let path = PathBuf::from_str("./test_datasets/policy_without_overrides.json").unwrap();
        let policy = read_policy(&path).unwrap();

        let summary = summarize_policy(&policy).unwrap();

        assert_eq!(summary.default_hours, "10:00 AM - 07:00 PM");
        assert_eq!(summary.default_break, "N/A - N/A");
        let labels: Vec<&str> = summary
            .groups
            .iter()
            .map(|group| group.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Mon-Fri", "Sat-Sun"]);
    }

    #[test]
    fn test_summarize_shows_placeholder_for_blank_override_times() {
        let policy: WorkingHoursPolicy = serde_json::from_value(serde_json::json!({
            "dayOverrides": {
                "monday": { "enabled": true, "dayType": "full" },
                "tuesday": { "enabled": true, "overrideBreak": true, "startBreakTime": "12:00", "dayType": "full" },
                "wednesday": { "enabled": true, "dayType": "full" },
                "thursday": { "enabled": true, "dayType": "full" },
                "friday": { "enabled": true, "dayType": "full" },
                "saturday": { "enabled": false, "dayType": "full" },
                "sunday": { "enabled": false, "dayType": "full" }
            }
        }))
        .unwrap();

        let summary = summarize_policy(&policy).unwrap();

        assert_eq!(summary.groups[0].label, "Mon, Wed, Thu, Fri");
        assert_eq!(summary.groups[1].label, "Tuesday");
        assert_eq!(
            summary.groups[1].break_time.as_deref(),
            Some("12:00 PM - --:--")
        );
    }
}
