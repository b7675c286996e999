use crate::day_overrides::policy;
use policy::{
    ApiEnvelope, DayKey, DayOverride, DayOverridePatch, DayOverrides, IndividualOverrides,
    OverrideGroup, WorkingHoursPolicy,
};
use std::{collections::HashMap, io::BufReader, path::Path};

use anyhow::{Context, Error};
use serde_json::Value;
use tracing::{debug, warn};

/// Loads a policy from a JSON file holding either a bare policy record or the
/// api's `{status, message, data}` envelope around one.
pub fn read_policy(path: &Path) -> Result<WorkingHoursPolicy, Error> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.to_string_lossy()))?;

    let reader = BufReader::new(file);
    let raw: Value = serde_json::from_reader(reader)
        .with_context(|| format!("{} is not valid json", path.to_string_lossy()))?;

    // a policy may carry its own boolean `status`, so the envelope also needs
    // `data` or `message` next to it
    let is_envelope = raw.get("status").is_some_and(Value::is_boolean)
        && (raw.get("data").is_some() || raw.get("message").is_some());
    let policy = if is_envelope {
        let envelope: ApiEnvelope<WorkingHoursPolicy> = serde_json::from_value(raw)
            .with_context(|| "api response did not hold a working hours policy")?;
        envelope.into_result()?
    } else {
        serde_json::from_value::<WorkingHoursPolicy>(raw)
            .with_context(|| "file did not hold a working hours policy")?
    };

    debug!(name = ?policy.name, "loaded working hours policy");
    Ok(policy)
}

/// Turns whatever a policy stores into one override per day for editing.
///
/// Absent or empty overrides give the default week, and so do groups that
/// name no days at all. Individual overrides are returned as they are.
/// Grouped overrides are spread over their days; a day listed by two groups
/// takes the later group and a day no group lists is left out.
pub fn expand_to_individual(input: Option<&DayOverrides>) -> IndividualOverrides {
    let individual = match input {
        Some(DayOverrides::Individual(days)) => days.clone(),
        Some(DayOverrides::Grouped(groups)) => expand_groups(groups),
        None => IndividualOverrides::new(),
    };

    if individual.is_empty() {
        debug!("policy has no day overrides, using the default week");
        return IndividualOverrides::default_week();
    }
    individual
}

fn expand_groups(groups: &[OverrideGroup]) -> IndividualOverrides {
    let mut individual = IndividualOverrides::new();
    for group in groups.iter().filter(|group| !group.days.is_empty()) {
        for &day in &group.days {
            if individual.insert(day, group.settings.clone()).is_some() {
                warn!(?day, "day is listed by more than one override group, keeping the last");
            }
        }
    }

    if !individual.is_empty() {
        for day in DayKey::ALL {
            if !individual.contains(day) {
                warn!(?day, "no override group covers this day, leaving it out");
            }
        }
    }

    individual
}

/// Groups days with identical settings. Groups are ordered by the first day
/// that has their configuration, scanning Monday to Sunday, so days that share
/// settings end up together even when they are not next to each other.
pub fn compress_to_grouped(input: &IndividualOverrides) -> Vec<OverrideGroup> {
    let mut groups: Vec<OverrideGroup> = Vec::new();
    let mut group_for_settings: HashMap<&DayOverride, usize> = HashMap::new();

    for day in DayKey::ALL {
        let Some(settings) = input.get(day) else {
            continue;
        };

        match group_for_settings.get(settings) {
            Some(&index) => groups[index].days.push(day),
            None => {
                group_for_settings.insert(settings, groups.len());
                groups.push(OverrideGroup {
                    days: vec![day],
                    settings: settings.clone(),
                });
            }
        }
    }

    debug!(days = input.len(), groups = groups.len(), "grouped day overrides");
    groups
}

/// Returns a copy of `overrides` with `patch` applied to `day`. A day that
/// wasn't there starts out as a day off.
pub fn with_day(
    overrides: &IndividualOverrides,
    day: DayKey,
    patch: &DayOverridePatch,
) -> IndividualOverrides {
    with_days(overrides, &[day], patch)
}

pub fn with_days(
    overrides: &IndividualOverrides,
    days: &[DayKey],
    patch: &DayOverridePatch,
) -> IndividualOverrides {
    let mut next = overrides.clone();
    for &day in days {
        let current = overrides.get(day).cloned().unwrap_or_default();
        next.insert(day, patch.applied_to(&current));
    }
    next
}

impl WorkingHoursPolicy {
    pub fn editable_overrides(&self) -> IndividualOverrides {
        expand_to_individual(self.day_overrides.as_ref())
    }

    /// Copy of this policy ready to save, with `individual` stored grouped.
    pub fn with_individual_overrides(&self, individual: &IndividualOverrides) -> Self {
        Self {
            day_overrides: Some(DayOverrides::Grouped(compress_to_grouped(individual))),
            ..self.clone()
        }
    }
}
