use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{PolicyError, PolicyResult};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayKey {
    /// Monday-first, the order every grouping scan follows.
    pub const ALL: [DayKey; 7] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
        DayKey::Sunday,
    ];

    pub fn is_weekend(self) -> bool {
        matches!(self, DayKey::Saturday | DayKey::Sunday)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    #[default]
    Full,
    Half,
    Custom,
}

/// Schedule settings for a single day of a working hours policy.
///
/// The hour and break times only mean something while the matching override
/// flag is set. Two overrides are the same configuration only when every
/// field is equal, so `"09:00"` and `"9:00"` are different.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayOverride {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub override_hours: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_time: String,
    #[serde(default)]
    pub override_break: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_break_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_break_time: String,
    #[serde(default)]
    pub day_type: DayType,
}

impl DayOverride {
    /// A plain working day on the policy's default hours.
    pub fn working_day() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// A non-working day.
    pub fn day_off() -> Self {
        Self::default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Partial update for one day. `None` leaves the field as it is.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayOverridePatch {
    pub enabled: Option<bool>,
    pub override_hours: Option<bool>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub override_break: Option<bool>,
    pub start_break_time: Option<String>,
    pub end_break_time: Option<String>,
    pub day_type: Option<DayType>,
}

impl DayOverridePatch {
    /// Returns `current` with this patch applied. Switching an override flag
    /// off clears the times it gates.
    pub fn applied_to(&self, current: &DayOverride) -> DayOverride {
        let mut next = current.clone();

        if let Some(enabled) = self.enabled {
            next.enabled = enabled;
        }
        if let Some(override_hours) = self.override_hours {
            next.override_hours = override_hours;
        }
        if let Some(start_time) = &self.start_time {
            next.start_time = start_time.clone();
        }
        if let Some(end_time) = &self.end_time {
            next.end_time = end_time.clone();
        }
        if let Some(override_break) = self.override_break {
            next.override_break = override_break;
        }
        if let Some(start_break_time) = &self.start_break_time {
            next.start_break_time = start_break_time.clone();
        }
        if let Some(end_break_time) = &self.end_break_time {
            next.end_break_time = end_break_time.clone();
        }
        if let Some(day_type) = self.day_type {
            next.day_type = day_type;
        }

        if self.override_hours == Some(false) {
            next.start_time.clear();
            next.end_time.clear();
        }
        if self.override_break == Some(false) {
            next.start_break_time.clear();
            next.end_break_time.clear();
        }

        next
    }
}

/// Days sharing one configuration. Serializes as a single object with the
/// override fields next to `days`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OverrideGroup {
    pub days: Vec<DayKey>,
    #[serde(flatten)]
    pub settings: DayOverride,
}

/// One override per day, keyed by day name. Iterates Monday first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct IndividualOverrides(BTreeMap<DayKey, DayOverride>);

impl IndividualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monday to Friday working full days, Saturday and Sunday off, nothing
    /// overridden.
    pub fn default_week() -> Self {
        DayKey::ALL
            .into_iter()
            .map(|day| {
                let settings = if day.is_weekend() {
                    DayOverride::day_off()
                } else {
                    DayOverride::working_day()
                };
                (day, settings)
            })
            .collect()
    }

    pub fn get(&self, day: DayKey) -> Option<&DayOverride> {
        self.0.get(&day)
    }

    pub fn contains(&self, day: DayKey) -> bool {
        self.0.contains_key(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &DayOverride)> {
        self.0.iter().map(|(day, settings)| (*day, settings))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the previous settings for `day`, if any.
    pub(crate) fn insert(&mut self, day: DayKey, settings: DayOverride) -> Option<DayOverride> {
        self.0.insert(day, settings)
    }
}

impl FromIterator<(DayKey, DayOverride)> for IndividualOverrides {
    fn from_iter<I: IntoIterator<Item = (DayKey, DayOverride)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The two shapes a policy's `dayOverrides` field arrives in. Arrays are the
/// grouped form, objects keyed by day name are the older individual form.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum DayOverrides {
    Grouped(Vec<OverrideGroup>),
    Individual(IndividualOverrides),
}

impl<'de> Deserialize<'de> for DayOverrides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            raw @ Value::Array(_) => serde_json::from_value(raw)
                .map(DayOverrides::Grouped)
                .map_err(|err| de::Error::custom(format!("grouped day overrides: {}", err))),
            raw @ Value::Object(_) => serde_json::from_value(raw)
                .map(DayOverrides::Individual)
                .map_err(|err| de::Error::custom(format!("individual day overrides: {}", err))),
            other => Err(de::Error::custom(format!(
                "day overrides must be an array or an object, got {}",
                other
            ))),
        }
    }
}

/// A working hours policy record as the HR api stores it. Fields the
/// override editor doesn't touch are carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursPolicy {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_break_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_break_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_overrides: Option<DayOverrides>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of the HR api: `{status, message, data}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiEnvelope<T> {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> PolicyResult<T> {
        match (self.status, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(PolicyError::Api(
                self.message
                    .unwrap_or_else(|| "response carried no data".to_string()),
            )),
            (false, _) => Err(PolicyError::Api(
                self.message
                    .unwrap_or_else(|| "request failed".to_string()),
            )),
        }
    }
}
