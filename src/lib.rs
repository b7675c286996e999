pub mod day_overrides;
pub mod error;

pub use day_overrides::codec::{
    compress_to_grouped, expand_to_individual, read_policy, with_day, with_days,
};
pub use day_overrides::label::{format_group_label, WeekDay, WEEK_ORDER};
pub use day_overrides::policy::{
    ApiEnvelope, DayKey, DayOverride, DayOverridePatch, DayOverrides, DayType,
    IndividualOverrides, OverrideGroup, WorkingHoursPolicy,
};
pub use day_overrides::time_format::{
    format_time_for_display, time_12_to_24, time_24_to_12, EmptyTimeDisplay, Meridiem,
    TwelveHourTime,
};
pub use day_overrides::view::{summarize_policy, GroupSummary, PolicySummary};
pub use error::{PolicyError, PolicyResult};
