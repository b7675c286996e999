use thiserror::Error;

use crate::day_overrides::policy::DayKey;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("cannot build a label for a group with no days")]
    EmptyDayGroup,

    #[error("day {0:?} is not part of the supplied week order")]
    UnknownDay(DayKey),

    #[error("working hours api error: {0}")]
    Api(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
