use crate::day_overrides::policy::DayKey;
use crate::error::{PolicyError, PolicyResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub key: DayKey,
    pub label: &'static str,
}

impl WeekDay {
    fn short_label(&self) -> String {
        self.label.chars().take(3).collect()
    }
}

pub const WEEK_ORDER: [WeekDay; 7] = [
    WeekDay {
        key: DayKey::Monday,
        label: "Monday",
    },
    WeekDay {
        key: DayKey::Tuesday,
        label: "Tuesday",
    },
    WeekDay {
        key: DayKey::Wednesday,
        label: "Wednesday",
    },
    WeekDay {
        key: DayKey::Thursday,
        label: "Thursday",
    },
    WeekDay {
        key: DayKey::Friday,
        label: "Friday",
    },
    WeekDay {
        key: DayKey::Saturday,
        label: "Saturday",
    },
    WeekDay {
        key: DayKey::Sunday,
        label: "Sunday",
    },
];

/// Label for a group of days: `"Friday"` for one day, `"Mon-Thu"` when the
/// days form an unbroken run in `week_order`, otherwise the short names in
/// the order given, e.g. `"Mon, Wed, Fri"`.
///
/// A run is labelled by its earliest and latest day whatever order `days`
/// lists them in, while the comma form keeps the caller's order.
pub fn format_group_label(days: &[DayKey], week_order: &[WeekDay]) -> PolicyResult<String> {
    let entries = days
        .iter()
        .map(|day| {
            week_order
                .iter()
                .position(|entry| entry.key == *day)
                .map(|index| (index, &week_order[index]))
                .ok_or(PolicyError::UnknownDay(*day))
        })
        .collect::<PolicyResult<Vec<_>>>()?;

    match entries.as_slice() {
        [] => Err(PolicyError::EmptyDayGroup),
        [(_, only)] => Ok(only.label.to_string()),
        _ => {
            let mut sorted = entries.clone();
            sorted.sort_by_key(|(index, _)| *index);

            let is_run = sorted.windows(2).all(|pair| pair[1].0 == pair[0].0 + 1);
            if is_run {
                let (_, first) = sorted[0];
                let (_, last) = sorted[sorted.len() - 1];
                return Ok(format!("{}-{}", first.short_label(), last.short_label()));
            }

            Ok(entries
                .iter()
                .map(|(_, entry)| entry.short_label())
                .collect::<Vec<_>>()
                .join(", "))
        }
    }
}
