use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Locale, Months, NaiveDate, TimeZone};
use chrono_tz::Tz;
use log::warn;

/// A point in time carried together with the zone it should be rendered in.
/// The local arm keeps chrono's `Local` offset resolution; the fixed arm
/// keeps the tz-database zone so `%Z` prints the zone abbreviation.
#[derive(Debug, Clone, Copy)]
pub enum Moment {
    Local(DateTime<Local>),
    Zoned(DateTime<Tz>),
}

impl Moment {
    /// The wall-clock date in the carried zone.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Local(dt) => dt.date_naive(),
            Self::Zoned(dt) => dt.date_naive(),
        }
    }

    /// Shifts the calendar date by whole months, keeping the time of day.
    /// Day numbers past the end of the target month clamp to its last day.
    /// An out-of-range result leaves the moment unshifted.
    pub fn shifted_months(&self, months: i32) -> Self {
        if months == 0 {
            return *self;
        }
        match self {
            Self::Local(dt) => Self::Local(shift(*dt, months)),
            Self::Zoned(dt) => Self::Zoned(shift(*dt, months)),
        }
    }

    /// Renders the moment through a strftime template with locale-aware
    /// names. A template that fails to parse is returned as literal text
    /// instead of aborting the refresh.
    pub fn format(&self, template: &str, locale: Locale) -> String {
        match self {
            Self::Local(dt) => render(dt, template, locale),
            Self::Zoned(dt) => render(dt, template, locale),
        }
    }
}

fn shift<Z: TimeZone>(dt: DateTime<Z>, months: i32) -> DateTime<Z> {
    let shifted = if months >= 0 {
        dt.clone().checked_add_months(Months::new(months as u32))
    } else {
        dt.clone().checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(dt)
}

fn render<Z: TimeZone>(dt: &DateTime<Z>, template: &str, locale: Locale) -> String
where
    Z::Offset: fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new_with_locale(template, locale).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!("malformed format string {template:?}, printing it verbatim");
        return template.to_string();
    }
    dt.format_localized_with_items(items.into_iter(), locale)
        .to_string()
}
