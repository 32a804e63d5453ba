use serde::{Deserialize, Serialize};

/// Where the week-number column sits relative to the day grid.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WeeksPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// What a scroll step does, fixed at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Step through the configured zone ring.
    CycleZones,
    /// Shift the displayed calendar month by `step` per scroll.
    ShiftMonths { step: i32 },
}

/// The `{}` templates applied to calendar grid fragments.
#[derive(Debug, Clone)]
pub struct CalendarStyle {
    /// Wrapper for an ordinary day cell.
    pub day: String,
    /// Wrapper for the highlighted day cell.
    pub today: String,
    /// Wrapper for the whole weekday header row.
    pub weekday_header: Option<String>,
    pub weeks: Option<WeekStyle>,
}

#[derive(Debug, Clone)]
pub struct WeekStyle {
    pub position: WeeksPosition,
    /// Wrapper for a formatted week number.
    pub template: String,
    /// `%V` for Monday-first weeks, `%U` otherwise.
    pub spec: &'static str,
    /// Columns the wrapper itself occupies, for header alignment.
    pub pad: usize,
}
