use chrono::{Locale, NaiveDate, Weekday};

use crate::config::ClockConfig;
use crate::locale::LocaleSpec;
use crate::ui::widgets::clock::cache::CalendarCache;
use crate::ui::widgets::clock::calendar;
use crate::ui::widgets::clock::types::{
    CalendarStyle, ScrollDirection, ScrollMode, WeekStyle,
};
use crate::zones::ZoneRing;

/// Tooltip placeholder receiving the month grid.
pub const CALENDAR_PLACEHOLDER: &str = "{calendar}";
/// Tooltip placeholder receiving the other configured zones.
pub const ZONE_LIST_PLACEHOLDER: &str = "{timezones}";

pub struct ClockOutput {
    pub label: String,
    pub tooltip: Option<String>,
}

/// Parsed settings plus the widget's runtime state. Everything the refresh
/// path computes lives here; the GTK layer only pushes the strings into the
/// label.
pub struct ClockContext {
    format: String,
    tooltip_format: Option<String>,
    wants_calendar: bool,
    wants_zone_list: bool,

    locale: Locale,
    first_weekday: Weekday,
    style: CalendarStyle,
    interval: u32,
    scroll: ScrollMode,

    zones: ZoneRing,
    shift: i32,
    cache: CalendarCache,
}

impl ClockContext {
    pub fn new(config: &ClockConfig) -> Self {
        let LocaleSpec {
            locale,
            first_weekday,
        } = LocaleSpec::resolve(config.locale.as_deref());
        let zones = ZoneRing::from_config(&config.timezones, config.timezone.as_deref());

        // Placeholder checks ignore whitespace so "{ calendar }" still
        // switches the calendar machinery on.
        let (wants_calendar, wants_zone_list) = match &config.tooltip_format {
            Some(template) => {
                let stripped: String = template.chars().filter(|c| !c.is_whitespace()).collect();
                (
                    stripped.contains(CALENDAR_PLACEHOLDER),
                    stripped.contains(ZONE_LIST_PLACEHOLDER),
                )
            }
            None => (false, false),
        };

        let weeks = config.calendar_weeks_pos.map(|position| {
            let template = config
                .format_calendar_weeks
                .clone()
                .unwrap_or_else(|| "{}".into());
            WeekStyle {
                position,
                pad: calendar::template_pad(&template),
                spec: calendar::week_spec(first_weekday),
                template,
            }
        });
        let style = CalendarStyle {
            day: config.format_calendar.clone(),
            today: config.today_format.clone(),
            weekday_header: config.format_calendar_weekdays.clone(),
            weeks,
        };

        let scroll = if config.calendar_shift != 0 && wants_calendar {
            ScrollMode::ShiftMonths {
                step: config.calendar_shift,
            }
        } else {
            ScrollMode::CycleZones
        };

        Self {
            format: config.format.clone(),
            tooltip_format: config.tooltip_format.clone(),
            wants_calendar,
            wants_zone_list,
            locale,
            first_weekday,
            style,
            interval: config.interval.max(1),
            scroll,
            zones,
            shift: 0,
            cache: CalendarCache::default(),
        }
    }

    pub fn interval(&self) -> u64 {
        u64::from(self.interval)
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        self.scroll
    }

    pub fn zone_index(&self) -> usize {
        self.zones.index()
    }

    pub fn month_shift(&self) -> i32 {
        self.shift
    }

    /// Applies one scroll step. Returns whether anything changed and a
    /// redraw is due.
    pub fn handle_scroll(&mut self, direction: ScrollDirection) -> bool {
        match self.scroll {
            ScrollMode::ShiftMonths { step } => {
                self.shift += match direction {
                    ScrollDirection::Up => step,
                    ScrollDirection::Down => -step,
                };
                true
            }
            ScrollMode::CycleZones => self.zones.cycle(direction),
        }
    }

    /// The pointer leaving the widget drops any accumulated month shift.
    pub fn pointer_left(&mut self) -> bool {
        if self.shift != 0 {
            self.shift = 0;
            true
        } else {
            false
        }
    }

    /// Computes the label markup and, when configured, the tooltip markup
    /// for the current instant.
    pub fn render(&mut self) -> ClockOutput {
        let now = self.zones.current().now();
        let label = now.format(&self.format, self.locale);

        let tooltip = self.tooltip_format.clone().map(|template| {
            let shown = now.shifted_months(self.shift);
            let mut text = shown.format(&template, self.locale);
            if self.wants_calendar {
                let grid = self.calendar_text(shown.date());
                text = text.replace(CALENDAR_PLACEHOLDER, &grid);
            }
            if self.wants_zone_list {
                text = text.replace(ZONE_LIST_PLACEHOLDER, &self.zone_list());
            }
            text
        });

        ClockOutput { label, tooltip }
    }

    fn calendar_text(&mut self, displayed: NaiveDate) -> String {
        if let Some(cached) = self.cache.get(displayed) {
            return cached.to_string();
        }
        let grid = calendar::month_text(displayed, self.first_weekday, self.locale, &self.style);
        self.cache.store(displayed, grid).to_string()
    }

    /// Current time in every non-selected zone, one line each. Empty when
    /// only a single zone is configured.
    fn zone_list(&self) -> String {
        if self.zones.len() == 1 {
            return String::new();
        }
        let mut out = String::new();
        for slot in self.zones.others() {
            out.push_str(&slot.now().format(&self.format, self.locale));
            out.push('\n');
        }
        out
    }
}
