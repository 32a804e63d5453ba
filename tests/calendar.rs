//! Tests for the month-grid text generator: row shape, header layout,
//! week-number placement and the today highlight.

use chrono::{Datelike, Locale, NaiveDate, Weekday};

use chime::ui::widgets::clock::calendar::{month_text, template_pad, week_spec};
use chime::ui::widgets::clock::types::{CalendarStyle, WeekStyle, WeeksPosition};

// ---------------------------------------------------------------------------
// Test style helpers
// ---------------------------------------------------------------------------

fn plain_style() -> CalendarStyle {
    CalendarStyle {
        day: "{}".into(),
        today: "{}".into(),
        weekday_header: None,
        weeks: None,
    }
}

fn highlight_style() -> CalendarStyle {
    CalendarStyle {
        today: "<b><u>{}</u></b>".into(),
        ..plain_style()
    }
}

fn weeks_style(position: WeeksPosition, template: &str, first_weekday: Weekday) -> CalendarStyle {
    CalendarStyle {
        weeks: Some(WeekStyle {
            position,
            template: template.into(),
            spec: week_spec(first_weekday),
            pad: template_pad(template),
        }),
        ..plain_style()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ===========================================================================
// Grid shape
// ===========================================================================

mod grid_shape {
    use super::*;

    fn check_month(displayed: NaiveDate, first_weekday: Weekday) {
        let text = month_text(displayed, first_weekday, Locale::POSIX, &plain_style());

        let month_start = displayed.with_day(1).unwrap();
        let days_in_month = (1..=31u32)
            .rev()
            .find(|d| month_start.with_day(*d).is_some())
            .unwrap();
        let lead = month_start.weekday().days_since(first_weekday) as usize;
        let expected_rows = (lead + days_in_month as usize).div_ceil(7);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines.len(),
            expected_rows + 1,
            "{displayed} with week starting {first_weekday}"
        );

        // Every full week spans 7 three-column slots minus the last gap.
        for line in &lines[1..lines.len() - 1] {
            assert_eq!(line.chars().count(), 20, "{line:?}");
        }

        // All day numbers present, in order, exactly once.
        let days: Vec<u32> = lines[1..]
            .iter()
            .flat_map(|line| line.split_whitespace())
            .map(|cell| cell.parse().unwrap())
            .collect();
        assert_eq!(days, (1..=days_in_month).collect::<Vec<u32>>());
    }

    #[test]
    fn row_counts_and_day_sequences() {
        let months = [
            date(2024, 1, 15),
            date(2024, 2, 10),
            date(2023, 2, 1),
            date(2026, 8, 4),
            date(2025, 12, 31),
        ];
        for displayed in months {
            check_month(displayed, Weekday::Sun);
            check_month(displayed, Weekday::Mon);
        }
    }

    #[test]
    fn four_row_february() {
        // February 2021 starts on Monday and has exactly 28 days.
        let text = month_text(date(2021, 2, 10), Weekday::Mon, Locale::POSIX, &plain_style());
        assert_eq!(text.lines().count(), 1 + 4);
    }

    #[test]
    fn six_row_month() {
        // March 2025 starts on Saturday; Sunday-first needs 6 rows.
        let text = month_text(date(2025, 3, 10), Weekday::Sun, Locale::POSIX, &plain_style());
        assert_eq!(text.lines().count(), 1 + 6);
    }
}

// ===========================================================================
// January 2024 reference layout
// ===========================================================================

mod january_2024 {
    use super::*;

    #[test]
    fn sunday_first_layout() {
        let text = month_text(date(2024, 1, 15), Weekday::Sun, Locale::POSIX, &highlight_style());
        let expected = "Su Mo Tu We Th Fr Sa\n\
                        \x20   1  2  3  4  5  6\n\
                        \x207  8  9 10 11 12 13\n\
                        14 <b><u>15</u></b> 16 17 18 19 20\n\
                        21 22 23 24 25 26 27\n\
                        28 29 30 31";
        assert_eq!(text, expected);
    }

    #[test]
    fn monday_first_layout() {
        let text = month_text(date(2024, 1, 15), Weekday::Mon, Locale::POSIX, &plain_style());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Mo Tu We Th Fr Sa Su");
        // January 1st 2024 is a Monday, so the first row is full.
        assert_eq!(lines[1], " 1  2  3  4  5  6  7");
        assert_eq!(lines[5], "29 30 31");
    }
}

// ===========================================================================
// Week numbers
// ===========================================================================

mod week_numbers {
    use super::*;

    #[test]
    fn spec_follows_first_weekday() {
        assert_eq!(week_spec(Weekday::Mon), "%V");
        for other in [
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(week_spec(other), "%U");
        }
    }

    #[test]
    fn right_side_iso_weeks() {
        let style = weeks_style(WeeksPosition::Right, "{}", Weekday::Mon);
        let text = month_text(date(2024, 1, 15), Weekday::Mon, Locale::POSIX, &style);
        // The last row misses four cells: twelve columns of padding, then
        // the separator ahead of the week number.
        let last_row = format!("29 30 31{}05", " ".repeat(13));
        let expected = format!(
            "Mo Tu We Th Fr Sa Su\n\
             \x201  2  3  4  5  6  7 01\n\
             \x208  9 10 11 12 13 14 02\n\
             15 16 17 18 19 20 21 03\n\
             22 23 24 25 26 27 28 04\n\
             {last_row}"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn left_side_sunday_weeks() {
        let style = weeks_style(WeeksPosition::Left, "<small>{}</small>", Weekday::Sun);
        let text = month_text(date(2024, 1, 15), Weekday::Sun, Locale::POSIX, &style);
        let lines: Vec<&str> = text.lines().collect();

        // Header sits past the week column: 3 spaces for "NN ".
        assert_eq!(lines[0], "   Su Mo Tu We Th Fr Sa");
        // January 1st 2024 falls before the first Sunday: week 00. The
        // blank Sunday cell leaves four spaces ahead of the first day.
        assert_eq!(lines[1], concat!("<small>00</small> ", "    1  2  3  4  5  6"));
        assert_eq!(lines[2], concat!("<small>01</small> ", " 7  8  9 10 11 12 13"));
        assert_eq!(lines[5], concat!("<small>04</small> ", "28 29 30 31"));
    }

    #[test]
    fn left_pad_accounts_for_template_text() {
        let style = weeks_style(WeeksPosition::Left, "KW{}", Weekday::Mon);
        let text = month_text(date(2024, 1, 15), Weekday::Mon, Locale::POSIX, &style);
        let lines: Vec<&str> = text.lines().collect();
        // Two template columns widen the header offset to 5.
        assert_eq!(lines[0], "     Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[1], "KW01  1  2  3  4  5  6  7");
    }
}

// ===========================================================================
// Highlight
// ===========================================================================

mod highlight {
    use super::*;

    #[test]
    fn displayed_day_gets_today_wrapper() {
        let text = month_text(date(2024, 1, 15), Weekday::Sun, Locale::POSIX, &highlight_style());
        assert!(text.contains("<b><u>15</u></b>"));
        assert!(!text.contains("<b><u>14"));
    }

    #[test]
    fn highlight_follows_displayed_date() {
        let text = month_text(date(2024, 2, 29), Weekday::Mon, Locale::POSIX, &highlight_style());
        assert!(text.contains("<b><u>29</u></b>"));
    }

    #[test]
    fn single_digit_day_keeps_cell_width() {
        let text = month_text(date(2024, 1, 3), Weekday::Sun, Locale::POSIX, &highlight_style());
        assert!(text.contains("<b><u> 3</u></b>"));
    }
}

// ===========================================================================
// Weekday header
// ===========================================================================

mod weekday_header {
    use super::*;

    #[test]
    fn localized_names() {
        let text = month_text(date(2024, 1, 15), Weekday::Mon, Locale::de_DE, &plain_style());
        assert_eq!(text.lines().next().unwrap(), "Mo Di Mi Do Fr Sa So");
    }

    #[test]
    fn wide_glyphs_count_as_two_columns() {
        let text = month_text(date(2024, 1, 15), Weekday::Sun, Locale::ja_JP, &plain_style());
        assert_eq!(text.lines().next().unwrap(), "日 月 火 水 木 金 土");
    }

    #[test]
    fn header_template_wraps_the_row() {
        let style = CalendarStyle {
            weekday_header: Some("<b>{}</b>".into()),
            ..plain_style()
        };
        let text = month_text(date(2024, 1, 15), Weekday::Sun, Locale::POSIX, &style);
        assert!(text.starts_with("<b>Su Mo Tu We Th Fr Sa\n</b>"));
    }
}
