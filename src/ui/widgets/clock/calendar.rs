use chrono::{Datelike, Days, Locale, Months, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::ui::widgets::clock::types::{CalendarStyle, WeekStyle, WeeksPosition};

/// Renders the month of `displayed` as a text grid: a localized weekday
/// header followed by one line per week. Cells are two columns wide and
/// separated by single spaces; the cell matching `displayed`'s day gets the
/// today wrapper. Week numbers, when styled, flank each line on the
/// configured side.
pub fn month_text(
    displayed: NaiveDate,
    first_weekday: Weekday,
    locale: Locale,
    style: &CalendarStyle,
) -> String {
    let highlight = displayed.day();
    let month_start = displayed.with_day(1).unwrap_or(displayed);
    let days = days_in_month(month_start);
    let lead = month_start.weekday().days_since(first_weekday) as usize;
    let rows = (lead + days as usize).div_ceil(7);

    let mut out = String::new();

    if let Some(weeks) = &style.weeks {
        // Keep the header aligned past the week column and its separator.
        if weeks.position == WeeksPosition::Left {
            out.push_str(&" ".repeat(3 + weeks.pad));
        }
    }
    out.push_str(&header_row(first_weekday, locale, style.weekday_header.as_deref()));

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let first_day = if row == 0 { 1 } else { (row * 7 - lead + 1) as u32 };
        let last_day = (((row + 1) * 7 - lead) as u32).min(days);
        let row_date = month_start.with_day(first_day).unwrap_or(month_start);

        let mut cells: Vec<String> = Vec::with_capacity(7);
        cells.extend(std::iter::repeat_n("  ".to_string(), if row == 0 { lead } else { 0 }));
        for day in first_day..=last_day {
            let number = format!("{day:>2}");
            let template = if day == highlight { &style.today } else { &style.day };
            cells.push(template.replace("{}", &number));
        }

        let mut line = String::new();
        match &style.weeks {
            Some(weeks) if weeks.position == WeeksPosition::Left => {
                line.push_str(&week_number(weeks, row_date));
                line.push(' ');
                line.push_str(&cells.join(" "));
            }
            Some(weeks) if weeks.position == WeeksPosition::Right => {
                line.push_str(&cells.join(" "));
                let missing = 7 - cells.len();
                if missing > 0 {
                    line.push_str(&" ".repeat(3 * missing));
                }
                line.push(' ');
                line.push_str(&week_number(weeks, row_date));
            }
            _ => line.push_str(&cells.join(" ")),
        }
        lines.push(line);
    }
    out.push_str(&lines.join("\n"));

    out
}

/// Week numbers follow the week definition the first weekday implies:
/// ISO weeks for Monday-first locales, Sunday-based week-of-year otherwise.
pub fn week_spec(first_weekday: Weekday) -> &'static str {
    if first_weekday == Weekday::Mon {
        "%V"
    } else {
        "%U"
    }
}

/// Visible columns a `{}` template contributes around its substitution:
/// the template minus markup tags and the placeholder span.
pub fn template_pad(template: &str) -> usize {
    let mut stripped = template.to_string();
    if let (Some(open), Some(close)) = (stripped.find('{'), stripped.rfind('}')) {
        if open < close {
            stripped.replace_range(open..=close, "");
        }
    }

    let mut count = 0;
    let mut in_tag = false;
    for ch in stripped.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => count += 1,
            _ => {}
        }
    }
    count
}

fn header_row(first_weekday: Weekday, locale: Locale, template: Option<&str>) -> String {
    let mut names = Vec::with_capacity(7);
    let mut weekday = first_weekday;
    for _ in 0..7 {
        names.push(weekday_abbrev(weekday, locale));
        weekday = weekday.succ();
    }
    let row = format!("{}\n", names.join(" "));
    match template {
        Some(template) => template.replace("{}", &row),
        None => row,
    }
}

/// Locale abbreviation cut down to at most two display columns and padded
/// back up to two, so CJK abbreviations stay one wide glyph and short
/// ASCII names line up underneath the day cells.
fn weekday_abbrev(weekday: Weekday, locale: Locale) -> String {
    // 2023-01-01 is a Sunday.
    let reference = NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(weekday.num_days_from_sunday() as u64))
        .unwrap();
    let mut name = reference.format_localized("%a", locale).to_string();
    while name.width() > 2 {
        name.pop();
    }
    let padding = 2 - name.width();
    if padding > 0 {
        name.insert_str(0, &" ".repeat(padding));
    }
    name
}

fn week_number(weeks: &WeekStyle, row_date: NaiveDate) -> String {
    weeks
        .template
        .replace("{}", &row_date.format(weeks.spec).to_string())
}

fn days_in_month(month_start: NaiveDate) -> u32 {
    month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_counts_text_outside_tags_and_placeholder() {
        assert_eq!(template_pad("{}"), 0);
        assert_eq!(template_pad("<small>{}</small>"), 0);
        assert_eq!(template_pad("W{}"), 1);
        assert_eq!(template_pad("<b>KW{}</b>"), 2);
    }

    #[test]
    fn weekday_abbrevs_are_two_columns() {
        for (weekday, expected) in [
            (Weekday::Sun, "Su"),
            (Weekday::Mon, "Mo"),
            (Weekday::Sat, "Sa"),
        ] {
            assert_eq!(weekday_abbrev(weekday, Locale::POSIX), expected);
        }
    }

    #[test]
    fn month_lengths() {
        let feb_leap = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(days_in_month(feb_leap.with_day(1).unwrap()), 29);
        let feb = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
        assert_eq!(days_in_month(feb.with_day(1).unwrap()), 28);
        let dec = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(days_in_month(dec), 31);
    }
}
