use chrono::{Locale, Weekday};
use log::warn;

/// Locale data the widget needs from the process environment: which locale
/// to format names with and which weekday opens the week.
#[derive(Debug, Clone, Copy)]
pub struct LocaleSpec {
    pub locale: Locale,
    pub first_weekday: Weekday,
}

impl LocaleSpec {
    /// Resolves the configured locale name, or the `LC_ALL`/`LC_TIME`/`LANG`
    /// environment when none is configured. Unknown names degrade to POSIX.
    pub fn resolve(configured: Option<&str>) -> Self {
        let name = configured
            .map(str::to_owned)
            .or_else(|| environment_locale_name());
        let locale = match name.as_deref() {
            None | Some("") | Some("C") | Some("POSIX") => Locale::POSIX,
            Some(raw) => match parse_locale(raw) {
                Some(locale) => locale,
                None => {
                    warn!("unknown locale {raw:?}, falling back to POSIX");
                    Locale::POSIX
                }
            },
        };
        Self {
            locale,
            first_weekday: first_day_of_week(name.as_deref()),
        }
    }
}

fn environment_locale_name() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|name| !name.is_empty())
}

/// Accepts glibc-style names ("de_DE.UTF-8", "en_US@euro") by stripping the
/// codeset and modifier suffixes chrono's locale table does not carry.
fn parse_locale(raw: &str) -> Option<Locale> {
    if let Ok(locale) = Locale::try_from(raw) {
        return Some(locale);
    }
    let base = raw.split(['.', '@']).next().unwrap_or(raw);
    Locale::try_from(base).ok()
}

/// Reads the first weekday out of glibc's locale database, combining the
/// reference date of `_NL_TIME_WEEK_1STDAY` with the `_NL_TIME_FIRST_WEEKDAY`
/// offset, the same computation the cal utility performs. Anything missing
/// means Sunday.
#[cfg(all(unix, target_env = "gnu"))]
pub fn first_day_of_week(locale_name: Option<&str>) -> Weekday {
    use chrono::{Datelike, NaiveDate};
    use std::ffi::CString;

    // glibc langinfo.h week keywords. The libc crate only wraps the POSIX
    // nl_items, so the GNU codes are spelled out here:
    // _NL_ITEM(LC_TIME, index) packs to (2 << 16) | index.
    const _NL_TIME_WEEK_1STDAY: libc::nl_item = 0x20066;
    const _NL_TIME_FIRST_WEEKDAY: libc::nl_item = 0x20068;

    let Ok(name) = CString::new(locale_name.unwrap_or("")) else {
        return Weekday::Sun;
    };
    unsafe {
        let posix_locale = libc::newlocale(libc::LC_ALL_MASK, name.as_ptr(), std::ptr::null_mut());
        if posix_locale.is_null() {
            return Weekday::Sun;
        }
        let packed = libc::nl_langinfo_l(_NL_TIME_WEEK_1STDAY, posix_locale) as libc::intptr_t;
        let offset_ptr = libc::nl_langinfo_l(_NL_TIME_FIRST_WEEKDAY, posix_locale);
        let offset = if offset_ptr.is_null() { 1 } else { *offset_ptr as u8 };
        libc::freelocale(posix_locale);

        let base = NaiveDate::from_ymd_opt(
            (packed / 10000) as i32,
            (packed / 100 % 100) as u32,
            (packed % 100) as u32,
        );
        match base {
            Some(date) if offset >= 1 => {
                let mut weekday = date.weekday();
                for _ in 0..(offset - 1) {
                    weekday = weekday.succ();
                }
                weekday
            }
            _ => Weekday::Sun,
        }
    }
}

#[cfg(not(all(unix, target_env = "gnu")))]
pub fn first_day_of_week(_locale_name: Option<&str>) -> Weekday {
    Weekday::Sun
}
