use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{ChimeError, ChimeErrorKind};
use crate::chime_err;
use crate::ui::widgets::clock::types::WeeksPosition;

/// The clock widget's configuration tree, one instance per widget.
/// Every field has a usable default so an empty file is a valid config.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClockConfig {
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub tooltip_format: Option<String>,

    /// Refresh interval in seconds.
    #[serde(default = "default_interval")]
    pub interval: u32,

    #[serde(default)]
    pub timezone: Option<String>,

    /// Zone list for scroll cycling; empty entries mean local time.
    #[serde(default)]
    pub timezones: Vec<String>,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default = "default_today_format")]
    pub today_format: String,

    #[serde(default = "default_day_format")]
    pub format_calendar: String,

    #[serde(default)]
    pub format_calendar_weeks: Option<String>,

    #[serde(default)]
    pub format_calendar_weekdays: Option<String>,

    #[serde(default)]
    pub calendar_weeks_pos: Option<WeeksPosition>,

    /// Months added/removed per scroll step while the calendar is shown.
    /// Zero keeps scrolling on timezone cycling.
    #[serde(default)]
    pub calendar_shift: i32,

    #[serde(default)]
    pub on_scroll_up: Option<String>,

    #[serde(default)]
    pub on_scroll_down: Option<String>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            tooltip_format: None,
            interval: default_interval(),
            timezone: None,
            timezones: Vec::new(),
            locale: None,
            today_format: default_today_format(),
            format_calendar: default_day_format(),
            format_calendar_weeks: None,
            format_calendar_weekdays: None,
            calendar_weeks_pos: None,
            calendar_shift: 0,
            on_scroll_up: None,
            on_scroll_down: None,
        }
    }
}

fn default_format() -> String {
    "%H:%M".into()
}
fn default_interval() -> u32 {
    60
}
fn default_today_format() -> String {
    "<b><u>{}</u></b>".into()
}
fn default_day_format() -> String {
    "{}".into()
}

fn config_file() -> Result<PathBuf, ChimeError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chime");
    let dir = xdg_dirs
        .get_config_home()
        .ok_or_else(|| chime_err!(ChimeErrorKind::DirRead, "Could not find config directory"))?;
    std::fs::create_dir_all(&dir)
        .map_err(|e| chime_err!(ChimeErrorKind::DirCreate, e.to_string()))?;
    Ok(dir.join("config.json"))
}

pub fn load_config() -> Result<ClockConfig, ChimeError> {
    let loc = config_file()?;
    if !loc.exists() {
        info!("no config at {}, using defaults", loc.display());
        return Ok(ClockConfig::default());
    }

    let file =
        File::open(loc).map_err(|e| chime_err!(ChimeErrorKind::FileOpen, e.to_string()))?;
    let reader = BufReader::new(file);

    serde_json::from_reader::<_, ClockConfig>(reader)
        .map_err(|e| chime_err!(ChimeErrorKind::Deserialize, e.to_string()))
}
