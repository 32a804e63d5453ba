use chrono::NaiveDate;

/// One-entry cache for the rendered calendar. The grid only depends on the
/// displayed date, so within one day every refresh returns the same bytes.
#[derive(Debug, Default)]
pub struct CalendarCache {
    key: Option<NaiveDate>,
    text: String,
}

impl CalendarCache {
    pub fn get(&self, key: NaiveDate) -> Option<&str> {
        (self.key == Some(key)).then_some(self.text.as_str())
    }

    pub fn store(&mut self, key: NaiveDate, text: String) -> &str {
        self.key = Some(key);
        self.text = text;
        &self.text
    }
}
