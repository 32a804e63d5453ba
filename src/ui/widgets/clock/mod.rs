use gtk4::{Label, glib::WeakRef};

use crate::config::ClockConfig;

mod builder;
mod cache;
pub mod calendar;
pub mod context;
mod exec;
pub mod types;

pub use builder::ClockBuilder;

/// Weak handle to a built clock widget.
#[derive(Debug, Clone)]
pub struct Clock {
    pub label: WeakRef<Label>,
}

impl Clock {
    pub fn builder(config: &ClockConfig) -> ClockBuilder {
        ClockBuilder::new(config)
    }
}
