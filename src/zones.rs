use chrono::{Local, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::moment::Moment;
use crate::ui::widgets::clock::types::ScrollDirection;

/// One entry of the configured zone list. An empty or unparseable name maps
/// to `Local`, so a ring never fails to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneSlot {
    Local,
    Fixed(Tz),
}

impl ZoneSlot {
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return Self::Local;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Self::Fixed(tz),
            Err(_) => {
                warn!("unknown timezone {name:?}, falling back to local time");
                Self::Local
            }
        }
    }

    pub fn now(&self) -> Moment {
        match self {
            Self::Local => Moment::Local(Local::now()),
            Self::Fixed(tz) => Moment::Zoned(Utc::now().with_timezone(tz)),
        }
    }
}

/// The zone list plus the current selection. Always holds at least one slot.
#[derive(Debug, Clone)]
pub struct ZoneRing {
    slots: Vec<ZoneSlot>,
    index: usize,
}

impl ZoneRing {
    pub fn from_config(zones: &[String], zone: Option<&str>) -> Self {
        let mut slots: Vec<ZoneSlot> = zones.iter().map(|name| ZoneSlot::parse(name)).collect();
        if slots.is_empty() {
            if let Some(name) = zone.filter(|name| !name.trim().is_empty()) {
                slots.push(ZoneSlot::parse(name));
            }
        }
        if slots.is_empty() {
            slots.push(ZoneSlot::Local);
        }
        Self { slots, index: 0 }
    }

    pub fn current(&self) -> ZoneSlot {
        self.slots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Moves the selection one step through the ring, wrapping at both ends.
    /// Returns false for a single-slot ring, which has nowhere to go.
    pub fn cycle(&mut self, direction: ScrollDirection) -> bool {
        if self.slots.len() == 1 {
            return false;
        }
        self.index = match direction {
            ScrollDirection::Up => (self.index + 1) % self.slots.len(),
            ScrollDirection::Down => (self.index + self.slots.len() - 1) % self.slots.len(),
        };
        true
    }

    /// Every slot except the selected one, in ring order.
    pub fn others(&self) -> impl Iterator<Item = ZoneSlot> + '_ {
        let current = self.index;
        self.slots
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx != current)
            .map(|(_, slot)| *slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_yields_local_slot() {
        let ring = ZoneRing::from_config(&[], None);
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.current(), ZoneSlot::Local);
    }

    #[test]
    fn invalid_name_degrades_to_local() {
        assert_eq!(ZoneSlot::parse("Atlantis/Lemuria"), ZoneSlot::Local);
        assert_eq!(ZoneSlot::parse("  "), ZoneSlot::Local);
    }

    #[test]
    fn single_zone_field_used_when_list_empty() {
        let ring = ZoneRing::from_config(&[], Some("Europe/Berlin"));
        assert_eq!(ring.current(), ZoneSlot::Fixed(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn list_takes_precedence_and_keeps_empty_entries_local() {
        let zones = vec!["America/New_York".to_string(), String::new()];
        let ring = ZoneRing::from_config(&zones, Some("Europe/Berlin"));
        assert_eq!(ring.len(), 2);
        assert_eq!(
            ring.current(),
            ZoneSlot::Fixed(chrono_tz::America::New_York)
        );
    }

    #[test]
    fn cycle_is_circular() {
        let zones = vec![
            "America/New_York".to_string(),
            "Europe/Berlin".to_string(),
            "Asia/Tokyo".to_string(),
        ];
        let mut ring = ZoneRing::from_config(&zones, None);
        let start = ring.index();

        for _ in 0..3 {
            assert!(ring.cycle(ScrollDirection::Up));
        }
        assert_eq!(ring.index(), start);

        assert!(ring.cycle(ScrollDirection::Up));
        assert!(ring.cycle(ScrollDirection::Down));
        assert_eq!(ring.index(), start);

        assert!(ring.cycle(ScrollDirection::Down));
        assert_eq!(ring.index(), 2);
    }

    #[test]
    fn singleton_ring_never_moves() {
        let mut ring = ZoneRing::from_config(&[], None);
        assert!(!ring.cycle(ScrollDirection::Up));
        assert!(!ring.cycle(ScrollDirection::Down));
        assert_eq!(ring.index(), 0);
    }

    #[test]
    fn others_skips_the_selection() {
        let zones = vec![
            "America/New_York".to_string(),
            "Europe/Berlin".to_string(),
        ];
        let mut ring = ZoneRing::from_config(&zones, None);
        let rest: Vec<ZoneSlot> = ring.others().collect();
        assert_eq!(rest, vec![ZoneSlot::Fixed(chrono_tz::Europe::Berlin)]);

        ring.cycle(ScrollDirection::Up);
        let rest: Vec<ZoneSlot> = ring.others().collect();
        assert_eq!(rest, vec![ZoneSlot::Fixed(chrono_tz::America::New_York)]);
    }
}
