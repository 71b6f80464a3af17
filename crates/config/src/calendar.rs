//! Region planting calendars
//!
//! Favorable planting months per crop for each climate profile. Rough
//! baselines; the advisory text tells the user to name their region for
//! finer guidance when a crop is missing.

use farm_advisor_core::Region;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Crop → favorable months (1..=12) for every region profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    regions: HashMap<Region, HashMap<String, Vec<u8>>>,
}

impl CalendarConfig {
    pub fn builtin() -> Self {
        let mut regions = HashMap::new();
        regions.insert(
            Region::Med,
            crop_months(&[
                ("طماطم", &[3, 4, 8, 9]),
                ("خيار", &[3, 4]),
                ("بطاطا", &[9, 10, 1, 2]),
                ("قمح", &[10, 11, 12]),
                ("فلفل", &[4]),
                ("باذنجان", &[4, 5]),
            ]),
        );
        regions.insert(
            Region::GulfHot,
            crop_months(&[
                ("طماطم", &[9, 10, 11]),
                ("خيار", &[9, 10, 11]),
                ("بطاطا", &[10, 11, 12]),
                ("قمح", &[11, 12]),
                ("فلفل", &[10, 11]),
                ("باذنجان", &[10, 11]),
            ]),
        );
        regions.insert(
            Region::HighlandCool,
            crop_months(&[
                ("طماطم", &[4, 5]),
                ("خيار", &[4, 5]),
                ("بطاطا", &[4, 5]),
                ("قمح", &[9, 10]),
                ("فلفل", &[5]),
                ("باذنجان", &[5]),
            ]),
        );
        Self { regions }
    }

    /// Favorable months for a crop in a region; `None` when the crop is
    /// not in that region's calendar.
    pub fn favorable_months(&self, region: Region, crop: &str) -> Option<&[u8]> {
        self.regions
            .get(&region)
            .and_then(|crops| crops.get(crop))
            .map(|v| v.as_slice())
            .filter(|v| !v.is_empty())
    }

    /// Exact membership test used to judge an extracted month.
    pub fn is_favorable(&self, region: Region, crop: &str, month: u8) -> Option<bool> {
        self.favorable_months(region, crop)
            .map(|months| months.contains(&month))
    }
}

fn crop_months(entries: &[(&str, &[u8])]) -> HashMap<String, Vec<u8>> {
    entries
        .iter()
        .map(|(crop, months)| (crop.to_string(), months.to_vec()))
        .collect()
}

/// Arabic display name for a month number; falls back to the number itself.
pub fn month_name(n: u8) -> String {
    const NAMES: [&str; 12] = [
        "يناير", "فبراير", "مارس", "ابريل", "مايو", "يونيو", "يوليو", "اغسطس",
        "سبتمبر", "اكتوبر", "نوفمبر", "ديسمبر",
    ];
    match n {
        1..=12 => NAMES[n as usize - 1].to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tomato_months_default_region() {
        let cal = CalendarConfig::builtin();
        assert_eq!(
            cal.favorable_months(Region::Med, "طماطم"),
            Some(&[3u8, 4, 8, 9][..])
        );
    }

    #[test]
    fn test_membership() {
        let cal = CalendarConfig::builtin();
        assert_eq!(cal.is_favorable(Region::Med, "طماطم", 3), Some(true));
        assert_eq!(cal.is_favorable(Region::Med, "طماطم", 6), Some(false));
        assert_eq!(cal.is_favorable(Region::Med, "نعناع", 3), None);
    }

    #[test]
    fn test_every_region_has_a_calendar() {
        let cal = CalendarConfig::builtin();
        for region in Region::ALL {
            assert!(cal.favorable_months(region, "قمح").is_some());
        }
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "يناير");
        assert_eq!(month_name(12), "ديسمبر");
        assert_eq!(month_name(13), "13");
    }
}
