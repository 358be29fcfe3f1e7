//! # Holidays Module
//!
//! Public holiday rules for Switzerland, Germany, and China.
//!
//! ## Responsibilities:
//! - Stable holiday registry (key, display name, country, date rule)
//! - Easter computus for the movable Christian holidays
//! - Lunar-calendar lookup tables for the Chinese festivals (2024-2036)
//! - Per-year holiday maps for panel configuration and tooltips
//!
//! Unknown countries or keys are treated as "no holidays", never as errors.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Countries with holiday support
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Country {
    Switzerland,
    Germany,
    China,
}

impl Country {
    /// All supported countries, in settings-dialog order
    pub const ALL: [Country; 3] = [Country::Switzerland, Country::Germany, Country::China];

    /// Two-letter code used in the settings file
    pub fn code(&self) -> &'static str {
        match self {
            Country::Switzerland => "CH",
            Country::Germany => "DE",
            Country::China => "CN",
        }
    }

    /// Human-readable name for the settings dialog
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::Switzerland => "Switzerland",
            Country::Germany => "Germany",
            Country::China => "China",
        }
    }

    /// Parse a two-letter code; unknown codes map to `None`
    pub fn from_code(code: &str) -> Option<Country> {
        match code {
            "CH" => Some(Country::Switzerland),
            "DE" => Some(Country::Germany),
            "CN" => Some(Country::China),
            _ => None,
        }
    }
}

/// How a holiday's dates are derived for a given year
#[derive(Debug, Clone, Copy)]
enum DateRule {
    /// Same month/day every year
    Fixed { month: u32, day: u32 },
    /// A span of `len` days starting at a fixed month/day
    FixedSpan { month: u32, day: u32, len: u32 },
    /// Offset in days relative to Easter Sunday
    EasterRelative { offset: i64 },
    /// Lunar-calendar holiday resolved through a (year -> month/day) table
    Lunar { table: &'static [(i32, u32, u32)], len: u32 },
}

/// One entry of the holiday registry
#[derive(Debug, Clone, Copy)]
pub struct Holiday {
    /// Stable key persisted in the settings file (e.g. "ch_bundesfeier")
    pub key: &'static str,
    /// Display name shown in tooltips and the settings dialog
    pub name: &'static str,
    /// Country this holiday belongs to
    pub country: Country,
    rule: DateRule,
}

impl Holiday {
    /// All dates of this holiday in the given year (empty outside table range)
    pub fn dates(&self, year: i32) -> Vec<NaiveDate> {
        match self.rule {
            DateRule::Fixed { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day).into_iter().collect()
            }
            DateRule::FixedSpan { month, day, len } => span(year, month, day, len),
            DateRule::EasterRelative { offset } => {
                vec![easter_sunday(year) + Duration::days(offset)]
            }
            DateRule::Lunar { table, len } => table
                .iter()
                .find(|(y, _, _)| *y == year)
                .map(|&(y, m, d)| span(y, m, d, len))
                .unwrap_or_default(),
        }
    }
}

fn span(year: i32, month: u32, day: u32, len: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(start) => (0..len as i64).map(|i| start + Duration::days(i)).collect(),
        None => Vec::new(),
    }
}

/// Compute Easter Sunday via the anonymous Gregorian algorithm
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("computus yields a valid date")
}

// Lunar lookup tables: (year, month, day) of the festival's first day.

const SPRING_FESTIVAL: &[(i32, u32, u32)] = &[
    (2024, 2, 10), (2025, 1, 29), (2026, 2, 17), (2027, 2, 6),
    (2028, 1, 26), (2029, 2, 13), (2030, 2, 3), (2031, 1, 23),
    (2032, 2, 11), (2033, 1, 31), (2034, 2, 19), (2035, 2, 8),
    (2036, 1, 28),
];

const QINGMING: &[(i32, u32, u32)] = &[
    (2024, 4, 4), (2025, 4, 4), (2026, 4, 5), (2027, 4, 5),
    (2028, 4, 4), (2029, 4, 4), (2030, 4, 5), (2031, 4, 5),
    (2032, 4, 4), (2033, 4, 4), (2034, 4, 5), (2035, 4, 5),
    (2036, 4, 4),
];

const DRAGON_BOAT: &[(i32, u32, u32)] = &[
    (2024, 6, 10), (2025, 5, 31), (2026, 6, 19), (2027, 6, 9),
    (2028, 5, 28), (2029, 6, 16), (2030, 6, 5), (2031, 6, 24),
    (2032, 6, 13), (2033, 6, 2), (2034, 6, 22), (2035, 6, 11),
    (2036, 5, 31),
];

const MID_AUTUMN: &[(i32, u32, u32)] = &[
    (2024, 9, 17), (2025, 10, 6), (2026, 9, 25), (2027, 9, 15),
    (2028, 10, 3), (2029, 9, 22), (2030, 9, 12), (2031, 10, 1),
    (2032, 9, 19), (2033, 9, 8), (2034, 9, 28), (2035, 9, 16),
    (2036, 9, 5),
];

/// The full holiday registry, grouped by country
pub const HOLIDAYS: &[Holiday] = &[
    // Switzerland
    Holiday { key: "ch_neujahr", name: "Neujahr", country: Country::Switzerland, rule: DateRule::Fixed { month: 1, day: 1 } },
    Holiday { key: "ch_berchtoldstag", name: "Berchtoldstag", country: Country::Switzerland, rule: DateRule::Fixed { month: 1, day: 2 } },
    Holiday { key: "ch_karfreitag", name: "Karfreitag", country: Country::Switzerland, rule: DateRule::EasterRelative { offset: -2 } },
    Holiday { key: "ch_ostermontag", name: "Ostermontag", country: Country::Switzerland, rule: DateRule::EasterRelative { offset: 1 } },
    Holiday { key: "ch_tag_der_arbeit", name: "Tag der Arbeit", country: Country::Switzerland, rule: DateRule::Fixed { month: 5, day: 1 } },
    Holiday { key: "ch_auffahrt", name: "Auffahrt", country: Country::Switzerland, rule: DateRule::EasterRelative { offset: 39 } },
    Holiday { key: "ch_pfingstmontag", name: "Pfingstmontag", country: Country::Switzerland, rule: DateRule::EasterRelative { offset: 49 } },
    Holiday { key: "ch_bundesfeier", name: "Bundesfeier", country: Country::Switzerland, rule: DateRule::Fixed { month: 8, day: 1 } },
    Holiday { key: "ch_weihnachten", name: "Weihnachten", country: Country::Switzerland, rule: DateRule::Fixed { month: 12, day: 25 } },
    // Germany
    Holiday { key: "de_neujahr", name: "Neujahr", country: Country::Germany, rule: DateRule::Fixed { month: 1, day: 1 } },
    Holiday { key: "de_karfreitag", name: "Karfreitag", country: Country::Germany, rule: DateRule::EasterRelative { offset: -2 } },
    Holiday { key: "de_ostermontag", name: "Ostermontag", country: Country::Germany, rule: DateRule::EasterRelative { offset: 1 } },
    Holiday { key: "de_tag_der_arbeit", name: "Tag der Arbeit", country: Country::Germany, rule: DateRule::Fixed { month: 5, day: 1 } },
    Holiday { key: "de_christi_himmelfahrt", name: "Christi Himmelfahrt", country: Country::Germany, rule: DateRule::EasterRelative { offset: 39 } },
    Holiday { key: "de_pfingstmontag", name: "Pfingstmontag", country: Country::Germany, rule: DateRule::EasterRelative { offset: 49 } },
    Holiday { key: "de_tag_dt_einheit", name: "Tag der Deutschen Einheit", country: Country::Germany, rule: DateRule::Fixed { month: 10, day: 3 } },
    Holiday { key: "de_weihnachten1", name: "1. Weihnachtstag", country: Country::Germany, rule: DateRule::Fixed { month: 12, day: 25 } },
    Holiday { key: "de_weihnachten2", name: "2. Weihnachtstag", country: Country::Germany, rule: DateRule::Fixed { month: 12, day: 26 } },
    // China
    Holiday { key: "cn_neujahr", name: "New Year's Day", country: Country::China, rule: DateRule::Fixed { month: 1, day: 1 } },
    Holiday { key: "cn_spring_festival", name: "Spring Festival", country: Country::China, rule: DateRule::Lunar { table: SPRING_FESTIVAL, len: 3 } },
    Holiday { key: "cn_qingming", name: "Qingming Festival", country: Country::China, rule: DateRule::Lunar { table: QINGMING, len: 1 } },
    Holiday { key: "cn_labour_day", name: "Labour Day", country: Country::China, rule: DateRule::Fixed { month: 5, day: 1 } },
    Holiday { key: "cn_dragon_boat", name: "Dragon Boat Festival", country: Country::China, rule: DateRule::Lunar { table: DRAGON_BOAT, len: 1 } },
    Holiday { key: "cn_mid_autumn", name: "Mid-Autumn Festival", country: Country::China, rule: DateRule::Lunar { table: MID_AUTUMN, len: 1 } },
    Holiday { key: "cn_national_day", name: "National Day", country: Country::China, rule: DateRule::FixedSpan { month: 10, day: 1, len: 3 } },
];

/// Look up a registry entry by its stable key
pub fn holiday_by_key(key: &str) -> Option<&'static Holiday> {
    HOLIDAYS.iter().find(|h| h.key == key)
}

/// (key, name) pairs for one country, for the settings dialog
pub fn holidays_by_country(country: Country) -> Vec<(&'static str, &'static str)> {
    HOLIDAYS
        .iter()
        .filter(|h| h.country == country)
        .map(|h| (h.key, h.name))
        .collect()
}

/// All holiday dates of one country in a year, regardless of enabled keys
pub fn holidays_for(country: Country, year: i32) -> BTreeSet<NaiveDate> {
    HOLIDAYS
        .iter()
        .filter(|h| h.country == country)
        .flat_map(|h| h.dates(year))
        .collect()
}

/// Map of date -> [(name, country)] for all enabled holidays in a year.
///
/// Unknown keys are skipped silently so stale settings never break startup.
pub fn holiday_map(
    year: i32,
    enabled_keys: &[String],
) -> BTreeMap<NaiveDate, Vec<(&'static str, Country)>> {
    let mut map: BTreeMap<NaiveDate, Vec<(&'static str, Country)>> = BTreeMap::new();
    for key in enabled_keys {
        let Some(holiday) = holiday_by_key(key) else {
            continue;
        };
        for date in holiday.dates(year) {
            map.entry(date).or_default().push((holiday.name, holiday.country));
        }
    }
    map
}
