//! Lunar (panchang) calendar vocabulary.
//!
//! Types for lunar months, pakshas and tithis, the built-in festival
//! table, and the read-only date→observance lookup consumed by the
//! calendar overlay. The graph engine never consults any of this;
//! members merely carry the vocabulary on their remembrance dates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The twelve lunar months of the Amanta system.
pub const MARATHI_MONTHS: [&str; 12] = [
    "Chaitra",
    "Vaishakh",
    "Jyeshtha",
    "Ashadh",
    "Shravan",
    "Bhadrapada",
    "Ashvin",
    "Kartik",
    "Margashirsha",
    "Paush",
    "Magh",
    "Phalgun",
];

/// Tithi names, Pratipada through Amavasya.
pub const TITHI_NAMES: [&str; 16] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Amavasya",
];

/// The waxing or waning half of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half, new moon to full moon.
    Shukla,
    /// Waning half, full moon to new moon.
    Krishna,
}

impl Paksha {
    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Paksha::Shukla => "Shukla",
            Paksha::Krishna => "Krishna",
        }
    }
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A date in the lunar calendar: month, paksha and tithi.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanchangTithi {
    pub month: String,
    pub paksha: Paksha,
    pub tithi: String,
}

impl PanchangTithi {
    /// Create a new lunar date.
    pub fn new(month: impl Into<String>, paksha: Paksha, tithi: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            paksha,
            tithi: tithi.into(),
        }
    }
}

impl fmt::Display for PanchangTithi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {} Paksha", self.month, self.tithi, self.paksha)
    }
}

/// A recurring festival with its lunar date and approximate Gregorian
/// anchor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Festival {
    /// Stable identifier, referenced by tradition links.
    pub id: String,
    pub name: String,
    pub description: String,
    pub tithi: PanchangTithi,
    /// Gregorian month (1-12) the festival usually falls in.
    pub standard_month: u8,
    /// Gregorian day of month the festival usually falls on.
    pub standard_day: u8,
}

impl Festival {
    fn new(
        id: &str,
        name: &str,
        description: &str,
        tithi: PanchangTithi,
        standard_month: u8,
        standard_day: u8,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tithi,
            standard_month,
            standard_day,
        }
    }
}

lazy_static::lazy_static! {
    /// Major festivals bundled with the vault.
    pub static ref MAJOR_FESTIVALS: Vec<Festival> = vec![
        Festival::new(
            "diwali",
            "Diwali",
            "The Festival of Lights celebrating the victory of light over darkness.",
            PanchangTithi::new("Ashvin", Paksha::Krishna, "Amavasya"),
            10,
            31,
        ),
        Festival::new(
            "holi",
            "Holi",
            "The festival of colors marking the arrival of spring.",
            PanchangTithi::new("Phalguna", Paksha::Shukla, "Purnima"),
            2,
            25,
        ),
        Festival::new(
            "gudhipadwa",
            "Gudhi Padwa",
            "The Marathi New Year.",
            PanchangTithi::new("Chaitra", Paksha::Shukla, "Pratipada"),
            3,
            9,
        ),
    ];
}

/// Look up a bundled festival by id.
pub fn festival_by_id(id: &str) -> Option<&'static Festival> {
    MAJOR_FESTIVALS.iter().find(|f| f.id == id)
}

/// The panchang entry for one Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanchangDay {
    pub month: String,
    pub paksha: Paksha,
    pub tithi: String,
    /// Observance name, if the day carries one.
    pub name: Option<String>,
}

/// Read-only date→observance lookup keyed by ISO `YYYY-MM-DD` strings.
///
/// The dataset itself is an external collaborator; the vault only reads
/// it. `builtin_sample` ships enough days to cover the bundled festival
/// dates in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct PanchangTable {
    days: HashMap<String, PanchangDay>,
}

impl PanchangTable {
    /// Build a table from externally supplied entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, PanchangDay)>) -> Self {
        Self {
            days: entries.into_iter().collect(),
        }
    }

    /// The abridged built-in dataset.
    pub fn builtin_sample() -> Self {
        Self::from_entries([
            (
                "2024-10-31".to_string(),
                PanchangDay {
                    month: "Ashvin".to_string(),
                    paksha: Paksha::Krishna,
                    tithi: "Amavasya".to_string(),
                    name: Some("Deepavali".to_string()),
                },
            ),
            (
                "2024-11-01".to_string(),
                PanchangDay {
                    month: "Kartik".to_string(),
                    paksha: Paksha::Shukla,
                    tithi: "Pratipada".to_string(),
                    name: Some("Bali Pratipada".to_string()),
                },
            ),
        ])
    }

    /// Look up the entry for an ISO date, if the dataset covers it.
    pub fn lookup(&self, iso_date: &str) -> Option<&PanchangDay> {
        self.days.get(iso_date)
    }

    /// Number of days the dataset covers.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Check whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
