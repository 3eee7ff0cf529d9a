use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::LoveError;

/// Seven compatibility bands, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    PerfectMatch,
    ExcellentMatch,
    GreatMatch,
    GoodMatch,
    FairMatch,
    CouldWork,
    BetterAsFriends,
}

impl Tier {
    pub const ALL: [Tier; 7] = [
        Tier::PerfectMatch,
        Tier::ExcellentMatch,
        Tier::GreatMatch,
        Tier::GoodMatch,
        Tier::FairMatch,
        Tier::CouldWork,
        Tier::BetterAsFriends,
    ];

    /// Lowest score that still falls into this tier.
    pub fn threshold(self) -> i64 {
        match self {
            Tier::PerfectMatch => 90,
            Tier::ExcellentMatch => 80,
            Tier::GreatMatch => 70,
            Tier::GoodMatch => 60,
            Tier::FairMatch => 50,
            Tier::CouldWork => 40,
            Tier::BetterAsFriends => i64::MIN,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::PerfectMatch => "Perfect Match",
            Tier::ExcellentMatch => "Excellent Match",
            Tier::GreatMatch => "Great Match",
            Tier::GoodMatch => "Good Match",
            Tier::FairMatch => "Fair Match",
            Tier::CouldWork => "Could Work",
            Tier::BetterAsFriends => "Better as Friends",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::PerfectMatch => {
                "You two are absolutely made for each other! A love written in the stars!"
            }
            Tier::ExcellentMatch => "Amazing compatibility! You complement each other perfectly!",
            Tier::GreatMatch => "Strong connection! You make a wonderful couple!",
            Tier::GoodMatch => "Nice compatibility! With effort, you can make it work beautifully!",
            Tier::FairMatch => "There's potential here! Focus on understanding each other better.",
            Tier::CouldWork => "It'll take some work, but love conquers all!",
            Tier::BetterAsFriends => {
                "Maybe friendship is the better path! And that's wonderful too!"
            }
        }
    }

    /// Opaque color identifier handed to the presentation layer.
    pub fn color(self) -> &'static str {
        match self {
            Tier::PerfectMatch => "from-green-500 to-emerald-500",
            Tier::ExcellentMatch => "from-green-400 to-teal-500",
            Tier::GreatMatch => "from-pink-500 to-rose-500",
            Tier::GoodMatch => "from-pink-400 to-fuchsia-500",
            Tier::FairMatch => "from-purple-400 to-pink-500",
            Tier::CouldWork => "from-yellow-400 to-orange-500",
            Tier::BetterAsFriends => "from-blue-400 to-cyan-500",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::PerfectMatch => "🌟",
            Tier::ExcellentMatch => "💖",
            Tier::GreatMatch => "💝",
            Tier::GoodMatch => "💗",
            Tier::FairMatch => "💓",
            Tier::CouldWork => "💛",
            Tier::BetterAsFriends => "🤝",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub tier: Tier,
}

impl CompatibilityResult {
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownResult {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_target_day: bool,
    /// Target as wall-clock time in the zone `now` was given in.
    pub target: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardTheme {
    #[default]
    Romantic,
    Modern,
    Classic,
    Playful,
}

impl CardTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            CardTheme::Romantic => "romantic",
            CardTheme::Modern => "modern",
            CardTheme::Classic => "classic",
            CardTheme::Playful => "playful",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            CardTheme::Romantic => "❤️",
            CardTheme::Modern => "✨",
            CardTheme::Classic => "🌹",
            CardTheme::Playful => "💕",
        }
    }
}

impl FromStr for CardTheme {
    type Err = LoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "romantic" => Ok(CardTheme::Romantic),
            "modern" => Ok(CardTheme::Modern),
            "classic" => Ok(CardTheme::Classic),
            "playful" => Ok(CardTheme::Playful),
            other => Err(LoveError::invalid_input(
                "theme",
                format!(
                    "Unknown theme '{}'. Valid themes: romantic, modern, classic, playful",
                    other
                ),
            )),
        }
    }
}

impl fmt::Display for CardTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoveCard {
    pub id: String,
    pub partner_name: String,
    pub message: String,
    pub theme: CardTheme,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub share_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLoveCard {
    pub partner_name: String,
    pub message: String,
    pub theme: CardTheme,
    pub photo_url: Option<String>,
    pub share_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub memory_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMemory {
    pub title: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub memory_date: NaiveDate,
}

/// One entry of the Valentine week catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValentineDay {
    pub name: &'static str,
    pub date: &'static str,
    pub suggestion: &'static str,
    pub color: &'static str,
    pub template: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parsing() {
        assert_eq!("Playful".parse::<CardTheme>().unwrap(), CardTheme::Playful);
        assert_eq!(" modern ".parse::<CardTheme>().unwrap(), CardTheme::Modern);
        assert!("gothic".parse::<CardTheme>().is_err());
    }

    #[test]
    fn test_card_deserializes_postgrest_row() {
        let row = serde_json::json!({
            "id": "4f7a",
            "partner_name": "Sam",
            "message": "Be mine",
            "theme": "classic",
            "photo_url": null,
            "created_at": "2026-02-10T08:30:00+00:00",
            "share_code": "AB12CD34"
        });

        let card: LoveCard = serde_json::from_value(row).unwrap();
        assert_eq!(card.theme, CardTheme::Classic);
        assert_eq!(card.photo_url, None);
        assert_eq!(card.share_code, "AB12CD34");
    }

    #[test]
    fn test_tiers_are_ordered_by_threshold() {
        let thresholds: Vec<i64> = Tier::ALL.iter().map(|t| t.threshold()).collect();
        assert!(thresholds.windows(2).all(|w| w[0] > w[1]));
    }
}
