//! Impact estimate value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse per-unit material cost tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostBand {
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Mid,
    #[serde(rename = "$$$")]
    High,
}

/// Coarse sustainability tier derived from the eco score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SustainabilityRating {
    Standard,
    Better,
    #[serde(rename = "Eco-focused")]
    EcoFocused,
}

/// Result of scoring one materials description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    pub cost_band: CostBand,
    pub sustainability_rating: SustainabilityRating,
    pub eco_score: i32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} label: {label}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

impl CostBand {
    /// Buckets a raw cost score: 5 and above is `$$$`, 3..5 is `$$`
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 5 => Self::High,
            s if s >= 3 => Self::Mid,
            _ => Self::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "$",
            Self::Mid => "$$",
            Self::High => "$$$",
        }
    }
}

impl SustainabilityRating {
    /// Buckets a raw eco score: 3 and above is eco-focused, 1..3 is better
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 3 => Self::EcoFocused,
            s if s >= 1 => Self::Better,
            _ => Self::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Better => "Better",
            Self::EcoFocused => "Eco-focused",
        }
    }
}

impl ImpactEstimate {
    /// Estimate for a design with no recognizable materials
    pub const BASELINE: Self = Self {
        cost_band: CostBand::Low,
        sustainability_rating: SustainabilityRating::Standard,
        eco_score: 0,
    };

    pub fn from_scores(cost_score: u32, eco_score: i32) -> Self {
        Self {
            cost_band: CostBand::from_score(cost_score),
            sustainability_rating: SustainabilityRating::from_score(eco_score),
            eco_score,
        }
    }
}

impl Default for ImpactEstimate {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for CostBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SustainabilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ImpactEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} · {} (eco {})",
            self.cost_band, self.sustainability_rating, self.eco_score
        )
    }
}

impl FromStr for CostBand {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "$" => Ok(Self::Low),
            "$$" => Ok(Self::Mid),
            "$$$" => Ok(Self::High),
            other => Err(ParseLabelError {
                kind: "cost band",
                label: other.to_string(),
            }),
        }
    }
}

impl FromStr for SustainabilityRating {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Standard" => Ok(Self::Standard),
            "Better" => Ok(Self::Better),
            "Eco-focused" => Ok(Self::EcoFocused),
            other => Err(ParseLabelError {
                kind: "sustainability rating",
                label: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cost_band_boundaries() {
        assert_eq!(CostBand::from_score(1), CostBand::Low);
        assert_eq!(CostBand::from_score(2), CostBand::Low);
        assert_eq!(CostBand::from_score(3), CostBand::Mid);
        assert_eq!(CostBand::from_score(4), CostBand::Mid);
        assert_eq!(CostBand::from_score(5), CostBand::High);
        assert_eq!(CostBand::from_score(14), CostBand::High);
    }

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(SustainabilityRating::from_score(-1), SustainabilityRating::Standard);
        assert_eq!(SustainabilityRating::from_score(0), SustainabilityRating::Standard);
        assert_eq!(SustainabilityRating::from_score(1), SustainabilityRating::Better);
        assert_eq!(SustainabilityRating::from_score(2), SustainabilityRating::Better);
        assert_eq!(SustainabilityRating::from_score(3), SustainabilityRating::EcoFocused);
    }

    #[test]
    fn test_wire_labels() {
        let estimate = ImpactEstimate::from_scores(4, 3);
        assert_eq!(
            serde_json::to_value(estimate).unwrap(),
            json!({ "costBand": "$$", "sustainabilityRating": "Eco-focused", "ecoScore": 3 })
        );
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("$$$".parse::<CostBand>().unwrap(), CostBand::High);
        assert_eq!(
            "Eco-focused".parse::<SustainabilityRating>().unwrap(),
            SustainabilityRating::EcoFocused
        );
        assert!("$$$$".parse::<CostBand>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ImpactEstimate::BASELINE.to_string(), "$ · Standard (eco 0)");
    }
}
