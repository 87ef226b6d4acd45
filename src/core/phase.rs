//! The three measured breathing phases.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BreatheError;

/// A labeled breathing phase.
///
/// The wire names match what the Store stores in a timing's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Breathing in.
    Inhalation,
    /// Holding the breath.
    #[serde(rename = "Breath-Hold")]
    BreathHold,
    /// Breathing out.
    Exhalation,
}

impl Phase {
    /// All phases in measuring order.
    pub const ALL: [Self; 3] = [Self::Inhalation, Self::BreathHold, Self::Exhalation];

    /// The label used on the wire and in tables.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inhalation => "Inhalation",
            Self::BreathHold => "Breath-Hold",
            Self::Exhalation => "Exhalation",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = BreatheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inhalation" | "inhale" | "in" | "i" => Ok(Self::Inhalation),
            "breath-hold" | "breathhold" | "hold" | "h" => Ok(Self::BreathHold),
            "exhalation" | "exhale" | "out" | "e" => Ok(Self::Exhalation),
            other => Err(BreatheError::Validation(format!(
                "unknown phase '{other}' (expected inhale, hold, or exhale)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Phase::BreathHold).unwrap(),
            "\"Breath-Hold\""
        );
        let phase: Phase = serde_json::from_str("\"Exhalation\"").unwrap();
        assert_eq!(phase, Phase::Exhalation);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("inhale".parse::<Phase>().unwrap(), Phase::Inhalation);
        assert_eq!("HOLD".parse::<Phase>().unwrap(), Phase::BreathHold);
        assert_eq!("Breath-Hold".parse::<Phase>().unwrap(), Phase::BreathHold);
        assert_eq!(" e ".parse::<Phase>().unwrap(), Phase::Exhalation);
        assert!("sigh".parse::<Phase>().is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for phase in Phase::ALL {
            assert_eq!(phase.to_string(), phase.as_str());
        }
    }
}
