use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::position::PositionCode;

/// Rule configuration of a squad: 11-a-side football or small-sided futsal.
///
/// Serialized as the `gameType` of a squad record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Ruleset {
    /// 11-a-side, rich position taxonomy
    #[default]
    #[serde(rename = "football")]
    #[value(name = "football", alias = "full")]
    Full,
    /// Small-sided, GK/DF/MF/FW only
    #[serde(rename = "futsal")]
    #[value(name = "futsal", alias = "reduced")]
    Reduced,
}

const REDUCED_CODES: [PositionCode; 4] = [
    PositionCode::GK,
    PositionCode::DF,
    PositionCode::MF,
    PositionCode::FW,
];

impl Ruleset {
    pub fn max_starters(&self) -> usize {
        match self {
            Ruleset::Full => 11,
            Ruleset::Reduced => 7,
        }
    }

    pub fn goalkeeper(&self) -> PositionCode {
        PositionCode::GK
    }

    /// Whether a second non-bench goalkeeper is refused.
    /// Small-sided games rotate keepers freely.
    pub fn enforces_single_goalkeeper(&self) -> bool {
        matches!(self, Ruleset::Full)
    }

    /// Whether the goalkeeper marker is pinned in place during drags.
    pub fn locks_goalkeeper_drag(&self) -> bool {
        matches!(self, Ruleset::Full)
    }

    /// Code given to freshly added bench players.
    pub fn primary_striker(&self) -> PositionCode {
        match self {
            Ruleset::Full => PositionCode::ST,
            Ruleset::Reduced => PositionCode::FW,
        }
    }

    pub fn valid_codes(&self) -> Vec<PositionCode> {
        match self {
            Ruleset::Full => PositionCode::ALL
                .iter()
                .copied()
                .filter(|code| !REDUCED_CODES.contains(code) || code.is_goalkeeper())
                .collect(),
            Ruleset::Reduced => REDUCED_CODES.to_vec(),
        }
    }

    pub fn allows(&self, code: PositionCode) -> bool {
        match self {
            Ruleset::Full => code.is_goalkeeper() || !REDUCED_CODES.contains(&code),
            Ruleset::Reduced => REDUCED_CODES.contains(&code),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Full => "football",
            Ruleset::Reduced => "futsal",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ruleset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "football" | "full" => Ok(Ruleset::Full),
            "futsal" | "reduced" => Ok(Ruleset::Reduced),
            other => anyhow::bail!("unknown ruleset `{}`", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps() {
        assert_eq!(Ruleset::Full.max_starters(), 11);
        assert_eq!(Ruleset::Reduced.max_starters(), 7);
    }

    #[test]
    fn test_valid_codes_are_disjoint_apart_from_goalkeeper() {
        let full = Ruleset::Full.valid_codes();
        let reduced = Ruleset::Reduced.valid_codes();

        assert_eq!(full.len(), 27);
        assert_eq!(reduced.len(), 4);
        for code in &reduced {
            assert_eq!(full.contains(code), code.is_goalkeeper());
        }
        for code in PositionCode::ALL {
            assert_eq!(Ruleset::Full.allows(code), full.contains(&code));
            assert_eq!(Ruleset::Reduced.allows(code), reduced.contains(&code));
        }
    }

    #[test]
    fn test_serializes_as_game_type() {
        assert_eq!(serde_json::to_string(&Ruleset::Full).unwrap(), "\"football\"");
        assert_eq!(
            serde_json::from_str::<Ruleset>("\"futsal\"").unwrap(),
            Ruleset::Reduced
        );
        assert_eq!("reduced".parse::<Ruleset>().unwrap(), Ruleset::Reduced);
    }
}
