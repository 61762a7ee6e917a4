use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tactical role of a roster entry.
///
/// The `full` ruleset uses every code except the three generic ones
/// (`DF`, `MF`, `FW`); the `reduced` ruleset uses only `GK` and the generic
/// codes. Which codes are valid is decided by [`crate::domain::Ruleset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionCode {
    GK,
    // Back line
    LB,
    LCB,
    CB,
    RCB,
    RB,
    // Defensive midfield line
    LWB,
    LDM,
    CDM,
    RDM,
    RWB,
    // Central and attacking midfield lines
    LM,
    LCM,
    CM,
    RCM,
    RM,
    LAM,
    CAM,
    RAM,
    // Forward lines
    LW,
    LF,
    CF,
    RF,
    RW,
    LS,
    ST,
    RS,
    // Generic small-sided codes
    DF,
    MF,
    FW,
}

/// Coarse grouping used for listings and marker colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionCode {
    pub const ALL: [PositionCode; 30] = [
        PositionCode::GK,
        PositionCode::LB,
        PositionCode::LCB,
        PositionCode::CB,
        PositionCode::RCB,
        PositionCode::RB,
        PositionCode::LWB,
        PositionCode::LDM,
        PositionCode::CDM,
        PositionCode::RDM,
        PositionCode::RWB,
        PositionCode::LM,
        PositionCode::LCM,
        PositionCode::CM,
        PositionCode::RCM,
        PositionCode::RM,
        PositionCode::LAM,
        PositionCode::CAM,
        PositionCode::RAM,
        PositionCode::LW,
        PositionCode::LF,
        PositionCode::CF,
        PositionCode::RF,
        PositionCode::RW,
        PositionCode::LS,
        PositionCode::ST,
        PositionCode::RS,
        PositionCode::DF,
        PositionCode::MF,
        PositionCode::FW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionCode::GK => "GK",
            PositionCode::LB => "LB",
            PositionCode::LCB => "LCB",
            PositionCode::CB => "CB",
            PositionCode::RCB => "RCB",
            PositionCode::RB => "RB",
            PositionCode::LWB => "LWB",
            PositionCode::LDM => "LDM",
            PositionCode::CDM => "CDM",
            PositionCode::RDM => "RDM",
            PositionCode::RWB => "RWB",
            PositionCode::LM => "LM",
            PositionCode::LCM => "LCM",
            PositionCode::CM => "CM",
            PositionCode::RCM => "RCM",
            PositionCode::RM => "RM",
            PositionCode::LAM => "LAM",
            PositionCode::CAM => "CAM",
            PositionCode::RAM => "RAM",
            PositionCode::LW => "LW",
            PositionCode::LF => "LF",
            PositionCode::CF => "CF",
            PositionCode::RF => "RF",
            PositionCode::RW => "RW",
            PositionCode::LS => "LS",
            PositionCode::ST => "ST",
            PositionCode::RS => "RS",
            PositionCode::DF => "DF",
            PositionCode::MF => "MF",
            PositionCode::FW => "FW",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PositionCode::GK)
    }

    pub fn group(&self) -> PositionGroup {
        match self {
            PositionCode::GK => PositionGroup::Goalkeeper,
            PositionCode::LB
            | PositionCode::LCB
            | PositionCode::CB
            | PositionCode::RCB
            | PositionCode::RB
            | PositionCode::LWB
            | PositionCode::RWB
            | PositionCode::DF => PositionGroup::Defender,
            PositionCode::LDM
            | PositionCode::CDM
            | PositionCode::RDM
            | PositionCode::LM
            | PositionCode::LCM
            | PositionCode::CM
            | PositionCode::RCM
            | PositionCode::RM
            | PositionCode::LAM
            | PositionCode::CAM
            | PositionCode::RAM
            | PositionCode::MF => PositionGroup::Midfielder,
            PositionCode::LW
            | PositionCode::LF
            | PositionCode::CF
            | PositionCode::RF
            | PositionCode::RW
            | PositionCode::LS
            | PositionCode::ST
            | PositionCode::RS
            | PositionCode::FW => PositionGroup::Forward,
        }
    }

    /// Where a marker lands when an entry is given this position without
    /// being dragged (reassignment, promotion from the bench).
    pub fn default_coordinates(&self) -> (f64, f64) {
        match self {
            PositionCode::GK => (50.0, 90.0),
            PositionCode::LB => (12.0, 75.0),
            PositionCode::LCB => (30.0, 76.0),
            PositionCode::CB => (50.0, 76.0),
            PositionCode::RCB => (70.0, 76.0),
            PositionCode::RB => (88.0, 75.0),
            PositionCode::LWB => (8.0, 62.0),
            PositionCode::LDM => (30.0, 62.0),
            PositionCode::CDM => (50.0, 62.0),
            PositionCode::RDM => (70.0, 62.0),
            PositionCode::RWB => (92.0, 62.0),
            PositionCode::LM => (10.0, 48.0),
            PositionCode::LCM => (30.0, 50.0),
            PositionCode::CM => (50.0, 50.0),
            PositionCode::RCM => (70.0, 50.0),
            PositionCode::RM => (90.0, 48.0),
            PositionCode::LAM => (30.0, 37.0),
            PositionCode::CAM => (50.0, 37.0),
            PositionCode::RAM => (70.0, 37.0),
            PositionCode::LW => (10.0, 15.0),
            PositionCode::LF => (30.0, 25.0),
            PositionCode::CF => (50.0, 25.0),
            PositionCode::RF => (70.0, 25.0),
            PositionCode::RW => (90.0, 15.0),
            PositionCode::LS => (30.0, 12.0),
            PositionCode::ST => (50.0, 12.0),
            PositionCode::RS => (70.0, 12.0),
            PositionCode::DF => (50.0, 72.0),
            PositionCode::MF => (50.0, 50.0),
            PositionCode::FW => (50.0, 20.0),
        }
    }
}

impl PositionGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "goalkeeper",
            PositionGroup::Defender => "defender",
            PositionGroup::Midfielder => "midfielder",
            PositionGroup::Forward => "forward",
        }
    }

    /// Marker colour as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PositionGroup::Goalkeeper => (0xFF, 0xD7, 0x00),
            PositionGroup::Defender => (0x3B, 0x82, 0xF6),
            PositionGroup::Midfielder => (0x10, 0xB9, 0x81),
            PositionGroup::Forward => (0xEF, 0x44, 0x44),
        }
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position code `{0}`")]
pub struct UnknownPosition(pub String);

impl FromStr for PositionCode {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        PositionCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}
