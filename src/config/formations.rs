use crate::domain::{PositionCode, Ruleset};

use PositionCode::*;

/// One placement in a formation template
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub position: PositionCode,
    pub x: f64,
    pub y: f64,
}

impl Slot {
    pub const fn new(position: PositionCode, x: f64, y: f64) -> Self {
        Self { position, x, y }
    }
}

/// Named starting layout used to bulk-create a roster.
///
/// Names are unique across rulesets, so a formation name alone identifies
/// both the template and the ruleset it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationTemplate {
    pub name: &'static str,
    pub ruleset: Ruleset,
    pub slots: &'static [Slot],
}

impl FormationTemplate {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

const GOALKEEPER: Slot = Slot::new(GK, 50.0, 90.0);

static FOUR_THREE_THREE: FormationTemplate = FormationTemplate {
    name: "4-3-3",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LB, 12.0, 75.0),
        Slot::new(LCB, 35.0, 77.0),
        Slot::new(RCB, 65.0, 77.0),
        Slot::new(RB, 88.0, 75.0),
        Slot::new(LCM, 30.0, 50.0),
        Slot::new(CM, 50.0, 52.0),
        Slot::new(RCM, 70.0, 50.0),
        Slot::new(LW, 12.0, 15.0),
        Slot::new(ST, 50.0, 12.0),
        Slot::new(RW, 88.0, 15.0),
    ],
};

static FOUR_FOUR_TWO: FormationTemplate = FormationTemplate {
    name: "4-4-2",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LB, 12.0, 75.0),
        Slot::new(LCB, 35.0, 77.0),
        Slot::new(RCB, 65.0, 77.0),
        Slot::new(RB, 88.0, 75.0),
        Slot::new(LM, 10.0, 48.0),
        Slot::new(LCM, 35.0, 50.0),
        Slot::new(RCM, 65.0, 50.0),
        Slot::new(RM, 90.0, 48.0),
        Slot::new(LS, 35.0, 12.0),
        Slot::new(RS, 65.0, 12.0),
    ],
};

static FOUR_TWO_THREE_ONE: FormationTemplate = FormationTemplate {
    name: "4-2-3-1",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LB, 12.0, 75.0),
        Slot::new(LCB, 35.0, 77.0),
        Slot::new(RCB, 65.0, 77.0),
        Slot::new(RB, 88.0, 75.0),
        Slot::new(LDM, 35.0, 62.0),
        Slot::new(RDM, 65.0, 62.0),
        Slot::new(LAM, 25.0, 37.0),
        Slot::new(CAM, 50.0, 37.0),
        Slot::new(RAM, 75.0, 37.0),
        Slot::new(ST, 50.0, 12.0),
    ],
};

static THREE_FIVE_TWO: FormationTemplate = FormationTemplate {
    name: "3-5-2",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LCB, 30.0, 77.0),
        Slot::new(CB, 50.0, 77.0),
        Slot::new(RCB, 70.0, 77.0),
        Slot::new(LWB, 8.0, 62.0),
        Slot::new(LCM, 32.0, 50.0),
        Slot::new(CDM, 50.0, 62.0),
        Slot::new(RCM, 68.0, 50.0),
        Slot::new(RWB, 92.0, 62.0),
        Slot::new(LS, 38.0, 12.0),
        Slot::new(RS, 62.0, 12.0),
    ],
};

static THREE_FOUR_THREE: FormationTemplate = FormationTemplate {
    name: "3-4-3",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LCB, 30.0, 77.0),
        Slot::new(CB, 50.0, 77.0),
        Slot::new(RCB, 70.0, 77.0),
        Slot::new(LM, 10.0, 48.0),
        Slot::new(LCM, 35.0, 50.0),
        Slot::new(RCM, 65.0, 50.0),
        Slot::new(RM, 90.0, 48.0),
        Slot::new(LW, 12.0, 15.0),
        Slot::new(ST, 50.0, 12.0),
        Slot::new(RW, 88.0, 15.0),
    ],
};

static FIVE_THREE_TWO: FormationTemplate = FormationTemplate {
    name: "5-3-2",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LWB, 8.0, 66.0),
        Slot::new(LCB, 30.0, 77.0),
        Slot::new(CB, 50.0, 77.0),
        Slot::new(RCB, 70.0, 77.0),
        Slot::new(RWB, 92.0, 66.0),
        Slot::new(LCM, 30.0, 50.0),
        Slot::new(CM, 50.0, 50.0),
        Slot::new(RCM, 70.0, 50.0),
        Slot::new(LS, 38.0, 12.0),
        Slot::new(RS, 62.0, 12.0),
    ],
};

static FOUR_ONE_FOUR_ONE: FormationTemplate = FormationTemplate {
    name: "4-1-4-1",
    ruleset: Ruleset::Full,
    slots: &[
        GOALKEEPER,
        Slot::new(LB, 12.0, 75.0),
        Slot::new(LCB, 35.0, 77.0),
        Slot::new(RCB, 65.0, 77.0),
        Slot::new(RB, 88.0, 75.0),
        Slot::new(CDM, 50.0, 62.0),
        Slot::new(LM, 10.0, 45.0),
        Slot::new(LCM, 35.0, 47.0),
        Slot::new(RCM, 65.0, 47.0),
        Slot::new(RM, 90.0, 45.0),
        Slot::new(ST, 50.0, 12.0),
    ],
};

static FUTSAL_ONE_TWO_ONE: FormationTemplate = FormationTemplate {
    name: "5v5 1-2-1",
    ruleset: Ruleset::Reduced,
    slots: &[
        GOALKEEPER,
        Slot::new(DF, 50.0, 72.0),
        Slot::new(MF, 25.0, 50.0),
        Slot::new(MF, 75.0, 50.0),
        Slot::new(FW, 50.0, 20.0),
    ],
};

static FUTSAL_TWO_TWO: FormationTemplate = FormationTemplate {
    name: "5v5 2-2",
    ruleset: Ruleset::Reduced,
    slots: &[
        GOALKEEPER,
        Slot::new(DF, 30.0, 72.0),
        Slot::new(DF, 70.0, 72.0),
        Slot::new(FW, 30.0, 25.0),
        Slot::new(FW, 70.0, 25.0),
    ],
};

static SIX_A_SIDE_TWO_TWO_ONE: FormationTemplate = FormationTemplate {
    name: "6v6 2-2-1",
    ruleset: Ruleset::Reduced,
    slots: &[
        GOALKEEPER,
        Slot::new(DF, 30.0, 72.0),
        Slot::new(DF, 70.0, 72.0),
        Slot::new(MF, 30.0, 50.0),
        Slot::new(MF, 70.0, 50.0),
        Slot::new(FW, 50.0, 20.0),
    ],
};

static SEVEN_A_SIDE_TWO_THREE_ONE: FormationTemplate = FormationTemplate {
    name: "7v7 2-3-1",
    ruleset: Ruleset::Reduced,
    slots: &[
        GOALKEEPER,
        Slot::new(DF, 30.0, 72.0),
        Slot::new(DF, 70.0, 72.0),
        Slot::new(MF, 20.0, 50.0),
        Slot::new(MF, 50.0, 50.0),
        Slot::new(MF, 80.0, 50.0),
        Slot::new(FW, 50.0, 20.0),
    ],
};

static SEVEN_A_SIDE_THREE_TWO_ONE: FormationTemplate = FormationTemplate {
    name: "7v7 3-2-1",
    ruleset: Ruleset::Reduced,
    slots: &[
        GOALKEEPER,
        Slot::new(DF, 20.0, 72.0),
        Slot::new(DF, 50.0, 74.0),
        Slot::new(DF, 80.0, 72.0),
        Slot::new(MF, 35.0, 50.0),
        Slot::new(MF, 65.0, 50.0),
        Slot::new(FW, 50.0, 20.0),
    ],
};

static FORMATIONS: [&FormationTemplate; 12] = [
    &FOUR_THREE_THREE,
    &FOUR_FOUR_TWO,
    &FOUR_TWO_THREE_ONE,
    &THREE_FIVE_TWO,
    &THREE_FOUR_THREE,
    &FIVE_THREE_TWO,
    &FOUR_ONE_FOUR_ONE,
    &FUTSAL_ONE_TWO_ONE,
    &FUTSAL_TWO_TWO,
    &SIX_A_SIDE_TWO_TWO_ONE,
    &SEVEN_A_SIDE_TWO_THREE_ONE,
    &SEVEN_A_SIDE_THREE_TWO_ONE,
];

/// Every known formation, football first
pub fn get_formations() -> &'static [&'static FormationTemplate] {
    &FORMATIONS
}

/// Formations available under one ruleset, in catalogue order
pub fn formations_for(ruleset: Ruleset) -> impl Iterator<Item = &'static FormationTemplate> {
    FORMATIONS.iter().copied().filter(move |f| f.ruleset == ruleset)
}

pub fn find_formation(name: &str) -> Option<&'static FormationTemplate> {
    FORMATIONS.iter().copied().find(|f| f.name == name.trim())
}

impl Ruleset {
    pub fn default_formation(&self) -> &'static FormationTemplate {
        match self {
            Ruleset::Full => &FOUR_THREE_THREE,
            Ruleset::Reduced => &FUTSAL_ONE_TWO_ONE,
        }
    }
}
