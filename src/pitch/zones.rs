use crate::domain::{PositionCode, Ruleset};

// Band boundaries, measured from the attacking end (y = 0).
const GOALKEEPER_LINE: f64 = 82.0;
const BACK_LINE: f64 = 69.0;
const DEFENSIVE_MID_LINE: f64 = 56.0;
const CENTRAL_MID_LINE: f64 = 43.0;
const ATTACKING_MID_LINE: f64 = 30.0;
const SECOND_STRIKER_LINE: f64 = 20.0;

const REDUCED_DEFENSE_LINE: f64 = 65.0;
const REDUCED_MIDFIELD_LINE: f64 = 35.0;

// Wingers only exist from central midfield forward.
const WIDE_LEFT: f64 = 18.0;
const WIDE_RIGHT: f64 = 82.0;

/// Codes of one three-way row, left to right, plus its wide codes.
struct Row {
    wide_left: PositionCode,
    left: PositionCode,
    centre: PositionCode,
    right: PositionCode,
    wide_right: PositionCode,
}

const CENTRAL_MID_ROW: Row = Row {
    wide_left: PositionCode::LM,
    left: PositionCode::LCM,
    centre: PositionCode::CM,
    right: PositionCode::RCM,
    wide_right: PositionCode::RM,
};

const ATTACKING_MID_ROW: Row = Row {
    wide_left: PositionCode::LM,
    left: PositionCode::LAM,
    centre: PositionCode::CAM,
    right: PositionCode::RAM,
    wide_right: PositionCode::RM,
};

const SECOND_STRIKER_ROW: Row = Row {
    wide_left: PositionCode::LW,
    left: PositionCode::LF,
    centre: PositionCode::CF,
    right: PositionCode::RF,
    wide_right: PositionCode::RW,
};

const FORWARD_ROW: Row = Row {
    wide_left: PositionCode::LW,
    left: PositionCode::LS,
    centre: PositionCode::ST,
    right: PositionCode::RS,
    wide_right: PositionCode::RW,
};

/// Resolve a pitch location to the position code of its zone.
///
/// Total over all inputs: coordinates outside `[0, 100]` fall into the
/// nearest band and NaN falls through to the forward row, so the result is
/// always a code the ruleset accepts.
pub fn classify(x: f64, y: f64, ruleset: Ruleset) -> PositionCode {
    match ruleset {
        Ruleset::Full => classify_full(x, y),
        Ruleset::Reduced => classify_reduced(y),
    }
}

fn classify_full(x: f64, y: f64) -> PositionCode {
    if y > GOALKEEPER_LINE {
        PositionCode::GK
    } else if y > BACK_LINE {
        back_line(x)
    } else if y > DEFENSIVE_MID_LINE {
        defensive_mid_line(x)
    } else if y > CENTRAL_MID_LINE {
        CENTRAL_MID_ROW.pick(x)
    } else if y > ATTACKING_MID_LINE {
        ATTACKING_MID_ROW.pick(x)
    } else if y > SECOND_STRIKER_LINE {
        SECOND_STRIKER_ROW.pick(x)
    } else {
        FORWARD_ROW.pick(x)
    }
}

fn classify_reduced(y: f64) -> PositionCode {
    if y > GOALKEEPER_LINE {
        PositionCode::GK
    } else if y > REDUCED_DEFENSE_LINE {
        PositionCode::DF
    } else if y > REDUCED_MIDFIELD_LINE {
        PositionCode::MF
    } else {
        PositionCode::FW
    }
}

fn back_line(x: f64) -> PositionCode {
    if x < 20.0 {
        PositionCode::LB
    } else if x < 40.0 {
        PositionCode::LCB
    } else if x < 60.0 {
        PositionCode::CB
    } else if x < 80.0 {
        PositionCode::RCB
    } else {
        PositionCode::RB
    }
}

fn defensive_mid_line(x: f64) -> PositionCode {
    if x < 15.0 {
        PositionCode::LWB
    } else if x < 40.0 {
        PositionCode::LDM
    } else if x < 60.0 {
        PositionCode::CDM
    } else if x < 85.0 {
        PositionCode::RDM
    } else {
        PositionCode::RWB
    }
}

impl Row {
    fn pick(&self, x: f64) -> PositionCode {
        if x < WIDE_LEFT {
            self.wide_left
        } else if x > WIDE_RIGHT {
            self.wide_right
        } else if x < 40.0 {
            self.left
        } else if x < 60.0 {
            self.centre
        } else {
            self.right
        }
    }
}
