use serde::{Deserialize, Serialize};

/// Stage of the game derived from the turn counter.
///
/// | Turn | Phase |
/// |---|---|
/// | 0-25 | [`GamePhase::Early`] |
/// | 26-45 | [`GamePhase::Mid`] |
/// | 46- | [`GamePhase::Late`] |
///
/// The phase selects the search depth and which evaluator factors apply.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum GamePhase {
    #[display("early")]
    Early,
    #[display("mid")]
    Mid,
    #[display("late")]
    Late,
}

impl GamePhase {
    pub const EARLY_LAST_TURN: u32 = 25;
    pub const MID_LAST_TURN: u32 = 45;

    #[must_use]
    pub const fn from_turn(turn: u32) -> Self {
        if turn <= Self::EARLY_LAST_TURN {
            Self::Early
        } else if turn <= Self::MID_LAST_TURN {
            Self::Mid
        } else {
            Self::Late
        }
    }
}
