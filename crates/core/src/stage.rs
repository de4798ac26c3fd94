//! Checkpoint stage vocabulary.
//!
//! Every main question owns three checkpoints, one per stage. The stage
//! tag decides which of the denormalized choice text columns carry
//! content (see the `choices` table in the schema migration).

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Stage tag for checkpoint 1: where the user currently stands.
pub const STAGE_POSITION: &str = "position";
/// Stage tag for checkpoint 2: what could challenge that position.
pub const STAGE_CHALLENGES: &str = "challenges";
/// Stage tag for checkpoint 3: what would change their mind.
pub const STAGE_CHANGE: &str = "change";

/// The three fixed checkpoint stages of a main question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointStage {
    Position,
    Challenges,
    Change,
}

impl CheckpointStage {
    /// All stages in checkpoint order.
    pub const ALL: [CheckpointStage; 3] = [
        CheckpointStage::Position,
        CheckpointStage::Challenges,
        CheckpointStage::Change,
    ];

    /// The stage tag as stored in `checkpoints.checkpoint_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckpointStage::Position => STAGE_POSITION,
            CheckpointStage::Challenges => STAGE_CHALLENGES,
            CheckpointStage::Change => STAGE_CHANGE,
        }
    }

    /// The checkpoint number (1-based) this stage occupies.
    pub fn number(self) -> i32 {
        match self {
            CheckpointStage::Position => 1,
            CheckpointStage::Challenges => 2,
            CheckpointStage::Change => 3,
        }
    }

    /// Stage for a checkpoint number, if it is in range.
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(CheckpointStage::Position),
            2 => Some(CheckpointStage::Challenges),
            3 => Some(CheckpointStage::Change),
            _ => None,
        }
    }
}

impl FromStr for CheckpointStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STAGE_POSITION => Ok(CheckpointStage::Position),
            STAGE_CHALLENGES => Ok(CheckpointStage::Challenges),
            STAGE_CHANGE => Ok(CheckpointStage::Change),
            other => Err(CoreError::Validation(format!(
                "Invalid checkpoint type '{other}'. Must be one of: \
                 {STAGE_POSITION}, {STAGE_CHALLENGES}, {STAGE_CHANGE}"
            ))),
        }
    }
}

impl fmt::Display for CheckpointStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conventional checkpoint key for a main question and checkpoint number,
/// e.g. `q10a` + 1 -> `q10a_cp1`. Choice keys extend this with a choice
/// index (`q10a_cp1_1`).
pub fn checkpoint_key(question_key: &str, checkpoint_number: i32) -> String {
    format!("{question_key}_cp{checkpoint_number}")
}
