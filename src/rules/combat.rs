//! Combat between an attacking and a defending piece.

use serde::{Deserialize, Serialize};

use crate::core::TieBreak;
use crate::pieces::Piece;

/// How an attack ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatResult {
    /// The defender was a Flag and is gone.
    FlagCaptured,
    /// Attacker outranked the defender (or won an equal-rank tie).
    AttackerWon,
    /// Defender outranked the attacker and holds its square.
    DefenderWon,
    /// Equal ranks under mutual destruction.
    BothDestroyed,
}

impl CombatResult {
    /// Whether the attacker ends up on the defender's square.
    #[must_use]
    pub const fn attacker_advances(self) -> bool {
        matches!(self, CombatResult::FlagCaptured | CombatResult::AttackerWon)
    }
}

/// A resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combat {
    pub attacker: Piece,
    pub defender: Piece,
    pub result: CombatResult,
}

/// Decide an attack.
///
/// A Flag defender always falls. Otherwise the higher numeric rank wins and
/// equal ranks follow `tie_break`. Callers guarantee the attacker is not a
/// Flag; a Flag attacker is treated as rank zero.
#[must_use]
pub fn resolve(attacker: Piece, defender: Piece, tie_break: TieBreak) -> Combat {
    let result = if defender.is_flag() {
        CombatResult::FlagCaptured
    } else {
        let attack = attacker.rank.value().unwrap_or(0);
        let defence = defender.rank.value().unwrap_or(0);
        match attack.cmp(&defence) {
            std::cmp::Ordering::Greater => CombatResult::AttackerWon,
            std::cmp::Ordering::Less => CombatResult::DefenderWon,
            std::cmp::Ordering::Equal => match tie_break {
                TieBreak::EqualRankAttackerWins => CombatResult::AttackerWon,
                TieBreak::MutualDestruction => CombatResult::BothDestroyed,
            },
        }
    };

    Combat {
        attacker,
        defender,
        result,
    }
}
