//! Minion capability flags.
//!
//! A minion copies its card's flag set at creation and mutates it from
//! there: divine shield and stealth are consumed by events, and test
//! scenarios grant abilities directly.

use serde::{Deserialize, Serialize};

/// Bit-set of minion capabilities.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abilities(u8);

impl Abilities {
    /// No capabilities.
    pub const NONE: Abilities = Abilities(0);
    /// Opposing attacks must target this minion while it is visible.
    pub const TAUNT: Abilities = Abilities(1 << 0);
    /// May attack on the turn it is summoned.
    pub const CHARGE: Abilities = Abilities(1 << 1);
    /// May attack twice per turn.
    pub const WINDFURY: Abilities = Abilities(1 << 2);
    /// Absorbs the first instance of damage.
    pub const DIVINE_SHIELD: Abilities = Abilities(1 << 3);
    /// Cannot be attacked or targeted by the opponent; lost on attacking.
    pub const STEALTH: Abilities = Abilities(1 << 4);
    /// Never generates attack moves.
    pub const CANNOT_ATTACK: Abilities = Abilities(1 << 5);
    /// Cannot be picked as a battlecry/spell target by either player.
    pub const CANNOT_BE_TARGETED: Abilities = Abilities(1 << 6);

    /// Combine two flag sets (const-friendly for the catalog table).
    #[must_use]
    pub const fn union(self, other: Abilities) -> Abilities {
        Abilities(self.0 | other.0)
    }

    /// True when every flag in `flags` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, flags: Abilities) -> bool {
        self.0 & flags.0 == flags.0
    }

    /// Set every flag in `flags`.
    pub fn insert(&mut self, flags: Abilities) {
        self.0 |= flags.0;
    }

    /// Clear every flag in `flags`.
    pub fn remove(&mut self, flags: Abilities) {
        self.0 &= !flags.0;
    }
}

impl std::ops::BitOr for Abilities {
    type Output = Abilities;

    fn bitor(self, rhs: Abilities) -> Abilities {
        self.union(rhs)
    }
}

impl std::fmt::Debug for Abilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [(Abilities, &str); 7] = [
            (Abilities::TAUNT, "Taunt"),
            (Abilities::CHARGE, "Charge"),
            (Abilities::WINDFURY, "Windfury"),
            (Abilities::DIVINE_SHIELD, "DivineShield"),
            (Abilities::STEALTH, "Stealth"),
            (Abilities::CANNOT_ATTACK, "CannotAttack"),
            (Abilities::CANNOT_BE_TARGETED, "CannotBeTargeted"),
        ];

        let mut set = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                set.entry(&name);
            }
        }
        set.finish()
    }
}
