use crate::error::EngineError;

/// Count of possible live-neighbor values (0 through 8) for an
/// 8-connected geometry.
pub const RULE_SLOTS: usize = 9;

/// The per-neighbor-count transition tables.
///
/// `birth[n]` means a dead cell with exactly `n` live neighbors is
/// born. `death[n]` means a live cell with exactly `n` live neighbors
/// dies — true causes death, despite what the classic "survival" rule
/// naming might suggest. See [`crate::engine::step`] for how the two
/// tables combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTable {
    birth: [bool; RULE_SLOTS],
    death: [bool; RULE_SLOTS],
}

impl Default for RuleTable {
    /// Life-like defaults: birth at exactly 3 neighbors, death at 2 or 3.
    fn default() -> Self {
        let mut birth = [false; RULE_SLOTS];
        let mut death = [false; RULE_SLOTS];
        birth[3] = true;
        death[2] = true;
        death[3] = true;
        Self { birth, death }
    }
}

impl RuleTable {
    fn check(n: usize) -> Result<usize, EngineError> {
        if n < RULE_SLOTS {
            Ok(n)
        } else {
            Err(EngineError::IndexOutOfRange(n))
        }
    }

    pub fn set_birth(&mut self, n: usize, value: bool) -> Result<(), EngineError> {
        self.birth[Self::check(n)?] = value;
        Ok(())
    }

    pub fn set_death(&mut self, n: usize, value: bool) -> Result<(), EngineError> {
        self.death[Self::check(n)?] = value;
        Ok(())
    }

    pub fn birth_at(&self, n: usize) -> Result<bool, EngineError> {
        Ok(self.birth[Self::check(n)?])
    }

    pub fn death_at(&self, n: usize) -> Result<bool, EngineError> {
        Ok(self.death[Self::check(n)?])
    }

    /// Unchecked lookups for the step loop, where `n` is a neighbor
    /// count and therefore always in range.
    #[inline]
    pub(crate) fn birth(&self, n: usize) -> bool {
        self.birth[n]
    }
    #[inline]
    pub(crate) fn death(&self, n: usize) -> bool {
        self.death[n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_life() {
        let rules = RuleTable::default();

        for n in 0..RULE_SLOTS {
            assert_eq!(rules.birth_at(n).unwrap(), n == 3);
            assert_eq!(rules.death_at(n).unwrap(), n == 2 || n == 3);
        }
    }

    #[test]
    fn set_then_read_back() {
        let mut rules = RuleTable::default();

        rules.set_birth(6, true).unwrap();
        rules.set_death(3, false).unwrap();

        assert!(rules.birth_at(6).unwrap());
        assert!(!rules.death_at(3).unwrap());
    }

    #[test]
    fn index_nine_is_rejected() {
        let mut rules = RuleTable::default();

        assert_eq!(
            rules.set_birth(9, true),
            Err(EngineError::IndexOutOfRange(9))
        );
        assert_eq!(rules.death_at(42), Err(EngineError::IndexOutOfRange(42)));
        // failed mutation leaves the table untouched
        assert_eq!(rules, RuleTable::default());
    }
}
