//! Effort scale shared by users and tools.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Setup and day-to-day effort, 1 (trivial) to 10 (expert).
///
/// On a tool this is the effort the tool demands; on a user it is the
/// effort they are comfortable with. Values outside 1-10 are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Effort to get the tool running
    pub setup: i32,

    /// Effort to use it every day
    pub daily: i32,
}

impl SkillProfile {
    /// Create a skill profile.
    pub fn new(setup: i32, daily: i32) -> Self {
        Self { setup, daily }
    }

    /// Sum of absolute per-axis differences.
    pub fn distance(&self, other: &SkillProfile) -> u32 {
        self.setup
            .abs_diff(other.setup)
            .saturating_add(self.daily.abs_diff(other.daily))
    }
}

impl Default for SkillProfile {
    fn default() -> Self {
        Self { setup: 3, daily: 3 }
    }
}

/// Parses `"setup,daily"`, e.g. `"2,3"`.
impl FromStr for SkillProfile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (setup, daily) = s
            .split_once(',')
            .ok_or_else(|| ParseError::unknown("skill profile", s))?;
        let setup = setup
            .trim()
            .parse()
            .map_err(|_| ParseError::unknown("skill profile", s))?;
        let daily = daily
            .trim()
            .parse()
            .map_err(|_| ParseError::unknown("skill profile", s))?;
        Ok(Self { setup, daily })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric_and_saturates() {
        let a = SkillProfile::new(1, 5);
        let b = SkillProfile::new(4, 3);
        assert_eq!(a.distance(&b), 5);
        assert_eq!(b.distance(&a), 5);

        let far = SkillProfile::new(i32::MIN, i32::MIN);
        let other = SkillProfile::new(i32::MAX, i32::MAX);
        assert_eq!(far.distance(&other), u32::MAX);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!("2, 3".parse::<SkillProfile>().unwrap(), SkillProfile::new(2, 3));
        assert!("2".parse::<SkillProfile>().is_err());
        assert!("a,b".parse::<SkillProfile>().is_err());
    }
}
