use crate::dice;
use itertools::Itertools;

/// Human readable rendering of a roll: the notation, every dice in roll order
/// and the total
#[derive(Debug, Clone, Copy)]
pub struct Audit<'a> {
    pub spec: &'a dice::Spec,
    pub rolls: &'a [u64],
    pub total: u64,
}

impl std::fmt::Display for Audit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]={}",
            self.spec,
            self.rolls.iter().format(","),
            self.total
        )
    }
}
