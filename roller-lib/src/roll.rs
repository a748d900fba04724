pub mod audit;

use crate::dice;

/// Keep a roll result with the outcome of every dice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Result {
    spec: dice::Spec,
    total: u64,
    /// Every outcome, in roll order
    rolls: Vec<u64>,
    /// Positions in `rolls` counted in `total`, ascending
    retained: Vec<usize>,
    description: String,
}

impl Result {
    pub(crate) fn new(spec: dice::Spec, rolls: Vec<u64>, retained: Vec<usize>) -> Self {
        let total = retained.iter().map(|&index| rolls[index]).sum();
        let description = audit::Audit {
            spec: &spec,
            rolls: &rolls,
            total,
        }
        .to_string();
        Result {
            spec,
            total,
            rolls,
            retained,
            description,
        }
    }

    pub fn get_spec(&self) -> &dice::Spec {
        &self.spec
    }

    pub fn get_total(&self) -> u64 {
        self.total
    }

    pub fn get_rolls(&self) -> &[u64] {
        &self.rolls
    }

    pub fn get_retained(&self) -> &[usize] {
        &self.retained
    }

    /// Positions in the rolls left out by a keep modifier
    pub fn get_dropped(&self) -> Vec<usize> {
        (0..self.rolls.len())
            .filter(|index| self.retained.binary_search(index).is_err())
            .collect()
    }

    pub fn is_retained(&self, index: usize) -> bool {
        self.retained.binary_search(&index).is_ok()
    }

    /// Audit string, e.g. `4d6kh3 [5,2,6,4]=15`
    pub fn get_description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

/// Interface for rolling dices
///
/// `throw` must return a value in `1..=sides`.
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}
