pub(crate) mod modifier;

use crate::error::Error;
use crate::error::Result;

pub(crate) mod limits {
    /// Arbitrary limits to avoid oom
    pub(crate) const MAX_DICE_AMOUNT: u64 = 5000;
    pub(crate) const MAX_DICE_SIDES: u64 = u32::MAX as u64;
}

/// Optional dice modifier with the amount of dices to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    None,
    KeepHigh(usize),
    KeepLow(usize),
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Modifier::None => Ok(()),
            Modifier::KeepHigh(n) => write!(f, "kh{n}"),
            Modifier::KeepLow(n) => write!(f, "kl{n}"),
        }
    }
}

/// Immutable description of a roll: how many dice, how many sides and which
/// of them count toward the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spec {
    count: u64,
    sides: u64,
    modifier: Modifier,
}

impl Spec {
    /// New validated specification
    pub fn new(count: u64, sides: u64, modifier: Modifier) -> Result<Self> {
        if count == 0 {
            return Err(Error::value("must roll at least one dice", "0"));
        }
        if count > limits::MAX_DICE_AMOUNT {
            return Err(Error::value(
                format!(
                    "exceeded max allowed amount of dices `{}`",
                    limits::MAX_DICE_AMOUNT
                ),
                count.to_string(),
            ));
        }
        if sides == 0 {
            return Err(Error::value("a dice needs at least one side", "0"));
        }
        if sides > limits::MAX_DICE_SIDES {
            return Err(Error::value(
                format!(
                    "exceeded max allowed number of dice sides `{}`",
                    limits::MAX_DICE_SIDES
                ),
                sides.to_string(),
            ));
        }
        match modifier {
            Modifier::KeepHigh(0) | Modifier::KeepLow(0) => {
                return Err(Error::value(
                    "must keep at least one dice",
                    modifier.to_string(),
                ))
            }
            Modifier::KeepHigh(n) | Modifier::KeepLow(n) if n as u64 > count => {
                return Err(Error::value(
                    format!("can't keep {n} out of {count} dices"),
                    modifier.to_string(),
                ))
            }
            _ => (),
        }
        Ok(Spec {
            count,
            sides,
            modifier,
        })
    }

    pub fn get_count(&self) -> u64 {
        self.count
    }

    pub fn get_sides(&self) -> u64 {
        self.sides
    }

    pub fn get_modifier(&self) -> Modifier {
        self.modifier
    }

    /// Check the invariants `new` enforces
    pub(crate) fn is_valid(&self) -> bool {
        let keep = match self.modifier {
            Modifier::None => return self.count >= 1 && self.sides >= 1,
            Modifier::KeepHigh(n) | Modifier::KeepLow(n) => n as u64,
        };
        self.count >= 1 && self.sides >= 1 && keep >= 1 && keep <= self.count
    }
}

impl std::fmt::Display for Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}{}", self.count, self.sides, self.modifier)
    }
}

impl std::str::FromStr for Spec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}
