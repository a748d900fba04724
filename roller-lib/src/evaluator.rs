use crate::dice;
use crate::roll;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    pub(crate) fn eval<S: roll::Source>(spec: &dice::Spec, source: &mut S) -> roll::Result {
        assert!(spec.is_valid(), "malformed roll specification {spec:?}");
        let rolls = Self::roll(spec.get_count(), spec.get_sides(), source);
        let retained = spec.get_modifier().retain(&rolls);
        roll::Result::new(*spec, rolls, retained)
    }

    pub(crate) fn roll<S: roll::Source>(amount: u64, sides: u64, source: &mut S) -> Vec<u64> {
        (0..amount)
            .map(|_| {
                let value = source.throw(sides);
                assert!(
                    (1..=sides).contains(&value),
                    "source returned {value} for a {sides} sided dice"
                );
                value
            })
            .collect()
    }
}

/// Roll the dice described by `spec`, drawing from `source` in order
///
/// Never fails on a specification built by this crate. An out of range value
/// from `source` is a bug in the source and panics.
pub fn evaluate<S: roll::Source>(spec: &dice::Spec, source: &mut S) -> roll::Result {
    Evaluator::eval(spec, source)
}
