use crate::dice;
use crate::error::Error;
use crate::error::Result;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "roller.pest"]
pub struct Parser;

impl Parser {
    /// Turn a pest failure into a syntax error pointing at the rest of the input
    fn syntax_error(input: &str, error: pest::error::Error<Rule>) -> Error {
        let error = error.renamed_rules(|rule| match rule {
            Rule::amount => "dice amount".to_owned(),
            Rule::sides => "dice sides".to_owned(),
            Rule::number => "amount of dice to keep".to_owned(),
            Rule::roll => "`d`".to_owned(),
            Rule::keep_hi => "`kh`".to_owned(),
            Rule::keep_lo => "`kl`".to_owned(),
            Rule::EOI => "end of input".to_owned(),
            rule => format!("{rule:?}"),
        });
        let position = match error.location {
            InputLocation::Pos(position) => position,
            InputLocation::Span((start, _)) => start,
        };
        Error::syntax(
            error.variant.message(),
            input.get(position..).unwrap_or_default(),
        )
    }

    fn extract_value(pair: &Pair<Rule>) -> Result<u64> {
        pair.as_str()
            .parse::<u64>()
            .map_err(|_| Error::value("value out of range", pair.as_str()))
    }

    pub fn extract_modifier_value(modifier: Pair<Rule>) -> Result<usize> {
        let text = modifier.as_str();
        match modifier.into_inner().next() {
            Some(value) => value
                .as_str()
                .parse::<usize>()
                .map_err(|_| Error::value("value out of range", text)),
            None => Err(Error::syntax("missing amount of dice to keep", text)),
        }
    }

    /// Parse a whole dice notation into a validated specification
    pub fn parse_spec(input: &str) -> Result<dice::Spec> {
        let pairs = <Self as pest::Parser<Rule>>::parse(Rule::command, input)
            .map_err(|error| Self::syntax_error(input, error))?;
        let mut amount = None;
        let mut sides = None;
        let mut modifier = dice::Modifier::None;
        for pair in pairs.flat_map(|pair| pair.into_inner()) {
            match pair.as_rule() {
                Rule::amount => amount = Some(Self::extract_value(&pair)?),
                Rule::sides => sides = Some(Self::extract_value(&pair)?),
                Rule::keep_hi => {
                    modifier = dice::Modifier::KeepHigh(Self::extract_modifier_value(pair)?)
                }
                Rule::keep_lo => {
                    modifier = dice::Modifier::KeepLow(Self::extract_modifier_value(pair)?)
                }
                _ => (),
            }
        }
        let sides = sides.ok_or_else(|| Error::syntax("missing dice sides", input))?;
        dice::Spec::new(amount.unwrap_or(1), sides, modifier)
    }
}

/// Parse a dice notation such as `4d6kh3` into a roll specification
///
/// The amount of dice defaults to one when omitted. Anything the grammar
/// doesn't describe (whitespace, arithmetic, several dice groups) is rejected.
pub fn parse(input: &str) -> Result<dice::Spec> {
    Parser::parse_spec(input)
}
