use crate::dice;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::parser;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent a solver, holds the query string and its parsed specification
#[derive(Clone, Debug)]
pub struct Solver {
    query: String,
    spec: dice::Spec,
}

impl Solver {
    pub fn new(input: &str) -> Result<Self> {
        Ok(Solver {
            query: input.to_owned(),
            spec: parser::parse(input)?,
        })
    }

    /// Solve the roll expression using the thread local Rng
    pub fn solve(&self) -> roll::Result {
        self.solve_with(&mut rand::thread_rng())
    }

    /// Solve the roll expression using the provided Rng source
    pub fn solve_with<R: Rng>(&self, generator: &mut R) -> roll::Result {
        self.solve_with_source(&mut RandomSource { generator })
    }

    /// Solve the roll expression using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, source: &mut S) -> roll::Result {
        Evaluator::eval(&self.spec, source)
    }

    pub fn spec(&self) -> &dice::Spec {
        &self.spec
    }

    /// Return the query string
    pub fn as_str(&self) -> &str {
        &self.query
    }
}
