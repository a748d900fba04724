use rand::rngs::StdRng;
use rand::SeedableRng;
use roller_lib::roll;
use roller_lib::solver::Solver;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Where the dice of every request get their randomness
#[derive(Debug)]
pub enum Entropy {
    /// Thread local generator, nothing shared between requests
    Thread,
    /// One seeded generator shared by all requests, locked for one roll at a time
    Seeded(Mutex<StdRng>),
}

impl Entropy {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Entropy::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => Entropy::Thread,
        }
    }

    pub fn solve(&self, solver: &Solver) -> roll::Result {
        match self {
            Entropy::Thread => solver.solve(),
            Entropy::Seeded(generator) => {
                let mut generator = generator.lock().unwrap_or_else(PoisonError::into_inner);
                solver.solve_with(&mut *generator)
            }
        }
    }
}
