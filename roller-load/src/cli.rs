use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use reqwest::Url;

const LOAD_AUTHOR: &str = crate_authors!();
const LOAD_VERSION: &str = crate_version!();
const LOAD_ABOUT: &str = crate_description!();

/// Replayed when no roll is given on the command line
const DEFAULT_ROLLS: [&str; 10] = [
    "3d6", "1d20", "1d12", "4d6kh3", "4d6kh3", "4d6kh3", "4d6kh3", "4d6kh3", "4d6kh3", "1d10",
];

#[derive(Parser, Debug)]
#[command(author = LOAD_AUTHOR, version = LOAD_VERSION, about = LOAD_ABOUT)]
pub struct Args {
    /// Roll service to hit
    #[arg(short, long, env = "ROLLER_TARGET", default_value = "http://localhost:31341")]
    pub target: Url,

    /// Dice notations to roll, in order
    pub rolls: Vec<String>,
}

impl Args {
    pub fn rolls(&self) -> Vec<&str> {
        if self.rolls.is_empty() {
            DEFAULT_ROLLS.to_vec()
        } else {
            self.rolls.iter().map(String::as_str).collect()
        }
    }
}

/// `target` with the notation in its `roll` query parameter
pub fn roll_url(target: &Url, roll: &str) -> Url {
    let mut url = target.clone();
    url.query_pairs_mut().append_pair("roll", roll);
    url
}
