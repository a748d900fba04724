mod cli;
use cli::Parser;

use colored::Colorize;
use std::process::ExitCode;

async fn fetch(client: &reqwest::Client, url: reqwest::Url) -> reqwest::Result<String> {
    client.get(url).send().await?.text().await
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Args::parse();
    let client = reqwest::Client::new();
    for (count, roll) in args.rolls().into_iter().enumerate() {
        let url = cli::roll_url(&args.target, roll);
        match fetch(&client, url).await {
            Ok(body) => println!("{}", format!("load: {}> {}", count + 1, body.trim_end()).green()),
            Err(error) => {
                eprintln!("{}", format!("load: error: `{}`", error).bold().red());
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
