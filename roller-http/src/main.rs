use clap::Parser;
use tracing::debug;
use tracing::info;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_unwrap::ResultExt;

mod cli;
mod entropy;
mod metrics;
mod readiness;
mod server;
mod telemetry;

#[tokio::main]
async fn main() {
    let dotenv = dotenv::dotenv();
    let args = cli::Args::parse();

    let endpoint = args.trace_endpoint();
    let telemetry = telemetry::Telemetry::new(endpoint.as_deref(), &args.service_name);

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(true),
        )
        .with(telemetry.as_ref().ok().and_then(|telemetry| telemetry.layer()))
        .init();

    if let Err(err) = dotenv {
        debug!("No `.env` file loaded `{}`", err);
    }
    let telemetry = telemetry.expect_or_log("Could not install trace exporter");
    match endpoint {
        Some(endpoint) if telemetry.is_enabled() => info!("Exporting traces to `{}`", endpoint),
        _ => info!("Trace export disabled"),
    }

    server::run(&args).await;
    telemetry.shutdown();
}
