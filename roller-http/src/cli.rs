use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

const ROLLER_AUTHOR: &str = crate_authors!();
const ROLLER_VERSION: &str = crate_version!();
const ROLLER_ABOUT: &str = crate_description!();
const ROLLER_FLAG_D_SHORT: char = 'd';
const ROLLER_FLAG_D_HELP: &str = "Enable Debug logging";
const ROLLER_FLAG_B_SHORT: char = 'b';
const ROLLER_FLAG_B_HELP: &str = "Address the HTTP server listens on";

/// Collector port for OTLP over HTTP
const OTLP_HTTP_PORT: u16 = 4318;

#[derive(Parser, Debug)]
#[command(author = ROLLER_AUTHOR, version = ROLLER_VERSION, about = ROLLER_ABOUT)]
pub struct Args {
    #[arg(short = ROLLER_FLAG_D_SHORT, long, env = "ROLLER_DEBUG", help = ROLLER_FLAG_D_HELP, action)]
    pub debug: bool,

    #[arg(short = ROLLER_FLAG_B_SHORT, long, env = "ROLLER_BIND", help = ROLLER_FLAG_B_HELP, default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Prefix of the API routes
    #[arg(long, env = "ROLLER_BASE_PATH", default_value = "/api")]
    pub base_path: String,

    /// Seconds to wait before reporting ready
    #[arg(long, env = "ROLLER_STARTUP_DELAY", default_value_t = 15)]
    pub startup_delay: u64,

    /// Seconds in-flight requests get to finish on shutdown
    #[arg(long, env = "ROLLER_SHUTDOWN_GRACE", default_value_t = 10)]
    pub shutdown_grace: u64,

    /// Seed every roll from one shared generator, for reproducible runs
    #[arg(long, env = "ROLLER_SEED")]
    pub seed: Option<u64>,

    /// Where to export traces, e.g. `http://localhost:4318/v1/traces`
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Host of a Jaeger collector, used when no OTLP endpoint is given
    #[arg(long, env = "JAEGER_AGENT_HOST")]
    pub jaeger_host: Option<String>,

    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "roller")]
    pub service_name: String,
}

impl Args {
    /// Trace export endpoint, `None` disables exporting
    pub fn trace_endpoint(&self) -> Option<String> {
        self.otlp_endpoint.clone().or_else(|| {
            self.jaeger_host
                .as_ref()
                .map(|host| format!("http://{host}:{OTLP_HTTP_PORT}/v1/traces"))
        })
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_secs(self.startup_delay)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace)
    }
}
