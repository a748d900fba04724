use crate::server::AppState;
use axum::extract::MatchedPath;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::Duration;
use std::time::Instant;

/// Histogram upper bounds in seconds
const BUCKETS: [f64; 4] = [0.1, 0.3, 1.5, 10.5];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Labels {
    method: String,
    addr: String,
    status: u16,
}

#[derive(Debug, Default)]
struct Histogram {
    /// Cumulative, one per bound in `BUCKETS`
    buckets: [u64; BUCKETS.len()],
    count: u64,
    sum: f64,
}

/// Request metrics, rendered in the Prometheus text format
#[derive(Debug)]
pub struct Metrics {
    version: &'static str,
    requests: Mutex<BTreeMap<Labels, Histogram>>,
}

impl Metrics {
    pub fn new(version: &'static str) -> Self {
        Metrics {
            version,
            requests: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn observe(&self, method: &str, addr: &str, status: u16, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        let labels = Labels {
            method: method.to_owned(),
            addr: addr.to_owned(),
            status,
        };
        let mut requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        let histogram = requests.entry(labels).or_default();
        for (bucket, bound) in histogram.buckets.iter_mut().zip(BUCKETS) {
            if seconds <= bound {
                *bucket += 1;
            }
        }
        histogram.count += 1;
        histogram.sum += seconds;
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // writing into a String can't fail
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "# HELP request_seconds how long it took to process the request, partitioned by status code, method and HTTP path.")?;
        writeln!(out, "# TYPE request_seconds histogram")?;
        let requests = self.requests.lock().unwrap_or_else(PoisonError::into_inner);
        for (labels, histogram) in requests.iter() {
            let base = format!(
                "type=\"http\",status=\"{}\",method=\"{}\",addr=\"{}\",isError=\"{}\"",
                labels.status,
                labels.method,
                labels.addr,
                labels.status >= 400
            );
            for (bucket, bound) in histogram.buckets.iter().zip(BUCKETS) {
                writeln!(out, "request_seconds_bucket{{{base},le=\"{bound}\"}} {bucket}")?;
            }
            writeln!(
                out,
                "request_seconds_bucket{{{base},le=\"+Inf\"}} {}",
                histogram.count
            )?;
            writeln!(out, "request_seconds_sum{{{base}}} {}", histogram.sum)?;
            writeln!(out, "request_seconds_count{{{base}}} {}", histogram.count)?;
        }
        writeln!(out, "# HELP application_info static information about the application")?;
        writeln!(out, "# TYPE application_info gauge")?;
        writeln!(out, "application_info{{version=\"{}\"}} 1", self.version)
    }
}

/// Middleware timing every routed request
pub async fn track(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let addr = match request.extensions().get::<MatchedPath>() {
        Some(path) => path.as_str().to_owned(),
        None => request.uri().path().to_owned(),
    };
    let start = Instant::now();
    let response = next.run(request).await;
    state
        .metrics
        .observe(&method, &addr, response.status().as_u16(), start.elapsed());
    response
}
