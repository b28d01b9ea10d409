use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Heap operation counts for one Prim or Dijkstra run.
///
/// Collected per run and emitted at debug level when the run completes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetrics {
    /// Vertices removed with extract-min
    pub extractions: u64,
    /// Vertices queued with insert
    pub insertions: u64,
    /// Decrease-key notifications
    pub decreases: u64,
}

impl HeapMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total heap operations performed
    pub fn total(&self) -> u64 {
        self.extractions + self.insertions + self.decreases
    }
}

/// Log heap metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let metrics = HeapMetrics::new();
/// // ... drive the heap ...
/// log_heap_metrics!(&metrics, "operation_name");
/// ```
#[macro_export]
macro_rules! log_heap_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            extractions = $metrics.extractions,
            insertions = $metrics.insertions,
            decreases = $metrics.decreases,
            total = $metrics.total(),
            "heap_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", source = source);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Install the global subscriber for a graphwalk process.
///
/// `RUST_LOG` and then `GRAPHWALK_LOG` take precedence. Without either, the
/// filter comes from `log_level` (a bare level or a full directive) or from
/// `verbose`. Output always goes to stderr so stdout stays clean for reports.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = env_filter(&fallback_directive(verbose, log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        let spans = fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE;
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_span_events(spans)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Filter directive used when neither log variable is set
fn fallback_directive(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(directive) if directive.contains('=') => directive.to_string(),
        Some(level) => format!("graphwalk={level},graphwalk_core={level}"),
        None if verbose => "graphwalk=debug,graphwalk_core=debug".to_string(),
        None => "graphwalk=warn,graphwalk_core=warn".to_string(),
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHWALK_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}
