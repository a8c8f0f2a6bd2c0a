//! Tracing configuration and initialization.

use tracing::Level;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::Targets,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Filter applied to log lines when neither `API_TOOLKIT_LOG` nor `RUST_LOG`
/// is set. Kept quiet so log lines never interleave with the rendered
/// response.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrcMode {
    /// A spinner for the in-flight request, warnings only.
    Spinner,
    /// Plain log lines filtered by the user's directive, no spinner.
    Plain,
}

pub struct Trc {
    mode: TrcMode,
    env_filter: EnvFilter,
}

impl Default for Trc {
    fn default() -> Self {
        let maybe_env_filter = EnvFilter::try_from_env("API_TOOLKIT_LOG")
            .or_else(|_| EnvFilter::try_from_default_env());

        match maybe_env_filter {
            // An explicit filter means the user wants to read the log, so the
            // spinner would only get in the way.
            Ok(env_filter) => Self {
                mode: TrcMode::Plain,
                env_filter,
            },
            Err(_) => Self {
                mode: TrcMode::Spinner,
                env_filter: EnvFilter::new(DEFAULT_FILTER),
            },
        }
    }
}

impl Trc {
    /// Logs go to stderr; stdout is reserved for the response.
    pub fn init(self) -> Result<(), TryInitError> {
        match self.mode {
            TrcMode::Plain => self.init_plain_mode(),
            TrcMode::Spinner => self.init_spinner_mode(),
        }
    }

    fn init_plain_mode(self) -> Result<(), TryInitError> {
        tracing_subscriber::registry()
            .with(self.env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time()
                    .compact(),
            )
            .try_init()
    }

    fn init_spinner_mode(self) -> Result<(), TryInitError> {
        // The spinner tracks this crate's info spans; log lines keep the quiet
        // default filter and are drawn above the spinner.
        let indicatif_layer = IndicatifLayer::new();
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(indicatif_layer.get_stderr_writer())
            .with_target(false)
            .without_time()
            .compact()
            .with_filter(self.env_filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(indicatif_layer.with_filter(spinner_targets()))
            .try_init()
    }
}

fn spinner_targets() -> Targets {
    Targets::new().with_target(env!("CARGO_CRATE_NAME"), Level::INFO)
}
