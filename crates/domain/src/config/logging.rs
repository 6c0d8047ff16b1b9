#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,

    /// Set by the presence of `DEBUG`: verbose tracing and extra log lines.
    pub debug: bool,
}

/// reqwest writes per-connection I/O at trace under this target.
const CONNECTION_TRACE_DIRECTIVE: &str = "reqwest::connect::verbose=trace";

impl LoggingConfig {
    /// Level used when `RUST_LOG` is not set.
    pub fn effective_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.level
        }
    }

    /// `EnvFilter` directives used when `RUST_LOG` is not set. Debug mode also
    /// lets reqwest's connection tracing through.
    pub fn filter_directives(&self) -> String {
        if self.debug {
            format!("{},{}", self.effective_level(), CONNECTION_TRACE_DIRECTIVE)
        } else {
            self.effective_level().to_string()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            debug: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
