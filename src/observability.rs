//! Diagnostic output for the bridge.
//!
//! Every failed native call prints its Status text so interactive hosts see
//! the problem immediately, and the flat entry point echoes what it was asked
//! and what it found. Where that text goes is decided by
//! [`BridgeConfig::diagnostics`](crate::config::BridgeConfig). The `diag!`
//! macro is the only way crate code writes to the sink.

use colored::Colorize;

use crate::config::{BridgeConfig, DiagnosticSink};

/// Severity of a diagnostic line. Only affects colouring and the `log` level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Failure,
}

/// Writes one diagnostic line to the configured sink.
pub fn emit(config: &BridgeConfig, severity: Severity, message: &str) {
    match config.diagnostics {
        DiagnosticSink::Silent => {}
        DiagnosticSink::Log => match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Failure => log::warn!("{}", message),
        },
        DiagnosticSink::Stdout => println!("{}", paint(config, severity, message)),
        DiagnosticSink::Stderr => eprintln!("{}", paint(config, severity, message)),
    }
}

fn paint(config: &BridgeConfig, severity: Severity, message: &str) -> String {
    if config.color && severity == Severity::Failure {
        message.red().to_string()
    } else {
        message.to_string()
    }
}

/// Formats and emits a diagnostic line.
///
/// # Example
/// ```
/// use feather_bridge::{config::BridgeConfig, diag};
/// let config = BridgeConfig::silent();
/// diag!(&config, "{}, {}, {}", 100, 3, false);
/// diag!(failure: &config, "IOError: {}", "No such file or directory");
/// ```
#[macro_export]
macro_rules! diag {
    (failure: $config:expr, $($arg:tt)+) => {
        $crate::observability::emit(
            $config,
            $crate::observability::Severity::Failure,
            &format!($($arg)+),
        )
    };
    ($config:expr, $($arg:tt)+) => {
        $crate::observability::emit(
            $config,
            $crate::observability::Severity::Info,
            &format!($($arg)+),
        )
    };
}
