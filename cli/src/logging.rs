use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// Precedence: `MATGRAPH_LOG`, then `RUST_LOG`, then `--log-level`, then
/// `--verbose` (debug) or the warn-level default. Logs always go to stderr so
/// stdout carries only command output.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = match (verbose, log_level) {
        (_, Some(level)) => expand_level(level),
        (true, None) => "matgraph=debug,matgraph_core=debug".to_string(),
        (false, None) => "matgraph=warn,matgraph_core=warn".to_string(),
    };

    let filter = EnvFilter::try_from_env("MATGRAPH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
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

/// A bare level applies to both of our crates; a full directive is kept as-is.
fn expand_level(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("matgraph={level},matgraph_core={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_bare_level() {
        assert_eq!(expand_level("trace"), "matgraph=trace,matgraph_core=trace");
    }

    #[test]
    fn test_keep_directive() {
        assert_eq!(expand_level("matgraph_core=debug"), "matgraph_core=debug");
    }
}
