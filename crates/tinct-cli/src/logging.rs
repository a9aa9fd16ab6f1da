//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::cli::Opts;

/// Filter directives: `TINCT_LOG` when set and valid, else `debug` with
/// `--verbose`, else `warn`.
#[must_use]
pub fn env_filter(opts: &Opts) -> EnvFilter {
    let fallback = if opts.verbose { "debug" } else { "warn" };
    opts.log_filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install a stderr `fmt` subscriber. Later calls are no-ops.
pub fn init(opts: &Opts) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(opts))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(args: &[&str], log: Option<&'static str>) -> Opts {
        Opts::parse_from_env_and_args(args, |key| {
            (key == "TINCT_LOG").then(|| log.map(str::to_string)).flatten()
        })
        .expect("valid args")
    }

    #[test]
    fn default_filter_is_warn() {
        let filter = env_filter(&opts(&["convert", "#000"], None));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn verbose_raises_to_debug() {
        let filter = env_filter(&opts(&["convert", "#000", "-v"], None));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn env_directives_win() {
        let filter = env_filter(&opts(&["convert", "#000", "-v"], Some("tinct_color=trace")));
        assert_eq!(filter.to_string(), "tinct_color=trace");
    }

    #[test]
    fn init_is_idempotent() {
        let opts = opts(&["convert", "#000"], None);
        init(&opts);
        init(&opts);
    }
}
