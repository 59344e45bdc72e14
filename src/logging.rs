use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialise logging at `info`, or at `debug` when `debug` is set.
/// `RUST_LOG` is only honoured in debug mode.
///
/// Output goes to `log_file` when given, otherwise to stderr. Stdout carries
/// the event stream.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let file_name = log_file
        .as_ref()
        .and_then(|path| path.file_name().map(|name| (path, name.to_owned())));

    let _ = match file_name {
        Some((path, name)) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let appender = tracing_appender::rolling::never(dir, name);
            builder.with_ansi(false).with_writer(appender).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };
}
