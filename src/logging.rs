use tracing_appender::non_blocking::WorkerGuard;

/// Sends `tracing` output to `file_name` in the working directory.
///
/// The level is DEBUG when the `DEBUG` environment variable is `1`, INFO otherwise.
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init(file_name: &str) -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    let file_appender = tracing_appender::rolling::never(".", file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
