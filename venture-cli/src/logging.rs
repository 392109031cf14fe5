use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    Layer, // for .with_filter() on the console layer
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

// --- Formatter ---

/// `<local time> <LEVEL> <target>: <fields>`, level coloured on terminals.
struct LineFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = *meta.level();
        let time = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            write!(writer, "{time} \x1b[{}m{level:>5}\x1b[0m ", level_color(level))?;
        } else {
            write!(writer, "{time} {level:>5} ")?;
        }
        write!(writer, "{}: ", meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file ---

/// File that `enable_file_logging` opens after startup. Records written
/// before then are dropped.
#[derive(Default)]
struct LogFile(Mutex<Option<File>>);

impl LogFile {
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        // A panic mid-write leaves the file usable; keep logging.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn replace(
        &self,
        file: File,
    ) {
        *self.lock() = Some(file);
    }
}

// `Arc<LogFile>` is a `MakeWriter` through this impl.
impl Write for &LogFile {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.lock().as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().as_mut().map_or(Ok(()), |file| file.flush())
    }
}

// --- Statics ---

type SetStrFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;
type SetBoolFn = Box<dyn Fn(bool) -> Result<()> + Send + Sync>;

static APP_NAME: OnceLock<String> = OnceLock::new();
static SET_LOG_LEVEL: OnceLock<SetStrFn> = OnceLock::new();
static SET_CONSOLE_ENABLED: OnceLock<SetBoolFn> = OnceLock::new();
static LOG_FILE: OnceLock<Arc<LogFile>> = OnceLock::new();

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn store_level_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_LOG_LEVEL.set(Box::new(move |level_str: &str| {
        let filter = EnvFilter::try_new(level_str)
            .map_err(|e| anyhow::anyhow!("invalid log level '{level_str}': {e}"))?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

fn store_console_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_CONSOLE_ENABLED.set(Box::new(move |enabled: bool| {
        // "trace" passes everything through; the global filter is still the ceiling.
        let filter = if enabled {
            EnvFilter::new("trace")
        } else {
            EnvFilter::new("off")
        };
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("console reload failed: {e}"))
    }));
}

// --- Public API ---

/// Changes the active log filter at runtime.
/// Accepts a bare level ("error", "warn", "info", "debug", "trace")
/// or any full EnvFilter directive.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(f) => f(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Shows or hides console (stderr) log output without affecting file logging.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    match SET_CONSOLE_ENABLED.get() {
        Some(f) => f(enabled),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Path of the log file inside `dir`: `<app_name>.log`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(format!("{}.log", app_name()))
}

/// Starts appending log output to `<app_name>.log` in `dir` and returns the
/// file's path. If a file is already open it is replaced.
/// The directory must already exist.
pub fn enable_file_logging(dir: &Path) -> Result<PathBuf> {
    let path = log_file_path(dir);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    match LOG_FILE.get() {
        Some(log_file) => {
            log_file.replace(file);
            Ok(path)
        }
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Returns the process name derived from the executable path.
/// Falls back to "venture" if the path cannot be determined.
pub fn app_name() -> &'static str {
    APP_NAME.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "venture".to_string())
    })
}

/// Initializes logging. Call once at startup.
///
/// - Console: stderr, since stdout carries the questionnaire and reports.
///   Coloured when attached to a terminal.
/// - File: inactive until `enable_file_logging()` is called.
/// - Level: INFO by default, or overridden by the RUST_LOG env var.
pub fn init_default_logging() {
    let _ = app_name();

    let log_file = Arc::clone(LOG_FILE.get_or_init(Arc::default));

    // Per-console on/off filter; starts open.
    let (console_gate, console_handle) = reload::Layer::new(EnvFilter::new("trace"));
    // Global level filter for both layers.
    let (level_filter, level_handle) = reload::Layer::new(make_filter());

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(console_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_ansi(false)
        .with_writer(log_file);

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        store_level_handle(level_handle);
        store_console_handle(console_handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn log_file_is_named_after_the_binary() {
        let path = log_file_path(Path::new("/var/log"));

        assert_eq!(path, Path::new("/var/log").join(format!("{}.log", app_name())));
        assert!(!app_name().is_empty());
    }

    #[test]
    fn log_file_drops_records_until_opened() {
        let log_file = LogFile::default();

        assert_eq!((&log_file).write(b"dropped").unwrap(), 7);
        (&log_file).flush().unwrap();
    }

    #[test]
    fn log_file_appends_after_replace() {
        let path =
            std::env::temp_dir().join(format!("venture-log-file-{}.log", std::process::id()));
        let log_file = LogFile::default();
        log_file.replace(File::create(&path).unwrap());

        (&log_file).write_all(b"kept\n").unwrap();
        (&log_file).flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kept\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn level_colors_are_distinct() {
        let colors = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE]
            .map(level_color);

        for (i, color) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(color), "{color}");
        }
    }

    #[test]
    fn file_logging_writes_after_init() {
        init_default_logging();
        let dir = std::env::temp_dir().join(format!("venture-log-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = enable_file_logging(&dir).expect("logging is initialized");
        tracing::warn!(marker = "file-logging-test", "hello");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("file-logging-test"), "{contents}");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
