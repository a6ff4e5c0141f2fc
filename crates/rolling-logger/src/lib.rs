//! Rolling Logger
//!
//! Size-rotated file logging for the application.
//! `init_logger` installs a global `tracing` subscriber; records sent through
//! the `log` facade are captured as well.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file grows past this many bytes
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Number of rotated files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 3;

static ACTIVE_LOG: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the global logger writing to `<log_dir>/<app_name>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let file = RollingFile::new(&log_dir, app_name)
        .map_err(|e| format!("Failed to open log file: {}", e))?;
    let path = file.path();

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_timer(LocalTimer)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    let _ = ACTIVE_LOG.set(path);
    tracing::info!("{} logger started", app_name);
    Ok(())
}

/// Path of the active log file, if the logger has been initialized
pub fn log_file() -> Option<PathBuf> {
    ACTIVE_LOG.get().cloned()
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    if ACTIVE_LOG.get().is_none() {
        return Err("Logger not initialized".to_string());
    }
    Ok(())
}

/// Local wall-clock timestamps with millisecond precision
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Log file that rotates to `<name>.log.1`, `<name>.log.2`, ... by size
#[derive(Clone)]
pub struct RollingFile {
    state: Arc<Mutex<RollingState>>,
}

struct RollingState {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn new(dir: &Path, app_name: &str) -> io::Result<Self> {
        Self::with_limits(dir, app_name, DEFAULT_MAX_BYTES, DEFAULT_MAX_FILES)
    }

    pub fn with_limits(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = active_path(dir, app_name);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            state: Arc::new(Mutex::new(RollingState {
                dir: dir.to_path_buf(),
                app_name: app_name.to_string(),
                max_bytes,
                max_files,
                file,
                written,
            })),
        })
    }

    pub fn path(&self) -> PathBuf {
        match self.state.lock() {
            Ok(state) => active_path(&state.dir, &state.app_name),
            Err(poisoned) => {
                let state = poisoned.into_inner();
                active_path(&state.dir, &state.app_name)
            }
        }
    }
}

fn active_path(dir: &Path, app_name: &str) -> PathBuf {
    dir.join(format!("{}.log", app_name))
}

fn rotated_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    dir.join(format!("{}.log.{}", app_name, index))
}

impl RollingState {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 0 {
            self.file = File::create(active_path(&self.dir, &self.app_name))?;
            self.written = 0;
            return Ok(());
        }

        let oldest = rotated_path(&self.dir, &self.app_name, self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.max_files).rev() {
            let from = rotated_path(&self.dir, &self.app_name, index);
            if from.exists() {
                fs::rename(&from, rotated_path(&self.dir, &self.app_name, index + 1))?;
            }
        }
        fs::rename(
            active_path(&self.dir, &self.app_name),
            rotated_path(&self.dir, &self.app_name, 1),
        )?;

        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(active_path(&self.dir, &self.app_name))?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;

        if state.written > 0 && state.written + buf.len() as u64 > state.max_bytes {
            state.rotate()?;
        }

        let n = state.file.write(buf)?;
        state.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        state.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingFile {
    type Writer = RollingFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
