// src/log.rs
//
// tracing-backed logging. Call sites use the short macros below; the
// frontends pick a sink once at startup:
//   GUI -> `.store/debug.log` (append)
//   CLI -> stderr

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Either the log file or stderr (when cloning the file handle fails).
pub enum FileOrStderr {
    File(File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn default_log_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}

/// Append log lines to `path`, creating its directory first.
/// Returns Err so the caller can fall back to `init_stderr`.
pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // try_init: a second init (tests, re-entry) is not an error for us
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("info,glaze_scrape=debug"))
        .with_writer(FileMakeWriter(file))
        .with_ansi(false)
        .try_init();

    tracing::info!("logging to {}", path.display());
    Ok(())
}

pub fn init_stderr(verbose: bool) {
    let default = if verbose { "info,glaze_scrape=debug" } else { "warn,glaze_scrape=info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
