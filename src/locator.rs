//! Resolution of the installed artifact that supplied the currently running
//! code.
//!
//! By default the artifact is the launcher executable itself, as reported by
//! the operating system. An archive-hosting wrapper may instead report the
//! origin explicitly through [`ORIGIN_ENV`] as a composite URL of the shape
//! `jar:file:<path>!<inner>`, in which case the archive's own path is
//! extracted from it.

use std::env;
use std::path::PathBuf;

use percent_encoding::percent_decode_str;

use crate::error::AppError;

/// Environment variable through which a hosting wrapper reports the origin of
/// the launcher code.
pub const ORIGIN_ENV: &str = "RUBYLAUNCH_ORIGIN";

/// Composite scheme prefix identifying an archive-hosted origin.
const ARCHIVE_PREFIX: &str = "jar:file:";

/// Where the running code came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Reported explicitly as a composite archive URL.
    Archive(String),
    /// The launcher's own executable, as reported by the operating system.
    Executable(PathBuf),
}

/// Conventional file name of the launcher artifact, used in diagnostics.
pub fn resource_name() -> String {
    format!("{}{}", env!("CARGO_PKG_NAME"), env::consts::EXE_SUFFIX)
}

/// Determine where the running code came from.
///
/// A reported origin wins over the executable path; its percent-escapes are
/// decoded leniently before any further interpretation.
pub fn resolve_origin() -> Result<Origin, AppError> {
    origin_from(env::var(ORIGIN_ENV).ok())
}

fn origin_from(reported: Option<String>) -> Result<Origin, AppError> {
    if let Some(raw) = reported {
        return Ok(Origin::Archive(unescape(&raw)));
    }
    let exe = env::current_exe().map_err(|e| AppError::ResourceNotFound {
        resource: resource_name(),
        details: e.to_string(),
    })?;
    Ok(Origin::Executable(exe))
}

/// Extract the archive's own path from a composite origin URL.
///
/// The origin must start with `jar:file:` and contain a `!` after that
/// prefix; anything else means the code is not running from a packaged
/// archive.
pub fn archive_path(origin: &str) -> Result<PathBuf, AppError> {
    let not_packaged = || AppError::NotPackaged {
        resource: resource_name(),
        origin: origin.to_owned(),
    };

    let rest = origin.strip_prefix(ARCHIVE_PREFIX).ok_or_else(not_packaged)?;
    let (path, _inner) = rest.split_once('!').ok_or_else(not_packaged)?;
    Ok(PathBuf::from(path))
}

/// Absolute path of the installed artifact containing the running code.
pub fn installed_artifact() -> Result<PathBuf, AppError> {
    match resolve_origin()? {
        Origin::Archive(url) => archive_path(&url),
        Origin::Executable(path) => Ok(path),
    }
}

/// Decode percent-escapes leniently: input that does not decode to valid
/// UTF-8 is passed through unchanged.
fn unescape(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_owned(),
    }
}
