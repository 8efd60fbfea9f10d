//! Startup orchestration: installation root derivation, runtime
//! configuration, argument assembly, and hand-off to the embedded runtime.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::AppError;
use crate::locator;

/// Environment variable publishing the installation root to the runtime.
pub const HOME_ENV: &str = "RUBYLAUNCH_HOME";

/// Environment variable publishing the library directory to the runtime.
pub const LIB_ENV: &str = "RUBYLAUNCH_LIB";

/// Overrides the runtime program invoked at hand-off.
pub const RUBY_ENV: &str = "RUBYLAUNCH_RUBY";

const DEFAULT_RUBY: &str = "ruby";
const LIB_DIR: &str = "lib";

/// Fixed directive evaluated by the runtime ahead of any user argument: load
/// the bootstrap init script shipped under the installation root.
const INIT_DIRECTIVE: [&str; 2] = ["-e", "require 'ruby/init'"];

/// A fully assembled hand-off: runtime program, published configuration, and
/// the complete argument vector.
#[derive(Debug)]
pub struct Launch {
    program: OsString,
    home: PathBuf,
    lib: PathBuf,
    arguments: Vec<OsString>,
}

/// Resolve the installed artifact and assemble the hand-off for it.
///
/// Fails when the artifact cannot be located or sits too shallow in the
/// filesystem to have an installation root above it.
pub fn prepare(args: &[OsString]) -> Result<Launch, AppError> {
    let artifact = locator::installed_artifact()?;
    let home = install_root(&artifact)?;
    Ok(Launch::assemble(runtime_program(), home, args))
}

/// The installation root: grandparent directory of the installed artifact
/// (artifact file, its containing directory, that directory's parent).
pub fn install_root(artifact: &Path) -> Result<PathBuf, AppError> {
    artifact
        .parent()
        .and_then(Path::parent)
        .filter(|root| !root.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::NoInstallRoot { artifact: artifact.to_path_buf() })
}

fn runtime_program() -> OsString {
    env::var_os(RUBY_ENV).unwrap_or_else(|| OsString::from(DEFAULT_RUBY))
}

impl Launch {
    fn assemble(program: OsString, home: PathBuf, args: &[OsString]) -> Self {
        let lib = home.join(LIB_DIR);
        let mut arguments: Vec<OsString> =
            INIT_DIRECTIVE.iter().map(OsString::from).collect();
        arguments.extend(args.iter().cloned());
        Self { program, home, lib, arguments }
    }

    /// Installation root published to the runtime.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Library directory published to the runtime.
    pub fn lib(&self) -> &Path {
        &self.lib
    }

    /// Complete argument vector handed to the runtime.
    pub fn arguments(&self) -> &[OsString] {
        &self.arguments
    }

    /// Child command with the configuration values published on its
    /// environment rather than the launcher's own.
    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.arguments);
        command.env(HOME_ENV, &self.home);
        command.env(LIB_ENV, &self.lib);
        command
    }

    /// Hand process control to the runtime.
    ///
    /// On Unix the launcher's process image is replaced and this returns only
    /// when the replacement itself fails.
    #[cfg(unix)]
    pub fn run(self) -> Result<i32, AppError> {
        use std::os::unix::process::CommandExt;

        let error = self.command().exec();
        Err(AppError::RuntimeStart {
            program: self.program.to_string_lossy().into_owned(),
            details: error.to_string(),
        })
    }

    /// Hand process control to the runtime.
    ///
    /// Runs the runtime as a child process and reports its exit status once
    /// it terminates.
    #[cfg(not(unix))]
    pub fn run(self) -> Result<i32, AppError> {
        let status = self.command().status().map_err(|e| AppError::RuntimeStart {
            program: self.program.to_string_lossy().into_owned(),
            details: e.to_string(),
        })?;
        Ok(status.code().unwrap_or(1))
    }
}
