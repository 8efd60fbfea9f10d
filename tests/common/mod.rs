//! Shared testing harness for `rubylaunch` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated installation tree (`<root>/bin` and `<root>/lib`) plus a stub
/// runtime that echoes the configuration and arguments it receives.
pub(crate) struct TestContext {
    root: TempDir,
    install_root: PathBuf,
}

impl TestContext {
    /// Create an installation tree rooted at a directory named `app`.
    pub(crate) fn new() -> Self {
        Self::named("app")
    }

    /// Create an installation tree with a custom root directory name.
    pub(crate) fn named(root_name: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let install_root = root.path().join(root_name);
        fs::create_dir_all(install_root.join("bin")).expect("Failed to create bin directory");
        fs::create_dir_all(install_root.join("lib")).expect("Failed to create lib directory");
        Self { root, install_root }
    }

    /// Absolute path of the emulated installation root.
    pub(crate) fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Composite origin URL placing the launcher artifact under `bin/`.
    pub(crate) fn archive_origin(&self) -> String {
        format!(
            "jar:file:{}/bin/rubylaunch.jar!/rubylaunch",
            self.install_root.display()
        )
    }

    /// Write a stub runtime script that prints the published environment and
    /// its arguments, then exits with `code`.
    #[cfg(unix)]
    pub(crate) fn stub_runtime(&self, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("stub-ruby");
        let script = format!(
            "#!/bin/sh\n\
             echo \"home=$RUBYLAUNCH_HOME\"\n\
             echo \"lib=$RUBYLAUNCH_LIB\"\n\
             for a in \"$@\"; do echo \"arg=$a\"; done\n\
             exit {code}\n"
        );
        fs::write(&path, script).expect("Failed to write stub runtime");

        let mut permissions =
            fs::metadata(&path).expect("Failed to stat stub runtime").permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions).expect("Failed to mark stub executable");
        path
    }

    /// Build a command for invoking the compiled `rubylaunch` binary.
    pub(crate) fn cli(&self) -> Command {
        Command::cargo_bin("rubylaunch").expect("Failed to locate rubylaunch binary")
    }
}
