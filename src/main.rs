use std::ffi::OsString;
use std::process;

use clap::Parser;
use rubylaunch::AppError;

/// Bootstrap launcher for the embedded Ruby runtime.
///
/// Every argument belongs to the runtime, so clap's automatic help and
/// version flags are disabled and flag-like tokens pass through untouched.
#[derive(Parser)]
#[command(name = "rubylaunch", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments forwarded verbatim to the embedded runtime.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    arguments: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = rubylaunch::launch(&cli.arguments);

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
