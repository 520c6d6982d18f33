//! The `fieldcopy` binary: copy named fields between JSON/YAML documents.
//!
//! # Usage
//!
//! ```text
//! fieldcopy copy request.json user.yaml --path location.state --path name
//! fieldcopy copy request.json user.yaml --plan plan.yaml
//! fieldcopy get user.yaml location.zip
//! ```

use std::process;

use fieldcopy_core::cli::parse_args;
use fieldcopy_core::exec::execute;
use tracing_subscriber::EnvFilter;


const LOG_ENV: &str = "FIELDCOPY_LOG";


fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("fieldcopy: {}", e);
            process::exit(1);
        }
    };

    tracing::debug!(?cmd, "executing command");
    match execute(cmd) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end_matches('\n'));
            }
        }
        Err(e) => {
            eprintln!("fieldcopy: {}", e);
            process::exit(1);
        }
    }
}


/// Log to stderr, filtered by `FIELDCOPY_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}


fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}
