#![allow(clippy::multiple_crate_versions)]

//! Snapzone - inspection CLI for the snap-to-zone layout engine.
//!
//! Lists the layouts a viewport offers, resolves zone rectangles, and manages
//! the configuration file. Logging goes to stderr and is controlled by
//! `SNAPZONE_LOG` (or `--verbose`).

fn main() {
    if let Err(err) = snapzone_lib::cli::run() {
        eprintln!("snapzone: {err}");
        std::process::exit(1);
    }
}
