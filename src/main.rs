//! Vidcut CLI entry point.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = vidcut::run() {
        if e.is_usage() {
            vidcut::cli::usage_error(&e).exit();
        }
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
