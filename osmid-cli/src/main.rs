//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = osmid_cli::run() {
        eprintln!("osmid: {err}");
        std::process::exit(1);
    }
}
