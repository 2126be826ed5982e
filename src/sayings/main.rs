//! The binary only invokes `cli::run()` and maps its outcome to an exit code.
//! Everything user-facing lives in `cli/`; the interpreter itself is the
//! `sayings` library.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        // Fatal diagnostics share stdout with the per-line ones, in order.
        println!("{}", e);
        std::process::exit(1);
    }
}
