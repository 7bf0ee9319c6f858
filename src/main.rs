use std::process::ExitCode;

fn main() -> ExitCode {
    doxmdx::cli::run()
}
