use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = treeops::cli::parse();
    if let Err(err) = app::run(args) {
        treeops::output::print_error(&format!("{err:#}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
