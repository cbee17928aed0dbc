use std::process::ExitCode;

fn main() -> ExitCode {
    match idc_jsonapi::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
