use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    match daslog_clean::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Errors are reported on stdout alongside the records
            println!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
