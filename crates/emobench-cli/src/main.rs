use clap::Parser;

mod cli;
mod exit_codes;

use cli::args::Cli;
use cli::commands::dispatch;
use emobench_core::errors::EvalError;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            match e.downcast_ref::<EvalError>() {
                Some(EvalError::Config(_)) => exit_codes::CONFIG_ERROR,
                _ => exit_codes::RUN_FAILED,
            }
        }
    };
    std::process::exit(code);
}
