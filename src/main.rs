use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use swiftfs::cli::{self, Args};

#[tokio::main]
async fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e)
            if matches!(
                e.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::run(args).await {
        eprintln!("Error: {e}");
        if e.is_usage() {
            eprintln!("{}", Args::command().render_usage());
        }
        std::process::exit(1);
    }
}

// Logs go to stderr; stdout carries command output only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
