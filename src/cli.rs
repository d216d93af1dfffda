use clap::Parser;
use std::io;

use crate::command::Invocation;
use crate::config::load_swift_config;
use crate::error::Result;
use crate::storage::StorageClient;

/// Filesystem-style access to an OpenStack Swift container.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "swiftfs", version, about)]
pub struct Args {
    /// User name for obtaining an auth token
    #[arg(short = 'U', long, env = "ST_USER", hide_env_values = true)]
    pub user: Option<String>,

    /// Key for obtaining an auth token [env: PASSWORD, ST_KEY]
    #[arg(short = 'K', long)]
    pub key: Option<String>,

    /// URL for obtaining an auth token
    #[arg(short = 'A', long = "auth", env = "ST_AUTH")]
    pub auth_url: Option<String>,

    /// Swift container to use
    #[arg(short = 'c', long)]
    pub container: Option<String>,

    /// <COMMAND> <CWD> [ARGS]... where COMMAND is one of
    /// put, get, ls, mkdir, chdir, rmdir, delete
    #[arg(value_name = "COMMAND_ARGS")]
    pub command_args: Vec<String>,
}

/// Validate the invocation, then connect and execute it.
///
/// Configuration and command errors are raised before any request reaches
/// the backend.
pub async fn run(args: Args) -> Result<()> {
    let config = load_swift_config(&args)?;
    let invocation = Invocation::parse(&args.command_args)?;
    log::debug!(
        "run container={} verb={} cwd={}",
        config.container,
        invocation.command.verb(),
        invocation.cwd
    );

    let client = StorageClient::connect(&config).await?;
    let mut out = io::stdout();
    invocation.command.execute(&client, &mut out).await
}
