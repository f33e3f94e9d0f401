use anyhow::Context;
use clap::Parser;
use pm2kit::cli::SupervisorArgs;
use pm2kit::{commands, logging};
use pm2kit_core::Pm2;

#[derive(Parser)]
#[command(name = "pm2-stop-here", version)]
#[command(about = "Stop every pm2-managed process running from the current directory", long_about = None)]
struct Cli {
    #[command(flatten)]
    supervisor: SupervisorArgs,

    /// Show the matching processes without stopping them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.supervisor.verbose);

    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let pm2 = Pm2::new(cli.supervisor.config());

    // Individual stop failures are reported but never change the exit code
    commands::stop_here::handle(&pm2, &current_dir, cli.dry_run).await?;
    Ok(())
}
