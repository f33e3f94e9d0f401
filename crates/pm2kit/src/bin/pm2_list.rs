use clap::Parser;
use pm2kit::cli::SupervisorArgs;
use pm2kit::{commands, logging};
use pm2kit_core::Pm2;

#[derive(Parser)]
#[command(name = "pm2-list", version)]
#[command(about = "List every pm2-managed process with its working directory and script", long_about = None)]
struct Cli {
    #[command(flatten)]
    supervisor: SupervisorArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.supervisor.verbose);

    let pm2 = Pm2::new(cli.supervisor.config());
    commands::list::handle(&pm2).await
}
