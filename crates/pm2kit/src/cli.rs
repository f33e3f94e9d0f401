use clap::Args;
use pm2kit_core::SupervisorConfig;

/// Options accepted by every utility
#[derive(Args, Debug, Clone)]
pub struct SupervisorArgs {
    /// Supervisor executable (default: pm2, or pm2.cmd on Windows)
    #[arg(long = "supervisor", env = "PM2KIT_SUPERVISOR", value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl SupervisorArgs {
    pub fn config(&self) -> SupervisorConfig {
        match &self.program {
            Some(program) => SupervisorConfig::with_program(program),
            None => SupervisorConfig::default(),
        }
    }
}
