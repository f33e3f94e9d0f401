use anyhow::Context;
use colored::{ColoredString, Colorize};
use pm2kit_core::{ProcessRecord, Supervisor};

pub async fn handle(supervisor: &dyn Supervisor) -> anyhow::Result<()> {
    let records = supervisor
        .list_processes()
        .await
        .with_context(|| format!("Failed to list processes from {}", supervisor.name()))?;

    if records.is_empty() {
        println!("{}", "No processes are managed by the supervisor.".dimmed());
        return Ok(());
    }

    for record in &records {
        print!("{}", render_record(record));
    }

    Ok(())
}

/// One listing block, terminated by a blank line
pub fn render_record(record: &ProcessRecord) -> String {
    format!(
        "[{}] {} - {}\n    Directory: {}\n    Script:    {}\n\n",
        record.id.to_string().bold(),
        record.name.cyan(),
        status_colored(&record.status),
        record.directory_label(),
        record.script_label().dimmed()
    )
}

fn status_colored(status: &str) -> ColoredString {
    match status {
        "online" => status.green(),
        "stopped" | "errored" => status.red(),
        _ => status.normal(),
    }
}
