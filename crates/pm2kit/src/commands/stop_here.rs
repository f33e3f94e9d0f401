use anyhow::Context;
use colored::Colorize;
use pm2kit_core::{DirectoryMatcher, ProcessRecord, Supervisor};
use std::path::Path;

const DELIMITER: &str = "----------------------------------------";

/// Outcome of one stopper run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopReport {
    /// Processes whose directory matched
    pub targeted: usize,
    pub stopped: usize,
    pub failed: usize,
}

pub async fn handle(
    supervisor: &dyn Supervisor,
    current_dir: &Path,
    dry_run: bool,
) -> anyhow::Result<StopReport> {
    let matcher = DirectoryMatcher::new(current_dir);
    let cwd = current_dir.display();
    tracing::debug!("Normalized current directory: {}", matcher.normalized());

    let records = supervisor
        .list_processes()
        .await
        .with_context(|| format!("Failed to list processes from {}", supervisor.name()))?;

    if records.is_empty() {
        println!(
            "{}",
            format!("No processes are managed by the supervisor (current directory: {}).", cwd)
                .dimmed()
        );
        return Ok(StopReport::default());
    }

    let matches = matcher.select(&records);
    if matches.is_empty() {
        println!(
            "{}",
            format!("No processes running from this directory: {}", cwd).dimmed()
        );
        return Ok(StopReport::default());
    }

    let mut report = StopReport {
        targeted: matches.len(),
        ..StopReport::default()
    };

    println!(
        "{}",
        format!("Found {} process(es) running from {}:", matches.len(), cwd).bold()
    );
    println!();

    for record in matches {
        print!("{}", render_match(record));

        if dry_run {
            println!("{}", format!("  ℹ Would stop process {}", record.id).dimmed());
            continue;
        }

        match supervisor.stop_process(&record.id).await {
            Ok(()) => {
                report.stopped += 1;
                println!("{}", format!("✓ Stopped process {}", record.id).green());
            }
            Err(e) => {
                report.failed += 1;
                eprintln!(
                    "{}",
                    format!("✗ Failed to stop process {}: {}", record.id, e).red()
                );
            }
        }
        println!();
    }

    if dry_run {
        println!(
            "{}",
            format!(
                "Dry run: {} process(es) would be stopped in {}",
                report.targeted, cwd
            )
            .yellow()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("Done: {} process(es) targeted in {}", report.targeted, cwd)
                .green()
                .bold()
        );
        if report.failed > 0 {
            println!(
                "{}",
                format!("  {} stop command(s) failed", report.failed).yellow()
            );
        }
    }

    Ok(report)
}

/// Block printed for each matching process, before its stop command
pub fn render_match(record: &ProcessRecord) -> String {
    format!(
        "{d}\nID:        {}\nDirectory: {}\nScript:    {}\nName:      {}\n{d}\n\n",
        record.id,
        record.directory_label(),
        record.script_or_name(),
        record.name,
        d = DELIMITER
    )
}
