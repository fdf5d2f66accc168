use crate::sync::{RunReport, TrackStatus};
use colored::Colorize;
use std::fmt::Display;

pub fn step(icon: &str, message: impl Display) {
    println!("{} {}", icon, message);
}

pub fn warning(message: impl Display) {
    println!(
        "{} {}",
        "⚠ warning:".yellow().bold(),
        message.to_string().yellow()
    );
}

pub fn summary(report: &RunReport) {
    for outcome in &report.outcomes {
        if let TrackStatus::Failed { reason } = &outcome.status {
            println!(
                "  {} {} ({}): {}",
                "✘".red(),
                outcome.title,
                outcome.video.dimmed(),
                reason
            );
        }
    }

    let failed = report.failed();
    let failed = if failed > 0 {
        failed.to_string().red().bold()
    } else {
        failed.to_string().green()
    };

    println!(
        "{} {} tracks attempted, {} uploaded, {} failed (metadata: {})",
        "✔".green().bold(),
        report.outcomes.len(),
        report.uploaded().to_string().green(),
        failed,
        report.metadata_object.bold()
    );
}
