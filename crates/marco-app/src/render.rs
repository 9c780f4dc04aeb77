//! Terminal rendering of answers, history and status.

use colored::Colorize;

use marco_assist::{Answer, HealthReport, HistoryEntry};

pub fn print_answer(answer: &Answer) {
    println!();
    println!("{}", answer.formatted_response);

    if !answer.documents.is_empty() {
        println!();
        println!("{}", "Documents".bold());
        for doc in &answer.documents {
            let marker = if doc.required {
                "required".yellow()
            } else {
                "optional".bright_black()
            };
            println!("  • {} ({marker}): {}", doc.title.cyan(), doc.description);
        }
    }

    if !answer.advisories.is_empty() {
        println!();
        println!("{}", "Travel advisories".bold());
        for advisory in &answer.advisories {
            println!(
                "  ! {} (updated {}): {}",
                advisory.level.red().bold(),
                advisory.last_updated.format("%Y-%m-%d"),
                advisory.description
            );
        }
    }

    if !answer.additional_info.is_empty() {
        println!();
        println!("{}", "Notes".bold());
        for note in &answer.additional_info {
            println!("  - {note}");
        }
    }
    println!();
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!(
            "{}",
            "No history yet. It fills in after your first answered question.".bright_black()
        );
        return;
    }
    for (index, entry) in entries.iter().enumerate() {
        println!(
            "{} {}  {}",
            format!("[{index}]").bright_black(),
            entry
                .timestamp
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            entry.question
        );
    }
    println!("{}", "Ask one again with /redo <n>.".bright_black());
}

pub fn print_suggestions(questions: &[String]) {
    println!("{}", "Try asking:".bold());
    for question in questions {
        println!("  • {question}");
    }
}

pub fn print_health(report: &HealthReport) {
    let llm = if report.llm_available {
        "available".green()
    } else {
        "not configured".yellow()
    };
    println!(
        "{} v{} ({}), language model {llm}",
        report.status.green().bold(),
        report.version,
        report.timestamp.format("%Y-%m-%d %H:%M:%S"),
    );
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
}
