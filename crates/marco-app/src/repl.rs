//! Interactive REPL: reads questions and slash commands, drives the session.

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use marco_assist::{AssistGateway, Session, SubmitError};
use marco_common::{ExchangeId, MarcoError, Result};

use crate::render;

const HELP: &str = "\
Commands:
  /key <value>     save your API key (an empty value clears it)
  /key clear       erase the saved API key
  /verify <value>  check a key against the service without saving it
  /suggest         show example questions
  /history         show past questions
  /redo <n>        ask a past question again
  /clear-history   clear the local history list
  /health          probe the assist service
  /help            show this help
  /quit            exit
Anything else is sent to the assistant as a question.";

pub async fn run(session: &mut Session, gateway: &dyn AssistGateway) -> Result<()> {
    let mut rl = DefaultEditor::new().map_err(|e| MarcoError::Terminal(e.to_string()))?;

    println!("{}", "Marco, your travel documentation assistant.".bold());
    if !session.has_credential() {
        println!(
            "{}",
            "No API key saved. Add one with /key <value>.".yellow()
        );
    }
    println!("Type /help for commands.\n");

    loop {
        let line = match rl.readline(&format!("{} ", "marco>".bright_green().bold())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(MarcoError::Terminal(e.to_string())),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        if let Some(command) = line.strip_prefix('/') {
            if !dispatch(session, gateway, command).await {
                break;
            }
            continue;
        }

        let result = session.submit(gateway, line).await;
        report(session, result);
    }

    println!("Safe travels!");
    Ok(())
}

/// One-shot mode: submit a single question and render the outcome.
pub async fn ask_once(
    session: &mut Session,
    gateway: &dyn AssistGateway,
    question: &str,
) -> bool {
    let result = session.submit(gateway, question).await;
    let ok = result.is_ok();
    report(session, result);
    ok
}

/// Handle a slash command. Returns false when the REPL should exit.
async fn dispatch(session: &mut Session, gateway: &dyn AssistGateway, command: &str) -> bool {
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name {
        "quit" | "exit" => return false,
        "help" => println!("{HELP}"),
        "key" => match rest {
            "" => {
                if session.has_credential() {
                    println!("An API key is saved. Use /key <value> to replace it, /key clear to erase it.");
                } else {
                    println!("No API key saved. Use /key <value> to add one.");
                }
            }
            "clear" => match session.clear_credential() {
                Ok(()) => println!("API key cleared."),
                Err(e) => render::print_error(&e.to_string()),
            },
            value => match session.set_credential(value) {
                Ok(()) => println!("{}", "API key saved.".green()),
                Err(e) => render::print_error(&e.to_string()),
            },
        },
        "verify" => {
            if rest.is_empty() {
                println!("Usage: /verify <value>");
            } else {
                match session.verify_credential(gateway, rest).await {
                    Ok(verdict) if verdict.is_valid => {
                        println!("{} {}", "Valid:".green().bold(), verdict.message);
                    }
                    Ok(verdict) => {
                        println!("{} {}", "Invalid:".red().bold(), verdict.message);
                    }
                    Err(e) => render::print_error(&e.to_string()),
                }
            }
        }
        "suggest" => {
            let questions = session.suggestions(gateway).await;
            render::print_suggestions(&questions);
        }
        "history" => render::print_history(session.history()),
        "redo" => match rest.parse::<usize>() {
            Ok(index) => {
                let result = session.resubmit(gateway, index).await;
                report(session, result);
            }
            Err(_) => println!("Usage: /redo <n>  (see /history for numbers)"),
        },
        "clear-history" => {
            session.clear_history();
            println!("History cleared locally. Server records are untouched.");
        }
        "health" => match session.check_health(gateway).await {
            Ok(health) => render::print_health(&health),
            Err(_) => {
                if let Some(message) = session.error() {
                    render::print_error(message);
                }
            }
        },
        _ => println!("Unknown command /{name}. Type /help for the list."),
    }
    true
}

/// Render a submission outcome from the session's state containers.
fn report(session: &Session, result: std::result::Result<ExchangeId, SubmitError>) {
    match result {
        Ok(_) => {
            if let Some(answer) = session.last_exchange().and_then(|e| e.response.as_ref()) {
                render::print_answer(answer);
            }
        }
        Err(SubmitError::EmptyQuestion) => {}
        Err(SubmitError::Busy) => {
            render::print_error("The previous question is still being answered.");
        }
        Err(SubmitError::UnknownHistoryEntry) => {
            render::print_error("No such history entry. See /history for numbers.");
        }
        Err(_) => {
            if let Some(message) = session.error() {
                render::print_error(message);
            }
            if session.wants_credential() {
                println!("{}", "Save your API key with /key <value>.".yellow());
            }
        }
    }
}
