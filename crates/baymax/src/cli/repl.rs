//! Interactive dashboard session

use super::config::ConnectionArgs;
use super::patients::resolve_patient;
use super::{output, view};
use anyhow::{Result, bail};
use baymax_dashboard::{COMPANION_PERIOD, Companion, Dashboard};
use baymax_diagnostics::BaymaxError;
use chrono::Local;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Configuration for the dashboard session
pub struct ReplConfig {
    pub connection: ConnectionArgs,
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Patients,
    Reload,
    Select(String),
    Summary,
    /// Submit a drug order; with a name, it replaces the typed drug first
    Order(Option<String>),
    Discharge,
    AiSummary,
    Upload(PathBuf),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        let command = match head {
            ":help" | ":h" => Self::Help,
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":patients" | ":p" => Self::Patients,
            ":reload" => Self::Reload,
            ":select" | ":s" => {
                if rest.is_empty() {
                    bail!("Usage: :select <number|id>");
                }
                Self::Select(rest.to_string())
            }
            ":summary" => Self::Summary,
            ":order" | ":o" => Self::Order(Some(rest.to_string()).filter(|d| !d.is_empty())),
            ":discharge" | ":d" => Self::Discharge,
            ":ai" => Self::AiSummary,
            ":upload" | ":u" => {
                if rest.is_empty() {
                    bail!("Usage: :upload <file.json>");
                }
                Self::Upload(PathBuf::from(rest))
            }
            other => bail!("Unknown command: {other}. Type :help for help"),
        };
        Ok(command)
    }
}

/// Run the interactive dashboard
pub async fn run(config: ReplConfig) -> Result<()> {
    println!("{}", "Baymax Patient Dashboard".cyan().bold());
    println!("Type {} for help, {} to quit", ":help".green(), ":quit".green());
    println!();

    let dashboard = config.connection.connect()?;
    let companion = Companion::spawn(COMPANION_PERIOD);
    let mut last_message = "";

    report(dashboard.load_patients(None).await.map(|_| ()));
    print_directory(&dashboard);

    let mut rl = DefaultEditor::new()?;
    let history_file = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".baymax_history"));
    if let Some(path) = &history_file {
        let _ = rl.load_history(path);
    }

    loop {
        let message = companion.current();
        if message != last_message {
            println!("{} {}", "Baymax:".cyan().bold(), message.italic());
            last_message = message;
        }

        match rl.readline("baymax> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                let command = match Command::parse(line) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", output::format_error(&e));
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                execute(&dashboard, command).await;

                if let Some(banner) = dashboard.take_banner() {
                    eprintln!("{}", output::format_warning(&banner));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }

    if let Some(path) = &history_file {
        let _ = rl.save_history(path);
    }

    println!("Goodbye!");
    Ok(())
}

async fn execute(dashboard: &Dashboard, command: Command) {
    match command {
        Command::Help => print_help(),
        Command::Quit => {}
        Command::Patients => print_directory(dashboard),
        Command::Reload => {
            report(dashboard.load_patients(None).await.map(|_| ()));
            print_directory(dashboard);
        }
        Command::Select(query) => {
            let state = dashboard.snapshot();
            let Some(record) = resolve_patient(state.directory.records(), &query) else {
                eprintln!(
                    "{}",
                    output::format_error(&anyhow::anyhow!("No patient matches '{query}'"))
                );
                return;
            };
            report(dashboard.select_patient(record.id()).await.map(|_| ()));
            print_summary(dashboard);
        }
        Command::Summary => print_summary(dashboard),
        Command::Order(drug) => {
            if let Some(drug) = drug {
                dashboard.set_drug_input(drug);
            }
            println!("Submitting...");
            if let Some(result) = report(dashboard.submit_drug_order().await) {
                println!("{}", view::drug_order(&result));
            }
        }
        Command::Discharge => {
            println!("Checking...");
            if let Some(status) = report(dashboard.evaluate_discharge().await) {
                println!("{}", view::discharge(&status));
            }
        }
        Command::AiSummary => {
            println!("Generating...");
            if let Some(summary) = report(dashboard.request_ai_summary().await) {
                println!("{}", view::ai_summary(&summary));
            }
        }
        Command::Upload(path) => {
            if report(dashboard.upload_patient_file(&path).await).is_some() {
                println!("{}", output::format_success("File uploaded successfully."));
                print_directory(dashboard);
            }
        }
    }
}

/// Print an operation error; skipped requests are shown as warnings
fn report<T>(result: Result<T, BaymaxError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_skipped() => {
            eprintln!("{}", output::format_warning(&e.to_string()));
            None
        }
        Err(e) => {
            eprintln!("{}", output::format_error(&anyhow::Error::new(e)));
            None
        }
    }
}

fn print_directory(dashboard: &Dashboard) {
    let state = dashboard.snapshot();
    println!(
        "{}",
        view::directory(&state.directory, state.selected.as_deref())
    );
}

fn print_summary(dashboard: &Dashboard) {
    let state = dashboard.snapshot();
    println!(
        "{}",
        view::summary(
            &state.summary,
            state.selected_record(),
            Local::now().date_naive()
        )
    );
}

fn print_help() {
    println!("{}", "Dashboard Commands:".bold());
    println!("  {}           List patients", ":patients".green());
    println!("  {}   Select a patient by number or file name", ":select <n|id>".green());
    println!("  {}            Show the selected patient's summary", ":summary".green());
    println!("  {}     Check a drug against the selected patient", ":order [drug]".green());
    println!("  {}          Check discharge eligibility", ":discharge".green());
    println!("  {}                 Generate the AI summary", ":ai".green());
    println!("  {}    Upload a patient record", ":upload <file>".green());
    println!("  {}             Reload the patient list", ":reload".green());
    println!("  {}               Show this help", ":help".green());
    println!("  {}               Quit", ":quit".green());
}
