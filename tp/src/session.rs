//! Interactive tape entry
//!
//! The operator adds and removes tapes one at a time and asks for a plan.

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::NO_SOLUTION_WARNING;
use crate::config::Config;
use crate::render::{OutputFormat, render};
use crate::tapes::{InputLimits, TapeList};

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add(Vec<String>),
    Delete,
    List,
    Calculate,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl SessionCommand {
    /// Parse one input line; `None` for a blank line
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let cmd = parts.next()?;
        let args: Vec<String> = parts.map(str::to_string).collect();

        let command = match cmd.to_lowercase().as_str() {
            "add" | "a" => Self::Add(args),
            "delete" | "d" => Self::Delete,
            "list" | "ls" => Self::List,
            "calculate" | "calc" | "c" => Self::Calculate,
            "clear" => Self::Clear,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(cmd.to_string()),
        };
        Some(command)
    }
}

/// What the session loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Print the message (if any) and prompt again
    Continue(Option<String>),
    Quit,
}

/// Interactive session state
pub struct Session {
    tapes: TapeList,
    limits: InputLimits,
    format: OutputFormat,
    color: bool,
}

impl Session {
    pub fn new(limits: InputLimits, format: OutputFormat, color: bool) -> Self {
        Self {
            tapes: TapeList::new(),
            limits,
            format,
            color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.input.clone(), config.output.format, config.output.color)
    }

    pub fn tapes(&self) -> &TapeList {
        &self.tapes
    }

    /// Run the read-eval-print loop until quit or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let Some(command) = SessionCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());

                    match self.handle(command) {
                        Step::Continue(Some(message)) => println!("{}", message),
                        Step::Continue(None) => {}
                        Step::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        Ok(())
    }

    /// Apply a command to the tape list
    pub fn handle(&mut self, command: SessionCommand) -> Step {
        debug!(?command, "Session::handle: called");
        match command {
            SessionCommand::Add(entries) => {
                if entries.is_empty() {
                    return Step::Continue(Some(format!("{} add needs at least one length", "?".yellow())));
                }
                let mut rejected = Vec::new();
                for entry in entries {
                    match self.limits.check(&entry) {
                        Ok(_) => self.tapes.add(entry),
                        Err(e) => rejected.push(format!("{} {}", "Warning:".yellow(), e)),
                    }
                }
                if rejected.is_empty() {
                    Step::Continue(Some(format!("{} tape(s) entered", self.tapes.len())))
                } else {
                    Step::Continue(Some(rejected.join("\n")))
                }
            }
            SessionCommand::Delete => match self.tapes.delete_last() {
                Some(entry) => Step::Continue(Some(format!("Removed {} m", entry))),
                None => Step::Continue(Some("No tapes to remove".dimmed().to_string())),
            },
            SessionCommand::List => Step::Continue(Some(self.list())),
            SessionCommand::Calculate => Step::Continue(Some(self.calculate())),
            SessionCommand::Clear => {
                self.tapes.clear();
                Step::Continue(Some("Tapes cleared.".dimmed().to_string()))
            }
            SessionCommand::Help => Step::Continue(Some(help_text())),
            SessionCommand::Quit => Step::Quit,
            SessionCommand::Unknown(cmd) => Step::Continue(Some(format!(
                "{} Unknown command: {}\nType {} for available commands",
                "?".yellow(),
                cmd,
                "help".yellow()
            ))),
        }
    }

    fn list(&self) -> String {
        if self.tapes.is_empty() {
            return "No tapes entered.".dimmed().to_string();
        }
        self.tapes
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("  {}. {} m", i + 1, entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn calculate(&self) -> String {
        let plan = match self.tapes.plan(&self.limits) {
            Ok(Some(plan)) => plan,
            Ok(None) => return format!("{} {}", "Warning:".yellow(), NO_SOLUTION_WARNING),
            Err(e) => return format!("{} {}", "Warning:".yellow(), e),
        };
        match render(&plan, self.format, self.color) {
            Ok(text) => text,
            Err(e) => format!("{} {}", "Error:".red(), e),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Tape Planner".bright_cyan().bold());
        println!("Type {} for help, {} to quit", "help".yellow(), "quit".yellow());
        println!();
    }
}

fn help_text() -> String {
    [
        format!("{}", "Available Commands:".bright_cyan()),
        format!("  {:18} Add one or more tapes (min 300 m)", "add <length>...".yellow()),
        format!("  {:18} Remove the last tape", "delete".yellow()),
        format!("  {:18} Show entered tapes", "list".yellow()),
        format!("  {:18} Find a cutting plan", "calculate".yellow()),
        format!("  {:18} Remove all tapes", "clear".yellow()),
        format!("  {:18} Show this help", "help".yellow()),
        format!("  {:18} Exit", "quit".yellow()),
    ]
    .join("\n")
}
