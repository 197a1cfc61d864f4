use colored::*;
use std::io::{self, Write};

use crate::agent::Agent;
use crate::core::{AgentResult, TurnObserver, TurnOutcome};

/// Console handles terminal I/O with colored formatting
pub struct Console {
    user_color: Color,
    assistant_color: Color,
    tool_color: Color,
}

impl Console {
    /// Create a new Console with default colors
    pub fn new() -> Self {
        Self {
            user_color: Color::Cyan,
            assistant_color: Color::Green,
            tool_color: Color::Magenta,
        }
    }

    /// Create a new Console with custom colors
    pub fn with_colors(user_color: Color, assistant_color: Color, tool_color: Color) -> Self {
        Self {
            user_color,
            assistant_color,
            tool_color,
        }
    }

    /// Print how the turn ended
    pub fn print_outcome(&self, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::Answering(text) => println!(
                "{} {}",
                "Answer:".color(self.assistant_color).bold(),
                text.color(self.assistant_color)
            ),
            TurnOutcome::Forbidden(reason) => {
                println!("{} {}", "Forbidden:".red().bold(), reason)
            }
            TurnOutcome::Errored(detail) => println!("{} {}", "Error:".red().bold(), detail),
            TurnOutcome::ExhaustedBudget => println!(
                "{} {}",
                "Stopped:".yellow().bold(),
                "iteration budget exhausted without an answer"
            ),
        }
    }

    /// Print an error message
    pub fn print_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error);
    }

    /// Read a line of input from the user
    pub fn read_input(&self) -> io::Result<String> {
        print!("{} ", ">".color(self.user_color).bold());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }

    /// Print a separator line
    pub fn print_separator(&self) {
        println!("{}", "-".repeat(60).bright_black());
    }

    /// Drive an interactive session on the terminal
    ///
    /// An answer invites a follow-up message; any other outcome ends the
    /// session, as does typing `exit` (or `e`).
    pub async fn run_session(&self, agent: &mut Agent) -> AgentResult<()> {
        loop {
            let input = self.read_input()?;
            let trimmed = input.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("e") {
                return Ok(());
            }

            let outcome = agent.run(trimmed).await?;
            self.print_outcome(&outcome);
            if !outcome.is_answer() {
                return Ok(());
            }
            self.print_separator();
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnObserver for Console {
    fn on_thought(&self, text: &str) {
        println!("\n{}\n", text.dimmed());
    }

    fn on_action(&self, capability: &str) {
        println!("{} {}", "🛠".color(self.tool_color), capability.color(self.tool_color));
    }

    fn on_observation(&self, capability: &str, output: &str, is_error: bool) {
        if is_error {
            println!("{} {}", format!("{}:", capability).red().bold(), output);
        } else {
            println!(
                "{} {}",
                format!("{}:", capability).color(self.tool_color).bold(),
                output.dimmed()
            );
        }
    }
}
