//! Interactive terminal prompts
//!
//! The planner depends on the [`Interactive`] trait only; the terminal
//! implementation lives here so tests can substitute a scripted one.

use async_trait::async_trait;
use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;

use crate::trello::List;

/// Port for the human-in-the-loop placement decisions
#[async_trait]
pub trait Interactive: Send + Sync {
    /// Ask after which list a new list should go
    ///
    /// Returns the insertion index: the index of the chosen list plus one.
    async fn choose_list_placement(&self, reason: &str, lists: &[List]) -> Result<usize>;

    /// Show the insertion point with its neighbors and ask whether to proceed
    async fn confirm_list_placement(&self, before: &[List], after: &[List]) -> Result<bool>;
}

/// Rustyline-backed prompts for the CLI
pub struct TerminalPrompt;

#[async_trait]
impl Interactive for TerminalPrompt {
    async fn choose_list_placement(&self, reason: &str, lists: &[List]) -> Result<usize> {
        println!("{}. Please indicate after which list to place it.", reason);
        let chosen = select_index(lists, |list| list.name.as_str())?;
        Ok(chosen + 1)
    }

    async fn confirm_list_placement(&self, before: &[List], after: &[List]) -> Result<bool> {
        println!("List will go here:");
        for list in before {
            println!("{}", list.name);
        }
        println!("{}", "<----".yellow().bold());
        for list in after {
            println!("{}", list.name);
        }
        confirm("Proceed?")
    }
}

/// Read one line of input with line editing
pub fn read_line(prompt: &str) -> Result<String> {
    let mut editor = DefaultEditor::new()?;
    Ok(editor.readline(prompt)?)
}

/// Yes/no question, defaulting to no
pub fn confirm(message: &str) -> Result<bool> {
    let answer = read_line(&format!("{} [y/N] ", message))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Numbered selection menu; returns the index of the chosen item
pub fn select_index<T>(items: &[T], render: impl Fn(&T) -> &str) -> Result<usize> {
    for (number, item) in items.iter().enumerate() {
        println!("  {} {}", format!("{}.", number + 1).cyan(), render(item));
    }
    loop {
        let line = read_line("> ")?;
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=items.len()).contains(&choice) => return Ok(choice - 1),
            _ => println!("Enter a number between 1 and {}", items.len()),
        }
    }
}
