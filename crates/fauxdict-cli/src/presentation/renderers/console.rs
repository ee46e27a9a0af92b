use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    /// Colors are enabled only when stdout is a terminal.
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.color {
                println!("{} {}", badge.icon(), badge.label.bold());
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        print!("{}", result.content);

        if !result.suggestions.is_empty() {
            if self.color {
                println!("\n{}", "💡 Tips:".yellow().bold());
            } else {
                println!("\n💡 Tips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
