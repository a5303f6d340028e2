use rusqlite::Connection;
use std::io::{self, Write};

use crate::error::GiftError;
use crate::model::*;
use crate::queries::*;

pub struct CLIContext {
    pub conn: Connection,
}

impl CLIContext {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a group by name query. Prints error if not found or ambiguous.
    pub fn find_group(&self, args: &str) -> Option<GroupSummary> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let matches = match group_queries::find_groups_by_name(&self.conn, query) {
            Ok(m) => m,
            Err(e) => {
                self.print_error(&e);
                return None;
            }
        };

        match matches.len() {
            0 => {
                println!("No group found matching '{}'", query);
                None
            }
            1 => matches.into_iter().next(),
            _ => {
                if let Some(exact) = matches.iter().find(|g| g.name.eq_ignore_ascii_case(query)) {
                    return Some(exact.clone());
                }
                println!("Multiple matches found:");
                for g in &matches {
                    println!("  {}", g.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Ask for a participant of `group` by name.
    pub fn pick_participant(&self, group: &GroupSummary, prompt: &str) -> Option<Participant> {
        let members = match group_queries::participants_of_group(&self.conn, group.id) {
            Ok(m) => m,
            Err(e) => {
                self.print_error(&e);
                return None;
            }
        };
        if members.is_empty() {
            println!("{} has no participants.", group.name);
            return None;
        }

        let query = self.prompt(prompt)?;
        if query.is_empty() {
            return None;
        }
        let lower = query.to_lowercase();
        let matches: Vec<&Participant> = members
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&lower))
            .collect();

        match matches.len() {
            0 => {
                println!("No participant in {} matching '{}'", group.name, query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                if let Some(exact) = matches.iter().find(|p| p.name.eq_ignore_ascii_case(&query)) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for p in &matches {
                    println!("  {}", p.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &GiftError) {
        if e.is_conflict() {
            println!("Cannot do that yet: {}", e);
        } else {
            println!("Error: {}", e);
        }
    }
}
