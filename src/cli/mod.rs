pub mod context;
pub mod group_commands;
pub mod participant_commands;
pub mod toss_commands;

use std::path::Path;

use crate::db::schema;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(db_path: &Path) {
    println!("Gift Exchange");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match schema::open(db_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening database {}: {}", db_path.display(), e);
            return;
        }
    };
    log::info!("opened database {}", db_path.display());

    let ctx = CLIContext::new(conn);
    repl_loop(&ctx);
}

fn repl_loop(ctx: &CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Group commands
            "groups" | "list" | "ls" => group_commands::list(ctx),
            "add-group" => group_commands::add(ctx, args),
            "show-group" | "show" => group_commands::show(ctx, args),
            "edit-group" => group_commands::edit(ctx, args),
            "delete-group" => group_commands::delete(ctx, args),
            "export-group" | "export" => group_commands::export(ctx, args),

            // Participant commands
            "add-participant" => participant_commands::add(ctx, args),
            "edit-participant" => participant_commands::edit(ctx, args),
            "remove-participant" => participant_commands::remove(ctx, args),

            // Assignment
            "toss" => toss_commands::toss(ctx, args),
            "recipient" => toss_commands::recipient(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into the command word and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Groups:
    groups                      List all groups
    add-group [name]            Create a new group
    show-group <name>           Show a group and its participants
    edit-group <name>           Rename a group or change its description
    delete-group <name>         Delete a group (participants are kept)
    export-group <name>         Print a group as JSON

  Participants:
    add-participant <group>     Add a participant with a gift wish
    edit-participant <group>    Change a participant's name or wish
    remove-participant <group>  Remove and delete a participant

  Assignment:
    toss <group>                Draw who gifts whom (needs 3+ participants)
    recipient <group>           Look up who a participant is gifting

  Other:
    help                        Show this help
    exit / quit / q             Exit

TIPS:
  - Group and participant names are case-insensitive and partial matches work
  - Set RUST_LOG=info to see what the store is doing"#);
}
