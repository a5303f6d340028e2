use crate::cli::context::CLIContext;
use crate::ops::*;

pub fn add(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: add-participant <group>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };

    let name = match ctx.prompt("Participant name: ") {
        Some(s) if !s.is_empty() => s,
        _ => { println!("Name cannot be empty."); return; }
    };
    let wish = match ctx.prompt("Gift wish: ") {
        Some(s) if !s.is_empty() => s,
        _ => { println!("Wish cannot be empty."); return; }
    };

    match group_ops::create_participant_in_group(&ctx.conn, group.id, &name, &wish) {
        Ok(p) => println!("Added {} to {}", p.name, group.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: edit-participant <group>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };
    let participant = match ctx.pick_participant(&group, "Participant: ") {
        Some(p) => p,
        None => return,
    };

    println!("(Press Enter to keep the current value)");
    let name = ctx.prompt(&format!("Name [{}]: ", participant.name)).filter(|s| !s.is_empty());
    let wish = ctx.prompt(&format!("Wish [{}]: ", participant.wish)).filter(|s| !s.is_empty());

    match participant_ops::update_participant(&ctx.conn, participant.id, name.as_deref(), wish.as_deref()) {
        Ok(p) => println!("Updated {}", p.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: remove-participant <group>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };
    let participant = match ctx.pick_participant(&group, "Remove participant: ") {
        Some(p) => p,
        None => return,
    };

    match group_ops::remove_participant(&ctx.conn, group.id, participant.id) {
        Ok(p) => {
            println!("Removed {} from {}", p.name, group.name);
            if group.last_tossed_at.is_some() {
                println!("The assignment is now incomplete. Run 'toss {}' again.", group.name);
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}
