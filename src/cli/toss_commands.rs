use crate::cli::context::CLIContext;
use crate::ops::*;
use crate::queries::*;

pub fn toss(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: toss <group>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };

    if group.last_tossed_at.is_some() {
        let confirm = ctx.prompt("This replaces the current assignment. Continue? (y/N): ");
        if !matches!(confirm.as_deref(), Some("y") | Some("Y")) {
            println!("Cancelled.");
            return;
        }
    }

    match toss_ops::toss(&ctx.conn, group.id, &mut rand::rng()) {
        Ok(assignments) => {
            println!("Tossed {} ({} participants).", group.name, assignments.len());
            println!("Use 'recipient {}' to look up an assignment.", group.name);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn recipient(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: recipient <group>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };
    let participant = match ctx.pick_participant(&group, "Your name: ") {
        Some(p) => p,
        None => return,
    };

    match recipient_queries::recipient_of(&ctx.conn, group.id, participant.id) {
        Ok(r) => {
            println!();
            println!("{}, you are gifting: {}", participant.name, r.name);
            println!("Their wish: {}", r.wish);
            println!();
        }
        Err(e) if e.is_not_found() => println!("No recipient for {}: {}", participant.name, e),
        Err(e) => ctx.print_error(&e),
    }
}
