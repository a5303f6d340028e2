use rusqlite::Connection;

use crate::cli::context::CLIContext;
use crate::error::GiftResult;
use crate::ops::*;
use crate::queries::*;

pub fn list(ctx: &CLIContext) {
    match list_text(&ctx.conn) {
        Ok(text) => println!("{}", text),
        Err(e) => ctx.print_error(&e),
    }
}

fn list_text(conn: &Connection) -> GiftResult<String> {
    let groups = group_queries::list_groups(conn)?;
    if groups.is_empty() {
        return Ok("No groups yet. Use 'add-group <name>' to create one.".into());
    }

    let mut lines = vec![format!("Groups ({}):", groups.len())];
    for group in &groups {
        match group.last_tossed_at {
            Some(at) => lines.push(format!("  {} (tossed {})", group.name, at.format("%Y-%m-%d %H:%M"))),
            None => lines.push(format!("  {}", group.name)),
        }
    }
    Ok(lines.join("\n"))
}

pub fn add(ctx: &CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Group name: ") {
            Some(s) if !s.is_empty() => s,
            _ => { println!("Name cannot be empty."); return; }
        }
    };

    let desc = ctx.prompt("Description (optional): ").unwrap_or_default();
    let desc_opt = if desc.is_empty() { None } else { Some(desc.as_str()) };

    match group_ops::create_group(&ctx.conn, &name, desc_opt) {
        Ok(group) => println!("Created group: {}", group.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    let summary = match if args.is_empty() { println!("Usage: show-group <name>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };

    let group = match group_queries::get_group(&ctx.conn, summary.id) {
        Ok(g) => g,
        Err(e) => { ctx.print_error(&e); return; }
    };

    println!();
    println!("Name: {}", group.summary.name);
    println!("Description: {}", group.summary.description.as_deref().unwrap_or("(none)"));
    match group.summary.last_tossed_at {
        Some(at) => println!("Last toss: {}", at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("Last toss: (never)"),
    }
    if group.participants.is_empty() {
        println!("Participants: (none)");
    } else {
        println!("Participants ({}):", group.participants.len());
        for p in &group.participants {
            println!("  {} - wishes for: {}", p.name, p.wish);
        }
    }
    println!();
}

pub fn edit(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: edit-group <name>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };

    println!("Editing group: {}", group.name);
    println!("(Press Enter to keep the current value, '-' to clear the description)");

    let name = match ctx.prompt(&format!("Name [{}]: ", group.name)) {
        Some(s) if !s.is_empty() => s,
        Some(_) => group.name.clone(),
        None => return,
    };
    let current_desc = group.description.clone().unwrap_or_default();
    let description = match ctx.prompt(&format!("Description [{}]: ", current_desc)) {
        Some(s) if s == "-" => None,
        Some(s) if !s.is_empty() => Some(s),
        Some(_) => group.description.clone(),
        None => return,
    };

    match group_ops::update_group(&ctx.conn, group.id, &name, description.as_deref()) {
        Ok(g) => println!("Updated group: {}", g.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: delete-group <name>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };

    let confirm = ctx.prompt(&format!("Delete group '{}'? Participants are kept. (y/N): ", group.name));
    if !matches!(confirm.as_deref(), Some("y") | Some("Y")) {
        println!("Cancelled.");
        return;
    }

    match group_ops::delete_group(&ctx.conn, group.id) {
        Ok(g) => println!("Deleted group: {} ({} participants kept)", g.summary.name, g.participants.len()),
        Err(e) => ctx.print_error(&e),
    }
}

/// Print the full group, participants and recipient ids included, as JSON.
pub fn export(ctx: &CLIContext, args: &str) {
    let group = match if args.is_empty() { println!("Usage: export-group <name>"); return; } else { ctx.find_group(args) } {
        Some(g) => g,
        None => return,
    };

    let json = group_queries::get_group(&ctx.conn, group.id)
        .and_then(|detail| Ok(serde_json::to_string_pretty(&detail)?));
    match json {
        Ok(s) => println!("{}", s),
        Err(e) => ctx.print_error(&e),
    }
}
