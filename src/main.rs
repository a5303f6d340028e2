use std::path::PathBuf;

use clap::Parser;

/// Gift Exchange - draw who gifts whom in a group
#[derive(Debug, Parser)]
#[command(name = "gift-exchange", version, about)]
struct Args {
    /// Database file path
    #[arg(short, long, env = "GIFT_EXCHANGE_DB")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let db_path = match args.file {
        Some(path) => path,
        None => {
            let dir = PathBuf::from(".data");
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("Error: cannot create {}: {}", dir.display(), e);
                std::process::exit(1);
            }
            dir.join("gift-exchange.db")
        }
    };

    gift_exchange::cli::run(&db_path);
}
