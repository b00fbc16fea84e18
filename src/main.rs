use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hotel_management::{FrontDesk, HotelConfig, RoomId};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Console front desk for a small hotel", long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rooms, overrides the configuration file
    #[arg(short, long)]
    rooms: Option<u32>,

    /// Bind a room to the VIP policy (repeatable)
    #[arg(long = "vip-room")]
    vip_rooms: Vec<RoomId>,
}

fn load_config(args: &Args) -> anyhow::Result<HotelConfig> {
    let mut config = match &args.config {
        Some(path) => HotelConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => HotelConfig::default(),
    };

    if let Some(rooms) = args.rooms {
        config.num_rooms = rooms;
    }
    config.vip_rooms.extend(&args.vip_rooms);
    config.validate()?;

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logs go to stderr, stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(
        rooms = config.num_rooms,
        vip_rooms = ?config.vip_rooms,
        "front desk open"
    );

    let mut desk = FrontDesk::new(config);
    let mut stdout = tokio::io::stdout();
    desk.run(tokio::io::stdin(), &mut stdout).await?;

    Ok(())
}
