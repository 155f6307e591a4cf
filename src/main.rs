//! Plays a seeded game between random agents.
//!
//! Usage: `holdem-referee [config.toml] [players]`
//!
//! Showdowns use the default high-card ranker, so payouts exercise the
//! referee rather than reflect real hand strength.
use holdem_referee::config::Config;
use holdem_referee::gameroom::Fish;
use holdem_referee::gameroom::Room;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    holdem_referee::log()?;
    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("holdem.toml"));
    let n = match args.next() {
        Some(n) => n.parse::<usize>()?,
        None => 4,
    };
    anyhow::ensure!(
        (holdem_referee::MIN_PLAYERS..=holdem_referee::MAX_PLAYERS).contains(&n),
        "between {} and {} players",
        holdem_referee::MIN_PLAYERS,
        holdem_referee::MAX_PLAYERS
    );
    let config = Config::load(&path)?;
    let seed = config.seed;
    let mut room = Room::new(config)?;
    for i in 0..n {
        let fish = Fish::from(seed.wrapping_add(i as u64));
        room.sit(format!("fish{}", i), holdem_referee::STACK, fish)?;
    }
    let table = room.run().await?;
    for player in table.players() {
        log::info!("{:<8} {:>6}", player.id(), player.stack());
    }
    Ok(())
}
