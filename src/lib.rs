//! A referee for No-Limit Texas Hold'em.
//!
//! The crate encodes a hand of poker, and a game of many hands, as a total and
//! deterministic state machine so that external agents can be validated and
//! played against one another.
//!
//! ## Modules
//!
//! - [`cards`]: Cards, hole cards, the board, and a seeded deck
//! - [`gameplay`]: The phase-tagged [`gameplay::GameState`], betting rules,
//!   pot allocation and showdown distribution
//! - [`gameroom`]: The orchestrator that drives agents through a game
//! - [`config`]: Runtime settings for the orchestrator
pub mod cards;
pub mod config;
pub mod gameplay;
#[cfg(feature = "server")]
pub mod gameroom;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets and pot stakes.
pub type Chips = u32;
/// Index of a player around the table, or of a seat within a hand.
pub type Position = usize;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Most players a single game can seat.
pub const MAX_PLAYERS: usize = 23;
/// Fewest players that can take part in a hand.
pub const MIN_PLAYERS: usize = 2;
/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;
/// Private cards dealt to each player.
pub const HOLE_SIZE: usize = 2;
/// Community cards once the river is out.
pub const BOARD_SIZE: usize = 5;
/// Default buy-in.
pub const STACK: Chips = 100;
/// Default big blind.
pub const B_BLIND: Chips = 2;
/// Default little blind.
pub const S_BLIND: Chips = 1;
/// Default time an agent gets to decide (milliseconds).
pub const DECISION_TIMEOUT: u64 = 5_000;
/// Default number of invalid submissions tolerated before falling back.
pub const DECISION_RETRIES: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
