// src/bin/blackjack_dev_cli.rs

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use blackjack_engine::domain::{DeckStep, Notifier, TableConfig, TableId, TableState};
use blackjack_engine::engine::{EngineError, PlayerAction, RandomSource, TableManager};
use blackjack_engine::eval::score;
use blackjack_engine::infra::{ChannelNotifier, DeterministicRng, SystemRng};

/// Dev-CLI: один стол, несколько ботов, один раунд.
#[derive(Debug, Parser)]
#[command(name = "blackjack_dev_cli", about = "Play one blackjack round with bots")]
struct Args {
    /// JSON-файл с TableConfig. Флаги ниже его переопределяют.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Количество мест за столом.
    #[arg(long)]
    seats: Option<usize>,

    /// Количество колод в шузе.
    #[arg(long)]
    decks: Option<usize>,

    /// Seed для воспроизводимой колоды (без него – системный RNG).
    #[arg(long)]
    seed: Option<u64>,

    /// Ниже этой суммы бот берёт карту.
    #[arg(long, default_value_t = 17)]
    hit_below: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to load table config");
            std::process::exit(1);
        }
    };

    let result = match args.seed {
        Some(seed) => run(config, &mut DeterministicRng::from_seed(seed), args.hit_below),
        None => run(config, &mut SystemRng, args.hit_below),
    };

    if let Err(e) = result {
        error!(error = %e, "round aborted");
        std::process::exit(1);
    }
}

/// Конфиг: файл (если есть) + переопределения из флагов.
fn load_config(args: &Args) -> Result<TableConfig, Box<dyn std::error::Error>> {
    let mut config: TableConfig = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => TableConfig::default(),
    };

    if let Some(seats) = args.seats {
        config.max_seats = seats;
    }
    if let Some(decks) = args.decks {
        config.deck = vec![DeckStep::Multiply(decks), DeckStep::Shuffle];
    }
    Ok(config)
}

fn run<R: RandomSource>(
    config: TableConfig,
    rng: &mut R,
    hit_below: u32,
) -> Result<(), EngineError> {
    let seats = config.max_seats;
    let manager = TableManager::new();
    let (tx, rx) = mpsc::channel::<TableId>();

    let table_id = manager.create_table(config, rng, |id| {
        let notifier = ChannelNotifier::new(id, tx.clone());
        Some(Arc::new(notifier) as Arc<dyn Notifier>)
    })?;
    info!(table_id, seats, "table ready");

    let mut player_ids = Vec::with_capacity(seats);
    for n in 0..seats {
        let player = manager.add_player(table_id, rng, &format!("Bot {}", n + 1))?;
        player_ids.push(player.id);
    }
    for &pid in &player_ids {
        manager.toggle_ready(table_id, pid)?;
    }

    print_table(&manager, table_id)?;

    for &pid in &player_ids {
        let hand_score = manager.with_table(table_id, |t| {
            t.seat_of(pid)
                .and_then(|seat| t.player_hand(seat))
                .map(|h| score(h.cards()))
                .unwrap_or(0)
        })?;

        let action = if hand_score < hit_below {
            PlayerAction::hit(pid)
        } else {
            PlayerAction::stand(pid)
        };
        println!(
            "[CLI] player_id={pid} score={hand_score} -> {:?}",
            action.kind
        );

        if manager.apply_action(table_id, action)? == TableState::Finished {
            break;
        }
    }

    print_table(&manager, table_id)?;

    drop(tx);
    let updates = rx.try_iter().count();
    info!(table_id, updates, "state updates published");
    Ok(())
}

fn print_table(manager: &TableManager, table_id: TableId) -> Result<(), EngineError> {
    manager.with_table(table_id, |t| {
        println!("================ TABLE STATE ================");
        println!(
            "table_id={} state={:?} current_player={} deck_left={}",
            t.id,
            t.state,
            t.current_player,
            t.deck.len()
        );
        let dealer = t.dealer_hand().cards();
        println!("dealer: {} (score {})", cards_line(dealer), score(dealer));
        for (seat, p) in t.players.iter().enumerate() {
            let cards = t.player_hand(seat).map(|h| h.cards()).unwrap_or(&[]);
            println!(
                "  seat {} | {} | chips={} | {} (score {}) | outcome={:?}",
                seat,
                p.name,
                p.chips.0,
                cards_line(cards),
                score(cards),
                p.outcome,
            );
        }
        println!("=============================================");
    })
}

fn cards_line(cards: &[blackjack_engine::domain::Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
