//! Тесты реестра столов: поиск, удаление, параллельная работа со столами.

use std::sync::{mpsc, Arc, Mutex, Weak};
use std::time::Duration;

use blackjack_engine::domain::{ConfigError, Deck, Notifier, Table, TableConfig, TableState};
use blackjack_engine::engine::{EngineError, PlayerAction, RandomSource, TableManager};
use blackjack_engine::infra::{DeterministicRng, SystemRng};

fn cards_deck(codes: &[&str]) -> Deck {
    Deck::from_cards(codes.iter().map(|c| c.parse().unwrap()).collect())
}

#[test]
fn missing_table_is_not_found() {
    let manager = TableManager::new();
    let mut rng = SystemRng;

    assert!(!manager.has_table(1));
    assert_eq!(
        manager.add_player(1, &mut rng, "Alice").unwrap_err(),
        EngineError::TableNotFound(1)
    );
    assert_eq!(manager.deal(1), Err(EngineError::TableNotFound(1)));
    assert_eq!(manager.remove_table(1), Err(EngineError::TableNotFound(1)));
    assert!(manager.snapshot(1).unwrap_err().is_not_found());
}

#[test]
fn created_tables_get_distinct_ids() {
    let manager = TableManager::new();
    let mut rng = DeterministicRng::from_seed(99);
    let ids: Vec<u64> = (0..10)
        .map(|_| {
            manager
                .create_table(TableConfig::default(), &mut rng, |_| None)
                .unwrap()
        })
        .collect();

    let listed = manager.table_ids();
    assert_eq!(listed.len(), 10);
    assert!(listed.windows(2).all(|w| w[0] < w[1]));
    for id in ids {
        assert_ne!(id, 0);
        assert!(manager.has_table(id));
    }
}

#[test]
fn insert_and_remove_prepared_table() {
    let manager = TableManager::new();
    let table = Table::new(
        77,
        TableConfig::default(),
        cards_deck(&["As", "Kd", "9c", "Th", "2s"]),
        None,
    );
    assert_eq!(manager.insert_table(table).unwrap(), 77);

    let mut rng = DeterministicRng::from_seed(1);
    let p = manager.add_player(77, &mut rng, "Alice").unwrap();
    manager.toggle_ready(77, p.id).unwrap();

    let state = manager.apply_action(77, PlayerAction::stand(p.id)).unwrap();
    assert_eq!(state, TableState::Finished);
    // Дилер As 9c, игрок Kd Th: 20 против 20.
    let outcome = manager.with_table(77, |t| t.players[0].outcome).unwrap();
    assert_eq!(outcome, blackjack_engine::domain::Outcome::Push);

    manager.remove_table(77).unwrap();
    assert!(!manager.has_table(77));
}

#[test]
fn insert_rejects_table_with_short_deck() {
    let manager = TableManager::new();
    let deck = cards_deck(&["As", "Kd", "9c"]);
    let table = Table::new(5, TableConfig::default(), deck, None);

    assert_eq!(
        manager.insert_table(table),
        Err(EngineError::Config(ConfigError::DeckTooSmall {
            needed: 5,
            available: 3,
        }))
    );
    assert!(!manager.has_table(5));
}

#[test]
fn notifier_can_read_table_through_registry() {
    let manager = Arc::new(TableManager::new());
    let seen: Arc<Mutex<Vec<(usize, TableState)>>> = Arc::default();

    let weak: Weak<TableManager> = Arc::downgrade(&manager);
    let log = Arc::clone(&seen);
    let table_id = manager
        .create_table(TableConfig::default(), &mut SystemRng, move |id| {
            let notifier: Arc<dyn Notifier> = Arc::new(move || {
                let Some(manager) = weak.upgrade() else {
                    return;
                };
                let snapshot = manager.snapshot(id).unwrap();
                let seen_now = (snapshot.player_count(), snapshot.state);
                log.lock().unwrap().push(seen_now);
            });
            Some(notifier)
        })
        .unwrap();

    let (done_tx, done_rx) = mpsc::channel();
    let worker = Arc::clone(&manager);
    std::thread::spawn(move || {
        let mut rng = SystemRng;
        let p = worker.add_player(table_id, &mut rng, "Alice").unwrap();
        worker.toggle_ready(table_id, p.id).unwrap();
        worker.apply_action(table_id, PlayerAction::stand(p.id)).unwrap();
        // Отказ не уведомляет.
        let _ = worker.apply_action(table_id, PlayerAction::stand(p.id));
        let _ = done_tx.send(());
    });

    done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("registry operations must not block on the notifier");

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (1, TableState::WaitingForPlayers),
            (1, TableState::CardsDealt),
            (1, TableState::Finished),
        ]
    );
}

#[test]
fn rejected_operation_leaves_table_untouched() {
    let manager = TableManager::new();
    let mut rng = DeterministicRng::from_seed(5);
    let id = manager
        .create_table(TableConfig::default(), &mut rng, |_| None)
        .unwrap();
    manager.add_player(id, &mut rng, "Alice").unwrap();

    let before = manager.snapshot(id).unwrap();
    assert_eq!(
        manager.add_player(id, &mut rng, "Bob").unwrap_err(),
        EngineError::GameIsFull
    );
    let after = manager.snapshot(id).unwrap();
    assert_eq!(before.players, after.players);
    assert_eq!(before.deck, after.deck);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn tables_play_in_parallel() {
    let manager = Arc::new(TableManager::new());
    let mut rng = DeterministicRng::from_seed(2025);

    let config = TableConfig {
        max_seats: 3,
        ..TableConfig::default()
    };
    let ids: Vec<u64> = (0..8)
        .map(|_| {
            manager
                .create_table(config.clone(), &mut rng, |_| None)
                .unwrap()
        })
        .collect();

    let mut handles = Vec::new();
    for (n, table_id) in ids.iter().copied().enumerate() {
        let manager = Arc::clone(&manager);
        handles.push(tokio::task::spawn_blocking(move || {
            let mut rng = DeterministicRng::from_seed(n as u64);
            let players: Vec<u64> = ["A", "B", "C"]
                .iter()
                .map(|name| {
                    let player = manager.add_player(table_id, &mut rng, name).unwrap();
                    player.id
                })
                .collect();
            for &pid in &players {
                manager.toggle_ready(table_id, pid).unwrap();
            }
            let mut last = TableState::CardsDealt;
            for &pid in &players {
                let action = if rng.gen_index(2) == 0 {
                    PlayerAction::hit(pid)
                } else {
                    PlayerAction::stand(pid)
                };
                last = manager.apply_action(table_id, action).unwrap();
            }
            last
        }));
    }

    for h in handles {
        assert_eq!(h.await.unwrap(), TableState::Finished);
    }

    for id in ids {
        let decided = manager
            .with_table(id, |t| t.players.iter().all(|p| p.outcome.is_decided()))
            .unwrap();
        assert!(decided);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_joins_respect_seat_limit() {
    let manager = Arc::new(TableManager::new());
    let config = TableConfig {
        max_seats: 3,
        ..TableConfig::default()
    };
    let table_id = manager
        .create_table(config, &mut SystemRng, |_| None)
        .unwrap();

    let mut handles = Vec::new();
    for n in 0..10 {
        let manager = Arc::clone(&manager);
        handles.push(tokio::task::spawn_blocking(move || {
            manager.add_player(table_id, &mut SystemRng, &format!("P{n}"))
        }));
    }

    let mut joined = 0;
    let mut full = 0;
    for h in handles {
        match h.await.unwrap() {
            Ok(_) => joined += 1,
            Err(EngineError::GameIsFull) => full += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!((joined, full), (3, 7));

    let snapshot = manager.snapshot(table_id).unwrap();
    assert_eq!(snapshot.players.len(), 3);
    assert_eq!(snapshot.hands.len(), 4);
}
