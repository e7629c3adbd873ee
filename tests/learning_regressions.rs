//! Regression tests for the bag-based learning dynamics.

use sticks::{
    GameSession, LearningAgent, LossResponse, Participant, Slot, StrategyTable, TrainingConfig,
    TrainingSession,
};

mod common;

use common::EventLog;

fn seeded_config(games: usize, seed: u64) -> TrainingConfig {
    TrainingConfig {
        games,
        pile_size: 10,
        seed: Some(seed),
        loss_response: LossResponse::Forget,
    }
}

#[test]
fn forced_move_ignores_table_contents() {
    // Stack the single-stick bag with nonsense; the forced rule must win.
    let table = StrategyTable::untrained(10).unwrap().into_shared();
    for _ in 0..5 {
        table.borrow_mut().bag_mut(1).unwrap().reinforce(3);
    }

    for seed in 0..10 {
        let mut agent = LearningAgent::builder()
            .seed(seed)
            .shared_table(table.clone())
            .build()
            .unwrap();
        agent.observe_pile(1);
        assert_eq!(agent.choose_move().unwrap(), 1);
    }
}

#[test]
fn winner_appends_exactly_its_recorded_moves() {
    // Two agents of separate lineages play one full game through the
    // engine; the winner's table must grow by one entry per recorded move
    // and the loser's must not change (default loss rule).
    for seed in 0..20 {
        let mut first = LearningAgent::builder()
            .name("AI 1")
            .seed(seed)
            .untrained(10)
            .build()
            .unwrap();
        let mut second = LearningAgent::builder()
            .name("AI 2")
            .seed(seed.wrapping_add(1))
            .untrained(10)
            .build()
            .unwrap();

        let first_before = first.table().borrow().total_entries();
        let second_before = second.table().borrow().total_entries();

        let mut log = EventLog::default();
        let winner = GameSession::new(10, &mut first, &mut second)
            .unwrap()
            .run(&mut log)
            .unwrap();

        // A move is recorded when more than one stick remained; the pile
        // at the time of a move is taken + remaining.
        let recorded = |slot: Slot| {
            log.moves
                .iter()
                .filter(|(s, taken, remaining)| *s == slot && taken + remaining > 1)
                .count()
        };

        let (winner_agent, loser_agent, winner_before, loser_before) = match winner {
            Slot::First => (&first, &second, first_before, second_before),
            Slot::Second => (&second, &first, second_before, first_before),
        };

        assert_eq!(
            winner_agent.table().borrow().total_entries(),
            winner_before + recorded(winner),
            "winner table growth mismatch for seed {seed}"
        );
        assert_eq!(
            loser_agent.table().borrow().total_entries(),
            loser_before,
            "loser table must be untouched for seed {seed}"
        );
    }
}

#[test]
fn collapse_rule_never_drops_a_bag_below_the_seed_size() {
    let config = TrainingConfig {
        games: 2_000,
        pile_size: 10,
        seed: Some(99),
        loss_response: LossResponse::Collapse,
    };
    let mut session = TrainingSession::new(config).unwrap();
    session.train().unwrap();

    let table = session.table();
    let table = table.borrow();
    for pile in 1..=10 {
        let bag = table.bag(pile).unwrap();
        assert!(bag.len() >= 3, "bag {pile} shrank to {}", bag.len());
        for value in 1..=3 {
            assert!(
                bag.count_of(value) >= 1,
                "bag {pile} lost move {value} entirely"
            );
        }
    }
}

#[test]
fn training_with_seed_is_deterministic() {
    let mut one = TrainingSession::new(seeded_config(2_000, 777)).unwrap();
    let report_one = one.train().unwrap();

    let mut two = TrainingSession::new(seeded_config(2_000, 777)).unwrap();
    let report_two = two.train().unwrap();

    assert_eq!(report_one.first_wins, report_two.first_wins);
    assert_eq!(report_one.second_wins, report_two.second_wins);
    assert_eq!(report_one.win_rate_history, report_two.win_rate_history);
    assert_eq!(*one.table().borrow(), *two.table().borrow());
}

#[test]
fn different_seeds_diverge() {
    let mut one = TrainingSession::new(seeded_config(2_000, 1)).unwrap();
    one.train().unwrap();

    let mut two = TrainingSession::new(seeded_config(2_000, 2)).unwrap();
    two.train().unwrap();

    assert_ne!(*one.table().borrow(), *two.table().borrow());
}

#[test]
fn report_rates_and_history_are_consistent() {
    let mut session = TrainingSession::new(seeded_config(5_000, 42)).unwrap();
    let report = session.train().unwrap();

    assert_eq!(report.total_games, 5_000);
    assert_eq!(report.first_wins + report.second_wins, 5_000);
    let expected_rate = report.first_wins as f64 / 5_000.0;
    assert!((report.first_win_rate - expected_rate).abs() < 1e-12);

    // One sample per thousand games, and the last sample equals the final
    // win rate.
    assert_eq!(report.win_rate_history.len(), 5);
    assert_eq!(*report.win_rate_history.last().unwrap(), expected_rate);
}

#[test]
fn lineage_survives_into_a_fresh_agent() {
    let mut session = TrainingSession::new(seeded_config(500, 7)).unwrap();
    session.train().unwrap();
    let trained_entries = session.table().borrow().total_entries();
    assert!(trained_entries > 30, "training should have grown the table");

    // The agent a human would face aliases the trained lineage.
    let veteran = LearningAgent::builder()
        .name("AI 1")
        .shared_table(session.table())
        .build()
        .unwrap();
    assert_eq!(
        veteran.table().borrow().total_entries(),
        trained_entries
    );

    // A naive agent gets its own untrained seed.
    let naive = LearningAgent::builder().untrained(10).build().unwrap();
    assert_eq!(naive.table().borrow().total_entries(), 30);
}
