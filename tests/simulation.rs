//! Simulation and report integration tests.

use pokerfreq::{
    HandCategory, MAX_HANDS_PER_DECK, Report, SharedTally, Simulation, SimulationError,
    SimulationOptions, TOTAL_HANDS, Tally,
};

#[test]
fn options_builder_sets_fields() {
    let options = SimulationOptions::default()
        .with_decks(12)
        .with_hands_per_deck(3)
        .with_workers(2);

    assert_eq!(options.decks, 12);
    assert_eq!(options.hands_per_deck, 3);
    assert_eq!(options.workers, 2);
    assert_eq!(options.total_hands(), 36);

    let defaults = SimulationOptions::default();
    assert_eq!(defaults.decks, 6_000);
    assert_eq!(defaults.hands_per_deck, 10);
    assert_eq!(defaults.workers, 1);
}

#[test]
fn invalid_options_are_rejected() {
    let options = SimulationOptions::default();

    assert_eq!(
        Simulation::new(options.with_decks(0), 1).unwrap_err(),
        SimulationError::NoDecks
    );
    assert_eq!(
        Simulation::new(options.with_hands_per_deck(0), 1).unwrap_err(),
        SimulationError::NoHands
    );
    assert_eq!(
        Simulation::new(options.with_hands_per_deck(11), 1).unwrap_err(),
        SimulationError::TooManyHands {
            requested: 11,
            max: MAX_HANDS_PER_DECK
        }
    );
    assert_eq!(
        Simulation::new(options.with_workers(0), 1).unwrap_err(),
        SimulationError::NoWorkers
    );
    assert!(Simulation::new(options.with_hands_per_deck(MAX_HANDS_PER_DECK), 1).is_ok());
}

#[test]
fn run_counts_every_hand() {
    let options = SimulationOptions::default()
        .with_decks(250)
        .with_hands_per_deck(4);
    let tally = Simulation::new(options, 8).unwrap().run().unwrap();

    assert_eq!(tally.total(), 1_000);
    assert_eq!(tally.iter().map(|(_, count)| count).sum::<u64>(), 1_000);
}

#[test]
fn same_seed_same_tally() {
    let options = SimulationOptions::default().with_decks(300);
    let a = Simulation::new(options, 99).unwrap().run().unwrap();
    let b = Simulation::new(options, 99).unwrap().run().unwrap();
    assert_eq!(a, b);
}

#[test]
fn one_worker_matches_sequential_run() {
    let options = SimulationOptions::default().with_decks(400);
    let simulation = Simulation::new(options, 5).unwrap();
    assert_eq!(simulation.run().unwrap(), simulation.run_parallel().unwrap());
}

#[test]
fn parallel_run_is_deterministic() {
    let options = SimulationOptions::default()
        .with_decks(1_001)
        .with_workers(4);
    let simulation = Simulation::new(options, 17).unwrap();

    let a = simulation.run_parallel().unwrap();
    let b = simulation.run_parallel().unwrap();
    assert_eq!(a.total(), 10_010);
    assert_eq!(a, b);
}

#[test]
fn more_workers_than_decks() {
    let options = SimulationOptions::default().with_decks(3).with_workers(8);
    let tally = Simulation::new(options, 1).unwrap().run_parallel().unwrap();
    assert_eq!(tally.total(), 30);
}

#[test]
fn large_run_tracks_theoretical_probabilities() {
    let options = SimulationOptions::default().with_workers(4);
    let tally = Simulation::new(options, 2024)
        .unwrap()
        .run_parallel()
        .unwrap();
    assert_eq!(tally.total(), 60_000);

    for category in [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
    ] {
        let gap = tally.frequency(category) - category.probability();
        assert!(
            gap.abs() < 0.015,
            "{category}: observed {} expected {}",
            tally.frequency(category),
            category.probability()
        );
    }

    let report = Report::new(&tally);
    assert!(report.correlation() > 0.999);
}

#[test]
fn exhaustive_tally_matches_combinations() {
    let tally = Tally::exhaustive();
    assert_eq!(tally.total(), TOTAL_HANDS);
    for category in HandCategory::ALL {
        assert_eq!(tally.count(category), category.combinations(), "{category}");
    }

    let report = Report::new(&tally);
    assert!(report.chi_square() < 1e-9);
    assert!((report.correlation() - 1.0).abs() < 1e-9);
}

#[test]
fn tally_merge_and_frequency() {
    let mut a = Tally::new();
    assert_eq!(a.frequency(HandCategory::Pair), 0.0);

    a.record(HandCategory::Pair);
    a.record(HandCategory::Pair);
    a.record(HandCategory::Flush);

    let mut b = Tally::new();
    b.record(HandCategory::Flush);

    a.merge(&b);
    assert_eq!(a.total(), 4);
    assert_eq!(a.count(HandCategory::Pair), 2);
    assert_eq!(a.count(HandCategory::Flush), 2);
    assert_eq!(a.count(HandCategory::StraightFlush), 0);
    assert!((a.frequency(HandCategory::Flush) - 0.5).abs() < f64::EPSILON);
}

#[test]
fn shared_tally_collects_from_threads() {
    let shared = SharedTally::new();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..250 {
                    shared.record(HandCategory::HighCard);
                }
            });
        }
    });

    let tally = shared.into_inner();
    assert_eq!(tally.total(), 1_000);
    assert_eq!(tally.count(HandCategory::HighCard), 1_000);
}

#[test]
fn report_rows_and_display() {
    let mut tally = Tally::new();
    for _ in 0..3 {
        tally.record(HandCategory::HighCard);
    }
    tally.record(HandCategory::Pair);

    let report = Report::new(&tally);
    assert_eq!(report.total, 4);
    assert_eq!(report.rows[0].category, HandCategory::HighCard);
    assert_eq!(report.rows[0].count, 3);
    assert!((report.rows[1].observed - 0.25).abs() < f64::EPSILON);
    assert!((report.rows[8].expected - 40.0 / 2_598_960.0).abs() < 1e-15);

    let text = report.to_string();
    assert!(text.starts_with("Total hands: 4\n"));
    assert!(text.contains("high card            :          3:    75.000%"));
    assert!(text.contains("straight flush"));
    assert!(text.contains("correlation:"));
}

#[test]
fn empty_report_has_zero_correlation() {
    let report = Report::new(&Tally::new());
    assert_eq!(report.total, 0);
    assert_eq!(report.correlation(), 0.0);
    assert_eq!(report.chi_square(), 0.0);
}
