use janken_core::{
    judge, Event, EventBus, GameConfig, GameEngine, GameError, Hand, RoundResult, ScriptedHands,
    SessionPhase, DEFAULT_ROUNDS,
};
use proptest::prelude::*;

fn scripted_engine(hands: &[Hand]) -> GameEngine<ScriptedHands> {
    GameEngine::with_source(
        GameConfig::default(),
        ScriptedHands::new(hands.to_vec()).expect("script"),
    )
    .expect("engine")
}

fn hand_strategy() -> impl Strategy<Value = Hand> {
    prop_oneof![Just(Hand::Rock), Just(Hand::Scissors), Just(Hand::Paper)]
}

#[test]
fn rock_against_repeating_script() {
    use Hand::{Paper, Rock, Scissors};
    let script = [
        Rock, Scissors, Paper, Rock, Scissors, Paper, Rock, Scissors, Paper, Rock,
    ];
    let mut engine = scripted_engine(&script);
    let mut events = EventBus::default();
    let mut results = Vec::new();
    for _ in 0..DEFAULT_ROUNDS {
        let outcome = engine.submit_choice(Some(Rock), &mut events).expect("round");
        results.push(outcome.result);
    }
    use RoundResult::{Draw, Lose, Win};
    assert_eq!(
        results,
        vec![Draw, Win, Lose, Draw, Win, Lose, Draw, Win, Lose, Draw]
    );
    let summary = engine.summary().expect("summary");
    assert_eq!((summary.wins, summary.losses, summary.draws), (3, 3, 4));
    assert!(engine.is_session_over());
}

#[test]
fn every_pairing_moves_exactly_one_tally() {
    for user in Hand::ALL {
        for system in Hand::ALL {
            let mut engine = scripted_engine(&[system]);
            let mut events = EventBus::default();
            let before = engine.standings();
            let outcome = engine
                .submit_choice(Some(user), &mut events)
                .expect("round");
            let after = engine.standings();
            let delta = (after.wins - before.wins)
                + (after.losses - before.losses)
                + (after.draws - before.draws);
            assert_eq!(delta, 1, "{user:?} vs {system:?}");
            assert_eq!(engine.rounds_remaining(), DEFAULT_ROUNDS - 1);
            assert_eq!(outcome.result, judge(user, system));
        }
    }
}

#[test]
fn full_session_then_reset() {
    let mut engine = GameEngine::new(GameConfig::default(), 99).expect("engine");
    let mut events = EventBus::default();
    for round in 1..=DEFAULT_ROUNDS {
        assert_eq!(engine.phase(), SessionPhase::InProgress);
        let outcome = engine
            .submit_choice(Some(Hand::Paper), &mut events)
            .expect("round");
        assert_eq!(outcome.rounds_remaining, DEFAULT_ROUNDS - round);
    }
    assert!(engine.is_session_over());
    assert_eq!(engine.standings().played(), DEFAULT_ROUNDS);
    assert_eq!(
        engine.submit_choice(Some(Hand::Paper), &mut events),
        Err(GameError::SessionOver)
    );

    engine.reset(&mut events);
    let session = engine.session();
    assert_eq!(session.rounds_remaining, DEFAULT_ROUNDS);
    assert_eq!((session.wins, session.losses, session.draws), (0, 0, 0));
    assert_eq!(engine.phase(), SessionPhase::InProgress);

    let drained: Vec<Event> = events.drain().collect();
    let finished = drained
        .iter()
        .filter(|event| matches!(event, Event::SessionFinished { .. }))
        .count();
    assert_eq!(finished, 1);
    assert_eq!(
        drained.last(),
        Some(&Event::SessionReset {
            rounds: DEFAULT_ROUNDS
        })
    );
}

#[test]
fn config_round_trips_through_json() {
    let config: GameConfig = serde_json::from_str(r#"{"initial_rounds": 5}"#).expect("parse");
    assert_eq!(config.initial_rounds, 5);
    let defaulted: GameConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(defaulted, GameConfig::default());
}

proptest! {
    #[test]
    fn dominance_is_cyclic_and_total(a in hand_strategy(), b in hand_strategy()) {
        if a == b {
            prop_assert!(!a.beats(b));
        } else {
            prop_assert!(a.beats(b) ^ b.beats(a));
        }
    }

    #[test]
    fn tallies_track_completed_rounds(
        user in prop::collection::vec(prop::option::of(hand_strategy()), 0..30),
        seed in any::<u64>(),
    ) {
        let mut engine = GameEngine::new(GameConfig::default(), seed).expect("engine");
        let mut events = EventBus::default();
        for choice in user {
            if engine.is_session_over() {
                break;
            }
            let before = engine.rounds_remaining();
            match engine.submit_choice(choice, &mut events) {
                Ok(outcome) => prop_assert_eq!(outcome.rounds_remaining, before - 1),
                Err(err) => {
                    prop_assert_eq!(err, GameError::InputMissing);
                    prop_assert_eq!(engine.rounds_remaining(), before);
                }
            }
            let session = engine.session();
            prop_assert_eq!(
                session.wins + session.losses + session.draws,
                session.completed_rounds()
            );
        }
    }
}
