//! Property tests over arbitrary action sequences.

use proptest::prelude::*;

use life_counter::core::{PlayerId, Session, SessionConfig};
use life_counter::rules::sole_survivor;

/// (seat, delta) pairs for a table of `players`.
fn adjustments(players: usize) -> impl Strategy<Value = Vec<(u8, i64)>> {
    prop::collection::vec((0..players as u8, -30i64..=30), 0..60)
}

fn open_table(players: usize) -> Session {
    Session::new(
        SessionConfig::multiplayer()
            .with_default_players(players)
            .with_lock_when_over(false),
    )
}

proptest! {
    #[test]
    fn life_is_start_plus_sum_of_deltas(
        (players, steps) in (1usize..=8).prop_flat_map(|n| (Just(n), adjustments(n)))
    ) {
        let mut session = open_table(players);
        let mut expected = vec![20i64; players];

        for &(p, delta) in &steps {
            session.adjust_life(PlayerId::new(p), delta, format!("{:+}", delta)).unwrap();
            expected[p as usize] += delta;
        }

        prop_assert_eq!(session.roster().lives(), expected);
        prop_assert_eq!(session.history().len(), steps.len());
        prop_assert_eq!(session.is_started(), !steps.is_empty());
    }

    #[test]
    fn history_entry_k_describes_call_k(
        steps in adjustments(4)
    ) {
        let mut session = open_table(4);
        for &(p, delta) in &steps {
            session.adjust_life(PlayerId::new(p), delta, format!("L{}", delta)).unwrap();
        }

        for (event, &(p, delta)) in session.history().iter().zip(&steps) {
            prop_assert_eq!(event.player, PlayerId::new(p));
            prop_assert_eq!(event.delta, delta);
            let label = format!("L{}", delta);
            prop_assert_eq!(&event.label, &label);
            let verb = if delta > 0 { "gained" } else { "lost" };
            prop_assert_eq!(
                &event.description,
                &format!("Player {} {} {} life. ({})", p + 1, verb, delta.abs(), label)
            );
        }
    }

    #[test]
    fn game_over_iff_exactly_one_alive(
        (players, steps) in (1usize..=8).prop_flat_map(|n| (Just(n), adjustments(n)))
    ) {
        let mut session = open_table(players);
        for &(p, delta) in &steps {
            session.adjust_life(PlayerId::new(p), delta, "x").unwrap();
        }

        let alive = session.roster().lives().iter().filter(|&&life| life > 0).count();
        let expected = session.is_started() && players > 1 && alive == 1;
        prop_assert_eq!(session.is_over(), expected);
        prop_assert_eq!(session.winner().is_some(), expected);
        prop_assert_eq!(sole_survivor(session.roster()).is_some(), players > 1 && alive == 1);
    }

    #[test]
    fn locked_table_never_changes_after_game_over(
        steps in adjustments(3)
    ) {
        let mut session = Session::new(SessionConfig::multiplayer().with_default_players(3));
        let mut frozen: Option<Vec<i64>> = None;

        for &(p, delta) in &steps {
            let result = session.adjust_life(PlayerId::new(p), delta, "x").map(|_| ());
            match &frozen {
                Some(lives) => {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(&session.roster().lives(), lives);
                }
                None => {
                    prop_assert!(result.is_ok());
                    if session.is_over() {
                        frozen = Some(session.roster().lives());
                    }
                }
            }
        }
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent(
        steps in adjustments(4),
        adds in 0usize..6,
    ) {
        let mut session = open_table(4);
        for _ in 0..adds {
            let _ = session.add_player();
        }
        for &(p, delta) in &steps {
            session.adjust_life(PlayerId::new(p), delta, "x").unwrap();
        }

        session.reset();
        let once = session.clone();
        session.reset();

        prop_assert_eq!(&session, &once);
        prop_assert_eq!(session.roster(), &session.config().default_roster());
        prop_assert!(session.history().is_empty());
        prop_assert!(!session.is_started());
    }
}
