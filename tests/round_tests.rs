//! Turn protocol verification.
//!
//! These tests drive whole rounds through the public builder with scripted
//! seats, checking the guess state machine, the tile-conservation and
//! visibility invariants, and the error contracts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use proptest::prelude::*;

use tile_guess::{
    EngineError, GameBuilder, GameEngine, GameState, Guess, PlayerId, RoundEnding, Strategy, Tile,
};

/// A seat that replays decisions pushed by the test after the deal is known.
struct ScriptedStrategy {
    plan: Rc<RefCell<VecDeque<Option<Guess>>>>,
}

impl Strategy for ScriptedStrategy {
    fn propose_guess(
        &mut self,
        _view: &tile_guess::GameView<'_>,
        _drawn: Option<Tile>,
        _optional: bool,
    ) -> Option<Guess> {
        self.plan.borrow_mut().pop_front().unwrap_or(None)
    }
}

type Plan = Rc<RefCell<VecDeque<Option<Guess>>>>;

fn scripted() -> (Box<dyn Strategy>, Plan) {
    let plan: Plan = Rc::new(RefCell::new(VecDeque::new()));
    let strategy = ScriptedStrategy {
        plan: Rc::clone(&plan),
    };
    (Box::new(strategy), plan)
}

/// 2 colors, numbers to 3, 2 seats, hand size 2: seat 0 scripted, seat 1
/// automated, a 2-tile draw pile.
fn scripted_game(seed: u64) -> (GameEngine, GameState, Plan) {
    let (strategy, plan) = scripted();
    let (engine, state) = GameBuilder::new()
        .seat(strategy)
        .heuristic_seats(1)
        .starting_hand_size(2)
        .max_number(3)
        .build(seed);
    (engine, state, plan)
}

fn hand_tiles(state: &GameState, id: PlayerId) -> Vec<Tile> {
    state.player(id).hand().iter().map(|t| t.tile()).collect()
}

/// An incorrect guess reveals the drawn tile into the guesser's hand and
/// passes the turn.
#[test]
fn test_incorrect_guess_leaks_the_drawn_tile() {
    let (mut engine, mut state, plan) = scripted_game(42);

    let expected_drawn = *state.draw_pile().tiles().last().unwrap();
    let target = PlayerId::new(1);
    // Guess the value of the target's second tile at their first slot -
    // tile values are unique, so this is guaranteed wrong.
    let wrong_value = hand_tiles(&state, target)[1];
    plan.borrow_mut().push_back(Some(Guess {
        target,
        index: 0,
        tile: wrong_value,
    }));

    let summary = engine.play_round(&mut state).unwrap();

    assert_eq!(summary.ending, RoundEnding::Incorrect);
    assert_eq!(summary.drawn, Some(expected_drawn));
    assert_eq!(summary.correct_guesses, 0);

    let guesser = state.player(PlayerId::new(0));
    assert_eq!(guesser.hand_len(), 3);
    let leaked = guesser
        .hand()
        .iter()
        .find(|t| t.tile() == expected_drawn)
        .expect("drawn tile must join the guesser's hand");
    assert!(leaked.is_visible());

    // The target's tile stays hidden; the turn has passed.
    assert!(!state.player(target).hand()[0].is_visible());
    assert_eq!(state.turn_cursor(), target);
    assert_eq!(state.tile_census(), state.config().tile_set_size());
}

/// A correct guess followed by a voluntary stop banks the drawn tile
/// hidden, while the guessed tile stays revealed.
#[test]
fn test_correct_guess_then_decline_banks_the_tile_hidden() {
    let (mut engine, mut state, plan) = scripted_game(42);

    let expected_drawn = *state.draw_pile().tiles().last().unwrap();
    let target = PlayerId::new(1);
    let correct_value = hand_tiles(&state, target)[0];
    plan.borrow_mut().push_back(Some(Guess {
        target,
        index: 0,
        tile: correct_value,
    }));
    plan.borrow_mut().push_back(None);

    let summary = engine.play_round(&mut state).unwrap();

    assert_eq!(summary.ending, RoundEnding::Declined);
    assert_eq!(summary.correct_guesses, 1);

    let guesser = state.player(PlayerId::new(0));
    assert_eq!(guesser.hand_len(), 3);
    let banked = guesser
        .hand()
        .iter()
        .find(|t| t.tile() == expected_drawn)
        .expect("drawn tile must join the guesser's hand");
    assert!(!banked.is_visible());

    let revealed = state
        .player(target)
        .hand()
        .iter()
        .find(|t| t.tile() == correct_value)
        .unwrap();
    assert!(revealed.is_visible());
    assert_eq!(state.turn_cursor(), target);
}

/// With the pile exhausted the round still runs; a failed guess just has
/// nothing to reveal.
#[test]
fn test_empty_pile_round_completes() {
    // 2 seats x 3 tiles x numbers to 3 deals the whole set.
    let (strategy, plan) = scripted();
    let (mut engine, mut state) = GameBuilder::new()
        .seat(strategy)
        .heuristic_seats(1)
        .starting_hand_size(3)
        .max_number(3)
        .build(42);

    assert!(state.draw_pile().is_empty());

    let target = PlayerId::new(1);
    let wrong_value = hand_tiles(&state, target)[1];
    plan.borrow_mut().push_back(Some(Guess {
        target,
        index: 0,
        tile: wrong_value,
    }));

    let summary = engine.play_round(&mut state).unwrap();

    assert_eq!(summary.drawn, None);
    assert_eq!(summary.ending, RoundEnding::Incorrect);
    assert_eq!(state.player(PlayerId::new(0)).hand_len(), 3);
    assert_eq!(state.turn_cursor(), target);
    assert_eq!(state.tile_census(), state.config().tile_set_size());
}

/// A long correct chain keeps one seat guessing within a single round.
#[test]
fn test_correct_chain_continues_in_one_round() {
    let (mut engine, mut state, plan) = scripted_game(42);

    let target = PlayerId::new(1);
    let tiles = hand_tiles(&state, target);
    // Guess both of the target's tiles in hand order, then stop.
    plan.borrow_mut().push_back(Some(Guess {
        target,
        index: 0,
        tile: tiles[0],
    }));
    plan.borrow_mut().push_back(Some(Guess {
        target,
        index: 1,
        tile: tiles[1],
    }));
    plan.borrow_mut().push_back(None);

    let summary = engine.play_round(&mut state).unwrap();

    assert_eq!(summary.correct_guesses, 2);
    assert_eq!(summary.ending, RoundEnding::Declined);
    assert!(state.player(target).is_fully_revealed());
    assert_eq!(state.history().len(), 2);
    assert!(state.history().iter().all(|record| record.correct));
}

/// After every seat has played one round the cursor is back where it
/// started.
#[test]
fn test_cursor_returns_after_a_full_lap() {
    let (mut engine, mut state) = GameBuilder::new().heuristic_seats(3).build(42);

    assert_eq!(state.turn_cursor(), PlayerId::new(0));
    for _ in 0..3 {
        engine.play_round(&mut state).unwrap();
    }
    assert_eq!(state.turn_cursor(), PlayerId::new(0));
}

/// Declining the mandatory guess is a contract violation; the round aborts
/// with the state intact.
#[test]
fn test_mandatory_decline_is_illegal() {
    let (mut engine, mut state, plan) = scripted_game(42);
    plan.borrow_mut().push_back(None);

    let pile_before = state.draw_pile().len();
    let err = engine.play_round(&mut state).unwrap_err();

    assert_eq!(
        err,
        EngineError::IllegalDecline {
            player: PlayerId::new(0)
        }
    );
    assert_eq!(state.turn_cursor(), PlayerId::new(0));
    assert_eq!(state.draw_pile().len(), pile_before);
    assert_eq!(state.tile_census(), state.config().tile_set_size());
}

/// Guessing against your own seat is a contract violation.
#[test]
fn test_self_target_is_invalid() {
    let (mut engine, mut state, plan) = scripted_game(42);
    let own_tile = hand_tiles(&state, PlayerId::new(0))[0];
    plan.borrow_mut().push_back(Some(Guess {
        target: PlayerId::new(0),
        index: 0,
        tile: own_tile,
    }));

    let err = engine.play_round(&mut state).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidTarget {
            guesser: PlayerId::new(0),
            target: PlayerId::new(0)
        }
    );
    assert_eq!(state.tile_census(), state.config().tile_set_size());
}

/// A seat outside the game is a contract violation.
#[test]
fn test_unknown_target_is_invalid() {
    let (mut engine, mut state, plan) = scripted_game(42);
    plan.borrow_mut().push_back(Some(Guess {
        target: PlayerId::new(9),
        index: 0,
        tile: "b1".parse().unwrap(),
    }));

    let err = engine.play_round(&mut state).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidTarget {
            guesser: PlayerId::new(0),
            target: PlayerId::new(9)
        }
    );
}

/// An index beyond the target's hand is a contract violation raised before
/// resolution.
#[test]
fn test_out_of_range_index_is_invalid() {
    let (mut engine, mut state, plan) = scripted_game(42);
    plan.borrow_mut().push_back(Some(Guess {
        target: PlayerId::new(1),
        index: 99,
        tile: "b1".parse().unwrap(),
    }));

    let err = engine.play_round(&mut state).unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidIndex {
            player: PlayerId::new(1),
            index: 99,
            hand_len: 2
        }
    );
    // Nothing was resolved or recorded.
    assert!(state.history().is_empty());
    assert_eq!(state.tile_census(), state.config().tile_set_size());
}

proptest! {
    /// Whatever the seed, automated play preserves the tile census, never
    /// un-reveals a tile, and keeps every hand sorted.
    #[test]
    fn prop_automated_play_preserves_invariants(seed in any::<u64>()) {
        let (mut engine, mut state) = GameBuilder::new()
            .heuristic_seats(2)
            .starting_hand_size(2)
            .max_number(6)
            .build(seed);
        let set_size = state.config().tile_set_size();
        let mut visible = state.known_tiles();

        for _ in 0..60 {
            match engine.play_round(&mut state) {
                Ok(_) => {}
                Err(EngineError::GameOver) => break,
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }

            prop_assert_eq!(state.tile_census(), set_size);

            let now = state.known_tiles();
            prop_assert!(visible.iter().all(|t| now.contains(t)));
            visible = now;

            for player in state.players() {
                let hand: Vec<Tile> = player.hand().iter().map(|t| t.tile()).collect();
                let mut sorted = hand.clone();
                sorted.sort();
                prop_assert_eq!(hand, sorted);
            }
        }
    }
}
