//! Tests for game sessions and the Plus Mode turn timer.

use tictactoe_plus::{GameMode, GameSession, MoveError, Player, TURN_SECONDS};

#[test]
fn test_normal_session_has_no_timer_and_ignores_ticks() {
    let mut session = GameSession::new(GameMode::Normal);
    assert!(session.timer().is_none());

    let before = session.state().clone();
    for _ in 0..10 {
        let (state, timer) = session.tick();
        assert!(timer.is_none());
        assert_eq!(state, before);
    }
    assert_eq!(session.state().current_player(), Player::X);
}

#[test]
fn test_plus_session_starts_with_armed_timer() {
    let session = GameSession::new(GameMode::Plus);
    let timer = session.timer().expect("Plus Mode session must have a timer");
    assert_eq!(timer.seconds_remaining(), TURN_SECONDS);
    assert!(timer.is_active());
}

#[test]
fn test_countdown_expiry_forfeits_the_turn() {
    let mut session = GameSession::new(GameMode::Plus);
    assert_eq!(session.state().current_player(), Player::X);

    // The counter walks 3 -> 2 -> 1 -> 0 without a switch...
    for expected in [2, 1, 0] {
        let (state, timer) = session.tick();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(timer.unwrap().seconds_remaining(), expected);
    }

    // ...and the tick arriving at zero passes the turn and re-arms.
    let (state, timer) = session.tick();
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(timer.unwrap().seconds_remaining(), TURN_SECONDS);

    // No mark was placed by the forfeit.
    assert!(state.board().squares().iter().all(|s| !matches!(s, tictactoe_plus::Square::Occupied(_))));
}

#[test]
fn test_forfeit_cycle_repeats() {
    let mut session = GameSession::new(GameMode::Plus);

    // Two full timeout cycles: X loses the turn, then O does.
    for _ in 0..4 {
        session.tick();
    }
    assert_eq!(session.state().current_player(), Player::O);
    for _ in 0..4 {
        session.tick();
    }
    assert_eq!(session.state().current_player(), Player::X);
}

#[test]
fn test_moves_do_not_rearm_the_countdown() {
    let mut session = GameSession::new(GameMode::Plus);
    session.tick();
    session.tick();
    assert_eq!(session.timer().unwrap().seconds_remaining(), 1);

    // O inherits the remaining second; the clock keeps counting.
    session.apply_move(4).unwrap();
    assert_eq!(session.timer().unwrap().seconds_remaining(), 1);

    let (state, timer) = session.tick();
    assert_eq!(timer.unwrap().seconds_remaining(), 0);
    assert_eq!(state.current_player(), Player::O);
}

#[test]
fn test_ticks_after_win_change_nothing() {
    let mut session = GameSession::new(GameMode::Plus);
    // X wins the top row.
    for pos in [0, 3, 1, 4, 2] {
        session.apply_move(pos).unwrap();
    }
    assert_eq!(session.state().winner(), Some(Player::X));

    let player_before = session.state().current_player();
    let seconds_before = session.timer().unwrap().seconds_remaining();

    for _ in 0..10 {
        let (state, timer) = session.tick();
        assert_eq!(state.current_player(), player_before);
        assert_eq!(state.winner(), Some(Player::X));
        assert_eq!(timer.unwrap().seconds_remaining(), seconds_before);
    }
}

#[test]
fn test_reset_rearms_timer_and_clears_board() {
    let mut session = GameSession::new(GameMode::Plus);
    for pos in [0, 3, 1, 4, 2] {
        session.apply_move(pos).unwrap();
    }
    session.tick(); // suspends the timer

    let state = session.reset();
    assert_eq!(state.winner(), None);
    assert_eq!(state.current_player(), Player::X);
    let timer = session.timer().unwrap();
    assert_eq!(timer.seconds_remaining(), TURN_SECONDS);
    assert!(timer.is_active());

    // The session is fully playable again.
    session.apply_move(0).unwrap();
    assert_eq!(session.state().current_player(), Player::O);
}

#[test]
fn test_session_rejects_illegal_moves_without_mutation() {
    let mut session = GameSession::new(GameMode::Plus);
    session.apply_move(0).unwrap();
    let before = session.state().clone();

    assert_eq!(session.apply_move(0), Err(MoveError::CellOccupied(0)));
    assert_eq!(session.apply_move(42), Err(MoveError::OutOfBounds(42)));
    assert_eq!(session.state(), &before);
}

#[test]
fn test_apply_move_returns_snapshot() {
    let mut session = GameSession::new(GameMode::Normal);
    let snapshot = session.apply_move(8).unwrap();

    // The snapshot is detached: later mutations don't reach it.
    session.apply_move(4).unwrap();
    assert_eq!(snapshot.current_player(), Player::O);
    assert_eq!(session.state().current_player(), Player::X);
}
