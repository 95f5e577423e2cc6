//! Session tests - full rounds through keyboard-shaped input.

use crossterm::event::{KeyCode, KeyEvent};

use tui_cubic::core::CommandError;
use tui_cubic::engine::{Session, SessionEvent};
use tui_cubic::input::handle_key_event;
use tui_cubic::types::{
    Coord, InputAction, Player, ROUND_COOLDOWN_MS, STATUS_FLASH_REPEATS, STATUS_FLASH_SENTINEL,
};

/// Drive the session exactly like the main loop: a key event becomes an
/// action, the action becomes a session event.
fn press(session: &mut Session, code: KeyCode) -> SessionEvent {
    let action = handle_key_event(KeyEvent::from(code)).expect("mapped key");
    session.handle(action)
}

fn play(session: &mut Session, index: u8) -> SessionEvent {
    session.handle(InputAction::Select(index));
    session.handle(InputAction::Confirm)
}

/// One wins the x-run at y=0, z=0 while Two and Three park on layer 1 and 2.
fn play_until_one_wins(session: &mut Session) -> SessionEvent {
    play(session, 0);
    play(session, 9);
    play(session, 18);
    play(session, 1);
    play(session, 10);
    play(session, 19);
    play(session, 2)
}

#[test]
fn test_keyboard_round_trip_places_a_mark() {
    let mut session = Session::new();

    // 'g' is the cube center (1, 1, 1).
    assert_eq!(press(&mut session, KeyCode::Char('g')), SessionEvent::Selected(13));
    let event = press(&mut session, KeyCode::Enter);
    assert_eq!(
        event,
        SessionEvent::Moved {
            player: Player::One,
            coord: Coord::new(1, 1, 1),
            next: Player::Two,
        }
    );

    let snap = session.snapshot();
    assert_eq!(snap.cells[13], Player::One.id());
    assert_eq!(snap.current, Player::Two);
}

#[test]
fn test_backspace_clears_the_staged_selection() {
    let mut session = Session::new();
    press(&mut session, KeyCode::Char('q'));
    assert_eq!(session.snapshot().selected, Some(0));

    press(&mut session, KeyCode::Backspace);
    assert_eq!(session.snapshot().selected, None);

    // Confirm now has nothing to commit.
    assert_eq!(
        press(&mut session, KeyCode::Enter),
        SessionEvent::Rejected(CommandError::NothingSelected)
    );
}

#[test]
fn test_occupied_cell_keeps_the_mover_and_board() {
    let mut session = Session::new();
    play(&mut session, 0);

    let event = play(&mut session, 0);
    assert_eq!(
        event,
        SessionEvent::Rejected(CommandError::Occupied(Coord::new(0, 0, 0)))
    );
    assert!(Session::status_frames(&event).is_empty());

    let snap = session.snapshot();
    assert_eq!(snap.cells[0], Player::One.id());
    assert_eq!(snap.current, Player::Two);
    assert_eq!(snap.selected, None);
}

#[test]
fn test_three_player_rotation_and_status_frames() {
    let mut session = Session::new();
    assert_eq!(session.opening_frame(), 1);

    let event = play(&mut session, 0);
    assert_eq!(Session::status_frames(&event).as_slice(), &[2]);
    let event = play(&mut session, 9);
    assert_eq!(Session::status_frames(&event).as_slice(), &[3]);
    let event = play(&mut session, 18);
    assert_eq!(Session::status_frames(&event).as_slice(), &[1]);
}

#[test]
fn test_win_reports_line_and_flash_burst() {
    let mut session = Session::new();
    let event = play_until_one_wins(&mut session);

    assert_eq!(
        event,
        SessionEvent::Won {
            winner: Player::One,
            line: [
                Coord::new(0, 0, 0),
                Coord::new(1, 0, 0),
                Coord::new(2, 0, 0)
            ],
        }
    );

    // The display flashes: (sentinel, winner) pairs, twenty times.
    let frames = Session::status_frames(&event);
    let expected = [STATUS_FLASH_SENTINEL, Player::One.id()];
    assert_eq!(frames.len(), STATUS_FLASH_REPEATS * 2);
    assert!(frames.chunks(2).all(|pair| pair == &expected[..]));

    // The snapshot carries the highlight for the renderer.
    let snap = session.snapshot();
    assert_eq!(snap.winner, Some(Player::One));
    assert_eq!(snap.win_line, Some([0, 1, 2]));
}

#[test]
fn test_round_over_blocks_input_until_cooldown_resets() {
    let mut session = Session::new();
    play_until_one_wins(&mut session);

    assert_eq!(
        play(&mut session, 5),
        SessionEvent::Rejected(CommandError::RoundOver)
    );

    // Walk the cooldown in uneven chunks; reset fires exactly once.
    assert_eq!(session.tick(ROUND_COOLDOWN_MS / 2), None);
    assert_eq!(session.tick(ROUND_COOLDOWN_MS / 2 - 1), None);
    let reset = session.tick(1).expect("reset event");
    assert_eq!(
        reset,
        SessionEvent::Reset {
            opener: Player::One
        }
    );
    assert_eq!(Session::status_frames(&reset).as_slice(), &[1]);
    assert_eq!(session.tick(1), None);

    // Fresh board, fresh round, same cell playable again.
    let snap = session.snapshot();
    assert_eq!(snap.round, 1);
    assert!(snap.cells.iter().all(|&id| id == 0));
    assert!(matches!(
        play(&mut session, 0),
        SessionEvent::Moved {
            player: Player::One,
            ..
        }
    ));
}

#[test]
fn test_draw_round_resets_without_flash() {
    let mut session = Session::new();
    // The no-line tiling used across the suites, replayed in rotation.
    let fill: [u8; 27] = [
        2, 1, 3, 3, 1, 3, 3, 3, 2, //
        3, 3, 1, 3, 3, 2, 2, 2, 1, //
        2, 1, 1, 1, 2, 2, 1, 2, 1,
    ];
    let mut per_player: [Vec<u8>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for (index, id) in fill.iter().enumerate() {
        per_player[(*id - 1) as usize].push(index as u8);
    }

    let mut last = None;
    while !session.snapshot().round_over {
        let mover = session.snapshot().current;
        let index = per_player[(mover.id() - 1) as usize]
            .pop()
            .expect("tiling move");
        last = Some(play(&mut session, index));
    }

    let event = last.expect("at least one move");
    assert!(matches!(event, SessionEvent::Drawn { .. }));
    assert!(Session::status_frames(&event).is_empty());

    let snap = session.snapshot();
    assert!(snap.draw);
    assert_eq!(snap.winner, None);

    // Draw uses the same cooldown as a win.
    assert_eq!(session.tick(ROUND_COOLDOWN_MS - 1), None);
    assert!(session.tick(1).is_some());
    assert!(!session.snapshot().round_over);
}
