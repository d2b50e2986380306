//! Key handling drives the game through its public operations.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Player, Position, Square};
use rewind_tui::{App, Focus};

fn press(app: &mut App, keys: &[KeyCode]) {
    for &key in keys {
        app.handle_key(key);
    }
}

fn digits(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_key(KeyCode::Char(c));
    }
}

#[test]
fn test_enter_plays_at_cursor() {
    let mut app = App::default();
    assert_eq!(app.cursor(), Position::Center);

    press(&mut app, &[KeyCode::Enter, KeyCode::Up, KeyCode::Left, KeyCode::Char(' ')]);
    let board = app.game().current_board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(app.game().current_step(), 2);
}

#[test]
fn test_digits_play_and_win() {
    let mut app = App::default();
    // Keys are 1-based: squares 0, 1, 4, 2, 8.
    digits(&mut app, "12539");
    assert_eq!(app.game().status_text(), "Winner: X");

    digits(&mut app, "4");
    assert_eq!(app.game().history().len(), 6);
}

#[test]
fn test_history_focus_jumps_to_highlighted_row() {
    let mut app = App::default();
    digits(&mut app, "123");
    assert_eq!(app.history_row(), 3);

    press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
    assert_eq!(app.focus(), Focus::History);
    assert_eq!(app.game().current_step(), 1);
    assert_eq!(app.game().selected_step(), Some(1));
    assert_eq!(app.game().history().len(), 4);
}

#[test]
fn test_history_row_is_clamped() {
    let mut app = App::default();
    digits(&mut app, "5");
    press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
    assert_eq!(app.history_row(), 1);
    press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up]);
    assert_eq!(app.history_row(), 0);
}

#[test]
fn test_arrows_in_history_focus_leave_board_cursor() {
    let mut app = App::default();
    press(&mut app, &[KeyCode::Tab, KeyCode::Left]);
    assert_eq!(app.cursor(), Position::Center);
}

#[test]
fn test_branching_from_history() {
    let mut app = App::default();
    digits(&mut app, "1234");
    press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
    assert_eq!(app.game().current_step(), 1);

    digits(&mut app, "9");
    assert_eq!(app.game().history().len(), 3);
    assert_eq!(app.history_row(), 2);
    assert_eq!(
        app.game().current_board().get(Position::BottomRight),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_sort_toggle_keeps_highlighted_step() {
    let mut app = App::default();
    digits(&mut app, "123");
    assert_eq!(app.highlighted_step(), Some(3));

    press(&mut app, &[KeyCode::Char('s')]);
    assert!(!app.game().is_sort_ascending());
    assert_eq!(app.history_row(), 0);
    assert_eq!(app.highlighted_step(), Some(3));

    press(&mut app, &[KeyCode::Char('s')]);
    assert_eq!(app.history_row(), 3);
}

#[test]
fn test_descending_start_tracks_new_moves() {
    let mut app = App::new(false);
    digits(&mut app, "12");
    assert_eq!(app.history_row(), 0);
    assert_eq!(app.highlighted_step(), Some(2));
}

#[test]
fn test_new_game_and_quit() {
    let mut app = App::default();
    digits(&mut app, "159");
    press(&mut app, &[KeyCode::Char('n')]);
    assert_eq!(app.game().history().len(), 1);
    assert_eq!(app.history_row(), 0);
    assert!(!app.should_quit());

    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());
}

#[test]
fn test_occupied_square_key_is_ignored() {
    let mut app = App::default();
    digits(&mut app, "55");
    assert_eq!(app.game().history().len(), 2);
    assert_eq!(app.game().player_to_move(), Player::O);
}
