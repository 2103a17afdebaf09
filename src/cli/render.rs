//! Plain-text views of a session.

use std::fmt::Write;

use crate::core::Session;
use crate::rules::{banner_lines, duel_message};

/// Board: one line per seat, then any banners.
#[must_use]
pub fn board(session: &Session) -> String {
    let mut out = String::new();

    for (id, player) in session.players() {
        let marker = if player.is_alive() { "" } else { "  (out)" };
        let _ = writeln!(
            out,
            "{}. {:<16} {:>5}   [custom {}]{}",
            id.seat(),
            player.name,
            player.life,
            player.custom_amount,
            marker
        );
    }

    for line in banners(session) {
        let _ = writeln!(out, "{}", line);
    }

    out
}

/// Banner lines. A fixed two-seat table uses the duel wording.
#[must_use]
pub fn banners(session: &Session) -> Vec<String> {
    if session.config().max_players == 2 && session.player_count() == 2 {
        duel_message(session).into_iter().collect()
    } else {
        banner_lines(session)
    }
}

/// History list, oldest first.
#[must_use]
pub fn history(session: &Session) -> String {
    if session.history().is_empty() {
        return "No events yet.\n".to_string();
    }

    let mut out = String::new();
    for (n, event) in session.history().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", n + 1, event);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_board_lists_every_seat() {
        let session = Session::multiplayer();
        let text = board(&session);

        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("1. Player 1"));
        assert!(text.contains("[custom 5]"));
    }

    #[test]
    fn test_board_duel_banner() {
        let mut session = Session::duel();
        session.adjust_life(PlayerId::new(1), -20, "-20").unwrap();

        let text = board(&session);
        assert!(text.contains("(out)"));
        assert!(text.ends_with("Player 2 loses!\n"));
    }

    #[test]
    fn test_board_multiplayer_banner() {
        let mut session = Session::new(crate::core::SessionConfig::multiplayer().with_default_players(2));
        session.adjust_life(PlayerId::new(1), -20, "-20").unwrap();

        assert_eq!(
            banners(&session),
            vec!["Player 2 LOSES!".to_string(), "Player 1 WINS! Game Over!".to_string()]
        );
    }

    #[test]
    fn test_history_empty_and_filled() {
        let mut session = Session::duel();
        assert_eq!(history(&session), "No events yet.\n");

        session.adjust_life(PlayerId::new(0), 1, "+1").unwrap();
        assert_eq!(history(&session), "  1. Player 1 gained 1 life. (+1)\n");
    }
}
