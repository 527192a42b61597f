//! Predicates gating every mutating request. All pure; an illegal action is
//! silently suppressed by the caller, never surfaced as an error.

use crate::game::{GameState, Role};

/// Whether a click on cell `index` may become a guess request.
pub fn can_guess(state: &GameState, role: Role, index: usize, spymaster_may_guess: bool) -> bool {
    if role == Role::Codemaster && !spymaster_may_guess {
        return false;
    }
    if state.is_over() {
        return false;
    }
    matches!(state.revealed.get(index), Some(false))
}

/// End turn is a player-facing control; codemasters never see it.
pub fn can_end_turn(state: &GameState, role: Role) -> bool {
    role == Role::Player && !state.is_over()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextGameGate {
    Allowed,
    /// Starting over an unfinished game is destructive; the caller must ask.
    NeedsConfirmation,
}

pub fn next_game_gate(state: &GameState) -> NextGameGate {
    if state.is_over() {
        NextGameGate::Allowed
    } else {
        NextGameGate::NeedsConfirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CellTag, Team};

    fn game() -> GameState {
        GameState {
            id: "g".to_string(),
            round: 0,
            starting_team: Team::Red,
            winning_team: None,
            layout: vec![CellTag::Red, CellTag::Blue, CellTag::Neutral],
            revealed: vec![false, true, false],
            words: vec!["A".into(), "B".into(), "C".into()],
            state_id: "s".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            round_started_at: String::new(),
            timer_duration_ms: 0,
            enforce_timer: false,
            word_set: vec![],
        }
    }

    #[test]
    fn revealed_cells_are_never_guessable() {
        let game = game();
        for role in [Role::Player, Role::Codemaster] {
            assert!(!can_guess(&game, role, 1, true));
        }
    }

    #[test]
    fn codemaster_needs_the_spymaster_setting() {
        let game = game();
        assert!(!can_guess(&game, Role::Codemaster, 0, false));
        assert!(can_guess(&game, Role::Codemaster, 0, true));
        assert!(can_guess(&game, Role::Player, 0, false));
    }

    #[test]
    fn no_guesses_once_a_team_has_won() {
        let mut game = game();
        game.winning_team = Some(Team::Blue);
        for index in 0..game.revealed.len() {
            assert!(!can_guess(&game, Role::Player, index, true));
        }
    }

    #[test]
    fn out_of_bounds_index_is_not_guessable() {
        assert!(!can_guess(&game(), Role::Player, 99, true));
    }

    #[test]
    fn end_turn_is_player_only_and_stops_at_game_over() {
        let mut game = game();
        assert!(can_end_turn(&game, Role::Player));
        assert!(!can_end_turn(&game, Role::Codemaster));
        game.winning_team = Some(Team::Red);
        assert!(!can_end_turn(&game, Role::Player));
    }

    #[test]
    fn next_game_needs_confirmation_only_while_unfinished() {
        let mut game = game();
        assert_eq!(next_game_gate(&game), NextGameGate::NeedsConfirmation);
        game.winning_team = Some(Team::Red);
        assert_eq!(next_game_gate(&game), NextGameGate::Allowed);
    }
}
