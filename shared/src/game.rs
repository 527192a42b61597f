use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn opposite(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hidden identity of a single board cell. The assassin cell is spelled
/// "black" on the wire.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CellTag {
    Red,
    Blue,
    Neutral,
    #[serde(rename = "black")]
    Assassin,
}

impl CellTag {
    pub fn css_class(self) -> &'static str {
        match self {
            CellTag::Red => "red",
            CellTag::Blue => "blue",
            CellTag::Neutral => "neutral",
            CellTag::Assassin => "black",
        }
    }
}

impl From<Team> for CellTag {
    fn from(team: Team) -> CellTag {
        match team {
            Team::Red => CellTag::Red,
            Team::Blue => CellTag::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Codemaster,
}

/// Server-owned game record. The client holds a read-mostly copy that is
/// replaced wholesale on every sync; nothing here is mutated locally.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GameState {
    pub id: String,
    pub round: u32,
    pub starting_team: Team,
    #[serde(default)]
    pub winning_team: Option<Team>,
    pub layout: Vec<CellTag>,
    pub revealed: Vec<bool>,
    pub words: Vec<String>,
    pub state_id: String,
    pub created_at: String,
    #[serde(default)]
    pub round_started_at: String,
    #[serde(default)]
    pub timer_duration_ms: u64,
    #[serde(default)]
    pub enforce_timer: bool,
    #[serde(default)]
    pub word_set: Vec<String>,
}

impl GameState {
    /// Whose turn it is. Derived from round parity on every call; `round`
    /// changes underneath us, so this must never be cached.
    pub fn current_team(&self) -> Team {
        if self.round % 2 == 0 {
            self.starting_team
        } else {
            self.starting_team.opposite()
        }
    }

    /// Unrevealed cells carrying the given tag.
    pub fn remaining(&self, tag: CellTag) -> usize {
        self.layout
            .iter()
            .zip(self.revealed.iter())
            .filter(|(cell, revealed)| !**revealed && **cell == tag)
            .count()
    }

    pub fn is_over(&self) -> bool {
        self.winning_team.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct GameStateRequest<'a> {
    pub game_id: &'a str,
    pub state_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GuessRequest<'a> {
    pub game_id: &'a str,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct EndTurnRequest<'a> {
    pub game_id: &'a str,
    pub current_round: u32,
}

#[derive(Debug, Serialize)]
pub struct NextGameRequest<'a> {
    pub game_id: &'a str,
    pub word_set: &'a [String],
    pub create_new: bool,
    pub timer_duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_timer: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> GameState {
        GameState {
            id: "autumn-panther".to_string(),
            round: 0,
            starting_team: Team::Red,
            winning_team: None,
            layout: vec![CellTag::Red, CellTag::Blue, CellTag::Red],
            revealed: vec![false, false, false],
            words: vec!["ACORN".into(), "BEACH".into(), "CYCLE".into()],
            state_id: "s1".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            round_started_at: "2024-01-01T00:00:00Z".to_string(),
            timer_duration_ms: 0,
            enforce_timer: false,
            word_set: vec![],
        }
    }

    #[test]
    fn current_team_is_starting_team_on_even_rounds() {
        let mut game = sample_game();
        for round in 0..8 {
            game.round = round;
            if round % 2 == 0 {
                assert_eq!(game.current_team(), Team::Red);
            } else {
                assert_eq!(game.current_team(), Team::Blue);
            }
        }
    }

    #[test]
    fn current_team_round_three_blue_start() {
        let mut game = sample_game();
        game.starting_team = Team::Blue;
        game.round = 3;
        assert_eq!(game.current_team(), Team::Red);
    }

    #[test]
    fn remaining_counts_only_unrevealed_cells() {
        let mut game = sample_game();
        game.revealed = vec![true, false, false];
        assert_eq!(game.remaining(CellTag::Red), 1);
        assert_eq!(game.remaining(CellTag::Blue), 1);
    }

    #[test]
    fn remaining_partitions_unrevealed_cells() {
        let mut game = sample_game();
        game.layout = vec![
            CellTag::Red,
            CellTag::Blue,
            CellTag::Neutral,
            CellTag::Assassin,
            CellTag::Red,
        ];
        game.revealed = vec![true, false, false, false, false];
        let unrevealed = game.revealed.iter().filter(|r| !**r).count();
        let sum = game.remaining(CellTag::Red)
            + game.remaining(CellTag::Blue)
            + game.remaining(CellTag::Neutral)
            + game.remaining(CellTag::Assassin);
        assert_eq!(sum, unrevealed);
    }

    #[test]
    fn deserializes_server_document() {
        let doc = r#"{
            "id": "g",
            "round": 1,
            "starting_team": "blue",
            "winning_team": "red",
            "layout": ["red", "blue", "neutral", "black"],
            "revealed": [false, true, false, false],
            "words": ["A", "B", "C", "D"],
            "state_id": "abc",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let game: GameState = serde_json::from_str(doc).unwrap();
        assert_eq!(game.winning_team, Some(Team::Red));
        assert_eq!(game.layout[3], CellTag::Assassin);
        assert_eq!(game.timer_duration_ms, 0);
        assert!(!game.enforce_timer);
    }

    #[test]
    fn next_game_request_omits_unset_enforce_timer() {
        let words: Vec<String> = vec!["A".into()];
        let req = NextGameRequest {
            game_id: "g",
            word_set: &words,
            create_new: true,
            timer_duration_ms: 0,
            enforce_timer: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("enforce_timer"));
    }
}
