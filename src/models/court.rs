//! Court, Team, and Side for 2v2 games.

use crate::models::error::RotationError;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Team label on a court; also names the winner of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

impl Side {
    /// Parse the external team number (1 or 2).
    pub fn from_number(n: u8) -> Result<Self, RotationError> {
        match n {
            1 => Ok(Side::One),
            2 => Ok(Side::Two),
            other => Err(RotationError::InvalidTeam(other)),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}

/// Two players sharing a side of a court. Exists only inside a `Court`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub side: Side,
    pub players: [Player; 2],
}

impl Team {
    pub fn ids(&self) -> [PlayerId; 2] {
        [self.players[0].id, self.players[1].id]
    }
}

/// A court with a match in progress: always exactly two full teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub team_1: Team,
    pub team_2: Team,
}

impl Court {
    pub fn new(team_1: [Player; 2], team_2: [Player; 2]) -> Self {
        Self {
            team_1: Team {
                side: Side::One,
                players: team_1,
            },
            team_2: Team {
                side: Side::Two,
                players: team_2,
            },
        }
    }

    /// All four seated players, team 1 first.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team_1.players.iter().chain(self.team_2.players.iter())
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.team_1
            .players
            .iter_mut()
            .chain(self.team_2.players.iter_mut())
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players().any(|p| p.id == id)
    }

    /// Break the court up into (winning players, losing players).
    pub fn into_result(self, winner: Side) -> ([Player; 2], [Player; 2]) {
        match winner {
            Side::One => (self.team_1.players, self.team_2.players),
            Side::Two => (self.team_2.players, self.team_1.players),
        }
    }
}
