// Battlesnake API Types (2018-era wire format)
//
// Coordinates are 0-based with x increasing rightward and y increasing
// DOWNWARD, so "up" decreases y. This matches the legacy engine protocol,
// not the modern one.

use serde::{Deserialize, Serialize};

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Snake representation; body is ordered from head to tail
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Snake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub health: i32,
    pub body: Vec<Point>,
}

impl Snake {
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn length(&self) -> usize {
        self.body.len()
    }
}

/// Board state including dimensions, food, and snakes
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Board {
    pub height: u32,
    pub width: u32,
    #[serde(default)]
    pub snakes: Vec<Snake>,
    #[serde(default)]
    pub food: Vec<Point>,
}

impl Board {
    /// Rivals that win or tie a head-to-head collision against `you`:
    /// a different snake whose length is at least ours.
    pub fn larger_rivals<'a>(&'a self, you: &'a Snake) -> impl Iterator<Item = &'a Snake> {
        self.snakes
            .iter()
            .filter(move |snake| snake.id != you.id && snake.length() >= you.length())
    }
}

/// Complete turn request received from the game host
#[derive(Deserialize, Serialize, Debug)]
pub struct GameState {
    #[serde(default)]
    pub turn: i32,
    pub board: Board,
    pub you: Snake,
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Calculates the next coordinate when moving in this direction.
    /// y grows downward, so Up subtracts from y.
    pub fn apply(&self, coord: &Point) -> Point {
        match self {
            Direction::Up => Point { x: coord.x, y: coord.y - 1 },
            Direction::Down => Point { x: coord.x, y: coord.y + 1 },
            Direction::Left => Point { x: coord.x - 1, y: coord.y },
            Direction::Right => Point { x: coord.x + 1, y: coord.y },
        }
    }
}
