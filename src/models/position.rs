//! Room names and positions.
//!
//! Rooms form an unbounded grid. A room name encodes its column and row:
//! `E{n}` / `W{n}` for columns east and west of the origin, `S{n}` / `N{n}`
//! for rows south and north of it. Each room is a 50x50 tile square.
//!
//! # Coordinate Model
//!
//! | Name | Column | Row |
//! |------|--------|-----|
//! | `E0S0` | 0 | 0 |
//! | `W0N0` | -1 | -1 |
//! | `E3N5` | 3 | -6 |
//!
//! World coordinates are `column * 50 + x`, `row * 50 + y`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Side length of a room in tiles.
pub const ROOM_SIZE: i32 = 50;

/// Largest coordinate accepted in a room name (`W10000N0`).
pub const MAX_ROOM_COORD: i32 = 10_000;

/// Errors from parsing a room name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomNameError {
    #[error("room name is empty")]
    Empty,
    #[error("room name '{0}' must start with E or W")]
    BadHorizontal(String),
    #[error("room name '{0}' is missing an N or S segment")]
    BadVertical(String),
    #[error("room name '{0}' has an invalid coordinate")]
    BadNumber(String),
}

/// A room identifier (e.g. `W7N3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomName {
    col: i32,
    row: i32,
}

impl RoomName {
    /// Creates a room name from grid coordinates.
    pub fn from_coords(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Grid column (east positive).
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Grid row (south positive).
    pub fn row(&self) -> i32 {
        self.row
    }
}

impl FromStr for RoomName {
    type Err = RoomNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if upper.is_empty() {
            return Err(RoomNameError::Empty);
        }

        let (west, rest) = match upper.as_bytes()[0] {
            b'E' => (false, &upper[1..]),
            b'W' => (true, &upper[1..]),
            _ => return Err(RoomNameError::BadHorizontal(s.to_string())),
        };

        let split = rest
            .find(['N', 'S'])
            .ok_or_else(|| RoomNameError::BadVertical(s.to_string()))?;
        let (h, v) = rest.split_at(split);
        let north = v.starts_with('N');

        let parse = |digits: &str| -> Result<i32, RoomNameError> {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RoomNameError::BadNumber(s.to_string()));
            }
            digits
                .parse::<i32>()
                .ok()
                .filter(|n| *n <= MAX_ROOM_COORD)
                .ok_or_else(|| RoomNameError::BadNumber(s.to_string()))
        };

        let h = parse(h)?;
        let v = parse(&v[1..])?;

        Ok(Self {
            col: if west { -h - 1 } else { h },
            row: if north { -v - 1 } else { v },
        })
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // W0 is column -1, so the magnitude is |col + 1|.
        let (h, hv) = if self.col < 0 {
            ('W', (self.col + 1).unsigned_abs())
        } else {
            ('E', self.col.unsigned_abs())
        };
        let (v, vv) = if self.row < 0 {
            ('N', (self.row + 1).unsigned_abs())
        } else {
            ('S', self.row.unsigned_abs())
        };
        write!(f, "{h}{hv}{v}{vv}")
    }
}

impl TryFrom<String> for RoomName {
    type Error = RoomNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoomName> for String {
    fn from(name: RoomName) -> Self {
        name.to_string()
    }
}

/// A tile inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Owning room.
    pub room: RoomName,
    /// Column within the room (0..50).
    pub x: u8,
    /// Row within the room (0..50).
    pub y: u8,
}

impl Position {
    /// Creates a position.
    pub fn new(room: RoomName, x: u8, y: u8) -> Self {
        Self { room, x, y }
    }

    /// Global x coordinate across all rooms. Saturates for rooms built
    /// with out-of-range coordinates.
    pub fn world_x(&self) -> i32 {
        self.room
            .col
            .saturating_mul(ROOM_SIZE)
            .saturating_add(i32::from(self.x))
    }

    /// Global y coordinate across all rooms.
    pub fn world_y(&self) -> i32 {
        self.room
            .row
            .saturating_mul(ROOM_SIZE)
            .saturating_add(i32::from(self.y))
    }

    /// Whether the tile lies inside its room (`x` and `y` below 50).
    pub fn in_room_bounds(&self) -> bool {
        i32::from(self.x) < ROOM_SIZE && i32::from(self.y) < ROOM_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {},{}]", self.room, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quadrants() {
        let e0s0: RoomName = "E0S0".parse().unwrap();
        assert_eq!((e0s0.col(), e0s0.row()), (0, 0));

        let w0n0: RoomName = "W0N0".parse().unwrap();
        assert_eq!((w0n0.col(), w0n0.row()), (-1, -1));

        let e3n5: RoomName = "e3n5".parse().unwrap();
        assert_eq!((e3n5.col(), e3n5.row()), (3, -6));

        let w12s40: RoomName = "W12S40".parse().unwrap();
        assert_eq!((w12s40.col(), w12s40.row()), (-13, 40));
    }

    #[test]
    fn test_display_matches_input() {
        for name in ["W7N3", "E0S0", "W0N0", "E15S2"] {
            let parsed: RoomName = name.parse().unwrap();
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<RoomName>(), Err(RoomNameError::Empty));
        assert!(matches!(
            "X1N1".parse::<RoomName>(),
            Err(RoomNameError::BadHorizontal(_))
        ));
        assert!(matches!(
            "W12".parse::<RoomName>(),
            Err(RoomNameError::BadVertical(_))
        ));
        assert!(matches!(
            "WN1".parse::<RoomName>(),
            Err(RoomNameError::BadNumber(_))
        ));
        assert!(matches!(
            "W1N".parse::<RoomName>(),
            Err(RoomNameError::BadNumber(_))
        ));
    }

    #[test]
    fn test_coordinate_bound() {
        let edge: RoomName = "W10000S10000".parse().unwrap();
        assert_eq!(edge.to_string(), "W10000S10000");

        for name in ["W10001N0", "E0S10001", "W2147483647N0", "E99999999999S0"] {
            assert!(
                matches!(name.parse::<RoomName>(), Err(RoomNameError::BadNumber(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_extreme_coords_do_not_overflow() {
        let west = RoomName::from_coords(i32::MIN, i32::MIN);
        assert_eq!(west.to_string(), "W2147483647N2147483647");

        let east = RoomName::from_coords(i32::MAX, 0);
        assert_eq!(east.to_string(), "E2147483647S0");

        let pos = Position::new(west, 49, 49);
        assert_eq!(pos.world_x(), i32::MIN + 49);
        assert_eq!(pos.world_y(), i32::MIN + 49);
        assert_eq!(Position::new(east, 0, 0).world_x(), i32::MAX);
    }

    #[test]
    fn test_in_room_bounds() {
        let room = RoomName::from_coords(0, 0);
        assert!(Position::new(room, 0, 49).in_room_bounds());
        assert!(!Position::new(room, 50, 10).in_room_bounds());
        assert!(!Position::new(room, 10, 200).in_room_bounds());
    }

    #[test]
    fn test_world_coordinates() {
        let room: RoomName = "W0N0".parse().unwrap();
        let pos = Position::new(room, 49, 10);
        assert_eq!(pos.world_x(), -1);
        assert_eq!(pos.world_y(), -40);
    }

    #[test]
    fn test_serde_as_string() {
        let room: RoomName = "E2S3".parse().unwrap();
        let json = serde_json::to_string(&room).unwrap();
        assert_eq!(json, "\"E2S3\"");
        let back: RoomName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
        assert!(serde_json::from_str::<RoomName>("\"bogus\"").is_err());
    }
}
