//! Text move notation.
//!
//! ```text
//! (0,2)->(1,2)      canonical form, produced by Display
//! (0,2)→(1,2)       arrow variant accepted on input
//! 0,2 1,2           bare pairs, accepted by parse_move_pair
//! ```

use std::str::FromStr;

use crate::{Coord, Move, NotationError};

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (from, to) = s
            .split_once("->")
            .or_else(|| s.split_once('→'))
            .ok_or_else(|| NotationError::MissingArrow(s.to_string()))?;
        Ok(Move::new(parse_coord(from)?, parse_coord(to)?))
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coord(s)
    }
}

/// Parse `(x,y)` or `x,y`.
pub fn parse_coord(s: &str) -> Result<Coord, NotationError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);
    let bad = || NotationError::BadCoordinate(trimmed.to_string());

    let (x, y) = inner.split_once(',').ok_or_else(bad)?;
    let x: u8 = x.trim().parse().map_err(|_| bad())?;
    let y: u8 = y.trim().parse().map_err(|_| bad())?;
    Coord::try_from((x, y))
}

/// Parse a move given either as notation or as two bare squares, `x,y x,y`.
pub fn parse_move_pair(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s.contains("->") || s.contains('→') {
        return s.parse();
    }
    let mut parts = s.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok(Move::new(parse_coord(from)?, parse_coord(to)?)),
        _ => Err(NotationError::MissingArrow(s.to_string())),
    }
}

/// Format a move sequence, space separated.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mov = Move::new(Coord::new(0, 2), Coord::new(1, 2));
        assert_eq!(mov.to_string(), "(0,2)->(1,2)");
    }

    #[test]
    fn test_parse_ascii_and_unicode_arrow() {
        let expected = Move::new(Coord::new(6, 2), Coord::new(6, 3));
        assert_eq!("(6,2)->(6,3)".parse::<Move>().unwrap(), expected);
        assert_eq!(" (6, 2) → (6, 3) ".parse::<Move>().unwrap(), expected);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("(0,0)(0,1)".parse::<Move>(), Err(NotationError::MissingArrow(_))));
        assert!(matches!("(a,0)->(0,1)".parse::<Move>(), Err(NotationError::BadCoordinate(_))));
        assert!(matches!("(0,0,1)->(0,1)".parse::<Move>(), Err(NotationError::BadCoordinate(_))));
        assert_eq!(
            "(0,0)->(7,1)".parse::<Move>(),
            Err(NotationError::OffBoard { x: 7, y: 1 })
        );
    }

    #[test]
    fn test_parse_coord_forms() {
        assert_eq!(parse_coord("(3,4)").unwrap(), Coord::new(3, 4));
        assert_eq!(parse_coord(" 3 , 4 ").unwrap(), Coord::new(3, 4));
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("300,4").is_err());
    }

    #[test]
    fn test_parse_move_pair() {
        let expected = Move::new(Coord::new(0, 2), Coord::new(1, 2));
        assert_eq!(parse_move_pair("0,2 1,2").unwrap(), expected);
        assert_eq!(parse_move_pair("(0,2) (1,2)").unwrap(), expected);
        assert_eq!(parse_move_pair("(0,2)->(1,2)").unwrap(), expected);
        assert!(parse_move_pair("0,2").is_err());
        assert!(parse_move_pair("0,2 1,2 2,2").is_err());
    }

    #[test]
    fn test_format_moves() {
        let moves = [
            Move::new(Coord::new(0, 2), Coord::new(1, 2)),
            Move::new(Coord::new(6, 6), Coord::new(6, 5)),
        ];
        assert_eq!(format_moves(&moves), "(0,2)->(1,2) (6,6)->(6,5)");
        assert_eq!(format_moves(&[]), "");
    }
}
