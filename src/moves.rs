//! Traits and reusable data structures for describing moves.

use std::str::FromStr;

use derive_more::Display;
use enum_iterator::Sequence;

pub trait CanReverse: Sized {
    fn reverse(&self) -> Self;
}

/// One of the four axes a Skewb corner pivots around, named for the "free" corner the axis
/// passes through (the fifth corner, opposite the fixed anchor at position 7, does not get its
/// own axis -- see the adjacency table in `crate::state`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence)]
pub enum Axis {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence)]
pub enum Turn {
    Cw,
    Ccw,
}

impl CanReverse for Turn {
    fn reverse(&self) -> Self {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Ccw => Turn::Cw,
        }
    }
}

/// A single elementary face turn, or the `Identity` sentinel used only by the BFS move-filter
/// (see `crate::search`) to mark "no move has been applied yet".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Sequence, Display)]
pub enum Move {
    #[display(fmt = "I")]
    Identity,
    #[display(fmt = "U")]
    U,
    #[display(fmt = "U'")]
    UPrime,
    #[display(fmt = "D")]
    D,
    #[display(fmt = "D'")]
    DPrime,
    #[display(fmt = "L")]
    L,
    #[display(fmt = "L'")]
    LPrime,
    #[display(fmt = "R")]
    R,
    #[display(fmt = "R'")]
    RPrime,
}

impl Move {
    /// The eight elementary face turns, excluding the `Identity` sentinel. This is the move set
    /// the search engine fans out over at each BFS step.
    pub const ELEMENTARY: [Move; 8] = [
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
        Move::L,
        Move::LPrime,
        Move::R,
        Move::RPrime,
    ];

    #[inline(always)]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Move::Identity => None,
            Move::U | Move::UPrime => Some(Axis::Up),
            Move::D | Move::DPrime => Some(Axis::Down),
            Move::L | Move::LPrime => Some(Axis::Left),
            Move::R | Move::RPrime => Some(Axis::Right),
        }
    }

    #[inline(always)]
    pub fn turn(self) -> Option<Turn> {
        match self {
            Move::Identity => None,
            Move::U | Move::D | Move::L | Move::R => Some(Turn::Cw),
            Move::UPrime | Move::DPrime | Move::LPrime | Move::RPrime => Some(Turn::Ccw),
        }
    }
}

impl CanReverse for Move {
    fn reverse(&self) -> Self {
        match self {
            Move::Identity => Move::Identity,
            Move::U => Move::UPrime,
            Move::UPrime => Move::U,
            Move::D => Move::DPrime,
            Move::DPrime => Move::D,
            Move::L => Move::LPrime,
            Move::LPrime => Move::L,
            Move::R => Move::RPrime,
            Move::RPrime => Move::R,
        }
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I" => Ok(Move::Identity),
            "U" => Ok(Move::U),
            "U'" => Ok(Move::UPrime),
            "D" => Ok(Move::D),
            "D'" => Ok(Move::DPrime),
            "L" => Ok(Move::L),
            "L'" => Ok(Move::LPrime),
            "R" => Ok(Move::R),
            "R'" => Ok(Move::RPrime),
            other => Err(format!("'{other}' is not a Skewb move (expected one of U U' D D' L L' R')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        for m in enum_iterator::all::<Move>() {
            assert_eq!(m.reverse().reverse(), m, "reverse should be its own inverse for {m:?}");
        }
    }

    #[test]
    fn reverse_round_trips_through_display_and_parse() {
        for m in Move::ELEMENTARY {
            let inv = m.reverse();
            let parsed: Move = inv.to_string().parse().unwrap();
            assert_eq!(parsed, inv);
        }
    }

    #[test]
    fn identity_reverses_to_itself() {
        assert_eq!(Move::Identity.reverse(), Move::Identity);
    }
}
