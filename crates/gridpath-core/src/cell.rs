//! The [`CellType`] type, the single semantic role of a grid cell.

use std::fmt;

use crate::error::EngineError;

/// The role of a single grid cell.
///
/// The discriminants are the persisted integer codes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellType {
    #[default]
    Empty = 0,
    Wall = 1,
    Start = 2,
    End = 3,
    Visited = 4,
    Path = 5,
}

impl CellType {
    /// All cell types, in code order.
    pub const ALL: [CellType; 6] = [
        Self::Empty,
        Self::Wall,
        Self::Start,
        Self::End,
        Self::Visited,
        Self::Path,
    ];

    /// The persisted integer code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a persisted integer code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::Wall),
            2 => Some(Self::Start),
            3 => Some(Self::End),
            4 => Some(Self::Visited),
            5 => Some(Self::Path),
            _ => None,
        }
    }

    /// Character used by the text grid format.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            'o' => Some(Self::Visited),
            '*' => Some(Self::Path),
            _ => None,
        }
    }

    /// Whether the cell blocks movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Whether the cell is the Start or End marker. Replay never overwrites these.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Whether the cell is a search mark left behind by a replay.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Path)
    }
}

impl TryFrom<u8> for CellType {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(EngineError::UnknownCellCode(code))
    }
}

impl From<CellType> for u8 {
    fn from(cell: CellType) -> u8 {
        cell.code()
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Start => "start",
            Self::End => "end",
            Self::Visited => "visited",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}
