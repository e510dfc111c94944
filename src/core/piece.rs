use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn, Rook, Knight, Bishop, Queen, King,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - An occupant of a square: a piece type together with its colour.
/// - Empty squares are `None` in an `Option<Piece>` slot, so an empty square never carries a colour.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pt: PieceType,
    colour: Colour,
}

impl Piece {
    /// Number of distinct pieces (colour and type pairs)
    pub const NUM: usize = 12;
}

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

/// FEN letters of the white pieces, indexed by piece type
const PIECE_STR: &[u8; PieceType::NUM] = b"PRNBQK";

impl PieceType {
    /// Returns the uppercase FEN letter of the piece type
    pub const fn fen_char(self) -> char {
        PIECE_STR[self.index()] as char
    }

    /// Maps a FEN letter of either case to its piece type
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'R' => Some(PieceType::Rook),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl Piece {
    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        self.pt
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        self.colour
    }

    /// Combines a colour and piece type pair to create a piece
    pub const fn from_parts(colour: Colour, pt: PieceType) -> Self {
        Piece { pt, colour }
    }

    /// Decodes a FEN placement letter: uppercase is white, lowercase is black,
    /// so `'n'` is a black knight. Any other character is `InvalidChar`.
    pub const fn from_fen_char(c: char) -> Result<Self, ParsePieceError> {
        let Some(pt) = PieceType::from_fen_char(c) else {
            return Err(ParsePieceError::InvalidChar(c));
        };

        let colour = if c.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };

        Ok(Piece::from_parts(colour, pt))
    }

    /// Encodes the piece as its FEN placement letter
    pub const fn fen_char(self) -> char {
        let c = self.pt.fen_char();
        match self.colour {
            Colour::White => c,
            Colour::Black => c.to_ascii_lowercase(),
        }
    }

    /// Iterates over every piece, white pieces first
    pub fn iter() -> impl Iterator<Item = Self> {
        Colour::iter()
            .flat_map(|colour| PieceType::iter().map(move |pt| Piece::from_parts(colour, pt)))
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the piece character into a piece, with error checkings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_fen_char(c),
            _ => Err(ParsePieceError::InvalidLength(s.chars().count())),
        }
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of PRNBQK in either case")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
