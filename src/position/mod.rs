pub mod fen;

pub use fen::{FenParseError, SAMPLE_FENS, START_FEN};

use crate::core::*;

/******************************************\
|==========================================|
|                 Position                 |
|==========================================|
\******************************************/

/// A fully parsed FEN record.
///
/// The board is stored in FEN reading order (see [`Square`]). A position is only
/// ever produced whole by [`Position::from_fen`] and has no mutating API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; Square::NUM],

    stm: Colour,

    castle: Castling,

    enpassant: Option<Square>,

    halfmove_clock: u32,

    fullmove_number: u32,
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Position {
    fn default() -> Position {
        Position::from_fen(START_FEN).expect("the starting position FEN is well formed")
    }
}

impl Position {
    /// Blank slate the parser fills in before handing the position out
    fn empty() -> Position {
        Position {
            board: [None; Square::NUM],
            stm: Colour::White,
            castle: Castling::NONE,
            enpassant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Returns the piece on a square, if any
    #[inline]
    pub fn on(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    /// Returns the board slots in FEN reading order (a8 first)
    #[inline]
    pub fn board(&self) -> &[Option<Piece>; Square::NUM] {
        &self.board
    }

    /// Iterates over the occupied squares in board order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| self.on(sq).map(|piece| (sq, piece)))
    }

    /// Returns the side to move
    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.stm
    }

    /// Returns the castling rights
    #[inline]
    pub fn castling(&self) -> Castling {
        self.castle
    }

    /// Returns the en passant target square, if any
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.enpassant
    }

    /// Returns the half-move clock
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Returns the full-move number
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Debug view of the position: the board grid followed by the game state.
    /// This is not a FEN serialization.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{} |", rank)?;

            for file in File::iter() {
                let glyph = self
                    .on(Square::from_parts(file, rank))
                    .map_or(' ', Piece::fen_char);
                write!(f, " {} |", glyph)?;
            }

            writeln!(f)?;
        }

        writeln!(f, "Side to move: {}", self.stm)?;

        if self.castle == Castling::NONE {
            writeln!(f, "Castling: none")?;
        }
        for right in Castling::RIGHTS {
            if self.castle.has(right) {
                writeln!(f, "Castling: {}", right.describe())?;
            }
        }

        if let Some(square) = self.enpassant {
            writeln!(f, "En passant: {}", square)?;
        }

        writeln!(f, "Half-move clock: {}", self.halfmove_clock)?;
        writeln!(f, "Full-move number: {}", self.fullmove_number)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
