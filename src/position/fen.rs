use thiserror::Error;

use super::Position;
use crate::core::*;

/******************************************\
|==========================================|
|            Useful fen strings            |
|==========================================|
\******************************************/

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The starting position followed by the first moves of a Sicilian
pub const SAMPLE_FENS: [&str; 4] = [
    START_FEN,
    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
    "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
];

/******************************************\
|==========================================|
|                  Cursor                  |
|==========================================|
\******************************************/

/// Read position within one FEN record. `offset` counts characters, `pos` bytes.
struct Cursor<'a> {
    fen: &'a str,
    pos: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(fen: &'a str) -> Self {
        Cursor {
            fen,
            pos: 0,
            offset: 0,
        }
    }

    #[inline]
    fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.fen[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.offset += 1;
        Some(c)
    }

    fn next_char(&mut self) -> Result<char, FenParseError> {
        let offset = self.offset;
        self.bump()
            .ok_or(FenParseError::UnexpectedEndOfInput { offset })
    }

    fn expect_space(&mut self) -> Result<(), FenParseError> {
        let offset = self.offset;
        match self.bump() {
            Some(' ') => Ok(()),
            Some(ch) => Err(FenParseError::ExpectedSpace { ch, offset }),
            None => Err(FenParseError::UnexpectedEndOfInput { offset }),
        }
    }

    /// Consumes up to (not including) the next space, returning the start offset and the text
    fn take_field(&mut self) -> (usize, &'a str) {
        let (start_pos, start) = (self.pos, self.offset);
        while self.peek().is_some_and(|c| c != ' ') {
            self.bump();
        }
        (start, &self.fen[start_pos..self.pos])
    }

    /// Consumes everything left in the record
    fn take_rest(&mut self) -> (usize, &'a str) {
        let (start_pos, start) = (self.pos, self.offset);
        while self.bump().is_some() {}
        (start, &self.fen[start_pos..])
    }

    /// Fails at the current offset when a field turned out empty, telling end of input apart
    fn require_content(&self, field: &str, err: FenParseError) -> Result<(), FenParseError> {
        match (field.is_empty(), self.peek()) {
            (false, _) => Ok(()),
            (true, None) => Err(FenParseError::UnexpectedEndOfInput {
                offset: self.offset,
            }),
            (true, Some(_)) => Err(err),
        }
    }
}

/******************************************\
|==========================================|
|               Parse Fen                  |
|==========================================|
\******************************************/

impl Position {
    /// Parses a FEN record in a single left to right pass.
    ///
    /// Either every field is valid and a complete position is returned, or the
    /// first violation is reported with its character offset.
    pub fn from_fen(fen: &str) -> Result<Self, FenParseError> {
        let mut cursor = Cursor::new(fen);
        let mut pos = Position::empty();

        pos.parse_piece_placement(&mut cursor)?;
        cursor.expect_space()?;

        pos.stm = Self::parse_side_to_move(&mut cursor)?;
        cursor.expect_space()?;

        pos.castle = Self::parse_castling(&mut cursor)?;
        cursor.expect_space()?;

        pos.enpassant = Self::parse_enpassant(&mut cursor)?;
        cursor.expect_space()?;

        pos.halfmove_clock = Self::parse_halfmove_clock(&mut cursor)?;
        cursor.expect_space()?;

        pos.fullmove_number = Self::parse_fullmove_number(&mut cursor)?;

        Ok(pos)
    }

    fn parse_piece_placement(&mut self, cursor: &mut Cursor) -> Result<(), FenParseError> {
        let mut row: usize = 0;
        let mut file: usize = 0;

        loop {
            let offset = cursor.offset();

            let c = match cursor.peek() {
                None => return Err(FenParseError::UnexpectedEndOfInput { offset }),
                Some(' ') => break,
                Some(c) => c,
            };
            cursor.bump();

            match c {
                '/' => {
                    if file != File::NUM {
                        return Err(FenParseError::InvalidRankLength {
                            rank: Rank::NUM - row,
                            files: file,
                            offset,
                        });
                    }
                    if row + 1 == Rank::NUM {
                        return Err(FenParseError::TooManyRanks { offset });
                    }
                    row += 1;
                    file = 0;
                }

                '1'..='8' => {
                    let skip = c as usize - '0' as usize;
                    if file + skip > File::NUM {
                        return Err(FenParseError::InvalidRankLength {
                            rank: Rank::NUM - row,
                            files: file + skip,
                            offset,
                        });
                    }
                    file += skip;
                }

                piece_char if piece_char.is_alphabetic() => {
                    let piece = Piece::from_fen_char(piece_char)
                        .map_err(|_| FenParseError::InvalidPieceChar { ch: piece_char, offset })?;

                    if file >= File::NUM {
                        return Err(FenParseError::InvalidRankLength {
                            rank: Rank::NUM - row,
                            files: file + 1,
                            offset,
                        });
                    }

                    self.board[row * File::NUM + file] = Some(piece);
                    file += 1;
                }

                ch => return Err(FenParseError::InvalidPlacementChar { ch, offset }),
            }
        }

        let squares = row * File::NUM + file;
        if squares != Square::NUM {
            return Err(FenParseError::IncompletePlacement {
                squares,
                offset: cursor.offset(),
            });
        }

        Ok(())
    }

    fn parse_side_to_move(cursor: &mut Cursor) -> Result<Colour, FenParseError> {
        let offset = cursor.offset();
        let ch = cursor.next_char()?;
        Colour::from_fen_char(ch).ok_or(FenParseError::InvalidActiveColor { ch, offset })
    }

    fn parse_castling(cursor: &mut Cursor) -> Result<Castling, FenParseError> {
        let mut castle = Castling::NONE;
        let mut dash = false;
        let mut count = 0;

        while let Some(c) = cursor.peek().filter(|&c| c != ' ') {
            let offset = cursor.offset();
            cursor.bump();

            match c {
                '-' if count == 0 => dash = true,
                '-' if castle != Castling::NONE => {
                    return Err(FenParseError::MixedCastlingDash { offset });
                }
                _ if dash && Castling::from_fen_char(c).is_some() => {
                    return Err(FenParseError::MixedCastlingDash { offset });
                }
                _ => {
                    let right = Castling::from_fen_char(c)
                        .ok_or(FenParseError::InvalidCastlingChar { ch: c, offset })?;
                    castle.set(right);
                }
            }

            count += 1;
        }

        if count == 0 {
            let offset = cursor.offset();
            return Err(match cursor.peek() {
                Some(ch) => FenParseError::InvalidCastlingChar { ch, offset },
                None => FenParseError::UnexpectedEndOfInput { offset },
            });
        }

        Ok(castle)
    }

    fn parse_enpassant(cursor: &mut Cursor) -> Result<Option<Square>, FenParseError> {
        let (start, field) = cursor.take_field();
        let invalid = |offset: usize| FenParseError::InvalidEnPassant {
            found: field.to_string(),
            offset,
        };

        cursor.require_content(field, invalid(start))?;

        if field == "-" {
            return Ok(None);
        }

        let mut chars = field.chars();

        let file = chars
            .next()
            .and_then(|c| File::from_char(c.to_ascii_lowercase()))
            .ok_or_else(|| invalid(start))?;

        let rank = chars
            .next()
            .and_then(Rank::from_char)
            .ok_or_else(|| invalid(start + 1))?;

        if chars.next().is_some() {
            return Err(invalid(start + 2));
        }

        Ok(Some(Square::from_parts(file, rank)))
    }

    fn parse_halfmove_clock(cursor: &mut Cursor) -> Result<u32, FenParseError> {
        let (offset, token) = cursor.take_field();
        let invalid = FenParseError::InvalidHalfMoveClock {
            found: token.to_string(),
            offset,
        };

        cursor.require_content(token, invalid.clone())?;
        parse_counter(token).ok_or(invalid)
    }

    fn parse_fullmove_number(cursor: &mut Cursor) -> Result<u32, FenParseError> {
        let (offset, token) = cursor.take_rest();
        if token.is_empty() {
            return Err(FenParseError::UnexpectedEndOfInput { offset });
        }

        parse_counter(token)
            .filter(|&n| n > 0)
            .ok_or_else(|| FenParseError::InvalidFullMoveNumber {
                found: token.to_string(),
                offset,
            })
    }
}

/// Parses a plain run of ASCII digits (no sign, no whitespace)
fn parse_counter(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

impl std::str::FromStr for Position {
    type Err = FenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

/******************************************\
|==========================================|
|             Fen Parse Errors             |
|==========================================|
\******************************************/

/// Represents errors that can occur during the parsing of a Forsyth–Edwards Notation (FEN) string.
///
/// Every variant carries the 0-based character offset in the record where the
/// problem was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    #[error("Invalid character in FEN piece placement: '{ch}' at index {offset}")]
    InvalidPlacementChar { ch: char, offset: usize },

    #[error("Invalid piece letter in FEN piece placement: '{ch}' at index {offset}")]
    InvalidPieceChar { ch: char, offset: usize },

    #[error("Rank {rank} spans {files} files (expected 8) at index {offset}")]
    InvalidRankLength {
        rank: usize,
        files: usize,
        offset: usize,
    },

    #[error("Too many rank separators ('/') at index {offset}, expected 8 ranks")]
    TooManyRanks { offset: usize },

    #[error("Piece placement describes {squares} squares (expected 64), ending at index {offset}")]
    IncompletePlacement { squares: usize, offset: usize },

    #[error("Invalid side to move in FEN: '{ch}' at index {offset}, expected 'w' or 'b'")]
    InvalidActiveColor { ch: char, offset: usize },

    #[error("Invalid character in FEN castling availability: '{ch}' at index {offset}")]
    InvalidCastlingChar { ch: char, offset: usize },

    #[error("Castling availability mixes '-' with castling rights at index {offset}")]
    MixedCastlingDash { offset: usize },

    #[error("Invalid en passant target square in FEN: '{found}' at index {offset}")]
    InvalidEnPassant { found: String, offset: usize },

    #[error("Invalid halfmove clock value in FEN: '{found}' at index {offset}")]
    InvalidHalfMoveClock { found: String, offset: usize },

    #[error("Invalid fullmove number value in FEN: '{found}' at index {offset}")]
    InvalidFullMoveNumber { found: String, offset: usize },

    #[error("Expected a space between FEN fields, found '{ch}' at index {offset}")]
    ExpectedSpace { ch: char, offset: usize },

    #[error("FEN string ended unexpectedly at index {offset}")]
    UnexpectedEndOfInput { offset: usize },
}

impl FenParseError {
    /// Character offset in the FEN record the error points at
    pub fn offset(&self) -> usize {
        use FenParseError::*;
        match *self {
            InvalidPlacementChar { offset, .. }
            | InvalidPieceChar { offset, .. }
            | InvalidRankLength { offset, .. }
            | TooManyRanks { offset }
            | IncompletePlacement { offset, .. }
            | InvalidActiveColor { offset, .. }
            | InvalidCastlingChar { offset, .. }
            | MixedCastlingDash { offset }
            | InvalidEnPassant { offset, .. }
            | InvalidHalfMoveClock { offset, .. }
            | InvalidFullMoveNumber { offset, .. }
            | ExpectedSpace { offset, .. }
            | UnexpectedEndOfInput { offset } => offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    fn fen_with(rest: &str) -> String {
        format!("{BOARD} {rest}")
    }

    fn piece(colour: Colour, pt: PieceType) -> Option<Piece> {
        Some(Piece::from_parts(colour, pt))
    }

    #[test]
    fn test_parse_start_fen() {
        let pos = Position::from_fen(START_FEN).unwrap();

        assert_eq!(pos.on(Square::A1), piece(Colour::White, PieceType::Rook));
        assert_eq!(pos.on(Square::E1), piece(Colour::White, PieceType::King));
        assert_eq!(pos.on(Square::H8), piece(Colour::Black, PieceType::Rook));
        assert_eq!(pos.on(Square::D8), piece(Colour::Black, PieceType::Queen));
        assert_eq!(pos.on(Square::E4), None);
        assert_eq!(pos.side_to_move(), Colour::White);
        assert_eq!(pos.castling(), Castling::ALL);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
    }

    #[test]
    fn test_start_fen_back_ranks_mirror() {
        let pos = Position::from_fen(START_FEN).unwrap();
        for file in File::iter() {
            for (white_rank, black_rank) in [(Rank::Rank1, Rank::Rank8), (Rank::Rank2, Rank::Rank7)] {
                let white = pos.on(Square::from_parts(file, white_rank)).unwrap();
                let black = pos.on(Square::from_parts(file, black_rank)).unwrap();
                assert_eq!(white.colour(), Colour::White);
                assert_eq!(black.colour(), Colour::Black);
                assert_eq!(white.pt(), black.pt());
            }
        }
        for rank in [Rank::Rank3, Rank::Rank4, Rank::Rank5, Rank::Rank6] {
            assert!(File::iter().all(|file| pos.on(Square::from_parts(file, rank)).is_none()));
        }
    }

    #[test]
    fn test_parse_sample_fens() {
        for fen in SAMPLE_FENS {
            assert!(Position::from_fen(fen).is_ok(), "{fen}");
        }

        let pos = Position::from_fen(SAMPLE_FENS[3]).unwrap();
        assert_eq!(pos.on(Square::F3), piece(Colour::White, PieceType::Knight));
        assert_eq!(pos.on(Square::G1), None);
        assert_eq!(pos.on(Square::C5), piece(Colour::Black, PieceType::Pawn));
        assert_eq!(pos.side_to_move(), Colour::Black);
        assert_eq!(pos.halfmove_clock(), 1);
        assert_eq!(pos.fullmove_number(), 2);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        assert_eq!(Position::from_fen(fen), Position::from_fen(fen));
        assert_eq!(fen.parse::<Position>(), Position::from_fen(fen));
    }

    #[test]
    fn test_enpassant_square() {
        let pos = Position::from_fen(&fen_with("w KQkq e3 0 1")).unwrap();
        assert_eq!(pos.en_passant(), Some(Square::E3));
        assert_eq!(pos.en_passant().map(|sq| sq.index()), Some(44));

        let pos = Position::from_fen(&fen_with("w KQkq C6 0 2")).unwrap();
        assert_eq!(pos.en_passant(), Some(Square::C6));
    }

    #[test]
    fn test_uppercase_side_to_move() {
        let pos = Position::from_fen(&fen_with("B KQkq - 0 1")).unwrap();
        assert_eq!(pos.side_to_move(), Colour::Black);
        let pos = Position::from_fen(&fen_with("W KQkq - 0 1")).unwrap();
        assert_eq!(pos.side_to_move(), Colour::White);
    }

    #[test]
    fn test_castling_subsets() {
        let pos = Position::from_fen(&fen_with("w - - 0 1")).unwrap();
        assert_eq!(pos.castling(), Castling::NONE);

        let pos = Position::from_fen(&fen_with("w Kq - 0 1")).unwrap();
        assert_eq!(pos.castling(), Castling::WK | Castling::BQ);

        let pos = Position::from_fen(&fen_with("w KKqk - 0 1")).unwrap();
        assert_eq!(pos.castling(), Castling::WK | Castling::BK | Castling::BQ);
    }

    #[test]
    fn test_large_counters() {
        let pos = Position::from_fen(&fen_with("w KQkq - 100 300")).unwrap();
        assert_eq!(pos.halfmove_clock(), 100);
        assert_eq!(pos.fullmove_number(), 300);
    }

    #[test]
    fn test_fen_invalid_piece() {
        let fen = "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidPieceChar { ch: 'x', offset: 13 })
        );
    }

    #[test]
    fn test_fen_invalid_placement_char() {
        let fen = "rnbqkbnr/pppp*ppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidPlacementChar { ch: '*', offset: 13 })
        );
    }

    #[test]
    fn test_fen_invalid_skip_digits() {
        let fen = "rnbqkbnr/pppp0ppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidPlacementChar { ch: '0', offset: 13 })
        );
        let fen = "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidPlacementChar { ch: '9', offset: 18 })
        );
    }

    #[test]
    fn test_fen_rank_too_short() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidRankLength {
                rank: 2,
                files: 7,
                offset: 33,
            })
        );
    }

    #[test]
    fn test_fen_rank_too_long() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPPP/RNBQKBNR w KQkq - 0 1";
        assert!(matches!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidRankLength { rank: 2, files: 9, .. })
        ));

        let fen = "rnbqkbnr/pppppppp/8/8/8/8/P6P1/RNBQKBNR w KQkq - 0 1";
        assert!(matches!(
            Position::from_fen(fen),
            Err(FenParseError::InvalidRankLength { rank: 2, files: 9, .. })
        ));
    }

    #[test]
    fn test_fen_short_final_rank() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::IncompletePlacement {
                squares: 63,
                offset: 42,
            })
        );
    }

    #[test]
    fn test_fen_too_few_ranks() {
        let fen = "8/8/8/8/8/8/8 w KQkq - 0 1";
        assert!(matches!(
            Position::from_fen(fen),
            Err(FenParseError::IncompletePlacement { squares: 56, .. })
        ));

        assert_eq!(
            Position::from_fen(" w - - 0 1"),
            Err(FenParseError::IncompletePlacement {
                squares: 0,
                offset: 0,
            })
        );
    }

    #[test]
    fn test_fen_too_many_ranks() {
        let fen = "8/8/8/8/8/8/8/8/8 w KQkq - 0 1";
        assert_eq!(
            Position::from_fen(fen),
            Err(FenParseError::TooManyRanks { offset: 15 })
        );
    }

    #[test]
    fn test_fen_placement_runs_off_end() {
        assert_eq!(
            Position::from_fen(BOARD),
            Err(FenParseError::UnexpectedEndOfInput { offset: 43 })
        );
        assert_eq!(
            Position::from_fen(""),
            Err(FenParseError::UnexpectedEndOfInput { offset: 0 })
        );
    }

    #[test]
    fn test_fen_invalid_side() {
        let fen = fen_with("x KQkq - 0 1");
        let offset = fen.find('x').unwrap();
        assert_eq!(
            Position::from_fen(&fen),
            Err(FenParseError::InvalidActiveColor { ch: 'x', offset })
        );
        assert_eq!(offset, 44);
    }

    #[test]
    fn test_fen_side_not_followed_by_space() {
        assert_eq!(
            Position::from_fen(&fen_with("wb KQkq - 0 1")),
            Err(FenParseError::ExpectedSpace { ch: 'b', offset: 45 })
        );
    }

    #[test]
    fn test_fen_double_space() {
        assert_eq!(
            Position::from_fen(&fen_with(" w KQkq - 0 1")),
            Err(FenParseError::InvalidActiveColor { ch: ' ', offset: 44 })
        );
        assert_eq!(
            Position::from_fen(&fen_with("w  KQkq - 0 1")),
            Err(FenParseError::InvalidCastlingChar { ch: ' ', offset: 46 })
        );
    }

    #[test]
    fn test_fen_invalid_castling() {
        assert_eq!(
            Position::from_fen(&fen_with("w KQXkq - 0 1")),
            Err(FenParseError::InvalidCastlingChar { ch: 'X', offset: 48 })
        );
        assert_eq!(
            Position::from_fen(&fen_with("w Q1 - 0 1")),
            Err(FenParseError::InvalidCastlingChar { ch: '1', offset: 47 })
        );
        assert_eq!(
            Position::from_fen(&fen_with("w -- - 0 1")),
            Err(FenParseError::InvalidCastlingChar { ch: '-', offset: 47 })
        );
    }

    #[test]
    fn test_fen_mixed_castling_dash() {
        assert_eq!(
            Position::from_fen(&fen_with("w K-q - 0 1")),
            Err(FenParseError::MixedCastlingDash { offset: 47 })
        );
        assert_eq!(
            Position::from_fen(&fen_with("w -K - 0 1")),
            Err(FenParseError::MixedCastlingDash { offset: 47 })
        );
    }

    #[test]
    fn test_fen_invalid_enpassant() {
        for (field, offset) in [("e9", 52), ("i3", 51), ("zz", 51), ("3e", 51), ("e", 52), ("e3x", 53)] {
            assert_eq!(
                Position::from_fen(&fen_with(&format!("w KQkq {field} 0 1"))),
                Err(FenParseError::InvalidEnPassant {
                    found: field.to_string(),
                    offset,
                }),
                "{field}"
            );
        }
    }

    #[test]
    fn test_fen_truncated_enpassant_at_end() {
        assert_eq!(
            Position::from_fen(&fen_with("w KQkq e")),
            Err(FenParseError::InvalidEnPassant {
                found: "e".to_string(),
                offset: 52,
            })
        );
        assert_eq!(
            Position::from_fen(&fen_with("w KQkq ")),
            Err(FenParseError::UnexpectedEndOfInput { offset: 51 })
        );
    }

    #[test]
    fn test_fen_large_counters() {
        let pos = Position::from_fen(&fen_with("w KQkq - 70000 70000")).unwrap();
        assert_eq!(pos.halfmove_clock(), 70_000);
        assert_eq!(pos.fullmove_number(), 70_000);

        let pos = Position::from_fen(&fen_with("w KQkq - 4294967295 4294967295")).unwrap();
        assert_eq!(pos.halfmove_clock(), u32::MAX);
        assert_eq!(pos.fullmove_number(), u32::MAX);

        assert_eq!(
            Position::from_fen(&fen_with("w KQkq - 0 4294967296")),
            Err(FenParseError::InvalidFullMoveNumber {
                found: "4294967296".to_string(),
                offset: 55,
            })
        );
    }

    #[test]
    fn test_fen_invalid_halfmove() {
        for field in ["fifty", "-1", "+1", "4294967296", "1.5"] {
            assert_eq!(
                Position::from_fen(&fen_with(&format!("w KQkq - {field} 1"))),
                Err(FenParseError::InvalidHalfMoveClock {
                    found: field.to_string(),
                    offset: 53,
                })
            );
        }
        assert_eq!(
            Position::from_fen(&fen_with("w KQkq -  1")),
            Err(FenParseError::InvalidHalfMoveClock {
                found: String::new(),
                offset: 53,
            })
        );
    }

    #[test]
    fn test_fen_invalid_fullmove() {
        for field in ["zero", "0", "-5", "1 extra", "1 "] {
            assert_eq!(
                Position::from_fen(&fen_with(&format!("w KQkq - 0 {field}"))),
                Err(FenParseError::InvalidFullMoveNumber {
                    found: field.to_string(),
                    offset: 55,
                })
            );
        }
    }

    #[test]
    fn test_fen_missing_fullmove() {
        let fen = fen_with("w KQkq - 0");
        assert_eq!(
            Position::from_fen(&fen),
            Err(FenParseError::UnexpectedEndOfInput { offset: fen.len() })
        );
        let fen = fen_with("w KQkq - 0 ");
        assert_eq!(
            Position::from_fen(&fen),
            Err(FenParseError::UnexpectedEndOfInput { offset: fen.len() })
        );
    }

    #[test]
    fn test_offsets_count_characters() {
        let fen = "rnbqkbnr/pppépppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let err = Position::from_fen(fen).unwrap_err();
        assert_eq!(err, FenParseError::InvalidPieceChar { ch: 'é', offset: 12 });
        assert_eq!(err.offset(), 12);
    }

    #[test]
    fn test_error_messages() {
        let err = Position::from_fen(&fen_with("x KQkq - 0 1")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid side to move in FEN: 'x' at index 44, expected 'w' or 'b'"
        );
        assert_eq!(err.offset(), 44);

        let err = Position::from_fen("8/8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert!(err.to_string().contains("Too many rank separators"));
    }
}
