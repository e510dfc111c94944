/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|                 Castling                 |
|==========================================|
\******************************************/

/// # Castling Representation
///
/// The four castling rights of a position, one bit each. A right that was
/// never granted is simply unset.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling(pub u8);

impl Default for Castling {
    fn default() -> Self {
        Castling::NONE
    }
}

crate::impl_bit_ops!(Castling);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Parses the active colour field of a FEN record ('w' or 'b', either case)
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'w' | 'W' => Some(Colour::White),
            'b' | 'B' => Some(Colour::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
        }
    }
}

impl Castling {
    // Atomic castling rights
    pub const WK: Castling = Castling(1);
    pub const WQ: Castling = Castling(2);
    pub const BK: Castling = Castling(4);
    pub const BQ: Castling = Castling(8);
    // All or nothing castling rights
    pub const ALL: Castling = Castling(15);
    pub const NONE: Castling = Castling(0);

    /// The atomic rights in `KQkq` order
    pub const RIGHTS: [Castling; 4] = [Castling::WK, Castling::WQ, Castling::BK, Castling::BQ];

    /// Helper function to check if a castling right has another castling right as a subset
    pub fn has(self, right: Castling) -> bool {
        self & right != Castling::NONE
    }

    /// Helper function to set castling rights
    pub fn set(&mut self, right: Castling) {
        *self |= right;
    }

    /// Maps one character of the FEN castling field (`K`, `Q`, `k`, `q`) to its right
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'K' => Some(Castling::WK),
            'Q' => Some(Castling::WQ),
            'k' => Some(Castling::BK),
            'q' => Some(Castling::BQ),
            _ => None,
        }
    }

    /// Human readable name of an atomic right, e.g. "White kingside"
    pub fn describe(self) -> &'static str {
        match self {
            Castling::WK => "White kingside",
            Castling::WQ => "White queenside",
            Castling::BK => "Black kingside",
            Castling::BQ => "Black queenside",
            _ => "mixed rights",
        }
    }
}

impl std::fmt::Display for Castling {
    /// Displays castling right in the `KQkq` format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Castling::NONE {
            return write!(f, "-");
        }

        for (right, c) in Castling::RIGHTS.into_iter().zip(['K', 'Q', 'k', 'q']) {
            if self.has(right) {
                write!(f, "{}", c)?;
            }
        }

        Ok(())
    }
}
