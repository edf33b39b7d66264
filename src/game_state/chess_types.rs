//! Core shared types for the drop-phase placement engine.
//!
//! Side color, piece kind, pawn-vs-piece category, and light/dark square
//! shade, plus the square-index helpers and file/rank masks every placement
//! rule builds on. Square indexing is `0 == a1`, `7 == h1`, `63 == h8`.

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// The turn-cycle category this kind satisfies.
    ///
    /// Kings report `Piece` but never travel the drop path; the orchestrator
    /// rejects them before the category is consulted.
    #[inline]
    pub const fn category(self) -> PieceCategory {
        match self {
            PieceKind::Pawn => PieceCategory::Pawn,
            _ => PieceCategory::Piece,
        }
    }

    /// Lowercase role letter used in FEN and the command shell.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// What the turn cycle demands: a pawn drop or a non-pawn drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceCategory {
    Pawn,
    Piece,
}

/// Light/dark classification of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    /// Shade by file+rank parity; a1 is dark.
    #[inline]
    pub const fn of(square: Square) -> Self {
        let file = square_file(square);
        let rank = square_rank(square);
        if (file + rank) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Shade::Light => 0,
            Shade::Dark => 1,
        }
    }
}

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

pub const FILE_MASKS: [u64; 8] = generate_file_masks();
pub const RANK_MASKS: [u64; 8] = generate_rank_masks();

const fn generate_file_masks() -> [u64; 8] {
    let mut table = [0u64; 8];
    let mut file = 0usize;

    while file < 8 {
        let mut rank = 0usize;
        let mut mask = 0u64;
        while rank < 8 {
            mask |= 1u64 << (rank * 8 + file);
            rank += 1;
        }
        table[file] = mask;
        file += 1;
    }

    table
}

const fn generate_rank_masks() -> [u64; 8] {
    let mut table = [0u64; 8];
    let mut rank = 0usize;

    while rank < 8 {
        table[rank] = 0xFFu64 << (rank * 8);
        rank += 1;
    }

    table
}
