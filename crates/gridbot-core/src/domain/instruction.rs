//! Route instructions and their parsing.
//!
//! A route is a string of single-character instruction symbols, one symbol
//! per command with no lookahead or escaping. The closed [`Instruction`] set
//! is the entire language; anything else is rejected here, at the parse
//! boundary, rather than deep inside the movement engine.
//!
//! Symbols are matched case-sensitively. Shells that accept lower-case input
//! (the CLI prompt loop) upper-case it before calling [`parse_route`].

use thiserror::Error;

/// Errors that can occur when parsing a route string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstructionError {
    /// The route contained no instructions at all.
    #[error("no instructions provided")]
    EmptyRoute,

    /// A character in the route is not a known instruction symbol.
    #[error("invalid instruction '{0}' (allowed: L, R, F)")]
    InvalidSymbol(char),
}

/// A single movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Turn 90° counter-clockwise (`L`). Position is unchanged.
    RotateLeft,
    /// Turn 90° clockwise (`R`). Position is unchanged.
    RotateRight,
    /// Advance one cell in the current heading (`F`), clamped at walls.
    MoveForward,
}

impl Instruction {
    /// Maps a route character to its instruction, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Self::RotateLeft),
            'R' => Some(Self::RotateRight),
            'F' => Some(Self::MoveForward),
            _ => None,
        }
    }

    /// The route character for this instruction.
    pub fn symbol(self) -> char {
        match self {
            Self::RotateLeft => 'L',
            Self::RotateRight => 'R',
            Self::MoveForward => 'F',
        }
    }
}

/// Parses a raw route string into a typed instruction sequence.
///
/// # Errors
///
/// Returns [`InstructionError::EmptyRoute`] for an empty string and
/// [`InstructionError::InvalidSymbol`] naming the first character outside
/// the instruction set.
pub fn parse_route(raw: &str) -> Result<Vec<Instruction>, InstructionError> {
    if raw.is_empty() {
        return Err(InstructionError::EmptyRoute);
    }

    raw.chars()
        .map(|symbol| {
            Instruction::from_symbol(symbol).ok_or(InstructionError::InvalidSymbol(symbol))
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
