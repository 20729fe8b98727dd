//! Rectangular room domain entity.
//!
//! A room is the bounded grid the robot moves inside: `width` columns by
//! `depth` rows. Cells are 0-indexed, so valid positions range over
//! `0..width` and `0..depth`; a coordinate equal to a dimension is already
//! outside the room.

use thiserror::Error;

/// Errors that can occur when defining a room.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    /// A room dimension was zero or negative.
    #[error("room {dimension} must be at least 1 (got {value})")]
    InvalidDimension {
        /// Which dimension was rejected: `"width"` or `"depth"`.
        dimension: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// A rectangular grid of `width` columns by `depth` rows.
///
/// [`Room::new`] is the only constructor and validates both dimensions, so
/// a zero- or negative-sized room never exists as a value. A room is built
/// once per request or CLI session from client input, is immutable
/// afterwards, and is owned by the session that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    /// Number of columns.
    pub width: i64,
    /// Number of rows.
    pub depth: i64,
}

impl Room {
    /// Creates a room after checking that both dimensions are positive.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::InvalidDimension`] if either dimension is less
    /// than 1.
    pub fn new(width: i64, depth: i64) -> Result<Self, RoomError> {
        Self::validate_size(width, depth)?;
        Ok(Self { width, depth })
    }

    /// Checks whether `width` and `depth` describe a valid room.
    ///
    /// Pure predicate with no side effects. Width is checked first, so a
    /// room invalid on both axes reports the width.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::InvalidDimension`] naming the offending
    /// dimension and its value.
    pub fn validate_size(width: i64, depth: i64) -> Result<(), RoomError> {
        if width < 1 {
            return Err(RoomError::InvalidDimension {
                dimension: "width",
                value: width,
            });
        }

        if depth < 1 {
            return Err(RoomError::InvalidDimension {
                dimension: "depth",
                value: depth,
            });
        }

        Ok(())
    }

    /// Returns `true` if the 0-indexed position lies strictly inside the room.
    pub fn contains(&self, width: i64, depth: i64) -> bool {
        (0..self.width).contains(&width) && (0..self.depth).contains(&depth)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
