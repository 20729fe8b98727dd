//! Robot state and the movement engine.
//!
//! The robot is a point on the grid with a position and a compass heading.
//! The movement engine walks an instruction route symbol by symbol, rotating
//! the heading through the fixed cycle `[N, E, S, W]` and translating the
//! position for forward steps. Depth grows to the south: row 0 is the north
//! wall, so heading north decrements depth and heading south increments it.
//!
//! Forward motion at a wall is clamped to a no-op, never an error; a robot
//! driven into a corner simply stays there until a rotation frees it.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::domain::instruction::Instruction;
use crate::domain::room::Room;

/// The four headings, in rotation order.
///
/// Rotating right steps forward through this cycle and rotating left steps
/// backward, wrapping at both ends: West follows North when rotating left,
/// and North follows West when rotating right.
const ORIENTATION_CYCLE: [Orientation; 4] = [
    Orientation::North,
    Orientation::East,
    Orientation::South,
    Orientation::West,
];

/// Errors that can occur when validating or moving a robot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RobotError {
    /// A starting coordinate was negative.
    #[error("start {axis} position cannot be negative (got {value})")]
    NegativeCoordinate {
        /// Which axis was rejected: `"width"` or `"depth"`.
        axis: &'static str,
        /// The rejected coordinate.
        value: i64,
    },

    /// The starting heading string was empty.
    #[error("heading must not be empty")]
    EmptyHeading,

    /// The starting heading was not one of the four known symbols.
    #[error("invalid heading '{0}' (allowed: N, E, S, W)")]
    InvalidHeading(String),

    /// The starting position lies on or beyond a room edge.
    ///
    /// The grid is 0-indexed, so a position equal to a room dimension is
    /// already outside it.
    #[error("start {axis} position ({position}) must be less than the room {axis} ({limit})")]
    OutOfBounds {
        /// Which axis violated the bound: `"width"` or `"depth"`.
        axis: &'static str,
        /// The requested starting coordinate.
        position: i64,
        /// The room dimension it must stay below.
        limit: i64,
    },

    /// A route symbol did not map to any instruction.
    ///
    /// Instructions executed before the offending symbol are **not** rolled
    /// back; the robot keeps its partial progress.
    #[error("unknown instruction '{0}'")]
    UnknownInstruction(char),
}

// ── Orientation ───────────────────────────────────────────────────────────────

/// A compass heading.
///
/// Serialized as the single letters `"N"`, `"E"`, `"S"`, `"W"`, the form
/// used in request and report bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// Parses a heading symbol as sent by clients.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::EmptyHeading`] for an empty string and
    /// [`RobotError::InvalidHeading`] for anything outside `N`/`E`/`S`/`W`.
    pub fn parse(raw: &str) -> Result<Self, RobotError> {
        match raw {
            "" => Err(RobotError::EmptyHeading),
            "N" => Ok(Self::North),
            "E" => Ok(Self::East),
            "S" => Ok(Self::South),
            "W" => Ok(Self::West),
            other => Err(RobotError::InvalidHeading(other.to_string())),
        }
    }

    /// The single-letter symbol for this heading.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }

    /// Position of this heading within [`ORIENTATION_CYCLE`].
    ///
    /// Derived from the canonical heading on every call; the index is never
    /// stored, so it can never go stale.
    fn cycle_index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The heading one rotation step counter-clockwise.
    pub fn rotated_left(self) -> Self {
        let len = ORIENTATION_CYCLE.len();
        ORIENTATION_CYCLE[(self.cycle_index() + len - 1) % len]
    }

    /// The heading one rotation step clockwise.
    pub fn rotated_right(self) -> Self {
        ORIENTATION_CYCLE[(self.cycle_index() + 1) % ORIENTATION_CYCLE.len()]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ── Robot ─────────────────────────────────────────────────────────────────────

/// A point robot on the grid.
///
/// Constructed from validated starting values, mutated in place by
/// [`Robot::follow_route`], and serialized as the final report:
/// `{"width":1,"depth":3,"orientation":"N"}`. Each robot is owned by exactly
/// one request or CLI session; no state survives across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robot {
    /// 0-indexed column.
    pub width: i64,
    /// 0-indexed row. Row 0 is the north wall.
    pub depth: i64,
    /// Current heading.
    pub orientation: Orientation,
}

impl Robot {
    /// Creates a robot from already-validated parts.
    ///
    /// Use [`Robot::validate_within`] and [`Robot::validate_start`] on the
    /// raw client values first.
    pub fn new(width: i64, depth: i64, orientation: Orientation) -> Self {
        Self {
            width,
            depth,
            orientation,
        }
    }

    /// Validates a requested starting state and parses the heading.
    ///
    /// Checks, in order: negative width, negative depth, empty heading,
    /// unknown heading. Returns the parsed [`Orientation`] on success so the
    /// caller can construct the robot from validated parts.
    ///
    /// Bounds against the room are the caller's job and are checked
    /// separately (and first) via [`Robot::validate_within`].
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::NegativeCoordinate`], [`RobotError::EmptyHeading`],
    /// or [`RobotError::InvalidHeading`].
    pub fn validate_start(width: i64, depth: i64, heading: &str) -> Result<Orientation, RobotError> {
        if width < 0 {
            return Err(RobotError::NegativeCoordinate {
                axis: "width",
                value: width,
            });
        }

        if depth < 0 {
            return Err(RobotError::NegativeCoordinate {
                axis: "depth",
                value: depth,
            });
        }

        Orientation::parse(heading)
    }

    /// Checks a requested starting position against the room bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::OutOfBounds`] when `width >= room.width` or
    /// `depth >= room.depth`; width is checked first.
    pub fn validate_within(width: i64, depth: i64, room: &Room) -> Result<(), RobotError> {
        if width >= room.width {
            return Err(RobotError::OutOfBounds {
                axis: "width",
                position: width,
                limit: room.width,
            });
        }

        if depth >= room.depth {
            return Err(RobotError::OutOfBounds {
                axis: "depth",
                position: depth,
                limit: room.depth,
            });
        }

        Ok(())
    }

    /// Applies a route of instruction symbols in order, mutating the robot
    /// in place.
    ///
    /// Rotations step the heading through the fixed cycle; `F` advances one
    /// cell in the current heading, clamped at the room edges. On success the
    /// robot reflects the cumulative effect of every instruction.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::UnknownInstruction`] at the first symbol outside
    /// the instruction set. The route stops there and instructions already
    /// executed are not rolled back, so the robot keeps its partial progress.
    /// Shells validate the route up front with
    /// [`parse_route`](crate::domain::instruction::parse_route), which makes
    /// this unreachable on the normal path.
    pub fn follow_route(
        &mut self,
        route: &str,
        width_limit: i64,
        depth_limit: i64,
    ) -> Result<(), RobotError> {
        for symbol in route.chars() {
            match Instruction::from_symbol(symbol) {
                Some(Instruction::RotateLeft) => {
                    self.orientation = self.orientation.rotated_left();
                }
                Some(Instruction::RotateRight) => {
                    self.orientation = self.orientation.rotated_right();
                }
                Some(Instruction::MoveForward) => self.step_forward(width_limit, depth_limit),
                None => return Err(RobotError::UnknownInstruction(symbol)),
            }
        }

        Ok(())
    }

    /// Moves one cell in the current heading, clamped at the room edges.
    fn step_forward(&mut self, width_limit: i64, depth_limit: i64) {
        match self.orientation {
            Orientation::North => {
                if self.depth > 0 {
                    self.depth -= 1;
                }
            }
            Orientation::South => {
                if self.depth < depth_limit - 1 {
                    self.depth += 1;
                }
            }
            Orientation::West => {
                if self.width > 0 {
                    self.width -= 1;
                }
            }
            Orientation::East => {
                if self.width < width_limit - 1 {
                    self.width += 1;
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn room_5x5() -> Room {
        Room::new(5, 5).unwrap()
    }

    // ── Orientation ───────────────────────────────────────────────────────────

    #[test]
    fn test_parse_accepts_the_four_headings() {
        assert_eq!(Orientation::parse("N"), Ok(Orientation::North));
        assert_eq!(Orientation::parse("E"), Ok(Orientation::East));
        assert_eq!(Orientation::parse("S"), Ok(Orientation::South));
        assert_eq!(Orientation::parse("W"), Ok(Orientation::West));
    }

    #[test]
    fn test_parse_rejects_empty_heading() {
        assert_eq!(Orientation::parse(""), Err(RobotError::EmptyHeading));
    }

    #[test]
    fn test_parse_rejects_unknown_heading_and_lists_allowed_set() {
        let err = Orientation::parse("Q").unwrap_err();

        assert_eq!(err, RobotError::InvalidHeading("Q".to_string()));
        let msg = err.to_string();
        for allowed in ["N", "E", "S", "W"] {
            assert!(msg.contains(allowed), "message must list '{allowed}': {msg}");
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Lower-case input is the shell's problem, not the domain's.
        assert!(Orientation::parse("n").is_err());
    }

    #[test]
    fn test_rotating_right_steps_through_the_cycle() {
        let mut heading = Orientation::North;
        let mut seen = Vec::new();

        for _ in 0..4 {
            heading = heading.rotated_right();
            seen.push(heading);
        }

        assert_eq!(
            seen,
            vec![
                Orientation::East,
                Orientation::South,
                Orientation::West,
                Orientation::North,
            ]
        );
    }

    #[test]
    fn test_rotating_left_wraps_from_north_to_west() {
        assert_eq!(Orientation::North.rotated_left(), Orientation::West);
    }

    #[test]
    fn test_four_left_rotations_return_to_start() {
        let mut heading = Orientation::North;
        for _ in 0..4 {
            heading = heading.rotated_left();
        }

        assert_eq!(heading, Orientation::North);
    }

    #[test]
    fn test_orientation_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Orientation::North).unwrap(), "\"N\"");
        assert_eq!(serde_json::to_string(&Orientation::West).unwrap(), "\"W\"");
    }

    // ── Starting-state validation ─────────────────────────────────────────────

    #[test]
    fn test_validate_start_accepts_valid_values() {
        let orientation = Robot::validate_start(1, 2, "N").unwrap();

        assert_eq!(orientation, Orientation::North);
    }

    #[test]
    fn test_validate_start_rejects_negative_width() {
        let result = Robot::validate_start(-1, 2, "N");

        assert_eq!(
            result,
            Err(RobotError::NegativeCoordinate {
                axis: "width",
                value: -1,
            })
        );
    }

    #[test]
    fn test_validate_start_rejects_negative_depth() {
        let result = Robot::validate_start(1, -2, "N");

        assert_eq!(
            result,
            Err(RobotError::NegativeCoordinate {
                axis: "depth",
                value: -2,
            })
        );
    }

    #[test]
    fn test_validate_start_checks_coordinates_before_heading() {
        // Both a negative coordinate and a bad heading: the coordinate wins.
        let result = Robot::validate_start(-1, 0, "Q");

        assert!(matches!(
            result,
            Err(RobotError::NegativeCoordinate { axis: "width", .. })
        ));
    }

    #[test]
    fn test_validate_within_accepts_interior_positions() {
        let room = room_5x5();

        assert!(Robot::validate_within(0, 0, &room).is_ok());
        assert!(Robot::validate_within(4, 4, &room).is_ok());
    }

    #[test]
    fn test_validate_within_rejects_width_equal_to_room_width() {
        // The far edge is outside a 0-indexed, size-bounded grid.
        let result = Robot::validate_within(5, 0, &room_5x5());

        assert_eq!(
            result,
            Err(RobotError::OutOfBounds {
                axis: "width",
                position: 5,
                limit: 5,
            })
        );
    }

    #[test]
    fn test_validate_within_rejects_depth_beyond_room() {
        let result = Robot::validate_within(0, 7, &room_5x5());

        assert_eq!(
            result,
            Err(RobotError::OutOfBounds {
                axis: "depth",
                position: 7,
                limit: 5,
            })
        );
    }

    // ── Movement engine ───────────────────────────────────────────────────────

    #[test]
    fn test_rotation_only_route_never_changes_position() {
        let mut robot = Robot::new(2, 2, Orientation::North);

        robot.follow_route("LLRRLRLRLL", 5, 5).unwrap();

        assert_eq!((robot.width, robot.depth), (2, 2));
    }

    #[test]
    fn test_four_right_rotations_restore_heading() {
        let mut robot = Robot::new(2, 2, Orientation::North);

        robot.follow_route("RRRR", 5, 5).unwrap();

        assert_eq!(robot.orientation, Orientation::North);
    }

    #[test]
    fn test_forward_north_decrements_depth() {
        let mut robot = Robot::new(2, 2, Orientation::North);

        robot.follow_route("F", 5, 5).unwrap();

        assert_eq!((robot.width, robot.depth), (2, 1));
    }

    #[test]
    fn test_forward_south_increments_depth() {
        let mut robot = Robot::new(2, 2, Orientation::South);

        robot.follow_route("F", 5, 5).unwrap();

        assert_eq!((robot.width, robot.depth), (2, 3));
    }

    #[test]
    fn test_forward_is_clamped_at_every_wall() {
        // Drive each heading straight into its wall; the extra steps are
        // absorbed silently.
        let cases = [
            (Orientation::North, (2, 0)),
            (Orientation::South, (2, 4)),
            (Orientation::West, (0, 2)),
            (Orientation::East, (4, 2)),
        ];

        for (heading, expected) in cases {
            let mut robot = Robot::new(2, 2, heading);

            robot.follow_route("FFFFFFFF", 5, 5).unwrap();

            assert_eq!(
                (robot.width, robot.depth),
                expected,
                "heading {heading} must clamp at the wall"
            );
        }
    }

    #[test]
    fn test_forward_in_1x1_room_is_a_no_op() {
        let mut robot = Robot::new(0, 0, Orientation::North);

        robot.follow_route("FRFRFRF", 1, 1).unwrap();

        assert_eq!((robot.width, robot.depth), (0, 0));
    }

    #[test]
    fn test_unknown_symbol_names_the_symbol() {
        let mut robot = Robot::new(2, 2, Orientation::North);

        let result = robot.follow_route("FXF", 5, 5);

        assert_eq!(result, Err(RobotError::UnknownInstruction('X')));
    }

    #[test]
    fn test_unknown_symbol_keeps_partial_progress() {
        // Arrange: two forward steps execute before the bad symbol.
        let mut robot = Robot::new(2, 2, Orientation::North);

        // Act
        let result = robot.follow_route("FF?F", 5, 5);

        // Assert: the route fails, but the two executed steps stay applied.
        assert_eq!(result, Err(RobotError::UnknownInstruction('?')));
        assert_eq!((robot.width, robot.depth), (2, 0));
        assert_eq!(robot.orientation, Orientation::North);
    }

    #[test]
    fn test_robot_serializes_as_report_shape() {
        let robot = Robot::new(1, 3, Orientation::North);

        let json = serde_json::to_string(&robot).unwrap();

        assert_eq!(json, r#"{"width":1,"depth":3,"orientation":"N"}"#);
    }
}
