//! CLI shell: the three-prompt interactive session.
//!
//! Prompts for the room size, the robot's starting state, and the route on
//! three successive lines, then prints the final report. Each line is
//! tokenized on whitespace (empty tokens discarded) and upper-cased, so
//! `1 2 n` and `rfrf` are accepted. Any parse or validation failure aborts
//! the session with the error; there is no retry loop.
//!
//! Validation happens stage by stage: an invalid room size aborts the
//! session before the robot prompt is ever shown. The session is generic
//! over reader/writer handles so tests can drive it with in-memory buffers;
//! [`run`] wires it to stdin/stdout.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};

use gridbot_core::{parse_route, Robot, Room};

/// Runs a complete prompt session against stdin/stdout.
///
/// # Errors
///
/// Returns the first read, parse, or validation failure; the caller prints
/// it and exits non-zero.
pub fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock())
}

/// Drives one complete prompt session over the given handles.
///
/// # Errors
///
/// Returns the first failure from any stage; nothing read so far is
/// retried.
pub fn run_session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<()> {
    let room = prompt_room_size(input, output)?;
    let mut robot = prompt_robot_start(input, output, &room)?;
    prompt_and_follow_route(input, output, &mut robot, &room)?;

    writeln!(
        output,
        "Report: {} {} {}",
        robot.width, robot.depth, robot.orientation
    )?;

    Ok(())
}

/// Reads one input line and splits it into upper-cased whitespace tokens.
fn read_tokens<R: BufRead>(input: &mut R) -> anyhow::Result<Vec<String>> {
    let mut line = String::new();
    let bytes_read = input
        .read_line(&mut line)
        .context("failed to read input line")?;

    if bytes_read == 0 {
        bail!("unexpected end of input");
    }

    Ok(line
        .split_whitespace()
        .map(|token| token.to_uppercase())
        .collect())
}

/// First prompt: `<width> <depth>`.
fn prompt_room_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Room> {
    writeln!(output, "Please provide room size (<width> <depth>):")?;

    let tokens = read_tokens(input)?;
    if tokens.len() != 2 {
        bail!("expected 2 values for the room size, got {}", tokens.len());
    }

    let width: i64 = tokens[0]
        .parse()
        .with_context(|| format!("could not parse room width '{}'", tokens[0]))?;
    let depth: i64 = tokens[1]
        .parse()
        .with_context(|| format!("could not parse room depth '{}'", tokens[1]))?;

    Ok(Room::new(width, depth)?)
}

/// Second prompt: `<width> <depth> <orientation>`.
fn prompt_robot_start<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    room: &Room,
) -> anyhow::Result<Robot> {
    writeln!(
        output,
        "Please provide starting position for the robot (<width> <depth> <orientation>):"
    )?;

    let tokens = read_tokens(input)?;
    if tokens.len() != 3 {
        bail!(
            "expected 3 values for the robot start, got {}",
            tokens.len()
        );
    }

    let width: i64 = tokens[0]
        .parse()
        .with_context(|| format!("could not parse start width '{}'", tokens[0]))?;
    let depth: i64 = tokens[1]
        .parse()
        .with_context(|| format!("could not parse start depth '{}'", tokens[1]))?;

    // Bounds first, then the start values themselves, same order as the
    // HTTP pipeline.
    Robot::validate_within(width, depth, room)?;
    let orientation = Robot::validate_start(width, depth, &tokens[2])?;

    Ok(Robot::new(width, depth, orientation))
}

/// Third prompt: a single `<INSTRUCTIONS>` token.
fn prompt_and_follow_route<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    robot: &mut Robot,
    room: &Room,
) -> anyhow::Result<()> {
    writeln!(output, "Please provide navigation instructions (<INSTRUCTIONS>):")?;

    let tokens = read_tokens(input)?;
    if tokens.len() != 1 {
        bail!(
            "navigation instructions cannot contain spaces ({})",
            tokens.join(" ")
        );
    }

    parse_route(&tokens[0])?;
    robot.follow_route(&tokens[0], room.width, room.depth)?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
