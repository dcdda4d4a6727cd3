//! Line parser for the console command grammar.

use std::str::FromStr;

use robot_core::{Facing, Position};

use crate::{Command, ParseError, ParseResult};

/// Parse one input line into a [`Command`].
///
/// Keywords match case-insensitively and surrounding whitespace is ignored.
/// `PLACE` arguments are validated here, so the state machine only ever
/// receives typed, integral input.  Bare commands reject trailing text
/// rather than silently ignoring it.
pub fn parse(line: &str) -> ParseResult<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    let upper = keyword.to_ascii_uppercase();
    if upper == "PLACE" {
        return parse_place(rest);
    }

    let command = match upper.as_str() {
        "MOVE"          => Command::Move,
        "LEFT"          => Command::Left,
        "RIGHT"         => Command::Right,
        "REPORT"        => Command::Report,
        "HELP"          => Command::Help,
        "QUIT" | "EXIT" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(keyword.to_string())),
    };

    if !rest.is_empty() {
        return Err(ParseError::TrailingArguments(upper));
    }

    Ok(command)
}

/// Parse the `X,Y,F` argument list of a `PLACE` command.
fn parse_place(args: &str) -> ParseResult<Command> {
    if args.is_empty() {
        return Err(ParseError::PlaceArity(0));
    }

    let fields: Vec<&str> = args.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ParseError::PlaceArity(fields.len()));
    }

    let x = parse_coordinate(fields[0])?;
    let y = parse_coordinate(fields[1])?;
    let facing = Facing::from_str(fields[2])?;

    Ok(Command::Place { position: Position::new(x, y), facing })
}

fn parse_coordinate(field: &str) -> ParseResult<i32> {
    field
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(field.to_string()))
}
