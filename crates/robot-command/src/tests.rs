//! Unit tests for the command grammar, plus end-to-end parse-then-execute
//! scenarios against the robot state machine.

use robot_core::{Facing, Position};

use crate::{Command, ParseError, parse};

// ── Keyword grammar ───────────────────────────────────────────────────────────

#[cfg(test)]
mod grammar {
    use super::*;

    #[test]
    fn bare_keywords() {
        assert_eq!(parse("MOVE").unwrap(), Command::Move);
        assert_eq!(parse("LEFT").unwrap(), Command::Left);
        assert_eq!(parse("RIGHT").unwrap(), Command::Right);
        assert_eq!(parse("REPORT").unwrap(), Command::Report);
        assert_eq!(parse("HELP").unwrap(), Command::Help);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse("move").unwrap(), Command::Move);
        assert_eq!(parse("Report").unwrap(), Command::Report);
        assert_eq!(parse("rIgHt").unwrap(), Command::Right);
    }

    #[test]
    fn quit_and_exit_are_aliases() {
        assert_eq!(parse("QUIT").unwrap(), Command::Quit);
        assert_eq!(parse("EXIT").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse("  MOVE  ").unwrap(), Command::Move);
        assert_eq!(parse("\tREPORT\n").unwrap(), Command::Report);
    }

    #[test]
    fn empty_line_is_rejected() {
        assert!(matches!(parse(""), Err(ParseError::Empty)));
        assert!(matches!(parse("   "), Err(ParseError::Empty)));
    }

    #[test]
    fn unknown_keyword_is_rejected() {
        assert!(matches!(parse("JUMP"), Err(ParseError::UnknownCommand(_))));
        assert!(matches!(parse("PLACEX 0,0,NORTH"), Err(ParseError::UnknownCommand(_))));
    }

    #[test]
    fn bare_commands_reject_trailing_text() {
        assert!(matches!(parse("MOVE 2"), Err(ParseError::TrailingArguments(_))));
        assert!(matches!(parse("REPORT now"), Err(ParseError::TrailingArguments(_))));
    }
}

// ── PLACE arguments ───────────────────────────────────────────────────────────

#[cfg(test)]
mod place_arguments {
    use super::*;

    #[test]
    fn canonical_form() {
        assert_eq!(
            parse("PLACE 0,0,NORTH").unwrap(),
            Command::Place { position: Position::new(0, 0), facing: Facing::North }
        );
    }

    #[test]
    fn tolerates_spaces_around_commas() {
        assert_eq!(
            parse("PLACE 1 , 2 , EAST").unwrap(),
            Command::Place { position: Position::new(1, 2), facing: Facing::East }
        );
    }

    #[test]
    fn facing_token_is_case_insensitive() {
        let lower = parse("place 3,3,south").unwrap();
        let upper = parse("PLACE 3,3,SOUTH").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn negative_coordinates_parse_as_integers() {
        // Bounds are the state machine's concern, not the parser's.
        assert_eq!(
            parse("PLACE -1,0,NORTH").unwrap(),
            Command::Place { position: Position::new(-1, 0), facing: Facing::North }
        );
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(matches!(parse("PLACE"), Err(ParseError::PlaceArity(0))));
        assert!(matches!(parse("PLACE 1,2"), Err(ParseError::PlaceArity(2))));
        assert!(matches!(parse("PLACE 1,2,NORTH,extra"), Err(ParseError::PlaceArity(4))));
    }

    #[test]
    fn non_integer_coordinates_are_rejected() {
        assert!(matches!(parse("PLACE a,0,NORTH"), Err(ParseError::InvalidCoordinate(_))));
        assert!(matches!(parse("PLACE 1,2.5,NORTH"), Err(ParseError::InvalidCoordinate(_))));
        assert!(matches!(parse("PLACE ,0,NORTH"), Err(ParseError::InvalidCoordinate(_))));
    }

    #[test]
    fn bad_facing_token_is_rejected() {
        assert!(matches!(parse("PLACE 0,0,UP"), Err(ParseError::InvalidFacing(_))));
    }
}

// ── Parse-then-execute pipeline ───────────────────────────────────────────────

#[cfg(test)]
mod pipeline {
    use robot_agent::{AgentError, AgentResult, Robot};
    use robot_core::Grid;

    use super::*;

    /// Apply one already-parsed line to `robot`, the way the console does.
    fn apply(robot: &mut Robot, line: &str) -> AgentResult<()> {
        match parse(line).expect("test lines are well-formed") {
            Command::Place { position, facing } => robot.place(position, facing),
            Command::Move => robot.move_forward(),
            Command::Left => robot.turn_left(),
            Command::Right => robot.turn_right(),
            Command::Report => robot.report().map(|_| ()),
            Command::Help | Command::Quit => Ok(()),
        }
    }

    #[test]
    fn walk_and_turn_sequence() {
        let mut robot = Robot::new(Grid::default());
        apply(&mut robot, "PLACE 0,0,NORTH").unwrap();
        apply(&mut robot, "MOVE").unwrap();
        apply(&mut robot, "RIGHT").unwrap();
        apply(&mut robot, "MOVE").unwrap();
        assert_eq!(robot.report().unwrap().to_string(), "1,1,EAST");
    }

    #[test]
    fn edge_move_is_refused_but_state_survives() {
        let mut robot = Robot::new(Grid::default());
        apply(&mut robot, "place 0,4,north").unwrap();
        assert!(matches!(apply(&mut robot, "MOVE"), Err(AgentError::OutOfBounds(_))));
        assert_eq!(robot.report().unwrap().to_string(), "0,4,NORTH");
    }

    #[test]
    fn out_of_bounds_place_never_places() {
        let mut robot = Robot::new(Grid::default());
        assert!(apply(&mut robot, "PLACE -1,0,NORTH").is_err());
        assert!(matches!(robot.report(), Err(AgentError::NotPlaced)));
    }

    #[test]
    fn left_turn_mid_walk() {
        let mut robot = Robot::new(Grid::default());
        apply(&mut robot, "PLACE 1,1,EAST").unwrap();
        apply(&mut robot, "MOVE").unwrap();
        apply(&mut robot, "LEFT").unwrap();
        apply(&mut robot, "MOVE").unwrap();
        assert_eq!(robot.report().unwrap().to_string(), "2,2,NORTH");
    }

    #[test]
    fn session_commands_do_not_touch_the_robot() {
        let mut robot = Robot::new(Grid::default());
        apply(&mut robot, "HELP").unwrap();
        apply(&mut robot, "QUIT").unwrap();
        assert!(!robot.is_placed());
    }
}
