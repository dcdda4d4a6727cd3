//! console — interactive grid robot session.
//!
//! Reads commands from stdin, drives a single [`Robot`], and renders its
//! state after every command.  `HELP` lists the grammar; `QUIT`, `EXIT`,
//! Ctrl-C or Ctrl-D end the session.  Invalid input of any kind prints a
//! message and re-prompts; the session never crashes on bad input.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use robot_agent::{AgentError, Pose, Robot};
use robot_command::{Command, parse};
use robot_core::{Facing, Grid, Position};

/// One interactive session: a robot plus the loop flag.
///
/// Owned by `main`; nothing here is process-global, so several sessions
/// could coexist, each with an independent robot.
struct Session {
    robot:   Robot,
    running: bool,
}

impl Session {
    fn new(grid: Grid) -> Self {
        Self { robot: Robot::new(grid), running: true }
    }

    /// Execute one parsed command and print its outcome.
    fn execute(&mut self, command: Command) {
        match command {
            Command::Place { position, facing } => match self.robot.place(position, facing) {
                Ok(()) => println!("Robot placed at ({position}) facing {facing}"),
                Err(_) => println!(
                    "Invalid placement. Coordinates must be 0-{} and the direction one of NORTH, EAST, SOUTH, WEST.",
                    self.robot.grid().max()
                ),
            },
            Command::Move => match self.robot.move_forward() {
                Ok(()) => println!("Robot moved forward"),
                Err(AgentError::NotPlaced) => println!("Robot not placed. Use PLACE first."),
                Err(AgentError::OutOfBounds(_)) => {
                    println!("Cannot move - the robot would fall off the grid!")
                }
            },
            Command::Left => match self.robot.turn_left() {
                Ok(()) => println!("Robot turned left"),
                Err(_) => println!("Robot not placed. Use PLACE first."),
            },
            Command::Right => match self.robot.turn_right() {
                Ok(()) => println!("Robot turned right"),
                Err(_) => println!("Robot not placed. Use PLACE first."),
            },
            Command::Report => match self.robot.report() {
                Ok(pose) => println!("Robot position: {pose}"),
                Err(_) => println!("Robot is not placed on the grid"),
            },
            Command::Help => print_help(self.robot.grid()),
            Command::Quit => {
                println!("Thank you!");
                self.running = false;
            }
        }
    }

    /// Status line (and grid drawing, when placed) shown before each prompt.
    fn print_status(&self) {
        match self.robot.report() {
            Ok(pose) => {
                println!("Current position: {pose}");
                print_grid(self.robot.grid(), pose);
            }
            Err(_) => println!("Robot not placed - use PLACE to start"),
        }
    }
}

/// Arrow glyph for the robot's facing in the grid drawing.
fn arrow(facing: Facing) -> char {
    match facing {
        Facing::North => '↑',
        Facing::East  => '→',
        Facing::South => '↓',
        Facing::West  => '←',
    }
}

/// Draw the grid top-down (highest y first) with the robot as an arrow.
fn print_grid(grid: Grid, pose: Pose) {
    print!("  ");
    for x in 0..=grid.max() {
        print!(" {x}");
    }
    println!();

    for y in (0..=grid.max()).rev() {
        print!("{y} ");
        for x in 0..=grid.max() {
            let glyph = if pose.position == Position::new(x, y) {
                arrow(pose.facing)
            } else {
                '.'
            };
            print!(" {glyph}");
        }
        println!();
    }
}

fn print_welcome(grid: Grid) {
    println!("{}", "=".repeat(60));
    println!("Grid Robot Simulator");
    println!("{}", "=".repeat(60));
    println!();
    println!(
        "The robot moves on a {side}x{side} grid (coordinates 0-{max})",
        side = grid.side(),
        max = grid.max()
    );
    println!("Directions: NORTH, EAST, SOUTH, WEST");
    println!();
    println!("Type HELP for the command list, QUIT or EXIT to leave");
    println!("{}", "-".repeat(60));
}

fn print_help(grid: Grid) {
    println!("Available commands:");
    println!("{}", "-".repeat(40));
    println!("PLACE X,Y,F  - place the robot at (X,Y) facing F");
    println!("               example: PLACE 0,0,NORTH");
    println!("MOVE         - move one step forward");
    println!("LEFT         - turn 90 degrees left");
    println!("RIGHT        - turn 90 degrees right");
    println!("REPORT       - print the current position");
    println!("HELP         - show this message");
    println!("QUIT/EXIT    - leave the session");
    println!("{}", "-".repeat(40));
    println!("Valid coordinates: 0-{} for both X and Y", grid.max());
}

fn main() -> Result<()> {
    let mut session = Session::new(Grid::default());
    print_welcome(session.robot.grid());

    let mut rl = DefaultEditor::new()?;
    while session.running {
        println!();
        session.print_status();

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        match parse(line) {
            Ok(command) => session.execute(command),
            Err(err) => {
                println!("{err}");
                println!("Type HELP to see available commands");
            }
        }
    }

    Ok(())
}
