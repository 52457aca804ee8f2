//! Module driving a [BiCycle] from the command line
//!
//! [print_steps] backs the `run` action, [interactive] backs the `interactive` action. Both write to
//! any [Write] so they can be tested without a terminal.
use bicycle::{BiCycle, Direction};
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
    thread,
    time::Duration,
};

/// Print `steps` elements of `cycle` to `output`, one per line
///
/// If `steps` is [None] this only returns on an io error, e.g. when the reading end of a pipe is
/// closed.
pub fn print_steps<T: Display, W: Write>(
    cycle: &mut BiCycle<'_, T>,
    steps: Option<u64>,
    delay: Duration,
    output: &mut W,
) -> io::Result<()> {
    let mut taken = 0;

    while steps.map_or(true, |steps| taken < steps) {
        if taken > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }

        writeln!(output, "{}", cycle.step())?;
        output.flush()?;

        taken += 1;
    }

    Ok(())
}

/// A command typed in [interactive] mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the next element
    Next,
    /// Set the direction
    Direction(Direction),
    /// Flip the direction
    Toggle,
    /// Print the current index and direction
    Status,
    /// Stop reading commands
    Quit,
}

/// Error returned when parsing a [Command] fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown command: {:?}. Try n(ext), f(orward), r(everse), t(oggle), s(tatus) or q(uit).",
            self.0
        )
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Ok(Self::Next),
            "f" | "forward" => Ok(Self::Direction(Direction::Forward)),
            "r" | "reverse" => Ok(Self::Direction(Direction::Reverse)),
            "t" | "toggle" => Ok(Self::Toggle),
            "?" | "s" | "status" => Ok(Self::Status),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Read [Command]s line by line from `input` and apply them to `cycle`
///
/// Elements and status lines are written to `output`. Returns when [Command::Quit] is read or
/// `input` is exhausted.
pub fn interactive<T: Display, R: BufRead, W: Write>(
    cycle: &mut BiCycle<'_, T>,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                log::debug!("Ignoring input: {:?}", line);
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Next => writeln!(output, "{}", cycle.step())?,
            Command::Direction(direction) => cycle.set_direction(direction),
            Command::Toggle => {
                let direction = cycle.reverse_direction();
                writeln!(output, "direction: {}", direction)?;
            }
            Command::Status => writeln!(
                output,
                "index: {}/{}, element: {}, direction: {}",
                cycle.index(),
                cycle.len(),
                cycle.current(),
                cycle.direction()
            )?,
            Command::Quit => break,
        }

        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{interactive, print_steps, Command};
    use bicycle::{BiCycle, Direction};
    use std::{io::Cursor, time::Duration};

    static RICK_AND_MORTY: [&str; 2] = ["rick", "morty"];

    fn run_interactive(start: usize, commands: &str) -> String {
        let mut cycle = BiCycle::with_start(&RICK_AND_MORTY[..], start).unwrap();
        let mut output = Vec::new();

        interactive(&mut cycle, Cursor::new(commands), &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn print_some_steps() {
        let mut cycle = BiCycle::new(&RICK_AND_MORTY[..]).unwrap();
        let mut output = Vec::new();

        print_steps(&mut cycle, Some(4), Duration::ZERO, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "morty\nrick\nmorty\nrick\n"
        );
    }

    #[test]
    fn print_no_steps() {
        let mut cycle = BiCycle::new(&RICK_AND_MORTY[..]).unwrap();
        let mut output = Vec::new();

        print_steps(&mut cycle, Some(0), Duration::ZERO, &mut output).unwrap();

        assert!(output.is_empty());
        assert_eq!(cycle.index(), 0);
    }

    #[test]
    fn print_reversed() {
        let numbers = [1, 2, 3];
        let mut cycle = BiCycle::new(&numbers).unwrap();
        cycle.set_direction_reverse();
        let mut output = Vec::new();

        print_steps(&mut cycle, Some(4), Duration::ZERO, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "3\n2\n1\n3\n");
    }

    #[test]
    fn parse_commands() {
        assert_eq!("".parse::<Command>(), Ok(Command::Next));
        assert_eq!(" Next ".parse::<Command>(), Ok(Command::Next));
        assert_eq!(
            "r".parse::<Command>(),
            Ok(Command::Direction(Direction::Reverse))
        );
        assert_eq!(
            "forward".parse::<Command>(),
            Ok(Command::Direction(Direction::Forward))
        );
        assert_eq!("t".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("?".parse::<Command>(), Ok(Command::Status));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert!("sideways".parse::<Command>().is_err());
    }

    #[test]
    fn reverse_in_session() {
        assert_eq!(run_interactive(0, "n\nr\nn\nn\n"), "morty\nrick\nmorty\n");
    }

    #[test]
    fn quit_stops_reading() {
        assert_eq!(run_interactive(0, "\nq\nn\nn\n"), "morty\n");
    }

    #[test]
    fn toggle_and_status() {
        assert_eq!(
            run_interactive(1, "?\nt\nn\n"),
            "index: 1/2, element: morty, direction: forward\ndirection: reverse\nrick\n"
        );
    }

    #[test]
    fn unknown_command_continues() {
        let output = run_interactive(0, "jump\nn\n");
        let mut lines = output.lines();

        assert!(lines.next().unwrap().starts_with("Unknown command: \"jump\""));
        assert_eq!(lines.next(), Some("morty"));

        // make sure nothing else was written
        assert!(lines.next().is_none());
    }
}
