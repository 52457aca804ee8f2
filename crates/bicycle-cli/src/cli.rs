//! Module containing all CLI related functionality
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top Level Struct of the CLI
/// For more information see [clap documentation](https://docs.rs/clap/latest/clap/index.html)
#[derive(Parser, Debug)]
#[command(version,
    about = "bicycle | step through a list of items forever, forwards or backwards",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Action,
    /// Log Level, aka. how verbose the application will be.
    #[arg(short, long, global = true, default_value = if cfg!(debug_assertions) {"INFO"} else {"WARN"})]
    pub log_level: log::LevelFilter,
    /// Path to an alternate config file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// The different things bicycle can do
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Print the elements one per line, cycling through them
    Run {
        #[command(flatten)]
        cycle: CycleArgs,
        /// How many elements to print. Runs forever if not given
        #[arg(short = 'n', long, value_name = "N")]
        steps: Option<u64>,
        /// How long to wait between steps (in ms)
        #[arg(long, value_name = "MS")]
        delay: Option<u64>,
    },
    /// Step through the elements by typing commands on stdin
    ///
    /// Commands: <enter>/n(ext), f(orward), r(everse), t(oggle), ?/s(tatus), q(uit)
    Interactive {
        #[command(flatten)]
        cycle: CycleArgs,
    },
    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Args shared by all actions that cycle through elements
#[derive(Debug, Args)]
pub struct CycleArgs {
    /// The elements to cycle through
    #[arg(value_name = "ELEMENTS", required = true)]
    pub elements: Vec<String>,
    /// Index of the element to start at. The first element printed is the one after it
    #[arg(short, long, value_name = "INDEX")]
    pub start: Option<usize>,
    /// Cycle from right to left
    #[arg(short, long, default_value = "false")]
    pub reverse: bool,
}

#[cfg(test)]
mod test {
    use super::{Action, Cli};
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_args() {
        let cli = Cli::try_parse_from([
            "bicycle", "run", "rick", "morty", "-n", "4", "--start", "1", "-r", "-l", "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level, log::LevelFilter::Debug);

        let Action::Run {
            cycle,
            steps,
            delay,
        } = cli.command
        else {
            panic!("Expected the run action");
        };

        assert_eq!(cycle.elements, ["rick", "morty"]);
        assert_eq!(cycle.start, Some(1));
        assert!(cycle.reverse);
        assert_eq!(steps, Some(4));
        assert_eq!(delay, None);
    }

    #[test]
    fn elements_required() {
        assert!(Cli::try_parse_from(["bicycle", "interactive"]).is_err());
        assert!(Cli::try_parse_from(["bicycle", "run", "-n", "3"]).is_err());
    }
}
