//! bicycle | step through a list of items forever, forwards or backwards
//!
//! # Usage
//!
//! ```
//! bicycle run rick morty -n 4
//!
//! bicycle interactive rick morty
//! ```
//! For more information see `bicycle --help`.
use bicycle::BiCycle;
use clap::{CommandFactory, Parser};
use simple_logger::SimpleLogger;
use std::io::{self, Write};

mod cli;
mod config;
mod errors;
mod paths;
mod session;

use cli::{Action, Cli};
use config::{Config, Settings};
use errors::Error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    SimpleLogger::new().with_level(cli.log_level).init()?;

    match cli.command {
        Action::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                Cli::command().get_name(),
                &mut io::stdout(),
            );

            Ok(())
        }
        Action::Run {
            cycle,
            steps,
            delay,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let settings = Settings::resolve(&cycle, steps, delay, &config);

            let mut bi_cycle = new_cycle(&cycle.elements, &settings)?;

            let mut stdout = io::stdout().lock();

            match session::print_steps(&mut bi_cycle, settings.steps, settings.delay, &mut stdout)
            {
                // Piping into something like `head` closes stdout while we are still running
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                result => Ok(result.map_err(Error::Io)?),
            }
        }
        Action::Interactive { cycle } => {
            let config = Config::load(cli.config.as_deref())?;
            let settings = Settings::resolve(&cycle, None, None, &config);

            let mut bi_cycle = new_cycle(&cycle.elements, &settings)?;

            let mut stdout = io::stdout().lock();

            session::interactive(&mut bi_cycle, io::stdin().lock(), &mut stdout)
                .and_then(|_| stdout.flush())
                .map_err(Error::Io)?;

            Ok(())
        }
    }
}

/// Create the [BiCycle] over `elements` described by `settings`
fn new_cycle<'a>(
    elements: &'a [String],
    settings: &Settings,
) -> Result<BiCycle<'a, String>, Error> {
    let mut bi_cycle = match BiCycle::with_start(elements, settings.start) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to create the cycle: {}", e);

            return Err(e.into());
        }
    };

    bi_cycle.set_direction(settings.direction);

    log::info!(
        "Cycling through {} elements, starting at index {} going {}",
        bi_cycle.len(),
        bi_cycle.index(),
        bi_cycle.direction()
    );

    Ok(bi_cycle)
}
