//! Interactive prompt/read/hint loop for one game.

use std::io::{BufRead, Write};

use anyhow::Result;
use console_io::console::Console;
use console_io::input::Input;
use tracing::{debug, info};

use crate::game::{Game, GuessRange, Verdict};

/// How a played session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The number was guessed after `attempts` guesses.
    Won { attempts: u32 },
    /// Input closed first; `attempts` guesses had been made.
    Abandoned { attempts: u32 },
}

/// Play `game` to completion over `console`.
///
/// Non-numeric input is rejected without counting an attempt. Numbers
/// outside `range` are accepted and receive the usual hint.
pub fn play<R: BufRead, O: Write, E: Write>(
    mut game: Game,
    range: GuessRange,
    console: &mut Console<R, O, E>,
) -> Result<GameOutcome> {
    info!(min = range.min, max = range.max, "game started");
    console.say("Welcome to the World of Guessing Numbers")?;

    let prompt = format!(
        "\nPlease enter your guess between ({} to {}): ",
        range.min, range.max
    );
    let outcome = loop {
        console.prompt(&prompt)?;
        let guess = match console.read::<i64>()? {
            Input::Value(n) => n,
            Input::Malformed(token) => {
                debug!(token = %token, "rejected non-numeric guess");
                console.complain("Invalid input. Please enter a whole number.")?;
                console.discard_line();
                continue;
            }
            Input::Closed => {
                break GameOutcome::Abandoned {
                    attempts: game.attempts(),
                };
            }
        };

        let verdict = game.guess(guess);
        debug!(guess, ?verdict, attempts = game.attempts(), "guess evaluated");
        match verdict {
            Verdict::TooLow => console.say("Guess a larger number.")?,
            Verdict::TooHigh => console.say("Guess a smaller number.")?,
            Verdict::Correct { attempts } => {
                console.say(&format!(
                    "Congratulations! You have successfully guessed the number in {attempts} attempts"
                ))?;
                break GameOutcome::Won { attempts };
            }
        }
    };

    match outcome {
        GameOutcome::Won { .. } => console.say("\nBye Bye, Thanks for playing.")?,
        GameOutcome::Abandoned { attempts } => {
            info!(attempts, "input closed before the number was guessed");
            console.say("")?;
            console.complain("Input closed before the number was guessed.")?;
        }
    }
    console.finish()?;
    Ok(outcome)
}
