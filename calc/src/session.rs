//! The calculator's interactive loop.
//!
//! A session moves through four states:
//!
//! ```text
//! AwaitingChoice --op--> AwaitingOperands --a,b--> Computing --> Reporting
//!       ^  |                    |                                   |
//!       |  +--exit/closed--> end +--bad operand--> AwaitingChoice <--+
//! ```
//!
//! Only successful reads advance the state. Any malformed read returns to
//! `AwaitingChoice`; choosing Exit (or closing input) ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use console_io::console::Console;
use console_io::input::Input;
use tracing::{debug, info};

use crate::menu::{MenuChoice, render_menu};
use crate::ops::{INVALID_RESULT, Operation};

const CHOICE_PROMPT: &str = "\nNow Enter your Choice: ";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked Exit.
    Exited,
    /// Input reached end of stream.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    AwaitingChoice,
    AwaitingOperands(Operation),
    Computing { op: Operation, a: f64, b: f64 },
    Reporting(f64),
}

enum Transition {
    Next(State),
    End(SessionEnd),
}

/// Which operand a read was for; used in the error message.
#[derive(Debug, Clone, Copy)]
enum Operand {
    First,
    Second,
}

impl Operand {
    fn name(self) -> &'static str {
        match self {
            Operand::First => "first",
            Operand::Second => "second",
        }
    }
}

/// Menu-driven calculator bound to a console.
pub struct Calculator<'c, R, O, E> {
    console: &'c mut Console<R, O, E>,
    precision: usize,
}

impl<'c, R: BufRead, O: Write, E: Write> Calculator<'c, R, O, E> {
    pub fn new(console: &'c mut Console<R, O, E>, precision: usize) -> Self {
        Self { console, precision }
    }

    /// Run until Exit is chosen or input closes.
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!(precision = self.precision, "calculator started");
        self.show_menu()?;

        let mut state = State::AwaitingChoice;
        let end = loop {
            debug!(?state, "calculator state");
            let transition = match state {
                State::AwaitingChoice => self.await_choice()?,
                State::AwaitingOperands(op) => self.await_operands(op)?,
                State::Computing { op, a, b } => self.compute(op, a, b)?,
                State::Reporting(result) => self.report(result)?,
            };
            match transition {
                Transition::Next(next) => state = next,
                Transition::End(end) => break end,
            }
        };

        if end == SessionEnd::InputClosed {
            self.console.say("")?;
        }
        info!(?end, "calculator stopped");
        self.console.finish()?;
        Ok(end)
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.say(&render_menu())?;
        self.console.prompt(CHOICE_PROMPT)
    }

    fn await_choice(&mut self) -> Result<Transition> {
        let n = match self.console.read::<i64>()? {
            Input::Value(n) => n,
            Input::Malformed(token) => {
                debug!(token = %token, "rejected non-numeric menu choice");
                self.console
                    .complain("Invalid input. Please enter a valid menu option.")?;
                self.console.discard_line();
                self.show_menu()?;
                return Ok(Transition::Next(State::AwaitingChoice));
            }
            Input::Closed => return Ok(Transition::End(SessionEnd::InputClosed)),
        };

        match MenuChoice::try_from(n) {
            Ok(choice) => match choice.operation() {
                Some(op) => Ok(Transition::Next(State::AwaitingOperands(op))),
                None => {
                    self.console.say("Exiting calculator. Goodbye!")?;
                    Ok(Transition::End(SessionEnd::Exited))
                }
            },
            Err(invalid) => {
                debug!(%invalid, "rejected menu choice");
                self.console.complain(&format!(
                    "Invalid Menu Choice. Please enter a number between {} and {}.",
                    MenuChoice::FIRST.number(),
                    MenuChoice::LAST.number()
                ))?;
                self.console.discard_line();
                self.console.prompt(CHOICE_PROMPT)?;
                Ok(Transition::Next(State::AwaitingChoice))
            }
        }
    }

    fn await_operands(&mut self, op: Operation) -> Result<Transition> {
        self.console.prompt("\nPlease enter the first number: ")?;
        let a = match self.read_operand(Operand::First)? {
            Ok(a) => a,
            Err(transition) => return Ok(transition),
        };
        self.console.prompt("Now enter the second number: ")?;
        let b = match self.read_operand(Operand::Second)? {
            Ok(b) => b,
            Err(transition) => return Ok(transition),
        };
        Ok(Transition::Next(State::Computing { op, a, b }))
    }

    /// Read one operand, or the transition to take when it could not be read.
    fn read_operand(&mut self, which: Operand) -> Result<Result<f64, Transition>> {
        match self.console.read::<f64>()? {
            Input::Value(x) => Ok(Ok(x)),
            Input::Malformed(token) => {
                debug!(token = %token, operand = which.name(), "rejected operand");
                self.console.complain(&format!(
                    "Invalid input. Please enter a number for the {} operand.",
                    which.name()
                ))?;
                self.console.discard_line();
                self.console.prompt(CHOICE_PROMPT)?;
                Ok(Err(Transition::Next(State::AwaitingChoice)))
            }
            Input::Closed => Ok(Err(Transition::End(SessionEnd::InputClosed))),
        }
    }

    fn compute(&mut self, op: Operation, a: f64, b: f64) -> Result<Transition> {
        let result = match op.apply(a, b) {
            Ok(value) => value,
            Err(err) => {
                debug!(?op, a, b, %err, "operation refused");
                self.console.complain(&format!("Error: {err}."))?;
                INVALID_RESULT
            }
        };
        Ok(Transition::Next(State::Reporting(result)))
    }

    fn report(&mut self, result: f64) -> Result<Transition> {
        if !result.is_nan() {
            self.console.say(&format!(
                "\nResult of operation is: {:.*}",
                self.precision, result
            ))?;
        }
        self.console.prompt(CHOICE_PROMPT)?;
        Ok(Transition::Next(State::AwaitingChoice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_io::test_support::ScriptedConsole;

    fn run(input: &str) -> (SessionEnd, String, String) {
        run_with_precision(input, 2)
    }

    fn run_with_precision(input: &str, precision: usize) -> (SessionEnd, String, String) {
        let mut console = ScriptedConsole::with_input(input);
        let end = Calculator::new(&mut console, precision)
            .run()
            .expect("run");
        let (out, err) = console.into_transcript();
        (end, out, err)
    }

    #[test]
    fn add_three_and_four() {
        let (end, out, err) = run("1\n3\n4\n7\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.contains("\nResult of operation is: 7.00\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn divide_by_zero_reports_error_and_no_result() {
        let (end, out, err) = run("4\n5\n0\n7\n");
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(err, "Error: Cannot divide by zero.\n");
        assert!(!out.contains("Result of operation"));
    }

    #[test]
    fn modulus_by_zero_reports_error_and_no_result() {
        let (_, out, err) = run("5 9 0\n7\n");
        assert_eq!(err, "Error: Division by zero in modulus operation.\n");
        assert!(!out.contains("Result of operation"));
    }

    #[test]
    fn every_operation_reports_two_decimals() {
        let (_, out, _) = run("2 10 4\n3 2.5 2\n4 1 3\n5 7.5 2\n6 2 10\n7\n");
        let results: Vec<&str> = out
            .lines()
            .filter_map(|line| line.strip_prefix("Result of operation is: "))
            .collect();
        assert_eq!(results, vec!["6.00", "5.00", "0.33", "1.50", "1024.00"]);
    }

    #[test]
    fn exit_ends_without_further_prompts() {
        let (end, out, _) = run("7\n1\n3\n4\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.ends_with("Now Enter your Choice: Exiting calculator. Goodbye!\n"));
        assert!(!out.contains("Please enter the first number"));
    }

    #[test]
    fn out_of_range_choice_reprompts_without_operands() {
        let (end, out, err) = run("9\n7\n");
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(
            err,
            "Invalid Menu Choice. Please enter a number between 1 and 7.\n"
        );
        assert!(!out.contains("Please enter the first number"));
        assert_eq!(out.matches("Now Enter your Choice: ").count(), 2);
        assert_eq!(out.matches("Welcome to Simple Calculator").count(), 1);
    }

    #[test]
    fn out_of_range_choice_discards_rest_of_line() {
        let (_, out, _) = run("0 1 3 4\n7\n");
        assert!(!out.contains("Result of operation"));
    }

    #[test]
    fn non_numeric_choice_redisplays_menu() {
        let (end, out, err) = run("abc extra\n7\n");
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(err, "Invalid input. Please enter a valid menu option.\n");
        assert_eq!(out.matches("Welcome to Simple Calculator").count(), 2);
    }

    #[test]
    fn bad_operand_returns_to_menu_prompt() {
        let (end, out, err) = run("1\nx 4\n2\n3 oops\n1 1 1\n7\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(err.contains("Please enter a number for the first operand."));
        assert!(err.contains("Please enter a number for the second operand."));
        assert_eq!(
            out.matches("Result of operation is:").count(),
            1,
            "only the last add should report"
        );
        assert!(out.contains("Result of operation is: 2.00"));
    }

    #[test]
    fn nan_from_valid_operation_is_not_printed() {
        let (_, out, err) = run("6 -8 0.5\n7\n");
        assert!(!out.contains("Result of operation"));
        assert!(err.is_empty());
    }

    #[test]
    fn non_utf8_choice_line_is_rejected_and_session_continues() {
        let mut console = ScriptedConsole::with_bytes(b"\xff\n1 3 4\n7\n");
        let end = Calculator::new(&mut console, 2).run().expect("run");
        let (out, err) = console.into_transcript();
        assert_eq!(end, SessionEnd::Exited);
        assert_eq!(err, "Invalid input. Please enter a valid menu option.\n");
        assert!(out.contains("Result of operation is: 7.00"));
    }

    #[test]
    fn closed_input_ends_session() {
        let (end, _, _) = run("1\n3\n");
        assert_eq!(end, SessionEnd::InputClosed);
        let (end, _, _) = run("");
        assert_eq!(end, SessionEnd::InputClosed);
    }

    #[test]
    fn precision_controls_result_format() {
        let (_, out, _) = run_with_precision("4 1 3\n7\n", 4);
        assert!(out.contains("Result of operation is: 0.3333"));
        let (_, out, _) = run_with_precision("1 0.4 0.4\n7\n", 0);
        assert!(out.contains("Result of operation is: 1\n"));
    }
}
