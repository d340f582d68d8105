use crate::balance;
use crate::command::Command;
use crate::error::AppError;
use crate::ledger::Ledger;
use crate::report::{self, Format};
use log::warn;
use std::io::{BufRead, Write};

/// Answers commands against a fully built ledger.
pub struct Session<'a> {
    ledger: &'a Ledger,
    format: Format,
}

impl<'a> Session<'a> {
    pub fn new(ledger: &'a Ledger, format: Format) -> Self {
        Self { ledger, format }
    }

    /// Runs one command, writing its report to `out`.
    /// An unknown account is returned as `AppError::Ledger`.
    pub fn execute<W: Write>(&self, command: &Command, out: &mut W) -> Result<(), AppError> {
        match command {
            Command::ListAll => {
                let summaries: Vec<_> = self.ledger.accounts().map(balance::summary).collect();
                report::write_balances(out, &summaries, self.format)
            }
            Command::ListOne(name) => {
                let account = self.ledger.account(name)?;
                let rows = balance::statement(account);
                report::write_statement(out, account.name(), &rows, self.format)
            }
            Command::Quit => Ok(()),
        }
    }

    /// Prompts for commands until `quit` or the end of `input`.
    /// Bad commands and unknown accounts are reported and the prompt repeats.
    pub fn run_prompt<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<(), AppError> {
        write_welcome(out)?;
        let mut lines = input.lines();
        loop {
            write!(out, "Enter a command: ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(out)?;
                return Ok(());
            };
            let line = line?;
            writeln!(out)?;

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    writeln!(out)?;
                    continue;
                }
            };
            if command == Command::Quit {
                return Ok(());
            }
            match self.execute(&command, out) {
                Ok(()) => {}
                Err(AppError::Ledger(e)) => {
                    warn!("{}", e);
                    writeln!(out, "Sorry, {}", e)?;
                    writeln!(out)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn write_welcome<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "Welcome to SupportBank!")?;
    writeln!(out, "=======================")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  List All - list all account balances")?;
    writeln!(out, "  List [Account] - list all transactions for the specified account")?;
    writeln!(out, "  Quit - leave SupportBank")?;
    writeln!(out)?;
    Ok(())
}
