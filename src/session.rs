//! The session driver: sequences customer sessions over a raw line stream.
//!
//! A session is: acquire an account id, greet the customer by name, then
//! apply actions until `Next` (back to id acquisition) or `Finished`
//! (shutdown). Domain failures are presented as `Error:` lines and the
//! session continues; only I/O failures propagate.

use std::io::{self, Write};

use crate::{Action, AccountId, AccountSpec, Error, Reply, Teller};

/// Whether the terminal keeps running after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Shutdown,
}

pub struct Session {
    teller: Teller,
    current: Option<AccountId>,
}

impl Session {
    pub fn new(specs: Vec<AccountSpec>) -> Self {
        let mut teller = Teller::new();
        teller.initialize(specs);
        Self {
            teller,
            current: None,
        }
    }

    pub fn teller(&self) -> &Teller {
        &self.teller
    }

    /// Consumes one raw input line, writing any presentation lines to `out`.
    /// Blank lines are skipped.
    pub fn feed<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Step> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Step::Continue);
        }
        match self.current {
            None => self.acquire_customer(line, out),
            Some(id) => self.drive_action(id, line, out),
        }
    }

    fn acquire_customer<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Step> {
        // The terminal can be shut down from the id prompt too
        if let Ok(Action::Finished) = Action::parse(line) {
            writeln!(out, "Goodbye")?;
            return Ok(Step::Shutdown);
        }
        match line.parse::<AccountId>() {
            Ok(id) => match self.teller.ledger().get_name(id) {
                Ok(name) => {
                    writeln!(out, "Welcome, {}", name)?;
                    self.current = Some(id);
                }
                Err(err) => writeln!(out, "Error: {}", err)?,
            },
            Err(_) => writeln!(
                out,
                "Error: {}",
                Error::InvalidAccountId(line.to_string())
            )?,
        }
        Ok(Step::Continue)
    }

    fn drive_action<W: Write>(
        &mut self,
        id: AccountId,
        line: &str,
        out: &mut W,
    ) -> io::Result<Step> {
        let action = match Action::parse(line) {
            Ok(action) => action,
            Err(err) => {
                writeln!(out, "Error: {}", err)?;
                return Ok(Step::Continue);
            }
        };
        match self.teller.apply(id, &action) {
            Ok(Reply::Balance(balance)) => writeln!(out, "Balance: {}", balance)?,
            Ok(Reply::Dispensed(amount)) => writeln!(out, "Dispensing {}", amount)?,
            Ok(Reply::DepositAccepted) => writeln!(out, "Deposit accepted")?,
            Ok(Reply::NextCustomer) => {
                writeln!(out, "Goodbye")?;
                self.current = None;
            }
            Ok(Reply::Shutdown) => {
                writeln!(out, "Goodbye")?;
                return Ok(Step::Shutdown);
            }
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
        Ok(Step::Continue)
    }
}
