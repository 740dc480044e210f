use std::error::Error;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::dto::read_accounts;
use crate::{Session, Step};

/// Runs the teller terminal over the given input and writes the session
/// transcript to the provided writer.
///
/// # Arguments
/// * `accounts_path` - Path to the CSV file seeding the account ledger
/// * `input` - Raw customer input, one line per id or action (e.g. stdin)
/// * `writer` - Where to write the transcript (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The seed file cannot be read
/// * The seed CSV is malformed
/// * Reading the input or writing the transcript fails
///
/// Domain failures (unknown ids, unrecognized actions) are part of the
/// transcript, not errors.
pub fn run<P, R, W>(accounts_path: P, input: R, mut writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    R: BufRead,
    W: Write,
{
    let specs = read_accounts(accounts_path)?;
    let mut session = Session::new(specs);

    for line in input.lines() {
        let line = line?;
        if session.feed(&line, &mut writer)? == Step::Shutdown {
            break;
        }
    }
    writer.flush()?;
    Ok(())
}
