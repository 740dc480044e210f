use std::error::Error;
use std::io::Write;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::dto::read_accounts_async;
use crate::{AccountSpec, Session, Step};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs the teller terminal async over a scripted session file and writes
/// the transcript to the provided writer.
/// Spawns two tasks:
/// * Script reader - streams raw lines from the session file and sends them
///   to the driver via channel.
/// * Session driver - receives lines from the channel and feeds them to the
///   session until shutdown or until the channel is closed.
///
/// # Arguments
/// * `accounts_path` - Path to the CSV file seeding the account ledger
/// * `script_path` - Path to the scripted session file, one line per input
/// * `writer` - Where to write the transcript (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The seed or script file cannot be read
/// * The seed CSV is malformed
/// * Writing the transcript fails
pub async fn run<P1, P2, W>(accounts_path: P1, script_path: P2, mut writer: W) -> Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
    W: Write,
{
    let specs = read_accounts_async(accounts_path).await?;

    // Create channel for passing raw lines from reader to driver
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let script_path = script_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_script(script_path, tx));
    let driver_handle = tokio::spawn(drive_session(specs, rx));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    // Get the final transcript and copy it to the writer
    let transcript = driver_handle.await??;
    writer.write_all(&transcript)?;
    writer.flush()?;
    Ok(())
}

/// Reads raw lines from the session script file.
/// Returns them through the provided channel.
async fn read_script(
    script_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<String>,
) -> std::io::Result<()> {
    let file = File::open(script_path).await?;
    let mut lines = BufReader::new(file).lines();
    while let Some(line) = lines.next_line().await? {
        if tx.send(line).await.is_err() {
            // Receiver dropped (session shut down), exit gracefully
            break;
        }
    }
    Ok(())
}

/// Feeds lines received through the channel to the session driver.
/// Returns the transcript once the session shuts down or the channel is
/// closed by the reader.
async fn drive_session(
    specs: Vec<AccountSpec>,
    mut rx: mpsc::Receiver<String>,
) -> std::io::Result<Vec<u8>> {
    let mut session = Session::new(specs);
    let mut transcript = Vec::new();
    while let Some(line) = rx.recv().await {
        if session.feed(&line, &mut transcript)? == Step::Shutdown {
            break;
        }
    }
    Ok(transcript)
}
