use std::env;
use std::error::Error;
use std::io;
use std::process;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    match args.len() {
        // Interactive terminal on stdin
        2 => teller::run(&args[1], io::stdin().lock(), io::stdout()),
        // Scripted session, streamed asynchronously
        3 => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(teller::run_async(&args[1], &args[2], io::stdout()))
                .map_err(|err| err as Box<dyn Error>)
        }
        _ => Err("Usage: teller accounts.csv [session.txt]".into()),
    }
}
