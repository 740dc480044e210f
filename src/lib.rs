mod action;
mod dto;
mod error;
mod ledger;
mod runner;
mod session;
mod teller;

pub use action::Action;
pub use dto::{read_accounts, read_accounts_async, AccountSpec};
pub use error::Error;
pub use ledger::{Account, AccountId, Ledger};
pub use runner::{run, run_async};
pub use session::{Session, Step};
pub use teller::{Reply, Teller};
