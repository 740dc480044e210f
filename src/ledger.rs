use std::collections::HashMap;

use crate::dto::AccountSpec;
use crate::Error;

pub type AccountId = u32;

/// One customer's holdings. `id` and `name` are fixed at initialization;
/// only `balance` ever changes, and only by whole-value replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: i64,
}

/// The authoritative in-memory store of accounts, keyed by id.
///
/// The ledger exclusively owns its accounts: callers only ever see the
/// values returned by queries, and the only mutation is
/// [`Ledger::update_balance`]. Lookups are exact-match; an unknown id is
/// always `AccountNotFound` and never an insert.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Seeds the ledger, one account per spec. A non-empty list replaces the
    /// current contents; an empty list is a no-op, not a reset. Ids are
    /// expected to be unique already; if the list repeats an id, the later
    /// spec wins.
    pub fn initialize(&mut self, specs: Vec<AccountSpec>) {
        if specs.is_empty() {
            return;
        }
        self.accounts.clear();
        for spec in specs {
            self.accounts.insert(
                spec.id,
                Account {
                    id: spec.id,
                    name: spec.name,
                    balance: spec.balance,
                },
            );
        }
    }

    pub fn get_balance(&self, id: AccountId) -> Result<i64, Error> {
        self.get(id).map(|account| account.balance)
    }

    pub fn get_name(&self, id: AccountId) -> Result<&str, Error> {
        self.get(id).map(|account| account.name.as_str())
    }

    /// Replaces the balance of the account matching `id`, keeping its id and
    /// name. On an unknown id the store is left entirely unchanged.
    pub fn update_balance(&mut self, id: AccountId, new_balance: i64) -> Result<(), Error> {
        let account = self
            .accounts
            .get_mut(&id)
            .ok_or(Error::AccountNotFound(id))?;
        account.balance = new_balance;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn get(&self, id: AccountId) -> Result<&Account, Error> {
        self.accounts.get(&id).ok_or(Error::AccountNotFound(id))
    }
}
