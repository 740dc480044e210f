use crate::{Action, AccountId, AccountSpec, Error, Ledger};

/// The teller's answer to one applied action, ready for presentation.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Balance inquiry result.
    Balance(i64),
    /// Cash to hand out after a withdrawal.
    Dispensed(i64),
    /// Deposit confirmation.
    DepositAccepted,
    /// End of the current customer's session.
    NextCustomer,
    /// The terminal is shutting down.
    Shutdown,
}

/// Applies customer actions against the account ledger.
///
/// Withdraw and deposit are compositions over the ledger boundary:
/// `update_balance(id, get_balance(id) - amount)` and
/// `update_balance(id, get_balance(id) + amount)`. There is no overdraft
/// check, so balances may go negative; if such a policy is ever wanted it
/// must be enforced here, before `update_balance`, which is an
/// unconditional replace.
#[derive(Debug, Default)]
pub struct Teller {
    ledger: Ledger,
}

impl Teller {
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    pub fn initialize(&mut self, specs: Vec<AccountSpec>) {
        self.ledger.initialize(specs);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Applies one action for the customer addressed by `id`.
    /// Domain failures leave the ledger untouched.
    pub fn apply(&mut self, id: AccountId, action: &Action) -> Result<Reply, Error> {
        match *action {
            Action::Balance => Ok(Reply::Balance(self.ledger.get_balance(id)?)),
            Action::Withdraw(amount) => {
                let balance = self.ledger.get_balance(id)?;
                self.ledger.update_balance(id, balance - amount)?;
                Ok(Reply::Dispensed(amount))
            }
            Action::Deposit(amount) => {
                let balance = self.ledger.get_balance(id)?;
                self.ledger.update_balance(id, balance + amount)?;
                Ok(Reply::DepositAccepted)
            }
            Action::Next => Ok(Reply::NextCustomer),
            Action::Finished => Ok(Reply::Shutdown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_teller() -> Teller {
        let mut teller = Teller::new();
        teller.initialize(vec![
            AccountSpec {
                name: "Alice".to_string(),
                id: 1,
                balance: 130,
            },
            AccountSpec {
                name: "Bob".to_string(),
                id: 2,
                balance: 50,
            },
        ]);
        teller
    }

    #[test]
    fn test_balance_inquiry() {
        let mut teller = seeded_teller();
        assert_eq!(teller.apply(1, &Action::Balance), Ok(Reply::Balance(130)));
    }

    #[test]
    fn test_withdraw_dispenses_and_debits() {
        let mut teller = seeded_teller();
        assert_eq!(
            teller.apply(1, &Action::Withdraw(40)),
            Ok(Reply::Dispensed(40))
        );
        assert_eq!(teller.ledger().get_balance(1), Ok(90));
    }

    #[test]
    fn test_deposit_credits() {
        let mut teller = seeded_teller();
        assert_eq!(
            teller.apply(2, &Action::Deposit(25)),
            Ok(Reply::DepositAccepted)
        );
        assert_eq!(teller.ledger().get_balance(2), Ok(75));
    }

    #[test]
    fn test_withdraw_permits_overdraft() {
        let mut teller = seeded_teller();
        assert_eq!(
            teller.apply(2, &Action::Withdraw(60)),
            Ok(Reply::Dispensed(60))
        );
        assert_eq!(teller.ledger().get_balance(2), Ok(-10));
    }

    #[test]
    fn test_unknown_account_fails_without_mutation() {
        let mut teller = seeded_teller();
        assert_eq!(
            teller.apply(3, &Action::Withdraw(10)),
            Err(Error::AccountNotFound(3))
        );
        assert_eq!(
            teller.apply(3, &Action::Balance),
            Err(Error::AccountNotFound(3))
        );
        assert_eq!(teller.ledger().len(), 2);
    }

    #[test]
    fn test_withdraw_leaves_other_accounts_alone() {
        let mut teller = seeded_teller();
        teller.apply(1, &Action::Withdraw(40)).unwrap();
        assert_eq!(teller.ledger().get_balance(2), Ok(50));
    }

    #[test]
    fn test_next_and_finished_have_no_ledger_effect() {
        let mut teller = seeded_teller();
        assert_eq!(teller.apply(1, &Action::Next), Ok(Reply::NextCustomer));
        assert_eq!(teller.apply(1, &Action::Finished), Ok(Reply::Shutdown));
        assert_eq!(teller.ledger().get_balance(1), Ok(130));
    }
}
