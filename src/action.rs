//! The five customer-selectable actions and the raw-token grammar that
//! produces them.
//!
//! One input line is one action: a case-insensitive word (or its first
//! letter), plus a positive integer amount for withdraw/deposit. Anything
//! outside this fixed set is an explicit [`Error::InvalidAction`], never a
//! silent default.

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Balance,
    Withdraw(i64),
    Deposit(i64),
    Next,
    Finished,
}

impl Action {
    /// Parses one raw input line. The line is expected to be trimmed and
    /// non-empty; blank-line handling belongs to the session driver.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut parts = line.split_whitespace();
        let token = parts
            .next()
            .ok_or_else(|| Error::InvalidAction(line.to_string()))?;

        let action = match token.to_ascii_lowercase().as_str() {
            "b" | "balance" => Action::Balance,
            "w" | "withdraw" => Action::Withdraw(parse_amount(parts.next())?),
            "d" | "deposit" => Action::Deposit(parse_amount(parts.next())?),
            "n" | "next" => Action::Next,
            "f" | "finished" => Action::Finished,
            _ => return Err(Error::InvalidAction(line.to_string())),
        };

        // Trailing tokens invalidate the whole line
        if parts.next().is_some() {
            return Err(Error::InvalidAction(line.to_string()));
        }
        Ok(action)
    }
}

fn parse_amount(token: Option<&str>) -> Result<i64, Error> {
    let amount: i64 = token
        .ok_or(Error::InvalidAmount)?
        .parse()
        .map_err(|_| Error::InvalidAmount)?;
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balance() {
        assert_eq!(Action::parse("balance"), Ok(Action::Balance));
        assert_eq!(Action::parse("b"), Ok(Action::Balance));
        assert_eq!(Action::parse("BALANCE"), Ok(Action::Balance));
    }

    #[test]
    fn test_parse_withdraw() {
        assert_eq!(Action::parse("withdraw 40"), Ok(Action::Withdraw(40)));
        assert_eq!(Action::parse("w 40"), Ok(Action::Withdraw(40)));
        assert_eq!(Action::parse("W 1"), Ok(Action::Withdraw(1)));
    }

    #[test]
    fn test_parse_deposit() {
        assert_eq!(Action::parse("deposit 25"), Ok(Action::Deposit(25)));
        assert_eq!(Action::parse("d 25"), Ok(Action::Deposit(25)));
    }

    #[test]
    fn test_parse_next_and_finished() {
        assert_eq!(Action::parse("next"), Ok(Action::Next));
        assert_eq!(Action::parse("n"), Ok(Action::Next));
        assert_eq!(Action::parse("finished"), Ok(Action::Finished));
        assert_eq!(Action::parse("f"), Ok(Action::Finished));
    }

    #[test]
    fn test_parse_unknown_token() {
        assert_eq!(
            Action::parse("transfer 5"),
            Err(Error::InvalidAction("transfer 5".to_string()))
        );
        assert_eq!(
            Action::parse("x"),
            Err(Error::InvalidAction("x".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_amount() {
        assert_eq!(Action::parse("withdraw"), Err(Error::InvalidAmount));
        assert_eq!(Action::parse("deposit"), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_parse_malformed_amount() {
        assert_eq!(Action::parse("withdraw abc"), Err(Error::InvalidAmount));
        assert_eq!(Action::parse("deposit 1.5"), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_parse_nonpositive_amount() {
        assert_eq!(Action::parse("withdraw 0"), Err(Error::InvalidAmount));
        assert_eq!(Action::parse("deposit -10"), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_parse_trailing_tokens() {
        assert_eq!(
            Action::parse("balance 5"),
            Err(Error::InvalidAction("balance 5".to_string()))
        );
        assert_eq!(
            Action::parse("withdraw 40 now"),
            Err(Error::InvalidAction("withdraw 40 now".to_string()))
        );
    }
}
