use crate::error::LedgerError;
use crate::models::{Account, Transaction};
use std::collections::HashMap;
use std::rc::Rc;

/// Every account seen in a run, keyed by name.
/// Accounts are kept in the order their names first appeared.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Creates a new, empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains `transactions` into a new ledger.
    /// The first error stops the build and no ledger is returned.
    pub fn build<I, E>(transactions: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<Transaction, E>>,
    {
        let mut ledger = Self::new();
        for transaction in transactions {
            ledger.record(transaction?);
        }
        Ok(ledger)
    }

    /// Returns the account called `name`, creating an empty one if needed.
    pub fn get_or_create(&mut self, name: &str) -> &mut Account {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                let position = self.accounts.len();
                self.accounts.push(Account::new(name));
                self.index.insert(name.to_owned(), position);
                position
            }
        };
        &mut self.accounts[position]
    }

    /// Appends a transaction to its sender's outgoing and receiver's incoming lists.
    pub fn record(&mut self, transaction: Transaction) {
        let transaction = Rc::new(transaction);

        let sender = self.get_or_create(&transaction.from);
        sender.outgoing.push(Rc::clone(&transaction));
        sender.history.push(Rc::clone(&transaction));

        let self_transfer = transaction.from == transaction.to;
        let receiver = self.get_or_create(&transaction.to);
        receiver.incoming.push(Rc::clone(&transaction));
        if !self_transfer {
            receiver.history.push(transaction);
        }
    }

    /// Looks up an account without creating it.
    pub fn account(&self, name: &str) -> Result<&Account, LedgerError> {
        self.index
            .get(name)
            .map(|&position| &self.accounts[position])
            .ok_or_else(|| LedgerError::UnknownAccount(name.to_owned()))
    }

    /// All accounts in first-appearance order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<T: IntoIterator<Item = Transaction>>(iter: T) -> Self {
        let mut ledger = Self::new();
        for transaction in iter {
            ledger.record(transaction);
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    fn tx(line: &str) -> Transaction {
        parse_line(line, ',').unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("2014-01-01,Alice,Bob,Lunch,10.00"),
            tx("2014-01-02,Bob,Alice,Dinner,5.00"),
            tx("2014-01-03,Carol,Alice,Taxi,3.20"),
        ]
    }

    #[test]
    fn test_build_indexes_both_directions() {
        let ledger: Ledger = sample().into_iter().collect();
        let alice = ledger.account("Alice").unwrap();
        assert_eq!(alice.outgoing().len(), 1);
        assert_eq!(alice.incoming().len(), 2);
        assert_eq!(alice.incoming()[0].narrative, "Dinner");
        assert_eq!(alice.incoming()[1].narrative, "Taxi");
        let names: Vec<&str> = ledger.accounts().map(|a| a.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_every_transaction_touches_two_slots() {
        let mut transactions = sample();
        transactions.push(tx("2014-01-04,Dan,Dan,Self,1"));
        let n = transactions.len();
        let ledger: Ledger = transactions.into_iter().collect();
        let slots: usize = ledger
            .accounts()
            .map(|a| a.incoming().len() + a.outgoing().len())
            .sum();
        assert_eq!(slots, 2 * n);
    }

    #[test]
    fn test_transactions_are_shared_between_accounts() {
        let ledger: Ledger = sample().into_iter().collect();
        let alice = ledger.account("Alice").unwrap();
        let bob = ledger.account("Bob").unwrap();
        assert!(Rc::ptr_eq(&alice.outgoing()[0], &bob.incoming()[0]));
    }

    #[test]
    fn test_history_follows_ingestion_order() {
        let ledger: Ledger = vec![
            tx("2014-01-05,Bob,Alice,In one,1"),
            tx("2014-01-01,Alice,Bob,Out one,1"),
            tx("2014-01-03,Alice,Alice,Self,1"),
        ]
        .into_iter()
        .collect();
        let alice = ledger.account("Alice").unwrap();
        let narratives: Vec<&str> = alice.history().iter().map(|t| t.narrative.as_str()).collect();
        assert_eq!(narratives, vec!["In one", "Out one", "Self"]);
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut ledger = Ledger::new();
        let first: *const Account = ledger.get_or_create("Alice");
        let second: *const Account = ledger.get_or_create("Alice");
        assert!(std::ptr::eq(first, second));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut ledger = Ledger::new();
        ledger.get_or_create("alice");
        ledger.get_or_create("Alice");
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_unknown_account_is_an_error() {
        let ledger: Ledger = sample().into_iter().collect();
        assert_eq!(
            ledger.account("Zed"),
            Err(LedgerError::UnknownAccount("Zed".to_owned()))
        );
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_build_stops_at_first_error() {
        let items: Vec<Result<Transaction, &str>> = vec![
            Ok(tx("2014-01-01,Alice,Bob,Lunch,10.00")),
            Err("boom"),
            Ok(tx("2014-01-02,Bob,Alice,Dinner,5.00")),
        ];
        assert_eq!(Ledger::build(items).unwrap_err(), "boom");
    }

    #[test]
    fn test_build_from_results() {
        let items = sample().into_iter().map(Ok::<_, LedgerError>);
        let ledger = Ledger::build(items).unwrap();
        assert_eq!(ledger.len(), 3);
        assert!(!ledger.is_empty());
    }
}
