use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IdentityError {
    #[error("INN must be 10 or 12 digits, got '{0}'")]
    InvalidInn(String),
    #[error("Account number must be 20 digits, got '{0}'")]
    InvalidAccount(String),
}

/// Removes every whitespace character. Statement exports often split long
/// identifiers into groups ("4070 2810 ...").
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The company's own tax id and bank accounts, normalized once so every
/// record of an import batch can be checked against it cheaply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyIdentity {
    inn: Option<String>,
    accounts: Vec<String>,
}

impl CompanyIdentity {
    pub fn new<I, S>(inn: Option<&str>, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let inn = inn.map(strip_whitespace).filter(|s| !s.is_empty());
        let mut normalized: Vec<String> = accounts
            .into_iter()
            .map(|a| strip_whitespace(a.as_ref()))
            .filter(|a| !a.is_empty())
            .collect();
        normalized.sort();
        normalized.dedup();
        CompanyIdentity {
            inn,
            accounts: normalized,
        }
    }

    pub fn inn(&self) -> Option<&str> {
        self.inn.as_deref()
    }

    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    /// True when `inn` is non-empty after whitespace removal and equals the
    /// company's tax id.
    pub fn owns_inn(&self, inn: Option<&str>) -> bool {
        match (self.inn.as_deref(), inn.map(strip_whitespace)) {
            (Some(own), Some(other)) => !other.is_empty() && own == other,
            _ => false,
        }
    }

    pub fn owns_account(&self, account: Option<&str>) -> bool {
        match account.map(strip_whitespace) {
            Some(a) if !a.is_empty() => self.accounts.binary_search(&a).is_ok(),
            _ => false,
        }
    }

    /// Format check for values coming from configuration. Direction
    /// inference itself never rejects an identity.
    pub fn validate(&self) -> Result<(), IdentityError> {
        if let Some(inn) = &self.inn {
            let digits = inn.chars().all(|c| c.is_ascii_digit());
            if !digits || !(inn.len() == 10 || inn.len() == 12) {
                return Err(IdentityError::InvalidInn(inn.clone()));
            }
        }
        for account in &self.accounts {
            if account.len() != 20 || !account.chars().all(|c| c.is_ascii_digit()) {
                return Err(IdentityError::InvalidAccount(account.clone()));
            }
        }
        Ok(())
    }
}
