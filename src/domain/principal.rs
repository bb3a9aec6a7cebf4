use std::fmt;
use std::net::IpAddr;

/// Durable identifier of an authenticated account, issued by the upstream
/// identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identity quota usage is tracked against.
///
/// Accounts and guests live in disjoint key spaces: an account whose id
/// happens to look like an address never shares records with that guest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    Account(AccountId),
    Guest(IpAddr),
}

impl Principal {
    pub fn account(id: impl Into<String>) -> Self {
        Self::Account(AccountId::new(id))
    }

    pub fn guest(addr: IpAddr) -> Self {
        Self::Guest(addr)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Account(_))
    }

    /// Identity class without the identifying value, safe for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Account(_) => "account",
            Self::Guest(_) => "guest",
        }
    }

    pub fn account_id(&self) -> Option<&AccountId> {
        match self {
            Self::Account(id) => Some(id),
            Self::Guest(_) => None,
        }
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(id) => write!(f, "account:{}", id),
            Self::Guest(addr) => write!(f, "guest:{}", addr),
        }
    }
}
