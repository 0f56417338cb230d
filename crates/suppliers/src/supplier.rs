use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supplier identifier, assigned by the store on first save.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(i64);

impl SupplierId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for SupplierId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SupplierId> for i64 {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}

impl FromStr for SupplierId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Contact details for a supplier (free-form, unvalidated).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A supplier record.
///
/// `id` is `None` until the store assigns one on first save. `cnpj` holds the
/// 14-digit tax identifier; every record that reaches a store has passed
/// [`crate::cnpj::is_valid_cnpj_str`] at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Option<SupplierId>,
    pub name: String,
    pub cnpj: String,
    pub contact: Contact,
}

impl Supplier {
    /// A not-yet-persisted record.
    pub fn new(name: impl Into<String>, cnpj: impl Into<String>, contact: Contact) -> Self {
        Self {
            id: None,
            name: name.into(),
            cnpj: cnpj.into(),
            contact,
        }
    }

    /// Copy of this record with the given identity.
    pub fn with_id(mut self, id: SupplierId) -> Self {
        self.id = Some(id);
        self
    }
}
