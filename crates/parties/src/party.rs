use serde::{Deserialize, Serialize};

use tuxmart_core::{DomainResult, Entity, PartyId};

/// Buyer or seller on an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Party {
    id: PartyId,
    name: String,
}

impl Party {
    pub fn new(id: PartyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Build a party from a raw id string, validating the id.
    pub fn parse(id: &str, name: impl Into<String>) -> DomainResult<Self> {
        Ok(Self::new(id.parse()?, name))
    }

    pub fn id_typed(&self) -> &PartyId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Party {
    type Id = PartyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Party {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} <{}>", self.name, self.id)
        }
    }
}
