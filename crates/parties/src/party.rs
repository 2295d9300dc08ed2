use serde::{Deserialize, Serialize};

use corral_core::{CustomerId, DomainError, DomainResult, OperatorId, SupplierId};

/// Customer record (the counterparty of a sale).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { id, name })
    }

    pub fn to_ref(&self) -> CustomerRef {
        CustomerRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Supplier record (the counterparty of a purchase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { id, name })
    }

    pub fn to_ref(&self) -> SupplierRef {
        SupplierRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Operator identity attributed to a sale.
///
/// Supplied by the authentication collaborator; this crate never validates
/// or manages credentials, only records who sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: OperatorId,
    pub username: String,
}

impl Operator {
    pub fn new(id: OperatorId, username: impl Into<String>) -> DomainResult<Self> {
        let username = username.into();
        validate_name(&username)?;
        Ok(Self { id, username })
    }

    pub fn to_ref(&self) -> OperatorRef {
        OperatorRef {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Name snapshot of a customer, embedded in sale headers.
///
/// Snapshots keep lists, filters and exports join-free and preserve what the
/// document said at write time even if the party is later renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    pub name: String,
}

/// Name snapshot of a supplier, embedded in purchase headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierRef {
    pub id: SupplierId,
    pub name: String,
}

/// Username snapshot of an operator, embedded in sale headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRef {
    pub id: OperatorId,
    pub username: String,
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}
