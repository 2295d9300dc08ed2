use corral_parties::OperatorRef;

/// Operator identity for a request.
///
/// Supplied by the external authentication collaborator and attached by the
/// middleware; must be present for all domain routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorContext {
    operator: OperatorRef,
}

impl OperatorContext {
    pub fn new(operator: OperatorRef) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> &OperatorRef {
        &self.operator
    }
}
