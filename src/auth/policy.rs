use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::warn;

use crate::auth::Claims;
use crate::error::ApiError;
use crate::types::{Operation, Role};

/// Identity of whoever sent the request. Anonymous callers hold no roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Caller {
    pub email: Option<String>,
    pub roles: BTreeSet<Role>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }

    pub fn has_role(&self, required: Role) -> bool {
        self.roles.iter().any(|role| role.satisfies(required))
    }

    /// Name for log fields
    pub fn label(&self) -> &str {
        self.email.as_deref().unwrap_or("anonymous")
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Self {
            email: Some(claims.sub),
            roles: claims.roles.into_iter().collect(),
        }
    }
}

/// Required role per operation
#[derive(Debug, Clone, PartialEq)]
pub struct AccessPolicy {
    rules: BTreeMap<Operation, Role>,
}

impl AccessPolicy {
    /// Reads for users, writes for admins
    pub fn standard() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
        .require(Operation::List, Role::User)
        .require(Operation::Get, Role::User)
        .require(Operation::Create, Role::Admin)
        .require(Operation::Update, Role::Admin)
        .require(Operation::Delete, Role::Admin)
    }

    pub fn require(mut self, operation: Operation, role: Role) -> Self {
        self.rules.insert(operation, role);
        self
    }

    /// Operations without a rule are admin-only
    pub fn required_role(&self, operation: Operation) -> Role {
        self.rules.get(&operation).copied().unwrap_or(Role::Admin)
    }

    /// Single authorization checkpoint, evaluated before any lookup
    pub fn authorize(&self, caller: &Caller, resource: &str, operation: Operation) -> Result<(), ApiError> {
        let required = self.required_role(operation);
        if caller.has_role(required) {
            return Ok(());
        }

        warn!(
            caller = caller.label(),
            resource,
            operation = operation.as_str(),
            required = required.as_str(),
            "Access denied"
        );
        Err(ApiError::forbidden("Access is denied"))
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
