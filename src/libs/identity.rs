//! Accounting identity resolution.
//!
//! A timer start must be attributed to an employee. The resolver seam
//! exists so the engine never reads configuration directly and tests can
//! inject a fixed identity.

use crate::libs::config::Config;
use crate::libs::errors::TimerError;

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub employee_id: i64,
    pub name: String,
}

pub trait IdentityResolver {
    fn resolve(&self) -> Result<Identity, TimerError>;
}

/// Resolves the identity from the saved configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigIdentity;

impl IdentityResolver for ConfigIdentity {
    fn resolve(&self) -> Result<Identity, TimerError> {
        let config = Config::read().map_err(|_| TimerError::IdentityNotFound)?;
        let employee = config.employee.ok_or(TimerError::IdentityNotFound)?;
        Ok(Identity {
            employee_id: employee.id,
            name: employee.name,
        })
    }
}
