//! The license holder's identity and where it comes from.

use crate::error::Result;

/// The name/email pair attributed to the license holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Something that can report the invoking user's configured identity.
///
/// Production code reads git configuration ([`crate::git::GitIdentity`]);
/// a failure aborts the run before any prompt is shown.
pub trait IdentitySource {
    fn fetch_identity(&self) -> Result<Identity>;
}

/// An identity supplied up front (e.g. from command-line flags).
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub Identity);

impl IdentitySource for FixedIdentity {
    fn fetch_identity(&self) -> Result<Identity> {
        Ok(self.0.clone())
    }
}
