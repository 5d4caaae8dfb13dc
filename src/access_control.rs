//! Admin gate for the BoogieFi marketplace
//!
//! A single privileged account set at initialization. Authorization is a
//! pure function of the explicit caller argument and the stored admin.

use odra::prelude::*;

use crate::errors::Error;

/// Single-admin access control module
#[odra::module]
pub struct AccessControl {
    /// The one privileged account
    admin: Var<Address>,
}

#[odra::module]
impl AccessControl {
    /// Set the admin. Called once at marketplace initialization.
    pub fn set_admin(&mut self, admin: Address) {
        self.admin.set(admin);
    }

    /// The admin account
    pub fn admin(&self) -> Address {
        self.admin.get().unwrap()
    }

    /// Revert unless `caller` is the admin
    pub fn assert_admin(&self, caller: Address) {
        if caller != self.admin() {
            self.env().revert(Error::Unauthorized);
        }
    }
}
