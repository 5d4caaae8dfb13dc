//! Royalty configuration and escrow for the BoogieFi marketplace
//!
//! Every active listing carries an escrowed royalty, deposited when the
//! listing is created and released to the beneficiary when it sells. The
//! escrowed amount is fixed at deposit time; a later fee change only
//! applies to listings created after it.

use odra::prelude::*;
use odra::casper_types::U512;

use crate::errors::Error;

/// Royalty fee and escrow module
#[odra::module]
pub struct FeeEngine {
    /// Royalty charged on every listing event, in motes
    royalty_fee: Var<U512>,
    /// Account receiving released royalties
    beneficiary: Var<Address>,
    /// Outstanding royalty liability per listing; `None` once released
    escrows: Mapping<u64, Option<U512>>,
}

#[odra::module]
impl FeeEngine {
    /// Set the royalty rate and beneficiary. Called once at marketplace
    /// initialization.
    pub fn configure(&mut self, royalty_fee: U512, beneficiary: Address) {
        self.royalty_fee.set(royalty_fee);
        self.beneficiary.set(beneficiary);
    }

    /// Current royalty fee charged per listing event
    pub fn current_rate(&self) -> U512 {
        self.royalty_fee.get_or_default()
    }

    /// Update the royalty fee. Amounts already escrowed keep the rate
    /// they were deposited at.
    pub fn set_rate(&mut self, new_fee: U512) {
        self.royalty_fee.set(new_fee);
    }

    /// Account receiving released royalties
    pub fn beneficiary(&self) -> Address {
        self.beneficiary.get().unwrap()
    }

    /// Record `amount` as the outstanding royalty liability for a listing
    pub fn escrow(&mut self, token_id: u64, amount: U512) {
        self.escrows.set(&token_id, Some(amount));
    }

    /// Pay the escrowed royalty for a listing to the beneficiary and
    /// clear the liability. Reverts when nothing is escrowed; the
    /// marketplace only releases listings it has escrowed for, so hitting
    /// this is a bug, not user error.
    pub fn release(&mut self, token_id: u64) -> U512 {
        let amount = self
            .escrows
            .get_or_default(&token_id)
            .unwrap_or_else(|| self.env().revert(Error::NoEscrow));
        self.escrows.set(&token_id, None);
        let beneficiary = self.beneficiary.get().unwrap();
        self.env().transfer_tokens(&beneficiary, &amount);
        amount
    }

    /// Royalty currently escrowed for a listing
    pub fn escrow_of(&self, token_id: u64) -> U512 {
        self.escrows.get_or_default(&token_id).unwrap_or_default()
    }
}
