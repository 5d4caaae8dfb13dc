//! Token ownership registry for the BoogieFi marketplace
//!
//! Tracks the current holder of every minted token together with
//! per-account balances. Tokens are minted in a single batch at
//! marketplace initialization and are never burned; IDs are sequential
//! and never reused.

use odra::prelude::*;

use crate::errors::Error;

/// Ownership registry module
#[odra::module]
pub struct AssetRegistry {
    /// Current holder of each token
    holders: Mapping<u64, Address>,
    /// Number of tokens held by each account
    balances: Mapping<Address, u64>,
    /// Total number of tokens minted; also the next token ID
    token_count: Var<u64>,
    /// Shared base path for token metadata
    base_uri: Var<String>,
}

#[odra::module]
impl AssetRegistry {
    /// Set the shared metadata base path
    pub fn set_base_uri(&mut self, base_uri: String) {
        self.base_uri.set(base_uri);
    }

    /// Get the shared metadata base path
    pub fn base_uri(&self) -> String {
        self.base_uri.get_or_default()
    }

    /// Mint the next token to `to` and return its ID
    pub fn mint(&mut self, to: Address) -> u64 {
        let token_id = self.token_count.get_or_default();
        self.token_count.set(token_id + 1);
        self.holders.set(&token_id, to);
        let balance = self.balances.get_or_default(&to);
        self.balances.set(&to, balance + 1);
        token_id
    }

    /// Get the current holder of a token
    pub fn owner_of(&self, token_id: u64) -> Address {
        self.holders
            .get(&token_id)
            .unwrap_or_else(|| self.env().revert(Error::UnknownAsset))
    }

    /// Move a token from `from` to `to`.
    ///
    /// `from` must be the current holder; nothing else changes.
    pub fn transfer(&mut self, token_id: u64, from: Address, to: Address) {
        let holder = self.owner_of(token_id);
        if holder != from {
            self.env().revert(Error::NotHolder);
        }
        self.holders.set(&token_id, to);
        let from_balance = self.balances.get_or_default(&from);
        self.balances.set(&from, from_balance - 1);
        let to_balance = self.balances.get_or_default(&to);
        self.balances.set(&to, to_balance + 1);
    }

    /// Number of tokens currently held by `account`
    pub fn balance_of(&self, account: Address) -> u64 {
        self.balances.get_or_default(&account)
    }

    /// Total number of tokens minted
    pub fn token_count(&self) -> u64 {
        self.token_count.get_or_default()
    }

    /// Metadata URI for a token: the shared base path followed by the ID
    pub fn token_uri(&self, token_id: u64) -> String {
        if self.holders.get(&token_id).is_none() {
            self.env().revert(Error::UnknownAsset);
        }
        let mut uri = self.base_uri.get_or_default();
        uri.push_str(&token_id.to_string());
        uri
    }
}
