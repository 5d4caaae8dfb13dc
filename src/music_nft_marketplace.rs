//! BoogieFi Marketplace - Main Contract Module
//!
//! This module implements the marketplace ledger: a fixed catalogue of
//! music NFTs minted and listed in one funded batch, purchases that pay
//! the seller and release the escrowed royalty to the artist, and
//! resales that put tokens back under marketplace custody with a fresh
//! royalty escrowed.

use odra::prelude::*;
use odra::casper_types::U512;

use crate::access_control::AccessControl;
use crate::asset_registry::AssetRegistry;
use crate::errors::Error;
use crate::events::{MarketItemBought, MarketItemRelisted};
use crate::fee_engine::FeeEngine;
use crate::types::{constants::*, MarketItem};

/// Initialization arguments for the marketplace
#[odra::odra_type]
pub struct MusicNftMarketplaceInitArgs {
    /// Royalty charged on every listing event, in motes
    pub royalty_fee: U512,
    /// Artist account receiving released royalties
    pub beneficiary: Address,
    /// Admin account allowed to change the royalty fee
    pub admin: Address,
    /// Shared base path for token metadata
    pub base_uri: String,
}

/// Main marketplace contract module
#[odra::module(events = [MarketItemBought, MarketItemRelisted], errors = Error)]
pub struct MusicNftMarketplace {
    /// Token ownership registry
    registry: SubModule<AssetRegistry>,
    /// Royalty configuration and escrow
    fees: SubModule<FeeEngine>,
    /// Admin gate
    access: SubModule<AccessControl>,
    /// Listing record per token
    items: Mapping<u64, MarketItem>,
}

#[odra::module]
impl MusicNftMarketplace {
    /// Initialize the marketplace contract
    ///
    /// # Arguments
    /// * `init_args` - Royalty fee, beneficiary, admin and metadata base path
    #[odra(init)]
    pub fn init(&mut self, init_args: MusicNftMarketplaceInitArgs) {
        self.access.set_admin(init_args.admin);
        self.fees
            .configure(init_args.royalty_fee, init_args.beneficiary);
        self.registry.set_base_uri(init_args.base_uri);
    }

    // ============================================
    // Core Entry Points
    // ============================================

    /// Mint the catalogue and list every token for sale.
    ///
    /// Callable once, by the admin, with the royalty for every listing
    /// attached: `royalty_fee * prices.len()`. Tokens are minted into the
    /// marketplace's own custody; the caller is recorded as seller of
    /// each initial listing.
    ///
    /// # Arguments
    /// * `prices` - Asking price per token, in motes; token IDs are
    ///   assigned in the same order starting at 0
    #[odra(payable)]
    pub fn mint_and_list(&mut self, prices: Vec<U512>) {
        let caller = self.env().caller();
        self.access.assert_admin(caller);

        if self.registry.token_count() > 0 {
            self.env().revert(Error::AlreadyInitialized);
        }
        for price in &prices {
            if *price == U512::zero() {
                self.env().revert(Error::InvalidPrice);
            }
        }
        let royalty_fee = self.fees.current_rate();
        let required = royalty_fee * prices.len() as u64;
        if self.env().attached_value() != required {
            self.env().revert(Error::WrongPayment);
        }

        let custody = self.env().self_address();
        for price in prices {
            let token_id = self.registry.mint(custody);
            self.items.set(
                &token_id,
                MarketItem {
                    token_id,
                    seller: Some(caller),
                    price,
                    sold: false,
                },
            );
            self.fees.escrow(token_id, royalty_fee);
        }
    }

    /// Purchase a listed token.
    ///
    /// The exact asking price must be attached; overpayment is rejected
    /// like underpayment. Pays the seller, releases the listing's
    /// escrowed royalty to the artist, and hands the token to the buyer.
    ///
    /// # Arguments
    /// * `token_id` - ID of the token to buy
    #[odra(payable)]
    pub fn buy_token(&mut self, token_id: u64) {
        let buyer = self.env().caller();
        let attached_value = self.env().attached_value();

        let mut item = self
            .items
            .get(&token_id)
            .unwrap_or_else(|| self.env().revert(Error::UnknownAsset));
        if item.sold {
            self.env().revert(Error::AlreadySold);
        }
        if attached_value != item.price {
            self.env().revert(Error::WrongPayment);
        }
        // sold == false implies a seller is recorded
        let seller = item.seller.unwrap();

        item.seller = None;
        item.sold = true;
        self.items.set(&token_id, item.clone());

        self.registry
            .transfer(token_id, self.env().self_address(), buyer);
        self.env().transfer_tokens(&seller, &item.price);
        self.fees.release(token_id);

        self.env().emit_event(MarketItemBought {
            token_id,
            seller,
            buyer,
            price: item.price,
        });
    }

    /// Relist a previously bought token.
    ///
    /// The caller must hold the token and attach the current royalty
    /// fee, which is escrowed against the new listing. Custody moves
    /// back to the marketplace until the listing sells.
    ///
    /// # Arguments
    /// * `token_id` - ID of the token to relist
    /// * `new_price` - New asking price in motes
    #[odra(payable)]
    pub fn resell_token(&mut self, token_id: u64, new_price: U512) {
        let relister = self.env().caller();
        let attached_value = self.env().attached_value();

        let holder = self.registry.owner_of(token_id);
        if holder != relister {
            self.env().revert(Error::NotHolder);
        }
        if new_price == U512::zero() {
            self.env().revert(Error::InvalidPrice);
        }
        if attached_value != self.fees.current_rate() {
            self.env().revert(Error::RoyaltyNotPaid);
        }

        let mut item = self
            .items
            .get(&token_id)
            .unwrap_or_else(|| self.env().revert(Error::UnknownAsset));
        item.seller = Some(relister);
        item.price = new_price;
        item.sold = false;
        self.items.set(&token_id, item);

        self.registry
            .transfer(token_id, relister, self.env().self_address());
        self.fees.escrow(token_id, attached_value);

        self.env().emit_event(MarketItemRelisted {
            token_id,
            seller: relister,
            price: new_price,
        });
    }

    /// Update the royalty fee.
    ///
    /// Admin only. Applies to listings created after the change;
    /// already-escrowed listings keep the amount deposited for them.
    ///
    /// # Arguments
    /// * `new_fee` - New royalty fee in motes
    pub fn update_royalty_fee(&mut self, new_fee: U512) {
        self.access.assert_admin(self.env().caller());
        self.fees.set_rate(new_fee);
    }

    // ============================================
    // View Functions
    // ============================================

    /// Collection name
    pub fn name(&self) -> String {
        String::from(COLLECTION_NAME)
    }

    /// Collection symbol
    pub fn symbol(&self) -> String {
        String::from(COLLECTION_SYMBOL)
    }

    /// Shared metadata base path
    pub fn base_uri(&self) -> String {
        self.registry.base_uri()
    }

    /// Metadata URI of a token
    pub fn token_uri(&self, token_id: u64) -> String {
        self.registry.token_uri(token_id)
    }

    /// Current royalty fee in motes
    pub fn royalty_fee(&self) -> U512 {
        self.fees.current_rate()
    }

    /// Artist account receiving released royalties
    pub fn beneficiary(&self) -> Address {
        self.fees.beneficiary()
    }

    /// Admin account
    pub fn admin(&self) -> Address {
        self.access.admin()
    }

    /// Listing record for a token
    pub fn market_item(&self, token_id: u64) -> Option<MarketItem> {
        self.items.get(&token_id)
    }

    /// Total number of tokens minted
    pub fn token_count(&self) -> u64 {
        self.registry.token_count()
    }

    /// Current holder of a token
    pub fn owner_of(&self, token_id: u64) -> Address {
        self.registry.owner_of(token_id)
    }

    /// Number of tokens currently held by `account`
    pub fn balance_of(&self, account: Address) -> u64 {
        self.registry.balance_of(account)
    }

    /// Royalty currently escrowed for a listing
    pub fn escrow_of(&self, token_id: u64) -> U512 {
        self.fees.escrow_of(token_id)
    }

    /// Get every listing still up for sale, in ascending token order
    pub fn get_all_unsold_tokens(&self) -> Vec<MarketItem> {
        let count = self.registry.token_count();
        let mut result = Vec::new();

        for token_id in 0..count {
            if let Some(item) = self.items.get(&token_id) {
                if !item.sold {
                    result.push(item);
                }
            }
        }

        result
    }

    /// Get every listing that belongs to the caller: tokens the caller
    /// holds, plus the caller's own active listings
    pub fn get_my_tokens(&self) -> Vec<MarketItem> {
        let caller = self.env().caller();
        let count = self.registry.token_count();
        let mut result = Vec::new();

        for token_id in 0..count {
            if let Some(item) = self.items.get(&token_id) {
                let holds_it = self.registry.owner_of(token_id) == caller;
                let selling_it = !item.sold && item.seller == Some(caller);
                if holds_it || selling_it {
                    result.push(item);
                }
            }
        }

        result
    }
}

// ============================================
// Tests
// ============================================
