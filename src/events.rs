//! Event definitions for the BoogieFi marketplace
//!
//! Events are emitted for completed sale cycles and can be
//! indexed by off-chain services.

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted when a listing is purchased
#[odra::event]
pub struct MarketItemBought {
    /// ID of the token that was bought
    pub token_id: u64,
    /// Seller who received the sale price
    pub seller: Address,
    /// Buyer who now holds the token
    pub buyer: Address,
    /// Price paid, in motes
    pub price: U512,
}

/// Emitted when a previously bought token is listed again
#[odra::event]
pub struct MarketItemRelisted {
    /// ID of the token that was relisted
    pub token_id: u64,
    /// Holder who relisted the token
    pub seller: Address,
    /// New asking price, in motes
    pub price: U512,
}
