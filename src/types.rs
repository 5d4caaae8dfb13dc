//! Data type definitions for the BoogieFi marketplace

use odra::prelude::*;
use odra::casper_types::U512;

/// Sale-state record paired 1:1 with a minted token.
///
/// Created together with its token by the mint batch and never removed,
/// only mutated by `buy_token` and `resell_token`. While a listing is
/// unsold the token itself sits in the contract's own custody; `seller`
/// records who gets paid on sale. A sold item has no seller.
#[odra::odra_type]
#[derive(Default)]
pub struct MarketItem {
    /// ID of the token this listing belongs to
    pub token_id: u64,
    /// Account to pay on sale; `None` once the listing is sold
    pub seller: Option<Address>,
    /// Asking price in motes (1 CSPR = 10^9 motes)
    pub price: U512,
    /// Whether this listing has been sold
    pub sold: bool,
}

/// Collection constants
pub mod constants {
    /// Collection name reported by the `name` entry point
    pub const COLLECTION_NAME: &str = "BoogieFi";
    /// Collection symbol reported by the `symbol` entry point
    pub const COLLECTION_SYMBOL: &str = "BooFi";
}
