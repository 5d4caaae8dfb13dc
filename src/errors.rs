//! Error definitions for the BoogieFi marketplace

use odra::prelude::*;

/// Custom errors for the BoogieFi marketplace contract
#[odra::odra_error]
pub enum Error {
    /// Mint batch was called after the catalogue already exists
    AlreadyInitialized = 1,
    /// Token with the given ID was never minted
    UnknownAsset = 2,
    /// Listing has already been sold
    AlreadySold = 3,
    /// Attached value does not equal the required exact amount
    WrongPayment = 4,
    /// Account does not currently hold the token
    NotHolder = 5,
    /// Listing price must be greater than zero
    InvalidPrice = 6,
    /// Attached royalty does not equal the current royalty fee
    RoyaltyNotPaid = 7,
    /// Caller is not the admin
    Unauthorized = 8,
    /// No royalty is escrowed for the listing
    NoEscrow = 9,
}
