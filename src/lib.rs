//! BoogieFi Marketplace - Music NFT Marketplace on Casper Network
//!
//! This contract keeps the ledger for a fixed catalogue of music NFTs:
//! - Tokens are minted and listed for sale in one funded batch
//! - Purchases pay the seller and release an escrowed royalty to the artist
//! - Buyers can resell, escrowing a fresh royalty against the new listing
//!
//! Built with Odra framework for Casper Network.

#![cfg_attr(target_arch = "wasm32", no_std)]
#![cfg_attr(target_arch = "wasm32", no_main)]

extern crate alloc;

pub mod access_control;
pub mod asset_registry;
pub mod errors;
pub mod events;
pub mod fee_engine;
pub mod music_nft_marketplace;
pub mod types;

pub use music_nft_marketplace::MusicNftMarketplace;
