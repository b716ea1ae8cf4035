//! Core domain types for the Sekai honors store.
//!
//! These types carry no storage concerns: server tags that partition every
//! table, the rarity and sync-type vocabularies, the opaque `levels` payload,
//! and the filters accepted by the store's list operations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filter;
mod ids;
mod levels;
mod rarity;
mod server;
mod sync_type;

pub use filter::{BondsHonorFilter, HonorFilter, HonorGroupFilter};
pub use ids::{narrow_id, narrow_optional_id};
pub use levels::Levels;
pub use rarity::HonorRarity;
pub use server::Server;
pub use sync_type::SyncType;
