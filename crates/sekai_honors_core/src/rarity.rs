//! Honor rarity tiers.

use serde::{Deserialize, Serialize};

/// Ordered rarity tier of a badge.
///
/// The store keeps rarity as free text; this enum is what callers use to
/// compare or filter.
///
/// # Examples
///
/// ```
/// use sekai_honors_core::HonorRarity;
///
/// assert!(HonorRarity::Low < HonorRarity::Middle);
/// assert!(HonorRarity::High < HonorRarity::Highest);
/// assert_eq!("highest".parse::<HonorRarity>().unwrap(), HonorRarity::Highest);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HonorRarity {
    /// Lowest tier
    Low,
    /// Second tier
    Middle,
    /// Third tier
    High,
    /// Top tier
    Highest,
}
