//! Entity types written by a sync run.

use serde::{Deserialize, Serialize};

/// Which table a sync run populated.
///
/// # Examples
///
/// ```
/// use sekai_honors_core::SyncType;
///
/// assert_eq!(SyncType::BondsHonors.to_string(), "bonds_honors");
/// assert_eq!(SyncType::BondsHonors.masterdata_file(), "bondsHonors.json");
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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SyncType {
    /// Ordinary honors
    Honors,
    /// Character-pair honors
    BondsHonors,
    /// Honor group metadata
    HonorGroups,
}

impl SyncType {
    /// Upstream masterdata file holding this entity type.
    pub fn masterdata_file(&self) -> &'static str {
        match self {
            SyncType::Honors => "honors.json",
            SyncType::BondsHonors => "bondsHonors.json",
            SyncType::HonorGroups => "honorGroups.json",
        }
    }
}
