//! Filters accepted by the store's list operations.

/// Optional narrowing of a honor listing within one server.
///
/// # Examples
///
/// ```
/// use sekai_honors_core::{HonorFilter, HonorRarity};
///
/// let filter = HonorFilter::default()
///     .with_group_id(5)
///     .with_rarity(HonorRarity::High)
///     .with_limit(10);
/// assert_eq!(filter.group_id, Some(5));
/// assert_eq!(filter.rarity.as_deref(), Some("high"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HonorFilter {
    /// Only honors in this group
    pub group_id: Option<i32>,
    /// Only honors with this rarity string
    pub rarity: Option<String>,
    /// Maximum number of rows
    pub limit: Option<i64>,
}

impl HonorFilter {
    /// Restrict to one honor group.
    pub fn with_group_id(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Restrict to one rarity. Accepts a `HonorRarity` or any raw string.
    pub fn with_rarity(mut self, rarity: impl AsRef<str>) -> Self {
        self.rarity = Some(rarity.as_ref().to_string());
        self
    }

    /// Cap the number of rows returned.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Optional narrowing of a bonds honor listing within one server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BondsHonorFilter {
    /// Only bonds honors in this bonds group
    pub bonds_group_id: Option<i32>,
    /// Only bonds honors involving this character unit, on either side
    pub character_unit_id: Option<i32>,
    /// Only bonds honors with this rarity string
    pub rarity: Option<String>,
    /// Maximum number of rows
    pub limit: Option<i64>,
}

impl BondsHonorFilter {
    /// Restrict to one bonds group.
    pub fn with_bonds_group_id(mut self, bonds_group_id: i32) -> Self {
        self.bonds_group_id = Some(bonds_group_id);
        self
    }

    /// Restrict to pairs that include this character unit.
    pub fn with_character_unit_id(mut self, unit_id: i32) -> Self {
        self.character_unit_id = Some(unit_id);
        self
    }

    /// Restrict to one rarity.
    pub fn with_rarity(mut self, rarity: impl AsRef<str>) -> Self {
        self.rarity = Some(rarity.as_ref().to_string());
        self
    }

    /// Cap the number of rows returned.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Optional narrowing of a honor group listing within one server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HonorGroupFilter {
    /// Only groups with this honor type
    pub honor_type: Option<String>,
    /// Maximum number of rows
    pub limit: Option<i64>,
}

impl HonorGroupFilter {
    /// Restrict to one honor type.
    pub fn with_honor_type(mut self, honor_type: impl Into<String>) -> Self {
        self.honor_type = Some(honor_type.into());
        self
    }

    /// Cap the number of rows returned.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
