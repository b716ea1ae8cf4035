//! Upstream masterdata records and their conversion to store rows.

use crate::SyncResult;
use sekai_honors_core::{Levels, Server, SyncType, narrow_id, narrow_optional_id};
use sekai_honors_database::{NewBondsHonorRow, NewHonorGroupRow, NewHonorRow};
use sekai_honors_error::{DatabaseError, SyncError, SyncErrorKind};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// One entry of `honors.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterHonor {
    /// Upstream honor id
    pub id: i64,
    /// Ordering hint
    pub seq: Option<i64>,
    /// Honor group, if any
    pub group_id: Option<i64>,
    /// Rarity tier as upstream spells it
    pub honor_rarity: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Asset bundle reference
    pub assetbundle_name: Option<String>,
    /// Per-level records, passed through untouched
    pub levels: Option<Value>,
}

impl MasterHonor {
    /// Convert to a store row, copying the group name when the group is known.
    pub fn into_row(
        self,
        server: Server,
        group_names: &HashMap<i32, String>,
    ) -> Result<NewHonorRow, DatabaseError> {
        let group_id = narrow_optional_id("honors.groupId", self.group_id)?;
        Ok(NewHonorRow {
            server: server.to_string(),
            honor_id: narrow_id("honors.id", self.id)?,
            seq: narrow_optional_id("honors.seq", self.seq)?,
            group_id,
            group_name: group_id.and_then(|id| group_names.get(&id).cloned()),
            honor_rarity: self.honor_rarity,
            name: self.name,
            asset_bundle_name: self.assetbundle_name,
            levels: Levels::from_upstream(self.levels)?.into_inner(),
        })
    }
}

/// One entry of `bondsHonors.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterBondsHonor {
    /// Upstream bonds honor id
    pub id: i64,
    /// Ordering hint
    pub seq: Option<i64>,
    /// Bonds group, a separate domain from honor groups
    pub bonds_group_id: Option<i64>,
    /// First character unit of the pair
    pub game_character_unit_id1: Option<i64>,
    /// Second character unit of the pair
    pub game_character_unit_id2: Option<i64>,
    /// Rarity tier as upstream spells it
    pub honor_rarity: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Per-level records, passed through untouched
    pub levels: Option<Value>,
}

impl MasterBondsHonor {
    /// Convert to a store row. The character pair keeps upstream order.
    pub fn into_row(self, server: Server) -> Result<NewBondsHonorRow, DatabaseError> {
        Ok(NewBondsHonorRow {
            server: server.to_string(),
            bonds_honor_id: narrow_id("bondsHonors.id", self.id)?,
            seq: narrow_optional_id("bondsHonors.seq", self.seq)?,
            bonds_group_id: narrow_optional_id("bondsHonors.bondsGroupId", self.bonds_group_id)?,
            game_character_unit_id1: narrow_optional_id(
                "bondsHonors.gameCharacterUnitId1",
                self.game_character_unit_id1,
            )?,
            game_character_unit_id2: narrow_optional_id(
                "bondsHonors.gameCharacterUnitId2",
                self.game_character_unit_id2,
            )?,
            honor_rarity: self.honor_rarity,
            name: self.name,
            description: self.description,
            levels: Levels::from_upstream(self.levels)?.into_inner(),
        })
    }
}

/// One entry of `honorGroups.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterHonorGroup {
    /// Upstream group id
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Classification tag
    pub honor_type: Option<String>,
    /// Background asset bundle reference
    pub background_assetbundle_name: Option<String>,
}

impl MasterHonorGroup {
    /// Convert to a store row.
    pub fn into_row(self, server: Server) -> Result<NewHonorGroupRow, DatabaseError> {
        Ok(NewHonorGroupRow {
            server: server.to_string(),
            group_id: narrow_id("honorGroups.id", self.id)?,
            name: self.name,
            honor_type: self.honor_type,
            background_asset_bundle_name: self.background_assetbundle_name,
        })
    }
}

/// Decode a fetched masterdata file into typed records.
///
/// # Errors
/// `Decode` if the payload is not an array or an entry does not match `T`.
pub fn decode_records<T: DeserializeOwned>(
    sync_type: SyncType,
    payload: Value,
) -> SyncResult<Vec<T>> {
    let file = sync_type.masterdata_file();
    let decode_error = |message: String| {
        SyncError::new(SyncErrorKind::Decode {
            file: file.to_string(),
            message,
        })
    };

    let Value::Array(items) = payload else {
        return Err(decode_error("expected a JSON array".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(pos, item)| {
            serde_json::from_value(item).map_err(|e| decode_error(format!("entry {}: {}", pos, e)))
        })
        .collect()
}
