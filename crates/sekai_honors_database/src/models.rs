//! Diesel models for the honor store tables.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use sekai_honors_core::{Levels, Server, SyncType};
use sekai_honors_error::DatabaseError;
use serde::Serialize;

/// Database row for the `honors` table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::honors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HonorRow {
    pub id: i32,
    pub server: String,
    pub honor_id: i32,
    pub seq: Option<i32>,
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
    pub honor_rarity: Option<String>,
    pub name: String,
    pub asset_bundle_name: Option<String>,
    pub levels: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full honor record as written by an upsert, keyed by `(server, honor_id)`.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::honors)]
pub struct NewHonorRow {
    pub server: String,
    pub honor_id: i32,
    pub seq: Option<i32>,
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
    pub honor_rarity: Option<String>,
    pub name: String,
    pub asset_bundle_name: Option<String>,
    pub levels: serde_json::Value,
}

impl NewHonorRow {
    /// Start a record with only its key and name set.
    pub fn new(server: Server, honor_id: i32, name: impl Into<String>) -> Self {
        Self {
            server: server.to_string(),
            honor_id,
            seq: None,
            group_id: None,
            group_name: None,
            honor_rarity: None,
            name: name.into(),
            asset_bundle_name: None,
            levels: Levels::default().into_inner(),
        }
    }

    /// Reject records the store would not accept.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        Server::parse_tag(&self.server)?;
        Levels::validate(&self.levels)
    }
}

/// Database row for the `bonds_honors` table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::bonds_honors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BondsHonorRow {
    pub id: i32,
    pub server: String,
    pub bonds_honor_id: i32,
    pub seq: Option<i32>,
    pub bonds_group_id: Option<i32>,
    pub game_character_unit_id1: Option<i32>,
    pub game_character_unit_id2: Option<i32>,
    pub honor_rarity: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub levels: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full bonds honor record, keyed by `(server, bonds_honor_id)`.
///
/// The character pair is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::bonds_honors)]
pub struct NewBondsHonorRow {
    pub server: String,
    pub bonds_honor_id: i32,
    pub seq: Option<i32>,
    pub bonds_group_id: Option<i32>,
    pub game_character_unit_id1: Option<i32>,
    pub game_character_unit_id2: Option<i32>,
    pub honor_rarity: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub levels: serde_json::Value,
}

impl NewBondsHonorRow {
    /// Start a record with only its key and name set.
    pub fn new(server: Server, bonds_honor_id: i32, name: impl Into<String>) -> Self {
        Self {
            server: server.to_string(),
            bonds_honor_id,
            seq: None,
            bonds_group_id: None,
            game_character_unit_id1: None,
            game_character_unit_id2: None,
            honor_rarity: None,
            name: name.into(),
            description: None,
            levels: Levels::default().into_inner(),
        }
    }

    /// Reject records the store would not accept.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        Server::parse_tag(&self.server)?;
        Levels::validate(&self.levels)
    }
}

/// Database row for the `honor_groups` table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::honor_groups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HonorGroupRow {
    pub id: i32,
    pub server: String,
    pub group_id: i32,
    pub name: String,
    pub honor_type: Option<String>,
    pub background_asset_bundle_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full honor group record, keyed by `(server, group_id)`.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::honor_groups)]
pub struct NewHonorGroupRow {
    pub server: String,
    pub group_id: i32,
    pub name: String,
    pub honor_type: Option<String>,
    pub background_asset_bundle_name: Option<String>,
}

impl NewHonorGroupRow {
    /// Start a record with only its key and name set.
    pub fn new(server: Server, group_id: i32, name: impl Into<String>) -> Self {
        Self {
            server: server.to_string(),
            group_id,
            name: name.into(),
            honor_type: None,
            background_asset_bundle_name: None,
        }
    }

    /// Reject records the store would not accept.
    pub fn validate(&self) -> Result<(), DatabaseError> {
        Server::parse_tag(&self.server).map(|_| ())
    }
}

/// Database row for the `sync_logs` table.
#[derive(Debug, Clone, PartialEq, Queryable, Identifiable, Selectable, Serialize)]
#[diesel(table_name = crate::schema::sync_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SyncLogRow {
    pub id: i32,
    pub server: String,
    pub sync_type: String,
    pub record_count: i32,
    pub success: bool,
    pub error_message: Option<String>,
    pub synced_at: DateTime<Utc>,
}

/// Insertable outcome of one sync run. `synced_at` defaults to now.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = crate::schema::sync_logs)]
pub struct NewSyncLogRow {
    pub server: String,
    pub sync_type: String,
    pub record_count: i32,
    pub success: bool,
    pub error_message: Option<String>,
}

impl NewSyncLogRow {
    /// A successful run that processed `record_count` records.
    pub fn succeeded(server: Server, sync_type: SyncType, record_count: i32) -> Self {
        Self {
            server: server.to_string(),
            sync_type: sync_type.to_string(),
            record_count,
            success: true,
            error_message: None,
        }
    }

    /// A failed run.
    pub fn failed(server: Server, sync_type: SyncType, error: impl std::fmt::Display) -> Self {
        Self {
            server: server.to_string(),
            sync_type: sync_type.to_string(),
            record_count: 0,
            success: false,
            error_message: Some(error.to_string()),
        }
    }
}

/// Row of the `v_honors_with_group` view.
///
/// `honor_group_name` is the honor's own denormalized copy; `group_name`,
/// `honor_type` and `group_background_asset_bundle_name` come from the joined
/// group and are `None` when no group matches.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = crate::views::v_honors_with_group)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct HonorWithGroupRow {
    pub id: i32,
    pub server: String,
    pub honor_id: i32,
    pub seq: Option<i32>,
    pub group_id: Option<i32>,
    pub honor_group_name: Option<String>,
    pub honor_rarity: Option<String>,
    pub name: String,
    pub asset_bundle_name: Option<String>,
    pub levels: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub group_name: Option<String>,
    pub honor_type: Option<String>,
    pub group_background_asset_bundle_name: Option<String>,
}
