//! Sync runs against an in-memory source and target.

use async_trait::async_trait;
use sekai_honors_core::{Server, SyncType};
use sekai_honors_database::{
    DatabaseError, DatabaseErrorKind, DatabaseResult, NewBondsHonorRow, NewHonorGroupRow,
    NewHonorRow, NewSyncLogRow,
};
use sekai_honors_error::{SyncError, SyncErrorKind};
use sekai_honors_sync::{HonorsSyncer, MasterdataSource, SyncResult, SyncTarget};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Serves fixed payloads by file name; anything else fails to fetch.
#[derive(Default)]
struct StaticSource {
    files: HashMap<&'static str, Value>,
}

impl StaticSource {
    fn with(mut self, file: &'static str, payload: Value) -> Self {
        self.files.insert(file, payload);
        self
    }
}

#[async_trait]
impl MasterdataSource for StaticSource {
    async fn fetch(&self, _server: Server, file: &str) -> SyncResult<Value> {
        self.files.get(file).cloned().ok_or_else(|| {
            SyncError::new(SyncErrorKind::Fetch {
                file: file.to_string(),
                message: "404 Not Found".to_string(),
            })
        })
    }
}

/// Keyed in-memory tables with optional injected write failure.
#[derive(Default)]
struct MemoryTarget {
    groups: HashMap<(String, i32), NewHonorGroupRow>,
    honors: HashMap<(String, i32), NewHonorRow>,
    bonds: HashMap<(String, i32), NewBondsHonorRow>,
    logs: Vec<NewSyncLogRow>,
    fail_honors: bool,
    fail_logs: bool,
}

impl SyncTarget for MemoryTarget {
    fn upsert_honor_groups(&mut self, groups: &[NewHonorGroupRow]) -> DatabaseResult<usize> {
        for group in groups {
            group.validate()?;
            self.groups
                .insert((group.server.clone(), group.group_id), group.clone());
        }
        Ok(groups.len())
    }

    fn upsert_honors(&mut self, honors: &[NewHonorRow]) -> DatabaseResult<usize> {
        if self.fail_honors {
            return Err(DatabaseError::new(DatabaseErrorKind::StorageUnavailable(
                "connection reset".to_string(),
            )));
        }
        for honor in honors {
            honor.validate()?;
            self.honors
                .insert((honor.server.clone(), honor.honor_id), honor.clone());
        }
        Ok(honors.len())
    }

    fn upsert_bonds_honors(&mut self, honors: &[NewBondsHonorRow]) -> DatabaseResult<usize> {
        for honor in honors {
            honor.validate()?;
            self.bonds
                .insert((honor.server.clone(), honor.bonds_honor_id), honor.clone());
        }
        Ok(honors.len())
    }

    fn append_sync_log(&mut self, entry: &NewSyncLogRow) -> DatabaseResult<()> {
        if self.fail_logs {
            return Err(DatabaseError::new(DatabaseErrorKind::StorageUnavailable(
                "sync_logs is read-only".to_string(),
            )));
        }
        self.logs.push(entry.clone());
        Ok(())
    }
}

fn full_source() -> StaticSource {
    StaticSource::default()
        .with(
            "honorGroups.json",
            json!([
                {"id": 5, "name": "Seasonal", "honorType": "event", "backgroundAssetbundleName": "bg_5"},
                {"id": 6, "name": "Rank", "honorType": "rank_match"}
            ]),
        )
        .with(
            "honors.json",
            json!([
                {"id": 42, "seq": 1, "groupId": 5, "honorRarity": "high", "name": "Ace", "levels": []},
                {"id": 43, "seq": 2, "groupId": 99, "honorRarity": "low", "name": "Orphan"},
                {"id": 44, "seq": 3, "honorRarity": "highest", "name": "Loner", "levels": [{"level": 1}]}
            ]),
        )
        .with(
            "bondsHonors.json",
            json!([
                {"id": 1, "seq": 1, "bondsGroupId": 10, "gameCharacterUnitId1": 1,
                 "gameCharacterUnitId2": 2, "honorRarity": "low", "name": "Pair",
                 "description": "Bond", "levels": [{"level": 1}, {"level": 2}]}
            ]),
        )
}

#[tokio::test]
async fn full_sync_writes_every_type_and_one_log_each() {
    let syncer = HonorsSyncer::new(full_source());
    let mut target = MemoryTarget::default();

    let report = syncer.run(&mut target, Server::Jp).await;

    assert!(report.is_success());
    assert_eq!(report.total_records(), 6);
    assert_eq!(target.groups.len(), 2);
    assert_eq!(target.honors.len(), 3);
    assert_eq!(target.bonds.len(), 1);

    let types: Vec<_> = target.logs.iter().map(|l| l.sync_type.as_str()).collect();
    assert_eq!(types, vec!["honor_groups", "honors", "bonds_honors"]);
    assert!(target.logs.iter().all(|l| l.success && l.server == "jp"));
    assert_eq!(target.logs[1].record_count, 3);
}

#[tokio::test]
async fn honors_carry_group_name_from_same_run() {
    let syncer = HonorsSyncer::new(full_source());
    let mut target = MemoryTarget::default();
    syncer.run(&mut target, Server::En).await;

    let ace = &target.honors[&("en".to_string(), 42)];
    assert_eq!(ace.group_name.as_deref(), Some("Seasonal"));

    let orphan = &target.honors[&("en".to_string(), 43)];
    assert_eq!(orphan.group_id, Some(99));
    assert!(orphan.group_name.is_none());

    let loner = &target.honors[&("en".to_string(), 44)];
    assert_eq!(loner.levels, json!([{"level": 1}]));
    let orphan_levels = &orphan.levels;
    assert_eq!(orphan_levels, &json!([]));
}

#[tokio::test]
async fn failed_fetch_is_logged_and_does_not_block_others() {
    let source = StaticSource::default()
        .with("honorGroups.json", json!([{"id": 5, "name": "Seasonal"}]))
        .with("bondsHonors.json", json!([]));
    let syncer = HonorsSyncer::new(source);
    let mut target = MemoryTarget::default();

    let report = syncer.run(&mut target, Server::Cn).await;

    assert!(!report.is_success());
    let honors = report.outcome(SyncType::Honors).unwrap();
    assert_eq!(honors.record_count, 0);
    assert!(honors.error.as_deref().unwrap().contains("honors.json"));

    assert!(report.outcome(SyncType::HonorGroups).unwrap().is_success());
    assert!(report.outcome(SyncType::BondsHonors).unwrap().is_success());

    assert_eq!(target.logs.len(), 3);
    let failed = &target.logs[1];
    assert_eq!(failed.sync_type, "honors");
    assert!(!failed.success);
    assert!(failed.error_message.as_deref().unwrap().contains("404 Not Found"));
}

#[tokio::test]
async fn store_failure_is_recorded_not_raised() {
    let syncer = HonorsSyncer::new(full_source());
    let mut target = MemoryTarget {
        fail_honors: true,
        ..Default::default()
    };

    let report = syncer.run(&mut target, Server::Tw).await;

    assert!(!report.is_success());
    assert!(target.honors.is_empty());
    assert_eq!(target.groups.len(), 2);
    assert_eq!(target.bonds.len(), 1);

    let failed = target.logs.iter().find(|l| l.sync_type == "honors").unwrap();
    assert!(!failed.success);
    assert!(failed.error_message.as_deref().unwrap().contains("connection reset"));
}

#[tokio::test]
async fn unwritable_sync_log_fails_the_run() {
    let syncer = HonorsSyncer::new(full_source());
    let mut target = MemoryTarget {
        fail_logs: true,
        ..Default::default()
    };

    let report = syncer.run(&mut target, Server::Jp).await;

    assert!(target.logs.is_empty());
    assert_eq!(target.honors.len(), 3);
    assert!(!report.is_success());
    for outcome in &report.outcomes {
        assert!(outcome.error.is_none());
        assert!(!outcome.is_success());
        assert!(outcome.log_error.as_deref().unwrap().contains("read-only"));
    }
}

#[tokio::test]
async fn malformed_record_fails_only_its_type() {
    let source = full_source().with(
        "bondsHonors.json",
        json!([{"id": 1, "name": "Broken", "levels": {"level": 1}}]),
    );
    let syncer = HonorsSyncer::new(source);
    let mut target = MemoryTarget::default();

    let report = syncer.run(&mut target, Server::Kr).await;

    let bonds = report.outcome(SyncType::BondsHonors).unwrap();
    assert!(bonds.error.as_deref().unwrap().contains("Malformed input"));
    assert!(target.bonds.is_empty());
    assert_eq!(target.honors.len(), 3);
}

#[tokio::test]
async fn run_all_appends_logs_per_server() {
    let syncer = HonorsSyncer::new(full_source());
    let mut target = MemoryTarget::default();

    let reports = syncer
        .run_all(&mut target, &[Server::Jp, Server::Cn])
        .await;

    assert_eq!(reports.len(), 2);
    assert_eq!(target.logs.len(), 6);
    assert!(target.honors.contains_key(&("jp".to_string(), 42)));
    assert!(target.honors.contains_key(&("cn".to_string(), 42)));
}
