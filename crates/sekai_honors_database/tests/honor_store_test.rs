//! Tests for the PostgreSQL honor store.
//!
//! These tests require a running PostgreSQL database reachable through
//! `DATABASE_URL`; enable them with `--features postgres-tests`.

use diesel::prelude::*;
use sekai_honors_core::{BondsHonorFilter, HonorFilter, HonorRarity, Server, SyncType};
use sekai_honors_database::{
    BondsHonorRepository, DatabaseErrorKind, HonorRepository, NewBondsHonorRow,
    NewHonorGroupRow, NewHonorRow, NewSyncLogRow, PgConnection, PostgresHonorStore,
    SyncLogRepository, establish_connection, run_migrations,
};
use serde_json::json;
use std::sync::Mutex;

static MIGRATION_LOCK: Mutex<()> = Mutex::new(());

/// Create a migrated connection whose writes roll back when it is dropped.
fn create_test_connection() -> PgConnection {
    let mut conn = create_committing_connection();
    conn.begin_test_transaction()
        .expect("Failed to begin test transaction");
    conn
}

fn create_committing_connection() -> PgConnection {
    dotenvy::dotenv().ok();
    let mut conn = establish_connection().expect("Failed to establish test database connection");
    {
        let _guard = MIGRATION_LOCK.lock().unwrap();
        run_migrations(&mut conn).expect("Failed to run migrations");
    }
    conn
}

fn ace(server: Server, honor_id: i32) -> NewHonorRow {
    let mut honor = NewHonorRow::new(server, honor_id, "Ace");
    honor.seq = Some(1);
    honor.group_id = Some(5);
    honor.honor_rarity = Some(HonorRarity::High.to_string());
    honor
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_view_joins_group_and_reupsert_updates_seq() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let first = store.upsert_honor(&ace(Server::Jp, 900_042)).unwrap();

    let mut group = NewHonorGroupRow::new(Server::Jp, 5, "Seasonal");
    group.honor_type = Some("event".to_string());
    store.upsert_honor_group(&group).unwrap();

    let joined = store
        .get_honor_with_group(Server::Jp, 900_042)
        .unwrap()
        .expect("honor should be visible through the view");
    assert_eq!(joined.name, "Ace");
    assert_eq!(joined.group_name.as_deref(), Some("Seasonal"));
    assert_eq!(joined.honor_type.as_deref(), Some("event"));

    let mut resynced = ace(Server::Jp, 900_042);
    resynced.seq = Some(2);
    let second = store.upsert_honor(&resynced).unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.seq, Some(2));
    assert_eq!(second.name, first.name);
    assert_eq!(second.group_id, first.group_id);
    assert_eq!(second.levels, json!([]));
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);

    let count = store
        .list_honors(Server::Jp, &HonorFilter::default().with_group_id(5))
        .unwrap()
        .iter()
        .filter(|h| h.honor_id == 900_042)
        .count();
    assert_eq!(count, 1);
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_identical_upsert_is_idempotent() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let mut honor = ace(Server::En, 900_100);
    honor.levels = json!([{"level": 1, "description": "Clear 10 lives"}]);

    let first = store.upsert_honor(&honor).unwrap();
    let second = store.upsert_honor(&honor).unwrap();

    assert_eq!(
        (first.id, &first.name, first.seq, &first.levels, &first.honor_rarity),
        (second.id, &second.name, second.seq, &second.levels, &second.honor_rarity)
    );
    assert!(second.updated_at >= first.updated_at);
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_view_yields_nulls_without_group() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let mut honor = ace(Server::Tw, 900_200);
    honor.group_id = Some(987_654);
    honor.group_name = Some("cached".to_string());
    store.upsert_honor(&honor).unwrap();

    let joined = store.get_honor_with_group(Server::Tw, 900_200).unwrap().unwrap();
    assert_eq!(joined.group_id, Some(987_654));
    assert_eq!(joined.honor_group_name.as_deref(), Some("cached"));
    assert!(joined.group_name.is_none());
    assert!(joined.honor_type.is_none());
    assert!(joined.group_background_asset_bundle_name.is_none());
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_servers_are_isolated() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let mut cn = ace(Server::Cn, 900_300);
    cn.name = "CN".to_string();
    let mut jp = ace(Server::Jp, 900_300);
    jp.name = "JP".to_string();

    store.upsert_honor(&cn).unwrap();
    store.upsert_honor(&jp).unwrap();
    cn.name = "CN v2".to_string();
    store.upsert_honor(&cn).unwrap();

    assert_eq!(store.get_honor(Server::Cn, 900_300).unwrap().unwrap().name, "CN v2");
    assert_eq!(store.get_honor(Server::Jp, 900_300).unwrap().unwrap().name, "JP");
    assert!(store.get_honor(Server::Kr, 900_300).unwrap().is_none());
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_insert_collision_is_constraint_violation() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let group = NewHonorGroupRow::new(Server::Kr, 900_400, "Group");
    store.insert_honor_group(&group).unwrap();
    let err = store.insert_honor_group(&group).unwrap_err();

    assert!(err.is_constraint_violation(), "unexpected error: {}", err);
    assert!(!err.is_not_found());
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_missing_key_is_none() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    assert!(store.get_honor(Server::Jp, -1).unwrap().is_none());
    assert!(store.get_bonds_honor(Server::Jp, -1).unwrap().is_none());
    assert!(store.get_honor_group(Server::Jp, -1).unwrap().is_none());
    assert!(store.get_honor_with_group(Server::Jp, -1).unwrap().is_none());
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_malformed_levels_rejected_before_write() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let mut honor = ace(Server::Jp, 900_500);
    honor.levels = json!("not a list");
    let err = store.upsert_honor(&honor).unwrap_err();

    assert!(matches!(err.kind, DatabaseErrorKind::MalformedInput(_)));
    assert!(store.get_honor(Server::Jp, 900_500).unwrap().is_none());
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_uppercase_server_tag_is_rejected() {
    use sekai_honors_database::schema::{honors, sync_logs};

    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let mut lower = ace(Server::Jp, 900_777);
    lower.name = "lower".to_string();
    store.upsert_honor(&lower).unwrap();

    let mut upper = ace(Server::Jp, 900_777);
    upper.server = "JP".to_string();
    upper.name = "upper".to_string();
    let err = store.upsert_honor(&upper).unwrap_err();
    assert!(matches!(err.kind, DatabaseErrorKind::MalformedInput(_)));

    let mut log = NewSyncLogRow::succeeded(Server::Jp, SyncType::Honors, 1);
    log.server = "Jp".to_string();
    let err = store.append_sync_log(&log).unwrap_err();
    assert!(matches!(err.kind, DatabaseErrorKind::MalformedInput(_)));

    let stored = store.get_honor(Server::Jp, 900_777).unwrap().unwrap();
    assert_eq!(stored.name, "lower");

    let rows: i64 = honors::table
        .filter(honors::honor_id.eq(900_777))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(rows, 1);

    let uppercase_logs: i64 = sync_logs::table
        .filter(sync_logs::server.eq("Jp"))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(uppercase_logs, 0);
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_batch_with_bad_record_writes_nothing() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let good = ace(Server::En, 900_550);
    let mut bad = ace(Server::En, 900_551);
    bad.server = "xx".to_string();

    assert!(store.upsert_honors(&[good, bad]).is_err());
    assert!(store.get_honor(Server::En, 900_550).unwrap().is_none());
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_sync_log_is_append_only() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let before = store.count_sync_logs(Some(Server::Cn)).unwrap();
    let first = store
        .append_sync_log(&NewSyncLogRow::succeeded(Server::Cn, SyncType::Honors, 12))
        .unwrap();
    let second = store
        .append_sync_log(&NewSyncLogRow::succeeded(Server::Cn, SyncType::Honors, 12))
        .unwrap();
    let failed = store
        .append_sync_log(&NewSyncLogRow::failed(Server::Cn, SyncType::BondsHonors, "boom"))
        .unwrap();

    assert_eq!(store.count_sync_logs(Some(Server::Cn)).unwrap(), before + 3);
    assert_ne!(first.id, second.id);
    assert!(first.success);
    assert_eq!(first.record_count, 12);
    assert!(!failed.success);
    assert_eq!(failed.error_message.as_deref(), Some("boom"));

    let recent = store
        .recent_sync_logs(Some(Server::Cn), Some(SyncType::Honors), 10)
        .unwrap();
    let unchanged = recent.iter().find(|row| row.id == first.id).unwrap();
    assert_eq!(unchanged, &first);
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_list_orders_by_seq_and_filters() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let group_id = 900_600;
    for (honor_id, seq, rarity) in [
        (900_603, Some(3), HonorRarity::Low),
        (900_601, Some(1), HonorRarity::High),
        (900_602, Some(2), HonorRarity::High),
        (900_604, None, HonorRarity::High),
    ] {
        let mut honor = NewHonorRow::new(Server::Kr, honor_id, format!("Honor {}", honor_id));
        honor.seq = seq;
        honor.group_id = Some(group_id);
        honor.honor_rarity = Some(rarity.to_string());
        store.upsert_honor(&honor).unwrap();
    }

    let all = store
        .list_honors(Server::Kr, &HonorFilter::default().with_group_id(group_id))
        .unwrap();
    let ids: Vec<_> = all.iter().map(|h| h.honor_id).collect();
    assert_eq!(ids, vec![900_601, 900_602, 900_603, 900_604]);

    let high = store
        .list_honors(
            Server::Kr,
            &HonorFilter::default()
                .with_group_id(group_id)
                .with_rarity(HonorRarity::High)
                .with_limit(2),
        )
        .unwrap();
    let ids: Vec<_> = high.iter().map(|h| h.honor_id).collect();
    assert_eq!(ids, vec![900_601, 900_602]);

    let joined = store
        .list_honors_with_group(Server::Kr, &HonorFilter::default().with_group_id(group_id))
        .unwrap();
    assert_eq!(joined.len(), 4);
    assert!(joined.iter().all(|h| h.group_name.is_none()));
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_bonds_filter_matches_either_character() {
    let mut conn = create_test_connection();
    let mut store = PostgresHonorStore::new(&mut conn);

    let mut left = NewBondsHonorRow::new(Server::Jp, 900_701, "Left");
    left.bonds_group_id = Some(900_700);
    left.game_character_unit_id1 = Some(1);
    left.game_character_unit_id2 = Some(2);

    let mut right = NewBondsHonorRow::new(Server::Jp, 900_702, "Right");
    right.bonds_group_id = Some(900_700);
    right.game_character_unit_id1 = Some(3);
    right.game_character_unit_id2 = Some(1);

    let mut same = NewBondsHonorRow::new(Server::Jp, 900_703, "Same");
    same.bonds_group_id = Some(900_700);
    same.game_character_unit_id1 = Some(4);
    same.game_character_unit_id2 = Some(4);

    assert_eq!(store.upsert_bonds_honors(&[left, right, same]).unwrap(), 3);

    let with_one = store
        .list_bonds_honors(
            Server::Jp,
            &BondsHonorFilter::default()
                .with_bonds_group_id(900_700)
                .with_character_unit_id(1),
        )
        .unwrap();
    let ids: Vec<_> = with_one.iter().map(|b| b.bonds_honor_id).collect();
    assert_eq!(ids, vec![900_701, 900_702]);

    let stored = store.get_bonds_honor(Server::Jp, 900_702).unwrap().unwrap();
    assert_eq!(stored.game_character_unit_id1, Some(3));
    assert_eq!(stored.game_character_unit_id2, Some(1));

    let same = store.get_bonds_honor(Server::Jp, 900_703).unwrap().unwrap();
    assert_eq!(same.game_character_unit_id1, same.game_character_unit_id2);
}

#[test]
#[cfg_attr(not(feature = "postgres-tests"), ignore)]
fn test_concurrent_upserts_never_mix_fields() {
    use sekai_honors_database::schema::honors;

    let honor_id = 900_800;
    let cleanup = |conn: &mut PgConnection| {
        diesel::delete(
            honors::table
                .filter(honors::server.eq(Server::En.tag()))
                .filter(honors::honor_id.eq(honor_id)),
        )
        .execute(conn)
        .unwrap();
    };
    cleanup(&mut create_committing_connection());

    let writers: Vec<_> = ["A", "B"]
        .into_iter()
        .map(|tag| {
            std::thread::spawn(move || {
                let mut conn = create_committing_connection();
                let mut store = PostgresHonorStore::new(&mut conn);
                for round in 0..20 {
                    let mut honor = NewHonorRow::new(Server::En, honor_id, format!("name-{}", tag));
                    honor.seq = Some(round);
                    honor.group_name = Some(format!("group-{}", tag));
                    honor.asset_bundle_name = Some(format!("asset-{}", tag));
                    store.upsert_honor(&honor).unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let mut conn = create_committing_connection();
    let row = PostgresHonorStore::new(&mut conn)
        .get_honor(Server::En, honor_id)
        .unwrap()
        .unwrap();
    let tag = row.name.trim_start_matches("name-").to_string();
    assert_eq!(row.group_name, Some(format!("group-{}", tag)));
    assert_eq!(row.asset_bundle_name, Some(format!("asset-{}", tag)));
    assert_eq!(row.seq, Some(19));

    cleanup(&mut conn);
}
