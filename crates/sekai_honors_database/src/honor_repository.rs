//! Honors, honor groups, and the honors-with-group view.

use crate::schema::{honor_groups, honors};
use crate::views::v_honors_with_group;
use crate::{
    DatabaseResult, HonorGroupRow, HonorRow, HonorWithGroupRow, NewHonorGroupRow, NewHonorRow,
    PostgresHonorStore,
};
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use sekai_honors_core::{HonorFilter, HonorGroupFilter, Server};
use tracing::{debug, instrument};

/// Repository for ordinary honors and their group metadata.
///
/// Every operation is scoped by server. Lookups return `None` when the key is
/// absent; only writes fail on a key collision.
pub trait HonorRepository {
    /// Insert or fully overwrite a honor keyed by `(server, honor_id)`.
    ///
    /// # Errors
    /// `MalformedInput` for an unknown server or bad `levels`, before any write.
    fn upsert_honor(&mut self, honor: &NewHonorRow) -> DatabaseResult<HonorRow>;

    /// Upsert a batch of honors in one transaction, returning how many were written.
    fn upsert_honors(&mut self, honors: &[NewHonorRow]) -> DatabaseResult<usize>;

    /// Insert a honor that must not exist yet.
    ///
    /// # Errors
    /// `ConstraintViolation` if `(server, honor_id)` is already present.
    fn insert_honor(&mut self, honor: &NewHonorRow) -> DatabaseResult<HonorRow>;

    /// Fetch one honor by key.
    fn get_honor(&mut self, server: Server, honor_id: i32) -> DatabaseResult<Option<HonorRow>>;

    /// List honors of a server ordered by `seq`, then `honor_id`.
    fn list_honors(&mut self, server: Server, filter: &HonorFilter)
        -> DatabaseResult<Vec<HonorRow>>;

    /// Insert or fully overwrite a honor group keyed by `(server, group_id)`.
    fn upsert_honor_group(&mut self, group: &NewHonorGroupRow) -> DatabaseResult<HonorGroupRow>;

    /// Upsert a batch of honor groups in one transaction.
    fn upsert_honor_groups(&mut self, groups: &[NewHonorGroupRow]) -> DatabaseResult<usize>;

    /// Insert a honor group that must not exist yet.
    fn insert_honor_group(&mut self, group: &NewHonorGroupRow) -> DatabaseResult<HonorGroupRow>;

    /// Fetch one honor group by key.
    fn get_honor_group(
        &mut self,
        server: Server,
        group_id: i32,
    ) -> DatabaseResult<Option<HonorGroupRow>>;

    /// List honor groups of a server ordered by `group_id`.
    fn list_honor_groups(
        &mut self,
        server: Server,
        filter: &HonorGroupFilter,
    ) -> DatabaseResult<Vec<HonorGroupRow>>;

    /// List honors joined with their group, ordered like [`list_honors`](Self::list_honors).
    fn list_honors_with_group(
        &mut self,
        server: Server,
        filter: &HonorFilter,
    ) -> DatabaseResult<Vec<HonorWithGroupRow>>;

    /// Fetch one honor joined with its group.
    fn get_honor_with_group(
        &mut self,
        server: Server,
        honor_id: i32,
    ) -> DatabaseResult<Option<HonorWithGroupRow>>;
}

fn upsert_honor_on(conn: &mut PgConnection, honor: &NewHonorRow) -> DatabaseResult<HonorRow> {
    diesel::insert_into(honors::table)
        .values(honor)
        .on_conflict((honors::server, honors::honor_id))
        .do_update()
        .set((
            honors::seq.eq(excluded(honors::seq)),
            honors::group_id.eq(excluded(honors::group_id)),
            honors::group_name.eq(excluded(honors::group_name)),
            honors::honor_rarity.eq(excluded(honors::honor_rarity)),
            honors::name.eq(excluded(honors::name)),
            honors::asset_bundle_name.eq(excluded(honors::asset_bundle_name)),
            honors::levels.eq(excluded(honors::levels)),
            honors::updated_at.eq(Utc::now()),
        ))
        .get_result(conn)
        .map_err(Into::into)
}

fn upsert_honor_group_on(
    conn: &mut PgConnection,
    group: &NewHonorGroupRow,
) -> DatabaseResult<HonorGroupRow> {
    diesel::insert_into(honor_groups::table)
        .values(group)
        .on_conflict((honor_groups::server, honor_groups::group_id))
        .do_update()
        .set((
            honor_groups::name.eq(excluded(honor_groups::name)),
            honor_groups::honor_type.eq(excluded(honor_groups::honor_type)),
            honor_groups::background_asset_bundle_name
                .eq(excluded(honor_groups::background_asset_bundle_name)),
            honor_groups::updated_at.eq(Utc::now()),
        ))
        .get_result(conn)
        .map_err(Into::into)
}

impl<'a> HonorRepository for PostgresHonorStore<'a> {
    #[instrument(skip(self, honor), fields(server = %honor.server, honor_id = honor.honor_id))]
    fn upsert_honor(&mut self, honor: &NewHonorRow) -> DatabaseResult<HonorRow> {
        honor.validate()?;
        upsert_honor_on(self.conn, honor)
    }

    #[instrument(skip(self, honors), fields(count = honors.len()))]
    fn upsert_honors(&mut self, honors: &[NewHonorRow]) -> DatabaseResult<usize> {
        for honor in honors {
            honor.validate()?;
        }

        self.conn.transaction(|conn| {
            for honor in honors {
                upsert_honor_on(conn, honor)?;
            }
            debug!(count = honors.len(), "Upserted honors");
            Ok(honors.len())
        })
    }

    #[instrument(skip(self, honor), fields(server = %honor.server, honor_id = honor.honor_id))]
    fn insert_honor(&mut self, honor: &NewHonorRow) -> DatabaseResult<HonorRow> {
        honor.validate()?;
        diesel::insert_into(honors::table)
            .values(honor)
            .get_result(self.conn)
            .map_err(Into::into)
    }

    fn get_honor(&mut self, server: Server, honor_id: i32) -> DatabaseResult<Option<HonorRow>> {
        honors::table
            .filter(honors::server.eq(server.tag()))
            .filter(honors::honor_id.eq(honor_id))
            .first(self.conn)
            .optional()
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    fn list_honors(
        &mut self,
        server: Server,
        filter: &HonorFilter,
    ) -> DatabaseResult<Vec<HonorRow>> {
        let mut query = honors::table
            .filter(honors::server.eq(server.tag()))
            .into_boxed();

        if let Some(group_id) = filter.group_id {
            query = query.filter(honors::group_id.eq(group_id));
        }
        if let Some(ref rarity) = filter.rarity {
            query = query.filter(honors::honor_rarity.eq(rarity));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .order((honors::seq.asc(), honors::honor_id.asc()))
            .load(self.conn)
            .map_err(Into::into)
    }

    #[instrument(skip(self, group), fields(server = %group.server, group_id = group.group_id))]
    fn upsert_honor_group(&mut self, group: &NewHonorGroupRow) -> DatabaseResult<HonorGroupRow> {
        group.validate()?;
        upsert_honor_group_on(self.conn, group)
    }

    #[instrument(skip(self, groups), fields(count = groups.len()))]
    fn upsert_honor_groups(&mut self, groups: &[NewHonorGroupRow]) -> DatabaseResult<usize> {
        for group in groups {
            group.validate()?;
        }

        self.conn.transaction(|conn| {
            for group in groups {
                upsert_honor_group_on(conn, group)?;
            }
            debug!(count = groups.len(), "Upserted honor groups");
            Ok(groups.len())
        })
    }

    #[instrument(skip(self, group), fields(server = %group.server, group_id = group.group_id))]
    fn insert_honor_group(&mut self, group: &NewHonorGroupRow) -> DatabaseResult<HonorGroupRow> {
        group.validate()?;
        diesel::insert_into(honor_groups::table)
            .values(group)
            .get_result(self.conn)
            .map_err(Into::into)
    }

    fn get_honor_group(
        &mut self,
        server: Server,
        group_id: i32,
    ) -> DatabaseResult<Option<HonorGroupRow>> {
        honor_groups::table
            .filter(honor_groups::server.eq(server.tag()))
            .filter(honor_groups::group_id.eq(group_id))
            .first(self.conn)
            .optional()
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    fn list_honor_groups(
        &mut self,
        server: Server,
        filter: &HonorGroupFilter,
    ) -> DatabaseResult<Vec<HonorGroupRow>> {
        let mut query = honor_groups::table
            .filter(honor_groups::server.eq(server.tag()))
            .into_boxed();

        if let Some(ref honor_type) = filter.honor_type {
            query = query.filter(honor_groups::honor_type.eq(honor_type));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .order(honor_groups::group_id.asc())
            .load(self.conn)
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    fn list_honors_with_group(
        &mut self,
        server: Server,
        filter: &HonorFilter,
    ) -> DatabaseResult<Vec<HonorWithGroupRow>> {
        use v_honors_with_group::dsl;

        let mut query = dsl::v_honors_with_group
            .filter(dsl::server.eq(server.tag()))
            .into_boxed();

        if let Some(group_id) = filter.group_id {
            query = query.filter(dsl::group_id.eq(group_id));
        }
        if let Some(ref rarity) = filter.rarity {
            query = query.filter(dsl::honor_rarity.eq(rarity));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .order((dsl::seq.asc(), dsl::honor_id.asc()))
            .load(self.conn)
            .map_err(Into::into)
    }

    fn get_honor_with_group(
        &mut self,
        server: Server,
        honor_id: i32,
    ) -> DatabaseResult<Option<HonorWithGroupRow>> {
        use v_honors_with_group::dsl;

        dsl::v_honors_with_group
            .filter(dsl::server.eq(server.tag()))
            .filter(dsl::honor_id.eq(honor_id))
            .first(self.conn)
            .optional()
            .map_err(Into::into)
    }
}
