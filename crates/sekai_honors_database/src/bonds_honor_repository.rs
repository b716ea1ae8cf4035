//! Bonds honors: badges tied to a pair of character units.

use crate::schema::bonds_honors;
use crate::{BondsHonorRow, DatabaseResult, NewBondsHonorRow, PostgresHonorStore};
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;
use sekai_honors_core::{BondsHonorFilter, Server};
use tracing::{debug, instrument};

/// Repository for bonds honors.
///
/// Bonds groups are their own domain and are never joined to `honor_groups`.
pub trait BondsHonorRepository {
    /// Insert or fully overwrite a bonds honor keyed by `(server, bonds_honor_id)`.
    fn upsert_bonds_honor(&mut self, honor: &NewBondsHonorRow) -> DatabaseResult<BondsHonorRow>;

    /// Upsert a batch of bonds honors in one transaction.
    fn upsert_bonds_honors(&mut self, honors: &[NewBondsHonorRow]) -> DatabaseResult<usize>;

    /// Insert a bonds honor that must not exist yet.
    ///
    /// # Errors
    /// `ConstraintViolation` if `(server, bonds_honor_id)` is already present.
    fn insert_bonds_honor(&mut self, honor: &NewBondsHonorRow) -> DatabaseResult<BondsHonorRow>;

    /// Fetch one bonds honor by key.
    fn get_bonds_honor(
        &mut self,
        server: Server,
        bonds_honor_id: i32,
    ) -> DatabaseResult<Option<BondsHonorRow>>;

    /// List bonds honors of a server ordered by `seq`, then `bonds_honor_id`.
    ///
    /// A character filter matches either side of the pair.
    fn list_bonds_honors(
        &mut self,
        server: Server,
        filter: &BondsHonorFilter,
    ) -> DatabaseResult<Vec<BondsHonorRow>>;
}

fn upsert_bonds_honor_on(
    conn: &mut PgConnection,
    honor: &NewBondsHonorRow,
) -> DatabaseResult<BondsHonorRow> {
    diesel::insert_into(bonds_honors::table)
        .values(honor)
        .on_conflict((bonds_honors::server, bonds_honors::bonds_honor_id))
        .do_update()
        .set((
            bonds_honors::seq.eq(excluded(bonds_honors::seq)),
            bonds_honors::bonds_group_id.eq(excluded(bonds_honors::bonds_group_id)),
            bonds_honors::game_character_unit_id1
                .eq(excluded(bonds_honors::game_character_unit_id1)),
            bonds_honors::game_character_unit_id2
                .eq(excluded(bonds_honors::game_character_unit_id2)),
            bonds_honors::honor_rarity.eq(excluded(bonds_honors::honor_rarity)),
            bonds_honors::name.eq(excluded(bonds_honors::name)),
            bonds_honors::description.eq(excluded(bonds_honors::description)),
            bonds_honors::levels.eq(excluded(bonds_honors::levels)),
            bonds_honors::updated_at.eq(Utc::now()),
        ))
        .get_result(conn)
        .map_err(Into::into)
}

impl<'a> BondsHonorRepository for PostgresHonorStore<'a> {
    #[instrument(skip(self, honor), fields(server = %honor.server, bonds_honor_id = honor.bonds_honor_id))]
    fn upsert_bonds_honor(&mut self, honor: &NewBondsHonorRow) -> DatabaseResult<BondsHonorRow> {
        honor.validate()?;
        upsert_bonds_honor_on(self.conn, honor)
    }

    #[instrument(skip(self, honors), fields(count = honors.len()))]
    fn upsert_bonds_honors(&mut self, honors: &[NewBondsHonorRow]) -> DatabaseResult<usize> {
        for honor in honors {
            honor.validate()?;
        }

        self.conn.transaction(|conn| {
            for honor in honors {
                upsert_bonds_honor_on(conn, honor)?;
            }
            debug!(count = honors.len(), "Upserted bonds honors");
            Ok(honors.len())
        })
    }

    #[instrument(skip(self, honor), fields(server = %honor.server, bonds_honor_id = honor.bonds_honor_id))]
    fn insert_bonds_honor(&mut self, honor: &NewBondsHonorRow) -> DatabaseResult<BondsHonorRow> {
        honor.validate()?;
        diesel::insert_into(bonds_honors::table)
            .values(honor)
            .get_result(self.conn)
            .map_err(Into::into)
    }

    fn get_bonds_honor(
        &mut self,
        server: Server,
        bonds_honor_id: i32,
    ) -> DatabaseResult<Option<BondsHonorRow>> {
        bonds_honors::table
            .filter(bonds_honors::server.eq(server.tag()))
            .filter(bonds_honors::bonds_honor_id.eq(bonds_honor_id))
            .first(self.conn)
            .optional()
            .map_err(Into::into)
    }

    #[instrument(skip(self))]
    fn list_bonds_honors(
        &mut self,
        server: Server,
        filter: &BondsHonorFilter,
    ) -> DatabaseResult<Vec<BondsHonorRow>> {
        let mut query = bonds_honors::table
            .filter(bonds_honors::server.eq(server.tag()))
            .into_boxed();

        if let Some(group_id) = filter.bonds_group_id {
            query = query.filter(bonds_honors::bonds_group_id.eq(group_id));
        }
        if let Some(unit_id) = filter.character_unit_id {
            query = query.filter(
                bonds_honors::game_character_unit_id1
                    .eq(unit_id)
                    .or(bonds_honors::game_character_unit_id2.eq(unit_id)),
            );
        }
        if let Some(ref rarity) = filter.rarity {
            query = query.filter(bonds_honors::honor_rarity.eq(rarity));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .order((bonds_honors::seq.asc(), bonds_honors::bonds_honor_id.asc()))
            .load(self.conn)
            .map_err(Into::into)
    }
}
