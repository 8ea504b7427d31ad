//! Framework repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Resolve one framework code to exactly one stored row.
//! - Fetch related rows explicitly, one relation per call.
//!
//! # Invariants
//! - Code matching is exact and case-sensitive.
//! - Zero matches and multiple matches are distinct errors.
//! - Only `SELECT` statements are issued.

use crate::db::schema::{
    FRAMEWORKS_TABLE, FW_RINGS_TABLE, FW_TILINGS_TABLE, NATURALTILINGS_TABLE, RINGSIZES_TABLE,
    SPACEGROUPS_TABLE, TATOMS_TABLE,
};
use crate::error::{ZeframError, ZeframResult};
use crate::model::framework::{Framework, FrameworkCode, FrameworkDetails};
use crate::model::space_group::SpaceGroup;
use crate::model::tatom::TAtom;
use crate::model::tiling::{NaturalTiling, RingSize};
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, Row};

const FRAMEWORK_COLUMNS_SQL: &str = "
    id,
    code,
    name,
    a,
    b,
    c,
    alpha,
    beta,
    gamma,
    lcd,
    pld,
    tpw_abs AS tpv_abs,
    tpw_pct AS tpv_rel,
    accessible_area,
    accessible_area_m2pg,
    accessible_volume,
    accessible_volume_pct,
    occupiable_area,
    occupiable_area_m2pg,
    occupiable_volume,
    occupiable_volume_pct,
    specific_accessible_area,
    specific_occupiable_area,
    maxdsd_a,
    maxdsd_b,
    maxdsd_c,
    maxdsi,
    rdls,
    td10,
    topological_density,
    framework_density,
    atoms,
    cages,
    channels,
    connections,
    junctions,
    portals,
    channel_dim,
    isinterrupted,
    isdisordered,
    sbu,
    cif,
    url_iza,
    url_zeomics,
    _spacegroup_id AS spacegroup_id";

/// Read-only access to frameworks and their relations.
pub trait FrameworkRepository {
    /// Returns the single framework whose `code` equals `code`.
    fn get_framework(&self, code: &FrameworkCode) -> ZeframResult<Framework>;
    fn space_group(&self, framework: &Framework) -> ZeframResult<Option<SpaceGroup>>;
    /// T-atoms owned by `framework`, in id order.
    fn tatoms(&self, framework: &Framework) -> ZeframResult<Vec<TAtom>>;
    /// Ring sizes linked through `fw_rings`, smallest first.
    fn ring_sizes(&self, framework: &Framework) -> ZeframResult<Vec<RingSize>>;
    /// Tilings linked through `fw_tilings`, in id order.
    fn natural_tilings(&self, framework: &Framework) -> ZeframResult<Vec<NaturalTiling>>;

    /// Fetches every relation of `framework` at once.
    fn load_details(&self, framework: Framework) -> ZeframResult<FrameworkDetails> {
        let space_group = self.space_group(&framework)?;
        let tatoms = self.tatoms(&framework)?;
        let ring_sizes = self.ring_sizes(&framework)?;
        let natural_tilings = self.natural_tilings(&framework)?;
        Ok(FrameworkDetails {
            framework,
            space_group,
            tatoms,
            ring_sizes,
            natural_tilings,
        })
    }
}

/// SQLite-backed framework repository.
pub struct SqliteFrameworkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFrameworkRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FrameworkRepository for SqliteFrameworkRepository<'_> {
    fn get_framework(&self, code: &FrameworkCode) -> ZeframResult<Framework> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {FRAMEWORK_COLUMNS_SQL}
             FROM {FRAMEWORKS_TABLE}
             WHERE code = ?1
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([code.as_str()])?;

        let Some(first) = rows.next()? else {
            return Err(ZeframError::RecordNotFound {
                code: code.to_string(),
            });
        };
        let framework = parse_framework_row(first)?;

        let mut count = 1;
        while rows.next()?.is_some() {
            count += 1;
        }
        if count > 1 {
            return Err(ZeframError::MultipleRecords {
                code: code.to_string(),
                count,
            });
        }

        Ok(framework)
    }

    fn space_group(&self, framework: &Framework) -> ZeframResult<Option<SpaceGroup>> {
        let Some(spacegroup_id) = framework.spacegroup_id else {
            return Ok(None);
        };

        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, name, number, cell_setting, cs_code
             FROM {SPACEGROUPS_TABLE}
             WHERE id = ?1;"
        ))?;
        let mut rows = stmt.query([spacegroup_id])?;
        match rows.next()? {
            Some(row) => Ok(Some(SpaceGroup {
                id: row.get("id")?,
                name: optional_text(row, "name")?,
                number: row.get("number")?,
                cell_setting: optional_text(row, "cell_setting")?,
                cs_code: optional_text(row, "cs_code")?,
            })),
            None => Ok(None),
        }
    }

    fn tatoms(&self, framework: &Framework) -> ZeframResult<Vec<TAtom>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT
                id,
                framework_id,
                name,
                multiplicity,
                sym_restrictions,
                site_symmetry,
                vertex_symbol,
                csq,
                x,
                y,
                z
             FROM {TATOMS_TABLE}
             WHERE framework_id = ?1
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query([framework.id])?;
        let mut tatoms = Vec::new();

        while let Some(row) = rows.next()? {
            tatoms.push(TAtom {
                id: row.get("id")?,
                framework_id: row.get("framework_id")?,
                name: optional_text(row, "name")?,
                x: row.get("x")?,
                y: row.get("y")?,
                z: row.get("z")?,
                multiplicity: row.get("multiplicity")?,
                site_symmetry: optional_text(row, "site_symmetry")?,
                sym_restrictions: optional_text(row, "sym_restrictions")?,
                vertex_symbol: optional_text(row, "vertex_symbol")?,
                csq: optional_text(row, "csq")?,
            });
        }

        Ok(tatoms)
    }

    fn ring_sizes(&self, framework: &Framework) -> ZeframResult<Vec<RingSize>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT r.id, r.size
             FROM {RINGSIZES_TABLE} r
             JOIN {FW_RINGS_TABLE} link ON link.ringsize_id = r.id
             WHERE link.framework_id = ?1
             ORDER BY r.size ASC, r.id ASC;"
        ))?;
        let rings = stmt
            .query_map([framework.id], |row| {
                Ok(RingSize {
                    id: row.get(0)?,
                    size: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rings)
    }

    fn natural_tilings(&self, framework: &Framework) -> ZeframResult<Vec<NaturalTiling>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT t.id, t.name
             FROM {NATURALTILINGS_TABLE} t
             JOIN {FW_TILINGS_TABLE} link ON link.tiling_id = t.id
             WHERE link.framework_id = ?1
             ORDER BY t.id ASC;"
        ))?;
        let tilings = stmt
            .query_map([framework.id], |row| {
                Ok(NaturalTiling {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tilings)
    }
}

fn parse_framework_row(row: &Row<'_>) -> ZeframResult<Framework> {
    Ok(Framework {
        id: row.get("id")?,
        code: optional_text(row, "code")?.unwrap_or_default(),
        name: optional_text(row, "name")?,
        a: row.get("a")?,
        b: row.get("b")?,
        c: row.get("c")?,
        alpha: row.get("alpha")?,
        beta: row.get("beta")?,
        gamma: row.get("gamma")?,
        lcd: row.get("lcd")?,
        pld: row.get("pld")?,
        tpv_abs: row.get("tpv_abs")?,
        tpv_rel: row.get("tpv_rel")?,
        accessible_area: row.get("accessible_area")?,
        accessible_area_m2pg: row.get("accessible_area_m2pg")?,
        accessible_volume: row.get("accessible_volume")?,
        accessible_volume_pct: row.get("accessible_volume_pct")?,
        occupiable_area: row.get("occupiable_area")?,
        occupiable_area_m2pg: row.get("occupiable_area_m2pg")?,
        occupiable_volume: row.get("occupiable_volume")?,
        occupiable_volume_pct: row.get("occupiable_volume_pct")?,
        specific_accessible_area: row.get("specific_accessible_area")?,
        specific_occupiable_area: row.get("specific_occupiable_area")?,
        maxdsd_a: row.get("maxdsd_a")?,
        maxdsd_b: row.get("maxdsd_b")?,
        maxdsd_c: row.get("maxdsd_c")?,
        maxdsi: row.get("maxdsi")?,
        rdls: row.get("rdls")?,
        td10: row.get("td10")?,
        topological_density: row.get("topological_density")?,
        framework_density: row.get("framework_density")?,
        atoms: row.get("atoms")?,
        cages: row.get("cages")?,
        channels: row.get("channels")?,
        connections: row.get("connections")?,
        junctions: row.get("junctions")?,
        portals: row.get("portals")?,
        channel_dim: row.get("channel_dim")?,
        isinterrupted: row.get("isinterrupted")?,
        isdisordered: row.get("isdisordered")?,
        sbu: optional_text(row, "sbu")?,
        cif: optional_text(row, "cif")?,
        url_iza: optional_text(row, "url_iza")?,
        url_zeomics: optional_text(row, "url_zeomics")?,
        spacegroup_id: row.get("spacegroup_id")?,
    })
}

/// Reads a text-ish column, accepting numbers stored by loose SQLite typing.
///
/// Text that is not valid UTF-8 is an error rather than being replaced.
fn optional_text(row: &Row<'_>, column: &str) -> rusqlite::Result<Option<String>> {
    let value = match row.get_ref(column)? {
        ValueRef::Null => None,
        ValueRef::Text(_) => Some(row.get::<_, String>(column)?),
        ValueRef::Blob(bytes) => {
            let index = row.as_ref().column_index(column)?;
            let text = String::from_utf8(bytes.to_vec()).map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Blob, Box::new(err))
            })?;
            Some(text)
        }
        ValueRef::Integer(value) => Some(value.to_string()),
        ValueRef::Real(value) => Some(value.to_string()),
    };
    Ok(value)
}
