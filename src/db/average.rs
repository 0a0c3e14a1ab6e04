use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{Connection, Result};

use crate::models::Average;

pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Appends one finished run. History is never rewritten, so every stored
/// row keeps contributing to the averages.
pub fn insert_average(conn: &Connection, average: &Average) -> Result<()> {
    conn.execute(
        "INSERT INTO averages (setting_index, score, question_count, category_id, recorded_at)
         VALUES (?, ?, ?, ?, ?)",
        rusqlite::params![
            average.setting_index,
            average.score,
            average.count,
            average.category_id,
            average.recorded_at
        ],
    )?;
    Ok(())
}

pub fn load_averages(conn: &Connection, category_id: &str) -> Result<Vec<Average>> {
    let mut stmt = conn.prepare(
        "SELECT setting_index, score, question_count, category_id, recorded_at
         FROM averages WHERE category_id = ? ORDER BY id",
    )?;

    let records = stmt
        .query_map([category_id], row_to_average)?
        .filter_map(|r| r.ok())
        .collect();

    Ok(records)
}

/// Every stored run grouped by category, for the browse screen's per
/// category averages.
pub fn load_all_averages(conn: &Connection) -> Result<HashMap<String, Vec<Average>>> {
    let mut stmt = conn.prepare(
        "SELECT setting_index, score, question_count, category_id, recorded_at
         FROM averages ORDER BY id",
    )?;

    let mut grouped: HashMap<String, Vec<Average>> = HashMap::new();
    for record in stmt.query_map([], row_to_average)?.filter_map(|r| r.ok()) {
        grouped
            .entry(record.category_id.clone())
            .or_default()
            .push(record);
    }

    Ok(grouped)
}

fn row_to_average(row: &rusqlite::Row) -> Result<Average> {
    Ok(Average {
        setting_index: row.get(0)?,
        score: row.get(1)?,
        count: row.get(2)?,
        category_id: row.get(3)?,
        recorded_at: row.get(4)?,
    })
}
