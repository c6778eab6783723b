use std::collections::HashMap;

use crate::domain::model::{Cell, CellStats, Observation, TaxonStat};
use crate::utils::error::Result;

pub const CSV_HEADER: &str = "square_number, count, common_name, species_name, square_link";

/// Counts observations per taxon scientific name. The vernacular name is
/// taken from the last record seen for the taxon. The result is sorted by
/// descending count; the sort is stable over insertion order, so equal counts
/// keep first-observed taxa first.
pub fn aggregate_cell(observations: &[Observation]) -> CellStats {
    let mut taxa: Vec<TaxonStat> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for obs in observations {
        let slot = match index.get(&obs.taxon_name) {
            Some(&slot) => slot,
            None => {
                index.insert(obs.taxon_name.clone(), taxa.len());
                taxa.push(TaxonStat {
                    taxon_name: obs.taxon_name.clone(),
                    vernacular_name: None,
                    count: 0,
                });
                taxa.len() - 1
            }
        };
        taxa[slot].vernacular_name = obs.taxon_common_names.clone();
        taxa[slot].count += 1;
    }

    taxa.sort_by(|a, b| b.count.cmp(&a.count));
    CellStats { taxa }
}

/// Shareable geojson.io link embedding the cell polygon as a GeoJSON Feature.
/// The coordinate ring is serialized compactly so the URL carries no
/// whitespace.
pub fn square_link(cell: &Cell) -> Result<String> {
    let coordinates = serde_json::to_string(&cell.ring)?;
    Ok(format!(
        "https://geojson.io/#data=data:application/json,\
         {{\"type\":\"FeatureCollection\",\"features\":[{{\"type\":\"Feature\",\
         \"geometry\":{{\"type\":\"Polygon\",\"coordinates\":[{coordinates}]}}}}]}}"
    ))
}

/// Renders the report: the header plus one row per (cell, taxon), cells in
/// input order, keyed by the zero-based cell index. Cells without
/// observations contribute no rows. The field format (comma-space separation,
/// single-quoted names and link) is an informal dialect; existing downstream
/// consumers expect it verbatim.
pub fn render_report(cells: &[Cell], stats: &[CellStats]) -> Result<String> {
    let mut lines = vec![CSV_HEADER.to_string()];

    for (i, (cell, cell_stats)) in cells.iter().zip(stats).enumerate() {
        let link = square_link(cell)?;
        for taxon in &cell_stats.taxa {
            let vernacular = taxon.vernacular_name.as_deref().unwrap_or("n/a");
            lines.push(format!(
                "{i}, {count}, '{vernacular}', '{name}', '{link}'",
                count = taxon.count,
                name = taxon.taxon_name,
            ));
        }
    }

    Ok(lines.join("\n"))
}
