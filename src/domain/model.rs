use geo::Point;
use serde::{Deserialize, Serialize};

/// Longitude/latitude pair in GeoJSON axis order.
pub type LonLat = [f64; 2];

/// A straight geodetic reference line between two WGS84 endpoints. Survey
/// cells are laid out along it; derived quantities (azimuth, length,
/// midpoint) live in `core::geometry`.
#[derive(Debug, Clone)]
pub struct Transect {
    pub name: String,
    pub start: Point<f64>,
    pub end: Point<f64>,
}

/// A square sampling region along the transect, rotated 45° so its diagonal
/// follows the transect direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub name: String,
    /// Closed polygon ring: first vertex repeated as the last, 5 vertices.
    pub ring: Vec<LonLat>,
}

/// One observation hit as returned by the data-cache search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    #[serde(rename = "Taxon_Name")]
    pub taxon_name: String,
    #[serde(rename = "Taxon_Common_Names")]
    pub taxon_common_names: Option<String>,
}

/// A cell together with every observation the service returned for it.
#[derive(Debug, Clone)]
pub struct CellObservations {
    pub cell: Cell,
    pub observations: Vec<Observation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxonStat {
    pub taxon_name: String,
    /// Vernacular name from the last record seen for this taxon; the service
    /// may not carry one.
    pub vernacular_name: Option<String>,
    pub count: u64,
}

/// Per-cell taxon statistics, sorted by descending count. Equal counts keep
/// first-observed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStats {
    pub taxa: Vec<TaxonStat>,
}

#[derive(Debug, Clone)]
pub struct SurveyReport {
    pub cell_stats: Vec<CellStats>,
    pub csv_output: String,
}
