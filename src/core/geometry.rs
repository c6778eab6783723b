use geo::algorithm::line_measures::metric_spaces::Geodesic;
use geo::{Bearing, Destination, Distance, InterpolatePoint, Point};

use crate::domain::model::{Cell, LonLat, Transect};

impl Transect {
    pub fn new(name: impl Into<String>, start: LonLat, end: LonLat) -> Self {
        Self {
            name: name.into(),
            start: Point::new(start[0], start[1]),
            end: Point::new(end[0], end[1]),
        }
    }

    /// Forward azimuth from start to end, in degrees clockwise from north.
    pub fn azimuth(&self) -> f64 {
        Geodesic.bearing(self.start, self.end)
    }

    /// Geodesic length in meters on the WGS84 ellipsoid.
    pub fn length_m(&self) -> f64 {
        Geodesic.distance(self.start, self.end)
    }

    /// Point at half the geodesic arc length.
    pub fn midpoint(&self) -> Point<f64> {
        Geodesic.point_at_ratio_between(self.start, self.end, 0.5)
    }
}

/// Square of side `side_m` centered on `center`, rotated 45° so its diagonal
/// runs along `azimuth`. The corners sit at one half-diagonal from the center
/// along the bearings azimuth + 45° + k·90°; the ring is closed by repeating
/// the first corner.
pub fn rotated_square(center: Point<f64>, side_m: f64, azimuth: f64) -> Vec<LonLat> {
    let half_diagonal = (side_m / 2.0) * std::f64::consts::SQRT_2;
    let mut ring: Vec<LonLat> = (0..4)
        .map(|k| {
            let bearing = azimuth + 45.0 + k as f64 * 90.0;
            let corner = Geodesic.destination(center, bearing, half_diagonal);
            [corner.x(), corner.y()]
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Lays out cells of side `side_m` outward from the transect midpoint in both
/// directions, one per `side_m` step, until the transect length is covered.
/// Cell names are `{transect}-{index}` with the index ascending from the
/// backward-most cell to the forward-most one, and the output sequence
/// follows that order. A transect shorter than one step still yields one
/// cell at the midpoint.
pub fn generate_cells(transect: &Transect, side_m: f64) -> Vec<Cell> {
    let azimuth = transect.azimuth();
    let midpoint = transect.midpoint();
    let half_count = (transect.length_m() / (2.0 * side_m)) as usize + 1;

    let mut cells = Vec::with_capacity(2 * half_count - 1);
    for i in (1..half_count).rev() {
        let center = Geodesic.destination(midpoint, azimuth + 180.0, i as f64 * side_m);
        cells.push(Cell {
            name: format!("{}-{}", transect.name, half_count - i),
            ring: rotated_square(center, side_m, azimuth),
        });
    }
    for i in 0..half_count {
        let center = Geodesic.destination(midpoint, azimuth, i as f64 * side_m);
        cells.push(Cell {
            name: format!("{}-{}", transect.name, half_count + i),
            ring: rotated_square(center, side_m, azimuth),
        });
    }
    cells
}
