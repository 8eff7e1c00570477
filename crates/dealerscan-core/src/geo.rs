//! Great-circle distance and rough driving time between two points.

use std::fmt;
use std::str::FromStr;

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

pub const DEFAULT_SPEED_MPH: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

/// Parses `"LAT,LON"` in decimal degrees.
impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LON, got {s:?}"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude {:?}", lat.trim()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude {:?}", lon.trim()))?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude out of range: {lat}"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude out of range: {lon}"));
        }
        Ok(Self { lat, lon })
    }
}

/// Haversine distance in miles.
pub fn haversine_miles(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lon1) = (a.lat.to_radians(), a.lon.to_radians());
    let (lat2, lon2) = (b.lat.to_radians(), b.lon.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Straight-line distance divided by an average speed, in hours.
pub fn driving_hours(a: Coordinates, b: Coordinates, speed_mph: f64) -> f64 {
    haversine_miles(a, b) / speed_mph
}
