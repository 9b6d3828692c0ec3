//! Forward transverse mercator projection on an ellipsoid.
//!
//! Uses the series expansion from Snyder, "Map Projections: A Working
//! Manual" (USGS PP 1395), eqs. 8-9 to 8-10 and 3-21. Accurate to well under
//! a metre within a UTM zone, which is all gridlines need.
use crate::error::CartoGeometryError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis in metres
    pub a: f64,
    /// Flattening
    pub f: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };

    /// First eccentricity squared
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Distance along the meridian from the equator to latitude `phi` (radians)
    pub fn meridian_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2();
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        self.a
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransverseMercator {
    pub ellipsoid: Ellipsoid,
    /// Central meridian in degrees
    pub lon0: f64,
    /// Latitude of origin in degrees
    pub lat0: f64,
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl TransverseMercator {
    pub fn new(lon0: f64, lat0: f64) -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            lon0,
            lat0,
            k0: 1.0,
            false_easting: 0.0,
            false_northing: 0.0,
        }
    }

    /// Universal Transverse Mercator zone on WGS84
    pub fn utm(zone: u8, north: bool) -> Result<Self, CartoGeometryError> {
        if !(1..=60).contains(&zone) {
            return Err(CartoGeometryError::InvalidUtmZone(zone));
        }
        Ok(Self {
            ellipsoid: Ellipsoid::WGS84,
            lon0: zone as f64 * 6.0 - 183.0,
            lat0: 0.0,
            k0: 0.9996,
            false_easting: 500_000.0,
            false_northing: if north { 0.0 } else { 10_000_000.0 },
        })
    }

    /// Project geographic `(lon, lat)` degrees to `(x, y)` metres
    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let e2 = self.ellipsoid.e2();
        let ep2 = e2 / (1.0 - e2);

        let phi = lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let n = self.ellipsoid.a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = cos_phi * (lon - self.lon0).to_radians();
        let m = self.ellipsoid.meridian_arc(phi);
        let m0 = self.ellipsoid.meridian_arc(self.lat0.to_radians());

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = self.k0
            * n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0);
        let y = self.k0
            * (m - m0
                + n * tan_phi
                    * (a2 / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0));

        (x + self.false_easting, y + self.false_northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest(zone, lon0, case(1, -177.0), case(29, -9.0), case(30, -3.0), case(60, 177.0))]
    fn test_utm_central_meridian(zone: u8, lon0: f64) {
        let tm = TransverseMercator::utm(zone, true).unwrap();
        assert_approx_eq!(f64, tm.lon0, lon0);
        let (x, y) = tm.forward(lon0, 0.0);
        assert_approx_eq!(f64, x, 500_000.0, epsilon = 1e-6);
        assert_approx_eq!(f64, y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_zone() {
        assert_eq!(
            TransverseMercator::utm(0, true),
            Err(CartoGeometryError::InvalidUtmZone(0))
        );
        assert!(TransverseMercator::utm(61, true).is_err());
    }

    #[test]
    fn test_meridian_arc_at_45_degrees() {
        let m = Ellipsoid::WGS84.meridian_arc(45f64.to_radians());
        assert_approx_eq!(f64, m, 4_984_944.4, epsilon = 5.0);
    }

    #[test]
    fn test_symmetry_about_central_meridian() {
        let tm = TransverseMercator::utm(29, true).unwrap();
        let (xw, yw) = tm.forward(-10.5, 54.5);
        let (xe, ye) = tm.forward(-7.5, 54.5);
        assert_approx_eq!(f64, 500_000.0 - xw, xe - 500_000.0, epsilon = 1e-6);
        assert_approx_eq!(f64, yw, ye, epsilon = 1e-6);
        assert!(xe > 500_000.0);
    }

    #[test]
    fn test_monotonic_in_latitude_and_longitude() {
        let tm = TransverseMercator::utm(29, true).unwrap();
        let (x0, y0) = tm.forward(-6.0, 54.0);
        let (_, y1) = tm.forward(-6.0, 55.0);
        let (x2, _) = tm.forward(-5.5, 54.0);
        assert!(y1 > y0);
        assert!(x2 > x0);
        // one degree of latitude is roughly 111 km
        assert_approx_eq!(f64, y1 - y0, 111_000.0, epsilon = 1_500.0);
    }

    #[test]
    fn test_southern_false_northing() {
        let tm = TransverseMercator::utm(29, false).unwrap();
        let (_, y) = tm.forward(-9.0, 0.0);
        assert_approx_eq!(f64, y, 10_000_000.0, epsilon = 1e-6);
    }
}
