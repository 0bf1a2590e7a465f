//! Great-circle distance between geographic points.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees.
///
/// Uses the haversine formula with the atan2 form, which is numerically
/// stable for antipodal points. Inputs outside the valid latitude/longitude
/// ranges (or NaN) propagate through to the result; validation is the
/// caller's responsibility.
pub fn haversine(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let (lat1, lng1) = (lat1.to_radians(), lng1.to_radians());
    let (lat2, lng2) = (lat2.to_radians(), lng2.to_radians());

    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to two decimal places.
///
/// `f64::round` rounds half away from zero; that convention is applied to
/// every distance the engine reports. NaN passes through unchanged.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_identical_points() {
        assert_eq!(haversine(-23.55, -46.63, -23.55, -46.63), 0.0);
    }

    #[test]
    fn test_sao_paulo_to_rio() {
        let d = haversine(-23.55, -46.63, -22.90, -43.17);
        assert!((357.0..=361.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine(-23.55, -46.63, -22.90, -43.17);
        let d2 = haversine(-22.90, -43.17, -23.55, -46.63);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(haversine(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        assert!(round_km(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(357.12543), 357.13);
        assert_eq!(round_km(357.125), 357.13);
        assert_eq!(round_km(357.124), 357.12);
    }
}
