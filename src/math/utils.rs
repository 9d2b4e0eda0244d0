// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    /// Unterhalb dieses |a × b|² (Einheitsvektoren) gilt eine Rotationsachse als unbestimmt
    pub const AXIS_EPSILON_SQUARED: f32 = 1e-6;
    /// Fläche der Halbkugel auf der Einheitskugel (2π), Normierungsgröße für Länderflächen
    pub const HALF_SPHERE_AREA: f64 = std::f64::consts::TAU;
    pub const PI: f32 = std::f32::consts::PI;
}

/// Winkel-Hilfsfunktionen (Geodaten liegen in Grad und f64 vor)
pub mod angles {
    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees.to_radians()
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians.to_degrees()
    }

    /// Normalisiert einen Längengrad auf [-180, 180); positives 180 bleibt erhalten
    pub fn wrap_longitude(degrees: f64) -> f64 {
        let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
        if wrapped == -180.0 && degrees > 0.0 {
            180.0
        } else {
            wrapped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_longitude() {
        assert!((angles::wrap_longitude(190.0) - (-170.0)).abs() < 1e-9);
        assert!((angles::wrap_longitude(-190.0) - 170.0).abs() < 1e-9);
        assert!((angles::wrap_longitude(180.0) - 180.0).abs() < 1e-9);
        assert!((angles::wrap_longitude(-180.0) - (-180.0)).abs() < 1e-9);
        assert!((angles::wrap_longitude(45.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_degree_roundtrip() {
        assert!((angles::deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((angles::rad_to_deg(angles::deg_to_rad(-33.5)) + 33.5).abs() < 1e-12);
    }
}
