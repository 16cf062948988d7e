//! World settings
//!
//! Defaults are the fixed constants in [`crate::consts`]. A host page may pass
//! a (partial) JSON object to override them; missing fields keep defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::AppError;
use crate::sim::Bounds;

/// Settings used to spawn and draw the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of bodies to spawn
    pub body_count: usize,
    /// Smallest spawn radius (inclusive)
    pub radius_min: f32,
    /// Largest spawn radius (exclusive)
    pub radius_max: f32,
    /// Speed scale for initial velocities
    pub speed: f32,
    /// Vertical gap between spawn positions
    pub spawn_spacing: f32,
    /// Outline color of new bodies
    pub body_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            body_count: BODY_COUNT,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            speed: BODY_SPEED,
            spawn_spacing: SPAWN_SPACING,
            body_color: BODY_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let settings: Settings = serde_json::from_str(json)?;
        log::info!("Loaded settings: {} bodies", settings.body_count);
        Ok(settings)
    }

    /// Check the settings can spawn a world inside `bounds`
    pub fn validate(&self, bounds: Bounds) -> Result<(), AppError> {
        if self.body_count == 0 {
            return Err(AppError::InvalidSettings("body_count must be > 0".into()));
        }
        if self.body_count > MAX_BODY_COUNT {
            return Err(AppError::InvalidSettings(format!(
                "body_count ({}) must be <= {}",
                self.body_count, MAX_BODY_COUNT
            )));
        }
        if !self.radius_min.is_finite() || self.radius_min <= 0.0 {
            return Err(AppError::InvalidSettings("radius_min must be > 0".into()));
        }
        if !self.radius_max.is_finite() || self.radius_max < self.radius_min {
            return Err(AppError::InvalidSettings(format!(
                "radius_max ({}) must be >= radius_min ({})",
                self.radius_max, self.radius_min
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(AppError::InvalidSettings("speed must be finite and >= 0".into()));
        }
        if !self.spawn_spacing.is_finite() || self.spawn_spacing < 0.0 {
            return Err(AppError::InvalidSettings(
                "spawn_spacing must be finite and >= 0".into(),
            ));
        }
        if bounds.width < 2.0 * self.radius_max {
            return Err(AppError::InvalidSettings(format!(
                "surface width {} too narrow for radius {}",
                bounds.width, self.radius_max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::World;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_defaults_match_constants() {
        let s = Settings::default();
        assert_eq!(s.body_count, 20);
        assert_eq!(s.radius_min, 20.0);
        assert_eq!(s.radius_max, 70.0);
        assert_eq!(s.speed, 3.0);
        assert!(s.validate(bounds()).is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "body_count": 5 }"#).unwrap();
        assert_eq!(s.body_count, 5);
        assert_eq!(s.radius_max, RADIUS_MAX);
        assert_eq!(s.body_color, "blue");
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Settings::from_json("{ body_count: }"),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut s = Settings::default();
        s.body_count = 0;
        assert!(s.validate(bounds()).is_err());

        let mut s = Settings::default();
        s.radius_min = 0.0;
        assert!(s.validate(bounds()).is_err());

        let mut s = Settings::default();
        s.radius_max = 10.0;
        assert!(s.validate(bounds()).is_err());

        let mut s = Settings::default();
        s.speed = f32::NAN;
        assert!(s.validate(bounds()).is_err());

        let mut s = Settings::default();
        s.spawn_spacing = -1.0;
        assert!(s.validate(bounds()).is_err());

        let mut s = Settings::default();
        s.spawn_spacing = f32::NAN;
        assert!(s.validate(bounds()).is_err());

        let mut s = Settings::default();
        s.body_count = MAX_BODY_COUNT + 1;
        assert!(s.validate(bounds()).is_err());

        let s = Settings::default();
        assert!(s.validate(Bounds::new(100.0, 600.0)).is_err());
    }

    #[test]
    fn test_validate_accepts_edge_values() {
        let mut s = Settings::default();
        s.radius_max = s.radius_min;
        assert!(s.validate(bounds()).is_ok());

        let mut s = Settings::default();
        s.body_count = MAX_BODY_COUNT;
        s.spawn_spacing = 0.0;
        assert!(s.validate(bounds()).is_ok());
    }

    #[test]
    fn test_huge_body_count_from_json_is_rejected() {
        let json = format!(r#"{{ "body_count": {} }}"#, usize::MAX);
        let s = Settings::from_json(&json).unwrap();
        assert!(matches!(
            s.validate(bounds()),
            Err(AppError::InvalidSettings(_))
        ));
        assert!(World::new(&s, bounds(), 1).is_err());
    }
}
