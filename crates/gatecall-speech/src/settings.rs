//! Playback settings.
//!
//! Rate and pitch use the browser speech scale: `1.0` is the engine's normal
//! value, `0.1` the slowest/lowest and `2.0` the fastest/highest. Volume runs
//! from silent (`0.0`) to full (`1.0`).

use crate::error::{SpeechError, SpeechResult};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Lowest accepted rate or pitch
pub const MIN_SCALE: f32 = 0.1;
/// Neutral rate or pitch
pub const NORMAL_SCALE: f32 = 1.0;
/// Highest accepted rate or pitch
pub const MAX_SCALE: f32 = 2.0;

/// Rate, pitch and volume for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SpeechSettings {
    /// Speaking rate
    #[validate(range(min = 0.1, max = 2.0, message = "Rate must be between 0.1 and 2.0"))]
    pub rate: f32,

    /// Voice pitch
    #[validate(range(min = 0.1, max = 2.0, message = "Pitch must be between 0.1 and 2.0"))]
    pub pitch: f32,

    /// Output volume
    #[validate(range(min = 0.0, max = 1.0, message = "Volume must be between 0.0 and 1.0"))]
    pub volume: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            rate: NORMAL_SCALE,
            pitch: NORMAL_SCALE,
            volume: 1.0,
        }
    }
}

impl SpeechSettings {
    /// Range validation plus a check that every value is a real number
    pub fn check(&self) -> SpeechResult<()> {
        self.validate()?;

        let mut errors = ValidationErrors::new();
        for (field, value) in [("rate", self.rate), ("pitch", self.pitch), ("volume", self.volume)] {
            if !value.is_finite() {
                errors.add(field, ValidationError::new("not_finite"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SpeechError::InvalidSettings(errors))
        }
    }
}

/// Map a rate or pitch onto an engine range.
///
/// `1.0` lands on `normal`; values below interpolate linearly down to `min`
/// at [`MIN_SCALE`], values above up to `max` at [`MAX_SCALE`].
pub fn scale_to_engine(value: f32, min: f32, normal: f32, max: f32) -> f32 {
    let value = value.clamp(MIN_SCALE, MAX_SCALE);
    if value <= NORMAL_SCALE {
        let t = (NORMAL_SCALE - value) / (NORMAL_SCALE - MIN_SCALE);
        normal - t * (normal - min)
    } else {
        let t = (value - NORMAL_SCALE) / (MAX_SCALE - NORMAL_SCALE);
        normal + t * (max - normal)
    }
}

/// Map a `0.0..=1.0` volume onto an engine range
pub fn volume_to_engine(volume: f32, min: f32, max: f32) -> f32 {
    min + volume.clamp(0.0, 1.0) * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(SpeechSettings::default().check().is_ok());
    }

    #[test]
    fn test_out_of_range_values() {
        let settings = SpeechSettings {
            rate: 2.5,
            ..SpeechSettings::default()
        };
        assert!(matches!(settings.check(), Err(SpeechError::InvalidSettings(_))));

        let settings = SpeechSettings {
            volume: -0.1,
            ..SpeechSettings::default()
        };
        assert!(settings.check().is_err());

        let settings = SpeechSettings {
            pitch: 0.0,
            ..SpeechSettings::default()
        };
        assert!(settings.check().is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        let settings = SpeechSettings {
            rate: f32::NAN,
            ..SpeechSettings::default()
        };
        assert!(settings.check().is_err());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let settings = SpeechSettings {
            rate: 0.1,
            pitch: 2.0,
            volume: 0.0,
        };
        assert!(settings.check().is_ok());
    }

    #[test]
    fn test_scale_to_engine() {
        assert!(approx(scale_to_engine(1.0, 0.5, 1.0, 6.0), 1.0));
        assert!(approx(scale_to_engine(0.1, 0.5, 1.0, 6.0), 0.5));
        assert!(approx(scale_to_engine(2.0, 0.5, 1.0, 6.0), 6.0));
        assert!(approx(scale_to_engine(1.5, 0.0, 50.0, 100.0), 75.0));
        assert!(approx(scale_to_engine(9.0, 0.0, 50.0, 100.0), 100.0));
    }

    #[test]
    fn test_volume_to_engine() {
        assert!(approx(volume_to_engine(0.5, 0.0, 100.0), 50.0));
        assert!(approx(volume_to_engine(1.0, 0.0, 1.0), 1.0));
        assert!(approx(volume_to_engine(-1.0, 0.0, 1.0), 0.0));
    }
}
