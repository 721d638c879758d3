//! Validated value types shared by every resource kind.
//!
//! Each type checks the bridge's documented ranges when it is built, so once
//! you hold a `Dimming`, a `CieXy` or a `SceneMetadata`, it is known to be
//! acceptable to the bridge.

use crate::InvalidValue;
use std::str::FromStr;

mod archetype;
mod color;
mod dimming;
mod dynamics;
mod effects;
mod gradient;
mod metadata;
mod rtype;
mod state;
mod temperature;

pub use archetype::Archetype;
pub use color::{CieXy, Color, Gamut, GamutType};
pub use dimming::{Brightness, Dimming};
pub use dynamics::{DynamicStatus, Dynamics, Speed};
pub use effects::{Effects, LightEffect, LightTimedEffect, TimedEffects};
pub(crate) use gradient::gradient_point;
pub use gradient::{GradientMode, LightGradient};
pub use metadata::{LightMetadata, Metadata, ResourceName, SceneMetadata};
pub use rtype::{Group, Owner, ResourceIdentifier, Rtype, Target};
pub use state::{
    Alert, AlertAction, LightMode, On, ProductData, RecallAction, SceneMode, SceneStatus,
    SceneStatusActive, Signal, Signaling, SignalingStatus,
};
pub use temperature::{ColorTemperature, Mirek};

/// Parses one member of a closed enumeration, reporting `field` on failure.
///
/// ```
/// use hueclient::value::{parse_member, LightEffect, Rtype};
///
/// assert_eq!(parse_member::<Rtype>("rtype", "public_image").unwrap(), Rtype::PublicImage);
/// assert!(parse_member::<LightEffect>("effect", "disco").is_err());
/// ```
pub fn parse_member<E: FromStr>(field: &str, raw: &str) -> Result<E, InvalidValue> {
    raw.parse()
        .map_err(|_| InvalidValue::new(field, format!("`{raw}` is not a declared member")))
}

/// (0, 100]
pub(crate) fn percentage(field: &str, value: f64) -> Result<f64, InvalidValue> {
    if value > 0.0 && value <= 100.0 {
        Ok(value)
    } else {
        Err(InvalidValue::new(
            field,
            format!("must be > 0 and ≤ 100, got {value}"),
        ))
    }
}

/// [0, 1], NaN rejected.
pub(crate) fn unit_interval(field: &str, value: f64) -> Result<f64, InvalidValue> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(InvalidValue::new(
            field,
            format!("must be ≥ 0 and ≤ 1, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bounds() {
        assert!(percentage("brightness", 0.0).is_err());
        assert!(percentage("brightness", 0.01).is_ok());
        assert!(percentage("brightness", 100.0).is_ok());
        assert!(percentage("brightness", 100.01).is_err());
        assert!(percentage("brightness", f64::NAN).is_err());
    }

    #[test]
    fn unit_interval_bounds() {
        assert!(unit_interval("x", -0.0001).is_err());
        assert!(unit_interval("x", 0.0).is_ok());
        assert!(unit_interval("x", 1.0).is_ok());
        assert!(unit_interval("x", 1.0001).is_err());
        assert!(unit_interval("x", f64::NAN).is_err());
    }

    #[test]
    fn parse_member_reports_field() {
        let err = parse_member::<GamutType>("gamut_type", "D").unwrap_err();
        assert_eq!(err.field, "gamut_type");
        assert_eq!(parse_member::<GamutType>("gamut_type", "other").unwrap(), GamutType::Other);
    }
}
