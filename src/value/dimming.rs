use super::percentage;
use crate::codec::WireFormat;
use crate::{wire, InvalidValue};
use std::fmt;

/// Brightness as a percentage in `(0, 100]`.
///
/// Zero is not a brightness on the bridge: a light is switched off through
/// its `on` state instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f64);

impl Brightness {
    pub const MAX: Self = Self(100.0);

    pub fn new(value: f64) -> Result<Self, InvalidValue> {
        percentage("brightness", value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Brightness {
    type Error = InvalidValue;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Brightness of a light together with the lowest level it can dim to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimming {
    brightness: Brightness,
    min_dim_level: Option<Brightness>,
}

impl Dimming {
    /// ```
    /// use hueclient::value::Dimming;
    ///
    /// assert!(Dimming::new(100.0, Some(0.2)).is_ok());
    /// assert!(Dimming::new(0.0, None).is_err());
    /// assert!(Dimming::new(50.0, Some(101.0)).is_err());
    /// ```
    pub fn new(brightness: f64, min_dim_level: Option<f64>) -> Result<Self, InvalidValue> {
        Ok(Self {
            brightness: Brightness::new(brightness)?,
            min_dim_level: min_dim_level
                .map(|level| percentage("min_dim_level", level).map(Brightness))
                .transpose()?,
        })
    }

    pub fn from_brightness(brightness: Brightness) -> Self {
        Self {
            brightness,
            min_dim_level: None,
        }
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn min_dim_level(&self) -> Option<Brightness> {
        self.min_dim_level
    }
}

impl WireFormat for Dimming {
    type Wire = wire::Dimming;

    fn from_wire(wire: wire::Dimming) -> Result<Self, InvalidValue> {
        Self::new(wire.brightness, wire.min_dim_level)
    }

    fn to_wire(&self) -> wire::Dimming {
        wire::Dimming {
            brightness: self.brightness.value(),
            min_dim_level: self.min_dim_level.map(|level| level.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_accepted_iff_in_range() {
        for (value, ok) in [
            (-1.0, false),
            (0.0, false),
            (0.001, true),
            (1.0, true),
            (99.99, true),
            (100.0, true),
            (100.0001, false),
            (150.0, false),
        ] {
            assert_eq!(Dimming::new(value, None).is_ok(), ok, "{value}");
        }
    }

    #[test]
    fn min_dim_level_has_its_own_field_name() {
        let err = Dimming::new(50.0, Some(0.0)).unwrap_err();
        assert_eq!(err.field, "min_dim_level");
    }

    #[test]
    fn brightness_error_mentions_constraint() {
        let err = Brightness::new(150.0).unwrap_err();
        assert_eq!(err.field, "brightness");
        assert!(err.constraint.contains("≤ 100"));
    }

    #[test]
    fn display() {
        assert_eq!(Brightness::new(42.5).unwrap().to_string(), "42.5%");
        assert_eq!(Brightness::MAX.to_string(), "100%");
    }
}
