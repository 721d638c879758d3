use crate::codec::WireFormat;
use crate::{wire, InvalidValue};
use std::fmt;

/// Color temperature in mirek (10^6 / Kelvin), between 153 and 500 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mirek(u16);

impl Mirek {
    pub const MIN: Self = Self(153);
    pub const MAX: Self = Self(500);

    pub fn new(value: u16) -> Result<Self, InvalidValue> {
        mirek("mirek", value)
    }

    /// ```
    /// use hueclient::value::Mirek;
    ///
    /// assert_eq!(Mirek::from_kelvin(2700).unwrap().value(), 370);
    /// assert!(Mirek::from_kelvin(10_000).is_err());
    /// ```
    pub fn from_kelvin(kelvin: u32) -> Result<Self, InvalidValue> {
        if kelvin == 0 {
            return Err(InvalidValue::new("kelvin", "must be > 0"));
        }
        let value = (1_000_000 + kelvin / 2) / kelvin;
        let value = u16::try_from(value)
            .map_err(|_| InvalidValue::new("mirek", format!("must be ≤ 500, got {value}")))?;
        Self::new(value)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn kelvin(&self) -> u32 {
        1_000_000 / u32::from(self.0)
    }
}

impl fmt::Display for Mirek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mirek", self.0)
    }
}

fn mirek(field: &str, value: u16) -> Result<Mirek, InvalidValue> {
    if (Mirek::MIN.0..=Mirek::MAX.0).contains(&value) {
        Ok(Mirek(value))
    } else {
        Err(InvalidValue::new(
            field,
            format!("must be ≥ 153 and ≤ 500, got {value}"),
        ))
    }
}

/// White tuning state. `mirek` is absent while the light shows a color instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTemperature {
    mirek: Option<Mirek>,
    mirek_valid: bool,
    mirek_min: Mirek,
    mirek_max: Mirek,
}

impl ColorTemperature {
    pub fn new(
        mirek_value: Option<u16>,
        mirek_valid: bool,
        mirek_min: u16,
        mirek_max: u16,
    ) -> Result<Self, InvalidValue> {
        Ok(Self {
            mirek: mirek_value.map(|value| mirek("mirek", value)).transpose()?,
            mirek_valid,
            mirek_min: mirek("mirek_min", mirek_min)?,
            mirek_max: mirek("mirek_max", mirek_max)?,
        })
    }

    pub fn mirek(&self) -> Option<Mirek> {
        self.mirek
    }

    pub fn mirek_valid(&self) -> bool {
        self.mirek_valid
    }

    pub fn mirek_min(&self) -> Mirek {
        self.mirek_min
    }

    pub fn mirek_max(&self) -> Mirek {
        self.mirek_max
    }
}

impl WireFormat for ColorTemperature {
    type Wire = wire::ColorTemperature;

    fn from_wire(wire: wire::ColorTemperature) -> Result<Self, InvalidValue> {
        Self::new(
            wire.mirek,
            wire.mirek_valid,
            wire.mirek_schema.mirek_minimum,
            wire.mirek_schema.mirek_maximum,
        )
        .map_err(|err| match err.field.as_str() {
            "mirek_min" => InvalidValue::new("mirek_minimum", err.constraint).within("mirek_schema"),
            "mirek_max" => InvalidValue::new("mirek_maximum", err.constraint).within("mirek_schema"),
            _ => err,
        })
    }

    fn to_wire(&self) -> wire::ColorTemperature {
        wire::ColorTemperature {
            mirek: self.mirek.map(|mirek| mirek.value()),
            mirek_valid: self.mirek_valid,
            mirek_schema: wire::MirekSchema {
                mirek_minimum: self.mirek_min.value(),
                mirek_maximum: self.mirek_max.value(),
            },
        }
    }
}

impl WireFormat for Mirek {
    type Wire = wire::MirekTarget;

    fn from_wire(wire: wire::MirekTarget) -> Result<Self, InvalidValue> {
        Self::new(wire.mirek)
    }

    fn to_wire(&self) -> wire::MirekTarget {
        wire::MirekTarget { mirek: self.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_value;
    use serde_json::json;

    #[test]
    fn mirek_accepted_iff_153_to_500() {
        for value in [0, 1, 152, 501, 1000, u16::MAX] {
            assert!(ColorTemperature::new(Some(value), true, 153, 500).is_err(), "{value}");
        }
        for value in [153, 154, 366, 499, 500] {
            assert!(ColorTemperature::new(Some(value), true, 153, 500).is_ok(), "{value}");
        }
    }

    #[test]
    fn schema_bounds_are_checked_too() {
        assert_eq!(
            ColorTemperature::new(Some(300), true, 152, 500).unwrap_err().field,
            "mirek_min"
        );
        assert_eq!(
            ColorTemperature::new(Some(300), true, 153, 501).unwrap_err().field,
            "mirek_max"
        );
    }

    #[test]
    fn missing_mirek_is_allowed() {
        let temperature = ColorTemperature::new(None, false, 153, 454).unwrap();
        assert!(temperature.mirek().is_none());
        assert!(!temperature.mirek_valid());
    }

    #[test]
    fn schema_error_path_follows_the_wire() {
        let err = decode_value::<ColorTemperature>(json!({
            "mirek": 300,
            "mirek_valid": true,
            "mirek_schema": {"mirek_minimum": 100, "mirek_maximum": 500}
        }))
        .unwrap_err();
        assert_eq!(err.path, "mirek_schema.mirek_minimum");
    }

    #[test]
    fn kelvin_conversion() {
        assert_eq!(Mirek::from_kelvin(6500).unwrap().value(), 154);
        assert!(Mirek::from_kelvin(1000).is_err());
        assert!(Mirek::from_kelvin(0).is_err());
        assert_eq!(Mirek::MIN.kelvin(), 6535);
    }
}
