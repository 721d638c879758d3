use super::unit_interval;
use crate::codec::WireFormat;
use crate::{wire, InvalidValue};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DynamicStatus {
    DynamicPalette,
    None,
}

/// Animation speed in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    pub fn new(value: f64) -> Result<Self, InvalidValue> {
        unit_interval("speed", value).map(Self)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dynamics {
    status: DynamicStatus,
    status_values: Vec<DynamicStatus>,
    speed: Speed,
    speed_valid: bool,
}

impl Dynamics {
    pub fn new(
        status: DynamicStatus,
        status_values: Vec<DynamicStatus>,
        speed: f64,
        speed_valid: bool,
    ) -> Result<Self, InvalidValue> {
        Ok(Self {
            status,
            status_values,
            speed: Speed::new(speed)?,
            speed_valid,
        })
    }

    pub fn status(&self) -> DynamicStatus {
        self.status
    }

    pub fn status_values(&self) -> &[DynamicStatus] {
        &self.status_values
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn speed_valid(&self) -> bool {
        self.speed_valid
    }
}

impl WireFormat for Dynamics {
    type Wire = wire::Dynamics;

    fn from_wire(wire: wire::Dynamics) -> Result<Self, InvalidValue> {
        Self::new(wire.status, wire.status_values, wire.speed, wire.speed_valid)
    }

    fn to_wire(&self) -> wire::Dynamics {
        wire::Dynamics {
            status: self.status,
            status_values: self.status_values.clone(),
            speed: self.speed.value(),
            speed_valid: self.speed_valid,
        }
    }
}
