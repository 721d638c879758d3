use crate::codec::WireFormat;
use crate::{wire, InvalidValue};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LightEffect {
    NoEffect,
    Candle,
    Fire,
    Prism,
    Sparkle,
    Opal,
    Glisten,
    Underwater,
    Cosmos,
    Sunbeam,
    Enchant,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LightTimedEffect {
    NoEffect,
    Sunrise,
    Sunset,
}

/// Looping effect state of a light.
///
/// Every member is already constrained by its enumeration, so there is
/// nothing left to check at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effects {
    pub effect: Option<LightEffect>,
    pub status: LightEffect,
    pub status_values: Vec<LightEffect>,
    pub effect_values: Vec<LightEffect>,
}

impl WireFormat for Effects {
    type Wire = wire::Effects;

    fn from_wire(wire: wire::Effects) -> Result<Self, InvalidValue> {
        Ok(Self {
            effect: wire.effect,
            status: wire.status,
            status_values: wire.status_values,
            effect_values: wire.effect_values,
        })
    }

    fn to_wire(&self) -> wire::Effects {
        wire::Effects {
            effect: self.effect,
            status: self.status,
            status_values: self.status_values.clone(),
            effect_values: self.effect_values.clone(),
        }
    }
}

/// One-shot effects such as a sunrise that run for `duration` milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEffects {
    pub effect: Option<LightTimedEffect>,
    pub duration: Option<u32>,
    pub status: LightTimedEffect,
    pub status_values: Vec<LightTimedEffect>,
    pub effect_values: Vec<LightTimedEffect>,
}

impl WireFormat for TimedEffects {
    type Wire = wire::TimedEffects;

    fn from_wire(wire: wire::TimedEffects) -> Result<Self, InvalidValue> {
        Ok(Self {
            effect: wire.effect,
            duration: wire.duration,
            status: wire.status,
            status_values: wire.status_values,
            effect_values: wire.effect_values,
        })
    }

    fn to_wire(&self) -> wire::TimedEffects {
        wire::TimedEffects {
            effect: self.effect,
            duration: self.duration,
            status: self.status,
            status_values: self.status_values.clone(),
            effect_values: self.effect_values.clone(),
        }
    }
}
