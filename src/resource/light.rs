use crate::codec::{nested, nested_opt, Resource, WireFormat};
use crate::value::{
    Alert, Color, ColorTemperature, Dimming, Dynamics, Effects, LightGradient, LightMetadata,
    LightMode, On, Owner, Rtype, Signaling, SignalingStatus, TimedEffects,
};
use crate::{wire, InvalidValue};

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub id: String,
    pub id_v1: Option<String>,
    pub owner: Owner,
    pub metadata: LightMetadata,
    pub on: On,
    pub dimming: Option<Dimming>,
    pub color_temperature: Option<ColorTemperature>,
    pub color: Option<Color>,
    pub dynamics: Option<Dynamics>,
    pub alert: Option<Alert>,
    pub signaling: Option<Signaling>,
    pub mode: LightMode,
    pub gradient: Option<LightGradient>,
    pub effects: Option<Effects>,
    pub timed_effects: Option<TimedEffects>,
}

impl Light {
    pub fn is_on(&self) -> bool {
        self.on.on
    }

    pub fn signaling_status(&self) -> Option<&SignalingStatus> {
        self.signaling.as_ref().and_then(|s| s.status.as_ref())
    }

    /// Whether the light can render colors beyond white tuning.
    pub fn supports_color(&self) -> bool {
        self.color.is_some()
    }
}

impl WireFormat for Light {
    type Wire = wire::Light;

    fn from_wire(wire: wire::Light) -> Result<Self, InvalidValue> {
        Ok(Self {
            id: wire.id,
            id_v1: wire.id_v1,
            owner: wire.owner,
            metadata: nested("metadata", wire.metadata)?,
            on: wire.on,
            dimming: nested_opt("dimming", wire.dimming)?,
            color_temperature: nested_opt("color_temperature", wire.color_temperature)?,
            color: nested_opt("color", wire.color)?,
            dynamics: nested_opt("dynamics", wire.dynamics)?,
            alert: wire.alert,
            signaling: wire.signaling,
            mode: wire.mode,
            gradient: nested_opt("gradient", wire.gradient)?,
            effects: nested_opt("effects", wire.effects)?,
            timed_effects: nested_opt("timed_effects", wire.timed_effects)?,
        })
    }

    fn to_wire(&self) -> wire::Light {
        wire::Light {
            id: self.id.clone(),
            id_v1: self.id_v1.clone(),
            owner: self.owner.clone(),
            metadata: self.metadata.to_wire(),
            on: self.on,
            dimming: self.dimming.as_ref().map(Dimming::to_wire),
            color_temperature: self.color_temperature.as_ref().map(ColorTemperature::to_wire),
            color: self.color.as_ref().map(Color::to_wire),
            dynamics: self.dynamics.as_ref().map(Dynamics::to_wire),
            alert: self.alert.clone(),
            signaling: self.signaling.clone(),
            mode: self.mode,
            gradient: self.gradient.as_ref().map(LightGradient::to_wire),
            effects: self.effects.as_ref().map(Effects::to_wire),
            timed_effects: self.timed_effects.as_ref().map(TimedEffects::to_wire),
        }
    }
}

impl Resource for Light {
    const RTYPE: Rtype = Rtype::Light;
    const PATCHABLE: &'static [&'static str] = &[
        "metadata",
        "identify",
        "on",
        "dimming",
        "dimming_delta",
        "color_temperature",
        "color_temperature_delta",
        "color",
        "dynamics",
        "alert",
        "signaling",
        "gradient",
        "effects",
        "timed_effects",
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use crate::fixtures;
    use crate::value::{Archetype, GamutType, LightEffect};
    use serde_json::json;

    #[test]
    fn nested_values_are_reachable() {
        let light: Light = decode(fixtures::light()).unwrap();
        assert_eq!(light.id_v1.as_deref(), Some("/lights/7"));
        assert_eq!(light.metadata.archetype(), Archetype::SultanBulb);
        assert_eq!(light.metadata.fixed_mired().unwrap().value(), 366);
        assert_eq!(light.color.as_ref().unwrap().gamut_type(), Some(GamutType::C));
        assert_eq!(light.mode, LightMode::Normal);
        assert_eq!(light.effects.as_ref().unwrap().status, LightEffect::NoEffect);
        assert_eq!(light.gradient.as_ref().unwrap().points().len(), 3);
        assert!(light.signaling_status().is_none());
    }

    #[test]
    fn plain_on_off_plug_decodes() {
        let light: Light = decode(json!({
            "id": "0d3f1e32-9e4c-4a59-9b8f-6b2f4b3a1c11",
            "owner": {"rid": "f6a0b1de-31b3-4a51-9a3a-f6b4a7dd2ab0", "rtype": "device"},
            "metadata": {"name": "Fan plug", "archetype": "plug"},
            "on": {"on": false},
            "mode": "normal",
            "type": "light"
        }))
        .unwrap();
        assert!(!light.is_on());
        assert!(light.dimming.is_none());
        assert!(!light.supports_color());
    }

    #[test]
    fn signaling_status_is_exposed() {
        let mut raw = fixtures::light();
        raw["signaling"]["status"] = json!({"signal": "alternating"});
        let light: Light = decode(raw).unwrap();
        assert_eq!(
            light.signaling_status().unwrap().signal,
            crate::value::Signal::Alternating
        );
    }
}
