use crate::codec::{nested, nested_opt, nested_vec, Resource, WireFormat};
use crate::value::{
    Color, ColorTemperature, Dimming, Dynamics, Group, LightGradient, Mirek, On, Rtype,
    SceneMetadata, SceneMode, SceneStatus, Speed, Target,
};
use crate::{wire, InvalidValue};

/// The state a scene applies to one of its target lights.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightAction {
    pub on: Option<On>,
    pub dimming: Option<Dimming>,
    pub color: Option<Color>,
    pub color_temperature: Option<Mirek>,
    /// Transition duration in milliseconds.
    pub duration: Option<u32>,
}

impl WireFormat for LightAction {
    type Wire = wire::LightAction;

    fn from_wire(wire: wire::LightAction) -> Result<Self, InvalidValue> {
        Ok(Self {
            on: wire.on,
            dimming: nested_opt("dimming", wire.dimming)?,
            color: nested_opt("color", wire.color)?,
            color_temperature: nested_opt("color_temperature", wire.color_temperature)?,
            duration: wire.dynamics.and_then(|dynamics| dynamics.duration),
        })
    }

    fn to_wire(&self) -> wire::LightAction {
        wire::LightAction {
            on: self.on,
            dimming: self.dimming.as_ref().map(Dimming::to_wire),
            color: self.color.as_ref().map(Color::to_wire),
            color_temperature: self.color_temperature.as_ref().map(Mirek::to_wire),
            dynamics: self.duration.map(|duration| wire::ActionDynamics {
                duration: Some(duration),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneAction {
    pub target: Target,
    pub action: LightAction,
}

impl WireFormat for SceneAction {
    type Wire = wire::SceneAction;

    fn from_wire(wire: wire::SceneAction) -> Result<Self, InvalidValue> {
        Ok(Self {
            target: wire.target,
            action: nested("action", wire.action)?,
        })
    }

    fn to_wire(&self) -> wire::SceneAction {
        wire::SceneAction {
            target: self.target.clone(),
            action: self.action.to_wire(),
        }
    }
}

/// A stored scene.
///
/// Current bridges describe the per-light state in `actions`; the scene-wide
/// `on`, `dimming`, `color_temperature`, `color`, `dynamics`, `mode` and
/// `gradient` fields are only filled in when the bridge reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: String,
    pub id_v1: Option<String>,
    pub metadata: SceneMetadata,
    pub group: Option<Group>,
    pub on: Option<On>,
    pub dimming: Option<Dimming>,
    pub color_temperature: Option<ColorTemperature>,
    pub color: Option<Color>,
    pub dynamics: Option<Dynamics>,
    pub mode: Option<SceneMode>,
    pub gradient: Option<LightGradient>,
    pub actions: Vec<SceneAction>,
    pub speed: Option<Speed>,
    pub auto_dynamic: Option<bool>,
    pub status: Option<SceneStatus>,
}

impl Scene {
    /// Ids of the lights this scene drives.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .filter(|action| action.target.rtype == Rtype::Light)
            .map(|action| action.target.rid.as_str())
    }
}

impl WireFormat for Scene {
    type Wire = wire::Scene;

    fn from_wire(wire: wire::Scene) -> Result<Self, InvalidValue> {
        Ok(Self {
            id: wire.id,
            id_v1: wire.id_v1,
            metadata: nested("metadata", wire.metadata)?,
            group: wire.group,
            on: wire.on,
            dimming: nested_opt("dimming", wire.dimming)?,
            color_temperature: nested_opt("color_temperature", wire.color_temperature)?,
            color: nested_opt("color", wire.color)?,
            dynamics: nested_opt("dynamics", wire.dynamics)?,
            mode: wire.mode,
            gradient: nested_opt("gradient", wire.gradient)?,
            actions: nested_vec("actions", wire.actions)?,
            speed: wire.speed.map(Speed::new).transpose()?,
            auto_dynamic: wire.auto_dynamic,
            status: wire.status,
        })
    }

    fn to_wire(&self) -> wire::Scene {
        wire::Scene {
            id: self.id.clone(),
            id_v1: self.id_v1.clone(),
            metadata: self.metadata.to_wire(),
            group: self.group.clone(),
            on: self.on,
            dimming: self.dimming.as_ref().map(Dimming::to_wire),
            color_temperature: self.color_temperature.as_ref().map(ColorTemperature::to_wire),
            color: self.color.as_ref().map(Color::to_wire),
            dynamics: self.dynamics.as_ref().map(Dynamics::to_wire),
            mode: self.mode,
            gradient: self.gradient.as_ref().map(LightGradient::to_wire),
            actions: self.actions.iter().map(SceneAction::to_wire).collect(),
            speed: self.speed.map(|speed| speed.value()),
            auto_dynamic: self.auto_dynamic,
            status: self.status.clone(),
        }
    }
}

impl Resource for Scene {
    const RTYPE: Rtype = Rtype::Scene;
    const PATCHABLE: &'static [&'static str] = &[
        "metadata",
        "actions",
        "palette",
        "recall",
        "speed",
        "auto_dynamic",
    ];
    const CREATABLE: &'static [&'static str] = &[
        "metadata",
        "group",
        "actions",
        "palette",
        "speed",
        "auto_dynamic",
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
    use crate::value::SceneStatusActive;
    use serde_json::json;

    #[test]
    fn actions_are_validated() {
        let scene: Scene = decode(fixtures::scene()).unwrap();
        assert_eq!(scene.metadata.name().as_str(), "Relax");
        assert_eq!(scene.actions.len(), 2);
        assert_eq!(
            scene.actions[0].action.color_temperature.unwrap().value(),
            447
        );
        assert_eq!(scene.actions[1].action.duration, Some(400));
        assert_eq!(scene.targets().count(), 2);
        assert_eq!(scene.status.as_ref().unwrap().active, SceneStatusActive::Inactive);
        assert!(scene.on.is_none());
    }

    #[test]
    fn bad_action_reports_index() {
        let mut raw = fixtures::scene();
        raw["actions"][1]["action"]["dimming"]["brightness"] = json!(101);
        let err = decode::<Scene>(raw).unwrap_err();
        assert_eq!(err.path, "actions[1].action.dimming.brightness");
    }

    #[test]
    fn scene_name_too_long() {
        let mut raw = fixtures::scene();
        raw["metadata"]["name"] = json!("A".repeat(33));
        let err = decode::<Scene>(raw).unwrap_err();
        assert_eq!(err.path, "metadata.name");
    }

    #[test]
    fn scene_image_must_be_public() {
        let mut raw = fixtures::scene();
        raw["metadata"]["image"]["rtype"] = json!("light");
        let err = decode::<Scene>(raw).unwrap_err();
        assert_eq!(err.path, "metadata.image.rtype");
    }

    #[test]
    fn scene_wide_state_is_decoded_when_present() {
        let mut raw = fixtures::scene();
        raw["on"] = json!({"on": true});
        raw["dimming"] = json!({"brightness": 20.0});
        raw["mode"] = json!("interpolated_palette_mirrored");
        let scene: Scene = decode(raw).unwrap();
        assert_eq!(scene.on, Some(On { on: true }));
        assert_eq!(scene.mode, Some(SceneMode::InterpolatedPaletteMirrored));
    }
}
