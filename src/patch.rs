//! Partial updates.
//!
//! A [`Patch`] is the ordered list of field changes sent in a `PUT` (or, for
//! creatable kinds, a `POST`). Which fields a resource kind accepts is checked
//! when the patch is encoded, see [`crate::codec::encode_patch`].

use crate::codec::WireFormat;
use crate::resource::SceneAction;
use crate::value::{
    gradient_point, AlertAction, Brightness, CieXy, GradientMode, LightEffect, LightTimedEffect,
    Mirek, RecallAction, ResourceIdentifier, ResourceName, Signal, Speed,
};
use crate::InvalidValue;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use strum_macros::{AsRefStr, Display, EnumString};

/// Largest mirek step the bridge accepts in a relative color temperature change.
pub const MAX_MIREK_DELTA: u16 = 347;

/// Direction of a relative change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeltaAction {
    Up,
    Down,
    Stop,
}

/// One field of a partial update.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    On(bool),
    Dimming(Brightness),
    DimmingDelta {
        action: DeltaAction,
        brightness_delta: f64,
    },
    ColorTemperature(Mirek),
    ColorTemperatureDelta {
        action: DeltaAction,
        mirek_delta: u16,
    },
    Color(CieXy),
    /// Transition duration (ms) and/or dynamic speed.
    Dynamics {
        duration: Option<u32>,
        speed: Option<Speed>,
    },
    Alert(AlertAction),
    Signaling {
        signal: Signal,
        duration_ms: u32,
        colors: Vec<CieXy>,
    },
    Gradient {
        points: Vec<CieXy>,
        mode: Option<GradientMode>,
    },
    Effect(LightEffect),
    TimedEffect {
        effect: LightTimedEffect,
        duration: Option<u32>,
    },
    Identify,
    Name(ResourceName),
    Actions(Vec<SceneAction>),
    Recall {
        action: RecallAction,
        duration: Option<u32>,
    },
    Palette(ScenePalette),
    Speed(Speed),
    AutoDynamic(bool),
    Group(ResourceIdentifier),
    Children(Vec<ResourceIdentifier>),
    /// A field this crate does not model, sent as is.
    Raw { field: String, value: Value },
}

impl FieldChange {
    /// Name of the top level JSON field this change writes.
    pub fn field(&self) -> &str {
        match self {
            FieldChange::On(_) => "on",
            FieldChange::Dimming(_) => "dimming",
            FieldChange::DimmingDelta { .. } => "dimming_delta",
            FieldChange::ColorTemperature(_) => "color_temperature",
            FieldChange::ColorTemperatureDelta { .. } => "color_temperature_delta",
            FieldChange::Color(_) => "color",
            FieldChange::Dynamics { .. } => "dynamics",
            FieldChange::Alert(_) => "alert",
            FieldChange::Signaling { .. } => "signaling",
            FieldChange::Gradient { .. } => "gradient",
            FieldChange::Effect(_) => "effects",
            FieldChange::TimedEffect { .. } => "timed_effects",
            FieldChange::Identify => "identify",
            FieldChange::Name(_) => "metadata",
            FieldChange::Actions(_) => "actions",
            FieldChange::Recall { .. } => "recall",
            FieldChange::Palette(_) => "palette",
            FieldChange::Speed(_) => "speed",
            FieldChange::AutoDynamic(_) => "auto_dynamic",
            FieldChange::Group(_) => "group",
            FieldChange::Children(_) => "children",
            FieldChange::Raw { field, .. } => field,
        }
    }

    /// The JSON value written under [`FieldChange::field`].
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let value = match self {
            FieldChange::On(on) => json!({ "on": on }),
            FieldChange::Dimming(brightness) => json!({ "brightness": brightness.value() }),
            FieldChange::DimmingDelta {
                action,
                brightness_delta,
            } => json!({ "action": action, "brightness_delta": brightness_delta }),
            FieldChange::ColorTemperature(mirek) => serde_json::to_value(mirek.to_wire())?,
            FieldChange::ColorTemperatureDelta { action, mirek_delta } => {
                json!({ "action": action, "mirek_delta": mirek_delta })
            }
            FieldChange::Color(xy) => json!({ "xy": xy.to_wire() }),
            FieldChange::Dynamics { duration, speed } => {
                let mut dynamics = Map::new();
                if let Some(duration) = duration {
                    dynamics.insert("duration".to_string(), json!(duration));
                }
                if let Some(speed) = speed {
                    dynamics.insert("speed".to_string(), json!(speed.value()));
                }
                Value::Object(dynamics)
            }
            FieldChange::Alert(action) => json!({ "action": action }),
            FieldChange::Signaling {
                signal,
                duration_ms,
                colors,
            } => {
                let mut signaling = json!({ "signal": signal, "duration": duration_ms });
                if !colors.is_empty() {
                    let colors: Vec<_> = colors.iter().map(|xy| json!({ "xy": xy.to_wire() })).collect();
                    signaling["colors"] = Value::Array(colors);
                }
                signaling
            }
            FieldChange::Gradient { points, mode } => {
                let points: Vec<_> = points.iter().map(gradient_point).collect();
                let mut gradient = json!({ "points": points });
                if let Some(mode) = mode {
                    gradient["mode"] = serde_json::to_value(mode)?;
                }
                gradient
            }
            FieldChange::Effect(effect) => json!({ "effect": effect }),
            FieldChange::TimedEffect { effect, duration } => {
                let mut timed = json!({ "effect": effect });
                if let Some(duration) = duration {
                    timed["duration"] = json!(duration);
                }
                timed
            }
            FieldChange::Identify => json!({ "action": "identify" }),
            FieldChange::Name(name) => json!({ "name": name.as_str() }),
            FieldChange::Actions(actions) => serde_json::to_value(
                actions.iter().map(SceneAction::to_wire).collect::<Vec<_>>(),
            )?,
            FieldChange::Recall { action, duration } => {
                let mut recall = json!({ "action": action });
                if let Some(duration) = duration {
                    recall["duration"] = json!(duration);
                }
                recall
            }
            FieldChange::Palette(palette) => palette.to_json()?,
            FieldChange::Speed(speed) => json!(speed.value()),
            FieldChange::AutoDynamic(auto) => json!(auto),
            FieldChange::Group(group) => serde_json::to_value(group)?,
            FieldChange::Children(children) => serde_json::to_value(children)?,
            FieldChange::Raw { value, .. } => value.clone(),
        };
        Ok(value)
    }
}

/// Color of a scene palette, with an optional brightness of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColor {
    pub xy: CieXy,
    pub dimming: Option<Brightness>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteTemperature {
    pub mirek: Mirek,
    pub dimming: Option<Brightness>,
}

/// The palette a dynamic scene cycles through.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScenePalette {
    pub color: Vec<PaletteColor>,
    pub dimming: Vec<Brightness>,
    pub color_temperature: Vec<PaletteTemperature>,
    pub effects: Vec<LightEffect>,
}

fn palette_entry(key: &str, value: Value, dimming: Option<Brightness>) -> Value {
    let mut entry = Map::new();
    entry.insert(key.to_string(), value);
    if let Some(brightness) = dimming {
        entry.insert("dimming".to_string(), json!({ "brightness": brightness.value() }));
    }
    Value::Object(entry)
}

impl ScenePalette {
    fn to_json(&self) -> Result<Value, serde_json::Error> {
        let color: Vec<_> = self
            .color
            .iter()
            .map(|c| palette_entry("color", json!({ "xy": c.xy.to_wire() }), c.dimming))
            .collect();
        let dimming: Vec<_> = self
            .dimming
            .iter()
            .map(|b| json!({ "brightness": b.value() }))
            .collect();
        let mut color_temperature = Vec::with_capacity(self.color_temperature.len());
        for t in &self.color_temperature {
            let mirek = serde_json::to_value(t.mirek.to_wire())?;
            color_temperature.push(palette_entry("color_temperature", mirek, t.dimming));
        }
        let effects: Vec<_> = self.effects.iter().map(|e| json!({ "effect": e })).collect();
        Ok(json!({
            "color": color,
            "dimming": dimming,
            "color_temperature": color_temperature,
            "effects": effects,
        }))
    }
}

/// An ordered set of field changes, built the same way for every resource kind.
///
/// ### Example
/// ```
/// use hueclient::patch::Patch;
/// use hueclient::value::{Brightness, Mirek};
///
/// let patch = Patch::new()
///     .on()
///     .with_brightness(Brightness::new(80.0).unwrap())
///     .with_mirek(Mirek::from_kelvin(2700).unwrap())
///     .with_transition_time(400);
/// assert_eq!(patch.changes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patch {
    changes: Vec<FieldChange>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: FieldChange) {
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[FieldChange] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn with(mut self, change: FieldChange) -> Self {
        self.push(change);
        self
    }

    pub fn on(self) -> Self {
        self.with(FieldChange::On(true))
    }

    pub fn off(self) -> Self {
        self.with(FieldChange::On(false))
    }

    pub fn with_brightness(self, brightness: Brightness) -> Self {
        self.with(FieldChange::Dimming(brightness))
    }

    /// Relative brightness change, in percent points (0 to 100).
    pub fn with_dimming_delta(
        self,
        action: DeltaAction,
        brightness_delta: f64,
    ) -> Result<Self, InvalidValue> {
        if !(0.0..=100.0).contains(&brightness_delta) {
            return Err(InvalidValue::new(
                "brightness_delta",
                format!("must be ≥ 0 and ≤ 100, got {brightness_delta}"),
            ));
        }
        Ok(self.with(FieldChange::DimmingDelta {
            action,
            brightness_delta,
        }))
    }

    pub fn with_mirek(self, mirek: Mirek) -> Self {
        self.with(FieldChange::ColorTemperature(mirek))
    }

    pub fn with_mirek_delta(self, action: DeltaAction, mirek_delta: u16) -> Result<Self, InvalidValue> {
        if mirek_delta > MAX_MIREK_DELTA {
            return Err(InvalidValue::new(
                "mirek_delta",
                format!("must be ≤ {MAX_MIREK_DELTA}, got {mirek_delta}"),
            ));
        }
        Ok(self.with(FieldChange::ColorTemperatureDelta {
            action,
            mirek_delta,
        }))
    }

    pub fn with_xy(self, xy: CieXy) -> Self {
        self.with(FieldChange::Color(xy))
    }

    /// Fills in the last `dynamics` change, so a transition time and a speed
    /// set separately travel together.
    fn with_dynamics(mut self, duration: Option<u32>, speed: Option<Speed>) -> Self {
        let last = self.changes.iter_mut().rev().find_map(|change| match change {
            FieldChange::Dynamics {
                duration: current_duration,
                speed: current_speed,
            } => Some((current_duration, current_speed)),
            _ => None,
        });
        match last {
            Some((current_duration, current_speed)) => {
                if duration.is_some() {
                    *current_duration = duration;
                }
                if speed.is_some() {
                    *current_speed = speed;
                }
                self
            }
            None => self.with(FieldChange::Dynamics { duration, speed }),
        }
    }

    /// Transition duration in milliseconds, sent as `dynamics.duration`.
    /// Merges with an earlier [`Patch::with_dynamics_speed`].
    pub fn with_transition_time(self, ms: u32) -> Self {
        self.with_dynamics(Some(ms), None)
    }

    /// Speed of a light's dynamic effect, sent as `dynamics.speed`.
    /// Merges with an earlier [`Patch::with_transition_time`].
    pub fn with_dynamics_speed(self, speed: Speed) -> Self {
        self.with_dynamics(None, Some(speed))
    }

    /// Playback speed of a scene, a top level field. Lights take
    /// [`Patch::with_dynamics_speed`] instead.
    pub fn with_speed(self, speed: Speed) -> Self {
        self.with(FieldChange::Speed(speed))
    }

    pub fn with_alert(self, action: AlertAction) -> Self {
        self.with(FieldChange::Alert(action))
    }

    pub fn with_signal(self, signal: Signal, duration_ms: u32, colors: Vec<CieXy>) -> Self {
        self.with(FieldChange::Signaling {
            signal,
            duration_ms,
            colors,
        })
    }

    pub fn with_gradient(self, points: Vec<CieXy>, mode: Option<GradientMode>) -> Self {
        self.with(FieldChange::Gradient { points, mode })
    }

    pub fn with_effect(self, effect: LightEffect) -> Self {
        self.with(FieldChange::Effect(effect))
    }

    pub fn with_timed_effect(self, effect: LightTimedEffect, duration: Option<u32>) -> Self {
        self.with(FieldChange::TimedEffect { effect, duration })
    }

    pub fn identify(self) -> Self {
        self.with(FieldChange::Identify)
    }

    pub fn with_name(self, name: ResourceName) -> Self {
        self.with(FieldChange::Name(name))
    }

    pub fn with_actions(self, actions: Vec<SceneAction>) -> Self {
        self.with(FieldChange::Actions(actions))
    }

    pub fn recall(self, action: RecallAction) -> Self {
        self.with(FieldChange::Recall {
            action,
            duration: None,
        })
    }

    pub fn with_palette(self, palette: ScenePalette) -> Self {
        self.with(FieldChange::Palette(palette))
    }

    pub fn with_auto_dynamic(self, auto_dynamic: bool) -> Self {
        self.with(FieldChange::AutoDynamic(auto_dynamic))
    }

    pub fn with_group(self, group: ResourceIdentifier) -> Self {
        self.with(FieldChange::Group(group))
    }

    pub fn with_children(self, children: Vec<ResourceIdentifier>) -> Self {
        self.with(FieldChange::Children(children))
    }

    pub fn with_raw(self, field: impl Into<String>, value: Value) -> Self {
        self.with(FieldChange::Raw {
            field: field.into(),
            value,
        })
    }
}

impl FromIterator<FieldChange> for Patch {
    fn from_iter<I: IntoIterator<Item = FieldChange>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}
