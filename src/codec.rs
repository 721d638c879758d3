//! Mapping between bridge JSON and validated values.
//!
//! Decoding goes through two steps: `serde` turns the JSON into the permissive
//! [`crate::wire`] mirror (tracking the path of any shape error), then
//! [`WireFormat::from_wire`] validates it. Encoding goes the other way; the
//! values are already valid, so only the allow-list of a patch can reject it.

use crate::patch::Patch;
use crate::value::Rtype;
use crate::{DecodeError, DecodeErrorKind, HueError, InvalidValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A validated type with a serde mirror on the wire.
pub trait WireFormat: Sized {
    type Wire: Serialize + DeserializeOwned;

    fn from_wire(wire: Self::Wire) -> Result<Self, InvalidValue>;

    fn to_wire(&self) -> Self::Wire;
}

/// A top level bridge resource kind.
pub trait Resource: WireFormat {
    const RTYPE: Rtype;
    /// Fields the bridge accepts in a `PUT` on this kind.
    const PATCHABLE: &'static [&'static str];
    /// Fields the bridge accepts in a `POST` on this kind. Empty when clients cannot create it.
    const CREATABLE: &'static [&'static str] = &[];

    fn id(&self) -> &str;
}

/// Outcome of decoding a batch: the resources that made it and, for the others,
/// their position in the batch and why they failed.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedList<R> {
    pub resources: Vec<R>,
    pub errors: Vec<(usize, DecodeError)>,
}

impl<R> DecodedList<R> {
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Decodes any validated value from its JSON form.
///
/// ```
/// use hueclient::codec::decode_value;
/// use hueclient::value::Dimming;
///
/// let err = decode_value::<Dimming>(serde_json::json!({"brightness": 150})).unwrap_err();
/// assert_eq!(err.path, "brightness");
/// assert!(err.invalid_value().unwrap().constraint.contains("≤ 100"));
/// ```
pub fn decode_value<T: WireFormat>(raw: Value) -> Result<T, DecodeError> {
    let wire: T::Wire = serde_path_to_error::deserialize(raw)
        .map_err(|err| DecodeError::malformed(err.path().to_string(), err.inner().to_string()))?;
    T::from_wire(wire).map_err(DecodeError::from)
}

/// Decodes one resource object. Unknown fields are ignored; a `type` field, when
/// present, must name this resource kind.
pub fn decode<R: Resource>(raw: Value) -> Result<R, DecodeError> {
    match raw.get("type") {
        None => {}
        Some(Value::String(kind)) if kind.as_str() == R::RTYPE.as_ref() => {}
        Some(Value::String(kind)) => {
            return Err(DecodeError {
                path: "type".to_string(),
                kind: DecodeErrorKind::WrongType {
                    expected: R::RTYPE,
                    found: kind.clone(),
                },
            })
        }
        Some(other) => {
            return Err(DecodeError::malformed(
                "type",
                format!("expected a string, found {other}"),
            ))
        }
    }
    decode_value(raw)
}

/// Decodes every element of a JSON array independently.
///
/// Only a non-array input fails as a whole; bad elements are reported in
/// [`DecodedList::errors`] and the rest are still returned.
pub fn decode_list<R: Resource>(raw: Value) -> Result<DecodedList<R>, DecodeError> {
    let Value::Array(items) = raw else {
        return Err(DecodeError::malformed(
            ".",
            format!("expected an array of {} resources", R::RTYPE),
        ));
    };
    let mut list = DecodedList {
        resources: Vec::with_capacity(items.len()),
        errors: Vec::new(),
    };
    for (index, item) in items.into_iter().enumerate() {
        match decode::<R>(item) {
            Ok(resource) => list.resources.push(resource),
            Err(err) => {
                log::warn!("skipping {} #{index}: {err}", R::RTYPE);
                list.errors.push((index, err));
            }
        }
    }
    Ok(list)
}

/// Encodes every field of a resource, including its `type`.
pub fn encode_full<R: Resource>(resource: &R) -> Result<Value, HueError> {
    let mut value = serde_json::to_value(resource.to_wire())?;
    if let Value::Object(map) = &mut value {
        map.insert("type".to_string(), Value::String(R::RTYPE.to_string()));
    }
    Ok(value)
}

/// Builds the `PUT` body for `patch`. Only the fields present in the patch are
/// emitted; a field outside [`Resource::PATCHABLE`] is rejected.
///
/// ```
/// use hueclient::codec::encode_patch;
/// use hueclient::patch::Patch;
/// use hueclient::resource::Light;
/// use hueclient::value::RecallAction;
///
/// let body = encode_patch::<Light>(&Patch::new().on()).unwrap();
/// assert_eq!(body, serde_json::json!({"on": {"on": true}}));
///
/// assert!(encode_patch::<Light>(&Patch::new().recall(RecallAction::Active)).is_err());
/// ```
pub fn encode_patch<R: Resource>(patch: &Patch) -> Result<Value, HueError> {
    encode_allowed(R::RTYPE, R::PATCHABLE, patch)
}

/// Builds the `POST` body for a new resource, against [`Resource::CREATABLE`].
pub fn encode_create<R: Resource>(patch: &Patch) -> Result<Value, HueError> {
    encode_allowed(R::RTYPE, R::CREATABLE, patch)
}

fn encode_allowed(rtype: Rtype, allowed: &[&str], patch: &Patch) -> Result<Value, HueError> {
    let mut body = Map::new();
    for change in patch.changes() {
        let field = change.field();
        if !allowed.contains(&field) {
            return Err(HueError::unsupported(rtype, field));
        }
        body.insert(field.to_string(), change.to_json()?);
    }
    Ok(Value::Object(body))
}

pub(crate) fn nested<T: WireFormat>(field: &str, wire: T::Wire) -> Result<T, InvalidValue> {
    T::from_wire(wire).map_err(|err| err.within(field))
}

pub(crate) fn nested_opt<T: WireFormat>(
    field: &str,
    wire: Option<T::Wire>,
) -> Result<Option<T>, InvalidValue> {
    wire.map(|wire| nested(field, wire)).transpose()
}

pub(crate) fn nested_vec<T: WireFormat>(
    field: &str,
    wire: Vec<T::Wire>,
) -> Result<Vec<T>, InvalidValue> {
    wire.into_iter()
        .enumerate()
        .map(|(index, wire)| T::from_wire(wire).map_err(|err| err.at_index(index).within(field)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::resource::{Device, GroupedLight, Light, Room, Scene, Zone};
    use crate::value::{
        Brightness, CieXy, Dimming, LightEffect, Mirek, RecallAction, ResourceIdentifier, Speed,
    };
    use crate::patch::{PaletteColor, ScenePalette};
    use serde_json::json;

    #[test]
    fn decodes_a_full_light() {
        let light: Light = decode(fixtures::light()).unwrap();
        assert_eq!(light.id, fixtures::LIGHT_ID);
        assert_eq!(light.metadata.name(), "Desk lamp");
        assert!(light.on.on);
        assert_eq!(light.dimming.as_ref().unwrap().brightness().value(), 72.5);
        let color = light.color.as_ref().unwrap();
        assert_eq!(color.xy().x(), 0.4573);
        assert!(light.color_temperature.as_ref().unwrap().mirek().is_none());
        assert_eq!(light.owner.rtype, Rtype::Device);
    }

    #[test]
    fn brightness_over_100_names_the_field() {
        let err = decode_value::<Dimming>(json!({"brightness": 150})).unwrap_err();
        assert_eq!(err.path, "brightness");
        let invalid = err.invalid_value().unwrap();
        assert_eq!(invalid.field, "brightness");
        assert!(invalid.constraint.contains("≤ 100"));
    }

    #[test]
    fn nested_invalid_value_reports_full_path() {
        let mut raw = fixtures::light();
        raw["color"]["xy"]["x"] = json!(1.2);
        let err = decode::<Light>(raw).unwrap_err();
        assert_eq!(err.path, "color.xy.x");
        assert!(matches!(err.kind, DecodeErrorKind::Invalid(_)));
    }

    #[test]
    fn gradient_point_path_includes_index() {
        let mut raw = fixtures::light();
        raw["gradient"]["points"][1]["color"]["xy"]["y"] = json!(-0.5);
        let err = decode::<Light>(raw).unwrap_err();
        assert_eq!(err.path, "gradient.points[1].color.xy.y");
    }

    #[test]
    fn wrong_json_type_is_malformed_with_path() {
        let mut raw = fixtures::light();
        raw["dimming"]["brightness"] = json!("bright");
        let err = decode::<Light>(raw).unwrap_err();
        assert_eq!(err.path, "dimming.brightness");
        assert!(matches!(err.kind, DecodeErrorKind::Malformed(_)));
    }

    #[test]
    fn unknown_enum_member_is_malformed() {
        let mut raw = fixtures::light();
        raw["metadata"]["archetype"] = json!("lava_lamp");
        let err = decode::<Light>(raw).unwrap_err();
        assert_eq!(err.path, "metadata.archetype");
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let mut raw = fixtures::light();
        raw.as_object_mut().unwrap().remove("owner");
        let err = decode::<Light>(raw).unwrap_err();
        match err.kind {
            DecodeErrorKind::Malformed(msg) => assert!(msg.contains("owner"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut raw = fixtures::light();
        raw["brand_new_capability"] = json!({"level": 3});
        raw["dimming"]["future"] = json!(true);
        assert!(decode::<Light>(raw).is_ok());
    }

    #[test]
    fn type_must_match_kind() {
        let mut raw = fixtures::light();
        raw["type"] = json!("scene");
        let err = decode::<Light>(raw).unwrap_err();
        assert_eq!(err.path, "type");
        assert!(matches!(
            err.kind,
            DecodeErrorKind::WrongType { expected: Rtype::Light, ref found } if found == "scene"
        ));

        let mut raw = fixtures::light();
        raw.as_object_mut().unwrap().remove("type");
        assert!(decode::<Light>(raw).is_ok());
    }

    #[test]
    fn full_encode_round_trips() {
        let light: Light = decode(fixtures::light()).unwrap();
        assert_eq!(decode::<Light>(encode_full(&light).unwrap()).unwrap(), light);

        let scene: Scene = decode(fixtures::scene()).unwrap();
        assert_eq!(decode::<Scene>(encode_full(&scene).unwrap()).unwrap(), scene);

        let room: Room = decode(fixtures::room()).unwrap();
        assert_eq!(decode::<Room>(encode_full(&room).unwrap()).unwrap(), room);

        let zone: Zone = decode(fixtures::zone()).unwrap();
        assert_eq!(decode::<Zone>(encode_full(&zone).unwrap()).unwrap(), zone);

        let device: Device = decode(fixtures::device()).unwrap();
        assert_eq!(decode::<Device>(encode_full(&device).unwrap()).unwrap(), device);

        let grouped: GroupedLight = decode(fixtures::grouped_light()).unwrap();
        assert_eq!(
            decode::<GroupedLight>(encode_full(&grouped).unwrap()).unwrap(),
            grouped
        );
    }

    #[test]
    fn full_encode_carries_type() {
        let scene: Scene = decode(fixtures::scene()).unwrap();
        let encoded = encode_full(&scene).unwrap();
        assert_eq!(encoded["type"], "scene");
        assert_eq!(encoded["metadata"]["image"]["rtype"], "public_image");
    }

    #[test]
    fn list_keeps_good_elements() {
        let mut broken = fixtures::light();
        broken["dimming"]["brightness"] = json!(0);
        let mut second = fixtures::light();
        second["id"] = json!("b2f5a7f6-0000-4000-8000-000000000002");
        let raw = json!([fixtures::light(), broken, second]);

        let list = decode_list::<Light>(raw).unwrap();
        assert_eq!(list.resources.len(), 2);
        assert_eq!(list.errors.len(), 1);
        assert_eq!(list.errors[0].0, 1);
        assert_eq!(list.errors[0].1.path, "dimming.brightness");
        assert!(!list.is_complete());
    }

    #[test]
    fn list_requires_an_array() {
        let err = decode_list::<Light>(fixtures::light()).unwrap_err();
        assert_eq!(err.path, ".");
    }

    #[test]
    fn patch_emits_only_supplied_fields() {
        let patch = Patch::new()
            .on()
            .with_brightness(Brightness::new(40.0).unwrap())
            .with_xy(CieXy::new(0.3, 0.3).unwrap());
        let body = encode_patch::<Light>(&patch).unwrap();
        assert_eq!(
            body,
            json!({
                "on": {"on": true},
                "dimming": {"brightness": 40.0},
                "color": {"xy": {"x": 0.3, "y": 0.3}},
            })
        );
    }

    #[test]
    fn later_change_to_same_field_wins() {
        let patch = Patch::new()
            .on()
            .with_mirek(Mirek::new(200).unwrap())
            .off();
        let body = encode_patch::<GroupedLight>(&patch).unwrap();
        assert_eq!(
            body,
            json!({"on": {"on": false}, "color_temperature": {"mirek": 200}})
        );
    }

    #[test]
    fn light_speed_goes_under_dynamics() {
        let speed = Speed::new(0.5).unwrap();
        let body = encode_patch::<Light>(&Patch::new().with_dynamics_speed(speed)).unwrap();
        assert_eq!(body, json!({"dynamics": {"speed": 0.5}}));

        let body = encode_patch::<Light>(
            &Patch::new()
                .with_transition_time(400)
                .with_dynamics_speed(speed),
        )
        .unwrap();
        assert_eq!(body, json!({"dynamics": {"duration": 400, "speed": 0.5}}));

        let err = encode_patch::<Light>(&Patch::new().with_speed(speed)).unwrap_err();
        assert!(matches!(
            err,
            HueError::UnsupportedField { rtype: Rtype::Light, ref field } if field == "speed"
        ));
    }

    #[test]
    fn scene_accepts_palette() {
        let palette = ScenePalette {
            color: vec![PaletteColor {
                xy: CieXy::new(0.6, 0.35).unwrap(),
                dimming: None,
            }],
            ..Default::default()
        };
        let body = encode_patch::<Scene>(&Patch::new().with_palette(palette.clone())).unwrap();
        assert_eq!(
            body["palette"]["color"],
            json!([{"color": {"xy": {"x": 0.6, "y": 0.35}}}])
        );
        assert_eq!(body["palette"]["effects"], json!([]));
        assert!(encode_create::<Scene>(&Patch::new().with_palette(palette.clone())).is_ok());
        assert!(encode_patch::<Light>(&Patch::new().with_palette(palette)).is_err());
    }

    #[test]
    fn patch_outside_allow_list_is_rejected() {
        let err = encode_patch::<Light>(&Patch::new().on().recall(RecallAction::Active))
            .unwrap_err();
        assert!(matches!(
            err,
            HueError::UnsupportedField { rtype: Rtype::Light, ref field } if field == "recall"
        ));

        let err = encode_patch::<Scene>(&Patch::new().with_effect(LightEffect::Candle))
            .unwrap_err();
        assert!(matches!(err, HueError::UnsupportedField { .. }));

        let err = encode_patch::<Room>(&Patch::new().with_raw("powerup", json!({})))
            .unwrap_err();
        assert!(matches!(err, HueError::UnsupportedField { .. }));
    }

    #[test]
    fn create_uses_its_own_allow_list() {
        let group = ResourceIdentifier::new(fixtures::ROOM_ID, Rtype::Room);
        let body = encode_create::<Scene>(&Patch::new().with_group(group.clone())).unwrap();
        assert_eq!(body["group"]["rtype"], "room");

        assert!(encode_patch::<Scene>(&Patch::new().with_group(group)).is_err());
        assert!(encode_create::<Light>(&Patch::new().on()).is_err());
    }
}
