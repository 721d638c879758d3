use crate::codec::{nested, nested_opt, Resource, WireFormat};
use crate::value::{Alert, Dimming, Metadata, On, Owner, ResourceIdentifier, Rtype, Signaling};
use crate::{wire, InvalidValue};

/// The combined light service of a room or zone.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedLight {
    pub id: String,
    pub id_v1: Option<String>,
    pub owner: Owner,
    pub on: Option<On>,
    pub dimming: Option<Dimming>,
    pub alert: Option<Alert>,
    pub signaling: Option<Signaling>,
}

impl WireFormat for GroupedLight {
    type Wire = wire::GroupedLight;

    fn from_wire(wire: wire::GroupedLight) -> Result<Self, InvalidValue> {
        Ok(Self {
            id: wire.id,
            id_v1: wire.id_v1,
            owner: wire.owner,
            on: wire.on,
            dimming: nested_opt("dimming", wire.dimming)?,
            alert: wire.alert,
            signaling: wire.signaling,
        })
    }

    fn to_wire(&self) -> wire::GroupedLight {
        wire::GroupedLight {
            id: self.id.clone(),
            id_v1: self.id_v1.clone(),
            owner: self.owner.clone(),
            on: self.on,
            dimming: self.dimming.as_ref().map(Dimming::to_wire),
            alert: self.alert.clone(),
            signaling: self.signaling.clone(),
        }
    }
}

impl Resource for GroupedLight {
    const RTYPE: Rtype = Rtype::GroupedLight;
    const PATCHABLE: &'static [&'static str] = &[
        "on",
        "dimming",
        "dimming_delta",
        "color_temperature",
        "color_temperature_delta",
        "color",
        "alert",
        "signaling",
        "dynamics",
    ];

    fn id(&self) -> &str {
        &self.id
    }
}

/// Rooms and zones share their shape; they differ in what may be a child
/// (devices for rooms, lights for zones).
macro_rules! group_resource {
    ($(#[$doc:meta])* $name:ident, $rtype:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub id: String,
            pub id_v1: Option<String>,
            pub children: Vec<ResourceIdentifier>,
            pub services: Vec<ResourceIdentifier>,
            pub metadata: Metadata,
        }

        impl $name {
            /// The grouped light service controlling every light in this group.
            pub fn grouped_light(&self) -> Option<&str> {
                self.services
                    .iter()
                    .find(|service| service.rtype == Rtype::GroupedLight)
                    .map(|service| service.rid.as_str())
            }
        }

        impl WireFormat for $name {
            type Wire = wire::Room;

            fn from_wire(wire: wire::Room) -> Result<Self, InvalidValue> {
                Ok(Self {
                    id: wire.id,
                    id_v1: wire.id_v1,
                    children: wire.children,
                    services: wire.services,
                    metadata: nested("metadata", wire.metadata)?,
                })
            }

            fn to_wire(&self) -> wire::Room {
                wire::Room {
                    id: self.id.clone(),
                    id_v1: self.id_v1.clone(),
                    children: self.children.clone(),
                    services: self.services.clone(),
                    metadata: self.metadata.to_wire(),
                }
            }
        }

        impl Resource for $name {
            const RTYPE: Rtype = $rtype;
            const PATCHABLE: &'static [&'static str] = &["metadata", "children"];
            const CREATABLE: &'static [&'static str] = &["metadata", "children"];

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}

group_resource!(
    /// A room: a set of devices in one place.
    Room,
    Rtype::Room
);
group_resource!(
    /// A zone: an arbitrary set of lights, possibly spanning rooms.
    Zone,
    Rtype::Zone
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use crate::fixtures;
    use serde_json::json;

    #[test]
    fn room_exposes_grouped_light() {
        let room: Room = decode(fixtures::room()).unwrap();
        assert_eq!(room.metadata.name().as_str(), "Living room");
        assert_eq!(room.grouped_light(), Some(fixtures::GROUPED_LIGHT_ID));
        assert_eq!(room.children[0].rtype, Rtype::Device);
    }

    #[test]
    fn zone_is_not_a_room() {
        let err = decode::<Zone>(fixtures::room()).unwrap_err();
        assert_eq!(err.path, "type");
        assert!(decode::<Zone>(fixtures::zone()).is_ok());
    }

    #[test]
    fn grouped_light_dimming_is_checked() {
        let mut raw = fixtures::grouped_light();
        raw["dimming"] = json!({"brightness": -3});
        let err = decode::<GroupedLight>(raw).unwrap_err();
        assert_eq!(err.path, "dimming.brightness");
    }
}
