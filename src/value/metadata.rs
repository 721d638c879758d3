use super::{Archetype, Mirek, ResourceIdentifier, Rtype};
use crate::codec::WireFormat;
use crate::{wire, InvalidValue};
use std::fmt;

/// A user visible resource name: between 1 and 32 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub const MAX_CHARS: usize = 32;

    /// Length is counted in characters, not bytes.
    ///
    /// ```
    /// use hueclient::value::ResourceName;
    ///
    /// assert!(ResourceName::new("Wohnzimmer Decke").is_ok());
    /// assert!(ResourceName::new("").is_err());
    /// assert!(ResourceName::new("é".repeat(32)).is_ok());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidValue> {
        let name = name.into();
        let len = name.chars().count();
        if !(1..=Self::MAX_CHARS).contains(&len) {
            return Err(InvalidValue::new(
                "name",
                format!("must be between 1 and 32 characters, got {len}"),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightMetadata {
    name: String,
    archetype: Archetype,
    fixed_mired: Option<Mirek>,
}

impl LightMetadata {
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        fixed_mired: Option<u16>,
    ) -> Result<Self, InvalidValue> {
        Ok(Self {
            name: name.into(),
            archetype,
            fixed_mired: fixed_mired
                .map(|value| {
                    Mirek::new(value)
                        .map_err(|err| InvalidValue::new("fixed_mired", err.constraint))
                })
                .transpose()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn fixed_mired(&self) -> Option<Mirek> {
        self.fixed_mired
    }
}

impl WireFormat for LightMetadata {
    type Wire = wire::LightMetadata;

    fn from_wire(wire: wire::LightMetadata) -> Result<Self, InvalidValue> {
        Self::new(wire.name, wire.archetype, wire.fixed_mired)
    }

    fn to_wire(&self) -> wire::LightMetadata {
        wire::LightMetadata {
            name: self.name.clone(),
            archetype: self.archetype,
            fixed_mired: self.fixed_mired.map(|mirek| mirek.value()),
        }
    }
}

/// Name of a scene and the picture the Hue app shows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneMetadata {
    name: ResourceName,
    image: Option<ResourceIdentifier>,
}

impl SceneMetadata {
    /// ```
    /// use hueclient::value::{ResourceIdentifier, Rtype, SceneMetadata};
    ///
    /// let image = ResourceIdentifier::new("732ff1d9-76a7-4630-aad0-c8acc499bb0b", Rtype::PublicImage);
    /// assert!(SceneMetadata::new("Living Room", Some(image.clone())).is_ok());
    /// assert!(SceneMetadata::new("", Some(image)).is_err());
    ///
    /// let not_an_image = ResourceIdentifier::new("3f8d7c2e", Rtype::Light);
    /// assert!(SceneMetadata::new("Living Room", Some(not_an_image)).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        image: Option<ResourceIdentifier>,
    ) -> Result<Self, InvalidValue> {
        if let Some(image) = &image {
            if image.rtype != Rtype::PublicImage {
                return Err(InvalidValue::new(
                    "image.rtype",
                    format!("must be `public_image`, got `{}`", image.rtype),
                ));
            }
        }
        Ok(Self {
            name: ResourceName::new(name)?,
            image,
        })
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn image(&self) -> Option<&ResourceIdentifier> {
        self.image.as_ref()
    }
}

impl WireFormat for SceneMetadata {
    type Wire = wire::SceneMetadata;

    fn from_wire(wire: wire::SceneMetadata) -> Result<Self, InvalidValue> {
        Self::new(wire.name, wire.image)
    }

    fn to_wire(&self) -> wire::SceneMetadata {
        wire::SceneMetadata {
            name: self.name.as_str().to_string(),
            image: self.image.clone(),
        }
    }
}

/// Metadata of rooms, zones and devices. The archetype is kept as the bridge
/// sends it: its vocabulary differs per kind and grows with new products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: ResourceName,
    archetype: Option<String>,
}

impl Metadata {
    pub fn new(name: impl Into<String>, archetype: Option<String>) -> Result<Self, InvalidValue> {
        Ok(Self {
            name: ResourceName::new(name)?,
            archetype,
        })
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn archetype(&self) -> Option<&str> {
        self.archetype.as_deref()
    }
}

impl WireFormat for Metadata {
    type Wire = wire::Metadata;

    fn from_wire(wire: wire::Metadata) -> Result<Self, InvalidValue> {
        Self::new(wire.name, wire.archetype)
    }

    fn to_wire(&self) -> wire::Metadata {
        wire::Metadata {
            name: self.name.as_str().to_string(),
            archetype: self.archetype.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public_image() -> Option<ResourceIdentifier> {
        Some(ResourceIdentifier::new(
            "732ff1d9-76a7-4630-aad0-c8acc499bb0b",
            Rtype::PublicImage,
        ))
    }

    #[test]
    fn scene_name_length_bounds() {
        assert!(SceneMetadata::new("", public_image()).is_err());
        assert!(SceneMetadata::new("A", public_image()).is_ok());
        assert!(SceneMetadata::new("A".repeat(32), public_image()).is_ok());
        let err = SceneMetadata::new("A".repeat(33), public_image()).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn scene_image_must_be_public_image() {
        let light = ResourceIdentifier::new("3f8d7c2e-1c8c-4b66-a8e4-b4f0a8d3b9a1", Rtype::Light);
        let err = SceneMetadata::new("Living Room", Some(light)).unwrap_err();
        assert_eq!(err.field, "image.rtype");
        assert!(SceneMetadata::new("Living Room", None).is_ok());
    }

    #[test]
    fn fixed_mired_is_a_mirek() {
        assert!(LightMetadata::new("Desk", Archetype::SpotBulb, Some(366)).is_ok());
        let err = LightMetadata::new("Desk", Archetype::SpotBulb, Some(600)).unwrap_err();
        assert_eq!(err.field, "fixed_mired");
    }

    #[test]
    fn room_names_are_bounded() {
        assert!(Metadata::new("Kitchen", Some("kitchen".into())).is_ok());
        assert!(Metadata::new("", None).is_err());
    }
}
