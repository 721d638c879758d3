use crate::codec::{nested, Resource, WireFormat};
use crate::value::{Metadata, ProductData, ResourceIdentifier, Rtype};
use crate::{wire, InvalidValue};

/// A physical product paired with the bridge. Its capabilities are exposed as
/// separate services (lights, sensors, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: String,
    pub id_v1: Option<String>,
    pub product_data: ProductData,
    pub metadata: Metadata,
    pub services: Vec<ResourceIdentifier>,
}

impl Device {
    /// Returns the ids of all services of type light associated with this device.
    pub fn lights(&self) -> impl Iterator<Item = &str> {
        self.services.iter().filter_map(|service| {
            if service.rtype == Rtype::Light {
                Some(service.rid.as_str())
            } else {
                None
            }
        })
    }
}

impl WireFormat for Device {
    type Wire = wire::Device;

    fn from_wire(wire: wire::Device) -> Result<Self, InvalidValue> {
        Ok(Self {
            id: wire.id,
            id_v1: wire.id_v1,
            product_data: wire.product_data,
            metadata: nested("metadata", wire.metadata)?,
            services: wire.services,
        })
    }

    fn to_wire(&self) -> wire::Device {
        wire::Device {
            id: self.id.clone(),
            id_v1: self.id_v1.clone(),
            product_data: self.product_data.clone(),
            metadata: self.metadata.to_wire(),
            services: self.services.clone(),
        }
    }
}

impl Resource for Device {
    const RTYPE: Rtype = Rtype::Device;
    const PATCHABLE: &'static [&'static str] = &["metadata", "identify"];

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use crate::fixtures;

    #[test]
    fn device_lists_its_lights() {
        let device: Device = decode(fixtures::device()).unwrap();
        assert_eq!(device.lights().collect::<Vec<_>>(), vec![fixtures::LIGHT_ID]);
        assert_eq!(
            device.product_data.product_name.as_deref(),
            Some("Hue color lamp")
        );
    }
}
