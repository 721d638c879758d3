use super::CieXy;
use crate::codec::WireFormat;
use crate::{wire, InvalidValue};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GradientMode {
    InterpolatedPalette,
    InterpolatedPaletteMirrored,
    RandomPixelated,
}

/// Ordered color points spread over a gradient capable light strip.
#[derive(Debug, Clone, PartialEq)]
pub struct LightGradient {
    points: Vec<CieXy>,
    mode: GradientMode,
    points_capable: u32,
    mode_values: Vec<GradientMode>,
    pixel_count: Option<u32>,
}

impl LightGradient {
    /// Fails when more points are given than the light supports.
    pub fn new(
        points: Vec<CieXy>,
        mode: GradientMode,
        points_capable: u32,
        mode_values: Vec<GradientMode>,
        pixel_count: Option<u32>,
    ) -> Result<Self, InvalidValue> {
        if points.len() > points_capable as usize {
            return Err(InvalidValue::new(
                "points",
                format!(
                    "at most {points_capable} points are supported, got {}",
                    points.len()
                ),
            ));
        }
        Ok(Self {
            points,
            mode,
            points_capable,
            mode_values,
            pixel_count,
        })
    }

    pub fn points(&self) -> &[CieXy] {
        &self.points
    }

    pub fn mode(&self) -> GradientMode {
        self.mode
    }

    pub fn points_capable(&self) -> u32 {
        self.points_capable
    }

    pub fn mode_values(&self) -> &[GradientMode] {
        &self.mode_values
    }

    pub fn pixel_count(&self) -> Option<u32> {
        self.pixel_count
    }
}

impl WireFormat for LightGradient {
    type Wire = wire::LightGradient;

    fn from_wire(wire: wire::LightGradient) -> Result<Self, InvalidValue> {
        let points = wire
            .points
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                CieXy::from_wire(point.color.xy)
                    .map_err(|err| err.within("xy").within("color").at_index(index).within("points"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            points,
            wire.mode,
            wire.points_capable,
            wire.mode_values,
            wire.pixel_count,
        )
    }

    fn to_wire(&self) -> wire::LightGradient {
        wire::LightGradient {
            points: self.points.iter().map(gradient_point).collect(),
            mode: self.mode,
            points_capable: self.points_capable,
            mode_values: self.mode_values.clone(),
            pixel_count: self.pixel_count,
        }
    }
}

pub(crate) fn gradient_point(xy: &CieXy) -> wire::GradientPoint {
    wire::GradientPoint {
        color: wire::PointColor { xy: xy.to_wire() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_value;
    use serde_json::json;

    fn points(n: usize) -> Vec<CieXy> {
        (0..n)
            .map(|i| CieXy::new(0.1 * i as f64, 0.2).unwrap())
            .collect()
    }

    #[test]
    fn point_count_bounded_by_capability() {
        let mode = GradientMode::InterpolatedPalette;
        assert!(LightGradient::new(points(0), mode, 5, vec![], None).is_ok());
        assert!(LightGradient::new(points(5), mode, 5, vec![], Some(24)).is_ok());
        let err = LightGradient::new(points(6), mode, 5, vec![], None).unwrap_err();
        assert_eq!(err.field, "points");
    }

    #[test]
    fn invalid_point_reports_its_index() {
        let err = decode_value::<LightGradient>(json!({
            "points": [
                {"color": {"xy": {"x": 0.2, "y": 0.3}}},
                {"color": {"xy": {"x": 0.2, "y": 3.0}}},
            ],
            "mode": "random_pixelated",
            "points_capable": 5,
        }))
        .unwrap_err();
        assert_eq!(err.path, "points[1].color.xy.y");
    }
}
