use super::unit_interval;
use crate::codec::{nested, nested_opt, WireFormat};
use crate::{wire, InvalidValue};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A point in the CIE 1931 color space.
///
/// ```
/// use hueclient::value::CieXy;
///
/// let warm = CieXy::new(0.4573, 0.41).unwrap();
/// assert_eq!(warm.x(), 0.4573);
/// assert!(CieXy::new(1.2, 0.3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieXy {
    x: f64,
    y: f64,
}

impl CieXy {
    /// Both coordinates must lie in `[0, 1]`.
    pub fn new(x: f64, y: f64) -> Result<Self, InvalidValue> {
        Ok(Self {
            x: unit_interval("x", x)?,
            y: unit_interval("y", y)?,
        })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl WireFormat for CieXy {
    type Wire = wire::Xy;

    fn from_wire(wire: wire::Xy) -> Result<Self, InvalidValue> {
        Self::new(wire.x, wire.y)
    }

    fn to_wire(&self) -> wire::Xy {
        wire::Xy {
            x: self.x,
            y: self.y,
        }
    }
}

/// The triangle of colors a light can reproduce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut {
    pub red: CieXy,
    pub green: CieXy,
    pub blue: CieXy,
}

impl Gamut {
    pub fn new(red: CieXy, green: CieXy, blue: CieXy) -> Self {
        Self { red, green, blue }
    }

    /// Whether `point` falls inside (or on the edge of) the triangle.
    ///
    /// The bridge clamps out-of-gamut colors itself, so nothing in this crate
    /// rejects a color for lying outside its gamut.
    pub fn contains(&self, point: &CieXy) -> bool {
        fn cross(o: &CieXy, a: &CieXy, b: &CieXy) -> f64 {
            (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
        }
        let d1 = cross(&self.red, &self.green, point);
        let d2 = cross(&self.green, &self.blue, point);
        let d3 = cross(&self.blue, &self.red, point);
        let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
        let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
        !(has_negative && has_positive)
    }
}

impl WireFormat for Gamut {
    type Wire = wire::Gamut;

    fn from_wire(wire: wire::Gamut) -> Result<Self, InvalidValue> {
        Ok(Self {
            red: nested("red", wire.red)?,
            green: nested("green", wire.green)?,
            blue: nested("blue", wire.blue)?,
        })
    }

    fn to_wire(&self) -> wire::Gamut {
        wire::Gamut {
            red: self.red.to_wire(),
            green: self.green.to_wire(),
            blue: self.blue.to_wire(),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum GamutType {
    A,
    B,
    C,
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

/// Current or requested color of a light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    xy: CieXy,
    gamut: Option<Gamut>,
    gamut_type: Option<GamutType>,
}

impl Color {
    pub fn new(xy: CieXy, gamut: Option<Gamut>, gamut_type: Option<GamutType>) -> Self {
        Self {
            xy,
            gamut,
            gamut_type,
        }
    }

    /// A bare color target, as used in scene actions.
    pub fn from_xy(xy: CieXy) -> Self {
        Self::new(xy, None, None)
    }

    pub fn xy(&self) -> CieXy {
        self.xy
    }

    pub fn gamut(&self) -> Option<&Gamut> {
        self.gamut.as_ref()
    }

    pub fn gamut_type(&self) -> Option<GamutType> {
        self.gamut_type
    }
}

impl WireFormat for Color {
    type Wire = wire::Color;

    fn from_wire(wire: wire::Color) -> Result<Self, InvalidValue> {
        Ok(Self {
            xy: nested("xy", wire.xy)?,
            gamut: nested_opt("gamut", wire.gamut)?,
            gamut_type: wire.gamut_type,
        })
    }

    fn to_wire(&self) -> wire::Color {
        wire::Color {
            xy: self.xy.to_wire(),
            gamut: self.gamut.as_ref().map(Gamut::to_wire),
            gamut_type: self.gamut_type,
        }
    }
}
