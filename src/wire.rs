//! Serde mirror of the CLIP v2 JSON.
//!
//! These structs only describe shape: which fields exist, which are optional
//! and which enumerations they draw from. Range checks happen when they are
//! turned into the validated types of [`crate::value`] and [`crate::resource`].

use crate::value::{
    Alert, Archetype, DynamicStatus, GamutType, GradientMode, LightEffect, LightMode,
    LightTimedEffect, On, ProductData, ResourceIdentifier, SceneMode, SceneStatus, Signaling,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gamut {
    pub red: Xy,
    pub green: Xy,
    pub blue: Xy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub xy: Xy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamut: Option<Gamut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamut_type: Option<GamutType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimming {
    pub brightness: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_dim_level: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirekSchema {
    pub mirek_minimum: u16,
    pub mirek_maximum: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorTemperature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirek: Option<u16>,
    pub mirek_valid: bool,
    pub mirek_schema: MirekSchema,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirekTarget {
    pub mirek: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dynamics {
    pub status: DynamicStatus,
    #[serde(default)]
    pub status_values: Vec<DynamicStatus>,
    pub speed: f64,
    pub speed_valid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointColor {
    pub xy: Xy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientPoint {
    pub color: PointColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightGradient {
    #[serde(default)]
    pub points: Vec<GradientPoint>,
    pub mode: GradientMode,
    pub points_capable: u32,
    #[serde(default)]
    pub mode_values: Vec<GradientMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<LightEffect>,
    pub status: LightEffect,
    #[serde(default)]
    pub status_values: Vec<LightEffect>,
    #[serde(default)]
    pub effect_values: Vec<LightEffect>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<LightTimedEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub status: LightTimedEffect,
    #[serde(default)]
    pub status_values: Vec<LightTimedEffect>,
    #[serde(default)]
    pub effect_values: Vec<LightTimedEffect>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightMetadata {
    pub name: String,
    pub archetype: Archetype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_mired: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ResourceIdentifier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_v1: Option<String>,
    pub owner: ResourceIdentifier,
    pub metadata: LightMetadata,
    pub on: On,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<ColorTemperature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamics: Option<Dynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signaling: Option<Signaling>,
    pub mode: LightMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<LightGradient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Effects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timed_effects: Option<TimedEffects>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDynamics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<MirekTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamics: Option<ActionDynamics>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneAction {
    pub target: ResourceIdentifier,
    pub action: LightAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_v1: Option<String>,
    pub metadata: SceneMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<ResourceIdentifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_temperature: Option<ColorTemperature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamics: Option<Dynamics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SceneMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<LightGradient>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<SceneAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_dynamic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SceneStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedLight {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_v1: Option<String>,
    pub owner: ResourceIdentifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<On>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimming: Option<Dimming>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<Alert>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signaling: Option<Signaling>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_v1: Option<String>,
    #[serde(default)]
    pub children: Vec<ResourceIdentifier>,
    #[serde(default)]
    pub services: Vec<ResourceIdentifier>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_v1: Option<String>,
    pub product_data: ProductData,
    pub metadata: Metadata,
    #[serde(default)]
    pub services: Vec<ResourceIdentifier>,
}
