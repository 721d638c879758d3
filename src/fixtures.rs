//! Resource documents captured from a bridge, trimmed to what the tests need.

use serde_json::{json, Value};

pub const LIGHT_ID: &str = "3f8d7c2e-1c8c-4b66-a8e4-b4f0a8d3b9a1";
pub const DEVICE_ID: &str = "f6a0b1de-31b3-4a51-9a3a-f6b4a7dd2ab0";
pub const ROOM_ID: &str = "8b6c1f6f-3e0f-4d5e-a5d0-5c1e6d9c0a42";
pub const ZONE_ID: &str = "c4e3a1f0-7a3b-45f1-9b7e-2e5d4c3b2a10";
pub const GROUPED_LIGHT_ID: &str = "5a1e2c9d-4b7f-4e08-8c6d-1f0a9b8e7d65";
pub const SCENE_ID: &str = "e1a7c0b4-2d3f-4c5a-8b9e-0f1d2c3b4a59";

pub fn light() -> Value {
    json!({
        "id": LIGHT_ID,
        "id_v1": "/lights/7",
        "owner": {"rid": DEVICE_ID, "rtype": "device"},
        "metadata": {"name": "Desk lamp", "archetype": "sultan_bulb", "fixed_mired": 366},
        "product_data": {"function": "mixed"},
        "identify": {},
        "service_id": 0,
        "on": {"on": true},
        "dimming": {"brightness": 72.5, "min_dim_level": 0.2},
        "dimming_delta": {},
        "color_temperature": {
            "mirek": null,
            "mirek_valid": false,
            "mirek_schema": {"mirek_minimum": 153, "mirek_maximum": 500}
        },
        "color_temperature_delta": {},
        "color": {
            "xy": {"x": 0.4573, "y": 0.41},
            "gamut": {
                "red": {"x": 0.6915, "y": 0.3083},
                "green": {"x": 0.17, "y": 0.7},
                "blue": {"x": 0.1532, "y": 0.0475}
            },
            "gamut_type": "C"
        },
        "dynamics": {
            "status": "none",
            "status_values": ["none", "dynamic_palette"],
            "speed": 0.0,
            "speed_valid": false
        },
        "alert": {"action_values": ["breathe"]},
        "signaling": {"signal_values": ["no_signal", "on_off", "on_off_color", "alternating"]},
        "mode": "normal",
        "gradient": {
            "points": [
                {"color": {"xy": {"x": 0.2, "y": 0.3}}},
                {"color": {"xy": {"x": 0.4, "y": 0.4}}},
                {"color": {"xy": {"x": 0.6, "y": 0.3}}}
            ],
            "mode": "interpolated_palette",
            "points_capable": 5,
            "mode_values": ["interpolated_palette", "interpolated_palette_mirrored", "random_pixelated"],
            "pixel_count": 16
        },
        "effects": {
            "status_values": ["no_effect", "candle", "fire", "prism"],
            "status": "no_effect",
            "effect_values": ["no_effect", "candle", "fire", "prism"]
        },
        "timed_effects": {
            "status_values": ["no_effect", "sunrise"],
            "status": "no_effect",
            "effect_values": ["no_effect", "sunrise"]
        },
        "powerup": {"preset": "safety", "configured": true, "on": {"mode": "on", "on": {"on": true}}},
        "type": "light"
    })
}

pub fn scene() -> Value {
    json!({
        "id": SCENE_ID,
        "id_v1": "/scenes/Kq4uDn1rQ1ZyGt3",
        "actions": [
            {
                "target": {"rid": LIGHT_ID, "rtype": "light"},
                "action": {
                    "on": {"on": true},
                    "dimming": {"brightness": 56.3},
                    "color_temperature": {"mirek": 447}
                }
            },
            {
                "target": {"rid": "9d2e7b1c-6f5a-4e3d-8c2b-1a0f9e8d7c6b", "rtype": "light"},
                "action": {
                    "on": {"on": true},
                    "dimming": {"brightness": 40.0},
                    "color": {"xy": {"x": 0.5019, "y": 0.4152}},
                    "dynamics": {"duration": 400}
                }
            }
        ],
        "palette": {"color": [], "dimming": [], "color_temperature": [], "effects": []},
        "recall": {},
        "metadata": {
            "name": "Relax",
            "image": {"rid": "a1d2a4d2-ba4a-4b86-a2b5-4c4f7b6e8f5e", "rtype": "public_image"}
        },
        "group": {"rid": ROOM_ID, "rtype": "room"},
        "speed": 0.6031746031746031,
        "auto_dynamic": false,
        "status": {"active": "inactive"},
        "type": "scene"
    })
}

fn group(id: &str, kind: &str, name: &str, archetype: &str, children_kind: &str) -> Value {
    json!({
        "id": id,
        "id_v1": "/groups/3",
        "children": [{"rid": DEVICE_ID, "rtype": children_kind}],
        "services": [{"rid": GROUPED_LIGHT_ID, "rtype": "grouped_light"}],
        "metadata": {"name": name, "archetype": archetype},
        "type": kind
    })
}

pub fn room() -> Value {
    group(ROOM_ID, "room", "Living room", "living_room", "device")
}

pub fn zone() -> Value {
    group(ZONE_ID, "zone", "Downstairs", "downstairs", "light")
}

pub fn grouped_light() -> Value {
    json!({
        "id": GROUPED_LIGHT_ID,
        "id_v1": "/groups/3",
        "owner": {"rid": ROOM_ID, "rtype": "room"},
        "on": {"on": true},
        "dimming": {"brightness": 63.2},
        "alert": {"action_values": ["breathe"]},
        "signaling": {"signal_values": ["no_signal", "on_off"]},
        "type": "grouped_light"
    })
}

pub fn device() -> Value {
    json!({
        "id": DEVICE_ID,
        "id_v1": "/lights/7",
        "product_data": {
            "model_id": "LCA005",
            "manufacturer_name": "Signify Netherlands B.V.",
            "product_name": "Hue color lamp",
            "product_archetype": "sultan_bulb",
            "certified": true,
            "software_version": "1.104.2"
        },
        "metadata": {"name": "Desk lamp", "archetype": "sultan_bulb"},
        "identify": {},
        "services": [
            {"rid": LIGHT_ID, "rtype": "light"},
            {"rid": "0b1c2d3e-4f50-6172-8394-a5b6c7d8e9f0", "rtype": "zigbee_connectivity"},
            {"rid": "1c2d3e4f-5061-7283-94a5-b6c7d8e9f0a1", "rtype": "entertainment"}
        ],
        "type": "device"
    })
}
