//! Built-in speed curve presets.
//!
//! The table is process-wide, built on first access and never mutated.
//! Selecting a preset hands out a clone of its curve, so callers never alias
//! the registry.

use std::sync::LazyLock;

use crate::animation::curve::{Curve, Keyframe};

/// A named entry of the preset catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetEntry {
    pub name: &'static str,
    pub curve: Curve,
}

static PRESETS: LazyLock<[PresetEntry; 5]> = LazyLock::new(|| {
    [
        PresetEntry {
            name: "Linear",
            curve: Curve::default(),
        },
        PresetEntry {
            name: "EaseInOut",
            curve: Curve::from_trusted([
                Keyframe::new(0.0, 0.0, 0.0, 0.0),
                Keyframe::new(1.0, 1.0, 0.0, 0.0),
            ]),
        },
        PresetEntry {
            name: "SlowOut",
            curve: Curve::from_trusted([
                Keyframe::new(0.0, 0.0, 2.0, 2.0),
                Keyframe::new(1.0, 1.0, 0.0, 0.0),
            ]),
        },
        PresetEntry {
            name: "SlowIn",
            curve: Curve::from_trusted([
                Keyframe::new(0.0, 0.0, 0.0, 0.0),
                Keyframe::new(1.0, 1.0, 2.0, 2.0),
            ]),
        },
        PresetEntry {
            name: "Custom",
            curve: Curve::from_trusted([
                Keyframe::new(0.0, 0.0, 0.0, 1.0),
                Keyframe::new(1.0, 1.0, 1.0, 0.0),
            ]),
        },
    ]
});

/// Read-only access to the preset catalog.
pub struct PresetLibrary;

impl PresetLibrary {
    /// All presets, in display order.
    #[must_use]
    pub fn presets() -> &'static [PresetEntry] {
        PRESETS.as_slice()
    }

    #[must_use]
    pub fn get(index: usize) -> Option<&'static PresetEntry> {
        PRESETS.get(index)
    }

    #[must_use]
    pub fn find_index_by_name(name: &str) -> Option<usize> {
        PRESETS.iter().position(|p| p.name == name)
    }

    /// Preset names, in display order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PRESETS.iter().map(|p| p.name)
    }
}
