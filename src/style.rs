// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, self};

/// Restyles the map features matched by `feature` and `element`.
///
/// Both selectors are optional; leaving them out applies the style to every
/// feature or element. Selector names follow the Static Maps style reference
/// (`road.local`, `poi.park`, `labels.text.fill`, ...).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default)]
    pub element_style: ElementStyle,
}

impl StyleRule {
    pub fn new() -> Self {StyleRule::default()}

    pub fn feature<S: Into<String>>(mut self, feature: S) -> Self {
        self.feature = Some(feature.into());
        self
    }

    pub fn element<S: Into<String>>(mut self, element: S) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn styled(mut self, style: ElementStyle) -> Self {
        self.element_style = style;
        self
    }
}

/// Style attributes. Unset attributes keep the map's defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    /// RGB hex, e.g. `0x00ff00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    /// -100 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness: Option<i32>,
    /// -100 to 100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation: Option<i32>,
    /// 0.01 to 10.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert_lightness: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// RGB hex, overrides `hue`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    On,
    Off,
    Simplified,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::On => "on",
            Visibility::Off => "off",
            Visibility::Simplified => "simplified",
        }
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
