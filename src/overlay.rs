// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::Location;
use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{Display, self};

/// A line through one or more locations, optionally filled as a polygon.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    #[serde(default)]
    pub points: Vec<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geodesic: Option<bool>,
    /// Stroke thickness in pixels.
    #[serde(default, alias = "weigth", skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Path {
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Location>,
    {
        Path {
            points: points.into_iter().map(Into::into).collect(),
            ..Path::default()
        }
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn fill_color<S: Into<String>>(mut self, color: S) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn geodesic(mut self, geodesic: bool) -> Self {
        self.geodesic = Some(geodesic);
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Tiny,
    Mid,
    Small,
    Normal,
}

impl MarkerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerSize::Tiny => "tiny",
            MarkerSize::Mid => "mid",
            MarkerSize::Small => "small",
            MarkerSize::Normal => "normal",
        }
    }
}

impl Display for MarkerSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon scale of a custom marker.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MarkerScale {
    One,
    Two,
    Four,
}

impl From<MarkerScale> for u8 {
    fn from(scale: MarkerScale) -> u8 {
        match scale {
            MarkerScale::One => 1,
            MarkerScale::Two => 2,
            MarkerScale::Four => 4,
        }
    }
}

impl TryFrom<u8> for MarkerScale {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, String> {
        match n {
            1 => Ok(MarkerScale::One),
            2 => Ok(MarkerScale::Two),
            4 => Ok(MarkerScale::Four),
            n => Err(format!("invalid marker scale {}, expected 1, 2 or 4",
                n)),
        }
    }
}

impl Display for MarkerScale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A pin at a single location.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Only the first character is used, upper-cased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<MarkerSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<MarkerScale>,
}

impl Marker {
    pub fn new<L: Into<Location>>(location: L) -> Self {
        Marker {
            location: location.into(),
            color: None,
            label: None,
            size: None,
            scale: None,
        }
    }

    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn size(mut self, size: MarkerSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn scale(mut self, scale: MarkerScale) -> Self {
        self.scale = Some(scale);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accepts_misspelled_weight() {
        let path: Path = serde_json::from_str(
            r#"{"points": ["1,1"], "weigth": 5, "fillColor": "0xFFFF0033"}"#)
            .unwrap();
        assert_eq!(path.weight, Some(5));
        assert_eq!(path.fill_color.as_deref(), Some("0xFFFF0033"));
    }

    #[test]
    fn path_points_mix_places_and_coordinates() {
        let path: Path = serde_json::from_str(
            r#"{"points": ["Oslo", {"latitude": 1, "longitude": 2}]}"#)
            .unwrap();
        assert_eq!(path, Path::new(vec![
            Location::place("Oslo"),
            Location::new("1", "2"),
        ]));
    }

    #[test]
    fn marker_scale_is_one_two_or_four() {
        let marker: Marker = serde_json::from_str(
            r#"{"location": "Oslo", "scale": 4, "size": "mid"}"#).unwrap();
        assert_eq!(marker.scale, Some(MarkerScale::Four));
        assert_eq!(marker.size, Some(MarkerSize::Mid));
        let marker = serde_json::from_str::<Marker>(
            r#"{"location": "Oslo", "scale": 3}"#);
        assert!(marker.is_err());
    }

    #[test]
    fn marker_requires_location() {
        assert!(serde_json::from_str::<Marker>(r#"{"color": "red"}"#).is_err());
    }
}
