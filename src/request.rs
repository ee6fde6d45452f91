// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{Error, ErrorKind, Location, Marker, Path, StyleRule};
use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{Display, self};
use std::io::Read;
use std::num::NonZeroU32;

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Size {
    pub width: NonZeroU32,
    pub height: NonZeroU32,
}

impl Size {
    /// Returns `None` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let width = NonZeroU32::new(width)?;
        let height = NonZeroU32::new(height)?;
        Some(Size {width, height})
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel density multiplier of the returned image.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Scale {
    One,
    Two,
}

impl Scale {
    /// High density displays (two or more device pixels per point) get
    /// scale 2.
    pub fn for_pixel_ratio(ratio: f64) -> Self {
        if ratio >= 2.0 {Scale::Two} else {Scale::One}
    }
}

impl Default for Scale {
    fn default() -> Self {Scale::One}
}

impl From<Scale> for u8 {
    fn from(scale: Scale) -> u8 {
        match scale {
            Scale::One => 1,
            Scale::Two => 2,
        }
    }
}

impl TryFrom<u8> for Scale {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, String> {
        match n {
            1 => Ok(Scale::One),
            2 => Ok(Scale::Two),
            n => Err(format!("invalid scale {}, expected 1 or 2", n)),
        }
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ImageFormat {
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "png32")]
    Png32,
    #[serde(rename = "gif")]
    Gif,
    #[serde(rename = "jpg")]
    Jpg,
    #[serde(rename = "jpg-baseline")]
    JpgBaseline,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Png32 => "png32",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpg => "jpg",
            ImageFormat::JpgBaseline => "jpg-baseline",
        }
    }
}

impl Default for ImageFormat {
    fn default() -> Self {ImageFormat::Png}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

impl MapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Roadmap => "roadmap",
            MapType::Satellite => "satellite",
            MapType::Hybrid => "hybrid",
            MapType::Terrain => "terrain",
        }
    }
}

impl Default for MapType {
    fn default() -> Self {MapType::Roadmap}
}

/// Everything needed to describe one static map image.
///
/// Built fresh for every render. Lists left empty contribute nothing to the
/// encoded URL. `scale` left unset is resolved by the caller from the
/// display density (see [`StaticMap`](crate::StaticMap)); the encoder falls
/// back to [`Scale::One`].
///
/// The JSON form uses the camel-cased names of a map component's props:
///
/// ```json
/// {
///     "center": {"latitude": "40.7", "longitude": "-74.0"},
///     "zoom": 13,
///     "size": {"width": 600, "height": 300},
///     "mapType": "terrain",
///     "markers": [{"location": "Brooklyn Bridge", "label": "b"}],
///     "apiKey": "..."
/// }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Location>,
    #[serde(default = "MapRequest::default_zoom")]
    pub zoom: u8,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default)]
    pub map_type: MapType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Cloud-based map style. Takes precedence over `styles`.
    #[serde(default, rename = "mapID", skip_serializing_if = "Option::is_none")]
    pub map_id: Option<String>,
    #[serde(default, rename = "mapStyle", skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<StyleRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<Path>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible: Vec<Location>,
    /// Blur radius for the image view. Never part of the URL.
    #[serde(default)]
    pub blur: f32,
    /// Leave `center` out and let the API fit the markers, paths and
    /// visible locations.
    #[serde(default, rename = "enableImplicitPositioning")]
    pub implicit_positioning: bool,
    #[serde(default)]
    pub api_key: String,
}

impl MapRequest {
    pub const DEFAULT_ZOOM: u8 = 12;

    fn default_zoom() -> u8 {Self::DEFAULT_ZOOM}

    pub fn new(size: Size) -> Self {
        MapRequest {
            center: None,
            zoom: Self::DEFAULT_ZOOM,
            size,
            scale: None,
            format: ImageFormat::default(),
            map_type: MapType::default(),
            language: None,
            region: None,
            map_id: None,
            styles: Vec::new(),
            paths: Vec::new(),
            markers: Vec::new(),
            visible: Vec::new(),
            blur: 0.0,
            implicit_positioning: false,
            api_key: String::new(),
        }
    }

    pub fn from_reader<R: Read>(input: R) -> Result<Self, Error> {
        serde_json::from_reader(input)
            .map_err(|e| Error::new(ErrorKind::BadRequest, e))
    }

    pub fn center<L: Into<Location>>(mut self, center: L) -> Self {
        self.center = Some(center.into());
        self
    }

    pub fn zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    pub fn map_type(mut self, map_type: MapType) -> Self {
        self.map_type = map_type;
        self
    }

    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn map_id<S: Into<String>>(mut self, id: S) -> Self {
        self.map_id = Some(id.into());
        self
    }

    pub fn style(mut self, rule: StyleRule) -> Self {
        self.styles.push(rule);
        self
    }

    pub fn path(mut self, path: Path) -> Self {
        self.paths.push(path);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn visible<L: Into<Location>>(mut self, location: L) -> Self {
        self.visible.push(location.into());
        self
    }

    pub fn blur(mut self, radius: f32) -> Self {
        self.blur = radius;
        self
    }

    pub fn implicit_positioning(mut self, enabled: bool) -> Self {
        self.implicit_positioning = enabled;
        self
    }

    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = key.into();
        self
    }

    /// Whether anything besides `center` can position the map.
    pub fn has_anchor(&self) -> bool {
        !(self.markers.is_empty() && self.paths.is_empty()
            && self.visible.is_empty())
    }
}
