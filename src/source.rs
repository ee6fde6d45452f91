// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::{encode, Error, ErrorKind, MapRequest, Scale, Warning};
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Debug, self};
use std::io::Read;
use tracing::{debug, warn};

/// Builds map images for one API key and one display.
///
/// Fills in what a request leaves to its caller, the API key and the scale
/// matching the display density, before encoding it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticMap {
    #[serde(default)]
    api_key: String,
    #[serde(default = "StaticMap::default_pixel_ratio")]
    pixel_ratio: f64,
}

impl StaticMap {
    pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;

    fn default_pixel_ratio() -> f64 {Self::DEFAULT_PIXEL_RATIO}

    pub fn new<S: Into<String>>(api_key: S) -> Self {
        StaticMap {
            api_key: api_key.into(),
            pixel_ratio: Self::DEFAULT_PIXEL_RATIO,
        }
    }

    pub fn from_config<R: Read>(config: R) -> Result<Self, Error> {
        serde_json::from_reader(config)
            .map_err(|e| Error::new(ErrorKind::BadConfig, e))
    }

    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = key.into();
        self
    }

    /// Device pixels per layout point of the display showing the map.
    pub fn pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    pub fn get_api_key(&self) -> &str {&self.api_key}

    pub fn get_pixel_ratio(&self) -> f64 {self.pixel_ratio}

    /// Completes `request` with this map's key and density scale. Values
    /// already set on the request are kept.
    pub fn prepare(&self, mut request: MapRequest) -> MapRequest {
        if request.api_key.is_empty() {
            request.api_key = self.api_key.clone();
        }
        if request.scale.is_none() {
            request.scale = Some(Scale::for_pixel_ratio(self.pixel_ratio));
        }
        request
    }

    /// Prepares and encodes `request`, logging any warning.
    pub fn source(&self, request: MapRequest) -> ImageSource {
        let request = self.prepare(request);
        let (url, warnings) = encode(&request).into_parts();
        for warning in &warnings {
            warn!("{}", warning);
        }
        debug!(url = %url, "Encoded static map");
        ImageSource {
            url,
            blur_radius: request.blur,
            warnings,
            on_load: None,
            on_error: None,
        }
    }
}

type LoadHandler = Box<dyn Fn() + Send + Sync>;
type ErrorHandler = Box<dyn Fn(&str) + Send + Sync>;

/// What an image view needs to show a static map.
///
/// The load and error handlers are only held here. The component fetching
/// the image calls them through [`loaded`](ImageSource::loaded) and
/// [`failed`](ImageSource::failed).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    url: String,
    blur_radius: f32,
    warnings: Vec<Warning>,
    #[serde(skip)]
    on_load: Option<LoadHandler>,
    #[serde(skip)]
    on_error: Option<ErrorHandler>,
}

impl ImageSource {
    pub fn url(&self) -> &str {&self.url}

    pub fn blur_radius(&self) -> f32 {self.blur_radius}

    pub fn warnings(&self) -> &[Warning] {&self.warnings}

    pub fn on_load<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_load = Some(Box::new(f));
        self
    }

    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn loaded(&self) {
        if let Some(f) = &self.on_load {
            f();
        }
    }

    pub fn failed(&self, reason: &str) {
        if let Some(f) = &self.on_error {
            f(reason);
        }
    }
}

impl Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImageSource")
            .field("url", &self.url)
            .field("blur_radius", &self.blur_radius)
            .field("warnings", &self.warnings)
            .field("on_load", &self.on_load.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
