// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use crate::location;
use crate::{Error, MapRequest, Marker, MarkerScale, MarkerSize, Path,
    StyleRule, Visibility};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_derive::Serialize;
use std::fmt::{Display, self};
use url::Url;

pub const URL_BASE: &str = "https://maps.googleapis.com/maps/api/staticmap";

// `,`, `|` and `:` structure parameter values and stay literal.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'`');

/// Non-fatal problems found while encoding a request.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum Warning {
    /// Implicit positioning is on but there is nothing to fit the map to.
    /// The URL has no `center` and the API will reject it.
    ImplicitPositioningWithoutAnchor,
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::ImplicitPositioningWithoutAnchor => f.write_str(
                "Implicit positioning needs a marker, a path or a visible \
                location"),
        }
    }
}

/// A static map URL and the warnings raised while building it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Encoded {
    url: String,
    warnings: Vec<Warning>,
}

impl Encoded {
    pub fn as_str(&self) -> &str {&self.url}

    pub fn warnings(&self) -> &[Warning] {&self.warnings}

    pub fn into_parts(self) -> (String, Vec<Warning>) {
        (self.url, self.warnings)
    }

    pub fn to_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&self.url)?)
    }
}

impl Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Encodes `request` as a Static Maps API URL.
///
/// Parameters always come out in the same order: `center`, `zoom`, `scale`,
/// `size`, `maptype`, `format`, `language`, `region`, `map_id` or `style`,
/// `path`, `markers`, `visible`, `key`. Optional values that are unset,
/// empty, `false` or zero are left out entirely.
pub fn encode(request: &MapRequest) -> Encoded {
    let mut query = Query::default();
    let mut warnings = Vec::new();
    if !request.implicit_positioning {
        if let Some(center) = &request.center {
            query.append("center", center.to_string());
        }
    } else if !request.has_anchor() {
        warnings.push(Warning::ImplicitPositioningWithoutAnchor);
    }
    query.append("zoom", request.zoom.to_string());
    query.append("scale", request.scale.unwrap_or_default().to_string());
    query.append("size", request.size.to_string());
    query.append("maptype", request.map_type.as_str());
    query.append("format", request.format.as_str());
    query.append_set("language", request.language.as_deref());
    query.append_set("region", request.region.as_deref());
    match request.map_id.as_deref().filter(|id| id.is_set()) {
        Some(id) => query.append("map_id", id),
        None => {
            for rule in &request.styles {
                if let Some(style) = style_value(rule) {
                    query.append("style", style);
                }
            }
        }
    }
    for path in &request.paths {
        query.append("path", path_value(path));
    }
    for marker in &request.markers {
        query.append("markers", marker_value(marker));
    }
    if !request.visible.is_empty() {
        query.append("visible", location::join(&request.visible));
    }
    query.append("key", request.api_key.as_str());
    Encoded {
        url: query.into_href(URL_BASE),
        warnings,
    }
}

fn path_value(path: &Path) -> String {
    Clauses::default()
        .clause("color", path.color.as_deref())
        .clause("fillcolor", path.fill_color.as_deref())
        .clause("geodesic", path.geodesic.as_ref())
        .clause("weight", path.weight.as_ref())
        .then(&location::join(&path.points))
}

fn marker_value(marker: &Marker) -> String {
    let label = marker.label.as_deref()
        .and_then(|label| label.chars().next())
        .map(|c| c.to_uppercase().to_string());
    Clauses::default()
        .clause("color", marker.color.as_deref())
        .clause("label", label.as_deref())
        .clause("size", marker.size.as_ref())
        .clause("scale", marker.scale.as_ref())
        .then(&marker.location.to_string())
}

fn style_value(rule: &StyleRule) -> Option<String> {
    let style = &rule.element_style;
    Clauses::default()
        .clause("feature", rule.feature.as_deref())
        .clause("element", rule.element.as_deref())
        .clause("hue", style.hue.as_deref())
        .clause("lightness", style.lightness.as_ref())
        .clause("saturation", style.saturation.as_ref())
        .clause("gamma", style.gamma.as_ref())
        .clause("invert_lightness", style.invert_lightness.as_ref())
        .clause("visibility", style.visibility.as_ref())
        .clause("color", style.color.as_deref())
        .clause("weight", style.weight.as_ref())
        .finish()
}

/// Whether a value counts as present. Empty strings, `false` and zero do
/// not.
trait IsSet {
    fn is_set(&self) -> bool;
}

impl IsSet for str {
    fn is_set(&self) -> bool {!self.is_empty()}
}

impl IsSet for bool {
    fn is_set(&self) -> bool {*self}
}

impl IsSet for u32 {
    fn is_set(&self) -> bool {*self != 0}
}

impl IsSet for i32 {
    fn is_set(&self) -> bool {*self != 0}
}

impl IsSet for f64 {
    fn is_set(&self) -> bool {*self != 0.0}
}

impl IsSet for MarkerSize {
    fn is_set(&self) -> bool {true}
}

impl IsSet for MarkerScale {
    fn is_set(&self) -> bool {true}
}

impl IsSet for Visibility {
    fn is_set(&self) -> bool {true}
}

/// Pipe-terminated `name:value` clauses, in the order they are added.
#[derive(Debug, Default)]
struct Clauses(String);

impl Clauses {
    fn clause<T>(mut self, name: &str, value: Option<&T>) -> Self
    where
        T: IsSet + Display + ?Sized,
    {
        if let Some(value) = value.filter(|value| value.is_set()) {
            self.0.push_str(name);
            self.0.push(':');
            self.0.push_str(&value.to_string());
            self.0.push('|');
        }
        self
    }

    /// Clauses followed directly by `payload`.
    fn then(mut self, payload: &str) -> String {
        self.0.push_str(payload);
        self.0
    }

    /// Clauses without the trailing pipe, if there are any.
    fn finish(mut self) -> Option<String> {
        self.0.pop().map(|_| self.0)
    }
}

#[derive(Debug, Default)]
struct Query(Vec<(&'static str, String)>);

impl Query {
    fn append<V: Into<String>>(&mut self, key: &'static str, value: V) {
        self.0.push((key, value.into()));
    }

    fn append_set(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|value| value.is_set()) {
            self.append(key, value);
        }
    }

    fn into_href(self, base: &str) -> String {
        let mut href = String::from(base);
        for (i, (key, value)) in self.0.iter().enumerate() {
            href.push(if i == 0 {'?'} else {'&'});
            href.push_str(key);
            href.push('=');
            href.extend(utf8_percent_encode(value, QUERY_VALUE));
        }
        href
    }
}
