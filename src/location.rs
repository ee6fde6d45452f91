// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, self};

/// Decimal degrees kept exactly as the caller wrote them.
///
/// Strings pass through untouched. Numbers coming from a JSON document are
/// formatted with the shortest representation that reads back as the same
/// value, so `1.0` becomes `1`; quote the value to keep its spelling.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Decimal(String);

impl Decimal {
    pub fn as_str(&self) -> &str {&self.0}
}

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<f64> for Decimal {
    fn from(degrees: f64) -> Self {
        Decimal(degrees.to_string())
    }
}

impl From<&str> for Decimal {
    fn from(s: &str) -> Self {
        Decimal(s.to_owned())
    }
}

impl From<String> for Decimal {
    fn from(s: String) -> Self {
        Decimal(s)
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, out: S) -> Result<S::Ok, S::Error> {
        out.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(input: D) -> Result<Self, D::Error> {
        input.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number or a string holding one")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Decimal, E> {
        Ok(Decimal(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }
}

/// Latitude and longitude in degrees.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// A point on the map: coordinates, or a place the API geocodes itself
/// (an address, a landmark name).
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Location {
    Coordinates(Coordinates),
    Place(String),
}

impl Location {
    pub fn new<L, G>(latitude: L, longitude: G) -> Self
    where
        L: Into<Decimal>,
        G: Into<Decimal>,
    {
        Location::Coordinates(Coordinates {
            latitude: latitude.into(),
            longitude: longitude.into(),
        })
    }

    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Location::new(latitude, longitude)
    }

    pub fn place<S: Into<String>>(place: S) -> Self {
        Location::Place(place.into())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Location::Coordinates(coords) => Display::fmt(coords, f),
            Location::Place(place) => f.write_str(place),
        }
    }
}

impl From<Coordinates> for Location {
    fn from(coords: Coordinates) -> Self {
        Location::Coordinates(coords)
    }
}

impl From<&str> for Location {
    fn from(place: &str) -> Self {
        Location::place(place)
    }
}

impl From<String> for Location {
    fn from(place: String) -> Self {
        Location::Place(place)
    }
}

/// Pipe-joined location tokens, in order.
pub(crate) fn join(locations: &[Location]) -> String {
    locations.iter()
        .map(Location::to_string)
        .collect::<Vec<_>>()
        .join("|")
}
