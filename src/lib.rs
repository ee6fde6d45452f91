// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

//! Google Static Maps request encoding.
//!
//! [`encode`] turns a [`MapRequest`] into the URL of a static map image.
//! It is pure and total: the same request always yields the same URL, and
//! problems that the API will reject are reported as [`Warning`]s next to
//! the URL. [`StaticMap`] is the caller side, completing requests with an
//! API key and a density-derived scale.

#![deny(warnings)]

mod encode;
mod err;
mod location;
mod overlay;
mod request;
mod source;
mod style;

pub use crate::encode::{encode, Encoded, Warning, URL_BASE};
pub use crate::err::{Error, ErrorKind};
pub use crate::location::{Coordinates, Decimal, Location};
pub use crate::overlay::{Marker, MarkerScale, MarkerSize, Path};
pub use crate::request::{ImageFormat, MapRequest, MapType, Scale, Size};
pub use crate::source::{ImageSource, StaticMap};
pub use crate::style::{ElementStyle, StyleRule, Visibility};
