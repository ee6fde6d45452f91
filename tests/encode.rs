// Copyright (C) 2018 Stephane Raux. Distributed under the MIT license.

use staticmap::{encode, ImageFormat, Location, MapRequest, MapType, Marker,
    MarkerSize, Path, Scale, Size, Warning, URL_BASE};

fn request() -> MapRequest {
    MapRequest::new(Size::new(300, 150).unwrap())
        .center(Location::new("1.0", "2.0"))
        .zoom(10)
        .api_key("K")
}

fn pairs(request: &MapRequest) -> Vec<(String, String)> {
    encode(request).to_url().unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn values(request: &MapRequest, key: &str) -> Vec<String> {
    pairs(request).into_iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v)
        .collect()
}

#[test]
fn minimal_request() {
    let url = encode(&request());
    assert_eq!(url.as_str(), format!("{}?center=1.0,2.0&zoom=10&scale=1\
        &size=300x150&maptype=roadmap&format=png&key=K", URL_BASE));
    assert!(url.warnings().is_empty());
}

#[test]
fn json_request_matches_builder() {
    let json = r#"{
        "center": {"latitude": "1.0", "longitude": "2.0"},
        "zoom": 10,
        "size": {"width": 300, "height": 150},
        "apiKey": "K"
    }"#;
    let from_json = MapRequest::from_reader(json.as_bytes()).unwrap();
    assert_eq!(encode(&from_json), encode(&request()));
}

#[test]
fn encoding_is_deterministic() {
    let req = request()
        .path(Path::new(vec!["1,1", "2,2"]).color("red"))
        .marker(Marker::new("Oslo").label("o"))
        .visible("Bergen");
    assert_eq!(encode(&req), encode(&req.clone()));
}

#[test]
fn parameters_keep_canonical_order() {
    let req = request()
        .scale(Scale::Two)
        .format(ImageFormat::Jpg)
        .map_type(MapType::Terrain)
        .language("fr")
        .region("ca")
        .map_id("abc")
        .path(Path::new(vec!["1,1", "2,2"]))
        .marker(Marker::new("3,3"))
        .marker(Marker::new("4,4"))
        .visible("5,5");
    let keys: Vec<_> = pairs(&req).into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["center", "zoom", "scale", "size", "maptype", "format",
        "language", "region", "map_id", "path", "markers", "markers",
        "visible", "key"]);
}

#[test]
fn unset_optionals_are_absent() {
    let keys: Vec<_> = pairs(&request().language("").region(""))
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    for absent in &["language", "region", "map_id", "style", "path",
        "markers", "visible"]
    {
        assert!(!keys.iter().any(|k| k == absent), "{}", absent);
    }
}

#[test]
fn path_value_has_ordered_clauses() {
    let req = request()
        .path(Path::new(vec!["1,1", "2,2"]).color("red").weight(3));
    assert_eq!(values(&req, "path"), ["color:red|weight:3|1,1|2,2"]);
}

#[test]
fn paths_repeat_in_order() {
    let req = request()
        .path(Path::new(vec![Location::new("1", "1")]))
        .path(Path::new(vec!["Oslo", "Bergen"]).geodesic(true));
    assert_eq!(values(&req, "path"),
        ["1,1", "geodesic:true|Oslo|Bergen"]);
}

#[test]
fn marker_label_is_truncated() {
    let req = request().marker(Marker::new("1,1")
        .color("blue")
        .label("hello")
        .size(MarkerSize::Small));
    assert_eq!(values(&req, "markers"), ["color:blue|label:H|size:small|1,1"]);
}

#[test]
fn marker_without_style_is_just_its_location() {
    let req = request().marker(Marker::new(Location::new("-33.8", "151.2")));
    assert_eq!(values(&req, "markers"), ["-33.8,151.2"]);
}

#[test]
fn visible_locations_share_one_parameter() {
    let req = request()
        .visible("Toronto")
        .visible(Location::new("43.6", "-79.4"));
    assert_eq!(values(&req, "visible"), ["Toronto|43.6,-79.4"]);
}

#[test]
fn implicit_positioning_without_anchor() {
    let encoded = encode(&request().implicit_positioning(true));
    assert_eq!(encoded.warnings(),
        &[Warning::ImplicitPositioningWithoutAnchor]);
    let url = encoded.to_url().unwrap();
    assert!(url.query_pairs().all(|(k, _)| k != "center"));
    assert!(encoded.as_str().ends_with("&key=K"));
}

#[test]
fn implicit_positioning_with_marker_omits_center() {
    let req = request().implicit_positioning(true).marker(Marker::new("Oslo"));
    let encoded = encode(&req);
    assert!(encoded.warnings().is_empty());
    assert!(values(&req, "center").is_empty());
}
