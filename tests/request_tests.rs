//! JSON request tests
//!
//! Tests for the serialised bounds request used by the CLI and the
//! `compute_bounds_json` export.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridedit::{
    compute_bounds_json, BoundsRequest, BoundsResponse, CellPosition, EditorLayout,
    HorizontalAlignment, Rect, VerticalAlignment,
};

const OVERHANG_REQUEST: &str = r#"{
    "position": {"column": 7, "row": 2},
    "cell": {"x": 780, "y": 50, "width": 40, "height": 20},
    "clip": {"x": 0, "y": 0, "width": 800, "height": 600},
    "layout": {
        "minimumWidth": 10,
        "minimumHeight": 10,
        "grabHorizontal": true,
        "grabVertical": true,
        "horizontalAlignment": "center",
        "verticalAlignment": "center"
    }
}"#;

#[test]
fn test_request_parses_all_fields() {
    let req = BoundsRequest::from_json(OVERHANG_REQUEST).unwrap();
    assert_eq!(req.position, CellPosition::new(7, 2));
    assert_eq!(req.cell, Rect::new(780, 50, 40, 20));
    assert_eq!(
        req.layout,
        EditorLayout::fill()
            .with_minimum_size(10, 10)
            .with_alignment(HorizontalAlignment::Center, VerticalAlignment::Center)
    );
}

#[test]
fn test_request_evaluates_clipped_bounds() {
    let resp = BoundsRequest::from_json(OVERHANG_REQUEST).unwrap().evaluate();
    assert_eq!(
        resp,
        BoundsResponse {
            bounds: Rect::new(780, 50, 20, 20),
            visible: true,
        }
    );
}

#[test]
fn test_unset_row_is_invisible() {
    let json = OVERHANG_REQUEST.replace(r#""row": 2"#, r#""row": null"#);
    let resp = BoundsRequest::from_json(&json).unwrap().evaluate();
    assert_eq!(resp.bounds, Rect::EMPTY);
    assert!(!resp.visible);
}

#[test]
fn test_bad_alignment_rejected() {
    let json = OVERHANG_REQUEST.replace(r#""center""#, r#""middle""#);
    assert!(BoundsRequest::from_json(&json).is_err());
}

#[test]
fn test_request_serializes_back() {
    let req = BoundsRequest::from_json(OVERHANG_REQUEST).unwrap();
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains(r#""grabHorizontal":true"#));
    assert!(json.contains(r#""horizontalAlignment":"center""#));
    assert_eq!(BoundsRequest::from_json(&json).unwrap(), req);
}

#[test]
fn test_compute_bounds_json() {
    let out = compute_bounds_json(OVERHANG_REQUEST).unwrap();
    let resp: BoundsResponse = serde_json::from_str(&out).unwrap();
    assert_eq!(resp.bounds, Rect::new(780, 50, 20, 20));
    assert_eq!(
        out,
        r#"{"bounds":{"x":780,"y":50,"width":20,"height":20},"visible":true}"#
    );
}

#[test]
fn test_version() {
    assert_eq!(gridedit::version(), env!("CARGO_PKG_VERSION"));
}
