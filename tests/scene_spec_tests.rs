use xrchart_rs::error::InteractError;
use xrchart_rs::scene::{ElementId, ElementKind, Scene, SceneSurface};

const BAR_CHART_SPEC: &str = r#"{
    "elements": [
        {
            "element": "box",
            "position": { "x": 0.0, "y": 0.5, "z": -10.0 },
            "height": "4",
            "depth": "2",
            "info": "March: 42",
            "id": "bar-march"
        },
        {
            "element": "cylinder",
            "radius": "0.5",
            "children": [
                { "element": "text", "value": "March" }
            ]
        }
    ]
}"#;

#[test]
fn spec_json_builds_elements_with_kinds_attributes_and_children() {
    let scene = Scene::from_spec_json(BAR_CHART_SPEC).expect("parse spec");
    assert_eq!(scene.len(), 3);

    let ids: Vec<ElementId> = scene.element_ids().collect();
    assert_eq!(scene.kind(ids[0]), Some(ElementKind::Box));
    assert_eq!(scene.kind(ids[1]), Some(ElementKind::Cylinder));
    assert_eq!(scene.kind(ids[2]), Some(ElementKind::Text));

    assert_eq!(SceneSurface::attr(&scene, ids[0], "info"), Some("March: 42"));
    assert_eq!(SceneSurface::attr(&scene, ids[0], "height"), Some("4"));
    assert_eq!(scene.position(ids[0]).y, 0.5);
    assert_eq!(scene.descendants(ids[1]), vec![ids[2]]);
}

#[test]
fn elements_with_info_become_hit_testable() {
    let scene = Scene::from_spec_json(BAR_CHART_SPEC).expect("parse spec");
    let ids: Vec<ElementId> = scene.element_ids().collect();

    assert!(scene.hit_testable(ids[0]));
    assert!(!scene.hit_testable(ids[1]));
    assert!(!scene.hit_testable(ids[2]));
}

#[test]
fn subchart_variants_start_hidden_and_non_hit_testable() {
    let spec = r#"{
        "elements": [
            {
                "element": "box",
                "param-name": "colors__red",
                "children": [
                    { "element": "box", "info": "red bar" }
                ]
            },
            { "element": "box", "info": "always on" }
        ]
    }"#;
    let scene = Scene::from_spec_json(spec).expect("parse spec");
    let ids: Vec<ElementId> = scene.element_ids().collect();

    assert!(!scene.visible(ids[0]));
    assert!(!scene.hit_testable(ids[1]), "interactive bar waits for activation");
    assert!(scene.visible(ids[2]));
    assert!(scene.hit_testable(ids[2]));
}

#[test]
fn discovery_matches_param_name_exactly() {
    let spec = r#"{
        "elements": [
            { "element": "box", "param-name": "colors__red" },
            { "element": "box", "param-name": "colors__redder" },
            { "element": "box", "param-name": "colors__red" }
        ]
    }"#;
    let scene = Scene::from_spec_json(spec).expect("parse spec");
    let ids: Vec<ElementId> = scene.element_ids().collect();

    assert_eq!(
        scene.elements_with_attr("param-name", "colors__red"),
        vec![ids[0], ids[2]]
    );
}

#[test]
fn malformed_json_is_a_structured_spec_error() {
    let err = Scene::from_spec_json("{ not json").expect_err("must fail");
    assert!(matches!(err, InteractError::InvalidSpec(_)));

    let err = Scene::from_spec_json(r#"{ "elements": [ { "element": "torus" } ] }"#)
        .expect_err("unknown kind must fail");
    assert!(matches!(err, InteractError::InvalidSpec(_)));
}

#[test]
fn empty_spec_builds_an_empty_scene() {
    let scene = Scene::from_spec_json(r#"{ "elements": [] }"#).expect("parse spec");
    assert!(scene.is_empty());
}
