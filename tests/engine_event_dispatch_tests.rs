use xrchart_rs::api::{PointerEvent, SceneEngine, SceneEngineConfig};
use xrchart_rs::scene::{
    ACTIVATES_PARAM_ATTR, ElementId, ElementKind, PARAM_NAME_ATTR, Scene, SceneSurface,
};

/// One trigger plus two subchart variants of the `colors` group.
fn build_toggle_scene() -> (Scene, ElementId, ElementId, ElementId) {
    let mut scene = Scene::new();

    let trigger = scene.add_element(ElementKind::Box);
    scene.set_attr(trigger, ACTIVATES_PARAM_ATTR, "colors__red");

    let red = scene.add_element(ElementKind::Box);
    scene.set_attr(red, PARAM_NAME_ATTR, "colors__red");
    scene.set_visible(red, false);

    let blue = scene.add_element(ElementKind::Box);
    scene.set_attr(blue, PARAM_NAME_ATTR, "colors__blue");
    scene.set_visible(blue, false);

    (scene, trigger, red, blue)
}

#[test]
fn clicking_a_trigger_activates_its_subchart_variant() {
    let (scene, trigger, red, blue) = build_toggle_scene();
    let mut engine = SceneEngine::new(scene, SceneEngineConfig::new()).expect("engine init");

    engine.click(trigger);
    assert!(engine.scene().visible(red));
    assert!(!engine.scene().visible(blue));
    assert_eq!(engine.subcharts().active_set("colors"), Some(&[red][..]));
}

#[test]
fn clicking_two_triggers_of_one_group_swaps_variants() {
    let (mut scene, red_trigger, red, blue) = build_toggle_scene();
    let blue_trigger = scene.add_element(ElementKind::Box);
    scene.set_attr(blue_trigger, ACTIVATES_PARAM_ATTR, "colors__blue");

    let mut engine = SceneEngine::new(scene, SceneEngineConfig::new()).expect("engine init");
    engine.click(red_trigger);
    engine.click(blue_trigger);

    assert!(!engine.scene().visible(red));
    assert!(engine.scene().visible(blue));
    assert_eq!(engine.subcharts().active_set("colors"), Some(&[blue][..]));
}

#[test]
fn clicking_an_element_without_activation_key_changes_nothing() {
    let (mut scene, _, red, blue) = build_toggle_scene();
    let plain = scene.add_element(ElementKind::Sphere);

    let mut engine = SceneEngine::new(scene, SceneEngineConfig::new()).expect("engine init");
    engine.click(plain);

    assert!(!engine.scene().visible(red));
    assert!(!engine.scene().visible(blue));
    assert_eq!(engine.subcharts().groups().count(), 0);
}

#[test]
fn clicking_an_unknown_element_is_a_silent_noop() {
    let (scene, ..) = build_toggle_scene();
    let unknown = {
        let mut larger = scene.clone();
        for _ in 0..scene.len() {
            larger.add_element(ElementKind::Box);
        }
        larger.add_element(ElementKind::Box)
    };

    let mut engine = SceneEngine::new(scene, SceneEngineConfig::new()).expect("engine init");
    engine.click(unknown);
    assert_eq!(engine.subcharts().groups().count(), 0);
}

#[test]
fn dispatch_routes_all_pointer_event_variants() {
    let (mut scene, trigger, red, _) = build_toggle_scene();
    scene.set_attr(trigger, "info", "trigger");

    let mut engine = SceneEngine::new(scene, SceneEngineConfig::new()).expect("engine init");

    engine.dispatch(PointerEvent::Enter(trigger));
    assert_eq!(engine.hovered(), Some(trigger));
    assert!(engine.hud().visible);

    engine.dispatch(PointerEvent::Click(trigger));
    assert!(engine.scene().visible(red));

    engine.dispatch(PointerEvent::Leave(trigger));
    assert_eq!(engine.hovered(), None);
    assert!(!engine.hud().visible);
}

#[test]
fn into_scene_returns_the_mutated_store() {
    let (scene, trigger, red, _) = build_toggle_scene();
    let mut engine = SceneEngine::new(scene, SceneEngineConfig::new()).expect("engine init");
    engine.click(trigger);

    let scene = engine.into_scene();
    assert!(scene.visible(red));
}
