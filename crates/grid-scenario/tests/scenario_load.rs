use grid_graph::TraversalOrder;
use grid_scenario::schema::*;
use grid_scenario::{ScenarioError, ValidationError, from_json_str, from_yaml_str, load_yaml};

const TOWN: &str = r#"
version: 1
name: Town
config:
  id_namespace: town
  traversal: breadth_first
sources:
  - name: plant
  - name: backup
    active: false
consumers:
  - name: h1
    sources: [plant, plant]
  - name: h2
    charges_from: [h1]
steps:
  - action: check
    consumer: h2
    energized: true
  - action: deactivate
    source: plant
  - action: connect_source
    consumer: h2
    source: backup
  - action: check
    consumer: h2
    energized: false
"#;

#[test]
fn parse_yaml_scenario() {
    let scenario = from_yaml_str(TOWN).unwrap();

    assert_eq!(scenario.name, "Town");
    assert_eq!(scenario.config.id_namespace.as_deref(), Some("town"));
    assert_eq!(scenario.config.traversal, TraversalOrder::BreadthFirst);
    assert!(scenario.sources[0].active);
    assert!(!scenario.sources[1].active);
    assert_eq!(scenario.consumers[0].sources, vec!["plant", "plant"]);
    assert_eq!(scenario.steps.len(), 4);
    assert_eq!(
        scenario.steps[1],
        Step::Deactivate {
            source: "plant".to_string()
        }
    );
}

#[test]
fn defaults_when_sections_missing() {
    let scenario = from_yaml_str("version: 1\nname: Empty\n").unwrap();

    assert_eq!(scenario.config, ConfigDef::default());
    assert_eq!(scenario.config.traversal, TraversalOrder::DepthFirst);
    assert!(scenario.sources.is_empty());
    assert!(scenario.consumers.is_empty());
    assert!(scenario.steps.is_empty());
}

#[test]
fn parse_json_scenario() {
    let json = r#"{
        "version": 1,
        "name": "Loop",
        "consumers": [
            { "name": "a", "charges_from": ["b"] },
            { "name": "b", "charges_from": ["a"] }
        ],
        "steps": [ { "action": "check", "consumer": "a", "energized": false } ]
    }"#;
    let scenario = from_json_str(json).unwrap();
    assert_eq!(scenario.consumers.len(), 2);
    assert_eq!(scenario.config.traversal, TraversalOrder::DepthFirst);
}

#[test]
fn yaml_and_json_agree() {
    let from_yaml = from_yaml_str(TOWN).unwrap();
    let json = serde_json::to_string(&from_yaml).unwrap();
    let from_json = from_json_str(&json).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn unknown_reference_is_rejected() {
    let yaml = r#"
version: 1
name: Broken
consumers:
  - name: h1
    sources: [nowhere]
"#;
    let err = from_yaml_str(yaml).unwrap_err();
    match err {
        ScenarioError::Validation(ValidationError::MissingReference { name, context }) => {
            assert_eq!(name, "nowhere");
            assert!(context.contains("h1"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_step_is_a_parse_error() {
    let yaml = "version: 1\nname: X\nsteps:\n  - action: explode\n    source: p\n";
    assert!(matches!(from_yaml_str(yaml), Err(ScenarioError::Yaml(_))));
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join("grid_scenario_load_from_file.yaml");
    std::fs::write(&path, TOWN).unwrap();

    let scenario = load_yaml(&path).unwrap();
    assert_eq!(scenario.name, "Town");

    let missing = std::env::temp_dir().join("grid_scenario_does_not_exist.yaml");
    assert!(matches!(load_yaml(&missing), Err(ScenarioError::Io(_))));
}
