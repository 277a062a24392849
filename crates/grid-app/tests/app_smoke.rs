//! Smoke tests for the grid-app layer.

use std::path::PathBuf;

use grid_app::{AppError, TraversalOrder, World, WorldConfig, run_scenario, run_scenario_file};
use grid_scenario::from_yaml_str;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn scenario_path(file: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("scenarios");
    path.push(file);
    path
}

#[test]
fn town_scenario_passes() {
    init_tracing();
    let outcome = run_scenario_file(&scenario_path("town.yaml")).unwrap();

    assert_eq!(outcome.name, "Town");
    assert_eq!(outcome.checks.len(), 6);
    for check in &outcome.checks {
        assert!(check.passed(), "check failed: {check:?}");
    }
    // h1 lost its plant in the last step, so the chain is dark.
    assert_eq!(outcome.report.energized_count(), 0);
    assert_eq!(outcome.report.sources[0].dependants, 0);
}

#[test]
fn ring_scenario_passes() {
    init_tracing();
    let outcome = run_scenario_file(&scenario_path("ring.json")).unwrap();

    assert!(outcome.all_passed());
    let a = outcome.report.consumer("ring/consumer/0").unwrap();
    assert_eq!(a.supplied_by.as_deref(), Some("ring/source/0"));
    assert_eq!(a.hops, Some(2));
}

#[test]
fn missing_file_is_reported_with_path() {
    let path = scenario_path("nope.yaml");
    match run_scenario_file(&path) {
        Err(AppError::ScenarioFile { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn inline_scenario_with_failures() {
    init_tracing();
    let scenario = from_yaml_str(
        r#"
version: 1
name: Mislabelled
sources:
  - name: p
consumers:
  - name: h
    sources: [p]
steps:
  - action: check
    consumer: h
    energized: false
  - action: deactivate
    source: p
  - action: check
    consumer: h
    energized: false
"#,
    )
    .unwrap();

    let outcome = run_scenario(&scenario).unwrap();
    assert_eq!(outcome.checks.len(), 2);
    assert_eq!(outcome.failures().count(), 1);
    assert_eq!(outcome.failures().next().unwrap().step, 1);
}

#[test]
fn orders_agree_on_dense_grid() {
    init_tracing();
    let mut worlds: Vec<World> = [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst]
        .into_iter()
        .map(|order| {
            World::with_config(&WorldConfig::default().with_namespace("dense").with_traversal(order))
                .unwrap()
        })
        .collect();

    for world in &mut worlds {
        let p = world.create_source();
        let hs: Vec<_> = (0..12).map(|_| world.create_consumer()).collect();
        for (i, &h) in hs.iter().enumerate() {
            for (j, &g) in hs.iter().enumerate() {
                if (i * 7 + j * 3) % 5 == 0 {
                    world.connect_consumer_to_consumer(h, g);
                }
            }
        }
        world.connect_consumer_to_source(hs[11], p);
    }

    let dfs = worlds[0].report();
    let bfs = worlds[1].report();
    for (a, b) in dfs.consumers.iter().zip(&bfs.consumers) {
        assert_eq!(a.key, b.key);
        assert_eq!(a.energized, b.energized);
    }
}
