//! Build worlds from scenarios and replay their steps.

use std::collections::HashMap;
use std::path::Path;

use grid_core::{ConsumerId, SourceId};
use grid_graph::validate_grid;
use grid_scenario::{Scenario, Step, validate_scenario};
use tracing::{info, warn};

use crate::config::WorldConfig;
use crate::error::{AppError, AppResult};
use crate::report::GridReport;
use crate::world::World;

/// A world built from a scenario, with the scenario's names resolved to handles.
#[derive(Debug, Clone)]
pub struct CompiledScenario {
    pub world: World,
    pub sources: HashMap<String, SourceId>,
    pub consumers: HashMap<String, ConsumerId>,
}

impl CompiledScenario {
    pub fn source(&self, name: &str) -> AppResult<SourceId> {
        self.sources
            .get(name)
            .copied()
            .ok_or_else(|| AppError::UnknownEntity {
                kind: "source",
                name: name.to_string(),
            })
    }

    pub fn consumer(&self, name: &str) -> AppResult<ConsumerId> {
        self.consumers
            .get(name)
            .copied()
            .ok_or_else(|| AppError::UnknownEntity {
                kind: "consumer",
                name: name.to_string(),
            })
    }
}

/// Result of one `check` step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// 1-based step number.
    pub step: usize,
    pub consumer: String,
    pub expected: bool,
    pub actual: bool,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Everything a scenario run produced.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub checks: Vec<CheckResult>,
    /// Grid state after the last step.
    pub report: GridReport,
}

impl ScenarioOutcome {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(CheckResult::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed())
    }
}

/// Create the scenario's entities and initial wiring.
///
/// Sources are created first, then consumers, each in file order; consumer
/// edges are connected after every consumer exists so forward references work.
pub fn build_world(scenario: &Scenario) -> AppResult<CompiledScenario> {
    validate_scenario(scenario)?;

    let config = WorldConfig::from(&scenario.config);
    let mut compiled = CompiledScenario {
        world: World::with_config(&config)?,
        sources: HashMap::new(),
        consumers: HashMap::new(),
    };

    for def in &scenario.sources {
        let id = compiled.world.create_source();
        if !def.active {
            compiled.world.deactivate_source(id);
        }
        compiled.sources.insert(def.name.clone(), id);
    }
    for def in &scenario.consumers {
        let id = compiled.world.create_consumer();
        compiled.consumers.insert(def.name.clone(), id);
    }

    for def in &scenario.consumers {
        let consumer = compiled.consumer(&def.name)?;
        for name in &def.sources {
            let source = compiled.source(name)?;
            compiled.world.connect_consumer_to_source(consumer, source);
        }
        for name in &def.charges_from {
            let origin = compiled.consumer(name)?;
            compiled.world.connect_consumer_to_consumer(consumer, origin);
        }
    }

    validate_grid(compiled.world.grid())?;
    Ok(compiled)
}

/// Build the world and execute every step in order.
///
/// Failed checks do not stop the run; they are collected in the outcome.
pub fn run_scenario(scenario: &Scenario) -> AppResult<ScenarioOutcome> {
    let mut compiled = build_world(scenario)?;
    info!(
        scenario = %scenario.name,
        sources = compiled.sources.len(),
        consumers = compiled.consumers.len(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut checks = Vec::new();
    for (i, step) in scenario.steps.iter().enumerate() {
        if let Some(check) = apply_step(&mut compiled, i + 1, step)? {
            if !check.passed() {
                warn!(
                    step = check.step,
                    consumer = %check.consumer,
                    expected = check.expected,
                    actual = check.actual,
                    "scenario check failed"
                );
            }
            checks.push(check);
        }
    }

    let outcome = ScenarioOutcome {
        name: scenario.name.clone(),
        checks,
        report: compiled.world.report(),
    };
    info!(
        scenario = %outcome.name,
        checks = outcome.checks.len(),
        failed = outcome.failures().count(),
        "scenario finished"
    );
    Ok(outcome)
}

/// Load a scenario file (`.json`, otherwise YAML) and run it.
pub fn run_scenario_file(path: &Path) -> AppResult<ScenarioOutcome> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let loaded = if is_json {
        grid_scenario::load_json(path)
    } else {
        grid_scenario::load_yaml(path)
    };
    let scenario = loaded.map_err(|e| AppError::ScenarioFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    run_scenario(&scenario)
}

fn apply_step(
    compiled: &mut CompiledScenario,
    step_no: usize,
    step: &Step,
) -> AppResult<Option<CheckResult>> {
    match step {
        Step::Activate { source } => {
            let id = compiled.source(source)?;
            compiled.world.activate_source(id);
        }
        Step::Deactivate { source } => {
            let id = compiled.source(source)?;
            compiled.world.deactivate_source(id);
        }
        Step::ConnectSource { consumer, source } => {
            let (c, s) = (compiled.consumer(consumer)?, compiled.source(source)?);
            compiled.world.connect_consumer_to_source(c, s);
        }
        Step::DisconnectSource { consumer, source } => {
            let (c, s) = (compiled.consumer(consumer)?, compiled.source(source)?);
            compiled.world.disconnect_consumer_from_source(c, s);
        }
        Step::ConnectConsumer { target, origin } => {
            let (t, o) = (compiled.consumer(target)?, compiled.consumer(origin)?);
            compiled.world.connect_consumer_to_consumer(t, o);
        }
        Step::Check {
            consumer,
            energized,
        } => {
            let id = compiled.consumer(consumer)?;
            return Ok(Some(CheckResult {
                step: step_no,
                consumer: consumer.clone(),
                expected: *energized,
                actual: compiled.world.is_energized(id),
            }));
        }
    }
    Ok(None)
}
