use std::path::Path;

use approx::assert_relative_eq;

use gravsim::configuration::config::{Dimension, ScenarioConfig};
use gravsim::configuration::presets::{self, Preset};
use gravsim::simulation::integrator::IntegratorConfig;
use gravsim::simulation::report::{run_batch, Reporter};
use gravsim::simulation::scenario::Scenario;
use gravsim::simulation::states::{NVec2, NVec3};
use gravsim::visualization::sprite::{Motion, Rgba, Sprite};
use gravsim::visualization::trail::Trail;
use gravsim::visualization::viewer::{ViewState, Viewer};
use gravsim::ConfigError;

const SMALL_3D: &str = r#"
name: small
engine:
  dimension: 3d
  integrator: leapfrog
parameters:
  dt: 0.01
  softening: 0.1
  G: 1.0
bodies:
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 10.0
    label: anchor
random:
  count: 8
  seed: 7
  position: [-1.0, 1.0]
  velocity: [-0.1, 0.1]
  zero_momentum: true
"#;

fn scenarios_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios"))
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn yaml_scenario_builds() {
    let cfg = ScenarioConfig::from_yaml_str(SMALL_3D).unwrap();
    assert_eq!(cfg.engine.dimension, Dimension::Three);
    assert_eq!(cfg.engine.integrator, IntegratorConfig::Verlet);
    assert!(!cfg.engine.parallel);
    assert_eq!(cfg.parameters.steps, 100);
    assert_eq!(cfg.parameters.report_every, 20);

    let scenario = Scenario::<3>::build_scenario(cfg).unwrap();
    assert_eq!(scenario.name, "small");
    assert_eq!(scenario.system().len(), 9);
    assert_eq!(scenario.labels[0].as_deref(), Some("anchor"));
    assert!(scenario.labels[1..].iter().all(Option::is_none));
    assert_eq!(scenario.system().bodies()[3].m, 1.0);
    assert!(gravsim::total_momentum(scenario.system()).norm() < 1e-12);
}

#[test]
fn unknown_integrator_fails_to_parse() {
    let text = SMALL_3D.replace("leapfrog", "rk4");
    assert!(ScenarioConfig::from_yaml_str(&text).is_err());
}

#[test]
fn wrong_dimension_is_rejected() {
    let cfg = ScenarioConfig::from_yaml_str(SMALL_3D).unwrap();
    let err = Scenario::<2>::build_scenario(cfg).err().unwrap();
    assert_eq!(err, ConfigError::ScenarioDimension { expected: 2, found: 3 });

    let text = SMALL_3D.replace("x: [0.0, 0.0, 0.0]", "x: [0.0, 0.0]");
    let cfg = ScenarioConfig::from_yaml_str(&text).unwrap();
    let err = Scenario::<3>::build_scenario(cfg).err().unwrap();
    assert_eq!(err, ConfigError::DimensionMismatch { index: 0, expected: 3, found: 2 });
}

#[test]
fn invalid_yaml_values_are_rejected() {
    let cases = [
        ("m: 10.0", "m: 0.0"),
        ("dt: 0.01", "dt: 0.0"),
        ("dt: 0.01", "dt: -0.5"),
        ("softening: 0.1", "softening: 0.0"),
        ("position: [-1.0, 1.0]", "position: [1.0, -1.0]"),
        ("G: 1.0", "G: 1.0\n  report_every: 0"),
        ("position: [-1.0, 1.0]", "position: [-1.0e308, 1.0e308]"),
    ];
    let expected = [
        ConfigError::NonPositiveMass { index: 0, mass: 0.0 },
        ConfigError::NonPositiveTimeStep(0.0),
        ConfigError::NonPositiveTimeStep(-0.5),
        ConfigError::NonPositiveSoftening(0.0),
        ConfigError::InvalidRange { what: "position", low: 1.0, high: -1.0 },
        ConfigError::InvalidReportInterval,
        ConfigError::InvalidRange { what: "position", low: -1.0e308, high: 1.0e308 },
    ];

    for ((from, to), want) in cases.iter().zip(expected) {
        let cfg = ScenarioConfig::from_yaml_str(&SMALL_3D.replace(from, to)).unwrap();
        let err = Scenario::<3>::build_scenario(cfg).err().unwrap();
        assert_eq!(err, want, "replacing {from:?} with {to:?}");
    }
}

#[test]
fn scenario_without_bodies_is_rejected() {
    let text = r#"
engine: { dimension: 2d, integrator: euler }
parameters: { dt: 0.1, softening: 0.1, G: 1.0 }
"#;
    let cfg = ScenarioConfig::from_yaml_str(text).unwrap();
    assert_eq!(cfg.validate(), Err(ConfigError::NoBodies));
}

#[test]
fn shipped_scenarios_build() {
    let cluster = ScenarioConfig::from_yaml_file(&scenarios_dir().join("cluster.yaml")).unwrap();
    let from_file = Scenario::<3>::build_scenario(cluster).unwrap();
    let from_preset = Scenario::<3>::build_scenario(Preset::Cluster.config()).unwrap();
    assert_eq!(from_file.system(), from_preset.system());

    let binary = ScenarioConfig::from_yaml_file(&scenarios_dir().join("binary.yaml")).unwrap();
    assert_eq!(Scenario::<2>::build_scenario(binary).unwrap().system().len(), 2);

    let solar = ScenarioConfig::from_yaml_file(&scenarios_dir().join("solar_system.yaml")).unwrap();
    assert_eq!(solar.engine.integrator, IntegratorConfig::Euler);
    assert_eq!(Scenario::<2>::build_scenario(solar).unwrap().system().len(), 5);

    assert!(ScenarioConfig::from_yaml_file(&scenarios_dir().join("missing.yaml")).is_err());
}

#[test]
fn presets_build_in_their_dimension() {
    assert_eq!(Scenario::<3>::build_scenario(presets::cluster()).unwrap().system().len(), 100);
    assert_eq!(Scenario::<2>::build_scenario(presets::solar_system()).unwrap().system().len(), 5);
    assert_eq!(Scenario::<3>::build_scenario(presets::earth_sun()).unwrap().system().len(), 2);
    assert!(Scenario::<2>::build_scenario(presets::cluster()).is_err());
}

#[test]
fn earth_completes_a_year_on_its_orbit() {
    let mut scenario = Scenario::<3>::build_scenario(presets::earth_sun()).unwrap();
    let r0 = (scenario.system().bodies()[1].x - scenario.system().bodies()[0].x).norm();

    let steps = scenario.parameters().steps();
    scenario.run(steps, |_, _| {});

    let bodies = scenario.system().bodies();
    let r = (bodies[1].x - bodies[0].x).norm();
    assert_relative_eq!(r, r0, max_relative = 1e-3);
    // 365 days of a ~365.26 day orbit: back near the +x axis
    assert!(bodies[1].x.x > 0.99 * r0);
}

// ==================================================================================
// Reporter tests
// ==================================================================================

#[test]
fn report_lines_use_fixed_precision() {
    let reporter = Reporter::default();
    assert_eq!(reporter.header(100), "N-Body Simulation (N=100)");
    assert_eq!(
        reporter.line::<3>(0, Some(&NVec3::new(1.0, -2.5, 0.123456))),
        "Step 0 | Center of Mass: (1.0000, -2.5000, 0.1235)"
    );
    assert_eq!(
        Reporter::new(5, 2).unwrap().line::<2>(40, Some(&NVec2::new(0.5, 3.0))),
        "Step 40 | Center of Mass: (0.50, 3.00)"
    );
    assert_eq!(reporter.line::<2>(3, None), "Step 3 | Center of Mass: (n/a)");
    assert_eq!(Reporter::new(0, 4), Err(ConfigError::InvalidReportInterval));

    let every_third = Reporter::new(3, 1).unwrap();
    assert_eq!((every_third.every(), every_third.precision()), (3, 1));
    let reported: Vec<usize> = (0..10).filter(|&i| every_third.should_report(i)).collect();
    assert_eq!(reported, vec![0, 3, 6, 9]);
}

#[test]
fn batch_run_reports_every_interval() {
    let mut scenario = Scenario::<3>::build_scenario(presets::cluster()).unwrap();
    let mut out = Vec::new();
    run_batch(&mut scenario, 100, &Reporter::default(), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "N-Body Simulation (N=100)");
    for (line, step) in lines[1..].iter().zip([0, 20, 40, 60, 80]) {
        assert!(line.starts_with(&format!("Step {step} | Center of Mass: (")), "{line}");
    }
    assert_eq!(scenario.steps_taken(), 100);
}

// ==================================================================================
// Presentation tests
// ==================================================================================

#[test]
fn trail_drops_oldest_point() {
    let mut trail = Trail::<2>::new(3);
    for i in 1..=5 {
        trail.push(NVec2::new(i as f64, 0.0));
    }
    assert_eq!(trail.len(), 3);
    let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![3.0, 4.0, 5.0]);

    trail.clear();
    assert!(trail.is_empty());
    assert_eq!(trail.capacity(), 3);

    let mut huge = Trail::<2>::new(usize::MAX);
    huge.push(NVec2::new(1.0, 2.0));
    assert_eq!(huge.len(), 1);
    assert_eq!(huge.capacity(), usize::MAX);

    let mut none = Trail::<2>::new(0);
    none.push(NVec2::zeros());
    assert!(none.is_empty());
}

#[test]
fn decorative_orbit_moves_without_physics() {
    let scenario = Scenario::<2>::build_scenario(presets::solar_system()).unwrap();
    let mut moon = Sprite::new(
        "Moon",
        3.0,
        Rgba::GRAY,
        Motion::FixedOrbit {
            center: NVec2::new(1.0, 1.0),
            distance: 2.0,
            angular_speed: std::f64::consts::FRAC_PI_2,
            angle: 0.0,
        },
    );

    let start = moon.position(scenario.system()).unwrap();
    assert!((start - NVec2::new(3.0, 1.0)).norm() < 1e-12);

    moon.advance(1.0);
    let quarter = moon.position(scenario.system()).unwrap();
    assert!((quarter - NVec2::new(1.0, 3.0)).norm() < 1e-12);

    let fixed = Sprite::new("Marker", 1.0, Rgba::WHITE, Motion::Static { position: NVec2::new(5.0, 5.0) });
    assert_eq!(fixed.position(scenario.system()), Some(NVec2::new(5.0, 5.0)));

    let dangling = Sprite::<2>::new("Ghost", 1.0, Rgba::WHITE, Motion::Simulated { body: 99 });
    assert_eq!(dangling.position(scenario.system()), None);
}

#[test]
fn paused_viewer_does_not_advance() {
    let mut viewer = Viewer::solar_system().unwrap();
    let before: Vec<NVec2> = viewer.positions().into_iter().map(|(_, p)| p).collect();

    let mut state = ViewState::default();
    state.toggle_pause();
    for _ in 0..10 {
        viewer.frame(&state, 1.0 / 60.0).unwrap();
    }

    let after: Vec<NVec2> = viewer.positions().into_iter().map(|(_, p)| p).collect();
    assert_eq!(before, after);
    assert_eq!(viewer.scenario().steps_taken(), 0);
    assert!(viewer.sprites().iter().filter_map(|s| s.trail.as_ref()).all(Trail::is_empty));
}

#[test]
fn running_viewer_records_trails() {
    let mut viewer = Viewer::solar_system().unwrap();
    let state = ViewState::default();
    for _ in 0..10 {
        viewer.frame(&state, 1.0 / 60.0).unwrap();
    }

    assert_eq!(viewer.scenario().steps_taken(), 10);
    let sprites = viewer.sprites();
    assert_eq!(sprites[0].label, "Sun");
    assert!(sprites[0].trail.is_none());
    for planet in &sprites[1..] {
        assert_eq!(planet.trail.as_ref().map(Trail::len), Some(10));
    }

    let labels: Vec<&str> = viewer.positions().into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, vec!["Sun", "Mercury", "Venus", "Earth", "Mars"]);

    viewer.reset_trails();
    assert!(viewer.sprites().iter().filter_map(|s| s.trail.as_ref()).all(Trail::is_empty));

    let hidden = ViewState { trails: false, ..ViewState::default() };
    viewer.frame(&hidden, 1.0 / 60.0).unwrap();
    assert!(viewer.sprites().iter().filter_map(|s| s.trail.as_ref()).all(Trail::is_empty));
}

#[test]
fn viewer_rejects_non_positive_frame_time() {
    let scenario = Scenario::<3>::build_scenario(presets::cluster()).unwrap();
    let mut viewer = Viewer::new(scenario);
    assert_eq!(viewer.sprites().len(), 100);
    assert_eq!(viewer.sprites()[7].label, "body 7");

    let frozen = ViewState { time_scale: 0.0, ..ViewState::default() };
    assert_eq!(viewer.frame(&frozen, 1.0 / 60.0), Err(ConfigError::NonPositiveTimeStep(0.0)));
    assert!(viewer.frame(&ViewState::default(), -1.0).is_err());
    assert_eq!(viewer.scenario().steps_taken(), 0);
}
