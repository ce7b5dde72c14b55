// Integration tests for the signal producer's publish cycle

mod common;

use common::{temp_state, test_settings, FixedSignalSource};
use powertrader_hub::{roles, ReadinessMarker};
use std::fs;
use std::os::unix::fs::PermissionsExt;

fn parse_levels(content: &str) -> Vec<f64> {
    content
        .trim()
        .split(',')
        .map(|v| v.trim().parse::<f64>().expect("level must parse"))
        .collect()
}

#[test]
fn test_publishes_all_files_and_readiness_marker() {
    let (_dir, bus) = temp_state();
    let settings = test_settings(&["ETH", "XRP"]);
    let mut source = FixedSignalSource::new(1000.0, 5, 2);

    let marker = roles::thinker::run(&bus, &settings, &mut source).unwrap();

    assert!(marker.ready);
    assert_eq!(marker.total_coins, 2);
    assert_eq!(marker.ready_coins, vec!["ETH", "XRP"]);

    for symbol in ["ETH", "XRP"] {
        assert!(bus.dir().low_bounds(symbol).exists());
        assert!(bus.dir().high_bounds(symbol).exists());
        assert_eq!(
            fs::read_to_string(bus.dir().long_signal(symbol)).unwrap(),
            "5\n"
        );
        assert_eq!(
            fs::read_to_string(bus.dir().short_signal(symbol)).unwrap(),
            "2\n"
        );
    }

    let published: ReadinessMarker =
        serde_json::from_str(&fs::read_to_string(bus.dir().runner_ready()).unwrap()).unwrap();
    assert!(published.ready);
    assert_eq!(published.stage, "real_predictions");
    assert_eq!(published.total_coins, 2);
}

#[test]
fn test_ladder_files_are_ordered_around_base() {
    let (_dir, bus) = temp_state();
    let settings = test_settings(&["ETH"]);
    let mut source = FixedSignalSource::new(1000.0, 0, 0);

    roles::thinker::run(&bus, &settings, &mut source).unwrap();

    let lows = parse_levels(&fs::read_to_string(bus.dir().low_bounds("ETH")).unwrap());
    let highs = parse_levels(&fs::read_to_string(bus.dir().high_bounds("ETH")).unwrap());

    assert_eq!(lows.len(), 7);
    assert_eq!(highs.len(), 7);

    for pair in lows.windows(2) {
        assert!(pair[0] < pair[1], "low levels must be strictly ascending");
    }
    for pair in highs.windows(2) {
        assert!(pair[0] > pair[1], "high levels must be strictly descending");
    }

    // Steepest to base-adjacent, centered on the same base value
    assert!((lows[0] - 930.0).abs() < 1e-3);
    assert!((lows[6] - 990.0).abs() < 1e-3);
    assert!((highs[0] - 1070.0).abs() < 1e-3);
    assert!((highs[6] - 1010.0).abs() < 1e-3);
}

#[test]
fn test_btc_namespace_is_the_base_directory() {
    let (dir, bus) = temp_state();
    let settings = test_settings(&["BTC"]);
    let mut source = FixedSignalSource::new(500.0, 1, 1);

    roles::thinker::run(&bus, &settings, &mut source).unwrap();

    assert!(dir.path().join("low_bound_prices.html").exists());
    assert!(!dir.path().join("BTC").exists());
}

#[test]
fn test_symbol_namespace_created_owner_only() {
    let (dir, bus) = temp_state();
    let settings = test_settings(&["DOGE"]);
    let mut source = FixedSignalSource::new(500.0, 1, 1);

    roles::thinker::run(&bus, &settings, &mut source).unwrap();

    let mode = fs::metadata(dir.path().join("DOGE"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o700);
}

#[test]
fn test_published_signal_files_owner_only() {
    let (_dir, bus) = temp_state();
    let settings = test_settings(&["ETH"]);
    let mut source = FixedSignalSource::new(500.0, 1, 1);

    roles::thinker::run(&bus, &settings, &mut source).unwrap();

    for path in [
        bus.dir().low_bounds("ETH"),
        bus.dir().long_signal("ETH"),
        bus.dir().runner_ready(),
    ] {
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600, "{} must be owner-only", path.display());
    }
}
