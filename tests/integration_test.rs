use cloud_cost::app::{format_total, parse_query_args, parse_storage_args, write_estimate};
use cloud_cost::{
    compute_query_cost, compute_storage_cost, CostEstimate, OutputFormat, QueryDefaults,
    StorageDefaults, StorageRegime, StorageScenario,
};

/// Literal month loops for the storage formula, kept independent of the library.
fn storage_reference(
    timeframe: i64,
    data_per_month: f64,
    cost: f64,
    alternative_cost: f64,
    cost_switch_period: i64,
) -> f64 {
    if timeframe <= cost_switch_period {
        let mut short_term = 0.0;
        for n in 1..=timeframe {
            short_term += cost * data_per_month * n as f64;
        }
        return short_term;
    }

    let long_term_months = timeframe - cost_switch_period;

    let mut accumulating_data = data_per_month;
    let mut long_term = 0.0;
    for _ in 1..=long_term_months {
        long_term += alternative_cost * accumulating_data;
        accumulating_data += data_per_month;
    }

    let mut accumulating_data = data_per_month;
    let mut pre_switch = 0.0;
    for _ in 1..=cost_switch_period {
        pre_switch += cost * accumulating_data;
        accumulating_data += data_per_month;
    }

    let post_switch =
        long_term_months as f64 * data_per_month * cost_switch_period as f64 * cost;

    long_term + (pre_switch + post_switch)
}

fn run_query(args: &[&str]) -> String {
    let argv = std::iter::once("query-cost").chain(args.iter().copied());
    let invocation = parse_query_args(argv, &QueryDefaults::default()).unwrap();
    let mut out = Vec::new();
    write_estimate(&mut out, &invocation.scenario, invocation.format).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_storage(args: &[&str]) -> String {
    let argv = std::iter::once("storage-cost").chain(args.iter().copied());
    let invocation = parse_storage_args(argv, &StorageDefaults::default()).unwrap();
    let mut out = Vec::new();
    write_estimate(&mut out, &invocation.scenario, invocation.format).unwrap();
    String::from_utf8(out).unwrap()
}

fn parse_output(output: &str) -> f64 {
    output.trim_end().parse().unwrap()
}

#[test]
fn test_query_cost_twelve_months() {
    let output = run_query(&["--time", "12", "--queries", "30", "--data", "100", "--cost", "0.005"]);
    assert_eq!(output.lines().count(), 1);
    assert!((parse_output(&output) - 1170.0).abs() < 1e-9);
}

#[test]
fn test_query_cost_without_options_is_zero() {
    assert_eq!(run_query(&[]), "0.0\n");
}

#[test]
fn test_query_cost_uses_default_price() {
    let output = run_query(&["-t", "1", "-q", "1", "-d", "1000"]);
    assert!((parse_output(&output) - 4.8).abs() < 1e-9);
}

#[test]
fn test_query_cost_is_idempotent() {
    let first = compute_query_cost(24, 30.0, 100.0, 0.0048);
    let second = compute_query_cost(24, 30.0, 100.0, 0.0048);
    assert_eq!(first, second);
}

#[test]
fn test_storage_cost_example() {
    let output = run_storage(&[
        "--time",
        "12",
        "--data",
        "100",
        "--cost",
        "0.02",
        "--alternative-cost",
        "0.01",
        "--cost-switch-period",
        "3",
    ]);
    assert!((parse_output(&output) - 111.0).abs() < 1e-9);
}

#[test]
fn test_storage_cost_defaults_match_example() {
    let explicit = run_storage(&["-t", "12", "-d", "100", "-c", "0.02", "-ca", "0.01", "-cp", "3"]);
    let defaulted = run_storage(&["-t", "12", "-d", "100"]);
    assert_eq!(explicit, defaulted);
}

#[test]
fn test_storage_cost_matches_reference_loops() {
    for timeframe in 0..=24 {
        for cost_switch_period in 0..=6 {
            for data_per_month in [0.0, 1.0, 100.0, 2048.0] {
                let expected =
                    storage_reference(timeframe, data_per_month, 0.02, 0.01, cost_switch_period);
                let actual =
                    compute_storage_cost(timeframe, data_per_month, 0.02, 0.01, cost_switch_period);
                assert!(
                    (actual - expected).abs() < 1e-9,
                    "timeframe={timeframe} switch={cost_switch_period} data={data_per_month}"
                );
            }
        }
    }
}

#[test]
fn test_storage_within_switch_period_has_no_long_term_cost() {
    for timeframe in 0..=3 {
        let breakdown = StorageScenario {
            timeframe,
            data_per_month: 100.0,
            cost: 0.02,
            alternative_cost: 0.01,
            cost_switch_period: 3,
        }
        .breakdown();

        assert_eq!(breakdown.regime, StorageRegime::ShortTermOnly);
        assert_eq!(breakdown.long_term_cost, 0.0);
    }
}

#[test]
fn test_storage_json_breakdown() {
    let output = run_storage(&["--time", "5", "--data", "100", "-cp", "0", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["regime"], "tiered");
    assert_eq!(value["long_term_storage_months"], 5);
    assert_eq!(value["pre_switch_cost"].as_f64(), Some(0.0));
    assert_eq!(value["post_switch_cost"].as_f64(), Some(0.0));
    assert!((value["total"].as_f64().unwrap() - 15.0).abs() < 1e-9);
}

#[test]
fn test_query_json_breakdown() {
    let output = run_query(&["-t", "3", "-q", "2", "-d", "10", "-c", "1", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let monthly: Vec<f64> = value["monthly_costs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(monthly, vec![20.0, 40.0, 60.0]);
    assert_eq!(value["total"].as_f64(), Some(120.0));
}

#[test]
fn test_output_format_default_is_total() {
    assert_eq!(OutputFormat::default(), OutputFormat::Total);
    assert_eq!(format_total(111.0), "111.0");
}
