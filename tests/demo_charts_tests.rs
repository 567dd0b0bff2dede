use linechart_rs::api::{
    EXAMPLE_SURFACE_ID, HEARTBEAT_SURFACE_ID, RecordingConstructor, demo_host,
    example_chart_config, heartbeat_chart_config, mount_demo_charts,
};
use linechart_rs::config::{ChartKind, RgbColor};
use linechart_rs::error::ChartError;
use linechart_rs::host::{Surface, SurfaceRegistry, Viewport};
use serde_json::json;

#[test]
fn heartbeat_chart_matches_authored_data() {
    let config = heartbeat_chart_config();

    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(config.data.labels, vec!["Day 1", "Day 2"]);
    assert_eq!(config.data.datasets.len(), 2);
    assert_eq!(config.data.datasets[0].label, "Your heart beat");
    assert_eq!(config.data.datasets[0].data, vec![56.0, 78.0]);
    assert_eq!(config.data.datasets[1].label, "Average heart beat");
    assert_eq!(config.data.datasets[1].data, vec![90.0, 90.0]);
    assert!(config.data.datasets.iter().all(|series| !series.has_styling()));
}

#[test]
fn example_chart_keeps_six_labels_against_seven_values() {
    let config = example_chart_config();

    assert_eq!(
        config.data.labels,
        vec!["January", "Feburary", "March", "April", "May", "June"]
    );
    let first = &config.data.datasets[0];
    assert_eq!(first.label, "My First Dataset");
    assert_eq!(first.data, vec![65.0, 59.0, 80.0, 81.0, 20.0, 55.0, 40.0]);
    assert_eq!(first.fill, Some(false));
    assert_eq!(first.border_color, Some(RgbColor::new(75, 192, 192)));
    assert_eq!(first.tension, Some(0.1));

    let second = &config.data.datasets[1];
    assert_eq!(second.label, "My Second dataset");
    assert_eq!(second.data, vec![65.0, 2.0, 80.0, 81.0, 3.0, 55.0, 40.0]);
    assert_eq!(second.fill, None);
    assert_eq!(second.border_color, Some(RgbColor::new(235, 185, 0)));
    assert_eq!(second.tension, None);
}

#[test]
fn unstyled_series_serialize_without_styling_keys() {
    let value = heartbeat_chart_config().to_json_value().expect("json");

    assert_eq!(
        value,
        json!({
            "type": "line",
            "data": {
                "labels": ["Day 1", "Day 2"],
                "datasets": [
                    { "label": "Your heart beat", "data": [56.0, 78.0] },
                    { "label": "Average heart beat", "data": [90.0, 90.0] }
                ]
            }
        })
    );
}

#[test]
fn partially_styled_series_only_carries_set_keys() {
    let value = example_chart_config().to_json_value().expect("json");
    let second = value["data"]["datasets"][1]
        .as_object()
        .expect("series object");

    let mut keys: Vec<&str> = second.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["borderColor", "data", "label"]);
    assert_eq!(second["borderColor"], "rgb(235, 185, 0)");
}

#[test]
fn demo_mount_forwards_both_configs_in_order() {
    let host = demo_host(Viewport::new(800, 400));
    let mut constructor = RecordingConstructor::new();

    let outcome = mount_demo_charts(&host, &mut constructor).expect("mount");

    assert_eq!(outcome.mounted.len(), 2);
    let calls = constructor.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0.id, EXAMPLE_SURFACE_ID);
    assert_eq!(calls[0].1, example_chart_config());
    assert_eq!(calls[1].0.id, HEARTBEAT_SURFACE_ID);
    assert_eq!(calls[1].1, heartbeat_chart_config());
}

#[test]
fn missing_demo_surface_omits_only_that_chart() {
    let host = SurfaceRegistry::new()
        .with_surface(Surface::new(HEARTBEAT_SURFACE_ID, Viewport::new(400, 300)));
    let mut constructor = RecordingConstructor::new();

    let outcome = mount_demo_charts(&host, &mut constructor).expect("mount");

    assert_eq!(outcome.omitted, vec![EXAMPLE_SURFACE_ID.to_owned()]);
    assert_eq!(outcome.mounted.len(), 1);
    assert_eq!(outcome.mounted[0].0, HEARTBEAT_SURFACE_ID);
    assert_eq!(constructor.call_count(), 1);
    assert_eq!(constructor.calls()[0].1, heartbeat_chart_config());
}

#[test]
fn empty_host_mounts_nothing() {
    let mut constructor = RecordingConstructor::new();
    let outcome = mount_demo_charts(&SurfaceRegistry::new(), &mut constructor).expect("mount");

    assert!(outcome.mounted.is_empty());
    assert_eq!(outcome.omitted.len(), 2);
    assert_eq!(constructor.call_count(), 0);
}

#[test]
fn engine_error_stops_demo_mount() {
    let host = demo_host(Viewport::new(800, 400));
    let mut constructor = RecordingConstructor::failing_with("no canvas context");

    let err = mount_demo_charts(&host, &mut constructor).expect_err("engine error");

    assert!(matches!(err, ChartError::InvalidData(ref message) if message == "no canvas context"));
    assert_eq!(constructor.call_count(), 1);
}
