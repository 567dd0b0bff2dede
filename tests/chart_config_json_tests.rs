use linechart_rs::api::example_chart_config;
use linechart_rs::config::{ChartConfig, ChartKind, RgbColor};
use linechart_rs::error::ChartError;
use linechart_rs::host::SurfaceRegistry;

#[test]
fn hand_written_config_json_parses_into_typed_records() {
    let input = r#"{
        "type": "line",
        "data": {
            "labels": ["January", "Feburary"],
            "datasets": [
                {
                    "label": "My First Dataset",
                    "data": [65, 59, 80],
                    "fill": false,
                    "borderColor": "rgb(75,192, 192)",
                    "tension": 0.1
                },
                { "label": "bare", "data": [] }
            ]
        }
    }"#;

    let config = ChartConfig::from_json_str(input).expect("parse");

    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(config.data.labels.len(), 2);
    let styled = &config.data.datasets[0];
    assert_eq!(styled.data, vec![65.0, 59.0, 80.0]);
    assert_eq!(styled.border_color, Some(RgbColor::new(75, 192, 192)));
    assert_eq!(styled.tension, Some(0.1));
    let bare = &config.data.datasets[1];
    assert!(bare.data.is_empty());
    assert!(!bare.has_styling());
}

#[test]
fn demo_config_survives_json_contract() {
    let config = example_chart_config();
    let json = config.to_json_pretty().expect("serialize");

    assert!(json.contains("\"type\": \"line\""));
    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn bad_color_is_reported_as_invalid_data() {
    let input = r#"{"type":"line","data":{"labels":[],"datasets":[
        {"label":"x","data":[1],"borderColor":"rgb(300, 0, 0)"}
    ]}}"#;

    let err = ChartConfig::from_json_str(input).expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(err.to_string().contains("rgb(300, 0, 0)"));
}

#[test]
fn host_layout_json_lists_surfaces_in_order() {
    let host = SurfaceRegistry::from_json_str(
        r#"{"surfaces":[
            {"id":"line_chart","width":800,"height":400},
            {"id":"my_chart","width":400,"height":200}
        ]}"#,
    )
    .expect("layout");

    let ids: Vec<&str> = host.iter().map(|surface| surface.id.as_str()).collect();
    assert_eq!(ids, vec!["line_chart", "my_chart"]);
    assert_eq!(host.resolve("my_chart").expect("surface").viewport.height, 200);
}
