use linechart_rs::api::{
    EXAMPLE_SURFACE_ID, HEARTBEAT_SURFACE_ID, demo_host, mount_demo_charts,
};
use linechart_rs::engine::{EngineOptions, LineChartConstructor};
use linechart_rs::error::ChartResult;
use linechart_rs::host::{Surface, Viewport};
use linechart_rs::render::NullRenderer;

#[test]
fn demo_smoke_flow() {
    let host = demo_host(Viewport::new(800, 400));
    let mut constructor = LineChartConstructor::new(
        EngineOptions::default(),
        |_surface: &Surface| -> ChartResult<NullRenderer> { Ok(NullRenderer::default()) },
    );

    let outcome = mount_demo_charts(&host, &mut constructor).expect("mount demo charts");
    assert!(outcome.omitted.is_empty());
    assert_eq!(outcome.mounted.len(), 2);

    let (first_id, example) = &outcome.mounted[0];
    let (second_id, heartbeat) = &outcome.mounted[1];
    assert_eq!(first_id, EXAMPLE_SURFACE_ID);
    assert_eq!(second_id, HEARTBEAT_SURFACE_ID);
    assert_eq!(example.surface().id, EXAMPLE_SURFACE_ID);
    assert_eq!(heartbeat.surface().id, HEARTBEAT_SURFACE_ID);

    for (_, chart) in &outcome.mounted {
        assert_eq!(chart.renderer().render_count, 1);
        assert!(chart.renderer().last_line_count > 0);
        assert!(chart.renderer().last_text_count > 0);
        chart.frame().validate().expect("valid frame");
    }
}
