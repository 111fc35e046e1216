use gpui_orbitplot::{
    Bounds2D, Bounds3D, Chart2D, Chart3D, Color, Colormap, RenderCommand, Series2D, Series3D,
    SharedChart,
};

#[test]
fn line_normalizes_middle_sample_to_top() {
    let mut chart = Chart2D::new();
    let id = chart.attach(Series2D::line(&[0.0, 1.0, 2.0], &[0.0, 5.0, 0.0], Color::BLUE).expect("valid"));
    let series = chart.series_by_id(id).expect("attached");

    assert_eq!(series.data().column(0), &[0.0, 1.0, 1.0, 2.0]);
    let ys: Vec<f32> = series.vertices_norm().iter().map(|v| v.y).collect();
    assert_eq!(ys, vec![0.0, 1.0, 1.0, 0.0]);
    // Every interior sample appears twice, forming N - 1 segments.
    assert_eq!(series.screen_points().len(), 2 * (3 - 1));
}

#[test]
fn empty_capacity_line_draws_nothing() {
    let mut chart = Chart2D::new();
    chart.attach(Series2D::line_with_capacity(0, Color::RED));
    chart.attach(Series2D::line_with_capacity(8, Color::RED));
    assert_eq!(chart.bounds(), Bounds2D::UNIT);

    let list = chart.render();
    let series_draws = list
        .commands()
        .iter()
        .filter(|c| matches!(c, RenderCommand::LineSegments { style, .. } if style.color == Color::RED))
        .count();
    assert_eq!(series_draws, 0);
}

#[test]
fn flat_surface_maps_to_one_color() {
    let xs = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0];
    let ys = [0.0, 1.0, 2.0, 0.0, 1.0, 2.0, 0.0, 1.0, 2.0];
    let zs = [0.0; 9];
    let mut chart = Chart3D::new();
    let id = chart.attach(Series3D::surface(&xs, &ys, &zs, 3, 3).expect("valid grid"));

    let mesh = chart.series_by_id(id).expect("attached").mesh();
    assert_eq!(mesh.indices.len(), 2 * 2 * 6);
    let expected = Colormap::Jet.color_norm(0.5);
    assert!(mesh.colors.iter().all(|c| *c == expected));
}

#[test]
fn camera_clamp_and_resync_cycle() {
    let mut chart = Chart3D::new();
    chart.camera_mut().set_azimuth(200.0);
    assert_eq!(chart.camera().azimuth(), 180.0);
    assert!(chart.camera().resync());
    chart.update();
    assert!(!chart.camera().resync());
}

#[test]
fn aggregate_bounds_track_membership() {
    let a = Series3D::points(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 1.0], Color::RED).expect("valid");
    let b = Series3D::points(&[-2.0], &[4.0], &[0.5], Color::BLUE).expect("valid");
    let c = Series3D::line(&[3.0, 5.0], &[-1.0, 0.0], &[2.0, 9.0], Color::GREEN).expect("valid");
    let all = [a.bounds(), b.bounds(), c.bounds()];

    let mut chart = Chart3D::new();
    let ids = [chart.attach(a), chart.attach(b), chart.attach(c)];
    let merged = all.iter().fold(Bounds3D::NONE, |acc, b| Bounds3D::merge(acc, *b));
    assert_eq!(chart.bounds(), merged);

    let detached = chart.detach(ids[1]).expect("attached");
    assert!(detached.parent().is_none());
    assert_eq!(chart.bounds(), Bounds3D::merge(all[0], all[2]));

    chart.detach(ids[0]).expect("attached");
    assert_eq!(chart.bounds(), all[2]);

    chart.attach(detached);
    assert_eq!(chart.bounds(), Bounds3D::merge(all[2], all[1]));
}

#[test]
fn surface_draws_one_mesh_between_frame_and_colorbar() {
    let chart = Chart3D::builder()
        .series(gpui_orbitplot::demo::sinc_surface().expect("valid grid"))
        .build();
    let list = chart.render();
    let meshes: Vec<usize> = list
        .commands()
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, RenderCommand::Mesh { .. }))
        .map(|(i, _)| i)
        .collect();
    // Surface first, colorbar strip second.
    assert_eq!(meshes.len(), 2);
    assert!(matches!(list.commands()[0], RenderCommand::LineSegments { .. }));
    match &list.commands()[meshes[0]] {
        RenderCommand::Mesh { indices, .. } => assert_eq!(indices.len(), 30 * 30 * 6),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn shared_chart_replays_into_recording() {
    let shared = SharedChart::new(Chart2D::new());
    shared.write(|chart| {
        chart.attach(Series2D::points(&[1.0, 2.0], &[3.0, 4.0], Color::BLACK).expect("valid"));
    });
    let recorded = shared.render();
    let mut replayed = gpui_orbitplot::RenderList::new();
    recorded.replay(&mut replayed);
    assert_eq!(recorded.commands(), replayed.commands());
}
