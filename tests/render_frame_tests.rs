use tornado_rs::core::Viewport;
use tornado_rs::render::{
    Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};
use tornado_rs::{TornadoError, telemetry};

#[test]
fn null_renderer_counts_primitives() {
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame.rects.push(
        RectPrimitive::new(10.0, 10.0, 40.0, 20.0, Color::PURPLE).with_rotation(180.0, 20.0, 10.0),
    );
    frame
        .lines
        .push(LinePrimitive::new(50.0, 0.0, 50.0, 100.0, 1.0, Color::GRAY));
    frame.texts.push(
        TextPrimitive::new("North", 45.0, 20.0, 12.0, Color::GRAY, TextHAlign::Right)
            .with_title("North region"),
    );

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(renderer.last_frame, Some(frame));
}

#[test]
fn empty_frame_on_zero_viewport_is_accepted() {
    let frame = RenderFrame::new(Viewport::new(0, 0));
    assert!(frame.is_empty());
    assert!(frame.validate().is_ok());
}

#[test]
fn drawing_into_zero_viewport_is_rejected() {
    let mut frame = RenderFrame::new(Viewport::new(0, 0));
    frame
        .rects
        .push(RectPrimitive::new(0.0, 0.0, 1.0, 1.0, Color::BLACK));
    assert!(matches!(
        frame.validate(),
        Err(TornadoError::InvalidViewport { .. })
    ));
}

#[test]
fn malformed_primitives_are_rejected() {
    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame.texts.push(TextPrimitive::new(
        "",
        0.0,
        0.0,
        12.0,
        Color::BLACK,
        TextHAlign::Left,
    ));
    assert!(matches!(frame.validate(), Err(TornadoError::InvalidData(_))));

    let mut frame = RenderFrame::new(Viewport::new(200, 100));
    frame
        .rects
        .push(RectPrimitive::new(0.0, f64::NAN, 1.0, 1.0, Color::BLACK));
    assert!(frame.validate().is_err());

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.render_count, 0);
}

#[test]
fn opacity_scales_alpha() {
    let dimmed = Color::TEAL.with_opacity(0.4);
    assert_eq!(dimmed.alpha, 0.4);
    assert_eq!(dimmed.green, Color::TEAL.green);
    assert_eq!(Color::TEAL.with_opacity(3.0).alpha, 1.0);
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_helpers_are_inert_without_the_feature() {
    assert!(!telemetry::init_default_tracing());
    assert!(!telemetry::init_tracing_with_filter("tornado_rs=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_installs_once() {
    assert!(telemetry::init_tracing_with_filter("tornado_rs=trace"));
    assert!(!telemetry::init_default_tracing());
}
