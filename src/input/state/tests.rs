use super::*;
use crate::cutout::CutoutRequest;
use crate::draw::BrushStyle;
use crate::host::{CanvasHost, Effect, LayerStore};
use crate::input::{CursorIcon, Modifiers, MouseButton, ToolMode};
use crate::layer::{Layer, LayerId, LayerPosition};
use crate::util::{LogicalPoint, ScreenPoint};

fn pt(x: f64, y: f64) -> ScreenPoint {
    ScreenPoint::new(x, y)
}

fn create_test_store(mode: ToolMode) -> LayerStore {
    LayerStore::new(
        vec![Layer::new("photo", "photo.png", 100.0, 100.0, 200.0, 200.0)],
        mode,
    )
}

fn photo() -> LayerId {
    LayerId::new("photo")
}

fn press(session: &mut CanvasSession, store: &mut LayerStore, x: f64, y: f64) {
    session.on_pointer_down(store, MouseButton::Left, pt(x, y), Modifiers::new());
}

#[test]
fn test_brush_stroke_on_selected_layer() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);
    store.select_layer(Some(&photo()));
    store.take_log();

    press(&mut session, &mut store, 150.0, 150.0);
    session.on_pointer_move(&mut store, pt(160.0, 150.0));
    session.on_pointer_move(&mut store, pt(170.0, 150.0));
    session.on_pointer_up(&mut store, pt(170.0, 150.0));

    assert_eq!(
        store.log(),
        &[Effect::Cutout {
            request: CutoutRequest::Brush {
                points: vec![
                    LogicalPoint::new(50.0, 50.0),
                    LogicalPoint::new(60.0, 50.0),
                    LogicalPoint::new(70.0, 50.0),
                ],
                stroke_width: 50.0,
            },
        }]
    );
    assert!(session.interaction().is_idle());
}

#[test]
fn test_diagonal_brush_stroke_is_layer_relative() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);
    store.select_layer(Some(&photo()));

    press(&mut session, &mut store, 150.0, 150.0);
    session.on_pointer_move(&mut store, pt(160.0, 160.0));
    session.on_pointer_move(&mut store, pt(170.0, 170.0));
    session.on_pointer_up(&mut store, pt(170.0, 170.0));

    assert_eq!(
        store.cutouts(),
        vec![&CutoutRequest::Brush {
            points: vec![
                LogicalPoint::new(50.0, 50.0),
                LogicalPoint::new(60.0, 60.0),
                LogicalPoint::new(70.0, 70.0),
            ],
            stroke_width: 50.0,
        }]
    );
}

#[test]
fn test_brush_press_selects_layer_under_pointer() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);

    press(&mut session, &mut store, 150.0, 150.0);

    assert_eq!(store.selected(), Some(&photo()));
    assert!(session.interaction().is_brushing());
}

#[test]
fn test_brush_width_shrinks_when_zoomed_in() {
    let mut session = CanvasSession::default();
    session.camera_mut().set_scale(2.0);
    let mut store = create_test_store(ToolMode::CutoutBrush);
    store.select_layer(Some(&photo()));

    press(&mut session, &mut store, 300.0, 300.0);
    session.on_pointer_move(&mut store, pt(320.0, 300.0));
    session.on_pointer_move(&mut store, pt(340.0, 300.0));
    session.on_pointer_up(&mut store, pt(340.0, 300.0));

    let cutouts = store.cutouts();
    assert_eq!(cutouts.len(), 1);
    match cutouts[0] {
        CutoutRequest::Brush {
            points,
            stroke_width,
        } => {
            assert_eq!(*stroke_width, 25.0);
            assert_eq!(points[0], LogicalPoint::new(50.0, 50.0));
            assert_eq!(points[2], LogicalPoint::new(70.0, 50.0));
        }
        other => panic!("expected brush cutout, got {other:?}"),
    }
}

#[test]
fn test_short_brush_stroke_is_discarded() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);
    store.select_layer(Some(&photo()));

    press(&mut session, &mut store, 150.0, 150.0);
    session.on_pointer_move(&mut store, pt(160.0, 150.0));
    // Closer than the minimum spacing; dropped
    session.on_pointer_move(&mut store, pt(162.0, 151.0));
    session.on_pointer_up(&mut store, pt(162.0, 151.0));

    assert!(store.cutouts().is_empty());
    assert!(session.interaction().is_idle());
}

#[test]
fn test_select_background_clears_selection() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Select);
    store.select_layer(Some(&photo()));
    store.take_log();

    press(&mut session, &mut store, 20.0, 20.0);

    assert_eq!(store.selected(), None);
    assert_eq!(store.log(), &[Effect::SelectLayer { id: None }]);
    assert!(session.interaction().is_idle());
}

#[test]
fn test_select_layer_drag_moves_layer() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Select);

    press(&mut session, &mut store, 150.0, 150.0);
    assert_eq!(store.selected(), Some(&photo()));
    assert!(session.interaction().is_dragging_layer());

    session.on_pointer_move(&mut store, pt(160.0, 170.0));
    session.on_pointer_move(&mut store, pt(165.0, 170.0));
    session.on_pointer_up(&mut store, pt(165.0, 170.0));

    let layer = store.layer(&photo()).unwrap();
    assert_eq!((layer.x, layer.y), (115.0, 120.0));
    assert!(session.interaction().is_idle());
}

#[test]
fn test_layer_drag_is_scaled_by_zoom() {
    let mut session = CanvasSession::default();
    session.camera_mut().set_scale(2.0);
    let mut store = create_test_store(ToolMode::Select);

    // Logical (125, 125), inside the layer
    press(&mut session, &mut store, 250.0, 250.0);
    session.on_pointer_move(&mut store, pt(270.0, 250.0));

    assert!(store.log().contains(&Effect::UpdateLayer {
        id: photo(),
        position: LayerPosition { x: 110.0, y: 100.0 },
    }));
}

#[test]
fn test_hand_tool_pans_without_moving_layer() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Hand);

    press(&mut session, &mut store, 150.0, 150.0);
    assert!(session.interaction().is_panning());
    session.on_pointer_move(&mut store, pt(180.0, 140.0));
    session.on_pointer_up(&mut store, pt(180.0, 140.0));

    assert_eq!(session.camera().offset(), (30.0, -10.0));
    let layer = store.layer(&photo()).unwrap();
    assert_eq!((layer.x, layer.y), (100.0, 100.0));
    assert!(store.log().is_empty());
}

#[test]
fn test_middle_button_and_shift_pan_over_layer() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Select);

    session.on_pointer_down(
        &mut store,
        MouseButton::Middle,
        pt(150.0, 150.0),
        Modifiers::new(),
    );
    assert!(session.interaction().is_panning());
    session.on_pointer_up(&mut store, pt(150.0, 150.0));

    session.on_pointer_down(
        &mut store,
        MouseButton::Left,
        pt(150.0, 150.0),
        Modifiers::shift(),
    );
    assert!(session.interaction().is_panning());
    assert!(store.log().is_empty());
}

#[test]
fn test_click_cutout_on_layer_dispatches_once() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutClick);

    press(&mut session, &mut store, 150.0, 160.0);
    session.on_pointer_up(&mut store, pt(150.0, 160.0));

    assert_eq!(store.selected(), Some(&photo()));
    assert_eq!(
        store.cutouts(),
        vec![&CutoutRequest::Click {
            point: LogicalPoint::new(150.0, 160.0)
        }]
    );
    assert!(session.interaction().is_idle());
}

#[test]
fn test_click_cutout_on_background_dispatches_on_release() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutClick);

    press(&mut session, &mut store, 20.0, 20.0);
    assert_eq!(session.interaction(), &Interaction::ClickPending);
    assert!(store.cutouts().is_empty());

    session.on_pointer_up(&mut store, pt(30.0, 40.0));
    assert_eq!(
        store.cutouts(),
        vec![&CutoutRequest::Click {
            point: LogicalPoint::new(30.0, 40.0)
        }]
    );
}

#[test]
fn test_release_without_press_emits_nothing() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutClick);

    session.on_pointer_up(&mut store, pt(150.0, 150.0));
    session.on_pointer_leave(&mut store, pt(150.0, 150.0));

    assert!(store.log().is_empty());
    assert!(session.interaction().is_idle());
}

#[test]
fn test_leave_ends_gesture_and_is_idempotent() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Hand);

    press(&mut session, &mut store, 10.0, 10.0);
    session.on_pointer_move(&mut store, pt(20.0, 10.0));
    session.on_pointer_leave(&mut store, pt(20.0, 10.0));
    assert!(session.interaction().is_idle());

    session.on_pointer_leave(&mut store, pt(20.0, 10.0));
    session.on_pointer_move(&mut store, pt(90.0, 90.0));
    assert!(session.interaction().is_idle());
    assert_eq!(session.camera().offset(), (10.0, 0.0));
}

#[test]
fn test_leave_while_brushing_finalizes_stroke() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);

    press(&mut session, &mut store, 150.0, 150.0);
    session.on_pointer_move(&mut store, pt(160.0, 150.0));
    session.on_pointer_move(&mut store, pt(170.0, 150.0));
    session.on_pointer_leave(&mut store, pt(400.0, 150.0));

    assert_eq!(store.cutouts().len(), 1);
    assert_eq!(session.brush_cursor(ToolMode::CutoutBrush), None);
}

#[test]
fn test_press_during_gesture_abandons_it() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);

    press(&mut session, &mut store, 150.0, 150.0);
    session.on_pointer_move(&mut store, pt(160.0, 150.0));
    session.on_pointer_move(&mut store, pt(170.0, 150.0));
    press(&mut session, &mut store, 200.0, 200.0);

    assert!(store.cutouts().is_empty());
    assert_eq!(session.brush_path().map(|path| path.len()), Some(1));
}

#[test]
fn test_motion_while_idle_changes_nothing() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Select);

    session.on_pointer_move(&mut store, pt(150.0, 150.0));

    assert!(store.log().is_empty());
    assert_eq!(session.camera().offset(), (0.0, 0.0));
}

#[test]
fn test_ctrl_wheel_zooms_and_clamps() {
    let mut session = CanvasSession::default();

    session.on_wheel(0.0, 100.0, Modifiers::ctrl());
    assert!((session.camera().scale() - 0.9).abs() < 1e-9);

    session.on_wheel(0.0, -10000.0, Modifiers::ctrl());
    assert_eq!(session.camera().scale(), 5.0);

    let meta = Modifiers {
        meta: true,
        ..Modifiers::default()
    };
    session.on_wheel(0.0, 10000.0, meta);
    assert_eq!(session.camera().scale(), 0.1);
    assert_eq!(session.camera().offset(), (0.0, 0.0));
}

#[test]
fn test_plain_wheel_scrolls() {
    let mut session = CanvasSession::default();

    session.on_wheel(10.0, 20.0, Modifiers::new());

    assert_eq!(session.camera().offset(), (-10.0, -20.0));
    assert_eq!(session.camera().scale(), 1.0);
}

#[test]
fn test_viewport_origin_is_subtracted() {
    let mut session = CanvasSession::default();
    session.set_viewport_origin(50.0, 20.0);
    let mut store = create_test_store(ToolMode::CutoutClick);

    assert_eq!(
        session.to_logical(pt(150.0, 120.0)),
        LogicalPoint::new(100.0, 100.0)
    );

    // Client (120, 90) is viewport (70, 70), on the background
    press(&mut session, &mut store, 120.0, 90.0);
    assert_eq!(session.interaction(), &Interaction::ClickPending);
}

#[test]
fn test_cursor_icon_follows_tool_and_gesture() {
    let mut session = CanvasSession::default();
    assert_eq!(session.cursor_icon(ToolMode::Select), CursorIcon::Default);
    assert_eq!(session.cursor_icon(ToolMode::Hand), CursorIcon::Grab);
    assert_eq!(
        session.cursor_icon(ToolMode::CutoutClick),
        CursorIcon::Crosshair
    );
    assert_eq!(session.cursor_icon(ToolMode::CutoutBrush), CursorIcon::Hidden);

    let mut store = create_test_store(ToolMode::Select);
    session.on_pointer_down(
        &mut store,
        MouseButton::Middle,
        pt(10.0, 10.0),
        Modifiers::new(),
    );
    assert_eq!(session.cursor_icon(ToolMode::Select), CursorIcon::Grab);
}

#[test]
fn test_brush_cursor_tracks_pointer_in_brush_mode() {
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);
    assert_eq!(session.brush_cursor(ToolMode::CutoutBrush), None);

    session.on_pointer_move(&mut store, pt(42.0, 24.0));
    assert_eq!(
        session.brush_cursor(ToolMode::CutoutBrush),
        Some(pt(42.0, 24.0))
    );
    assert_eq!(session.brush_cursor(ToolMode::Select), None);
}

#[test]
fn test_menu_anchor_tracks_selected_layer() {
    let mut session = CanvasSession::default();
    session.camera_mut().set_scale(2.0);
    session.camera_mut().pan(10.0, 20.0);
    session.set_viewport_origin(5.0, 5.0);
    let mut store = create_test_store(ToolMode::Select);
    assert_eq!(session.menu_anchor(&store.view()), None);

    store.select_layer(Some(&photo()));
    assert_eq!(session.menu_anchor(&store.view()), Some(pt(615.0, 225.0)));

    store.set_mode(ToolMode::Hand);
    assert_eq!(session.menu_anchor(&store.view()), None);
}

#[test]
fn test_layer_action_reaches_host() {
    let session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::Select);

    session.on_layer_action(&mut store, "delete", &photo());

    assert!(store.layers().is_empty());
    assert_eq!(
        store.log(),
        &[Effect::LayerAction {
            action: "delete".to_string(),
            id: photo(),
        }]
    );
}

#[test]
fn test_brush_preview_renders_only_while_brushing() {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 64, 64).unwrap();
    let ctx = cairo::Context::new(&surface).unwrap();
    let style = BrushStyle::default();
    let mut session = CanvasSession::default();
    let mut store = create_test_store(ToolMode::CutoutBrush);

    assert!(!session.render_brush_preview(&ctx, &style));
    assert!(!session.render_brush_cursor(&ctx, ToolMode::CutoutBrush, &style));

    press(&mut session, &mut store, 10.0, 10.0);
    session.on_pointer_move(&mut store, pt(30.0, 10.0));

    assert!(session.render_brush_preview(&ctx, &style));
    assert!(session.render_brush_cursor(&ctx, ToolMode::CutoutBrush, &style));
    assert!(!session.render_brush_cursor(&ctx, ToolMode::Select, &style));
}

#[test]
fn test_settings_from_config() {
    let mut config = crate::config::Config::default();
    config.camera.zoom_sensitivity = 0.002;
    config.brush.stroke_width = 80.0;

    let settings = SessionSettings::from(&config);
    assert_eq!(settings.zoom_sensitivity, 0.002);
    assert_eq!(settings.brush_width, 80.0);
}
