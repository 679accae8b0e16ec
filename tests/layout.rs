use component_kit::domain::{ComponentKind, Gravity, PixelScale, Point, Rect};
use component_kit::layout::{adjust_for_gravity, layout_vertical, Measurable};
use component_kit::render::{measure_text, Primitive, Renderer, TextStyle};
use component_kit::{initialize, Config, Pipeline};
use serde_json::json;
use std::io::Write;

fn column(width: f64) -> Rect {
    Rect::unbounded(Point::ORIGIN, width)
}

#[test]
fn single_label_fills_the_width_at_its_line_height() {
    let pipeline = Pipeline::default();
    let root = pipeline
        .parse(&json!({"type": "stack_view", "content": {"items": [
            {"type": "label", "content": {"text": "Hi"}}
        ]}}))
        .unwrap();
    let ComponentKind::StackView(stack) = root.kind() else {
        panic!("expected a stack, got {root:?}");
    };

    let renderer = pipeline.renderer();
    let label = stack.items[0].as_label().unwrap();
    let expected = measure_text("Hi", &TextStyle::of_label(label), 300.0, renderer.theme()).size.height;

    let views: Vec<_> = stack.items.iter().map(|item| renderer.view(item)).collect();
    let frames = layout_vertical(&views, column(300.0), renderer.scale());
    assert_eq!(frames, vec![Rect::new(0.0, 0.0, 300.0, expected.ceil())]);
}

#[test]
fn collapsed_child_contributes_no_margin() {
    let pipeline = Pipeline::default();
    let labelled = |text: &str| {
        json!({"type": "label", "content": {"text": text, "layout": {"margin": {"top": 6, "bottom": 4}}}})
    };
    let root = pipeline
        .parse(&json!({"type": "stack_view", "content": {"items": [
            labelled("first"), labelled(""), labelled("third")
        ]}}))
        .unwrap();
    let ComponentKind::StackView(stack) = root.kind() else {
        panic!("expected a stack, got {root:?}");
    };

    let renderer = pipeline.renderer();
    let views: Vec<_> = stack.items.iter().map(|item| renderer.view(item)).collect();
    let frames = layout_vertical(&views, column(300.0), renderer.scale());

    let line = renderer.scale().ceil(views[0].measure(300.0).height);
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].height, 0.0);
    assert_eq!(frames[2].y, 6.0 + line + 4.0 + 6.0);

    let total = frames[2].max_y() + views[2].margin().bottom;
    assert_eq!(total, 2.0 * (line + 6.0 + 4.0));
}

#[test]
fn middle_gravity_centers_the_block() {
    let frames = [Rect::new(0.0, 10.0, 100.0, 20.0), Rect::new(0.0, 30.0, 100.0, 20.0)];
    let moved = adjust_for_gravity(&frames, Gravity::Middle, Rect::new(0.0, 0.0, 100.0, 100.0));

    assert_eq!(moved[0].y, 35.0);
    assert_eq!(moved[1].max_y() - moved[0].min_y(), 40.0);
}

#[test]
fn bottom_gravity_pins_the_last_frame() {
    let frames = [Rect::new(0.0, 0.0, 10.0, 30.0)];
    let moved = adjust_for_gravity(&frames, Gravity::Bottom, Rect::new(0.0, 0.0, 10.0, 100.0));
    assert_eq!(moved[0].max_y(), 100.0);
}

#[test]
#[should_panic(expected = "non-negative width")]
fn negative_width_is_a_programming_error() {
    let pipeline = Pipeline::default();
    let root = pipeline
        .parse(&json!({"type": "label", "content": {"text": "x"}}))
        .unwrap();
    let _ = pipeline.layout(&root, -1.0);
}

#[test]
fn layout_is_deterministic() {
    let pipeline = Pipeline::default();
    let root = pipeline
        .parse(&json!({"type": "tableView", "content": {"sections": [
            {"header": {"type": "label", "content": {"text": "Header"}},
             "rows": [{"type": "basic_list_item", "content": {
                "title": {"type": "label", "content": {"text": "Row title that wraps a little"}},
                "value": {"type": "label", "content": {"text": "$9"}}
             }}]}
        ]}}))
        .unwrap();

    assert_eq!(pipeline.render(&root, 250.0), pipeline.render(&root, 250.0));
    assert_eq!(pipeline.layout(&root, 250.0), pipeline.layout(&root, 250.0));
}

#[test]
fn render_finds_components_by_id() {
    let pipeline = Pipeline::default();
    let list = pipeline
        .render_json(
            r#"{"type": "stack_view", "content": {"items": [
                {"type": "label", "content": {"id": "title", "text": "Welcome"}},
                {"type": "button", "content": {"id": "cta", "title": "Continue",
                    "action": {"type": "next"}}}
            ]}}"#,
            320.0,
        )
        .unwrap();

    let title = list.frame_of("title").unwrap();
    let cta = list.frame_of("cta").unwrap();
    assert!(cta.y >= title.max_y());

    let hit = list.hit_test(cta.x + 1.0, cta.y + 1.0).unwrap();
    let Primitive::Hit { action, .. } = &hit.primitive else {
        panic!("expected a hit region, got {hit:?}");
    };
    assert_eq!(action.as_ref().and_then(|a| a.action_type()), Some("next"));
    assert!(list.texts().any(|(text, _)| text == "Continue"));
}

#[test]
fn display_scale_rounds_to_device_pixels() {
    let renderer = Renderer::new(Default::default(), PixelScale::new(3.0));
    let pipeline = Pipeline::new(Default::default(), renderer);
    let root = pipeline
        .parse(&json!({"type": "label", "content": {"text": "x", "size": 13}}))
        .unwrap();

    let height = pipeline.layout(&root, 100.0).frames[0].height;
    let pixels = height * 3.0;
    assert!((pixels - pixels.round()).abs() < 1e-9);
}

#[test]
fn config_file_selects_theme_and_depth() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_depth = 2\ntheme = \"compact\"\ndisplay_scale = 2.0").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let pipeline = initialize(&config);
    assert_eq!(pipeline.renderer().theme().name, "compact");
    assert_eq!(pipeline.renderer().scale(), PixelScale::new(2.0));

    let nested = json!({"type": "scrollView", "content": {"root":
        {"type": "scrollView", "content": {"root": {"type": "label", "content": {"text": "deep"}}}}}});
    assert!(pipeline.parse(&nested).is_none());
}

#[test]
fn compact_theme_shrinks_buttons() {
    let default = Pipeline::default();
    let compact = initialize(&Config {
        theme_name: Some("compact".to_string()),
        ..Config::default()
    });
    let root = default
        .parse(&json!({"type": "button", "content": {"title": "Continue"}}))
        .unwrap();

    assert!(compact.layout(&root, 320.0).max_y < default.layout(&root, 320.0).max_y);
}

#[test]
fn huge_weights_from_a_payload_render_even_columns() {
    let pipeline = Pipeline::default();
    let weighted = |id: &str| {
        json!({"type": "label", "content": {"id": id, "text": id, "layout": {"weight": i64::MAX, "align": "fill"}}})
    };
    let root = pipeline
        .parse(&json!({"type": "stack_view", "content": {
            "direction": "horizontal",
            "items": [weighted("left"), weighted("right")]
        }}))
        .unwrap();

    let list = pipeline.render(&root, 300.0);
    let left = list.frame_of("left").unwrap();
    let right = list.frame_of("right").unwrap();
    assert_eq!(left.width, 150.0);
    assert_eq!(right.x, 150.0);
    assert_eq!(right.width, 150.0);
}
