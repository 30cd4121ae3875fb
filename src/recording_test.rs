use super::*;

#[test]
fn records_calls_in_order() {
    let mut s = RecordingSurface::new();
    s.begin_path();
    s.move_to(1.0, 2.0);
    s.line_to(3.0, 4.0);
    s.stroke();

    assert_eq!(
        s.commands(),
        &[
            DrawCommand::BeginPath,
            DrawCommand::MoveTo { x: 1.0, y: 2.0 },
            DrawCommand::LineTo { x: 3.0, y: 4.0 },
            DrawCommand::Stroke,
        ]
    );
}

#[test]
fn texts_collects_fill_text_only() {
    let mut s = RecordingSurface::new();
    s.fill_text("a", 0.0, 0.0);
    s.stroke();
    s.fill_text("b", 1.0, 1.0);
    assert_eq!(s.texts(), vec!["a", "b"]);
}

#[test]
fn count_filters_by_predicate() {
    let mut s = RecordingSurface::new();
    s.stroke();
    s.fill();
    s.stroke();
    assert_eq!(s.count(|c| matches!(c, DrawCommand::Stroke)), 2);
}

#[test]
fn clear_empties_log() {
    let mut s = RecordingSurface::new();
    s.fill();
    s.clear();
    assert!(s.commands().is_empty());
}

#[test]
fn to_json_tags_each_op() {
    let mut s = RecordingSurface::new();
    s.set_text_align(TextAlign::Center);
    s.fill_text("P1(15|15)", 330.5, 490.0);

    let json = s.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["op"], "set_text_align");
    assert_eq!(value[0]["align"], "center");
    assert_eq!(value[1]["op"], "fill_text");
    assert_eq!(value[1]["text"], "P1(15|15)");
}

#[test]
fn serialize_error_is_not_reported_as_config() {
    let err = GridError::Serialize("bad float".into());
    assert_eq!(err.to_string(), "serialization error: bad float");
    assert!(!matches!(err, GridError::Config(_)));
}
