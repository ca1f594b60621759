use serde_json::json;
use webstory_core::model::element::{Element, ElementKind};
use webstory_core::{latest_version, Story};

#[test]
fn new_story_serializes_with_camel_case_schema_keys() {
    let story = Story::new("Launch day");
    let json = serde_json::to_value(&story).unwrap();

    assert_eq!(json["version"], latest_version());
    assert_eq!(json["title"], "Launch day");
    assert_eq!(json["autoAdvance"], true);
    assert_eq!(json["defaultPageDuration"], 7.0);

    let element = &json["pages"][0]["elements"][0];
    assert_eq!(element["type"], "shape");
    assert_eq!(element["isBackground"], true);
    assert_eq!(element["isDefaultBackground"], true);
    assert_eq!(element["rotationAngle"], 0.0);
    assert_eq!(element["mask"], json!({"type": "rectangle"}));
}

#[test]
fn story_round_trips_through_json() {
    let story = Story::new("Round trip");
    let json = serde_json::to_value(&story).unwrap();
    let back: Story = serde_json::from_value(json).unwrap();
    assert_eq!(back, story);
}

#[test]
fn current_schema_document_deserializes_into_variants() {
    let story: Story = serde_json::from_value(json!({
        "version": latest_version(),
        "pages": [{
            "id": "p1",
            "backgroundColor": {"color": {"r": 255, "g": 255, "b": 255}},
            "elements": [
                {"id": "e1", "type": "text", "content": "Title", "x": 10, "y": 10,
                 "width": 200, "height": 50, "rotationAngle": 0},
                {"id": "e2", "type": "video", "x": 0, "y": 0, "width": 308, "height": 462,
                 "rotationAngle": 0, "loop": true,
                 "resource": {"type": "video", "src": "https://cdn.example.com/a.mp4", "id": 7},
                 "tracks": [{"track": "https://cdn.example.com/captions.vtt", "kind": "captions"}]},
                {"id": "e3", "type": "sticker", "x": 5, "y": 5, "width": 40, "height": 40,
                 "rotationAngle": 15, "sticker": {"type": "confetti"}},
            ],
        }],
    }))
    .unwrap();

    let elements = &story.pages[0].elements;
    assert!(matches!(elements[0].kind, ElementKind::Text(_)));
    match &elements[1].kind {
        ElementKind::Video(video) => {
            assert_eq!(video.resource.src, "https://cdn.example.com/a.mp4");
            assert_eq!(video.resource.id, Some(7));
            assert_eq!(video.r#loop, Some(true));
            assert_eq!(video.tracks.len(), 1);
        }
        other => panic!("expected video element, got {other:?}"),
    }
    match &elements[2].kind {
        ElementKind::Sticker(sticker) => assert_eq!(sticker.sticker.kind, "confetti"),
        other => panic!("expected sticker element, got {other:?}"),
    }
}

#[test]
fn unknown_element_type_fails_typed_deserialization() {
    let result: Result<Element, _> = serde_json::from_value(json!({
        "id": "e1",
        "type": "carousel",
        "x": 0, "y": 0, "width": 10, "height": 10, "rotationAngle": 0,
    }));
    assert!(result.is_err());
}
