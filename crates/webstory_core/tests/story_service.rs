use webstory_core::db::open_db_in_memory;
use webstory_core::service::story_service::{StoryService, StoryServiceError};
use webstory_core::{latest_version, SqliteStoryRepository, StoryListQuery};

#[test]
fn created_story_can_be_opened_and_listed() {
    let conn = open_db_in_memory().unwrap();
    let service = StoryService::new(SqliteStoryRepository::new(&conn));

    let (id, story) = service.create_story("Product teaser").unwrap();
    assert_eq!(story.version, latest_version());

    let opened = service.open_story(id).unwrap();
    assert_eq!(opened, story);

    let records = service.list_stories(&StoryListQuery::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Product teaser");
}

#[test]
fn trashed_story_cannot_be_opened() {
    let conn = open_db_in_memory().unwrap();
    let service = StoryService::new(SqliteStoryRepository::new(&conn));

    let (id, _) = service.create_story("Short lived").unwrap();
    service.trash_story(id).unwrap();

    match service.open_story(id).unwrap_err() {
        StoryServiceError::StoryNotFound(missing) => assert_eq!(missing, id),
        other => panic!("unexpected error: {other}"),
    }

    service.restore_story(id).unwrap();
    assert!(service.open_story(id).is_ok());
}

#[test]
fn edits_survive_a_save_and_reopen_cycle() {
    let conn = open_db_in_memory().unwrap();
    let service = StoryService::new(SqliteStoryRepository::new(&conn));

    let (id, mut story) = service.create_story("Draft").unwrap();
    story.excerpt = Some("A short teaser".to_string());
    story.default_page_duration = 5.0;
    service.save_story(id, &story).unwrap();

    let reopened = service.open_story(id).unwrap();
    assert_eq!(reopened.excerpt.as_deref(), Some("A short teaser"));
    assert_eq!(reopened.default_page_duration, 5.0);
}
