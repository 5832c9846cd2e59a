//! Tests for TreeService

use std::sync::Arc;

use serde_json::json;

use bstree::application::services::TreeService;
use bstree::application::ApplicationError;
use bstree::domain::DomainError;
use bstree::infrastructure::store::InMemoryStore;
use bstree::util::testing;

fn service_with_store(pretty: bool) -> (TreeService, Arc<InMemoryStore>) {
    testing::init_test_setup();
    let store = Arc::new(InMemoryStore::new());
    (TreeService::new(store.clone(), pretty), store)
}

#[test]
fn given_valid_input_when_building_and_saving_then_record_is_stored() {
    // Arrange
    let (service, store) = service_with_store(false);

    // Act
    let output = service.build_and_save(Some("7, 3, 9, 1, 4")).unwrap();

    // Assert
    assert_eq!(output.numbers, vec![7, 3, 9, 1, 4]);
    assert_eq!(
        output.tree_json,
        r#"{"value":7,"left":{"value":3,"left":{"value":1},"right":{"value":4}},"right":{"value":9}}"#
    );
    let record = output.record.expect("stored record");
    assert_eq!(record.id, 1);
    assert_eq!(record.input_numbers, "[7, 3, 9, 1, 4]");
    assert_eq!(record.tree_json, output.tree_json);
    assert_eq!(store.len(), 1);
}

#[test]
fn given_duplicates_when_saving_then_input_text_keeps_them() {
    // Arrange
    let (service, _store) = service_with_store(false);

    // Act
    let output = service.build_and_save(Some("5 3 5 7 3 5")).unwrap();

    // Assert
    assert_eq!(output.tree.len(), 3);
    assert_eq!(
        output.record.unwrap().input_numbers,
        "[5, 3, 5, 7, 3, 5]"
    );
}

#[test]
fn given_malformed_input_when_building_and_saving_then_nothing_is_stored() {
    // Arrange
    let (service, store) = service_with_store(false);

    // Act
    let result = service.build_and_save(Some("1, 2, abc, 4"));

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::MalformedInput { .. }))
    ));
    assert!(store.is_empty());
}

#[test]
fn given_empty_input_when_building_and_saving_then_nothing_is_stored() {
    // Arrange
    let (service, store) = service_with_store(false);

    // Act
    let absent = service.build_and_save(None);
    let blank = service.build_and_save(Some("  "));

    // Assert
    assert!(matches!(
        absent,
        Err(ApplicationError::Domain(DomainError::EmptyInput))
    ));
    assert!(matches!(
        blank,
        Err(ApplicationError::Domain(DomainError::EmptyInput))
    ));
    assert!(store.is_empty());
}

#[test]
fn given_input_when_building_then_document_returned_without_storing() {
    // Arrange
    let (service, store) = service_with_store(true);

    // Act
    let document = service.build(Some("1 2")).unwrap();

    // Assert
    assert_eq!(document, json!({"value": 1, "right": {"value": 2}}));
    assert!(store.is_empty());
}

#[test]
fn given_pretty_setting_when_preparing_then_json_is_pretty() {
    // Arrange
    let (service, store) = service_with_store(true);

    // Act
    let output = service.prepare(Some("2,1,3")).unwrap();

    // Assert
    assert!(output.tree_json.contains('\n'));
    assert!(output.record.is_none());
    assert!(store.is_empty());
}

#[test]
fn given_several_builds_when_listing_history_then_most_recent_first() {
    // Arrange
    let (service, _store) = service_with_store(false);
    service.build_and_save(Some("1")).unwrap();
    service.build_and_save(Some("2")).unwrap();
    service.build_and_save(Some("3")).unwrap();

    // Act
    let history = service.history().unwrap();

    // Assert
    let ids: Vec<u64> = history.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert!(history
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[test]
fn given_stored_record_when_getting_by_id_then_found() {
    // Arrange
    let (service, _store) = service_with_store(false);
    let saved = service.build_and_save(Some("4 2 6")).unwrap();
    let id = saved.record.unwrap().id;

    // Act
    let record = service.get(id).unwrap();

    // Assert
    assert_eq!(record.input_numbers, "[4, 2, 6]");
    assert_eq!(service.rebuild(&record).unwrap(), saved.tree);
}

#[test]
fn given_unknown_id_when_getting_then_record_not_found() {
    // Arrange
    let (service, _store) = service_with_store(false);

    // Act
    let result = service.get(42);

    // Assert
    assert!(matches!(result, Err(ApplicationError::RecordNotFound(42))));
}

#[test]
fn given_input_when_parsing_then_sequence_returned() {
    // Arrange
    let (service, _store) = service_with_store(false);

    // Act / Assert
    assert_eq!(service.parse(Some("7 3 9")).unwrap(), vec![7, 3, 9]);
}
