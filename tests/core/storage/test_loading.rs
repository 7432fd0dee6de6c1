// Loading documents through Services

use crate::common::{
    assert_valid_stats, create_test_services, create_test_services_with_window, LectureFile,
};
use studymate::core::StudyError;

#[tokio::test]
async fn test_load_document_sets_current_store() {
    let services = create_test_services();
    let lecture = LectureFile::os_lecture();

    let stats = services.load_document(lecture.path()).await.unwrap();
    assert_valid_stats(&stats);

    let store = services.require_store().unwrap();
    assert_eq!(store.source(), "lecture.txt");
    assert_eq!(store.chunks().len(), stats.chunks_created);
}

#[tokio::test]
async fn test_require_store_without_document() {
    let services = create_test_services();
    let err = services.require_store().unwrap_err();
    assert!(err.is_empty_input());
}

#[tokio::test]
async fn test_loading_second_document_replaces_first() {
    let services = create_test_services_with_window(20, 5);
    let lecture = LectureFile::os_lecture();
    let second = lecture.add_file("heaps.md", "A binary heap keeps the minimum at the root.");

    services.load_document(lecture.path()).await.unwrap();
    services.load_document(&second).await.unwrap();

    let store = services.require_store().unwrap();
    assert_eq!(store.source(), "heaps.md");
    assert_eq!(store.chunks().len(), 1);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_document() {
    let services = create_test_services();
    let lecture = LectureFile::os_lecture();
    let blank = lecture.add_file("blank.txt", "   \n ");
    let unsupported = lecture.add_file("slides.key", "keynote");

    services.load_document(lecture.path()).await.unwrap();

    let err = services.load_document(&blank).await.unwrap_err();
    assert!(matches!(err, StudyError::EmptyDocument(_)));

    let err = services.load_document(&unsupported).await.unwrap_err();
    assert!(matches!(err, StudyError::UnsupportedDocument(_)));

    let err = services
        .load_document(&lecture.dir.path().join("missing.pdf"))
        .await
        .unwrap_err();
    assert!(matches!(err, StudyError::IoError(_)));

    assert_eq!(services.require_store().unwrap().source(), "lecture.txt");
}

#[tokio::test]
async fn test_concurrent_readers_see_complete_stores() {
    let services = create_test_services_with_window(5, 1);
    let lecture = LectureFile::os_lecture();
    let other = lecture.add_file("other.txt", &crate::common::numbered_words(60));
    services.load_document(lecture.path()).await.unwrap();

    let reader = {
        let session = services.session.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let store = session.current().unwrap();
                assert_eq!(store.chunks().len(), store.index().len());
                tokio::task::yield_now().await;
            }
        })
    };

    for _ in 0..5 {
        services.load_document(&other).await.unwrap();
        services.load_document(lecture.path()).await.unwrap();
    }

    reader.await.unwrap();
}
