// Ingestion pipeline: files in, stores out

use crate::common::{assert_valid_stats, LectureFile, OS_LECTURE};
use studymate::core::indexer::{source_label, IngestionPipeline};
use studymate::core::StudyError;

fn pipeline() -> IngestionPipeline {
    IngestionPipeline::new(800, 200, 1).unwrap()
}

#[test]
fn test_ingest_text_file() {
    let lecture = LectureFile::os_lecture();
    let (store, stats) = pipeline().ingest_file(lecture.path()).unwrap();

    assert_valid_stats(&stats);
    assert_eq!(stats.source, "lecture.txt");
    assert_eq!(stats.words, OS_LECTURE.split_whitespace().count());
    assert_eq!(stats.chunks_created, 1);
    assert_eq!(store.source(), "lecture.txt");
    assert_eq!(stats.vocabulary_size, store.index().vocabulary_size());
}

#[test]
fn test_ingest_markdown_file() {
    let lecture = LectureFile::with_content(
        "notes.md",
        "# Heaps\n\nA binary heap keeps the smallest key at the root.\n\n- insert\n- extract-min\n",
    );
    let (store, stats) = pipeline().ingest_file(lecture.path()).unwrap();

    assert_valid_stats(&stats);
    assert!(store.raw_text().contains("binary heap"));
}

#[test]
fn test_multi_chunk_document() {
    let lecture = LectureFile::numbered(2000);
    let (store, stats) = pipeline().ingest_file(lecture.path()).unwrap();

    // 0..800, 600..1400, 1200..2000
    assert_eq!(stats.chunks_created, 3);
    assert_eq!(store.chunks()[2].end_word, 2000);
}

#[test]
fn test_empty_file_is_rejected() {
    let lecture = LectureFile::with_content("empty.txt", "");
    let err = pipeline().ingest_file(lecture.path()).unwrap_err();
    assert!(matches!(err, StudyError::EmptyDocument(_)), "got {err:?}");
}

#[test]
fn test_whitespace_file_is_rejected() {
    let lecture = LectureFile::with_content("blank.md", "  \n\n\t  \r\n");
    let err = pipeline().ingest_file(lecture.path()).unwrap_err();
    assert!(err.is_empty_input());
}

#[test]
fn test_unsupported_extension() {
    let lecture = LectureFile::with_content("slides.pptx", "not really slides");
    let err = pipeline().ingest_file(lecture.path()).unwrap_err();
    assert!(matches!(err, StudyError::UnsupportedDocument(_)), "got {err:?}");
}

#[test]
fn test_corrupt_pdf_fails_extraction() {
    let lecture = LectureFile::with_bytes("broken.pdf", b"%PDF-1.4\nthis is not a pdf body");
    let err = pipeline().ingest_file(lecture.path()).unwrap_err();
    assert!(matches!(err, StudyError::ExtractionFailed(_)), "got {err:?}");
}

#[test]
fn test_oversized_file_is_rejected() {
    let big = "word ".repeat(250_000); // 1.25 MB
    let lecture = LectureFile::with_content("big.txt", &big);
    let err = pipeline().ingest_file(lecture.path()).unwrap_err();
    assert!(matches!(err, StudyError::UnsupportedDocument(_)), "got {err:?}");
}

#[test]
fn test_missing_file_is_io_error() {
    let lecture = LectureFile::os_lecture();
    let missing = lecture.dir.path().join("nope.txt");
    let err = pipeline().ingest_file(&missing).unwrap_err();
    assert!(matches!(err, StudyError::IoError(_)), "got {err:?}");
}

#[test]
fn test_source_label_uses_file_name() {
    let lecture = LectureFile::with_content("week 3.md", "Graphs and trees.");
    assert_eq!(source_label(lecture.path()), "week 3.md");
}
