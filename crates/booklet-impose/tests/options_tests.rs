use booklet_impose::*;
use std::path::PathBuf;

#[test]
fn test_validation_no_input_file() {
    let options = BookletOptions::default();
    let result = options.validate();
    assert!(result.is_err());
    match result {
        Err(ImposeError::Config(msg)) => {
            assert!(msg.contains("No input file"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_extension() {
    assert!(BookletOptions::for_input("book.pdf").validate().is_ok());
    assert!(BookletOptions::for_input("book.PDF").validate().is_ok());

    match BookletOptions::for_input("book.docx").validate() {
        Err(ImposeError::InvalidInput(_)) => {}
        other => panic!("Expected InvalidInput error, got {:?}", other),
    }
}

#[test]
fn test_validation_output_file() {
    let mut options = BookletOptions::for_input("book.pdf");

    options.output_file = Some(PathBuf::from("print.pdf"));
    assert!(options.validate().is_ok());

    options.output_file = Some(PathBuf::from("print.ps"));
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));

    options.output_file = Some(PathBuf::from("book.pdf"));
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));
}

#[test]
fn test_output_path_defaults_next_to_input() {
    let options = BookletOptions::for_input("/scans/zine.pdf");
    assert_eq!(
        options.output_path(),
        PathBuf::from("/scans/zine_booklet.pdf")
    );

    let options = BookletOptions {
        output_file: Some(PathBuf::from("/out/custom.pdf")),
        ..BookletOptions::for_input("/scans/zine.pdf")
    };
    assert_eq!(options.output_path(), PathBuf::from("/out/custom.pdf"));
}

#[test]
fn test_default_policy_uses_first_page() {
    assert_eq!(
        BookletOptions::default().page_size_policy,
        PageSizePolicy::FirstPage
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_full_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(
        temp_file.path(),
        br#"{
            "input_file": "input.pdf",
            "output_file": "print.pdf",
            "page_size_policy": "RequireUniform"
        }"#,
    )
    .unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();

    assert_eq!(
        loaded,
        BookletOptions {
            input_file: PathBuf::from("input.pdf"),
            output_file: Some(PathBuf::from("print.pdf")),
            page_size_policy: PageSizePolicy::RequireUniform,
        }
    );
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = BookletOptions::load(dir.path().join("absent.json")).await;
    assert!(matches!(result, Err(ImposeError::Io(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), br#"{ "input_file": "scan.pdf" }"#).unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();

    assert_eq!(loaded.input_file, PathBuf::from("scan.pdf"));
    assert_eq!(loaded.output_file, None);
    assert_eq!(loaded.page_size_policy, PageSizePolicy::FirstPage);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"not json").unwrap();

    let result = BookletOptions::load(temp_file.path()).await;
    assert!(matches!(result, Err(ImposeError::Config(_))));
}
