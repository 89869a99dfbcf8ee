//! Black-box tests for the `pagetext` binary.
//!
//! Each test runs the binary inside its own temp directory, since the output
//! file is written relative to the working directory.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use tempfile::TempDir;

fn save_pdf(dir: &Path, name: &str, page_texts: &[&str]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 36.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagetext"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn extracts_and_writes_sibling_text_file() {
    let dir = TempDir::new().unwrap();
    save_pdf(dir.path(), "book.pdf", &["alpha", "bravo"]);

    let output = run(dir.path(), &["book.pdf"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total pages: 2"));
    assert!(stdout.contains("=== 第 1 页 ==="));
    assert!(stdout.contains("book_extracted.txt"));

    let written = std::fs::read_to_string(dir.path().join("book_extracted.txt")).unwrap();
    assert!(written.contains("=== 第 1 页 ==="));
    assert!(written.contains("=== 第 2 页 ==="));
    assert!(written.contains(&"=".repeat(50)));
}

#[test]
fn page_range_arguments_limit_the_output() {
    let dir = TempDir::new().unwrap();
    save_pdf(dir.path(), "book.pdf", &["alpha", "bravo", "charlie"]);

    let output = run(dir.path(), &["book.pdf", "2", "3"]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("book_extracted.txt")).unwrap();
    assert!(!written.contains("=== 第 1 页 ==="));
    assert!(written.contains("=== 第 2 页 ==="));
    assert!(written.contains("=== 第 3 页 ==="));
}

#[test]
fn degenerate_range_writes_an_empty_file() {
    let dir = TempDir::new().unwrap();
    save_pdf(dir.path(), "book.pdf", &["alpha", "bravo"]);

    let output = run(dir.path(), &["book.pdf", "2", "1"]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("book_extracted.txt")).unwrap();
    assert_eq!(written, "");
}

#[test]
fn missing_input_file_reports_an_error_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["nowhere.pdf"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
    assert!(!dir.path().join("nowhere_extracted.txt").exists());
}

#[test]
fn non_integer_page_bounds_abort_before_extraction() {
    let dir = TempDir::new().unwrap();
    save_pdf(dir.path(), "book.pdf", &["alpha"]);

    let output = run(dir.path(), &["book.pdf", "abc", "2"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("book_extracted.txt").exists());
}

#[test]
fn start_page_without_end_page_is_rejected() {
    let dir = TempDir::new().unwrap();
    save_pdf(dir.path(), "book.pdf", &["alpha"]);

    let output = run(dir.path(), &["book.pdf", "2"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("book_extracted.txt").exists());
}

#[test]
fn no_arguments_prints_usage_guidance() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn existing_output_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    save_pdf(dir.path(), "book.pdf", &["fresh"]);
    std::fs::write(dir.path().join("book_extracted.txt"), "stale").unwrap();

    let output = run(dir.path(), &["book.pdf"]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("book_extracted.txt")).unwrap();
    assert!(!written.contains("stale"));
    assert!(written.contains("fresh"));
}
