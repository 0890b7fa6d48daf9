use std::fs;

use chrono::{Local, TimeZone};
use pretty_assertions::assert_eq;
use scraper_engine::{auto_filename, ensure_output_dir, safe_filename, write_html};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("downloads");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn existing_dir_is_left_alone() {
    let temp = TempDir::new().unwrap();
    ensure_output_dir(temp.path()).unwrap();
}

#[test]
fn write_html_replaces_an_existing_capture() {
    let temp = TempDir::new().unwrap();

    let first = write_html(temp.path(), "page.html", "<html>one</html>").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "<html>one</html>");

    let second = write_html(temp.path(), "page.html", "<html>two</html>").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "<html>two</html>");
}

#[test]
fn write_html_fails_when_the_dir_path_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocked = temp.path().join("not_a_dir");
    fs::write(&blocked, "x").unwrap();

    let result = write_html(&blocked, "page.html", "<html></html>");
    assert!(result.is_err());
}

#[test]
fn auto_filename_includes_job_prefix_and_timestamp() {
    let now = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    assert_eq!(
        auto_filename(Some("42"), now),
        "job_42_scraped_20240501_123000.html"
    );
    assert_eq!(auto_filename(None, now), "scraped_20240501_123000.html");
}

#[test]
fn safe_filename_keeps_only_the_final_component() {
    assert_eq!(safe_filename("page.html"), "page.html");
    assert_eq!(safe_filename("nested/dir/page.html"), "page.html");
    assert_eq!(safe_filename("../../etc/passwd"), "passwd");
    assert_eq!(safe_filename(""), "scraped.html");
    assert_eq!(safe_filename(".."), "scraped.html");
}
