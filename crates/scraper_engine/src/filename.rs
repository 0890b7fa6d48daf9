use std::path::Path;

use chrono::{DateTime, Local};

/// Synthesized capture filename: `job_{id}_scraped_{YYYYMMDD_HHMMSS}.html`.
/// The job prefix is only present when the run carries a job id.
pub fn auto_filename(job_id: Option<&str>, now: DateTime<Local>) -> String {
    let timestamp = now.format("%Y%m%d_%H%M%S");
    match job_id {
        Some(id) => format!("job_{id}_scraped_{timestamp}.html"),
        None => format!("scraped_{timestamp}.html"),
    }
}

/// Reduces a user-supplied filename to its final path component so a
/// macro cannot write outside the download directory.
pub fn safe_filename(raw: &str) -> String {
    let name = Path::new(raw)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.is_empty() {
        "scraped.html".to_string()
    } else {
        name
    }
}
