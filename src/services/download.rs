//! Transcript (KHS) download flow
//!
//! Fetches the PDF with session credentials on a worker thread and saves
//! it under the configured download directory, reporting the saved path
//! (or a failure) back over an mpsc channel drained on Tick.

use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

/// Outcome of one transcript download
pub type KhsResult = Result<PathBuf, String>;

pub struct KhsRunner {
    tx: Sender<KhsResult>,
    rx: Receiver<KhsResult>,
}

impl Default for KhsRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl KhsRunner {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// Fetch the PDF on a worker thread; the outcome arrives via `poll`
    pub fn spawn(&self, url: String, session_token: Option<String>, dest_dir: PathBuf) {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = fetch_khs(&url, session_token.as_deref(), &dest_dir);
            let _ = tx.send(result);
        });
    }

    /// Drain every outcome that has arrived since the last poll
    pub fn poll(&self) -> Vec<KhsResult> {
        let mut done = Vec::new();
        while let Ok(result) = self.rx.try_recv() {
            done.push(result);
        }
        done
    }
}

/// Fetch the transcript PDF and save it to disk
fn fetch_khs(url: &str, session_token: Option<&str>, dest_dir: &Path) -> KhsResult {
    let client = reqwest::blocking::Client::new();

    let mut builder = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/pdf");
    if let Some(token) = session_token {
        builder = builder.header(reqwest::header::COOKIE, format!("session={}", token));
    }

    let response = builder.send().map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("server returned {}", response.status()));
    }

    let bytes = response.bytes().map_err(|e| e.to_string())?;
    save_pdf(&bytes, dest_dir).map_err(|e| e.to_string())
}

/// Write the PDF body as `KHS_<year>.pdf` under the destination directory
fn save_pdf(bytes: &[u8], dest_dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dest_dir)?;
    let path = dest_dir.join(khs_filename(Local::now().year()));
    fs::write(&path, bytes)?;
    Ok(path)
}

fn khs_filename(year: i32) -> String {
    format!("KHS_{}.pdf", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khs_filename_uses_year() {
        assert_eq!(khs_filename(2026), "KHS_2026.pdf");
    }

    #[test]
    fn test_save_pdf_writes_file() {
        let dir = std::env::temp_dir().join("siakad-tui-test-khs");
        let _ = fs::remove_dir_all(&dir);

        let path = save_pdf(b"%PDF-1.4", &dir).unwrap();
        assert!(path.ends_with(khs_filename(Local::now().year())));
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.4");

        let _ = fs::remove_dir_all(&dir);
    }
}
