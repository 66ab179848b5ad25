//! Saving generated bills to disk and opening the folder they live in.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::BillError;
use crate::invoice::InvoiceHeader;

/// Directory bills are saved to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_bills";

/// `<bill>_<vehicle>_<DD-MM-YYYY>.pdf`, keeping only letters and digits of
/// the vehicle number.
pub fn file_name(header: &InvoiceHeader) -> String {
    let vehicle: String = header
        .vehicle_number
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!(
        "{}_{}_{}.pdf",
        header.bill_number,
        vehicle,
        header.bill_date.format("%d-%m-%Y")
    )
}

/// Write PDF bytes into `dir`, creating it if needed.
pub fn save_pdf(dir: &Path, header: &InvoiceHeader, bytes: &[u8]) -> Result<PathBuf, BillError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name(header));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "Saved bill");
    Ok(path)
}

/// `file://` URL of `dir`, creating the directory if needed.
pub fn folder_url(dir: &Path) -> Result<String, BillError> {
    fs::create_dir_all(dir)?;
    let dir = fs::canonicalize(dir)?;
    Ok(format!("file://{}", dir.display()))
}

/// Open the bills folder in the system file browser.
pub fn open_folder(dir: &Path) -> Result<PathBuf, BillError> {
    let url = folder_url(dir)?;
    webbrowser::open(&url)?;
    info!(url = %url, "Opened bills folder");
    Ok(dir.to_path_buf())
}
