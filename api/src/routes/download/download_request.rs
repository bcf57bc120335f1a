use serde::Deserialize;

/// Query parameters for /download/code.
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    /// Snippet text to hand back as a file body.
    pub code: String,
    /// Suggested client-side filename.
    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    "code.py".to_string()
}
