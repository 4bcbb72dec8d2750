use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::model::Tuthub;
use super::sample::sample_tuthub;
use super::tutor::Tutor;

// ---------------------------------------------------------------------------
// On-disk layout
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "tutors": [
///     {
///       "name": "Alex Yeoh",
///       "phone": "87438807",
///       "email": "alexyeoh@example.com",
///       "module": "CS2103T",
///       "year": "3",
///       "studentId": "A0123456X",
///       "teachingNomination": "1",
///       "rating": "4.5",
///       "tags": ["friendly"]
///     }
///   ]
/// }
/// ```
///
/// Each field is revalidated while deserializing.
#[derive(Serialize)]
struct TuthubFile<'a> {
    tutors: &'a [Tutor],
}

#[derive(Deserialize)]
struct OwnedTuthubFile {
    #[serde(default)]
    tutors: Vec<Tutor>,
}

// ---------------------------------------------------------------------------
// Reading and writing
// ---------------------------------------------------------------------------

/// Read a tuthub file. `Ok(None)` when the file does not exist.
pub fn read_tuthub(path: &Path) -> Result<Option<Tuthub>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tutors from {}", path.display()))?;
    let file: OwnedTuthubFile = serde_json::from_str(&text).context("parsing tutors JSON")?;
    let tuthub = Tuthub::from_tutors(file.tutors)?;
    Ok(Some(tuthub))
}

pub fn save_tuthub(path: &Path, tuthub: &Tuthub) -> Result<()> {
    write_json(
        path,
        &TuthubFile {
            tutors: tuthub.tutors(),
        },
    )
}

/// Pretty-print `value` to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(value).context("serializing JSON")?;
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Startup load: sample tutors when the file is missing, an empty list when
/// it cannot be read.
pub fn load_tuthub_or_default(path: &Path) -> Tuthub {
    match read_tuthub(path) {
        Ok(Some(tuthub)) => {
            log::info!("Loaded {} tutors from {}", tuthub.len(), path.display());
            tuthub
        }
        Ok(None) => {
            log::info!(
                "Data file {} not found, starting with sample tutors",
                path.display()
            );
            sample_tuthub()
        }
        Err(e) => {
            log::warn!("Data file not in the correct format, starting with an empty Tuthub: {e:#}");
            Tuthub::default()
        }
    }
}
