use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::IoError;

/// Saves computed pore areas as a flat float array keyed by a dataset name.
///
/// The file is written as JSON, e.g. `{"I8_pore_area": [1.82, 36.45]}`.
/// The format is opaque to the analysis core; downstream tooling picks the
/// dataset by name.
///
/// # Arguments
///
/// * `file_path` - The path of the output file.
/// * `dataset_name` - The key under which the areas are stored.
/// * `areas` - The per-pore areas.
pub fn save_pore_areas(
    file_path: impl AsRef<Path>,
    dataset_name: &str,
    areas: &[f64],
) -> Result<(), IoError> {
    let mut doc = serde_json::Map::new();
    doc.insert(
        dataset_name.to_string(),
        serde_json::to_value(areas)?,
    );

    let file = File::create(file_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &serde_json::Value::Object(doc))?;
    Ok(())
}

/// Loads pore areas previously written by [`save_pore_areas`].
///
/// # Errors
///
/// Returns an error if the file cannot be read or the dataset name is not
/// present.
pub fn load_pore_areas(
    file_path: impl AsRef<Path>,
    dataset_name: &str,
) -> Result<Vec<f64>, IoError> {
    let file = File::open(file_path.as_ref())?;
    let doc: serde_json::Value = serde_json::from_reader(file)?;

    let areas = doc
        .get(dataset_name)
        .ok_or_else(|| IoError::DatasetNotFound(dataset_name.to_string()))?;

    Ok(serde_json::from_value(areas.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_roundtrip() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("pore_areas.json");

        let areas = vec![1.8225, 36.45, 182.25];
        save_pore_areas(&file_path, "I8_pore_area", &areas)?;

        let areas_back = load_pore_areas(&file_path, "I8_pore_area")?;
        assert_eq!(areas_back, areas);
        Ok(())
    }

    #[test]
    fn missing_dataset_is_an_error() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("pore_areas.json");
        save_pore_areas(&file_path, "a", &[1.0])?;

        assert!(load_pore_areas(&file_path, "b").is_err());
        Ok(())
    }

    #[test]
    fn empty_areas_are_valid() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("empty.json");
        save_pore_areas(&file_path, "none", &[])?;
        assert_eq!(load_pore_areas(&file_path, "none")?, Vec::<f64>::new());
        Ok(())
    }
}
