use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data;
use crate::error::{Error, Result};
use crate::models::Restaurant;

/// 种子文件结构：若干 `[[restaurants]]` 表
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    restaurants: Vec<Restaurant>,
}

/// 从 TOML 文件加载种子记录
pub fn load_seed(path: &Path) -> Result<Vec<Restaurant>> {
    let content = fs::read_to_string(path)?;
    let file: SeedFile = toml::from_str(&content).map_err(|source| Error::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        "loaded {} seed records from {}",
        file.restaurants.len(),
        path.display()
    );
    Ok(file.restaurants)
}

/// 初始记录：配置了种子文件时读取文件，否则使用内置数据
pub fn initial_records(seed_path: Option<&Path>) -> Result<Vec<Restaurant>> {
    match seed_path {
        Some(path) => load_seed(path),
        None => {
            tracing::info!("using built-in seed ({} records)", data::SEED.len());
            Ok(data::seed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_seed_mixed_ratings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[restaurants]]
name = "Pizza Place"
address = "1 A St"
phone = "111"
cuisine = "Italian"
rating = 5

[[restaurants]]
name = "Sushi Bar"
address = "2 B St"
phone = "222"
cuisine = "Japanese"
rating = "4"
"#
        )
        .unwrap();

        let records = load_seed(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Pizza Place");
        assert_eq!(records[0].rating, "5");
        assert_eq!(records[1].rating, "4");
    }

    #[test]
    fn test_load_seed_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let records = load_seed(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_seed_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[restaurants]]\nname = 3\n").unwrap();

        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, Error::Toml { .. }));
    }

    #[test]
    fn test_initial_records_defaults_to_builtin() {
        let records = initial_records(None).unwrap();
        assert_eq!(records, data::seed());
    }

    #[test]
    fn test_load_seed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seed(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
