//! Java-style `.properties` file parsing
//!
//! Implements the subset of the format that build signing configuration
//! actually uses: `key=value` (or `key: value`) lines, `#`/`!` comments,
//! trimmed keys and values. Multi-line continuations and unicode escapes
//! are not supported.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PropertiesError, Result};

/// Conventional properties file name at the build root
pub const KEYSTORE_PROPERTIES: &str = "keystore.properties";

/// A flat string-to-string mapping parsed from a properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesFile {
    entries: BTreeMap<String, String>,
}

impl PropertiesFile {
    /// Parse properties from text.
    ///
    /// A line splits at the first `=` or `:`; a line with neither is a key
    /// with an empty value (Java semantics). The last duplicate key wins.
    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let split_at = line.find(['=', ':']);
            let (key, value) = match split_at {
                Some(idx) => (&line[..idx], &line[idx + 1..]),
                None => (line, ""),
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.insert(key.to_string(), value.trim().to_string());
        }

        Self { entries }
    }

    /// Load and parse a properties file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PropertiesError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| PropertiesError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let props = Self::parse(&content);
        info!(path = %path.display(), entries = props.len(), "loaded properties file");
        Ok(props)
    }

    /// Load a properties file if it exists.
    ///
    /// An absent file is not an error; the read is fully scoped, no handle
    /// is retained afterward.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "no properties file present");
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_pairs() {
        let props = PropertiesFile::parse("storeFile=release.jks\nkeyAlias=upload\n");
        assert_eq!(props.get("storeFile"), Some("release.jks"));
        assert_eq!(props.get("keyAlias"), Some("upload"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# release credentials\n\n! alt comment\nkeyAlias=upload\n";
        let props = PropertiesFile::parse(content);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("keyAlias"), Some("upload"));
    }

    #[test]
    fn test_parse_colon_separator() {
        let props = PropertiesFile::parse("storePassword: hunter2");
        assert_eq!(props.get("storePassword"), Some("hunter2"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let props = PropertiesFile::parse("  storeFile  =  ../keys/app.jks  ");
        assert_eq!(props.get("storeFile"), Some("../keys/app.jks"));
    }

    #[test]
    fn test_parse_no_separator_is_empty_value() {
        let props = PropertiesFile::parse("storePassword");
        assert_eq!(props.get("storePassword"), Some(""));
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let props = PropertiesFile::parse("keyAlias=first\nkeyAlias=second\n");
        assert_eq!(props.get("keyAlias"), Some("second"));
    }

    #[test]
    fn test_parse_value_may_contain_separator() {
        let props = PropertiesFile::parse("storePassword=a=b:c");
        assert_eq!(props.get("storePassword"), Some("a=b:c"));
    }

    #[test]
    fn test_load_if_exists_absent_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(KEYSTORE_PROPERTIES);

        let loaded = PropertiesFile::load_if_exists(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_if_exists_present() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(KEYSTORE_PROPERTIES);
        std::fs::write(&path, "storeFile=a.jks\n").unwrap();

        let loaded = PropertiesFile::load_if_exists(&path).unwrap().unwrap();
        assert_eq!(loaded.get("storeFile"), Some("a.jks"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.properties");

        let err = PropertiesFile::load(&path).unwrap_err();
        assert!(matches!(err, PropertiesError::NotFound(_)));
    }
}
