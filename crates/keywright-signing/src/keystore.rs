//! Typed view over the recognized keystore properties

use keywright_core::PropertiesFile;

/// The four keys a keystore properties file must supply
pub const REQUIRED_KEYS: [&str; 4] = ["storeFile", "storePassword", "keyAlias", "keyPassword"];

/// The recognized signing values from a properties source.
///
/// Values are carried raw; presence and blankness are judged by the
/// resolver, not at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeystoreProperties {
    pub store_file: Option<String>,
    pub store_password: Option<String>,
    pub key_alias: Option<String>,
    pub key_password: Option<String>,
}

impl KeystoreProperties {
    /// Extract the recognized keys from a parsed properties file
    pub fn from_properties(props: &PropertiesFile) -> Self {
        Self {
            store_file: props.get("storeFile").map(String::from),
            store_password: props.get("storePassword").map(String::from),
            key_alias: props.get("keyAlias").map(String::from),
            key_password: props.get("keyPassword").map(String::from),
        }
    }

    /// Names of required keys that are absent or whitespace-only
    pub fn missing_or_blank(&self) -> Vec<&'static str> {
        let fields = [
            ("storeFile", &self.store_file),
            ("storePassword", &self.store_password),
            ("keyAlias", &self.key_alias),
            ("keyPassword", &self.key_password),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| is_blank(value.as_deref()))
            .map(|(name, _)| name)
            .collect()
    }

    /// True when all four required values are present and non-blank
    pub fn is_complete(&self) -> bool {
        self.missing_or_blank().is_empty()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> KeystoreProperties {
        KeystoreProperties {
            store_file: Some("a.jks".into()),
            store_password: Some("p1".into()),
            key_alias: Some("k1".into()),
            key_password: Some("p2".into()),
        }
    }

    #[test]
    fn test_from_properties_picks_recognized_keys() {
        let file = PropertiesFile::parse(
            "storeFile=upload.jks\nstorePassword=s\nkeyAlias=upload\nkeyPassword=k\nextra=ignored\n",
        );
        let props = KeystoreProperties::from_properties(&file);
        assert_eq!(props.store_file.as_deref(), Some("upload.jks"));
        assert_eq!(props.key_alias.as_deref(), Some("upload"));
        assert!(props.is_complete());
    }

    #[test]
    fn test_complete_has_no_missing() {
        assert!(complete().missing_or_blank().is_empty());
    }

    #[test]
    fn test_absent_key_reported() {
        let mut props = complete();
        props.key_password = None;
        assert_eq!(props.missing_or_blank(), vec!["keyPassword"]);
        assert!(!props.is_complete());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut props = complete();
        props.store_password = Some("   ".into());
        assert_eq!(props.missing_or_blank(), vec!["storePassword"]);
    }

    #[test]
    fn test_all_missing() {
        let props = KeystoreProperties::default();
        assert_eq!(props.missing_or_blank(), REQUIRED_KEYS.to_vec());
    }
}
