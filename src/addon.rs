//! Add-on descriptor data and the settings/metadata accessor.
//!
//! [`Addon`] is the object add-on code holds at runtime. Inside the
//! host it would talk to the real settings store; here it reads and
//! writes the in-memory record that [`crate::registry::init_addon`]
//! created, and falls back to placeholder values everywhere the record
//! has nothing to offer. Absent ids never fail: lookups resolve to the
//! empty string so add-on code runs unmodified outside the host.

use crate::host;
use crate::registry::{self, SharedSettings};
use crate::strings;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Parsed add-on descriptor plus the paths it was initialized with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddonInfo {
    pub id: String,
    pub version: String,
    pub name: String,
    pub author: String,
    pub path: String,
    pub profile: String,
}

impl AddonInfo {
    /// Property lookup by the key names the host API uses. Unknown keys
    /// resolve to the empty string.
    pub fn get(&self, key: &str) -> &str {
        match key {
            "id" => &self.id,
            "version" => &self.version,
            "name" => &self.name,
            "author" => &self.author,
            "path" => &self.path,
            "profile" => &self.profile,
            _ => "",
        }
    }
}

/// Accessor over one add-on's registry record.
///
/// Settings reads and writes go through the shared map owned by the
/// registry, so every accessor for the same id observes the same
/// values. For an id that was never initialized the accessor carries a
/// private empty map instead; it still round-trips sets and gets, it
/// just shares them with nobody.
pub struct Addon {
    id: String,
    info: AddonInfo,
    settings: SharedSettings,
    strings: HashMap<u32, String>,
}

impl Addon {
    /// Build an accessor for `id`, or for the default add-on when `id`
    /// is `None`.
    ///
    /// The localized-string catalogue is loaded here, from
    /// `resources/language/resource.language.en_gb/strings.po` under
    /// the add-on path, with `resources/language/English/strings.po` as
    /// the legacy fallback. A missing catalogue is tolerated.
    pub fn new(id: Option<&str>) -> Self {
        let id = match id {
            Some(id) => id.to_string(),
            None => registry::default_addon_id(),
        };

        let (info, settings) = match registry::record(&id) {
            Some(record) => (record.info, record.settings),
            None => (
                AddonInfo::default(),
                Arc::new(RwLock::new(HashMap::new())),
            ),
        };

        let strings = load_strings(Path::new(&info.path));

        let addon = Addon {
            id,
            info,
            settings,
            strings,
        };
        host::log(format!("Created {}", addon));
        addon
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Localized string for `id`, or `""` if the catalogue has no such
    /// entry.
    pub fn localized_string(&self, id: u32) -> String {
        self.strings.get(&id).cloned().unwrap_or_default()
    }

    /// Value of a setting, or `""` if unset.
    pub fn setting(&self, id: &str) -> String {
        let result = self.settings.read().get(id).cloned().unwrap_or_default();
        host::log(format!("{}: setting(id={}) -> {}", self, id, result));
        result
    }

    /// Same behavior as [`Addon::setting`].
    pub fn setting_string(&self, id: &str) -> String {
        self.setting(id)
    }

    /// Placeholder. The host would coerce the stored value; the stub
    /// always answers `true`.
    pub fn setting_bool(&self, _id: &str) -> bool {
        true
    }

    /// Placeholder, always `0`.
    pub fn setting_int(&self, _id: &str) -> i32 {
        0
    }

    /// Placeholder, always `0.0`.
    pub fn setting_number(&self, _id: &str) -> f64 {
        0.0
    }

    /// Overwrite a setting. No coercion, no validation, no persistence
    /// beyond process memory.
    pub fn set_setting(&self, id: &str, value: &str) {
        self.settings
            .write()
            .insert(id.to_string(), value.to_string());
        host::log(format!("{}: set_setting(id={}, value={})", self, id, value));
    }

    /// Placeholder setter: logs the call, stores nothing, reports
    /// success.
    pub fn set_setting_bool(&self, id: &str, value: bool) -> bool {
        host::log(format!(
            "{}: set_setting_bool(id={}, value={})",
            self, id, value
        ));
        true
    }

    /// Placeholder setter, see [`Addon::set_setting_bool`].
    pub fn set_setting_int(&self, id: &str, value: i32) -> bool {
        host::log(format!(
            "{}: set_setting_int(id={}, value={})",
            self, id, value
        ));
        true
    }

    /// Placeholder setter, see [`Addon::set_setting_bool`].
    pub fn set_setting_number(&self, id: &str, value: f64) -> bool {
        host::log(format!(
            "{}: set_setting_number(id={}, value={})",
            self, id, value
        ));
        true
    }

    /// Stores like [`Addon::set_setting`] and reports success.
    pub fn set_setting_string(&self, id: &str, value: &str) -> bool {
        self.set_setting(id, value);
        true
    }

    /// In the host this opens the settings dialog; the stub only logs.
    pub fn open_settings(&self) {
        host::log(format!("{}: open_settings()", self));
    }

    /// Descriptor property lookup, `""` for unknown keys.
    pub fn info(&self, key: &str) -> String {
        let result = self.info.get(key).to_string();
        host::log(format!("{}: info(id={}) -> {}", self, key, result));
        result
    }
}

impl Default for Addon {
    fn default() -> Self {
        Addon::new(None)
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addon(id={})", self.id)
    }
}

/// Locate and parse the add-on's string catalogue, preferring the
/// current language-resource layout over the legacy one.
fn load_strings(addon_path: &Path) -> HashMap<u32, String> {
    let language_dir = addon_path.join("resources").join("language");

    let mut po = language_dir
        .join("resource.language.en_gb")
        .join("strings.po");
    if !po.exists() {
        po = language_dir.join("English").join("strings.po");
    }

    strings::parse_po_file(&po)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_addon(dir: &Path, id: &str, settings: Option<&str>) {
        fs::write(
            dir.join("addon.xml"),
            format!(
                r#"<addon id="{}" version="2.0.1" name="Test Addon" provider-name="tester"/>"#,
                id
            ),
        )
        .unwrap();
        if let Some(settings) = settings {
            let resources = dir.join("resources");
            fs::create_dir_all(&resources).unwrap();
            fs::write(resources.join("settings.xml"), settings).unwrap();
        }
    }

    fn write_strings(dir: &Path, language: &str, po: &str) {
        let language_dir = dir.join("resources").join("language").join(language);
        fs::create_dir_all(&language_dir).unwrap();
        fs::write(language_dir.join("strings.po"), po).unwrap();
    }

    #[test]
    fn unset_setting_reads_as_empty_string() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-unset", None);
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-unset"));
        assert_eq!(addon.setting("never-set"), "");
    }

    #[test]
    fn schema_default_is_visible_through_accessor() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(
            temp_dir.path(),
            "plugin.test.addon-default",
            Some(r#"<settings><setting id="quality" default="720p"/></settings>"#),
        );
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-default"));
        assert_eq!(addon.setting("quality"), "720p");
    }

    #[test]
    fn set_then_get_round_trips_across_accessors() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-roundtrip", None);
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let writer = Addon::new(Some("plugin.test.addon-roundtrip"));
        writer.set_setting("username", "teamtester");

        let reader = Addon::new(Some("plugin.test.addon-roundtrip"));
        assert_eq!(reader.setting("username"), "teamtester");
        assert_eq!(reader.setting_string("username"), "teamtester");
    }

    #[test]
    fn typed_getters_return_placeholders() {
        let addon = Addon::new(Some("plugin.test.addon-typed"));
        assert!(addon.setting_bool("anything"));
        assert_eq!(addon.setting_int("anything"), 0);
        assert_eq!(addon.setting_number("anything"), 0.0);
    }

    #[test]
    fn typed_setters_report_success_without_storing() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-typedset", None);
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-typedset"));
        assert!(addon.set_setting_bool("enabled", true));
        assert!(addon.set_setting_int("max", 5));
        assert!(addon.set_setting_number("ratio", 1.5));
        assert_eq!(addon.setting("enabled"), "");
        assert_eq!(addon.setting("max"), "");
        assert_eq!(addon.setting("ratio"), "");

        assert!(addon.set_setting_string("username", "teamtester"));
        assert_eq!(addon.setting("username"), "teamtester");
    }

    #[test]
    fn unregistered_id_yields_empty_private_accessor() {
        let addon = Addon::new(Some("plugin.test.addon-unknown"));
        assert_eq!(addon.info("id"), "");
        assert_eq!(addon.info("name"), "");
        assert_eq!(addon.setting("anything"), "");

        // A private map still round-trips on this instance.
        addon.set_setting("scratch", "value");
        assert_eq!(addon.setting("scratch"), "value");
        assert!(!registry::is_registered("plugin.test.addon-unknown"));
    }

    #[test]
    fn info_lookup_covers_descriptor_and_paths() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-info", None);
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-info"));
        assert_eq!(addon.info("id"), "plugin.test.addon-info");
        assert_eq!(addon.info("version"), "2.0.1");
        assert_eq!(addon.info("name"), "Test Addon");
        assert_eq!(addon.info("author"), "tester");
        assert_eq!(addon.info("path"), temp_dir.path().display().to_string());
        assert_eq!(
            addon.info("profile"),
            temp_dir.path().join("profile").display().to_string()
        );
        assert_eq!(addon.info("fanart"), "");
    }

    #[test]
    fn localized_strings_resolve_from_catalogue() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-strings", None);
        write_strings(
            temp_dir.path(),
            "resource.language.en_gb",
            "msgctxt \"#32000\"\nmsgid \"Search\"\nmsgstr \"\"\n",
        );
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-strings"));
        assert_eq!(addon.localized_string(32000), "Search");
        assert_eq!(addon.localized_string(99999), "");
    }

    #[test]
    fn legacy_language_directory_is_a_fallback() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-legacy", None);
        write_strings(
            temp_dir.path(),
            "English",
            "msgctxt \"#32100\"\nmsgid \"Queue\"\nmsgstr \"\"\n",
        );
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-legacy"));
        assert_eq!(addon.localized_string(32100), "Queue");
    }

    #[test]
    fn default_addon_backs_accessors_without_an_id() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-default-id", None);
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), true).unwrap();

        assert_eq!(registry::default_addon_id(), "plugin.test.addon-default-id");
        let addon = Addon::new(None);
        assert_eq!(addon.id(), "plugin.test.addon-default-id");
        assert_eq!(addon.info("name"), "Test Addon");
    }

    #[test]
    fn construction_and_calls_emit_diagnostics() {
        let temp_dir = TempDir::new().unwrap();
        write_addon(temp_dir.path(), "plugin.test.addon-log", None);
        registry::init_addon(temp_dir.path(), temp_dir.path().join("profile"), false).unwrap();

        let addon = Addon::new(Some("plugin.test.addon-log"));
        addon.set_setting("token", "xyz-log-probe");
        addon.open_settings();

        assert!(host::recorded_contains("Created Addon(id=plugin.test.addon-log)"));
        assert!(host::recorded_contains(
            "Addon(id=plugin.test.addon-log): set_setting(id=token, value=xyz-log-probe)"
        ));
        assert!(host::recorded_contains("Addon(id=plugin.test.addon-log): open_settings()"));
    }
}
