//! Process-wide add-on registry and descriptor ingestion.
//!
//! The host application owns the authoritative copy of every installed
//! add-on's metadata and settings. Outside the host, this module stands
//! in for it: [`init_addon`] parses an add-on directory's `addon.xml`
//! and `resources/settings.xml` into an in-memory record, and the
//! accessor side ([`crate::addon::Addon`]) reads and writes that record.
//!
//! Records are keyed by add-on id and live for the process lifetime;
//! nothing is ever persisted back to disk.
//!
//! # Consumed file formats
//!
//! `addon.xml` — root `<addon>` element with `id`, `version`, `name`
//! and `provider-name` attributes, all required.
//!
//! `resources/settings.xml` — `<setting>` elements carrying `id` and
//! `default` attributes, either directly under the root or grouped
//! under `<category>` elements. The file is optional.

use crate::addon::AddonInfo;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Settings map shared between a registry record and every accessor
/// constructed for that add-on id.
pub type SharedSettings = Arc<RwLock<HashMap<String, String>>>;

/// One registered add-on: parsed descriptor plus its live settings map.
#[derive(Clone)]
pub struct AddonRecord {
    pub info: AddonInfo,
    pub settings: SharedSettings,
}

/// Serializable snapshot of a record, for inspection tooling.
#[derive(Debug, Serialize)]
pub struct AddonSummary {
    pub info: AddonInfo,
    pub settings: BTreeMap<String, String>,
}

static ADDONS: Lazy<RwLock<HashMap<String, AddonRecord>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static DEFAULT_ADDON: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new(String::new()));

/// Failure parsing an add-on descriptor or settings schema.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed XML in {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },
    #[error("missing required attribute `{attribute}` in {}", path.display())]
    MissingAttribute {
        attribute: &'static str,
        path: PathBuf,
    },
    #[error("no <addon> element in {}", path.display())]
    MissingRoot { path: PathBuf },
}

/// Register one add-on from its directory.
///
/// Parses `<path>/addon.xml` (required) and
/// `<path>/resources/settings.xml` (optional), stores the record under
/// the descriptor's id, and returns that id. With `set_default` the id
/// also becomes the process-wide default used by accessors constructed
/// without an explicit id.
///
/// Re-initializing an id replaces the record. The intended pattern is a
/// single call per add-on before any accessor is constructed.
pub fn init_addon(
    path: impl AsRef<Path>,
    profile: impl AsRef<Path>,
    set_default: bool,
) -> Result<String> {
    let path = path.as_ref();

    let mut info = parse_descriptor(&path.join("addon.xml"))
        .with_context(|| format!("failed to initialize add-on from {}", path.display()))?;
    info.path = path.display().to_string();
    info.profile = profile.as_ref().display().to_string();

    let settings_path = path.join("resources").join("settings.xml");
    let settings = if settings_path.exists() {
        parse_settings_schema(&settings_path)
            .with_context(|| format!("failed to initialize add-on from {}", path.display()))?
    } else {
        HashMap::new()
    };

    let id = info.id.clone();
    log::info!(
        target: "addonstub",
        "registered add-on {} v{} ({} settings)",
        id,
        info.version,
        settings.len()
    );

    let record = AddonRecord {
        info,
        settings: Arc::new(RwLock::new(settings)),
    };
    ADDONS.write().insert(id.clone(), record);

    if set_default {
        *DEFAULT_ADDON.write() = id.clone();
    }

    Ok(id)
}

/// Look up a registered add-on. The returned record shares its settings
/// map with the registry, so writes through it are globally visible.
pub fn record(id: &str) -> Option<AddonRecord> {
    ADDONS.read().get(id).cloned()
}

/// Id of the add-on most recently registered with `set_default`, or an
/// empty string if none was.
pub fn default_addon_id() -> String {
    DEFAULT_ADDON.read().clone()
}

pub fn is_registered(id: &str) -> bool {
    ADDONS.read().contains_key(id)
}

/// All registered add-on ids, sorted.
pub fn registered_ids() -> Vec<String> {
    let mut ids: Vec<String> = ADDONS.read().keys().cloned().collect();
    ids.sort();
    ids
}

/// Snapshot a record for display or serialization.
pub fn summary(id: &str) -> Option<AddonSummary> {
    let record = record(id)?;
    let settings = record
        .settings
        .read()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Some(AddonSummary {
        info: record.info,
        settings,
    })
}

/// Parse the root `<addon>` element's attribute set out of `addon.xml`.
fn parse_descriptor(path: &Path) -> Result<AddonInfo, DescriptorError> {
    let text = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let xml_err = |source: quick_xml::Error| DescriptorError::Xml {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = Reader::from_str(&text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.name().as_ref() != b"addon" {
                    continue;
                }

                let mut id = None;
                let mut version = None;
                let mut name = None;
                let mut author = None;
                for attr in e.attributes() {
                    let attr = attr.map_err(|e| xml_err(e.into()))?;
                    let value = attr.unescape_value().map_err(|e| xml_err(e.into()))?;
                    match attr.key.as_ref() {
                        b"id" => id = Some(value.into_owned()),
                        b"version" => version = Some(value.into_owned()),
                        b"name" => name = Some(value.into_owned()),
                        b"provider-name" => author = Some(value.into_owned()),
                        _ => {}
                    }
                }

                let missing = |attribute| DescriptorError::MissingAttribute {
                    attribute,
                    path: path.to_path_buf(),
                };
                return Ok(AddonInfo {
                    id: id.ok_or_else(|| missing("id"))?,
                    version: version.ok_or_else(|| missing("version"))?,
                    name: name.ok_or_else(|| missing("name"))?,
                    author: author.ok_or_else(|| missing("provider-name"))?,
                    path: String::new(),
                    profile: String::new(),
                });
            }
            Ok(Event::Eof) => {
                return Err(DescriptorError::MissingRoot {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => return Err(xml_err(source)),
            Ok(_) => {}
        }
    }
}

/// Parse the settings schema into an id -> default map.
///
/// `<setting>` elements are taken from two placements only: directly
/// under the document root, or one level down inside a `<category>`.
/// The first occurrence of a setting id wins; a missing `default`
/// attribute contributes an empty string.
fn parse_settings_schema(path: &Path) -> Result<HashMap<String, String>, DescriptorError> {
    let text = fs::read_to_string(path).map_err(|source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let xml_err = |source: quick_xml::Error| DescriptorError::Xml {
        path: path.to_path_buf(),
        source,
    };

    let mut settings = HashMap::new();
    // Names of the currently open elements, document root first.
    let mut open: Vec<Vec<u8>> = Vec::new();

    let mut reader = Reader::from_str(&text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                collect_setting(&e, &open, &mut settings).map_err(xml_err)?;
                open.push(e.name().as_ref().to_vec());
            }
            Ok(Event::Empty(e)) => {
                collect_setting(&e, &open, &mut settings).map_err(xml_err)?;
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Eof) => break,
            Err(source) => return Err(xml_err(source)),
            Ok(_) => {}
        }
    }

    Ok(settings)
}

/// Record `element` as a setting if it is a `<setting>` in an accepted
/// placement and carries an id.
fn collect_setting(
    element: &BytesStart<'_>,
    open: &[Vec<u8>],
    settings: &mut HashMap<String, String>,
) -> Result<(), quick_xml::Error> {
    if element.name().as_ref() != b"setting" {
        return Ok(());
    }
    let placement_ok = open.len() == 1 || (open.len() == 2 && open[1].as_slice() == b"category");
    if !placement_ok {
        return Ok(());
    }

    let mut id = None;
    let mut default = String::new();
    for attr in element.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"id" => id = Some(value.into_owned()),
            b"default" => default = value.into_owned(),
            _ => {}
        }
    }

    if let Some(id) = id {
        settings.entry(id).or_insert(default);
    }
    Ok(())
}
