//! Add-on API Stub Library
//!
//! Stub implementations of a media-center application's add-on
//! scripting API. The real implementations live inside the host
//! process and only run when an add-on is loaded there; this crate
//! mimics the shape of that surface so add-on code can be written,
//! unit-tested, and statically checked offline. Every operation either
//! returns a hard-coded placeholder, emits a diagnostic line, or does
//! trivial bookkeeping against in-memory maps parsed from the add-on's
//! `addon.xml` and `settings.xml`.
//!
//! # Core Features Implemented
//!
//! ## Add-on Registry (`registry` module)
//! - `init_addon()` - Parse an add-on directory into the process-wide registry
//! - Record lookup, default-add-on tracking, serializable summaries
//!
//! ## Settings & Metadata Access (`addon` module)
//! - `Addon` - Accessor over a registry record: settings get/set,
//!   descriptor properties, localized strings
//!
//! ## Directory Callbacks (`directory` module)
//! - Handle-based listing callbacks (`add_directory_item()`,
//!   `end_of_directory()`, `set_resolved_url()`, ...)
//! - Host-value-compatible `SORT_METHOD_*` constants
//!
//! ## Support (`listitem`, `strings`, `host` modules)
//! - `ListItem` - Directory entry carrier
//! - Gettext-PO-subset parser for `strings.po` catalogues
//! - Captured diagnostic log, also forwarded to the `log` facade
//!
//! # Intended Usage
//!
//! Initialize the registry once per add-on before constructing any
//! accessor:
//!
//! ```no_run
//! use addonstub_core::{registry, Addon};
//!
//! registry::init_addon("./my-addon", "./my-addon/profile", true)?;
//! let addon = Addon::new(None);
//! let api_key = addon.setting("apikey");
//! # anyhow::Ok(())
//! ```

pub mod addon;
pub mod directory;
pub mod host;
pub mod listitem;
pub mod registry;
pub mod strings;

pub use addon::{Addon, AddonInfo};
pub use listitem::ListItem;
pub use registry::init_addon;
