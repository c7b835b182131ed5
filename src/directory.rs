//! Directory-listing callback stubs and sort-method constants.
//!
//! Inside the host, a plugin add-on builds its virtual directory by
//! calling these functions with the integer handle it was started
//! with; the host renders the result. Outside the host nothing renders,
//! so every function here only echoes its arguments as a diagnostic
//! line and returns a constant success value. The `SORT_METHOD_*`
//! constants keep the host's integer values so code written against the
//! stub passes the same numbers the real API expects.

use crate::host;
use crate::listitem::ListItem;

pub const SORT_METHOD_NONE: i32 = 0;
pub const SORT_METHOD_LABEL: i32 = 1;
pub const SORT_METHOD_LABEL_IGNORE_THE: i32 = 2;
pub const SORT_METHOD_DATE: i32 = 3;
pub const SORT_METHOD_SIZE: i32 = 4;
pub const SORT_METHOD_FILE: i32 = 5;
pub const SORT_METHOD_DRIVE_TYPE: i32 = 6;
pub const SORT_METHOD_TRACKNUM: i32 = 7;
pub const SORT_METHOD_DURATION: i32 = 8;
pub const SORT_METHOD_TITLE: i32 = 9;
pub const SORT_METHOD_TITLE_IGNORE_THE: i32 = 10;
pub const SORT_METHOD_ARTIST: i32 = 11;
pub const SORT_METHOD_ARTIST_IGNORE_THE: i32 = 13;
pub const SORT_METHOD_ALBUM: i32 = 14;
pub const SORT_METHOD_ALBUM_IGNORE_THE: i32 = 15;
pub const SORT_METHOD_GENRE: i32 = 16;
pub const SORT_METHOD_COUNTRY: i32 = 17;
pub const SORT_METHOD_VIDEO_YEAR: i32 = 18;
pub const SORT_METHOD_VIDEO_RATING: i32 = 19;
pub const SORT_METHOD_VIDEO_USER_RATING: i32 = 20;
pub const SORT_METHOD_DATEADDED: i32 = 21;
pub const SORT_METHOD_PROGRAM_COUNT: i32 = 22;
pub const SORT_METHOD_PLAYLIST_ORDER: i32 = 23;
pub const SORT_METHOD_EPISODE: i32 = 24;
pub const SORT_METHOD_VIDEO_TITLE: i32 = 25;
pub const SORT_METHOD_VIDEO_SORT_TITLE: i32 = 26;
pub const SORT_METHOD_VIDEO_SORT_TITLE_IGNORE_THE: i32 = 27;
pub const SORT_METHOD_PRODUCTIONCODE: i32 = 28;
pub const SORT_METHOD_SONG_RATING: i32 = 29;
pub const SORT_METHOD_SONG_USER_RATING: i32 = 30;
pub const SORT_METHOD_MPAA_RATING: i32 = 31;
pub const SORT_METHOD_VIDEO_RUNTIME: i32 = 32;
pub const SORT_METHOD_STUDIO: i32 = 33;
pub const SORT_METHOD_STUDIO_IGNORE_THE: i32 = 34;
pub const SORT_METHOD_FULLPATH: i32 = 35;
pub const SORT_METHOD_LABEL_IGNORE_FOLDERS: i32 = 36;
pub const SORT_METHOD_LASTPLAYED: i32 = 37;
pub const SORT_METHOD_PLAYCOUNT: i32 = 38;
pub const SORT_METHOD_LISTENERS: i32 = 39;
pub const SORT_METHOD_UNSORTED: i32 = 40;
pub const SORT_METHOD_CHANNEL: i32 = 41;
pub const SORT_METHOD_BITRATE: i32 = 43;
pub const SORT_METHOD_DATE_TAKEN: i32 = 44;

/// Hand one directory entry to the host. Always reports success.
pub fn add_directory_item(
    handle: i32,
    url: &str,
    item: &ListItem,
    is_folder: bool,
    total_items: usize,
) -> bool {
    host::log(format!(
        "directory.add_directory_item(handle={}, url={}, item={}, is_folder={}, total_items={})",
        handle, url, item, is_folder, total_items
    ));
    true
}

/// List form of [`add_directory_item`]; may be called repeatedly to add
/// entries in chunks.
pub fn add_directory_items(handle: i32, items: &[(String, ListItem, bool)], total_items: usize) -> bool {
    for (url, item, is_folder) in items {
        add_directory_item(handle, url, item, *is_folder, total_items);
    }
    true
}

/// Tell the host the listing is complete. Only the flags that are set
/// are echoed.
pub fn end_of_directory(handle: i32, succeeded: bool, update_listing: bool, cache_to_disc: bool) {
    let mut params = vec![format!("handle={}", handle)];
    if succeeded {
        params.push("succeeded=true".to_string());
    }
    if update_listing {
        params.push("update_listing=true".to_string());
    }
    if cache_to_disc {
        params.push("cache_to_disc=true".to_string());
    }
    host::log(format!("directory.end_of_directory({})", params.join(", ")));
}

/// Tell the host which item a playable-file plugin resolved to.
pub fn set_resolved_url(handle: i32, succeeded: bool, item: &ListItem) {
    host::log(format!(
        "directory.set_resolved_url(handle={}, succeeded={}, item={})",
        handle, succeeded, item
    ));
}

/// Register a sort method for the listing; call once per method. The
/// mask formats the entry's second label and is echoed only when given.
pub fn add_sort_method(handle: i32, sort_method: i32, label2_mask: &str) {
    let mut params = vec![format!("handle={}", handle), format!("sort_method={}", sort_method)];
    if !label2_mask.is_empty() {
        params.push(format!("label2_mask={}", label2_mask));
    }
    host::log(format!("directory.add_sort_method({})", params.join(", ")));
}

/// Plugin-setting read through the handle. The stub has no handle-bound
/// add-on, so this always answers the empty string.
pub fn setting(handle: i32, id: &str) -> String {
    host::log(format!("directory.setting(handle={}, id={})", handle, id));
    String::new()
}

/// Plugin-setting write through the handle. Log-only; the registry is
/// not touched.
pub fn set_setting(handle: i32, id: &str, value: &str) {
    host::log(format!(
        "directory.set_setting(handle={}, id={}, value={})",
        handle, id, value
    ));
}

/// Declare the listing's content type (e.g. `movies`, `episodes`).
pub fn set_content(handle: i32, content: &str) {
    host::log(format!(
        "directory.set_content(handle={}, content={})",
        handle, content
    ));
}

/// Name the plugin's current sub-category for skins to display.
pub fn set_plugin_category(handle: i32, category: &str) {
    host::log(format!(
        "directory.set_plugin_category(handle={}, category={})",
        handle, category
    ));
}

/// Fanart image and accent colors for skins. Only the arguments that
/// are provided are echoed.
pub fn set_plugin_fanart(
    handle: i32,
    image: Option<&str>,
    color1: Option<&str>,
    color2: Option<&str>,
    color3: Option<&str>,
) {
    let mut params = vec![format!("handle={}", handle)];
    if let Some(image) = image {
        params.push(format!("image={}", image));
    }
    if let Some(color1) = color1 {
        params.push(format!("color1={}", color1));
    }
    if let Some(color2) = color2 {
        params.push(format!("color2={}", color2));
    }
    if let Some(color3) = color3 {
        params.push(format!("color3={}", color3));
    }
    host::log(format!("directory.set_plugin_fanart({})", params.join(", ")));
}

/// Set a container property on the listing. Keys are case-insensitive
/// in the host.
pub fn set_property(handle: i32, key: &str, value: &str) {
    host::log(format!(
        "directory.set_property(handle={}, key={}, value={})",
        handle, key, value
    ));
}
