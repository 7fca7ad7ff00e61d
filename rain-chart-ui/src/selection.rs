//! The selected year, persisted in browser localStorage under `year`.

/// localStorage key holding the last selected year.
pub const SELECTED_YEAR_KEY: &str = "year";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Year stored by a previous visit, if any and if it parses.
pub fn load_selected_year() -> Option<i32> {
    let raw = local_storage()?.get_item(SELECTED_YEAR_KEY).ok()??;
    raw.trim().parse().ok()
}

/// Remember `year` for the next visit. Storage failures are logged and
/// otherwise ignored.
pub fn save_selected_year(year: i32) {
    let Some(storage) = local_storage() else {
        log::warn!("selection: localStorage unavailable, year {} not saved", year);
        return;
    };
    if let Err(e) = storage.set_item(SELECTED_YEAR_KEY, &year.to_string()) {
        log::warn!("selection: failed to save year {}: {:?}", year, e);
    }
}

/// Pick the year to show at startup: the stored year if it has data,
/// otherwise `fallback` if it has data, otherwise the latest year.
pub fn initial_year(stored: Option<i32>, available: &[i32], fallback: i32) -> Option<i32> {
    stored
        .filter(|y| available.contains(y))
        .or_else(|| available.contains(&fallback).then_some(fallback))
        .or_else(|| available.last().copied())
}
