//! High score persistence
//!
//! A single `u32` stored as a decimal string under [`STORAGE_KEY`]. The
//! infallible `save`/`load` log storage failures and carry on; `try_*`
//! variants return them.

use crate::consts::{DEFAULT_RAW, STORAGE_KEY};
use crate::storage::{KeyValueStore, StoreError};

/// Parse a stored value with lenient integer coercion
///
/// Skips leading whitespace, accepts an optional sign and a `0x`/`0X` hex
/// prefix, then reads the longest run of digits in that radix and ignores
/// the rest. Returns `None` when there are no digits. Negative values clamp
/// to 0, values above `u32::MAX` saturate.
pub fn parse_score(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first().copied() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, s) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let digits: Vec<u32> = s.chars().map_while(|c| c.to_digit(radix)).collect();
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }

    let value = digits
        .into_iter()
        .fold(0u32, |acc, d| acc.saturating_mul(radix).saturating_add(d));
    Some(value)
}

/// Write `score`, replacing any previous value
pub fn try_save<S: KeyValueStore + ?Sized>(store: &mut S, score: u32) -> Result<(), StoreError> {
    store.set_item(STORAGE_KEY, &score.to_string())?;
    log::info!("Saved high score: {}", score);
    Ok(())
}

/// Read the stored score, 0 if nothing has been saved
pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<u32, StoreError> {
    let raw = store
        .get_item(STORAGE_KEY)?
        .unwrap_or_else(|| DEFAULT_RAW.to_string());
    log::info!("Loaded high score: {}", raw);

    Ok(parse_score(&raw).unwrap_or_else(|| {
        log::warn!("Stored high score {:?} is not a number, using 0", raw);
        0
    }))
}

/// Save the high score, logging (not returning) storage failures
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, score: u32) {
    if let Err(err) = try_save(store, score) {
        log::warn!("Failed to save high score {}: {}", score, err);
    }
}

/// Load the high score, falling back to 0 on storage failure
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    try_load(store).unwrap_or_else(|err| {
        log::warn!("Failed to load high score: {}", err);
        0
    })
}

/// Save `score` only if it beats the stored high score
///
/// Returns true when the score was written.
pub fn try_record<S: KeyValueStore + ?Sized>(store: &mut S, score: u32) -> Result<bool, StoreError> {
    let best = try_load(&*store)?;
    if score <= best {
        log::debug!("Score {} does not beat high score {}", score, best);
        return Ok(false);
    }
    try_save(store, score)?;
    Ok(true)
}

/// Remove the stored high score
pub fn try_clear<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    store.remove_item(STORAGE_KEY)?;
    log::info!("High score cleared");
    Ok(())
}

/// Like [`try_record`], but a failed read counts as 0 and a failed write
/// is logged and reported as not recorded
pub fn record<S: KeyValueStore + ?Sized>(store: &mut S, score: u32) -> bool {
    let best = load(&*store);
    if score <= best {
        log::debug!("Score {} does not beat high score {}", score, best);
        return false;
    }
    match try_save(store, score) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Failed to save high score {}: {}", score, err);
            false
        }
    }
}

/// Forget the stored high score
pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) {
    if let Err(err) = try_clear(store) {
        log::warn!("Failed to clear high score: {}", err);
    }
}
