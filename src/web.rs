//! JS bindings
//!
//! Exposes `saveHighScore(score)` and `loadHighScore()` to the page, backed
//! by LocalStorage.

use wasm_bindgen::prelude::*;

use crate::highscore;
use crate::storage::LocalStore;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// Save the high score to LocalStorage
#[wasm_bindgen(js_name = saveHighScore)]
pub fn save_high_score(score: u32) {
    match LocalStore::open() {
        Ok(mut store) => highscore::save(&mut store, score),
        Err(err) => log::warn!("Cannot save high score {}: {}", score, err),
    }
}

/// Load the high score from LocalStorage (0 if never saved)
#[wasm_bindgen(js_name = loadHighScore)]
pub fn load_high_score() -> u32 {
    match LocalStore::open() {
        Ok(store) => highscore::load(&store),
        Err(err) => {
            log::warn!("Cannot load high score: {}", err);
            0
        }
    }
}
