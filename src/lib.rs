//! Birthday Bloom core crate.
//!
//! A scene-driven birthday greeting card: landing, memory lane, wishes, a
//! riddle game and a personal letter, linked by button presses. Pure logic
//! (scene direction, riddle gate, wish collection, persisted records, cue
//! tables) lives in plain modules so it runs under native `cargo test`;
//! everything DOM-flavored sits under `scene`.

use wasm_bindgen::prelude::*;

pub mod audio;
pub mod riddle;
pub mod scene;
pub mod secret;
pub mod storage;
pub mod wishes;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Card content datasets
// -----------------------------------------------------------------------------

/// Who the card is for. Shown on the landing scene and woven into the letter.
pub const BIRTHDAY_NAME: &str = "Sneha";

/// Memory lane cards: emoji + caption, shown in order.
pub const MEMORIES: &[(&str, &str)] = &[
    ("🌅", "Sunrise chai on the hostel roof"),
    ("🎬", "The movie night nobody stayed awake for"),
    ("🍜", "Midnight noodles after the last exam"),
    ("🎡", "That ferris wheel you swore you'd never ride"),
    ("📸", "A hundred retakes for one good photo"),
    ("🌧️", "Walking back from class in the rain, singing"),
];

/// The personal letter, revealed character by character on the final scene.
pub const LETTER_TEXT: &str = "Dear Sneha,\n\nSome people make ordinary days feel lighter just by being in them, and you are one of those people. Your smile and all the little things you say are my favourite playlist.\n\nToday is your day. May the year ahead be full of khushiyaan, surprises, and every small moment you deserve.\n\nHave the happiest birthday ever! 🎉";

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mounts the card into the current document and starts the animation loop.
#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    scene::start_card()
}
