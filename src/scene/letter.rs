//! Letter scene: the personal letter, typed out by the frame loop.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{Scene, nav_button, styled};

pub(super) fn render(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let title = styled(
        doc,
        "h2",
        "font-size:clamp(1.8rem, 6vw, 2.6rem); color:#6B2D3C; margin:0;",
    )?;
    title.set_text_content(Some("💌 Happy Birthday!"));
    root.append_child(&title)?;

    // The frame loop fills this in character by character from LETTER_TEXT.
    let text = styled(
        doc,
        "p",
        "font-size:1.1rem; color:#6B2D3C; max-width:560px; margin-top:20px; \
         text-align:left; white-space:pre-line; min-height:14em; line-height:1.6;",
    )?;
    text.set_id("bb-letter-text");
    root.append_child(&text)?;

    root.append_child(&nav_button(doc, "Replay from the start 🎈", Scene::Landing)?.into())?;
    Ok(())
}
