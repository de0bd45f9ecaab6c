//! Landing scene: greeting and the way in.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::storage::{self, LocalKeys};

use super::{Scene, nav_button, styled};

pub(super) fn render(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let returning = storage::visited(&LocalKeys);

    let title = styled(
        doc,
        "h1",
        "font-size:clamp(2.4rem, 8vw, 4rem); color:#2A5D4E; margin:0;",
    )?;
    title.set_text_content(Some(&format!(
        "🎉 Happy Birthday, {}! 🎉",
        crate::BIRTHDAY_NAME
    )));
    root.append_child(&title)?;

    let subtitle = styled(
        doc,
        "p",
        "font-size:1.2rem; color:#2A5D4E; opacity:0.8; margin-top:12px;",
    )?;
    subtitle.set_text_content(Some(if returning {
        "Welcome back — the candles are still lit."
    } else {
        "A little something made just for you."
    }));
    root.append_child(&subtitle)?;

    root.append_child(&nav_button(doc, "Begin the celebration ✨", Scene::Memory)?.into())?;

    storage::mark_visited(&LocalKeys);
    Ok(())
}
