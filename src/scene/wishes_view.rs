//! Wishes scene: free-text wishes with a running count.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{Scene, action_button, nav_button, styled, text_input};

pub(super) fn render(doc: &Document, root: &Element, count: usize) -> Result<(), JsValue> {
    let title = styled(
        doc,
        "h2",
        "font-size:clamp(1.8rem, 6vw, 2.6rem); color:#2A5D4E; margin:0;",
    )?;
    title.set_text_content(Some("Birthday Wishes 💖"));
    root.append_child(&title)?;

    let lede = styled(
        doc,
        "p",
        "font-size:1.1rem; color:#2A5D4E; opacity:0.85; margin-top:10px;",
    )?;
    lede.set_text_content(Some("Special wishes filled with love just for you!"));
    root.append_child(&lede)?;

    let placeholder = format!("Type your wish for {}…", crate::BIRTHDAY_NAME);
    root.append_child(&text_input(
        doc,
        "bb-wish-input",
        &placeholder,
        super::submit_wish,
    )?.into())?;
    root.append_child(&action_button(doc, "Send wish 💌", super::submit_wish)?.into())?;

    let counter = styled(
        doc,
        "p",
        "font-size:1rem; color:#2A5D4E; opacity:0.75; margin-top:14px; min-height:1.2em;",
    )?;
    counter.set_id("bb-wish-count");
    counter.set_text_content(Some(&count_label(count)));
    root.append_child(&counter)?;

    root.append_child(&nav_button(doc, "On to a little game 🎲", Scene::Game)?.into())?;
    Ok(())
}

/// "N wishes sent" label; silent until the first wish lands.
pub(super) fn count_label(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => "1 wish sent 💖".to_owned(),
        n => format!("{n} wishes sent 💖"),
    }
}
