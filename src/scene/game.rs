//! Game scene: the riddle standing between the visitor and the letter.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{action_button, styled, text_input};

pub(super) fn render(doc: &Document, root: &Element, question: &str) -> Result<(), JsValue> {
    let title = styled(
        doc,
        "h2",
        "font-size:clamp(1.8rem, 6vw, 2.6rem); color:#2A5D4E; margin:0;",
    )?;
    title.set_text_content(Some("🧩 Birthday Riddle Challenge"));
    root.append_child(&title)?;

    let lede = styled(
        doc,
        "p",
        "font-size:1.05rem; color:#2A5D4E; opacity:0.8; margin-top:10px;",
    )?;
    lede.set_text_content(Some("Solve the riddle to unlock the last surprise."));
    root.append_child(&lede)?;

    let prompt = styled(
        doc,
        "p",
        "font-size:1.3rem; font-style:italic; color:#2A5D4E; max-width:520px; margin-top:20px;",
    )?;
    prompt.set_text_content(Some(question));
    root.append_child(&prompt)?;

    root.append_child(&text_input(
        doc,
        "bb-riddle-input",
        "Your answer…",
        super::submit_guess,
    )?.into())?;
    root.append_child(&action_button(doc, "Submit answer", super::submit_guess)?.into())?;

    // Feedback first, hint line beneath it; both filled in by the submit handler.
    let feedback = styled(
        doc,
        "p",
        "font-size:1.05rem; color:#2A5D4E; margin-top:16px; min-height:1.2em;",
    )?;
    feedback.set_id("bb-riddle-feedback");
    root.append_child(&feedback)?;

    let hint = styled(
        doc,
        "p",
        "font-size:1rem; color:#2A5D4E; opacity:0.8; margin-top:6px; min-height:1.2em;",
    )?;
    hint.set_id("bb-riddle-hint");
    root.append_child(&hint)?;
    Ok(())
}
