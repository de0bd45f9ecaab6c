//! Memory lane scene: the shared-moments cards, walked in order.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{Scene, nav_button, styled};

pub(super) fn render(doc: &Document, root: &Element) -> Result<(), JsValue> {
    let title = styled(
        doc,
        "h2",
        "font-size:clamp(1.8rem, 6vw, 2.6rem); color:#FFF8F2; margin:0;",
    )?;
    title.set_text_content(Some("A Walk Down Memory Lane 💜"));
    root.append_child(&title)?;

    let deck = styled(
        doc,
        "div",
        "display:flex; flex-wrap:wrap; gap:14px; justify-content:center; \
         max-width:680px; margin-top:22px;",
    )?;
    for &(emoji, caption) in crate::MEMORIES {
        let card = styled(
            doc,
            "div",
            "width:180px; padding:18px 14px; background:rgba(255,255,255,0.18); \
             border:1px solid rgba(255,255,255,0.35); border-radius:16px; \
             backdrop-filter:blur(8px);",
        )?;
        let face = styled(doc, "div", "font-size:2.2rem;")?;
        face.set_text_content(Some(emoji));
        card.append_child(&face)?;
        let text = styled(
            doc,
            "p",
            "font-size:0.95rem; color:#FFF8F2; margin:10px 0 0;",
        )?;
        text.set_text_content(Some(caption));
        card.append_child(&text)?;
        deck.append_child(&card)?;
    }
    root.append_child(&deck)?;

    root.append_child(&nav_button(doc, "Make a wish →", Scene::Wishes)?.into())?;
    Ok(())
}
