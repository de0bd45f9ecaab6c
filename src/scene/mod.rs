//! Scene direction and presentation.
//!
//! `Scene` and `Director` form the pure five-scene state machine (natively
//! testable). Below them sits the browser layer: a thread-local `CardState`,
//! DOM scene views under `src/scene/*.rs`, and a `requestAnimationFrame`
//! loop that paints the decorative backdrop (gradient, drifting particles,
//! confetti bursts, floating wish notes) and drives the letter typing effect.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlInputElement, window,
};

use crate::audio::SoundCues;
use crate::riddle::RiddleGate;
use crate::storage::LocalKeys;
use crate::wishes::WishCollector;

mod game;
mod landing;
mod letter;
mod memory;
mod wishes_view;

/// Delay between a correct riddle answer and the jump to the letter scene.
/// Pacing only; nothing depends on it for correctness.
pub const SOLVE_ADVANCE_DELAY_MS: i32 = 2_000;

/// The five mutually exclusive full-screen views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Landing,
    Memory,
    Wishes,
    Game,
    Letter,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Landing,
        Scene::Memory,
        Scene::Wishes,
        Scene::Game,
        Scene::Letter,
    ];

    /// Next stop on the default button flow; the letter loops back to the
    /// landing scene. Any scene may still jump anywhere via `advance`.
    pub fn next_in_flow(self) -> Scene {
        match self {
            Scene::Landing => Scene::Memory,
            Scene::Memory => Scene::Wishes,
            Scene::Wishes => Scene::Game,
            Scene::Game => Scene::Letter,
            Scene::Letter => Scene::Landing,
        }
    }

    /// Backdrop gradient stops, top then bottom.
    fn backdrop(self) -> (&'static str, &'static str) {
        match self {
            Scene::Landing => ("#FFF8F2", "#FFD9CC"),
            Scene::Memory => ("#667EEA", "#764BA2"),
            Scene::Wishes => ("#FFECD2", "#FCB69F"),
            Scene::Game => ("#A8EDEA", "#FED6E3"),
            Scene::Letter => ("#FF9A9E", "#FAD0C4"),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::Landing
    }
}

/// Pure scene state machine: the current scene plus an epoch that delayed
/// transitions are checked against so a stale timer never acts on a
/// superseded scene instance.
#[derive(Debug, Default)]
pub struct Director {
    current: Scene,
    epoch: u64,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    /// Unconditionally makes `target` the active scene. Total over the enum;
    /// no transition is illegal. Returns the token a delayed follow-up must
    /// present to still apply.
    pub fn advance(&mut self, target: Scene) -> u64 {
        self.current = target;
        self.epoch += 1;
        self.epoch
    }

    /// Whether `token` still names the live scene instance.
    pub fn accepts(&self, token: u64) -> bool {
        self.epoch == token
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

// --- Decorative backdrop state -----------------------------------------------

/// Soft circle drifting upward, in canvas-fraction coordinates.
struct Particle {
    x: f64,
    y: f64,
    radius: f64,
    speed: f64, // fraction of canvas height per second
    sway: f64,
    phase: f64,
}

/// Physics-driven confetti rectangle, in pixels.
struct ConfettiPiece {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
    angle: f64,
    spin: f64,
    color: &'static str,
    born_ms: f64,
}

/// Transient acknowledgment text rising from the wish input.
struct FloatingNote {
    text: String,
    born_ms: f64,
}

const PARTICLE_COUNT: usize = 28;
const CONFETTI_COLORS: &[&str] = &["#FFD9CC", "#E8A0A9", "#FFF8F2", "#A8EDEA", "#FED6E3"];
const CONFETTI_LIFE_MS: f64 = 2_600.0;
const CONFETTI_GRAVITY: f64 = 640.0; // px per second squared
const NOTE_LIFE_MS: f64 = 2_400.0;
const LETTER_TYPE_MS: f64 = 35.0; // per revealed character

/// Runtime card state.
struct CardState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    director: Director,
    // Fresh per game-scene entry, None everywhere else.
    riddle: Option<RiddleGate>,
    wishes: WishCollector<LocalKeys>,
    sound: SoundCues<LocalKeys>,
    particles: Vec<Particle>,
    confetti: Vec<ConfettiPiece>,
    notes: Vec<FloatingNote>,
    letter_started_ms: f64,
    last_frame_ms: f64,
}

thread_local! {
    static CARD_STATE: RefCell<Option<CardState>> = RefCell::new(None);
}

// --- Entry -------------------------------------------------------------------

pub fn start_card() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);

    // Backdrop canvas sits under the scene content.
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("bb-canvas") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("bb-canvas");
        c.set_width(width as u32);
        c.set_height(height as u32);
        c.set_attribute(
            "style",
            "position:fixed; inset:0; width:100vw; height:100vh; z-index:0;",
        )?;
        body.append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")?.unwrap().dyn_into()?;

    // Scene container above the canvas; views rebuild its children.
    if doc.get_element_by_id("bb-root").is_none() {
        let root = doc.create_element("div")?;
        root.set_id("bb-root");
        root.set_attribute(
            "style",
            "position:fixed; inset:0; z-index:10; display:flex; flex-direction:column; \
             align-items:center; justify-content:center; text-align:center; \
             font-family:'Poppins', 'Segoe UI', sans-serif; overflow-y:auto; padding:24px;",
        )?;
        body.append_child(&root)?;
    }

    let store = LocalKeys;
    let sound = SoundCues::new(store);

    // Persistent mute toggle, top-right above every scene.
    if doc.get_element_by_id("bb-mute").is_none() {
        let toggle = doc.create_element("button")?;
        toggle.set_id("bb-mute");
        toggle.set_text_content(Some(mute_label(sound.is_muted())));
        toggle.set_attribute(
            "style",
            "position:fixed; top:14px; right:16px; z-index:50; font-size:20px; \
             padding:8px 12px; background:rgba(255,255,255,0.55); border:1px solid \
             rgba(255,255,255,0.7); border-radius:50%; cursor:pointer;",
        )?;
        let closure = Closure::wrap(Box::new(move || toggle_mute()) as Box<dyn FnMut()>);
        toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        body.append_child(&toggle)?;
    }

    let now = win.performance().map(|p| p.now()).unwrap_or(0.0);
    let particles = spawn_particles(PARTICLE_COUNT);

    CARD_STATE.with(|cell| {
        cell.replace(Some(CardState {
            canvas,
            ctx,
            director: Director::new(),
            riddle: None,
            wishes: WishCollector::new(store),
            sound,
            particles,
            confetti: Vec::new(),
            notes: Vec::new(),
            letter_started_ms: now,
            last_frame_ms: now,
        }))
    });

    advance(Scene::Landing);
    start_frame_loop();
    Ok(())
}

// --- Scene switching ---------------------------------------------------------

/// Switches scenes and re-renders. Entering the game scene mints a fresh
/// riddle gate; leaving it drops the old one, so attempts never carry over.
fn advance(target: Scene) {
    CARD_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            state.director.advance(target);
            state.riddle = match target {
                Scene::Game => Some(RiddleGate::birthday()),
                _ => None,
            };
            if target == Scene::Letter {
                state.letter_started_ms = now_ms();
            }
            let _ = present(state);
        }
    });
}

/// Fires `advance(target)` after `delay_ms`, unless some other transition
/// happened in between; the timer captures the current epoch and the callback
/// re-checks it before acting.
fn schedule_advance(target: Scene, delay_ms: i32) {
    let token = CARD_STATE.with(|cell| cell.borrow().as_ref().map(|s| s.director.epoch()));
    let Some(token) = token else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        let live = CARD_STATE.with(|cell| {
            cell.borrow()
                .as_ref()
                .is_some_and(|s| s.director.accepts(token))
        });
        if live {
            advance(target);
        }
    }) as Box<dyn FnMut()>);
    if let Some(win) = window() {
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
    }
    closure.forget();
}

/// Rebuilds the scene container for the active scene.
fn present(state: &mut CardState) -> Result<(), JsValue> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = doc
        .get_element_by_id("bb-root")
        .ok_or_else(|| JsValue::from_str("no scene root"))?;
    root.set_inner_html("");
    match state.director.current() {
        Scene::Landing => landing::render(&doc, &root)?,
        Scene::Memory => memory::render(&doc, &root)?,
        Scene::Wishes => wishes_view::render(&doc, &root, state.wishes.count())?,
        Scene::Game => {
            let question = state
                .riddle
                .as_ref()
                .map(|gate| gate.question())
                .unwrap_or(crate::riddle::QUESTION);
            game::render(&doc, &root, question)?;
        }
        Scene::Letter => letter::render(&doc, &root)?,
    }
    Ok(())
}

// --- Event handlers (called from view closures) ------------------------------

/// Button press acknowledgment cue.
fn click_cue() {
    CARD_STATE.with(|cell| {
        if let Some(state) = cell.borrow().as_ref() {
            state.sound.play_click();
        }
    });
}

fn toggle_mute() {
    CARD_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let muted = state.sound.toggle_mute();
            if let Some(doc) = window().and_then(|w| w.document()) {
                if let Some(el) = doc.get_element_by_id("bb-mute") {
                    el.set_text_content(Some(mute_label(muted)));
                }
            }
        }
    });
}

fn mute_label(muted: bool) -> &'static str {
    if muted { "🔇" } else { "🔊" }
}

/// Reads the wish input, submits it and, when accepted, floats the wish text,
/// updates the count label and throws a small confetti burst.
fn submit_wish() {
    CARD_STATE.with(|cell| {
        if let Some(state) = cell.borrow_mut().as_mut() {
            let Some(doc) = window().and_then(|w| w.document()) else {
                return;
            };
            let Some(text) = input_value(&doc, "bb-wish-input") else {
                return;
            };
            let Some(accepted) = state.wishes.submit(&text).map(str::to_owned) else {
                return;
            };
            state.sound.play_click();
            state.notes.push(FloatingNote {
                text: accepted,
                born_ms: now_ms(),
            });
            burst(state, 0.5, 0.62, 36);
            set_input_value(&doc, "bb-wish-input", "");
            if let Some(el) = doc.get_element_by_id("bb-wish-count") {
                el.set_text_content(Some(&wishes_view::count_label(state.wishes.count())));
            }
        }
    });
}

/// Reads the guess input and runs it through the riddle gate. A correct
/// guess celebrates and schedules the letter transition; a wrong one updates
/// the feedback and hint lines and clears the input.
fn submit_guess() {
    let solved = CARD_STATE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let state = borrow.as_mut()?;
        let doc = window().and_then(|w| w.document())?;
        let gate = state.riddle.as_mut()?;
        if gate.solved() {
            return None;
        }
        let raw = input_value(&doc, "bb-riddle-input")?;
        if gate.submit_guess(&raw) {
            state.sound.play_success();
            if let Some(el) = doc.get_element_by_id("bb-riddle-feedback") {
                el.set_text_content(Some("🎉 Yes! One more surprise coming up…"));
            }
            burst(state, 0.5, 0.55, 90);
            Some(true)
        } else {
            set_input_value(&doc, "bb-riddle-input", "");
            if let Some(el) = doc.get_element_by_id("bb-riddle-feedback") {
                el.set_text_content(Some("Not quite — try again!"));
            }
            if let Some(hint) = state.riddle.as_ref().and_then(|g| g.hint()) {
                if let Some(el) = doc.get_element_by_id("bb-riddle-hint") {
                    el.set_text_content(Some(&format!("💡 Hint: {hint}")));
                }
            }
            Some(false)
        }
    });
    if solved == Some(true) {
        schedule_advance(Scene::Letter, SOLVE_ADVANCE_DELAY_MS);
    }
}

// --- DOM helpers shared by the views -----------------------------------------

fn styled(doc: &Document, tag: &str, style: &str) -> Result<Element, JsValue> {
    let el = doc.create_element(tag)?;
    el.set_attribute("style", style)?;
    Ok(el)
}

/// Capsule nav button that plays the click cue and jumps to `target`.
fn nav_button(doc: &Document, label: &str, target: Scene) -> Result<Element, JsValue> {
    let button = styled(
        doc,
        "button",
        "margin-top:26px; padding:14px 32px; font-size:1.1rem; font-weight:bold; \
         color:#2A5D4E; background:rgba(255,255,255,0.45); border:2px solid \
         rgba(255,255,255,0.5); border-radius:50px; cursor:pointer; max-width:300px;",
    )?;
    button.set_text_content(Some(label));
    let closure = Closure::wrap(Box::new(move || {
        click_cue();
        advance(target);
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(button)
}

/// Text input that runs `on_enter` when Enter is pressed.
fn text_input(
    doc: &Document,
    id: &str,
    placeholder: &str,
    on_enter: fn(),
) -> Result<Element, JsValue> {
    let input = styled(
        doc,
        "input",
        "margin-top:18px; padding:12px 18px; font-size:1rem; width:min(320px, 80vw); \
         border:2px solid rgba(255,255,255,0.8); border-radius:14px; outline:none; \
         background:rgba(255,255,255,0.75); color:#2A5D4E;",
    )?;
    input.set_id(id);
    input.set_attribute("placeholder", placeholder)?;
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        if evt.key() == "Enter" {
            on_enter();
        }
    }) as Box<dyn FnMut(_)>);
    input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(input)
}

/// Action button wired to a plain handler instead of a scene jump.
fn action_button(doc: &Document, label: &str, on_click: fn()) -> Result<Element, JsValue> {
    let button = styled(
        doc,
        "button",
        "margin-top:16px; padding:12px 28px; font-size:1rem; font-weight:bold; \
         color:#FFF8F2; background:#E8A0A9; border:none; border-radius:50px; cursor:pointer;",
    )?;
    button.set_text_content(Some(label));
    let closure = Closure::wrap(Box::new(move || on_click()) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(button)
}

fn input_value(doc: &Document, id: &str) -> Option<String> {
    let input: HtmlInputElement = doc.get_element_by_id(id)?.dyn_into().ok()?;
    Some(input.value())
}

fn set_input_value(doc: &Document, id: &str, value: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
            input.set_value(value);
        }
    }
}

// --- Backdrop animation ------------------------------------------------------

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

type FrameCallback = std::rc::Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = std::rc::Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        CARD_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                card_tick(state, ts);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn card_tick(state: &mut CardState, now: f64) {
    let dt = ((now - state.last_frame_ms) / 1000.0).clamp(0.0, 0.1);
    state.last_frame_ms = now;

    let w = state.canvas.width() as f64;
    let h = state.canvas.height() as f64;

    // Particles drift upward and wrap.
    for p in &mut state.particles {
        p.y -= p.speed * dt;
        if p.y < -0.05 {
            p.y = 1.05;
            p.x = rand_unit();
        }
    }

    // Confetti falls under gravity and expires.
    for piece in &mut state.confetti {
        piece.vy += CONFETTI_GRAVITY * dt;
        piece.x += piece.vx * dt;
        piece.y += piece.vy * dt;
        piece.angle += piece.spin * dt;
    }
    state
        .confetti
        .retain(|piece| now - piece.born_ms < CONFETTI_LIFE_MS && piece.y < h + 40.0);

    state.notes.retain(|note| now - note.born_ms < NOTE_LIFE_MS);

    render_backdrop(state, now, w, h);

    // Letter typing effect: reveal by character, not by byte.
    if state.director.current() == Scene::Letter {
        let revealed = ((now - state.letter_started_ms) / LETTER_TYPE_MS).max(0.0) as usize;
        if let Some(doc) = window().and_then(|win| win.document()) {
            if let Some(el) = doc.get_element_by_id("bb-letter-text") {
                let text: String = crate::LETTER_TEXT.chars().take(revealed).collect();
                el.set_text_content(Some(&text));
            }
        }
    }
}

fn render_backdrop(state: &mut CardState, now: f64, w: f64, h: f64) {
    let (top, bottom) = state.director.current().backdrop();
    let gradient = state.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    gradient.add_color_stop(0.0, top).ok();
    gradient.add_color_stop(1.0, bottom).ok();
    state.ctx.set_fill_style_canvas_gradient(&gradient);
    state.ctx.fill_rect(0.0, 0.0, w, h);

    // Soft drifting circles.
    for p in &state.particles {
        let sway = (now / 1000.0 + p.phase).sin() * p.sway;
        let px = (p.x + sway) * w;
        let py = p.y * h;
        state.ctx.set_fill_style_str("rgba(255,255,255,0.22)");
        state.ctx.begin_path();
        state
            .ctx
            .arc(px, py, p.radius, 0.0, std::f64::consts::TAU)
            .ok();
        state.ctx.fill();
    }

    // Confetti rectangles, rotated and fading out over their lifetime.
    for piece in &state.confetti {
        let age = (now - piece.born_ms) / CONFETTI_LIFE_MS;
        let alpha = (1.0 - age).clamp(0.0, 1.0);
        state.ctx.save();
        state.ctx.set_global_alpha(alpha);
        state.ctx.translate(piece.x, piece.y).ok();
        state.ctx.rotate(piece.angle).ok();
        state.ctx.set_fill_style_str(piece.color);
        state.ctx.fill_rect(
            -piece.size / 2.0,
            -piece.size / 2.0,
            piece.size,
            piece.size * 0.6,
        );
        state.ctx.restore();
    }

    // Floating wish notes rise and fade.
    if !state.notes.is_empty() {
        state.ctx.set_font("22px 'Poppins', 'Segoe UI', sans-serif");
        state.ctx.set_text_align("center");
        for note in &state.notes {
            let age = (now - note.born_ms) / NOTE_LIFE_MS;
            let alpha = (1.0 - age).clamp(0.0, 1.0);
            let py = h * 0.55 - age * h * 0.25;
            state
                .ctx
                .set_fill_style_str(&format!("rgba(42,93,78,{alpha:.3})"));
            state.ctx.fill_text(&note.text, w / 2.0, py).ok();
        }
    }
}

/// Throws `count` confetti pieces from a canvas-fraction origin.
fn burst(state: &mut CardState, origin_x: f64, origin_y: f64, count: usize) {
    let w = state.canvas.width() as f64;
    let h = state.canvas.height() as f64;
    let born = now_ms();
    for i in 0..count {
        let angle = rand_unit() * std::f64::consts::TAU;
        let speed = 120.0 + rand_unit() * 260.0;
        state.confetti.push(ConfettiPiece {
            x: origin_x * w,
            y: origin_y * h,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed - 180.0,
            size: 5.0 + rand_unit() * 7.0,
            angle: rand_unit() * std::f64::consts::TAU,
            spin: (rand_unit() - 0.5) * 8.0,
            color: CONFETTI_COLORS[i % CONFETTI_COLORS.len()],
            born_ms: born,
        });
    }
}

fn spawn_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rand_unit(),
            y: rand_unit(),
            radius: 6.0 + rand_unit() * 22.0,
            speed: 0.015 + rand_unit() * 0.04,
            sway: 0.004 + rand_unit() * 0.012,
            phase: rand_unit() * std::f64::consts::TAU,
        })
        .collect()
}

// Decorative randomness only; seeded from performance.now on first use.
thread_local! {
    static RNG_SEED: std::cell::Cell<u64> = std::cell::Cell::new(0);
}

fn rand_unit() -> f64 {
    RNG_SEED.with(|seed| {
        let mut s = seed.get();
        if s == 0 {
            s = (now_ms() as u64) | 1;
        }
        s = s.wrapping_mul(1664525).wrapping_add(1013904223);
        seed.set(s);
        (s >> 16 & 0xFFFF) as f64 / 65536.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_total_over_scenes() {
        for &from in Scene::ALL.iter() {
            for &to in Scene::ALL.iter() {
                let mut director = Director::new();
                director.advance(from);
                director.advance(to);
                assert_eq!(director.current(), to);
            }
        }
    }

    #[test]
    fn default_flow_cycles_through_all_scenes() {
        let mut scene = Scene::Landing;
        let mut seen = Vec::new();
        for _ in 0..Scene::ALL.len() {
            seen.push(scene);
            scene = scene.next_in_flow();
        }
        assert_eq!(scene, Scene::Landing);
        assert_eq!(seen, Scene::ALL);
    }

    #[test]
    fn stale_tokens_are_rejected() {
        let mut director = Director::new();
        let token = director.advance(Scene::Game);
        assert!(director.accepts(token));
        director.advance(Scene::Landing);
        assert!(!director.accepts(token));
    }

    #[test]
    fn every_scene_has_a_backdrop() {
        for &scene in Scene::ALL.iter() {
            let (top, bottom) = scene.backdrop();
            assert!(top.starts_with('#') && bottom.starts_with('#'));
        }
    }
}
