//! Browser binding
//!
//! The page owns rendering and input; it forwards clicks and animation-frame
//! timestamps here and renders the cues it gets back as JSON.

use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{DropId, Session, profiles};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier instance
        return;
    }
    log::info!("Water Drop engine loaded");
}

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JSON list of the difficulty profiles, for the selection screen
#[wasm_bindgen]
pub fn difficulty_profiles() -> Result<String, JsValue> {
    serde_json::to_string(profiles()).map_err(to_js_err)
}

#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    /// Page time (ms) that maps to engine time zero
    origin_ms: Option<f64>,
}

#[wasm_bindgen]
impl WebSession {
    /// Create a session from optional settings JSON
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebSession, JsValue> {
        let mut settings = match settings_json {
            Some(json) => Settings::from_json(&json).map_err(to_js_err)?,
            None => Settings::default(),
        };
        if settings.seed == 0 {
            settings.seed = js_sys::Date::now() as u64;
        }
        log::info!("Session created with seed: {}", settings.seed);
        Ok(WebSession {
            session: Session::new(settings).map_err(to_js_err)?,
            origin_ms: None,
        })
    }

    pub fn select_difficulty(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.select_difficulty(name).map_err(to_js_err)
    }

    pub fn start(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.start(name).map_err(to_js_err)
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn collect_drop(&mut self, id: u32) {
        self.session.collect_drop(DropId(id));
    }

    pub fn set_surface(&mut self, width: f32, height: f32) {
        self.session.set_surface(width, height);
    }

    /// Feed a page timestamp (e.g. from requestAnimationFrame)
    pub fn frame(&mut self, timestamp_ms: f64) {
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let now = (timestamp_ms - origin).max(0.0) as u64;
        self.session.advance_to(now);
    }

    /// Drain pending cues as a JSON array
    pub fn drain_cues(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.drain_cues()).map_err(to_js_err)
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }
}
