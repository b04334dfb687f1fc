use js_sys::Function;
use wasm_bindgen::prelude::*;

pub mod counter;
pub mod display;
pub mod error;
pub mod logging;
pub mod settings;

pub use counter::{CountAction, CountEngine};
pub use display::Readout;
pub use error::CounterError;
pub use settings::{Settings, SettingsInput};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; the existing one stays.
    logging::init(log::LevelFilter::Info).ok();
}

/// Counter handle owned by the front end. Every mutation re-renders through
/// the subscribed listener.
#[wasm_bindgen]
pub struct WasmCounter {
    engine: CountEngine,
    settings_visible: bool,
    listener: Option<Function>,
}

#[wasm_bindgen]
impl WasmCounter {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> Result<WasmCounter, JsValue> {
        let settings = if params.is_undefined() || params.is_null() {
            Settings::default()
        } else {
            let input: SettingsInput = serde_wasm_bindgen::from_value(params.clone())
                .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
            input
                .resolve()
                .map_err(|err| JsValue::from_str(&format!("Invalid settings: {err}")))?
        };
        log::info!(
            "counter ready: {} decks, base bet {}",
            settings.initial_decks,
            settings.base_bet
        );
        Ok(WasmCounter {
            engine: CountEngine::with_settings(settings),
            settings_visible: false,
            listener: None,
        })
    }

    pub fn increment(&mut self) {
        self.engine.increment();
        self.notify();
    }

    pub fn decrement(&mut self) {
        self.engine.decrement();
        self.notify();
    }

    pub fn decrease_deck(&mut self) {
        self.engine.decrease_deck();
        self.notify();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.notify();
    }

    pub fn tap(&mut self, code: &str) -> Result<(), JsValue> {
        let action = CountAction::from_code(code)
            .map_err(|err| JsValue::from_str(&format!("Tap failed: {err}")))?;
        self.engine.apply(action);
        self.notify();
        Ok(())
    }

    pub fn set_initial_decks(&mut self, value: &JsValue) -> Result<(), JsValue> {
        let result = js_to_number(settings::INITIAL_DECKS_FIELD, value)
            .and_then(|decks| self.engine.set_initial_decks(decks));
        self.finish_setting(result)
    }

    pub fn set_base_bet(&mut self, value: &JsValue) -> Result<(), JsValue> {
        let result = js_to_number(settings::BASE_BET_FIELD, value)
            .and_then(|base_bet| self.engine.set_base_bet(base_bet));
        self.finish_setting(result)
    }

    pub fn true_count(&self) -> f64 {
        self.engine.true_count()
    }

    pub fn bet(&self) -> f64 {
        self.engine.bet()
    }

    pub fn running_count(&self) -> i32 {
        self.engine.running_count()
    }

    pub fn decks_remaining(&self) -> f64 {
        self.engine.decks_remaining()
    }

    pub fn initial_decks(&self) -> f64 {
        self.engine.initial_decks()
    }

    pub fn base_bet(&self) -> f64 {
        self.engine.base_bet()
    }

    pub fn readout(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&Readout::from_engine(&self.engine))
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    pub fn toggle_settings(&mut self) -> bool {
        self.settings_visible = !self.settings_visible;
        self.settings_visible
    }

    pub fn settings_visible(&self) -> bool {
        self.settings_visible
    }

    pub fn subscribe(&mut self, callback: Function) {
        self.listener = Some(callback);
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }
}

impl WasmCounter {
    fn finish_setting(&self, result: Result<(), CounterError>) -> Result<(), JsValue> {
        match result {
            Ok(()) => {
                self.notify();
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}; keeping previous value");
                Err(JsValue::from_str(&format!("Invalid setting: {err}")))
            }
        }
    }

    fn notify(&self) {
        let Some(listener) = &self.listener else {
            return;
        };
        match self.readout() {
            Ok(readout) => {
                let _ = listener.call1(&JsValue::NULL, &readout);
            }
            Err(err) => log::error!("readout unavailable: {err:?}"),
        }
    }
}

/// Number inputs hand over either a JS number or the field's raw text.
fn js_to_number(field: &'static str, value: &JsValue) -> Result<f64, CounterError> {
    if let Some(number) = value.as_f64() {
        return Ok(number);
    }
    match value.as_string() {
        Some(raw) => settings::parse_numeric(field, &raw),
        None => Err(CounterError::invalid(field, format!("{value:?}"))),
    }
}
