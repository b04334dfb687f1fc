use crate::{
    error::CounterError,
    settings::{self, Settings, BASE_BET_FIELD, DECK_STEP, INITIAL_DECKS_FIELD},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CountAction {
    Increment,
    Decrement,
    DecreaseDeck,
    Reset,
}

impl CountAction {
    pub fn from_code(code: &str) -> Result<CountAction, CounterError> {
        match code.trim() {
            "+1" | "inc" => Ok(CountAction::Increment),
            "-1" | "dec" => Ok(CountAction::Decrement),
            "deck" => Ok(CountAction::DecreaseDeck),
            "reset" => Ok(CountAction::Reset),
            other => Err(CounterError::UnknownAction(other.to_string())),
        }
    }
}

/// Running count, shoe depth and bet unit for one counting session.
///
/// True count and bet are derived on every read and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CountEngine {
    running_count: i32,
    decks_remaining: f64,
    initial_decks: f64,
    base_bet: f64,
}

impl Default for CountEngine {
    fn default() -> Self {
        CountEngine::with_settings(Settings::default())
    }
}

impl CountEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        CountEngine {
            running_count: 0,
            decks_remaining: settings.initial_decks,
            initial_decks: settings.initial_decks,
            base_bet: settings.base_bet,
        }
    }

    pub fn increment(&mut self) {
        self.running_count = self.running_count.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.running_count = self.running_count.saturating_sub(1);
    }

    pub fn decrease_deck(&mut self) {
        let next = round_tenths(self.decks_remaining - DECK_STEP);
        // `f64::max` keeps -0.0, which would render as "-0.0".
        self.decks_remaining = if next > 0.0 { next } else { 0.0 };
        log::debug!("decks remaining: {:.1}", self.decks_remaining);
    }

    pub fn reset(&mut self) {
        self.running_count = 0;
        self.decks_remaining = self.initial_decks;
        log::debug!("count reset to {:.1} decks", self.initial_decks);
    }

    /// Only affects future resets; the shoe in progress keeps its depth.
    pub fn set_initial_decks(&mut self, decks: f64) -> Result<(), CounterError> {
        self.initial_decks = settings::validate(INITIAL_DECKS_FIELD, decks)?;
        Ok(())
    }

    /// Rejected values leave the current base bet in place.
    pub fn set_base_bet(&mut self, base_bet: f64) -> Result<(), CounterError> {
        self.base_bet = settings::validate(BASE_BET_FIELD, base_bet)?;
        Ok(())
    }

    pub fn true_count(&self) -> f64 {
        if self.decks_remaining <= 0.0 {
            return 0.0;
        }
        let tc = self.running_count as f64 / self.decks_remaining;
        if tc.is_finite() {
            tc
        } else {
            0.0
        }
    }

    pub fn bet(&self) -> f64 {
        self.base_bet.max(self.true_count() * self.base_bet)
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    pub fn decks_remaining(&self) -> f64 {
        self.decks_remaining
    }

    pub fn initial_decks(&self) -> f64 {
        self.initial_decks
    }

    pub fn base_bet(&self) -> f64 {
        self.base_bet
    }

    pub fn apply(&mut self, action: CountAction) {
        match action {
            CountAction::Increment => self.increment(),
            CountAction::Decrement => self.decrement(),
            CountAction::DecreaseDeck => self.decrease_deck(),
            CountAction::Reset => self.reset(),
        }
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
