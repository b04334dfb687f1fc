use serde::Serialize;

use crate::counter::CountEngine;

/// Everything the counter screen renders, as numbers and as display text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Readout {
    pub running_count: i32,
    pub true_count: f64,
    pub decks_remaining: f64,
    pub initial_decks: f64,
    pub base_bet: f64,
    pub bet: f64,
    pub running_count_text: String,
    pub true_count_text: String,
    pub decks_text: String,
    pub bet_text: String,
}

impl Readout {
    pub fn from_engine(engine: &CountEngine) -> Self {
        let true_count = engine.true_count();
        let bet = engine.bet();
        Readout {
            running_count: engine.running_count(),
            true_count,
            decks_remaining: engine.decks_remaining(),
            initial_decks: engine.initial_decks(),
            base_bet: engine.base_bet(),
            bet,
            running_count_text: format_signed(engine.running_count() as f64, 0),
            true_count_text: format_signed(true_count, 1),
            decks_text: format_fixed(engine.decks_remaining(), 1),
            bet_text: format_fixed(bet, 1),
        }
    }
}

pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.decimals$}")
}

/// Non-negative values get a leading `+`, so zero renders as `+0`.
pub fn format_signed(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let prefix = if value >= 0.0 { "+" } else { "" };
    format!("{prefix}{}", format_fixed(value, decimals))
}
