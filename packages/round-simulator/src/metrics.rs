//! Per-game metrics written by the simulator.

use engine::domain::RoundRecord;
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub players: usize,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i32>,
    pub winners: Vec<usize>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub dealer: usize,
    pub trump_card: Option<String>,
    pub trump: Option<String>,
    pub predictions: Vec<Option<u8>>,
    pub tricks_won: Vec<u8>,
    pub points: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: usize,
    pub name: String,
    pub total_score: i32,
    pub prediction_accuracy: PredictionAccuracyStats,
    pub avg_tricks_per_round: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PredictionAccuracyStats {
    pub exact: u32,
    pub over: u32,  // predicted more tricks than taken
    pub under: u32, // predicted fewer tricks than taken
    pub exact_pct: f64,
}

/// One row of the CSV summary. Seat lists are `;`-joined since the table
/// size varies between runs.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub players: usize,
    pub rounds: usize,
    pub winners: String,
    pub scores: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_id: m.game_id,
            seed: m.seed,
            players: m.config.players,
            rounds: m.rounds.len(),
            winners: join(&m.result.winners),
            scores: join(&m.result.final_scores),
        }
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

fn round_metrics(record: &RoundRecord) -> RoundMetrics {
    RoundMetrics {
        round_no: record.round_no,
        dealer: record.dealer,
        trump_card: record.trump_card.map(|c| c.to_string()),
        trump: record.trump.map(|c| c.to_string()),
        predictions: record.predictions.clone(),
        tricks_won: record.tricks_won.clone(),
        points: record.points.clone(),
    }
}

fn player_metrics(seat: usize, result: &GameResult) -> PlayerMetrics {
    let mut accuracy = PredictionAccuracyStats::default();
    let mut tricks = 0u32;

    for record in &result.history {
        let won = record.tricks_won[seat];
        tricks += won as u32;
        match record.predictions[seat] {
            Some(p) if p == won => accuracy.exact += 1,
            Some(p) if p > won => accuracy.over += 1,
            Some(_) => accuracy.under += 1,
            None => {}
        }
    }

    let rounds = result.history.len().max(1) as f64;
    accuracy.exact_pct = accuracy.exact as f64 / rounds * 100.0;

    PlayerMetrics {
        seat,
        name: result.names[seat].clone(),
        total_score: result.final_scores[seat],
        prediction_accuracy: accuracy,
        avg_tricks_per_round: tricks as f64 / rounds,
    }
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string());

    GameMetrics {
        game_id,
        seed: result.seed,
        timestamp,
        config: RunConfig {
            players: result.final_scores.len(),
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winners: result.winners.clone(),
            duration_ms,
        },
        rounds: result.history.iter().map(round_metrics).collect(),
        player_metrics: (0..result.final_scores.len())
            .map(|seat| player_metrics(seat, result))
            .collect(),
    }
}
