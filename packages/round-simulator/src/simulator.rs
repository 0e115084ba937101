//! In-memory game driver.
//!
//! Plays whole games through the engine's public API. Every choice (prediction,
//! trump after a Wizard, card) is drawn uniformly from the legal options, so a
//! run exercises the rules rather than any strategy.

use engine::domain::{
    Color, Game, GameConfig, PlayOutcome, PredictionOutcome, RoundRecord, Seat,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

type SimResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Separates the driver's choices from the engine's shuffles for the same seed.
const CHOICE_SEED_SALT: u64 = 0xC0FF_EE00_D15E_A5E5;

#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub names: Vec<String>,
    pub final_scores: Vec<i32>,
    pub winners: Vec<Seat>,
    pub history: Vec<RoundRecord>,
}

pub struct Simulator {
    game_seed: u64,
    game_id: u32,
    players: usize,
}

impl Simulator {
    pub fn new(game_seed: u64, game_id: u32, players: usize) -> Self {
        Self {
            game_seed,
            game_id,
            players,
        }
    }

    pub fn simulate_game(&self) -> SimResult<GameResult> {
        let names: Vec<String> = (0..self.players).map(|i| format!("apprentice-{i}")).collect();
        let mut game = Game::new(GameConfig::new(names.clone(), Some(self.game_seed)))?;
        let mut rng = StdRng::seed_from_u64(self.game_seed ^ CHOICE_SEED_SALT);

        game.start()?;
        while game.current_round().is_some() {
            self.play_round(&mut game, &mut rng)?;
            let points = game.end_round()?;
            debug!(game_id = self.game_id, round_no = game.history().len(), ?points, "Round finished");
        }

        let final_scores = game.apprentices().iter().map(|a| a.score()).collect();
        Ok(GameResult {
            seed: game.seed(),
            names,
            final_scores,
            winners: game.winners(),
            history: game.history().to_vec(),
        })
    }

    fn play_round(&self, game: &mut Game, rng: &mut StdRng) -> SimResult<()> {
        let cards = game
            .current_round()
            .map(|r| r.cards_per_player())
            .unwrap_or_default();

        // Predictions go round from the confidant, as at the table
        let confidant = game.confidant();
        for offset in 0..self.players {
            let seat = (confidant + offset) % self.players;
            let prediction = rng.random_range(0..=cards);
            if let PredictionOutcome::Rejected(rejection) = game.predict(seat, prediction)? {
                return Err(format!("driver produced an illegal prediction: {rejection:?}").into());
            }
        }

        if game.current_round().is_some_and(|r| r.trump_choice_pending()) {
            let color = Color::ALL.choose(rng).copied().unwrap_or(Color::Blue);
            game.choose_trump(color)?;
        }

        while let Some(seat) = game.current_seat() {
            let legal = game
                .current_round()
                .map(|r| r.playable_positions(seat))
                .unwrap_or_default();
            let Some(&pos) = legal.choose(rng) else {
                return Err(format!("seat {seat} has no legal card").into());
            };
            if let PlayOutcome::Rejected(rejection) = game.play(seat, pos)? {
                return Err(format!("driver produced an illegal play: {rejection:?}").into());
            }
        }
        Ok(())
    }
}
