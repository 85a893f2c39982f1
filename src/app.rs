use log::info;
use rand::rngs::ThreadRng;

use crate::config::GameConfig;
use crate::game::{Game, TickOutcome};
use crate::input::{map_key, Command};
use crate::render::{required_terminal_size, Renderer};
use crate::term::TermManager;
use crate::timer::TickTimer;
use crate::{Result, SnakeError};

pub struct SnakeApp<'a> {
    term: &'a mut TermManager,
    renderer: Renderer,
    game: Game,
    rng: ThreadRng,
    timer: TickTimer,
}

impl<'a> SnakeApp<'a> {
    pub fn new(term: &'a mut TermManager, config: GameConfig) -> Result<Self> {
        let required = required_terminal_size(&config);
        let actual = term.size();
        if actual.0 < required.0 || actual.1 < required.1 {
            return Err(SnakeError::TerminalTooSmall { required, actual });
        }

        let mut rng = rand::thread_rng();
        let game = Game::new(config, &mut rng);

        Ok(SnakeApp {
            term,
            renderer: Renderer::new(config),
            game,
            rng,
            timer: TickTimer::new(config.tick_interval),
        })
    }

    /// Runs until the player quits. The game-over screen stays up until then.
    pub fn run(&mut self) -> Result<()> {
        info!("starting game, food at {:?}", self.game.food());
        self.renderer.draw_frame(self.term, &self.game)?;

        loop {
            // Input is handled while waiting for the next tick
            if let Some(key_ev) = self.term.poll_key(self.timer.time_until_tick())? {
                match map_key(&key_ev) {
                    Some(Command::Quit) => return self.quit(),
                    Some(Command::Turn(dir)) => self.game.change_direction(dir),
                    None => {}
                }
            }

            if !self.timer.is_due() {
                continue;
            }
            self.timer.advance();

            match self.game.tick(&mut self.rng) {
                TickOutcome::Crashed => {
                    self.renderer.draw_game_over(self.term, &self.game)?;
                    break;
                }
                outcome => self.renderer.apply(self.term, &self.game, &outcome)?,
            }
        }

        // No more ticks, just wait for the quit key
        loop {
            let key_ev = self.term.read_key_blocking()?;
            if map_key(&key_ev) == Some(Command::Quit) {
                return self.quit();
            }
        }
    }

    fn quit(&self) -> Result<()> {
        info!("quit with score {}", self.game.score());
        Ok(())
    }
}
