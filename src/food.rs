use rand::Rng;

use crate::config::GameConfig;
use crate::Coords;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    position: Coords,
}

impl Food {
    /// Uniformly random cell anywhere on the board. The snake's cells are not
    /// excluded, so food can land on the body.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Self {
        let x = rng.gen_range(0..config.columns()) * config.cell_size;
        let y = rng.gen_range(0..config.rows()) * config.cell_size;
        Food { position: (x, y) }
    }

    pub fn at(position: Coords) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Coords {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_on_grid_inside_board() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let (x, y) = Food::spawn(&mut rng, &config).position();
            assert!(config.contains((x, y)), "({}, {}) is off the board", x, y);
            assert_eq!(x % config.cell_size, 0);
            assert_eq!(y % config.cell_size, 0);
        }
    }

    #[test]
    fn eventually_reaches_every_column() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];

        for _ in 0..500 {
            let (x, _) = Food::spawn(&mut rng, &config).position();
            seen[(x / config.cell_size) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
