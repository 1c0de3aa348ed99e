//! Creature state, placement, and per-tick behaviour.

use std::f32::consts::TAU;

use rand::Rng;

use super::brain::{Action, Brain};
use super::evolution::Genesis;
use super::frame::Rgba;
use super::params::Params;
use super::surface::OccupancySurface;

/// A disc-shaped agent steered by its own brain.
///
/// Position is kept in arena coordinates; the surface adds the border offset
/// when sensing or checking collisions.
#[derive(Debug, Clone)]
pub struct Creature {
    /// Centre x in arena coordinates.
    pub x: f32,
    /// Centre y in arena coordinates.
    pub y: f32,
    /// Heading in radians.
    pub angle: f32,
    /// Ticks survived since the last spawn.
    pub score: u64,
    /// Display colour, derived from the brain weights.
    pub color: Rgba,
    /// Controller owned by this creature.
    pub brain: Brain,
    senses: Vec<f32>,
}

impl Creature {
    /// Creates a creature at a random spot with a brain built from `genesis`.
    pub fn spawn<R: Rng + ?Sized>(params: &Params, genesis: &Genesis, rng: &mut R) -> Self {
        let topology = params.topology();
        let brain = match genesis {
            Genesis::Random => Brain::new_random(topology, rng),
            Genesis::Weights(weights) => Brain::from_weights(topology, weights.clone()),
        };
        let mut creature = Self {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            score: 0,
            color: brain.color(),
            brain,
            senses: vec![0.0; topology.sensors],
        };
        creature.place(params, rng);
        creature
    }

    /// Reinitialises a recycled creature in place.
    ///
    /// The result behaves exactly like a freshly spawned creature: new
    /// position and heading, zero score, cleared sensors and brain memory.
    pub fn respawn<R: Rng + ?Sized>(&mut self, params: &Params, genesis: &Genesis, rng: &mut R) {
        match genesis {
            Genesis::Random => self.brain.randomize_weights(rng),
            Genesis::Weights(weights) => self.brain.set_weights(weights),
        }
        self.brain.reset_memory();
        self.senses.fill(0.0);
        self.color = self.brain.color();
        self.score = 0;
        self.place(params, rng);
    }

    /// Centre on the occupancy surface.
    pub fn frame_position(&self, surface: &OccupancySurface) -> (f32, f32) {
        surface.to_frame(self.x, self.y)
    }

    /// Whether the creature's body overlaps an occupied cell.
    pub fn is_colliding(&self, surface: &OccupancySurface, radius: u32) -> bool {
        let (fx, fy) = self.frame_position(surface);
        surface.is_colliding(fx, fy, radius)
    }

    /// Senses, thinks and moves once.
    ///
    /// The heading changes first, then the creature moves along the new
    /// heading. Survival score goes up by one.
    pub fn act(&mut self, surface: &OccupancySurface, params: &Params) -> Action {
        let (fx, fy) = self.frame_position(surface);
        surface.sense(fx, fy, self.angle, &mut self.senses);
        let action = self.brain.step(&self.senses);

        self.angle += action.turn * params.turn_rate;
        let (sin, cos) = self.angle.sin_cos();
        self.x += cos * action.movement * params.move_speed;
        self.y += sin * action.movement * params.move_speed;
        self.score = self.score.saturating_add(1);

        action
    }

    fn place<R: Rng + ?Sized>(&mut self, params: &Params, rng: &mut R) {
        let r = params.creature_radius;
        self.x = (rng.random_range(0..params.width - r) + r) as f32;
        self.y = (rng.random_range(0..params.height - r) + r) as f32;
        self.angle = rng.random_range(0.0..TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_same_state(recycled: &Creature, fresh: &Creature) {
        assert_eq!((recycled.x, recycled.y, recycled.angle), (fresh.x, fresh.y, fresh.angle));
        assert_eq!(recycled.score, fresh.score);
        assert_eq!(recycled.color, fresh.color);
        assert_eq!(recycled.brain.topology(), fresh.brain.topology());
        assert_eq!(recycled.brain.weights(), fresh.brain.weights());
        assert_eq!(recycled.brain.memory(), fresh.brain.memory());
        assert_eq!(recycled.senses, fresh.senses);
    }

    /// Spawns a creature and lets it live a few ticks so every buffer holds
    /// leftovers from its first life.
    fn used_creature(params: &Params, surface: &OccupancySurface) -> Creature {
        let mut rng = StdRng::seed_from_u64(5);
        let mut creature = Creature::spawn(params, &Genesis::Random, &mut rng);
        for _ in 0..5 {
            creature.act(surface, params);
        }
        assert!(creature.senses.iter().any(|&d| d != 0.0));
        creature
    }

    #[test]
    fn test_respawn_matches_fresh_random_spawn() {
        let params = Params::default();
        let surface = OccupancySurface::new(&params);
        let mut recycled = used_creature(&params, &surface);

        recycled.respawn(&params, &Genesis::Random, &mut StdRng::seed_from_u64(99));
        let mut fresh = Creature::spawn(&params, &Genesis::Random, &mut StdRng::seed_from_u64(99));

        assert_eq!(recycled.brain.topology(), params.topology());
        assert_same_state(&recycled, &fresh);

        for _ in 0..3 {
            assert_eq!(recycled.act(&surface, &params), fresh.act(&surface, &params));
        }
        assert_same_state(&recycled, &fresh);
    }

    #[test]
    fn test_respawn_matches_fresh_spawn_from_weights() {
        let params = Params::default();
        let surface = OccupancySurface::new(&params);
        let mut recycled = used_creature(&params, &surface);
        let weights = vec![0.1; params.topology().weight_count()];
        let genesis = Genesis::Weights(weights);

        recycled.respawn(&params, &genesis, &mut StdRng::seed_from_u64(7));
        let fresh = Creature::spawn(&params, &genesis, &mut StdRng::seed_from_u64(7));

        assert_same_state(&recycled, &fresh);
    }

    #[test]
    fn test_score_saturates() {
        let params = Params::default();
        let surface = OccupancySurface::new(&params);
        let mut creature = Creature::spawn(&params, &Genesis::Random, &mut StdRng::seed_from_u64(3));
        creature.score = u64::MAX;

        creature.act(&surface, &params);

        assert_eq!(creature.score, u64::MAX);
    }
}
