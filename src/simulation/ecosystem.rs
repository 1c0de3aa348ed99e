//! The world: creatures, obstacles, hall of fame, and the tick loop.
//!
//! One call to [`Ecosystem::step`] runs a whole tick. The world owns every
//! piece of state, including the random source, so two ecosystems built from
//! the same seeded parameters evolve identically.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::creature::Creature;
use super::error::Result;
use super::evolution::{self, Genesis};
use super::frame::{Frame, Rgba};
use super::hall_of_fame::HallOfFame;
use super::obstacle::Obstacle;
use super::params::Params;
use super::surface::OccupancySurface;

/// Radius of the heading marker painted on each creature.
const MARKER_RADIUS: u32 = 2;
/// Distance of the heading marker from the creature centre.
const MARKER_OFFSET: f32 = 3.0;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickStats {
    /// Tick counter value this tick ran as.
    pub tick: u64,
    /// Creatures spawned, recycled ones included.
    pub spawned: usize,
    /// How many of the spawned creatures came from the recycle pool.
    pub recycled: usize,
    /// Creatures that collided and were removed.
    pub deaths: usize,
    /// Living creatures at the end of the tick.
    pub population: usize,
}

/// The complete simulation state.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    params: Params,
    creatures: Vec<Creature>,
    pool: Vec<Creature>,
    obstacles: Vec<Obstacle>,
    hall_of_fame: HallOfFame,
    surface: OccupancySurface,
    frame: Frame,
    tick: u64,
    rng: StdRng,
}

impl Ecosystem {
    /// Creates an empty world. Creatures and obstacles appear on the first tick.
    pub fn new(params: Params) -> Result<Self> {
        params.validate()?;

        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let surface = OccupancySurface::new(&params);
        let mut frame = Frame::new(params.frame_width(), params.frame_height());
        frame.paint_surface(&surface);

        tracing::debug!(
            width = params.width,
            height = params.height,
            seed = ?params.seed,
            "created ecosystem"
        );

        Ok(Self {
            hall_of_fame: HallOfFame::new(params.max_hall_of_fame, params.max_creatures),
            creatures: Vec::with_capacity(params.max_creatures),
            pool: Vec::new(),
            obstacles: Vec::with_capacity(params.num_obstacles),
            surface,
            frame,
            tick: 0,
            rng,
            params,
        })
    }

    /// Advances the world by one tick.
    pub fn step(&mut self) -> TickStats {
        let mut stats = TickStats {
            tick: self.tick,
            ..TickStats::default()
        };

        self.update_obstacles();
        self.surface.rebuild(&self.obstacles, self.params.obstacle_width);

        let cycle = self.params.evolution_cycle_ticks;
        if self.tick > 0 && self.tick % cycle == 0 && self.creatures.len() < self.params.max_creatures {
            let n = self.params.max_creatures - self.creatures.len();
            tracing::debug!(tick = self.tick, n, "evolution cycle");
            self.spawn_creatures_with_stats(n, &mut stats);
        }
        if self.creatures.len() < self.params.min_creatures {
            let n = self.params.min_creatures - self.creatures.len();
            self.spawn_creatures_with_stats(n, &mut stats);
        }

        self.creatures.shuffle(&mut self.rng);
        stats.deaths = self.remove_dead();

        let surface = &self.surface;
        let params = &self.params;
        self.creatures.par_iter_mut().for_each(|creature| {
            creature.act(surface, params);
        });

        for creature in &self.creatures {
            self.hall_of_fame.fold(creature.brain.weights(), creature.score);
        }
        self.hall_of_fame.refresh();

        self.compose_frame();

        self.tick += 1;
        stats.population = self.creatures.len();
        tracing::trace!(
            tick = stats.tick,
            population = stats.population,
            spawned = stats.spawned,
            deaths = stats.deaths,
            "tick"
        );
        stats
    }

    /// Spawns `n` creatures using the hall-of-fame spawning policy.
    pub fn spawn_creatures(&mut self, n: usize) {
        let mut stats = TickStats::default();
        self.spawn_creatures_with_stats(n, &mut stats);
    }

    /// Spawns a single creature with a random brain.
    pub fn spawn_random_creature(&mut self) {
        self.spawn_one(&Genesis::Random);
    }

    /// Parameters the world was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Living creatures.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Number of dead creatures waiting to be recycled.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Current obstacles.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Best brains seen so far.
    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    /// Occupancy grid as rebuilt by the last tick.
    pub fn surface(&self) -> &OccupancySurface {
        &self.surface
    }

    /// Picture of the world after the last tick.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    fn spawn_creatures_with_stats(&mut self, n: usize, stats: &mut TickStats) {
        let plan = evolution::plan_spawns(&self.hall_of_fame, n, &mut self.rng);
        for genesis in &plan {
            if self.spawn_one(genesis) {
                stats.recycled += 1;
            }
        }
        stats.spawned += plan.len();
    }

    /// Spawns one creature, reusing a pooled one when available. Returns
    /// whether the creature was recycled.
    fn spawn_one(&mut self, genesis: &Genesis) -> bool {
        match self.pool.pop() {
            Some(mut creature) => {
                creature.respawn(&self.params, genesis, &mut self.rng);
                self.creatures.push(creature);
                true
            }
            None => {
                let creature = Creature::spawn(&self.params, genesis, &mut self.rng);
                self.creatures.push(creature);
                false
            }
        }
    }

    fn update_obstacles(&mut self) {
        let (fw, fh) = (self.params.frame_width() as f32, self.params.frame_height() as f32);
        for obstacle in &mut self.obstacles {
            obstacle.advance();
        }
        self.obstacles.retain(|o| !o.is_out_of_bounds(fw, fh));
        while self.obstacles.len() < self.params.num_obstacles {
            let obstacle = Obstacle::new_random(&self.params, &mut self.rng);
            self.obstacles.push(obstacle);
        }
    }

    /// Moves colliding creatures to the pool, recording their scores first.
    fn remove_dead(&mut self) -> usize {
        let radius = self.params.creature_radius;
        let mut deaths = 0;
        let mut survivors = Vec::with_capacity(self.creatures.len());
        for creature in std::mem::take(&mut self.creatures) {
            if creature.is_colliding(&self.surface, radius) {
                tracing::debug!(score = creature.score, x = creature.x, y = creature.y, "creature died");
                self.hall_of_fame.fold(creature.brain.weights(), creature.score);
                self.pool.push(creature);
                deaths += 1;
            } else {
                survivors.push(creature);
            }
        }
        self.creatures = survivors;
        deaths
    }

    fn compose_frame(&mut self) {
        self.frame.paint_surface(&self.surface);
        let radius = self.params.creature_radius;
        for creature in &self.creatures {
            let (fx, fy) = creature.frame_position(&self.surface);
            self.frame.fill_disc(fx, fy, radius, creature.color);
            let (sin, cos) = creature.angle.sin_cos();
            self.frame
                .fill_disc(fx + cos * MARKER_OFFSET, fy + sin * MARKER_OFFSET, MARKER_RADIUS, Rgba::WHITE);
        }
    }
}
