use std::fmt::{self, Debug, Formatter};

use log::{info, trace};

use crate::position::Position;
use crate::types::{Color, Phase, ScaleFactor, Value};
use crate::zobrist::MaterialKey;

use super::classify::classify;
use super::endgame::{Endgame, Endgames, ScaleEndgame};
use super::imbalance::{imbalance, PieceCounts};

/// Everything known about one material composition.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    key: MaterialKey,
    value: Value,
    game_phase: Phase,
    factor: [ScaleFactor; 2],
    evaluation_function: Option<Endgame>,
    scaling_function: [Option<ScaleEndgame>; 2],
}

impl Entry {
    fn compute(position: &Position, endgames: &Endgames) -> Self {
        let key = position.material_key();

        let npm = (position.non_pawn_material(Color::White)
            + position.non_pawn_material(Color::Black))
        .clamp(Value::ENDGAME_LIMIT, Value::MIDGAME_LIMIT);
        let phase_range = (Value::MIDGAME_LIMIT - Value::ENDGAME_LIMIT).get() as i32;
        let game_phase = (npm - Value::ENDGAME_LIMIT).get() as i32 * Phase::MIDGAME.get() as i32
            / phase_range;

        let mut entry = Self {
            key,
            value: imbalance(
                &PieceCounts::of(position, Color::White),
                &PieceCounts::of(position, Color::Black),
            ),
            game_phase: Phase::new(game_phase as u8),
            factor: [ScaleFactor::NORMAL; 2],
            evaluation_function: None,
            scaling_function: [None; 2],
        };

        // Exact signatures take precedence over the structural patterns
        entry.evaluation_function = endgames.probe_value(key).or_else(|| classify(position));
        if entry.evaluation_function.is_none() {
            if let Some(scale) = endgames.probe_scale(key) {
                entry.scaling_function[scale.strong_side().index()] = Some(scale);
            }
        }

        entry
    }

    #[inline]
    pub fn key(&self) -> MaterialKey {
        self.key
    }

    /// Imbalance score from white's point of view.
    #[inline]
    pub fn imbalance(&self) -> Value {
        self.value
    }

    #[inline]
    pub fn game_phase(&self) -> Phase {
        self.game_phase
    }

    #[inline]
    pub fn specialized_eval_exists(&self) -> bool {
        self.evaluation_function.is_some()
    }

    #[inline]
    pub fn evaluation_function(&self) -> Option<Endgame> {
        self.evaluation_function
    }

    /// Score of the specialized evaluator from the side to move's point of view, if there is
    /// one for this material.
    pub fn evaluate(&self, position: &Position) -> Option<Value> {
        self.evaluation_function.map(|endgame| {
            let score = endgame.evaluate(position);
            if position.side_to_move() == endgame.strong_side() {
                score
            } else {
                -score
            }
        })
    }

    /// Scale factor for `color`'s endgame score. A scaling function returning
    /// [`ScaleFactor::NONE`] defers to the default factor.
    pub fn scale_factor(&self, position: &Position, color: Color) -> ScaleFactor {
        self.scaling_function[color.index()]
            .map(|scale| scale.scale(position))
            .filter(|&factor| factor != ScaleFactor::NONE)
            .unwrap_or(self.factor[color.index()])
    }
}

/// Direct-mapped cache of material entries. Colliding keys overwrite each other.
pub struct MaterialTable<'e> {
    entries: Vec<Option<Entry>>,
    mod_mask: usize,
    endgames: &'e Endgames,
}

impl<'e> MaterialTable<'e> {
    pub const DEFAULT_CAPACITY: usize = 8192;

    /// Creates a table with [`Self::DEFAULT_CAPACITY`] entries
    pub fn new(endgames: &'e Endgames) -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY, endgames)
    }

    /// Creates a table with `capacity` entries rounded down to the nearest power of two
    pub fn with_capacity(capacity: usize, endgames: &'e Endgames) -> Self {
        let capacity = capacity.max(1);
        let actual_capacity = if capacity.is_power_of_two() {
            capacity
        } else {
            capacity.next_power_of_two() >> 1
        };

        info!(
            "Allocating material table with capacity {} (actual {})",
            capacity, actual_capacity
        );

        Self {
            entries: vec![None; actual_capacity],
            mod_mask: actual_capacity - 1,
            endgames,
        }
    }

    /// Returns the entry for the material of `position`, computing it on a miss.
    pub fn probe(&mut self, position: &Position) -> &Entry {
        let key = position.material_key();
        let endgames = self.endgames;
        let slot = &mut self.entries[key.get() as usize & self.mod_mask];

        if slot.as_ref().is_some_and(|entry| entry.key != key) {
            *slot = None;
        }
        slot.get_or_insert_with(|| {
            trace!("Material table miss for {:?}", key);
            Entry::compute(position, endgames)
        })
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }
}

impl Default for MaterialTable<'static> {
    fn default() -> Self {
        Self::new(Endgames::get())
    }
}

impl Debug for MaterialTable<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("MaterialTable")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
