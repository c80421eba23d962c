//! Fixed-capacity ring of reusable particle slots.
//!
//! Slots are picked strictly round-robin. A slot that is still animating is
//! reused anyway; the newer spawn takes ownership by bumping the slot's
//! generation, so the older animation's completion can no longer release it.

use super::SpawnParams;

/// One pooled element and the state of its current spawn
#[derive(Debug)]
pub struct ParticleSlot<E> {
    element: E,
    active: bool,
    generation: u64,
    params: Option<SpawnParams>,
}

impl<E> ParticleSlot<E> {
    fn new(element: E) -> Self {
        Self {
            element,
            active: false,
            generation: 0,
            params: None,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Parameters of the most recent spawn on this slot
    pub fn params(&self) -> Option<&SpawnParams> {
        self.params.as_ref()
    }
}

/// A claimed slot, handed back from [`ParticlePool::claim`]
#[derive(Debug)]
pub struct Claim<'a, E> {
    pub index: usize,
    pub generation: u64,
    pub element: &'a E,
    pub params: &'a SpawnParams,
}

/// Array-backed ring buffer of particle slots
#[derive(Debug)]
pub struct ParticlePool<E> {
    slots: Vec<ParticleSlot<E>>,
    cursor: usize,
}

impl<E> ParticlePool<E> {
    /// Build a pool from already-created elements
    pub fn from_elements(elements: Vec<E>) -> Self {
        Self {
            slots: elements.into_iter().map(ParticleSlot::new).collect(),
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index the next claim will use
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slot(&self, index: usize) -> Option<&ParticleSlot<E>> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> impl Iterator<Item = &ParticleSlot<E>> {
        self.slots.iter()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Take the slot at the cursor for a new spawn and advance the cursor.
    ///
    /// The cursor moves by exactly one whether or not the slot was active.
    /// Returns `None` only for an empty pool.
    pub fn claim(&mut self, params: SpawnParams) -> Option<Claim<'_, E>> {
        if self.slots.is_empty() {
            return None;
        }

        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.slots.len();

        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        slot.active = true;
        slot.params = Some(params);

        Some(Claim {
            index,
            generation: slot.generation,
            element: &slot.element,
            params: slot.params.as_ref()?,
        })
    }

    /// Mark a slot idle when its animation finishes.
    ///
    /// Ignored (returns `false`) when the slot has since been re-claimed or
    /// the pool was drained.
    pub fn release(&mut self, index: usize, generation: u64) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.generation == generation => {
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    /// Empty the pool, handing back every element for removal
    pub fn drain(&mut self) -> impl Iterator<Item = E> + '_ {
        self.cursor = 0;
        self.slots.drain(..).map(|slot| slot.element)
    }
}
