//! Indexed, resizable collections of addressable entities.

use serde::{Deserialize, Serialize};

/// Upper limit for any advertised bank count. Larger counts are clamped.
pub const MAX_BANK_SIZE: usize = 4096;

/// An entity that lives in a bank slot.
pub trait BankItem {
    /// Called when the slot falls outside the advertised count.
    /// Slots are never dropped, only retired.
    fn retire(&mut self) {}
}

/// A bank of slots addressed by 0-based index.
///
/// Storage only ever grows. `count` is the advertised range: slots at or
/// beyond it keep their storage but are not addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank<T> {
    items: Vec<T>,
    count: usize,
}

impl<T> Default for Bank<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
        }
    }
}

impl<T: BankItem> Bank<T> {
    /// Create a bank with `count` slots built by `make`.
    pub fn with_count(count: usize, make: impl FnMut(usize) -> T) -> Self {
        let mut bank = Self::default();
        bank.resize(count, make);
        bank
    }

    /// Advertise a new count, creating missing slots with `make` and
    /// retiring slots beyond the new range.
    pub fn resize(&mut self, count: usize, mut make: impl FnMut(usize) -> T) {
        let count = count.min(MAX_BANK_SIZE);
        while self.items.len() < count {
            let index = self.items.len();
            self.items.push(make(index));
        }
        for item in self.items.iter_mut().skip(count) {
            item.retire();
        }
        self.count = count;
    }

    /// Number of currently addressable slots.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.count {
            self.items.get(index)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.count {
            self.items.get_mut(index)
        } else {
            None
        }
    }

    /// Iterate over the addressable slots.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().take(self.count)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut().take(self.count)
    }
}

impl<T: BankItem + Default> Bank<T> {
    pub fn new(count: usize) -> Self {
        Self::with_count(count, |_| T::default())
    }

    pub fn set_count(&mut self, count: usize) {
        self.resize(count, |_| T::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Slot {
        index: usize,
        live: bool,
    }

    impl BankItem for Slot {
        fn retire(&mut self) {
            self.live = false;
        }
    }

    fn live_slot(index: usize) -> Slot {
        Slot { index, live: true }
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let bank = Bank::with_count(4, live_slot);
        assert!(bank.get(3).is_some());
        assert!(bank.get(4).is_none());
        assert!(bank.get(usize::MAX).is_none());
    }

    #[test]
    fn shrinking_retires_but_keeps_storage() {
        let mut bank = Bank::with_count(4, live_slot);
        bank.resize(2, live_slot);
        assert_eq!(bank.count(), 2);
        assert_eq!(bank.items.len(), 4);
        assert!(bank.get(2).is_none());
        assert_eq!(bank.iter().count(), 2);
    }

    #[test]
    fn growing_reuses_existing_slots() {
        let mut bank = Bank::with_count(2, live_slot);
        if let Some(slot) = bank.get_mut(1) {
            slot.index = 99;
        }
        bank.resize(0, live_slot);
        bank.resize(3, live_slot);
        assert_eq!(bank.get(1).map(|s| s.index), Some(99));
        assert_eq!(bank.get(2).map(|s| s.index), Some(2));
    }

    #[test]
    fn count_is_clamped() {
        let mut bank: Bank<Slot> = Bank::new(0);
        bank.set_count(MAX_BANK_SIZE + 10);
        assert_eq!(bank.count(), MAX_BANK_SIZE);
    }
}
