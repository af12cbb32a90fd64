//! Shared animation selection
//!
//! The selected catalog index is written from two contexts: the encoder edge
//! handler, which may preempt the main loop at any point, and the main loop
//! itself. Every read-modify-write runs inside one critical section so the
//! loop can never observe a torn or half-applied update.

use core::cell::Cell;

use critical_section::Mutex;

use crate::{animation::ANIMATION_COUNT, input::Step};

/// Index of the active animation, always in `[0, count)`
pub struct Selection {
    index: Mutex<Cell<u8>>,
    count: u8,
}

impl Selection {
    /// Create a selection over `count` entries starting at `initial`.
    ///
    /// A zero `count` is treated as one; `initial` is wrapped into range.
    pub const fn new(initial: u8, count: u8) -> Self {
        let count = if count == 0 { 1 } else { count };
        Self {
            index: Mutex::new(Cell::new(initial % count)),
            count,
        }
    }

    /// Selection over the whole animation catalog
    #[allow(clippy::cast_possible_truncation)]
    pub const fn catalog(initial: u8) -> Self {
        Self::new(initial, ANIMATION_COUNT as u8)
    }

    /// Number of selectable entries
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Current index
    pub fn get(&self) -> u8 {
        critical_section::with(|cs| self.index.borrow(cs).get())
    }

    /// Move forward by `amount`, wrapping around the catalog
    pub fn advance(&self, amount: u8) -> u8 {
        let count = u16::from(self.count);
        self.update(|index| {
            let next = (u16::from(index) + u16::from(amount) % count) % count;
            #[allow(clippy::cast_possible_truncation)]
            {
                next as u8
            }
        })
    }

    /// Move back by one, wrapping to the last entry
    pub fn retreat(&self) -> u8 {
        let count = self.count;
        self.update(|index| if index == 0 { count - 1 } else { index - 1 })
    }

    /// Apply one encoder step
    pub fn apply_step(&self, step: Step) -> u8 {
        match step {
            Step::Forward => self.advance(1),
            Step::Backward => self.retreat(),
        }
    }

    /// Jump back to the first entry
    pub fn reset(&self) -> u8 {
        self.update(|_| 0)
    }

    fn update(&self, f: impl FnOnce(u8) -> u8) -> u8 {
        critical_section::with(|cs| {
            let cell = self.index.borrow(cs);
            let next = f(cell.get());
            cell.set(next);
            next
        })
    }
}
