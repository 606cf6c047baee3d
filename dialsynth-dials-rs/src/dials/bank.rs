use super::dial::Dial;
use super::error::DialError;
use super::{DialId, DIALS, N_DIALS};

/// Every dial on screen plus the active-dial selector.
///
/// This is the whole mutable state of the demo. It is owned by the
/// frame-loop driver and passed into `update` / `draw`; there is no
/// global instance.
///
/// # Initialization
///
/// [`DialBank::new()`] builds one [`Dial`] per [`DIALS`] entry at its
/// default value and selects dial 0.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialBank {
    dials: [Dial; N_DIALS],
    active: usize,
}

impl Default for DialBank {
    fn default() -> Self {
        Self::new()
    }
}

impl DialBank {
    /// Create a bank with every dial at its default value.
    pub fn new() -> Self {
        Self {
            dials: core::array::from_fn(|i| Dial::new(&DIALS[i])),
            active: 0,
        }
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Dial for `id`.
    pub fn get(&self, id: DialId) -> &Dial {
        &self.dials[id.index()]
    }

    /// Mutable dial for `id`.
    pub fn get_mut(&mut self, id: DialId) -> &mut Dial {
        &mut self.dials[id.index()]
    }

    /// Look a dial up by display name. Returns `None` if no dial has
    /// that name.
    pub fn get_by_name(&self, name: &str) -> Option<&Dial> {
        match DialId::from_name(name) {
            Some(id) => Some(self.get(id)),
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("get_by_name: no dial named {}", name);
                None
            }
        }
    }

    /// Current value of the dial for `id`.
    pub fn value(&self, id: DialId) -> i32 {
        self.get(id).value()
    }

    /// Current values of every dial, in [`DialId`] order.
    pub fn values(&self) -> [i32; N_DIALS] {
        core::array::from_fn(|i| self.dials[i].value())
    }

    /// Iterate `(id, dial)` pairs in screen order.
    pub fn iter(&self) -> impl Iterator<Item = (DialId, &Dial)> {
        DialId::ALL.iter().copied().zip(self.dials.iter())
    }

    // ── Adjustment ───────────────────────────────────────────────────

    /// Add a signed delta to a dial, clamped into its range.
    ///
    /// Returns `true` if the value changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialsynth::dials::{DialBank, DialId};
    ///
    /// let mut bank = DialBank::new();
    /// assert!(bank.adjust(DialId::Frequency, 5));
    /// assert_eq!(bank.value(DialId::Frequency), 445);
    ///
    /// // Saturates instead of wrapping.
    /// bank.adjust(DialId::Frequency, 1_000_000);
    /// assert_eq!(bank.value(DialId::Frequency), 8000);
    /// ```
    pub fn adjust(&mut self, id: DialId, delta: i32) -> bool {
        let changed = self.get_mut(id).adjust(delta);
        if changed {
            #[cfg(feature = "defmt")]
            defmt::debug!("dial {}: {}", id.name(), self.value(id));
        }
        changed
    }

    /// Adjust the dial by `+step`. Returns `true` if the value changed.
    pub fn increment(&mut self, id: DialId) -> bool {
        let step = self.get(id).step();
        self.adjust(id, step)
    }

    /// Adjust the dial by `-step`. Returns `true` if the value changed.
    pub fn decrement(&mut self, id: DialId) -> bool {
        let step = self.get(id).step();
        self.adjust(id, step.saturating_neg())
    }

    // ── Active dial ──────────────────────────────────────────────────

    /// Index of the dial that responds to Up / Down.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Id of the active dial.
    pub fn active_id(&self) -> DialId {
        DialId::ALL[self.active]
    }

    /// The active dial.
    pub fn active(&self) -> &Dial {
        &self.dials[self.active]
    }

    /// `true` if `id` is the active dial.
    pub fn is_active(&self, id: DialId) -> bool {
        self.active == id.index()
    }

    /// Select the active dial by index.
    ///
    /// Returns [`DialError::InvalidDialIndex`] if `index >= N_DIALS`; the
    /// selection is left unchanged in that case.
    pub fn set_active(&mut self, index: usize) -> Result<(), DialError> {
        if index >= N_DIALS {
            #[cfg(feature = "defmt")]
            defmt::warn!("set_active: index {} out of bounds", index);
            return Err(DialError::InvalidDialIndex);
        }
        self.active = index;
        Ok(())
    }

    /// Move the selection forward, wrapping from the last dial to 0.
    pub fn select_next(&mut self) {
        self.active = if self.active + 1 < N_DIALS {
            self.active + 1
        } else {
            0
        };
    }

    /// Move the selection back, wrapping from 0 to the last dial.
    pub fn select_previous(&mut self) {
        self.active = if self.active == 0 {
            N_DIALS - 1
        } else {
            self.active - 1
        };
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_in_range(bank: &DialBank) {
        for (id, dial) in bank.iter() {
            assert!(
                dial.min() <= dial.value() && dial.value() <= dial.max(),
                "{} out of range: {}",
                id.name(),
                dial.value()
            );
        }
    }

    // ── Default state ────────────────────────────────────────────────

    #[test]
    fn default_state() {
        let bank = DialBank::new();
        assert_eq!(bank.active_index(), 0);
        assert_eq!(bank.active_id(), DialId::Frequency);
        for (id, dial) in bank.iter() {
            assert_eq!(dial.value(), DIALS[id.index()].default);
        }
    }

    #[test]
    fn values_snapshot_in_id_order() {
        let bank = DialBank::new();
        assert_eq!(
            bank.values(),
            [440, 100, 80, 0, 100, 50, 500, 250, 0, 0, 0]
        );
    }

    // ── Lookup ───────────────────────────────────────────────────────

    #[test]
    fn get_by_name_found() {
        let bank = DialBank::new();
        let hold = bank.get_by_name("hold").unwrap();
        assert_eq!(hold.value(), 500);
        assert_eq!(hold.unit(), "ms");
    }

    #[test]
    fn get_by_name_missing() {
        let bank = DialBank::new();
        assert!(bank.get_by_name("cutoff").is_none());
    }

    // ── Adjustment ───────────────────────────────────────────────────

    #[test]
    fn volume_increment_at_max_is_noop() {
        let mut bank = DialBank::new();
        assert!(!bank.increment(DialId::Volume));
        assert_eq!(bank.value(DialId::Volume), 100);
    }

    #[test]
    fn volume_ten_decrements() {
        let mut bank = DialBank::new();
        for _ in 0..10 {
            assert!(bank.decrement(DialId::Volume));
        }
        assert_eq!(bank.value(DialId::Volume), 90);
    }

    #[test]
    fn frequency_increment_by_step() {
        let mut bank = DialBank::new();
        assert!(bank.increment(DialId::Frequency));
        assert_eq!(bank.value(DialId::Frequency), 445);
    }

    #[test]
    fn decrement_at_min_is_noop() {
        let mut bank = DialBank::new();
        assert!(!bank.decrement(DialId::Reverb));
        assert_eq!(bank.value(DialId::Reverb), 0);
    }

    #[test]
    fn adjust_leaves_other_dials_untouched() {
        let mut bank = DialBank::new();
        let before = bank.values();
        bank.adjust(DialId::Attack, 200);

        let after = bank.values();
        for i in 0..N_DIALS {
            if i == DialId::Attack.index() {
                assert_eq!(after[i], 300);
            } else {
                assert_eq!(after[i], before[i]);
            }
        }
    }

    #[test]
    fn range_invariant_holds_under_long_sequences() {
        let mut bank = DialBank::new();
        for id in DialId::ALL {
            for _ in 0..2000 {
                bank.increment(id);
            }
            assert_eq!(bank.value(id), bank.get(id).max());
        }
        assert_all_in_range(&bank);

        for id in DialId::ALL {
            for _ in 0..2000 {
                bank.decrement(id);
            }
            assert_eq!(bank.value(id), bank.get(id).min());
        }
        assert_all_in_range(&bank);

        // Mixed pseudo-random walk.
        let mut seed: u32 = 0x1234_5678;
        for _ in 0..5000 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let id = DialId::ALL[(seed >> 8) as usize % N_DIALS];
            let delta = (seed >> 16) as i32 % 3000 - 1500;
            bank.adjust(id, delta);
            assert_all_in_range(&bank);
        }
    }

    // ── Active dial ──────────────────────────────────────────────────

    #[test]
    fn select_next_wraps_to_first() {
        let mut bank = DialBank::new();
        bank.set_active(N_DIALS - 1).unwrap();
        bank.select_next();
        assert_eq!(bank.active_index(), 0);
    }

    #[test]
    fn select_previous_wraps_to_last() {
        let mut bank = DialBank::new();
        bank.select_previous();
        assert_eq!(bank.active_index(), N_DIALS - 1);
        assert_eq!(bank.active_id(), DialId::Noise);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut bank = DialBank::new();
        bank.set_active(4).unwrap();
        for _ in 0..N_DIALS {
            bank.select_next();
        }
        assert_eq!(bank.active_index(), 4);
        for _ in 0..N_DIALS {
            bank.select_previous();
        }
        assert_eq!(bank.active_index(), 4);
    }

    #[test]
    fn set_active_out_of_bounds() {
        let mut bank = DialBank::new();
        bank.set_active(2).unwrap();
        assert_eq!(bank.set_active(N_DIALS), Err(DialError::InvalidDialIndex));
        assert_eq!(bank.set_active(100), Err(DialError::InvalidDialIndex));
        assert_eq!(bank.active_index(), 2);
    }

    #[test]
    fn active_reflects_selection() {
        let mut bank = DialBank::new();
        bank.select_next();
        assert!(bank.is_active(DialId::Volume));
        assert!(!bank.is_active(DialId::Frequency));
        assert_eq!(bank.active().name(), "volume");
    }
}
