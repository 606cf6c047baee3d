/// Immutable description of one dial: its label, bounds and step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DialDescriptor {
    /// Display name, drawn under the knob.
    pub name: &'static str,
    /// Unit suffix for the value label (e.g. `"hz"`, `"%"`).
    pub unit: &'static str,
    /// Minimum allowed value (inclusive).
    pub min: i32,
    /// Maximum allowed value (inclusive).
    pub max: i32,
    /// Value at startup.
    pub default: i32,
    /// Amount added or removed per increment / decrement.
    pub step: i32,
}

impl DialDescriptor {
    /// Build a descriptor; usable in `static` tables.
    pub const fn new(
        name: &'static str,
        unit: &'static str,
        min: i32,
        max: i32,
        default: i32,
        step: i32,
    ) -> Self {
        Self {
            name,
            unit,
            min,
            max,
            default,
            step,
        }
    }
}

/// A bounded, steppable control holding one synthesizer parameter.
///
/// The value always lies within the descriptor's `[min, max]`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dial {
    descriptor: &'static DialDescriptor,
    value: i32,
}

impl Dial {
    /// Create a dial at its descriptor's default value, clamped into
    /// `[min, max]`.
    pub fn new(descriptor: &'static DialDescriptor) -> Self {
        Self {
            descriptor,
            value: descriptor.default.clamp(descriptor.min, descriptor.max),
        }
    }

    /// The static descriptor this dial was built from.
    pub fn descriptor(&self) -> &'static DialDescriptor {
        self.descriptor
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Unit suffix for the value label.
    pub fn unit(&self) -> &'static str {
        self.descriptor.unit
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> i32 {
        self.descriptor.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> i32 {
        self.descriptor.max
    }

    /// Amount moved per increment / decrement.
    pub fn step(&self) -> i32 {
        self.descriptor.step
    }

    /// Current value, always within `[min, max]`.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Add a signed delta and saturate the result into `[min, max]`.
    ///
    /// Returns `true` if the stored value changed. Deltas that would push
    /// the value past a bound leave it pinned at that bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialsynth::dials::{Dial, DialId};
    ///
    /// let mut volume = Dial::new(DialId::Volume.descriptor());
    /// assert!(!volume.adjust(1)); // already at max
    /// assert!(volume.adjust(-10));
    /// assert_eq!(volume.value(), 90);
    /// ```
    pub fn adjust(&mut self, delta: i32) -> bool {
        let previous = self.value;
        self.value = self
            .value
            .saturating_add(delta)
            .clamp(self.descriptor.min, self.descriptor.max);
        self.value != previous
    }

    /// Adjust by `+step`.
    pub fn increment(&mut self) -> bool {
        self.adjust(self.descriptor.step)
    }

    /// Adjust by `-step`.
    pub fn decrement(&mut self) -> bool {
        self.adjust(self.descriptor.step.saturating_neg())
    }

    /// Position of the value within its range, in `[0.0, 1.0]`.
    ///
    /// Formula: `(value - min) / (max - min)`. Returns `0.0` for a
    /// degenerate range where `max == min`.
    pub fn fraction(&self) -> f32 {
        let min = i64::from(self.descriptor.min);
        let span = i64::from(self.descriptor.max) - min;
        if span <= 0 {
            return 0.0;
        }
        (i64::from(self.value) - min) as f32 / span as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static NARROW: DialDescriptor = DialDescriptor::new("narrow", "", -3, 3, 0, 2);
    static FIXED: DialDescriptor = DialDescriptor::new("fixed", "", 7, 7, 7, 1);
    static BAD_DEFAULT: DialDescriptor = DialDescriptor::new("bad", "", 0, 10, 50, 1);
    static WIDE: DialDescriptor = DialDescriptor::new("wide", "", i32::MIN, i32::MAX, 0, 1);

    #[test]
    fn new_starts_at_default() {
        let dial = Dial::new(&NARROW);
        assert_eq!(dial.value(), 0);
        assert_eq!(dial.name(), "narrow");
    }

    #[test]
    fn new_clamps_out_of_range_default() {
        let dial = Dial::new(&BAD_DEFAULT);
        assert_eq!(dial.value(), 10);
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut dial = Dial::new(&NARROW);
        assert!(dial.increment()); // 2
        assert!(dial.increment()); // 3 (clamped from 4)
        assert_eq!(dial.value(), 3);
        assert!(!dial.increment());
        assert_eq!(dial.value(), 3);
    }

    #[test]
    fn decrement_saturates_at_min() {
        let mut dial = Dial::new(&NARROW);
        dial.decrement();
        dial.decrement();
        assert_eq!(dial.value(), -3);
        assert!(!dial.decrement());
        assert_eq!(dial.value(), -3);
    }

    #[test]
    fn extreme_deltas_do_not_overflow() {
        let mut dial = Dial::new(&NARROW);
        dial.adjust(i32::MAX);
        assert_eq!(dial.value(), 3);
        dial.adjust(i32::MIN);
        assert_eq!(dial.value(), -3);
    }

    #[test]
    fn zero_delta_reports_no_change() {
        let mut dial = Dial::new(&NARROW);
        assert!(!dial.adjust(0));
    }

    #[test]
    fn fraction_spans_range() {
        let mut dial = Dial::new(&NARROW);
        assert_eq!(dial.fraction(), 0.5);
        dial.adjust(-10);
        assert_eq!(dial.fraction(), 0.0);
        dial.adjust(10);
        assert_eq!(dial.fraction(), 1.0);
    }

    #[test]
    fn fraction_of_full_width_range_stays_in_bounds() {
        let mut dial = Dial::new(&WIDE);
        let mid = dial.fraction();
        assert!((0.0..=1.0).contains(&mid));
        assert!((mid - 0.5).abs() < 1e-6);

        dial.adjust(i32::MIN);
        dial.adjust(i32::MIN);
        assert_eq!(dial.value(), i32::MIN);
        assert_eq!(dial.fraction(), 0.0);

        dial.adjust(i32::MAX);
        dial.adjust(i32::MAX);
        assert_eq!(dial.value(), i32::MAX);
        assert_eq!(dial.fraction(), 1.0);
    }

    #[test]
    fn fraction_of_degenerate_range_is_zero() {
        let dial = Dial::new(&FIXED);
        assert_eq!(dial.fraction(), 0.0);
    }
}
