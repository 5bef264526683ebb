//! Constraining values into a closed interval.

/// Constrains `value` to the closed interval `[low, high]`.
///
/// Returns `low` when `value < low`, `high` when `value > high`, and `value`
/// otherwise. The comparisons run in that order, so an inverted range
/// (`low > high`) yields a bound instead of panicking the way [`Ord::clamp`] does.
///
/// ```rust
/// use example_cli::clamp::clamp;
///
/// assert_eq!(clamp(5, 0, 10), 5);
/// assert_eq!(clamp(5, 7, 10), 7);
/// assert_eq!(clamp(5, 0, 3), 3);
/// ```
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// One fixed clamp invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampCall {
    pub value: i32,
    pub low: i32,
    pub high: i32,
}

impl ClampCall {
    #[must_use]
    pub const fn new(value: i32, low: i32, high: i32) -> Self {
        Self { value, low, high }
    }

    #[must_use]
    pub fn evaluate(self) -> i32 {
        clamp(self.value, self.low, self.high)
    }
}

/// The three invocations printed on every run: in range, below, above.
pub const DEMO_CLAMPS: [ClampCall; 3] =
    [ClampCall::new(5, 0, 10), ClampCall::new(5, 7, 10), ClampCall::new(5, 0, 3)];
