//! Hailstone (Collatz) sequences.
//!
//! From `n`, the next term is `n / 2` when `n` is even and `3n + 1` when it
//! is odd. A number satisfies the hailstone property when its sequence
//! reaches 1. Only positive numbers have a sequence.
//!
//! Terms are `u128`: sequences from any `i64` start stay far below its
//! range (the start `i64::MAX` peaks around 2^101).

/// Iterator over the hailstone sequence starting at a positive number.
///
/// Yields the starting value first and stops after yielding 1. If `3n + 1`
/// would overflow `u128`, the iterator ends early and
/// [`Hailstone::overflowed`] reports it.
///
/// ```
/// use podium_lab::Hailstone;
///
/// let seq: Vec<u128> = Hailstone::new(6).collect();
/// assert_eq!(seq, [6, 3, 10, 5, 16, 8, 4, 2, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct Hailstone {
    next: Option<u128>,
    overflowed: bool,
}

impl Hailstone {
    /// Start a sequence at `start`. Zero yields nothing.
    #[must_use]
    pub const fn new(start: u128) -> Self {
        Self {
            next: if start == 0 { None } else { Some(start) },
            overflowed: false,
        }
    }

    /// Whether the sequence was cut short by overflow.
    #[must_use]
    pub const fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Iterator for Hailstone {
    type Item = u128;

    fn next(&mut self) -> Option<u128> {
        let current = self.next?;
        self.next = match current {
            1 => None,
            n if n % 2 == 0 => Some(n / 2),
            n => {
                let stepped = n.checked_mul(3).and_then(|m| m.checked_add(1));
                self.overflowed = stepped.is_none();
                stepped
            }
        };
        Some(current)
    }
}

impl std::iter::FusedIterator for Hailstone {}

/// Number of steps for `n` to reach 1, or `None` if `n` is not positive.
#[must_use]
pub fn stopping_time(n: i64) -> Option<u64> {
    let start = u128::try_from(n).ok().filter(|&v| v > 0)?;
    let mut seq = Hailstone::new(start);
    let mut steps = 0u64;
    let mut last = 0;
    for term in seq.by_ref() {
        last = term;
        steps += 1;
    }
    if seq.overflowed() || last != 1 {
        return None;
    }
    Some(steps - 1)
}

/// Whether the hailstone sequence starting at `n` reaches 1.
///
/// The sequence is only defined for positive integers, so zero and
/// negative numbers are `false` by definition. (From `-2` the `3n + 1`
/// rule cycles `-2, -1, -2` and never reaches 1.)
#[must_use]
pub fn satisfies_hailstone(n: i64) -> bool {
    stopping_time(n).is_some()
}
