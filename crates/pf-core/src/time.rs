//! Simulation time model.
//!
//! Both engines measure time in continuous simulated minutes from the start
//! of the run.  The live engine advances its clock by whatever delta the host
//! render loop supplies; the batch engine jumps the clock to each event.

use std::fmt;

/// Simulated minutes since the start of the run.
pub type Minutes = f64;

/// The current simulated time.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: Minutes,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now(&self) -> Minutes {
        self.now
    }

    /// Advance by `dt` minutes.  Negative and non-finite deltas are ignored.
    #[inline]
    pub fn advance(&mut self, dt: Minutes) -> Minutes {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
        self.now
    }

    /// Jump forward to `t`.  Never moves the clock backwards.
    #[inline]
    pub fn advance_to(&mut self, t: Minutes) {
        if t > self.now {
            self.now = t;
        }
    }

    /// Break elapsed time into (hour, minute) components.
    pub fn elapsed_hm(&self) -> (u32, u32) {
        let total = self.now.max(0.0) as u64;
        ((total / 60) as u32, (total % 60) as u32)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.elapsed_hm();
        write!(f, "{:02}:{:02} (t={:.2})", h, m, self.now)
    }
}
