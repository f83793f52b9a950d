//! `struct timespec` timestamps.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// A `struct timespec`: seconds and nanoseconds since the Unix epoch
///
/// Both fields are 64-bit on Darwin, 16 bytes in total.
///
/// ## Example
///
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
///
/// use fsattr_core::types::Timespec;
///
/// let ts = Timespec::new(1_700_000_000, 500);
/// assert_eq!(ts.to_system_time(), Some(UNIX_EPOCH + Duration::new(1_700_000_000, 500)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timespec
{
    /// Seconds (`tv_sec`)
    pub seconds: i64,
    /// Nanoseconds (`tv_nsec`)
    pub nanoseconds: i64,
}

impl Timespec
{
    pub const fn new(seconds: i64, nanoseconds: i64) -> Self
    {
        Self { seconds, nanoseconds }
    }

    /// Converts to `SystemTime`.
    ///
    /// Returns `None` when the nanosecond field is out of range or the value
    /// cannot be represented.
    pub fn to_system_time(self) -> Option<SystemTime>
    {
        let nanos = u32::try_from(self.nanoseconds).ok().filter(|n| *n < 1_000_000_000)?;
        if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.seconds.unsigned_abs(), nanos))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?
                .checked_add(Duration::from_nanos(u64::from(nanos)))
        }
    }
}

impl fmt::Display for Timespec
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        // Before the epoch the nanoseconds still count forward, so fold both into one instant
        let total = i128::from(self.seconds) * NANOS_PER_SECOND + i128::from(self.nanoseconds);
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        let per_second = NANOS_PER_SECOND.unsigned_abs();
        write!(f, "{sign}{}.{:09}", magnitude / per_second, magnitude % per_second)
    }
}
