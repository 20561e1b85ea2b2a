//! Wall-clock timing of a single computation.
//!
//! `Benchmark::of` runs a closure once between two `Instant` reads and keeps
//! both the result and the elapsed time. The `Display` form is
//! `<json result> [<s>, <ms>, <μs>, <ns>]` with zero components omitted.

use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_MICRO: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Benchmark<T> {
    pub result: T,
    #[serde(rename = "elapsed_ns", serialize_with = "serialize_nanos")]
    pub elapsed: Duration,
}

fn serialize_nanos<S: serde::Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
}

impl<T> Benchmark<T> {
    pub fn new(result: T, elapsed: Duration) -> Self {
        Self { result, elapsed }
    }

    /// Time one call of `thunk`.
    pub fn of<F: FnOnce() -> T>(thunk: F) -> Self {
        let start = Instant::now();
        let result = thunk();
        Self::new(result, start.elapsed())
    }

    pub fn secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    pub fn millis(&self) -> u32 {
        self.elapsed.subsec_nanos() / NANOS_PER_MILLI
    }

    pub fn micros(&self) -> u32 {
        (self.elapsed.subsec_nanos() % NANOS_PER_MILLI) / NANOS_PER_MICRO
    }

    pub fn nanos(&self) -> u32 {
        self.elapsed.subsec_nanos() % NANOS_PER_MICRO
    }

    /// Non-zero time components, coarsest first.
    pub fn components(&self) -> Vec<String> {
        let mut components = Vec::with_capacity(4);
        if self.secs() != 0 {
            components.push(format!("{}s", self.secs()));
        }
        if self.millis() != 0 {
            components.push(format!("{}ms", self.millis()));
        }
        if self.micros() != 0 {
            components.push(format!("{}μs", self.micros()));
        }
        if self.nanos() != 0 {
            components.push(format!("{}ns", self.nanos()));
        }
        components
    }
}

impl<T: Serialize> fmt::Display for Benchmark<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = serde_json::to_string(&self.result).map_err(|_| fmt::Error)?;
        write!(f, "{} [{}]", result, self.components().join(", "))
    }
}
