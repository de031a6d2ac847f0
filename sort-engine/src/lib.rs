//! In-memory sorting of student records with a choice of four classic algorithms.
//!
//! The engine holds no state between calls and never logs; callers hand it a slice of
//! records and get back a sorted copy together with how long the sort itself took.

use std::time::{Duration, Instant};

pub mod compare;
pub mod error;
pub mod record;
pub mod sort;

pub use compare::{comparator, SortKey};
pub use error::SortError;
pub use record::{Record, Student};
pub use sort::Algorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest<'a, R> {
    pub algorithm: Algorithm,
    pub sort_key: SortKey,
    pub input: &'a [R],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortResult<R> {
    pub sorted: Vec<R>,
    pub elapsed: Duration,
    pub count: usize,
}

impl<R> SortResult<R> {
    /// Elapsed sort time in milliseconds, e.g. `"1.250"`.
    pub fn elapsed_millis(&self) -> String {
        format!("{:.3}", self.elapsed.as_secs_f64() * 1_000.0)
    }
}

impl<R: Record + Clone> SortRequest<'_, R> {
    pub fn run(&self) -> SortResult<R> {
        sort_with_algorithm(self.input, self.algorithm, self.sort_key)
    }
}

/// Sorts a copy of `data`. Only the algorithm call is timed; cloning the input and
/// picking the comparator are not.
pub fn sort_with_algorithm<R>(data: &[R], algorithm: Algorithm, sort_key: SortKey) -> SortResult<R>
where
    R: Record + Clone,
{
    let data = data.to_vec();
    let count = data.len();
    let compare = comparator::<R>(sort_key);

    let start = Instant::now();
    let sorted = sort::sort(data, algorithm, compare);
    let elapsed = start.elapsed();

    SortResult {
        sorted,
        elapsed,
        count,
    }
}

/// Like [`sort_with_algorithm`], with the algorithm given by name (`quick`, `heap`,
/// `merge` or `bubble`). An unknown name fails before any work is done.
pub fn sort_by_name<R>(
    data: &[R],
    algorithm: &str,
    sort_key: SortKey,
) -> Result<SortResult<R>, SortError>
where
    R: Record + Clone,
{
    let algorithm = algorithm.parse::<Algorithm>()?;
    Ok(sort_with_algorithm(data, algorithm, sort_key))
}
