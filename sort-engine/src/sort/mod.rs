use std::{cmp::Ordering, fmt, str::FromStr};

use crate::error::SortError;

mod bubblesort;
mod heapsort;
mod mergesort;
mod quicksort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Quick,
    Heap,
    Merge,
    Bubble,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Bubble,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Merge => "merge",
            Algorithm::Bubble => "bubble",
        }
    }

    /// Whether equal elements keep their relative order.
    pub fn is_stable(&self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::Bubble)
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(algorithm: &str) -> Result<Self, Self::Err> {
        match algorithm {
            "quick" => Ok(Algorithm::Quick),
            "heap" => Ok(Algorithm::Heap),
            "merge" => Ok(Algorithm::Merge),
            "bubble" => Ok(Algorithm::Bubble),
            _ => Err(SortError::InvalidAlgorithm(algorithm.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn sort<T, F>(items: Vec<T>, algorithm: Algorithm, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    match algorithm {
        Algorithm::Quick => quicksort::sort(items, compare),
        Algorithm::Heap => heapsort::sort(items, compare),
        Algorithm::Merge => mergesort::sort(items, compare),
        Algorithm::Bubble => bubblesort::sort(items, compare),
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::{sort, Algorithm};
    use crate::error::SortError;

    #[rstest]
    #[case("quick", Algorithm::Quick)]
    #[case("heap", Algorithm::Heap)]
    #[case("merge", Algorithm::Merge)]
    #[case("bubble", Algorithm::Bubble)]
    fn test_algorithm_from_str(#[case] raw: &str, #[case] expected: Algorithm) {
        assert_eq!(raw.parse::<Algorithm>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[test]
    fn test_every_algorithm_round_trips_its_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_only_merge_and_bubble_are_stable() {
        let stable = Algorithm::ALL
            .into_iter()
            .filter(Algorithm::is_stable)
            .collect::<Vec<_>>();
        assert_eq!(stable, vec![Algorithm::Merge, Algorithm::Bubble]);
    }

    #[rstest]
    #[case("frobnicate")]
    #[case("quicksort")]
    #[case("Quick")]
    #[case("")]
    fn test_unknown_algorithm(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Algorithm>(),
            Err(SortError::InvalidAlgorithm(raw.to_owned()))
        );
    }

    #[rstest]
    fn test_matches_std_sort(
        #[values(Algorithm::Quick, Algorithm::Heap, Algorithm::Merge, Algorithm::Bubble)]
        algorithm: Algorithm,
        #[values(0, 1, 2, 3, 17, 256)] len: usize,
    ) {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let items = (0..len).map(|_| rng.gen_range(0..50)).collect::<Vec<u32>>();
        let mut expected = items.clone();
        expected.sort();

        assert_eq!(sort(items, algorithm, u32::cmp), expected);
    }
}
