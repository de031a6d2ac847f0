use std::{cmp::Ordering, mem};

/// Lomuto quicksort with the last element as pivot. Not stable.
pub fn sort<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut items = items;
    quicksort(&mut items, &compare);
    items
}

// Recurses into the smaller side and loops on the larger one, so the stack stays
// O(log n) deep even when every pivot lands at an end.
fn quicksort<T, F>(mut items: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot_index = partition(items, compare);
        let (left, rest) = mem::take(&mut items).split_at_mut(pivot_index);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quicksort(left, compare);
            items = right;
        } else {
            quicksort(right, compare);
            items = left;
        }
    }
}

/// Everything `<=` the pivot ends up left of the returned index, everything `>` right of it.
fn partition<T, F>(items: &mut [T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let pivot = items.len() - 1;
    let mut store = 0;

    for j in 0..pivot {
        if compare(&items[j], &items[pivot]) != Ordering::Greater {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, pivot);

    store
}

#[cfg(test)]
mod tests {
    use super::{partition, sort};

    #[test]
    fn test_partition_places_pivot() {
        let mut items = vec![7, 2, 9, 4, 1, 5];
        let pivot_index = partition(&mut items, &|a: &i32, b: &i32| a.cmp(b));

        assert_eq!(pivot_index, 3);
        assert_eq!(items[pivot_index], 5);
        assert!(items[..pivot_index].iter().all(|item| *item <= 5));
        assert!(items[pivot_index + 1..].iter().all(|item| *item > 5));
    }

    #[test]
    fn test_sorted_and_reversed_input() {
        let ascending = (0..2_000).collect::<Vec<_>>();
        let descending = ascending.iter().rev().copied().collect::<Vec<_>>();

        assert_eq!(sort(ascending.clone(), i32::cmp), ascending);
        assert_eq!(sort(descending, i32::cmp), ascending);
    }
}
