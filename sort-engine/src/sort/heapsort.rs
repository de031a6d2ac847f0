use std::cmp::Ordering;

pub fn sort<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut items = items;
    let n = items.len();

    for i in (0..n / 2).rev() {
        heapify(&mut items, &compare, n, i);
    }

    for i in (1..n).rev() {
        items.swap(0, i);
        heapify(&mut items, &compare, i, 0);
    }

    items
}

/// Sifts `items[i]` down a max-heap made of the first `n` items.
fn heapify<T, F>(items: &mut [T], compare: &F, n: usize, i: usize)
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && compare(&items[left], &items[largest]) == Ordering::Greater {
        largest = left;
    }

    if right < n && compare(&items[right], &items[largest]) == Ordering::Greater {
        largest = right;
    }

    if largest != i {
        items.swap(i, largest);
        heapify(items, compare, n, largest);
    }
}

#[cfg(test)]
mod tests {
    use super::{heapify, sort};

    #[test]
    fn test_heapify_builds_max_heap() {
        let mut items = vec![1, 9, 8, 3, 4, 7];
        let n = items.len();
        for i in (0..n / 2).rev() {
            heapify(&mut items, &|a: &i32, b: &i32| a.cmp(b), n, i);
        }

        assert_eq!(items[0], 9);
        for i in 1..n {
            assert!(items[(i - 1) / 2] >= items[i]);
        }
    }

    #[test]
    fn test_sorts_descending_by_reversed_comparator() {
        let items = vec![3, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(sort(items, |a, b| b.cmp(a)), vec![9, 6, 5, 4, 3, 2, 1, 1]);
    }
}
