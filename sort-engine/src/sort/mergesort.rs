use std::cmp::Ordering;

/// Top-down merge sort. Stable: on ties the element from the left half wins.
pub fn sort<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    mergesort(items, &compare)
}

fn mergesort<T, F>(items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);

    merge(mergesort(left, compare), mergesort(right, compare), compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(l, r) != Ordering::Greater {
            sorted.extend(left.next());
        } else {
            sorted.extend(right.next());
        }
    }

    sorted.extend(left);
    sorted.extend(right);

    sorted
}
