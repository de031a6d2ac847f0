use std::cmp::Ordering;

/// Always runs all n - 1 passes. Only strictly greater neighbours swap, so it is stable.
pub fn sort<T, F>(items: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut items = items;
    let n = items.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
            }
        }
    }

    items
}
