//! Ad hoc searches
//!
//! For lookups that do not go through a hash index. Two elements are
//! equivalent when neither `is_less` than the other.

/// Index of the first element equivalent to `target`
pub fn linear_search_by<T, F>(v: &[T], target: &T, mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    v.iter()
        .position(|item| !is_less(item, target) && !is_less(target, item))
}

/// Index of some element equivalent to `target`
///
/// `v` must already be sorted consistently with `is_less`; otherwise the
/// result is unspecified (but the call still terminates).
pub fn binary_search_by<T, F>(v: &[T], target: &T, mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut low = 0;
    let mut high = v.len();

    // Half-open window [low, high)
    while low < high {
        let mid = low + (high - low) / 2;
        if is_less(&v[mid], target) {
            low = mid + 1;
        } else if is_less(target, &v[mid]) {
            high = mid;
        } else {
            return Some(mid);
        }
    }

    None
}
