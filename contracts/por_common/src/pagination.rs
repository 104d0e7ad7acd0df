use soroban_sdk::{Env, IntoVal, TryFromVal, Val, Vec};

/// Resolves an inclusive `[start, end]` request against a list of `len`
/// items.
///
/// `end` past the last index is clamped down to `len - 1`. A `start` past
/// the last index is not clamped: the request resolves to nothing, as does
/// `start > end`.
pub fn inclusive_bounds(len: u32, start: u32, end: u32) -> Option<(u32, u32)> {
    if start > end || start >= len {
        return None;
    }
    let last = if end >= len { len - 1 } else { end };
    Some((start, last))
}

/// Copies the inclusive `[start, end]` window of `items` into a new vector.
pub fn page<T>(env: &Env, items: &Vec<T>, start: u32, end: u32) -> Vec<T>
where
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    match inclusive_bounds(items.len(), start, end) {
        Some((first, last)) => items.slice(first..last + 1),
        None => Vec::new(env),
    }
}
