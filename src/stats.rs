use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, miette::Diagnostic)]
#[error("Cannot compute the mean of an empty sequence")]
#[diagnostic(code(weather::stats::empty_input))]
pub struct EmptyInput;

/// Arithmetic mean of `values`.
pub fn mean<T>(values: &[T]) -> Result<f64, EmptyInput>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return Err(EmptyInput);
    }

    let sum: f64 = values.iter().map(|&value| value.into()).sum();
    Ok(sum / values.len() as f64)
}

/// Smallest value and its position. When the minimum appears several times
/// the index of the *last* one is returned. `None` on empty input.
pub fn find_min<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, usize)> {
    find_last_by(values, |candidate, best| candidate <= best)
}

/// Largest value and its position, same tie-break as [`find_min`].
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Option<(T, usize)> {
    find_last_by(values, |candidate, best| candidate >= best)
}

fn find_last_by<T: Copy>(values: &[T], replaces: fn(&T, &T) -> bool) -> Option<(T, usize)> {
    let mut iter = values.iter().copied().enumerate();
    let (first_index, first) = iter.next()?;

    let (index, value) = iter.fold((first_index, first), |(best_index, best), (index, value)| {
        if replaces(&value, &best) {
            (index, value)
        } else {
            (best_index, best)
        }
    });

    Some((value, index))
}
