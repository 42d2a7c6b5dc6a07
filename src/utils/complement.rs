use crate::utils::errors::UtilsError;

/// Removes `selection` from `parent`, one occurrence per selected value.
///
/// `selection` must appear in `parent` as a subsequence. Occurrences are
/// consumed in order, so `(4, 2, 1, 1)` minus `(1,)` leaves `(4, 2, 1)`.
///
/// # Errors
///
/// Returns an error if `selection` is not a subsequence of `parent`.
pub fn complement(parent: &[u64], selection: &[u64]) -> Result<Vec<u64>, UtilsError> {
    let mut wanted = selection.iter().peekable();
    let mut rest = Vec::with_capacity(parent.len().saturating_sub(selection.len()));

    for &value in parent {
        if wanted.next_if(|&&next| next == value).is_none() {
            rest.push(value);
        }
    }

    if wanted.peek().is_some() {
        return Err(UtilsError::NotASubsequence {
            parent: parent.to_vec(),
            selection: selection.to_vec(),
        });
    }

    Ok(rest)
}
