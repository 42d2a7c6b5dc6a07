use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the list is empty or contains a zero.
pub fn validate_numbers(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating source numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("No source numbers given");
        return Err(UtilsError::EmptyNumbers);
    }

    if let Some(&zero) = numbers.iter().find(|&&n| n == 0) {
        warn!("Source numbers contain a zero: {:?}", numbers);
        return Err(UtilsError::NonPositiveNumber(zero));
    }

    debug!("Source number validation successful");
    Ok(())
}
