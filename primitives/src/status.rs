//! Response status codes returned to the ledger runtime.
//!
//! Values follow the runtime's shim convention: anything below
//! [`ERROR_THRESHOLD`] is a success, [`ERROR`] is the generic failure.

/// Invocation succeeded.
pub const OK: i32 = 200;

/// Lowest status considered an error.
pub const ERROR_THRESHOLD: i32 = 400;

/// Invocation failed.
pub const ERROR: i32 = 500;

/// Returns true if the status denotes success.
pub fn is_success(status: i32) -> bool {
    status < ERROR_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_values() {
        assert_eq!(OK, 200);
        assert_eq!(ERROR_THRESHOLD, 400);
        assert_eq!(ERROR, 500);
    }

    #[test]
    fn test_is_success() {
        assert!(is_success(OK));
        assert!(is_success(399));
        assert!(!is_success(ERROR_THRESHOLD));
        assert!(!is_success(ERROR));
    }
}
