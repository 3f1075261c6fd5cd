/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains the error type and error constants used across the Lumen
    boot firmware.

--*/
#![cfg_attr(not(feature = "std"), no_std)]

use core::num::NonZeroU32;

/// Lumen Error Type
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LumenError(pub NonZeroU32);

/// Result type used by the drivers and the ROM flows.
pub type LumenResult<T> = Result<T, LumenError>;

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: LumenError = LumenError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns all defined error constants for testing uniqueness
        fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl LumenError {
    /// Create a Lumen error; intended to only be used from const contexts, as
    /// we don't want runtime panics if val is zero.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("LumenError cannot be 0"),
        }
    }

    define_error_constants![
        (
            DRIVER_SPIFLASH_NOT_RESPONDING,
            0x00010001,
            "SPI flash transfer-done poll exhausted its bound"
        ),
        (
            ROM_GLOBAL_EXCEPTION,
            0x000E0001,
            "Unexpected CPU exception during boot"
        ),
        (ROM_GLOBAL_PANIC, 0x000E0002, "ROM panicked"),
    ];
}

impl From<LumenError> for u32 {
    fn from(err: LumenError) -> u32 {
        err.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_error_codes_unique() {
        let mut seen: HashMap<u32, &'static str> = HashMap::new();
        for (name, value) in LumenError::all_constants() {
            if let Some(other) = seen.insert(value, name) {
                panic!("{name} and {other} share the error code {value:#010x}");
            }
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        let code: u32 = LumenError::DRIVER_SPIFLASH_NOT_RESPONDING.into();
        assert_eq!(code, 0x00010001);
    }
}
