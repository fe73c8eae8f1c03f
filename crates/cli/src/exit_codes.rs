//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3-9     | align            | Alignment-specific codes                 |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant in the appropriate range
//! 2. Document what triggers it
//! 3. Update the table above
//! 4. Wire it into the relevant command's error handling

use skosalign_io::IoError;

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
/// Below-threshold candidates and unmatched resources do not change this.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Align (3-9)
// =============================================================================

/// An input graph could not be read or parsed, or its format is unknown.
/// Nothing is written.
pub const EXIT_ALIGN_LOAD: u8 = 3;

/// Config file unreadable, malformed, or fails validation.
pub const EXIT_ALIGN_INVALID_CONFIG: u8 = 4;

/// Output graph or report could not be written.
/// A failed graph write leaves the previous output file in place. The report
/// is written after the graph, so a report failure can follow a successful
/// graph write.
pub const EXIT_ALIGN_WRITE: u8 = 5;

/// Map an I/O crate error to its exit code.
pub fn io_exit_code(err: &IoError) -> u8 {
    match err {
        IoError::Read { .. } | IoError::Parse { .. } | IoError::UnsupportedFormat(_) => {
            EXIT_ALIGN_LOAD
        }
        IoError::InvalidTerm { .. } | IoError::Serialize(_) | IoError::Write { .. } => {
            EXIT_ALIGN_WRITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            EXIT_SUCCESS,
            EXIT_ERROR,
            EXIT_USAGE,
            EXIT_ALIGN_LOAD,
            EXIT_ALIGN_INVALID_CONFIG,
            EXIT_ALIGN_WRITE,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn io_errors_map_by_phase() {
        assert_eq!(io_exit_code(&IoError::UnsupportedFormat("csv".into())), EXIT_ALIGN_LOAD);
        let write = IoError::Write {
            path: "out.ttl".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(io_exit_code(&write), EXIT_ALIGN_WRITE);
    }
}
