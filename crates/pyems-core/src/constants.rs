//! Constants shared by probes and the signal reader
//!
//! Naming conventions and file-format markers used when talking to the
//! solver and its geometry kernel.

/// Separator between the kind prefix and the ordinal in a probe name.
/// A voltage probe allocated first is named `v_t_0`.
pub const PROBE_NAME_SEPARATOR: &str = "_t_";

/// Weighting applied to a probe's recorded signal when none is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Leading characters of comment lines in solver probe dumps.
pub const PROBE_FILE_COMMENTS: &[char] = &['%', '#'];

/// Column holding the time axis in a probe dump.
pub const TIME_COLUMN: usize = 0;

/// Column holding the recorded value in a probe dump.
pub const VALUE_COLUMN: usize = 1;
