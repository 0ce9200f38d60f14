
///
/// The error type shared by every crate in the workspace; the typed game errors
/// convert into it through `?`.
///
pub use anyhow::{Context, Error, Result};

///
/// Builds an ad-hoc error from a format string.
///
pub use anyhow::anyhow as error;
