
///
/// The application-level error plumbing shared by every crate in the workspace.
///
/// `error!` builds an ad-hoc error from a format string, and `Context` attaches 
/// a description of the failing operation to any fallible result.
///
pub use anyhow::{anyhow as error, bail, ensure, Context, Error, Result};
