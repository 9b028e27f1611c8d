
///
/// Serde derives, re-exported so that dependents can `use utils::*`.
///
pub use serde::{Serialize, Deserialize};
