//! Element selection and pairwise distance reduction.

mod distance;
mod filter;

pub use distance::{PairDistance, closest_pair, distance, min_pairwise_distance};
pub use filter::{NITROGEN, select_indices};
