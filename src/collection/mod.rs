//! Note collection access.
//!
//! The lookup phases only talk to a collection through [`Collection`], and
//! to the host through [`Reviewer`] and [`Prompt`]. [`MemoryCollection`] is
//! a self-contained implementation of the search grammar.

pub mod memory;
pub mod traits;

pub use memory::MemoryCollection;
pub use traits::{AutoAnswer, Collection, NoReview, Prompt, Reviewer};
