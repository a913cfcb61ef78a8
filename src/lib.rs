//! Majority element search with operation counters for benchmarking.
//!
//! The core is [`find_majority`], a two-pass Boyer-Moore vote that records
//! its comparisons and array accesses in a caller-owned [`Counters`].
//!
//! ```
//! use majority::{Counters, find_majority};
//!
//! let mut counters = Counters::new();
//! assert_eq!(find_majority(&[2, 2, 1], &mut counters), Ok(Some(2)));
//! println!("{}", counters.report());
//! counters.reset();
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod counters;
pub use counters::{Counters, Report};

pub mod algorithms;
pub use algorithms::find_majority;

pub mod gen_sequences;

pub mod utils;
