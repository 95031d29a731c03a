//! Regional holiday calendars.

mod sweden;

pub use sweden::{sweden, STOCKHOLM};
