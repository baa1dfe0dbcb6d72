//! Typed ICU stay records and the time windowing applied to them.
//!
//! This crate holds the data model shared by every benchmark task:
//!
//! - [`Event`]: one row of a stay's event stream, keyed by hours since admission
//! - [`Stay`]: one ICU admission's event stream together with its static label
//! - [`TimeWindow`]: the epsilon-tolerant interval used to clip event streams
//! - [`EpisodeSource`] / [`TrimmedSink`]: the ports through which stays are read
//!   and trimmed per-sample files are written
//! - [`RunSeed`]: the single seed from which a run's random stream is drawn
//!
//! Records are validated once when an [`EpisodeSource`] builds them. Code
//! downstream of the source never re-parses rows or labels.
//!
//! # Example
//!
//! ```
//! use icubench_episode::{Event, TimeWindow};
//!
//! let events = vec![
//!     Event::new(-0.5, vec!["-0.5".into()]),
//!     Event::new(0.0, vec!["0.0".into()]),
//!     Event::new(47.9, vec!["47.9".into()]),
//!     Event::new(48.5, vec!["48.5".into()]),
//! ];
//! let window = TimeWindow::from_admission(48.0);
//! let kept = window.apply(events);
//! assert_eq!(kept.len(), 2);
//! ```

pub use self::{event::*, port::*, seed::*, stay::*, window::*};

pub mod event;
pub mod port;
pub mod seed;
pub mod stay;
pub mod window;
