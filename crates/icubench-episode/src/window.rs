use crate::Event;

/// Default tolerance applied at both window boundaries, in hours.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Half-open time interval used to clip an event stream.
///
/// An event at time `t` lies inside the window when
/// `lower - eps < t < upper + eps`. Event times come out of an upstream
/// alignment to the admission time and carry floating rounding; the tolerance
/// absorbs it at both ends. The comparison is strict on purpose and must stay
/// that way, otherwise the set of eligible stays changes.
///
/// # Example
///
/// ```
/// use icubench_episode::TimeWindow;
///
/// let window = TimeWindow::from_admission(48.0);
/// assert!(window.contains(-1e-7));
/// assert!(window.contains(48.0));
/// assert!(!window.contains(-1e-6));
/// assert!(!window.contains(48.0 + 1e-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    lower: f64,
    upper: f64,
    eps: f64,
}

impl TimeWindow {
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            eps: DEFAULT_EPS,
        }
    }

    /// Window starting at admission (hour 0) and ending at `upper`.
    #[must_use]
    pub fn from_admission(upper: f64) -> Self {
        Self::new(0.0, upper)
    }

    /// Like [`Self::new`], with a custom boundary tolerance.
    #[must_use]
    pub fn with_eps(self, eps: f64) -> Self {
        Self { eps, ..self }
    }

    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.lower - self.eps < time && time < self.upper + self.eps
    }

    /// Keeps the events inside the window.
    ///
    /// This is a stable filter: surviving events keep their input order and
    /// are never re-sorted. An empty result is not an error here; callers
    /// decide what an empty window means for them.
    #[must_use]
    pub fn apply(&self, mut events: Vec<Event>) -> Vec<Event> {
        events.retain(|event| self.contains(event.time));
        events
    }
}
