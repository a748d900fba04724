use serde::Serialize;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

/// Lifecycle state of the service, as seen by the readiness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Starting,
    Ready,
    ShuttingDown,
}

impl State {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => State::Starting,
            1 => State::Ready,
            _ => State::ShuttingDown,
        }
    }
}

/// Readiness gate: `Starting -> Ready -> ShuttingDown`, or straight to
/// `ShuttingDown`. Never goes back.
///
/// Handlers only read it; `server::run` drives the transitions.
#[derive(Debug)]
pub struct Readiness(AtomicU8);

impl Readiness {
    pub fn new() -> Self {
        Readiness(AtomicU8::new(State::Starting as u8))
    }

    pub fn state(&self) -> State {
        State::from_u8(self.0.load(Ordering::Acquire))
    }

    /// `Starting -> Ready`, returns false when the service already moved on
    pub(crate) fn mark_ready(&self) -> bool {
        self.0
            .compare_exchange(
                State::Starting as u8,
                State::Ready as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Any state `-> ShuttingDown`, returns the previous state
    pub(crate) fn begin_shutdown(&self) -> State {
        State::from_u8(self.0.swap(State::ShuttingDown as u8, Ordering::AcqRel))
    }
}

impl Default for Readiness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Readiness;
    use super::State;

    #[test]
    fn starts_not_ready() {
        let readiness = Readiness::new();
        assert_eq!(State::Starting, readiness.state());
        assert_ne!(State::Ready, readiness.state());
    }

    #[test]
    fn ready_then_shutdown() {
        let readiness = Readiness::new();
        assert!(readiness.mark_ready());
        assert_eq!(State::Ready, readiness.state());
        assert!(!readiness.mark_ready());
        assert_eq!(State::Ready, readiness.begin_shutdown());
        assert_eq!(State::ShuttingDown, readiness.state());
    }

    #[test]
    fn shutdown_is_final() {
        let readiness = Readiness::new();
        assert_eq!(State::Starting, readiness.begin_shutdown());
        assert!(!readiness.mark_ready());
        assert_eq!(State::ShuttingDown, readiness.state());
    }
}
