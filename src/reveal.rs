//! One-shot enter animation for content blocks.

/// Inset applied to the viewport so blocks reveal slightly before they are
/// fully on screen.
pub const REVEAL_ROOT_MARGIN: &str = "-50px";
pub const REVEAL_DURATION_SECONDS: f64 = 0.8;
pub const REVEAL_OFFSET_PX: f64 = 30.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealState {
    /// Starting state for a block. Without an intersection observer there is
    /// nothing to wait for, so the block starts revealed.
    pub fn initial(observer_available: bool) -> Self {
        if observer_available {
            Self::Unrevealed
        } else {
            Self::Revealed
        }
    }

    /// Feed one intersection notification. Returns true only on the
    /// transition into `Revealed`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (Self::Unrevealed, true) => {
                *self = Self::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Inline style for the animated block.
    pub fn style(self, reduced_motion: bool) -> String {
        let transition = if reduced_motion {
            "none".to_string()
        } else {
            let seconds = REVEAL_DURATION_SECONDS;
            format!("opacity {seconds}s ease-out, transform {seconds}s ease-out")
        };

        match self {
            Self::Revealed => {
                format!("opacity: 1; transform: translateY(0px); transition: {transition};")
            }
            Self::Unrevealed => {
                let offset = REVEAL_OFFSET_PX;
                format!("opacity: 0; transform: translateY({offset}px); transition: {transition};")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_exactly_once_under_toggling_intersection() {
        let mut state = RevealState::default();
        let transitions = [false, true, false, true, true, false]
            .into_iter()
            .filter(|&intersecting| state.observe(intersecting))
            .count();

        assert_eq!(transitions, 1);
        assert!(state.is_revealed());
    }

    #[test]
    fn non_intersecting_notifications_keep_block_hidden() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.observe(false));
        assert_eq!(state, RevealState::Unrevealed);
    }

    #[test]
    fn missing_observer_reveals_immediately() {
        let mut state = RevealState::initial(false);
        assert!(state.is_revealed());
        assert!(!state.observe(true));

        assert_eq!(RevealState::initial(true), RevealState::Unrevealed);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut first = RevealState::default();
        let second = RevealState::default();

        first.observe(true);

        assert!(first.is_revealed());
        assert!(!second.is_revealed());
    }

    #[test]
    fn hidden_style_offsets_and_fades() {
        assert_eq!(
            RevealState::Unrevealed.style(false),
            "opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease-out, transform 0.8s ease-out;"
        );
    }

    #[test]
    fn reduced_motion_drops_the_transition() {
        assert_eq!(
            RevealState::Revealed.style(true),
            "opacity: 1; transform: translateY(0px); transition: none;"
        );
    }
}
