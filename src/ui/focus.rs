//! Keyboard focus containment for the modal viewer.

/// Interactive controls inside the modal, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalControl {
    Close,
    CopyUrl,
}

/// Tab-cycling constraint over the controls present when the modal opened.
///
/// The control list is captured once at activation and never recomputed.
/// An empty list makes the trap inert: focus movement requests return
/// `false` and the press falls through.
#[derive(Debug)]
pub struct FocusTrap {
    controls: Vec<ModalControl>,
    focused: usize,
}

impl FocusTrap {
    #[must_use]
    pub fn new(controls: Vec<ModalControl>) -> Self {
        Self {
            controls,
            focused: 0,
        }
    }

    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.controls.is_empty()
    }

    #[must_use]
    pub fn focused(&self) -> Option<ModalControl> {
        self.controls.get(self.focused).copied()
    }

    /// Move focus forward (Tab). Wraps from the last control to the first.
    /// Returns `false` when the trap is inert.
    pub fn next(&mut self) -> bool {
        if self.controls.is_empty() {
            return false;
        }
        self.focused = (self.focused + 1) % self.controls.len();
        true
    }

    /// Move focus backward (Shift+Tab). Wraps from the first control to the
    /// last. Returns `false` when the trap is inert.
    pub fn prev(&mut self) -> bool {
        if self.controls.is_empty() {
            return false;
        }
        self.focused = if self.focused == 0 {
            self.controls.len() - 1
        } else {
            self.focused - 1
        };
        true
    }

    /// Put focus on `control` if the trap contains it.
    pub fn focus(&mut self, control: ModalControl) {
        if let Some(i) = self.controls.iter().position(|c| *c == control) {
            self.focused = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_forward_and_backward() {
        let mut trap = FocusTrap::new(vec![ModalControl::Close, ModalControl::CopyUrl]);
        assert_eq!(trap.focused(), Some(ModalControl::Close));

        assert!(trap.next());
        assert_eq!(trap.focused(), Some(ModalControl::CopyUrl));
        // Tab on the last control wraps to the first.
        assert!(trap.next());
        assert_eq!(trap.focused(), Some(ModalControl::Close));

        // Shift+Tab on the first control wraps to the last.
        assert!(trap.prev());
        assert_eq!(trap.focused(), Some(ModalControl::CopyUrl));
        assert!(trap.prev());
        assert_eq!(trap.focused(), Some(ModalControl::Close));
    }

    #[test]
    fn test_empty_trap_is_inert() {
        let mut trap = FocusTrap::new(vec![]);
        assert!(trap.is_inert());
        assert!(!trap.next());
        assert!(!trap.prev());
        assert_eq!(trap.focused(), None);
    }

    #[test]
    fn test_single_control_stays_focused() {
        let mut trap = FocusTrap::new(vec![ModalControl::Close]);
        assert!(trap.next());
        assert_eq!(trap.focused(), Some(ModalControl::Close));
        assert!(trap.prev());
        assert_eq!(trap.focused(), Some(ModalControl::Close));
    }

    #[test]
    fn test_focus_specific_control() {
        let mut trap = FocusTrap::new(vec![ModalControl::Close, ModalControl::CopyUrl]);
        trap.focus(ModalControl::CopyUrl);
        assert_eq!(trap.focused(), Some(ModalControl::CopyUrl));
        // Unknown controls leave focus alone.
        let mut inert = FocusTrap::new(vec![ModalControl::CopyUrl]);
        inert.focus(ModalControl::Close);
        assert_eq!(inert.focused(), Some(ModalControl::CopyUrl));
    }
}
