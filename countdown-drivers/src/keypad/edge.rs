//! Press edge detection

use countdown_core::timer::Button;

/// Reports a button once per press
///
/// A press is reported when the decoded button differs from the previous
/// sample and is not "released". Sliding from one button straight to
/// another counts as a new press.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    last: Option<Button>,
}

impl ButtonEdge {
    /// Start in the released state
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Feed one decoded sample; returns the newly pressed button, if any
    pub fn update(&mut self, sample: Option<Button>) -> Option<Button> {
        let changed = sample != self.last;
        self.last = sample;
        if changed {
            sample
        } else {
            None
        }
    }

    /// Button held at the last sample
    pub fn held(&self) -> Option<Button> {
        self.last
    }
}
