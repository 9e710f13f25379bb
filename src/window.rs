//! Display Window Module
//!
//! Append-only pagination over the sorted lead sequence: the window
//! grows by a fixed step on demand and resets to its initial size when
//! an upstream filter changes. The visible rows are always a prefix of
//! the sorted set.

use crate::types::Lead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    initial: usize,
    step: usize,
    size: usize,
}

impl Window {
    pub fn new(initial: usize, step: usize) -> Self {
        Window {
            initial,
            step,
            size: initial,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Grow the window by one step (append-only)
    pub fn grow(&mut self) {
        self.size += self.step;
    }

    /// Reset to the initial size
    pub fn reset(&mut self) {
        self.size = self.initial;
    }

    /// Visible prefix of the sorted leads: min(size, len) rows
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> &'a [Lead] {
        &leads[..self.size.min(leads.len())]
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::new(
            crate::config::DEFAULT_WINDOW_INITIAL,
            crate::config::DEFAULT_WINDOW_STEP,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_leads(count: usize) -> Vec<Lead> {
        (0..count)
            .map(|i| Lead {
                id: format!("p-{}", i),
                cost: 0.0,
                category: String::new(),
                description: String::new(),
                street_number: String::new(),
                street_name: String::new(),
                contact_name: String::new(),
                contact_type: String::new(),
                issued_at: None,
                status: String::new(),
                total_fee: String::new(),
                zip: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_window_is_a_prefix() {
        let leads = make_leads(10);
        let window = Window::new(4, 4);
        let visible = window.apply(&leads);
        assert_eq!(visible.len(), 4);
        assert_eq!(visible[0].id, "p-0");
        assert_eq!(visible[3].id, "p-3");
    }

    #[test]
    fn test_window_clamps_to_available_rows() {
        let leads = make_leads(3);
        let window = Window::new(10, 10);
        assert_eq!(window.apply(&leads).len(), 3);
    }

    #[test]
    fn test_growth_is_monotonic() {
        let leads = make_leads(100);
        let mut window = Window::new(10, 25);

        let before: Vec<String> = window.apply(&leads).iter().map(|l| l.id.clone()).collect();
        window.grow();
        let after = window.apply(&leads);

        assert_eq!(after.len(), 35);
        // The smaller window is a prefix of the grown one
        for (i, id) in before.iter().enumerate() {
            assert_eq!(&after[i].id, id);
        }
    }

    #[test]
    fn test_reset_restores_initial_size() {
        let mut window = Window::new(10, 25);
        window.grow();
        window.grow();
        assert_eq!(window.size(), 60);
        window.reset();
        assert_eq!(window.size(), 10);
    }
}
