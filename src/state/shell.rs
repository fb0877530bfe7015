//! Navigation Shell
//!
//! Which section the main area shows. Any section can follow any other.

use crate::section::Section;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shell {
    active: Section,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch sections. Returns `true` if the active section changed.
    pub fn navigate(&mut self, section: Section) -> bool {
        let changed = self.active != section;
        self.active = section;
        changed
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        assert_eq!(Shell::new().active(), Section::Dashboard);
    }

    #[test]
    fn test_every_transition_allowed() {
        let mut shell = Shell::new();
        for from in Section::ALL {
            for to in Section::ALL {
                shell.navigate(from);
                assert_eq!(shell.navigate(to), from != to);
                assert!(shell.is_active(to));
            }
        }
    }
}
