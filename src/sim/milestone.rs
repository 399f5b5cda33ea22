//! One-time score milestones

use serde::Serialize;

/// Built-in milestones, ascending by threshold
pub const DEFAULT_MILESTONES: [(u32, &str); 4] = [
    (50, "Great start! 💧"),
    (100, "Clean water hero! 🚰"),
    (200, "Making waves! 🌊"),
    (300, "Water champion! 🏆"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub threshold: u32,
    pub message: &'static str,
    pub triggered: bool,
}

/// Ordered milestone list for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneTracker {
    milestones: Vec<Milestone>,
}

impl Default for MilestoneTracker {
    fn default() -> Self {
        Self::new(&DEFAULT_MILESTONES)
    }
}

impl MilestoneTracker {
    pub fn new(table: &[(u32, &'static str)]) -> Self {
        let mut milestones: Vec<Milestone> = table
            .iter()
            .map(|&(threshold, message)| Milestone {
                threshold,
                message,
                triggered: false,
            })
            .collect();
        milestones.sort_by_key(|m| m.threshold);
        Self { milestones }
    }

    /// Mark every milestone untriggered (start of a run)
    pub fn reset(&mut self) {
        for m in &mut self.milestones {
            m.triggered = false;
        }
    }

    /// Fire every untriggered milestone reached by `score`, lowest first.
    ///
    /// Returns the messages that fired on this call.
    pub fn evaluate(&mut self, score: u32) -> Vec<&'static str> {
        let mut fired = Vec::new();
        for m in &mut self.milestones {
            if !m.triggered && m.threshold <= score {
                m.triggered = true;
                fired.push(m.message);
            }
        }
        fired
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }
}
