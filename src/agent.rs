//! Agents: the users a task can be assigned to

use csscolorparser::Color;
use serde::{Deserialize, Serialize};

/// The identifier of an [`Agent`]. These come from the surrounding user
/// directory, so they are opaque strings rather than ids we generate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId {
    content: String,
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self { content: s }
    }
}
impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self { content: s.to_string() }
    }
}

impl AgentId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

/// A user who can be assigned to tasks, rendered with a consistent color
/// across every view (avatars, badges, task chips)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    first_name: String,
    last_name: String,
    color: Color,
}

impl Agent {
    pub fn new(id: AgentId, first_name: String, last_name: String, color: Color) -> Self {
        Self { id, first_name, last_name, color }
    }

    pub fn id(&self) -> &AgentId { &self.id }
    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn color(&self) -> &Color { &self.color }

    /// "First Last", for list rows and tooltips
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The one or two letters shown inside an avatar bubble
    pub fn initials(&self) -> String {
        self.first_name.chars().take(1)
            .chain(self.last_name.chars().take(1))
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_come_from_both_names() {
        let agent = Agent::new(
            AgentId::from("u-17"),
            "ana".to_string(),
            "garcía".to_string(),
            "#e11d48".parse().unwrap(),
        );
        assert_eq!(agent.initials(), "AG");
        assert_eq!(agent.full_name(), "ana garcía");
    }
}
