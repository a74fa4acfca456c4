//! Structured command types produced by classification

use serde::{Deserialize, Serialize};

/// Top-level command kind.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Pick,
    Sort,
    Decline,
}

/// The fixed block palette. `Any` means "no preference".
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Wood,
    Any,
}

/// Spatial qualifier for PICK targets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spatial {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    Nearest,
    First,
    Last,
}

/// Grouping criterion for SORT.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    Color,
    Random,
}

/// Typed parameters. Which fields are populated depends on the action:
/// color/spatial only for PICK, criterion only for SORT, none for DECLINE.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    pub target_color: Option<Color>,
    /// `-1` is the reserved "all" sentinel.
    pub quantity: i32,
    pub spatial_context: Option<Spatial>,
    pub sort_criteria: Option<SortCriterion>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            target_color: None,
            quantity: 1,
            spatial_context: None,
            sort_criteria: None,
        }
    }
}

/// One classified utterance. Created per user input and consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Command {
    #[serde(rename = "action_type")]
    pub action: Action,
    pub parameters: Parameters,
    pub reasoning: String,
}

impl Command {
    pub fn decline(reasoning: impl Into<String>) -> Self {
        Self {
            action: Action::Decline,
            parameters: Parameters::default(),
            reasoning: reasoning.into(),
        }
    }
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Pick => "PICK",
            Action::Sort => "SORT",
            Action::Decline => "DECLINE",
        }
    }
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Pink => "pink",
            Color::Wood => "wood",
            Color::Any => "any",
        }
    }
}

impl Spatial {
    pub fn as_str(&self) -> &'static str {
        match self {
            Spatial::Top => "top",
            Spatial::Bottom => "bottom",
            Spatial::Left => "left",
            Spatial::Right => "right",
            Spatial::Center => "center",
            Spatial::Nearest => "nearest",
            Spatial::First => "first",
            Spatial::Last => "last",
        }
    }
}

impl SortCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Color => "color",
            SortCriterion::Random => "random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_names_match_the_wire_schema() {
        for action in [Action::Pick, Action::Sort, Action::Decline] {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, action.as_str());
        }
    }
}
