//! Classifier for natural language arm commands

use crate::command::{Action, Color, Command, Parameters, SortCriterion, Spatial};
use crate::lexicon::{
    ALL_WORDS, COLOR_MAP, DECLINE_KEYWORDS, OBJECT_NOUNS, PICK_KEYWORDS, SORT_KEYWORDS,
    SPATIAL_MAP, WORD_NUMBERS,
};
use regex::Regex;
use std::sync::OnceLock;

fn digit_run() -> &'static Regex {
    static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUN.get_or_init(|| Regex::new(r"\d+").expect("Invalid regex pattern - this is a bug"))
}

/// Keyword-driven classifier. Stateless; `classify` is total and never
/// fails. Unknown input resolves to DECLINE.
#[derive(Debug, Default)]
pub struct Classifier {
    _private: (),
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one utterance into a structured command.
    pub fn classify(&self, text: &str) -> Command {
        let text = text.trim().to_lowercase();
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let action = detect_action(&text, &tokens);
        tracing::debug!(%text, ?action, "classified utterance");

        match action {
            Action::Decline => Command::decline("Request outside robot capabilities."),
            Action::Sort => {
                let criterion = detect_criterion(&text);
                Command {
                    action: Action::Sort,
                    parameters: Parameters {
                        sort_criteria: Some(criterion),
                        ..Parameters::default()
                    },
                    reasoning: format!("Organize all blocks by {}.", criterion.as_str()),
                }
            }
            Action::Pick => {
                let color = detect_color(&text, &tokens);
                let quantity = detect_quantity(&text, &tokens);
                let spatial = detect_spatial(&tokens);
                Command {
                    action: Action::Pick,
                    parameters: Parameters {
                        target_color: color,
                        quantity,
                        spatial_context: spatial,
                        sort_criteria: None,
                    },
                    reasoning: pick_reasoning(color, quantity, spatial),
                }
            }
        }
    }
}

/// Priority order is deliberate: decline beats sort beats pick, so unsafe
/// or out-of-scope requests are never misread as motion.
fn detect_action(text: &str, tokens: &[&str]) -> Action {
    let has = |set: &[&str]| tokens.iter().any(|t| set.contains(t));

    if has(DECLINE_KEYWORDS) {
        return Action::Decline;
    }
    if has(SORT_KEYWORDS) {
        return Action::Sort;
    }
    if has(PICK_KEYWORDS) {
        return Action::Pick;
    }
    // Ambiguous requests about blocks default to PICK.
    if OBJECT_NOUNS.iter().any(|n| text.contains(n)) {
        return Action::Pick;
    }
    Action::Decline
}

fn strip_punct(token: &str) -> String {
    token.chars().filter(|c| c.is_alphanumeric()).collect()
}

fn detect_color(text: &str, tokens: &[&str]) -> Option<Color> {
    // Scan order equals token order, so the first color word wins.
    for token in tokens {
        let clean = strip_punct(token);
        if let Some((_, color)) = COLOR_MAP.iter().find(|(word, _)| *word == clean) {
            return Some(*color);
        }
    }
    if text.contains("any") || text.contains("random") {
        return Some(Color::Any);
    }
    None
}

fn detect_quantity(text: &str, tokens: &[&str]) -> i32 {
    if ALL_WORDS.iter().any(|w| text.contains(w)) {
        return -1;
    }
    // A digit run beats a word number when both are present.
    if let Some(m) = digit_run().find(text) {
        if let Ok(n) = m.as_str().parse::<i32>() {
            return n;
        }
    }
    for token in tokens {
        let clean = strip_punct(token);
        if let Some((_, n)) = WORD_NUMBERS.iter().find(|(word, _)| *word == clean) {
            return *n;
        }
    }
    1
}

fn detect_spatial(tokens: &[&str]) -> Option<Spatial> {
    for token in tokens {
        let clean = strip_punct(token);
        if let Some((_, spatial)) = SPATIAL_MAP.iter().find(|(word, _)| *word == clean) {
            return Some(*spatial);
        }
    }
    None
}

/// Color is the only implemented grouping, so it is the default even when
/// the text never says "color".
fn detect_criterion(text: &str) -> SortCriterion {
    if text.contains("random") {
        SortCriterion::Random
    } else {
        SortCriterion::Color
    }
}

fn pick_reasoning(color: Option<Color>, quantity: i32, spatial: Option<Spatial>) -> String {
    let mut parts = vec!["Pick".to_string()];
    if quantity == -1 {
        parts.push("all".to_string());
    } else {
        parts.push(quantity.to_string());
    }
    if let Some(c) = color {
        if c != Color::Any {
            parts.push(c.as_str().to_string());
        }
    }
    if let Some(s) = spatial {
        parts.push(format!("({})", s.as_str()));
    }
    parts.push("block(s).".to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Command {
        Classifier::new().classify(text)
    }

    #[test]
    fn decline_keywords_win_over_pick_vocabulary() {
        // "stack" must reject even though "red" and "blocks" are present.
        let cmd = classify("stack the red blocks");
        assert_eq!(cmd.action, Action::Decline);
        assert!(cmd.parameters.target_color.is_none());

        assert_eq!(classify("dance around").action, Action::Decline);
        assert_eq!(classify("throw the blue piece").action, Action::Decline);
    }

    #[test]
    fn sort_beats_pick() {
        let cmd = classify("sort and collect the blocks");
        assert_eq!(cmd.action, Action::Sort);
    }

    #[test]
    fn bare_object_noun_defaults_to_pick() {
        let cmd = classify("the red block please");
        assert_eq!(cmd.action, Action::Pick);
        assert_eq!(cmd.parameters.target_color, Some(Color::Red));
    }

    #[test]
    fn unknown_input_declines() {
        assert_eq!(classify("what do you see?").action, Action::Decline);
        assert_eq!(classify("").action, Action::Decline);
        assert_eq!(classify("   ").action, Action::Decline);
    }

    #[test]
    fn all_sentinel_and_color() {
        let cmd = classify("get all the blue pieces");
        assert_eq!(cmd.action, Action::Pick);
        assert_eq!(cmd.parameters.target_color, Some(Color::Blue));
        assert_eq!(cmd.parameters.quantity, -1);
        assert_eq!(cmd.parameters.spatial_context, None);
    }

    #[test]
    fn digit_beats_word_number() {
        let cmd = classify("get 3 two blocks");
        assert_eq!(cmd.parameters.quantity, 3);
    }

    #[test]
    fn word_number_when_no_digits() {
        let cmd = classify("get two pink blocks");
        assert_eq!(cmd.parameters.quantity, 2);
        assert_eq!(cmd.parameters.target_color, Some(Color::Pink));
    }

    #[test]
    fn quantity_defaults_to_one() {
        assert_eq!(classify("grab the red block").parameters.quantity, 1);
    }

    #[test]
    fn color_synonyms_normalize() {
        assert_eq!(
            classify("get the emerald block").parameters.target_color,
            Some(Color::Green)
        );
        assert_eq!(
            classify("fetch the crimson piece").parameters.target_color,
            Some(Color::Red)
        );
        assert_eq!(
            classify("take the brown one, please").parameters.target_color,
            Some(Color::Wood)
        );
    }

    #[test]
    fn first_color_wins() {
        let cmd = classify("grab the red block next to the blue one");
        assert_eq!(cmd.parameters.target_color, Some(Color::Red));
    }

    #[test]
    fn any_color_fallback() {
        assert_eq!(
            classify("pick any block").parameters.target_color,
            Some(Color::Any)
        );
    }

    #[test]
    fn spatial_synonyms() {
        assert_eq!(
            classify("grab the topmost block").parameters.spatial_context,
            Some(Spatial::Top)
        );
        assert_eq!(
            classify("get the closest red piece").parameters.spatial_context,
            Some(Spatial::Nearest)
        );
        assert_eq!(
            classify("bring the leftmost green one").parameters.spatial_context,
            Some(Spatial::Left)
        );
    }

    #[test]
    fn sort_defaults_to_color_criterion() {
        // Holds even without the word "color" in the text.
        let cmd = classify("organize everything");
        assert_eq!(cmd.action, Action::Sort);
        assert_eq!(cmd.parameters.sort_criteria, Some(SortCriterion::Color));
        assert!(cmd.parameters.target_color.is_none());
    }

    #[test]
    fn sort_random_criterion() {
        let cmd = classify("arrange the blocks randomly");
        assert_eq!(cmd.action, Action::Sort);
        assert_eq!(cmd.parameters.sort_criteria, Some(SortCriterion::Random));
    }

    #[test]
    fn decline_carries_no_parameters() {
        let cmd = classify("spin in a circle");
        assert!(cmd.parameters.target_color.is_none());
        assert!(cmd.parameters.spatial_context.is_none());
        assert!(cmd.parameters.sort_criteria.is_none());
    }
}
