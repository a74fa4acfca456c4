//! Keyword sets and synonym tables
//!
//! Action detection is priority-ordered: DECLINE keywords are checked
//! before SORT and PICK so that out-of-scope requests ("stack the red
//! blocks") are rejected even when they also mention colors or blocks.

use crate::command::{Color, Spatial};

/// Requests the arm must refuse outright.
pub const DECLINE_KEYWORDS: &[&str] = &["dance", "wave", "stack", "build", "throw", "jump", "spin"];

pub const SORT_KEYWORDS: &[&str] = &[
    "sort", "organize", "organise", "arrange", "group", "tidy", "order", "clean", "cleanup",
];

pub const PICK_KEYWORDS: &[&str] = &[
    "grab", "get", "bring", "lift", "pick", "take", "fetch", "retrieve", "collect",
];

/// Generic object nouns that imply PICK when no action verb is present.
pub const OBJECT_NOUNS: &[&str] = &["block", "piece", "jenga"];

/// Color synonyms normalized to the canonical palette.
pub const COLOR_MAP: &[(&str, Color)] = &[
    ("red", Color::Red),
    ("crimson", Color::Red),
    ("scarlet", Color::Red),
    ("ruby", Color::Red),
    ("maroon", Color::Red),
    ("blue", Color::Blue),
    ("azure", Color::Blue),
    ("navy", Color::Blue),
    ("cyan", Color::Blue),
    ("teal", Color::Blue),
    ("green", Color::Green),
    ("lime", Color::Green),
    ("emerald", Color::Green),
    ("olive", Color::Green),
    ("mint", Color::Green),
    ("yellow", Color::Yellow),
    ("gold", Color::Yellow),
    ("amber", Color::Yellow),
    ("lemon", Color::Yellow),
    ("pink", Color::Pink),
    ("magenta", Color::Pink),
    ("rose", Color::Pink),
    ("fuchsia", Color::Pink),
    ("wood", Color::Wood),
    ("brown", Color::Wood),
    ("tan", Color::Wood),
    ("beige", Color::Wood),
    ("natural", Color::Wood),
];

/// Spatial qualifiers normalized to the canonical set.
pub const SPATIAL_MAP: &[(&str, Spatial)] = &[
    ("top", Spatial::Top),
    ("topmost", Spatial::Top),
    ("upper", Spatial::Top),
    ("highest", Spatial::Top),
    ("bottom", Spatial::Bottom),
    ("lowest", Spatial::Bottom),
    ("base", Spatial::Bottom),
    ("left", Spatial::Left),
    ("leftmost", Spatial::Left),
    ("right", Spatial::Right),
    ("rightmost", Spatial::Right),
    ("center", Spatial::Center),
    ("middle", Spatial::Center),
    ("central", Spatial::Center),
    ("nearest", Spatial::Nearest),
    ("closest", Spatial::Nearest),
    ("close", Spatial::Nearest),
    ("first", Spatial::First),
    ("last", Spatial::Last),
];

pub const WORD_NUMBERS: &[(&str, i32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

pub const ALL_WORDS: &[&str] = &["all", "every", "everything"];
