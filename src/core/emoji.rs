//! Emoji extraction and frequency tables.
//!
//! Recognition works on extended grapheme clusters, so a skin-toned thumbs
//! up, a family ZWJ sequence or a flag is one token, not several code points.
//!
//! The recognizer is pluggable through [`EmojiClassifier`]; the default
//! [`UnicodeEmoji`] classifies each grapheme against a built-in table of
//! emoji code point ranges.
//!
//! # Example
//!
//! ```rust
//! use chatstats::core::emoji::{EmojiClassifier, UnicodeEmoji};
//!
//! let emojis = UnicodeEmoji.extract("ok 👍🏽 🇰🇿 👍🏽 ❤️ done");
//! assert_eq!(emojis, vec!["👍🏽", "🇰🇿", "👍🏽", "❤️"]);
//! ```

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::Message;
use crate::core::models::{EmojiCount, EmojiMatrix};

/// Turns a piece of text into the emoji tokens it contains.
///
/// Implementations must return tokens in order of appearance, keep
/// duplicates, and only return substrings of `text`.
pub trait EmojiClassifier {
    /// Returns the ordered emoji tokens of `text`.
    fn extract(&self, text: &str) -> Vec<String>;
}

impl<F> EmojiClassifier for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn extract(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Grapheme-based recognizer backed by Unicode emoji ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn extract(&self, text: &str) -> Vec<String> {
        text.graphemes(true)
            .filter(|g| is_emoji_grapheme(g))
            .map(str::to_string)
            .collect()
    }
}

const VARIATION_SELECTOR_16: char = '\u{FE0F}';
const COMBINING_KEYCAP: char = '\u{20E3}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Code points that render as emoji without a variation selector.
const EMOJI_PRESENTATION: &[(u32, u32)] = &[
    (0x231A, 0x231B),
    (0x23E9, 0x23EC),
    (0x23F0, 0x23F0),
    (0x23F3, 0x23F3),
    (0x25FD, 0x25FE),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267F, 0x267F),
    (0x2693, 0x2693),
    (0x26A1, 0x26A1),
    (0x26AA, 0x26AB),
    (0x26BD, 0x26BE),
    (0x26C4, 0x26C5),
    (0x26CE, 0x26CE),
    (0x26D4, 0x26D4),
    (0x26EA, 0x26EA),
    (0x26F2, 0x26F3),
    (0x26F5, 0x26F5),
    (0x26FA, 0x26FA),
    (0x26FD, 0x26FD),
    (0x2705, 0x2705),
    (0x270A, 0x270B),
    (0x2728, 0x2728),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x1F004, 0x1F004),
    (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F201, 0x1F201),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F236),
    (0x1F238, 0x1F23A),
    (0x1F250, 0x1F251),
    (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335),
    (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F7E0, 0x1F7F0),
    (0x1F90C, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
];

/// Code points that are emoji only when followed by U+FE0F, a skin tone
/// modifier or a zero width joiner.
const EMOJI_WITH_SELECTOR: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x2328, 0x2328),
    (0x23CF, 0x23CF),
    (0x23ED, 0x23EF),
    (0x23F1, 0x23F2),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FC),
    (0x2600, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F202, 0x1F202),
    (0x1F237, 0x1F237),
    (0x1F321, 0x1F32C),
    (0x1F336, 0x1F336),
    (0x1F37D, 0x1F37D),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let cp = u32::from(c);
    ranges
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Returns `true` if a single grapheme cluster is an emoji.
///
/// ```
/// use chatstats::core::emoji::is_emoji_grapheme;
///
/// assert!(is_emoji_grapheme("😂"));
/// assert!(is_emoji_grapheme("👨‍👩‍👧"));
/// assert!(is_emoji_grapheme("1️⃣"));
/// assert!(is_emoji_grapheme("☺️"));
/// assert!(!is_emoji_grapheme("☺"));
/// assert!(!is_emoji_grapheme("a"));
/// ```
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    let Some(first) = grapheme.chars().next() else {
        return false;
    };

    if grapheme.contains(COMBINING_KEYCAP) {
        return matches!(first, '0'..='9' | '#' | '*');
    }

    is_regional_indicator(first)
        || in_ranges(first, EMOJI_PRESENTATION)
        || (in_ranges(first, EMOJI_WITH_SELECTOR) && has_emoji_marker(grapheme))
}

fn has_emoji_marker(grapheme: &str) -> bool {
    grapheme
        .chars()
        .any(|c| c == VARIATION_SELECTOR_16 || c == ZERO_WIDTH_JOINER || is_skin_tone(c))
}

fn is_skin_tone(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Fills [`Message::emojis`] for every non-media message.
pub fn extract_emojis(messages: &mut [Message], classifier: &dyn EmojiClassifier) {
    for msg in messages.iter_mut().filter(|m| m.is_text()) {
        msg.emojis = classifier.extract(&msg.body);
    }
}

/// Builds the global emoji table.
///
/// Sorted by descending count; ties keep the order in which each emoji was
/// first seen. Media placeholders are skipped.
pub fn emoji_frequencies(messages: &[Message]) -> Vec<EmojiCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<EmojiCount> = Vec::new();

    for emoji in messages
        .iter()
        .filter(|m| m.is_text())
        .flat_map(|m| m.emojis.iter())
    {
        match index.get(emoji.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(emoji.as_str(), counts.len());
                counts.push(EmojiCount::new(emoji.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Builds the author × emoji matrix.
///
/// Rows are every author of a non-media message in order of first
/// appearance; columns follow the order of [`emoji_frequencies`]. Pairs
/// that never occur hold zero.
pub fn emoji_matrix(messages: &[Message]) -> EmojiMatrix {
    let emojis: Vec<String> = emoji_frequencies(messages)
        .into_iter()
        .map(|e| e.emoji)
        .collect();
    let column: HashMap<&str, usize> = emojis
        .iter()
        .enumerate()
        .map(|(i, e)| (e.as_str(), i))
        .collect();

    let mut authors: Vec<String> = Vec::new();
    let mut row: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<Vec<usize>> = Vec::new();

    for msg in messages.iter().filter(|m| m.is_text()) {
        let r = *row.entry(msg.author.as_str()).or_insert_with(|| {
            authors.push(msg.author.clone());
            counts.push(vec![0; emojis.len()]);
            counts.len() - 1
        });

        for emoji in &msg.emojis {
            if let Some(&c) = column.get(emoji.as_str()) {
                counts[r][c] += 1;
            }
        }
    }

    EmojiMatrix {
        authors,
        emojis,
        counts,
    }
}
