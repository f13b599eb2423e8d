//! Traversals over delimited groups of characters.
//!
//! All of them share one shape: split the text with [`Text::group`], visit the
//! groups made of non-delimiting characters, then join every group back into
//! the text once the visit is over. Edits to a group therefore land in the
//! text, and delimiters are preserved as they were.

use std::rc::Rc;

use crate::optics::Traversal;

use super::Text;

/// Returns a traversal over the groups between delimiting characters.
///
/// `is_delimiting` characterizes the delimiters. Visited groups are never
/// empty and never contain a delimiter.
///
/// # Example
///
/// ```
/// use traverso::text::{Text, groups};
///
/// let digits = groups(|c| !c.is_ascii_digit());
/// let mut text = Text::from("a1b22c333");
/// digits.traverse(&mut text, |number| {
///     number.replace_contents(&number.len().to_string());
/// });
/// assert_eq!(text, "a1b2c3");
/// ```
#[must_use]
pub fn groups<F>(is_delimiting: F) -> Traversal<Text, Text>
where
    F: Fn(char) -> bool + 'static,
{
    let is_delimiting = Rc::new(is_delimiting);
    let split_on = Rc::clone(&is_delimiting);
    Traversal::identity()
        .map_with(
            move |text: &Text| text.group(|character| split_on(character)),
            |text: &mut Text, groups: Vec<Text>| {
                tracing::trace!(groups = groups.len(), "joining text groups");
                text.clear().append_all(&groups);
            },
        )
        .flat_map(|groups: &mut Vec<Text>| groups)
        .filter(move |group: &Text| {
            group
                .char_at(0)
                .is_some_and(|character| !is_delimiting(character))
        })
}

/// Returns a traversal over the groups between any of the characters in
/// `delimiters`.
///
/// # Example
///
/// ```
/// use traverso::text::{Text, groups_of};
///
/// let mut row = Text::from("47;Jane Doe");
/// let cells: Vec<Text> = groups_of(",;").parts_of(&mut row).collect();
/// assert_eq!(cells, vec!["47", "Jane Doe"]);
/// ```
#[must_use]
pub fn groups_of(delimiters: &str) -> Traversal<Text, Text> {
    let delimiters: Vec<char> = delimiters.chars().collect();
    groups(move |character| delimiters.contains(&character))
}

/// Returns a traversal over the words of a text, separated by whitespace.
#[must_use]
pub fn words() -> Traversal<Text, Text> {
    groups(char::is_whitespace)
}

/// Returns a traversal over the lines of a text.
///
/// Lines are separated by runs of line terminators, so blank lines are
/// skipped and `"\r\n"` counts as one separator.
#[must_use]
pub fn lines() -> Traversal<Text, Text> {
    groups(is_line_terminator)
}

const fn is_line_terminator(character: char) -> bool {
    matches!(character, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", vec!["hello"])]
    #[case(" \t  hello \r\n ", vec!["hello"])]
    #[case("hello world", vec!["hello", "world"])]
    #[case("", vec![])]
    #[case("   ", vec![])]
    fn test_words(#[case] input: &str, #[case] expected: Vec<&str>) {
        let mut text = Text::from(input);
        let found: Vec<Text> = words().parts_of(&mut text).collect();
        assert_eq!(found, expected);
    }

    #[rstest]
    #[case('\n', true)]
    #[case('\r', true)]
    #[case('\u{85}', true)]
    #[case('\u{2028}', true)]
    #[case('\u{2029}', true)]
    #[case('\t', false)]
    #[case(' ', false)]
    fn test_line_terminators(#[case] character: char, #[case] expected: bool) {
        assert_eq!(is_line_terminator(character), expected);
    }

    #[test]
    fn test_groups_preserve_delimiters_on_write() {
        let mut text = Text::from("a, b,,c");
        groups_of(", ").traverse(&mut text, |group| {
            group.push('!');
        });
        assert_eq!(text, "a!, b!,,c!");
    }

    #[test]
    fn test_groups_reading_leaves_text_unchanged() {
        let mut text = Text::from("one\ntwo\r\n\nthree");
        assert_eq!(lines().length(&mut text), 3);
        assert_eq!(text, "one\ntwo\r\n\nthree");
    }

    #[test]
    fn test_group_can_be_emptied() {
        let mut text = Text::from("keep drop keep");
        words()
            .filter(|word| *word == "drop")
            .traverse(&mut text, |word| {
                word.clear();
            });
        assert_eq!(text, "keep  keep");
    }
}
