//! A mutable character buffer with forgiving index arithmetic.
//!
//! Every operation taking a position accepts an `isize`. Negative positions
//! count from the end (`-1` is the last character) and positions outside the
//! buffer are clamped to the nearest bound, so no index ever panics.

use std::fmt;
use std::ops::Range;
use std::vec;

/// Mutable text stored as a sequence of characters.
///
/// Editing methods change the text in place and return `&mut Self` so that
/// calls can be chained. Ranges are half-open; a range whose end lies before
/// its begin (after normalization) is empty.
///
/// Single-character operations (`*_at`) normalize their position first and
/// then act on the one character there. At the end of the text there is no
/// character, so they do nothing.
///
/// # Example
///
/// ```
/// use traverso::text::Text;
///
/// let mut text = Text::from("hello world");
/// text.map_range(0, 5, |c| c.to_ascii_uppercase())
///     .delete_range(-6, -5)
///     .insert(-5, ", ");
/// assert_eq!(text, "HELLO, world");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Text {
    chars: Vec<char>,
}

impl Text {
    /// Creates empty text.
    #[must_use]
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Returns the number of characters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the text has no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the characters as a slice.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns an iterator over the characters.
    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Maps `index` into `0..=len`.
    fn valid_index(&self, index: isize) -> usize {
        let len = self.len();
        if index < 0 {
            len.saturating_sub(index.unsigned_abs())
        } else {
            index.unsigned_abs().min(len)
        }
    }

    fn valid_range(&self, begin: isize, end: isize) -> Range<usize> {
        let begin = self.valid_index(begin);
        begin..self.valid_index(end).max(begin)
    }

    fn position(&self, index: isize) -> Range<usize> {
        let position = self.valid_index(index);
        position..(position + 1).min(self.len())
    }

    /// Returns the character at `index`, or `None` at the end of the text.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::text::Text;
    ///
    /// let text = Text::from("abc");
    /// assert_eq!(text.char_at(0), Some('a'));
    /// assert_eq!(text.char_at(-1), Some('c'));
    /// assert_eq!(text.char_at(-10), Some('a'));
    /// assert_eq!(text.char_at(3), None);
    /// assert_eq!(Text::new().char_at(0), None);
    /// ```
    #[must_use]
    pub fn char_at(&self, index: isize) -> Option<char> {
        self.chars.get(self.valid_index(index)).copied()
    }

    /// Returns a copy of the characters in `begin..end`.
    #[must_use]
    pub fn sub_sequence(&self, begin: isize, end: isize) -> Self {
        Self {
            chars: self.chars[self.valid_range(begin, end)].to_vec(),
        }
    }

    /// Appends one character.
    pub fn push(&mut self, character: char) -> &mut Self {
        self.chars.push(character);
        self
    }

    /// Appends the characters of `string`.
    pub fn push_str(&mut self, string: &str) -> &mut Self {
        self.chars.extend(string.chars());
        self
    }

    /// Appends the characters of `other`.
    pub fn append(&mut self, other: &Self) -> &mut Self {
        self.chars.extend_from_slice(&other.chars);
        self
    }

    /// Appends the characters of `other` in `begin..end`.
    ///
    /// The range is normalized against `other`, not against this text.
    pub fn append_range(&mut self, other: &Self, begin: isize, end: isize) -> &mut Self {
        self.chars
            .extend_from_slice(&other.chars[other.valid_range(begin, end)]);
        self
    }

    /// Appends every part in order.
    pub fn append_all<I>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[char]>,
    {
        for part in parts {
            self.chars.extend_from_slice(part.as_ref());
        }
        self
    }

    /// Inserts `string` so that it starts at `offset`.
    pub fn insert(&mut self, offset: isize, string: &str) -> &mut Self {
        let offset = self.valid_index(offset);
        self.chars.splice(offset..offset, string.chars());
        self
    }

    /// Removes all characters.
    pub fn clear(&mut self) -> &mut Self {
        self.chars.clear();
        self
    }

    /// Removes the character at `index`.
    pub fn delete_at(&mut self, index: isize) -> &mut Self {
        let position = self.position(index);
        self.chars.drain(position);
        self
    }

    /// Removes the characters in `begin..end`.
    pub fn delete_range(&mut self, begin: isize, end: isize) -> &mut Self {
        let range = self.valid_range(begin, end);
        self.chars.drain(range);
        self
    }

    /// Overwrites the character at `index`.
    pub fn set_char(&mut self, index: isize, character: char) -> &mut Self {
        let position = self.valid_index(index);
        if let Some(slot) = self.chars.get_mut(position) {
            *slot = character;
        }
        self
    }

    /// Replaces the whole text with `string`.
    pub fn replace_contents(&mut self, string: &str) -> &mut Self {
        self.chars.clear();
        self.push_str(string)
    }

    /// Replaces the character at `index` with `string`.
    pub fn replace_at(&mut self, index: isize, string: &str) -> &mut Self {
        let position = self.position(index);
        self.chars.splice(position, string.chars());
        self
    }

    /// Replaces the characters in `begin..end` with `string`.
    pub fn replace_range(&mut self, begin: isize, end: isize, string: &str) -> &mut Self {
        let range = self.valid_range(begin, end);
        self.chars.splice(range, string.chars());
        self
    }

    /// Keeps only the characters accepted by `predicate`.
    pub fn filter<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(char) -> bool,
    {
        self.filter_range(0, isize::MAX, predicate)
    }

    /// Removes the character at `index` unless `predicate` accepts it.
    pub fn filter_at<F>(&mut self, index: isize, predicate: F) -> &mut Self
    where
        F: FnMut(char) -> bool,
    {
        let position = self.position(index);
        self.filter_positions(position, predicate)
    }

    /// Keeps only the characters in `begin..end` accepted by `predicate`.
    ///
    /// Characters outside the range are kept regardless.
    pub fn filter_range<F>(&mut self, begin: isize, end: isize, predicate: F) -> &mut Self
    where
        F: FnMut(char) -> bool,
    {
        let range = self.valid_range(begin, end);
        self.filter_positions(range, predicate)
    }

    fn filter_positions<F>(&mut self, range: Range<usize>, mut predicate: F) -> &mut Self
    where
        F: FnMut(char) -> bool,
    {
        let Range { start: mut index, mut end } = range;
        while index < end {
            if predicate(self.chars[index]) {
                index += 1;
            } else {
                self.chars.remove(index);
                end -= 1;
            }
        }
        self
    }

    /// Replaces every character with `function` applied to it.
    pub fn map<F>(&mut self, function: F) -> &mut Self
    where
        F: FnMut(char) -> char,
    {
        self.map_range(0, isize::MAX, function)
    }

    /// Replaces the character at `index` with `function` applied to it.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::text::{Text, title_case};
    ///
    /// let mut word = Text::from("word");
    /// word.map_at(0, title_case).map_at(-1, |c| c.to_ascii_uppercase());
    /// assert_eq!(word, "WorD");
    /// ```
    pub fn map_at<F>(&mut self, index: isize, function: F) -> &mut Self
    where
        F: FnMut(char) -> char,
    {
        let position = self.position(index);
        self.map_positions(position, function)
    }

    /// Replaces each character in `begin..end` with `function` applied to it.
    pub fn map_range<F>(&mut self, begin: isize, end: isize, function: F) -> &mut Self
    where
        F: FnMut(char) -> char,
    {
        let range = self.valid_range(begin, end);
        self.map_positions(range, function)
    }

    fn map_positions<F>(&mut self, range: Range<usize>, mut function: F) -> &mut Self
    where
        F: FnMut(char) -> char,
    {
        for slot in &mut self.chars[range] {
            *slot = function(*slot);
        }
        self
    }

    /// Replaces every character with the characters `function` returns for it.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::text::Text;
    ///
    /// let mut text = Text::from("a-b");
    /// text.flat_map(|c| if c == '-' { vec![] } else { vec![c, c] });
    /// assert_eq!(text, "aabb");
    /// ```
    pub fn flat_map<F, S>(&mut self, function: F) -> &mut Self
    where
        F: FnMut(char) -> S,
        S: IntoIterator<Item = char>,
    {
        self.flat_map_range(0, isize::MAX, function)
    }

    /// Replaces the character at `index` with the characters `function` returns.
    pub fn flat_map_at<F, S>(&mut self, index: isize, function: F) -> &mut Self
    where
        F: FnMut(char) -> S,
        S: IntoIterator<Item = char>,
    {
        let position = self.position(index);
        self.flat_map_positions(position, function)
    }

    /// Replaces each character in `begin..end` with the characters `function`
    /// returns for it.
    ///
    /// Replacements are not scanned again: after each replacement the scan
    /// continues behind the inserted characters, and the end of the range
    /// moves by the change in length.
    pub fn flat_map_range<F, S>(&mut self, begin: isize, end: isize, function: F) -> &mut Self
    where
        F: FnMut(char) -> S,
        S: IntoIterator<Item = char>,
    {
        let range = self.valid_range(begin, end);
        self.flat_map_positions(range, function)
    }

    fn flat_map_positions<F, S>(&mut self, range: Range<usize>, mut function: F) -> &mut Self
    where
        F: FnMut(char) -> S,
        S: IntoIterator<Item = char>,
    {
        let Range { start: mut index, mut end } = range;
        while index < end {
            let replacement: Vec<char> = function(self.chars[index]).into_iter().collect();
            let width = replacement.len();
            self.chars.splice(index..=index, replacement);
            index += width;
            end = end + width - 1;
        }
        self
    }

    /// Splits the text into maximal runs of characters on which `predicate`
    /// agrees.
    ///
    /// Consecutive groups alternate between accepted and rejected characters.
    /// Every group is non-empty, and empty text has no groups.
    ///
    /// # Example
    ///
    /// ```
    /// use traverso::text::Text;
    ///
    /// let groups = Text::from("ab  c").group(char::is_whitespace);
    /// assert_eq!(groups, vec!["ab", "  ", "c"]);
    /// ```
    pub fn group<F>(&self, mut predicate: F) -> Vec<Self>
    where
        F: FnMut(char) -> bool,
    {
        let mut groups = Vec::new();
        let mut current = Self::new();
        let mut previous = None;
        for &character in &self.chars {
            let accepted = predicate(character);
            if previous.is_some_and(|was_accepted| was_accepted != accepted) {
                groups.push(std::mem::take(&mut current));
            }
            current.chars.push(character);
            previous = Some(accepted);
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }
}

/// Returns the title-case form of `character`.
///
/// The Latin digraphs `Ǆ`, `ǅ`, `ǆ` and their siblings have a dedicated
/// title-case letter (capital first half, small second half). Every other
/// character title-cases to its uppercase form when that form is a single
/// character, and stays unchanged otherwise.
///
/// # Example
///
/// ```
/// use traverso::text::title_case;
///
/// assert_eq!(title_case('h'), 'H');
/// assert_eq!(title_case('7'), '7');
/// assert_eq!(title_case('ß'), 'ß');
/// assert_eq!(title_case('ǆ'), 'ǅ');
/// ```
#[must_use]
pub fn title_case(character: char) -> char {
    match character {
        '\u{1C4}'..='\u{1C6}' => '\u{1C5}',
        '\u{1C7}'..='\u{1C9}' => '\u{1C8}',
        '\u{1CA}'..='\u{1CC}' => '\u{1CB}',
        '\u{1F1}'..='\u{1F3}' => '\u{1F2}',
        _ => single_uppercase(character),
    }
}

fn single_uppercase(character: char) -> char {
    let mut upper = character.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => character,
    }
}

impl fmt::Display for Text {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars
            .iter()
            .try_for_each(|character| fmt::Write::write_char(formatter, *character))
    }
}

impl From<&str> for Text {
    fn from(string: &str) -> Self {
        string.chars().collect()
    }
}

impl From<String> for Text {
    fn from(string: String) -> Self {
        Self::from(string.as_str())
    }
}

impl From<Text> for String {
    fn from(text: Text) -> Self {
        text.chars.into_iter().collect()
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for Text {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}

impl IntoIterator for Text {
    type Item = char;
    type IntoIter = vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.into_iter()
    }
}

impl AsRef<[char]> for Text {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Text> for &str {
    fn eq(&self, other: &Text) -> bool {
        other == *self
    }
}

impl PartialEq<String> for Text {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(2, 2)]
    #[case(3, 3)]
    #[case(99, 3)]
    #[case(-1, 2)]
    #[case(-3, 0)]
    #[case(-99, 0)]
    #[case(isize::MIN, 0)]
    #[case(isize::MAX, 3)]
    fn test_valid_index_clamps(#[case] index: isize, #[case] expected: usize) {
        assert_eq!(Text::from("abc").valid_index(index), expected);
    }

    #[rstest]
    #[case(0, 2, "ab")]
    #[case(-2, 99, "cd")]
    #[case(3, 1, "")]
    #[case(-99, -3, "a")]
    fn test_sub_sequence(#[case] begin: isize, #[case] end: isize, #[case] expected: &str) {
        assert_eq!(Text::from("abcd").sub_sequence(begin, end), expected);
    }

    #[test]
    fn test_single_char_operations_ignore_end_position() {
        let mut text = Text::from("abc");
        text.delete_at(3)
            .set_char(3, 'x')
            .map_at(3, |_| 'x')
            .filter_at(3, |_| false)
            .replace_at(3, "xyz")
            .flat_map_at(3, |_| ['x']);
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_single_char_operations_from_end() {
        let mut text = Text::from("abc");
        text.set_char(-1, 'z').delete_at(-3);
        assert_eq!(text, "bz");
        text.replace_at(0, "xy");
        assert_eq!(text, "xyz");
        text.filter_at(-2, |c| c != 'y');
        assert_eq!(text, "xz");
    }

    #[test]
    fn test_delete_and_replace_range() {
        let mut text = Text::from("hello world");
        text.delete_range(5, 99);
        assert_eq!(text, "hello");
        text.replace_range(1, 4, "ipp");
        assert_eq!(text, "hippo");
        text.replace_range(4, 2, "!");
        assert_eq!(text, "hipp!o");
        text.replace_contents("new");
        assert_eq!(text, "new");
        text.clear();
        assert!(text.is_empty());
    }

    #[test]
    fn test_insert_clamps_offset() {
        let mut text = Text::from("bc");
        text.insert(-99, "a").insert(99, "d").insert(-1, "-");
        assert_eq!(text, "abc-d");
    }

    #[test]
    fn test_filter_range_keeps_outside_characters() {
        let mut text = Text::from("a b c d");
        text.filter_range(2, 5, |c| c != ' ');
        assert_eq!(text, "a bc d");
        text.filter(char::is_alphabetic);
        assert_eq!(text, "abcd");
    }

    #[test]
    fn test_map_range() {
        let mut text = Text::from("abcd");
        text.map_range(1, -1, |c| c.to_ascii_uppercase());
        assert_eq!(text, "aBCd");
    }

    #[test]
    fn test_flat_map_range_does_not_rescan_replacements() {
        let mut text = Text::from("abc");
        text.flat_map_range(0, 2, |c| [c, c, c]);
        assert_eq!(text, "aaabbbc");
    }

    #[test]
    fn test_flat_map_with_empty_replacement_shrinks_range() {
        let mut text = Text::from("x.y.z");
        text.flat_map(|c| if c == '.' { None } else { Some(c) });
        assert_eq!(text, "xyz");
    }

    #[test]
    fn test_group_alternates() {
        let groups = Text::from("  ab c ").group(char::is_whitespace);
        assert_eq!(groups, vec!["  ", "ab", " ", "c", " "]);
    }

    #[test]
    fn test_group_of_empty_text_is_empty() {
        assert!(Text::new().group(char::is_whitespace).is_empty());
    }

    #[test]
    fn test_append_variants() {
        let mut text = Text::new();
        text.push('a')
            .push_str("bc")
            .append(&Text::from("de"))
            .append_range(&Text::from("xyz"), -2, 99)
            .append_all([Text::from("1"), Text::from("2")]);
        assert_eq!(text, "abcdeyz12");
    }

    #[rstest]
    #[case('h', 'H')]
    #[case('H', 'H')]
    #[case('7', '7')]
    #[case('ß', 'ß')]
    #[case('\u{1C6}', '\u{1C5}')]
    #[case('\u{1C4}', '\u{1C5}')]
    #[case('\u{1C5}', '\u{1C5}')]
    #[case('\u{1C9}', '\u{1C8}')]
    #[case('\u{1CA}', '\u{1CB}')]
    #[case('\u{1F3}', '\u{1F2}')]
    #[case('\u{1F1}', '\u{1F2}')]
    fn test_title_case(#[case] character: char, #[case] expected: char) {
        assert_eq!(title_case(character), expected);
    }

    #[test]
    fn test_conversions() {
        let text: Text = "héllo".chars().collect();
        assert_eq!(text.len(), 5);
        assert_eq!(text.to_string(), "héllo");
        assert_eq!(String::from(text.clone()), "héllo");
        assert_eq!("héllo", text);
        assert_eq!(text, "héllo".to_string());
    }
}
