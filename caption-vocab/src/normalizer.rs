use unicode_categories::UnicodeCategories;

/// A caption normalizer.
#[derive(Debug)]
pub struct Normalizer;

impl Normalizer {
    fn lowercase_and_trim(&self, sequence: &str) -> String {
        sequence.trim().to_lowercase()
    }

    fn isolate_symbols(&self, sequence: String) -> String {
        let mut isolated = String::with_capacity(sequence.len());
        for c in sequence.chars() {
            if c.is_alphanumeric() || c.is_whitespace() {
                isolated.push(c);
            } else {
                isolated.push(' ');
                isolated.push(c);
                isolated.push(' ');
            }
        }
        isolated
    }

    fn remove_punctuation(&self, sequence: String) -> String {
        sequence
            .chars()
            .filter(|c| !(c.is_ascii_punctuation() || c.is_punctuation()))
            .collect()
    }

    /// Normalizes the caption.
    ///
    /// Symbols are isolated before the punctuation is removed so that tokens adjacent to a
    /// removed character never merge.
    pub fn normalize(&self, sequence: impl AsRef<str>) -> String {
        let normalized = self.lowercase_and_trim(sequence.as_ref());
        let normalized = self.isolate_symbols(normalized);
        self.remove_punctuation(normalized)
    }
}
