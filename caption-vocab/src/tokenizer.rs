/// A whitespace tokenizer.
#[derive(Debug)]
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes the sequence by splitting on whitespace, empty fragments are discarded.
    pub fn tokenize(&self, sequence: impl AsRef<str>) -> Vec<String> {
        sequence
            .as_ref()
            .split_whitespace()
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(
            Tokenizer.tokenize("a cat  sat\ton the\nmat"),
            ["a", "cat", "sat", "on", "the", "mat"],
        );
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(Tokenizer.tokenize("c b a"), ["c", "b", "a"]);
    }

    #[test]
    fn test_empty() {
        assert!(Tokenizer.tokenize("").is_empty());
        assert!(Tokenizer.tokenize("   ").is_empty());
    }
}
