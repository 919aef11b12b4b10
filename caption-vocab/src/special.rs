/// The reserved vocabulary tokens.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpecialToken {
    /// Pads a token sequence to a fixed length.
    Pad,
    /// Marks the start of a caption.
    Start,
    /// Marks the end of a caption.
    End,
    /// Substitutes a token which is missing from the vocabulary.
    Unknown,
}

impl SpecialToken {
    /// All reserved tokens, in discriminant order.
    pub const ALL: [SpecialToken; 4] = [
        SpecialToken::Pad,
        SpecialToken::Start,
        SpecialToken::End,
        SpecialToken::Unknown,
    ];

    /// The string representation of the token.
    ///
    /// The representations are uppercase, hence they can't collide with the lowercased tokens
    /// of a normalized caption.
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialToken::Pad => "PAD",
            SpecialToken::Start => "SOS",
            SpecialToken::End => "EOS",
            SpecialToken::Unknown => "UNK",
        }
    }

    /// Whether the token is one of the reserved representations.
    pub fn is_special(token: impl AsRef<str>) -> bool {
        let token = token.as_ref();
        SpecialToken::ALL
            .iter()
            .any(|special| special.as_str() == token)
    }
}
