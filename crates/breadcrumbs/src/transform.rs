use std::fmt;

/// Ready-made segment-to-text transforms for path decomposition.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TextTransform {
    #[default]
    Identity,
    /// `mens-casual_shoes` becomes `Mens Casual Shoes`.
    Humanize,
    Uppercase,
    Lowercase,
}

impl TextTransform {
    pub const ALL: &'static [TextTransform] = &[
        TextTransform::Identity,
        TextTransform::Humanize,
        TextTransform::Uppercase,
        TextTransform::Lowercase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextTransform::Identity => "identity",
            TextTransform::Humanize => "humanize",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
        }
    }

    pub fn apply(self, segment: &str) -> String {
        match self {
            TextTransform::Identity => segment.to_owned(),
            TextTransform::Humanize => humanize(segment),
            TextTransform::Uppercase => segment.to_uppercase(),
            TextTransform::Lowercase => segment.to_lowercase(),
        }
    }
}

impl fmt::Display for TextTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextTransform {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "identity" => Ok(TextTransform::Identity),
            "humanize" => Ok(TextTransform::Humanize),
            "uppercase" => Ok(TextTransform::Uppercase),
            "lowercase" => Ok(TextTransform::Lowercase),
            _ => Err(()),
        }
    }
}

fn humanize(segment: &str) -> String {
    let mut output = String::with_capacity(segment.len());
    let mut word_start = true;

    for ch in segment.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        if ch.is_whitespace() {
            word_start = true;
            output.push(ch);
        } else if word_start {
            word_start = false;
            output.extend(ch.to_uppercase());
        } else {
            output.push(ch);
        }
    }

    output
}
