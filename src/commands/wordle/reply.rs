use url::Url;

pub const COLOR_CORRECT: u32 = 0x538D4E;
pub const COLOR_STANDARD: u32 = 0x8D7D4E;
pub const COLOR_ERROR: u32 = 0x8D4E4E;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Standard,
    Error,
}

impl Tone {
    pub const fn color(self) -> u32 {
        match self {
            Self::Success => COLOR_CORRECT,
            Self::Standard => COLOR_STANDARD,
            Self::Error => COLOR_ERROR,
        }
    }
}

/// What the bot answers with, independent of how it gets drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub tone: Tone,
    pub title: Option<String>,
    pub description: String,
    pub url: Option<Url>,
}

impl Reply {
    fn new(tone: Tone, description: impl Into<String>) -> Self {
        Self {
            tone,
            title: None,
            description: description.into(),
            url: None,
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new(Tone::Success, description)
    }

    pub fn standard(description: impl Into<String>) -> Self {
        Self::new(Tone::Standard, description)
    }

    pub fn error(error: impl ToString) -> Self {
        Self::new(Tone::Error, error.to_string())
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<Option<Url>>) -> Self {
        self.url = url.into();
        self
    }
}

/// Wikipedia article for `word` in the list's language, e.g. `https://de.wikipedia.org/wiki/Größe`.
pub fn wiki_url(language: &str, word: &str) -> Option<Url> {
    let mut chars = word.chars();
    let title: String = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default();

    Url::parse(&format!("https://{language}.wikipedia.org/wiki/"))
        .ok()?
        .join(&title)
        .ok()
}
