use serde::{Deserialize, Serialize};

/// One category confidence reported by a text classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
    pub score: f64,
}

impl Category {
    #[must_use]
    pub fn new(category_name: impl Into<String>, score: f64) -> Self {
        Self {
            category_name: category_name.into(),
            score,
        }
    }

    /// The recognised label for this category, if any.
    #[must_use]
    pub fn label(&self) -> Option<CategoryLabel> {
        CategoryLabel::parse(&self.category_name)
    }
}

/// Category names the adapter understands. Matching ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryLabel {
    Positive,
    Negative,
}

impl CategoryLabel {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("positive") {
            Some(CategoryLabel::Positive)
        } else if name.eq_ignore_ascii_case("negative") {
            Some(CategoryLabel::Negative)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryLabel::Positive => "positive",
            CategoryLabel::Negative => "negative",
        }
    }
}
