use std::str::FromStr;

/// Items that can be narrowed down by a category tag.
pub trait Categorized {
    type Category: Copy + PartialEq;

    fn category(&self) -> Self::Category;
}

/// Selected value of a category filter bar.
///
/// `Unknown` keeps whatever unrecognised value came in (for example from a
/// hand-edited `?filter=` query) so the page can show it matched nothing
/// instead of silently falling back to `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
    Unknown(String),
}

impl<C> CategoryFilter<C>
where
    C: Copy + PartialEq + FromStr,
{
    pub const ALL_KEY: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL_KEY) {
            return Self::All;
        }

        match value.parse::<C>() {
            Ok(category) => Self::Only(category),
            Err(_) => Self::Unknown(value.to_string()),
        }
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
            Self::Unknown(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Order-preserving subset of `items` accepted by this filter.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Categorized<Category = C>,
    {
        items
            .iter()
            .filter(|item| self.matches(item.category()))
            .collect()
    }
}

impl<C> CategoryFilter<C>
where
    C: Copy + PartialEq + std::fmt::Display,
{
    /// Query-string form of the filter.
    pub fn key(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Only(category) => category.to_string(),
            Self::Unknown(raw) => raw.clone(),
        }
    }
}
