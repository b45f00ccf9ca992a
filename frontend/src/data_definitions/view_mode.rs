//! Layout of the catalog results.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    /// Wide card with the description, used by the list layout and the landing page.
    Featured,
}

impl ViewMode {
    pub fn card_variant(&self) -> CardVariant {
        match self {
            ViewMode::Grid => CardVariant::Default,
            ViewMode::List => CardVariant::Featured,
        }
    }

    pub fn container_style(&self) -> &'static str {
        match self {
            ViewMode::Grid => "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px;",
            ViewMode::List => "display: flex; flex-direction: column; gap: 24px;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_default() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::default().card_variant(), CardVariant::Default);
        assert_eq!(ViewMode::List.card_variant(), CardVariant::Featured);
    }
}
