use super::framework::Page;
use super::pages::{BrowsePage, ComparisonPage, ComprehensivePage, QuickstartPage};

/// Entry picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Quickstart,
    Comprehensive,
    Comparison,
    Browse,
}

impl MenuChoice {
    /// Parse a main-menu answer; only the literal keys "1" to "4" are accepted
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Quickstart),
            "2" => Some(Self::Comprehensive),
            "3" => Some(Self::Comparison),
            "4" => Some(Self::Browse),
            _ => None,
        }
    }

    /// Handler page for this choice
    pub fn page(self) -> Box<dyn Page> {
        match self {
            Self::Quickstart => Box::new(QuickstartPage::new()),
            Self::Comprehensive => Box::new(ComprehensivePage::new()),
            Self::Comparison => Box::new(ComparisonPage::new()),
            Self::Browse => Box::new(BrowsePage::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_keys() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Quickstart));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Comprehensive));
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::Comparison));
        assert_eq!(MenuChoice::parse("4\n"), Some(MenuChoice::Browse));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for input in ["", "0", "5", "01", "1.0", "one", "q", "12", "+1"] {
            assert_eq!(MenuChoice::parse(input), None, "accepted {input:?}");
        }
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(MenuChoice::Quickstart.page().title(), "Quickstart");
        assert_eq!(MenuChoice::Comprehensive.page().title(), "Comprehensive");
        assert_eq!(MenuChoice::Comparison.page().title(), "Comparison");
        assert_eq!(MenuChoice::Browse.page().title(), "Browse");
    }
}
