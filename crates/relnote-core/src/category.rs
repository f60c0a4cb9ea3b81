// crates/relnote-core/src/category.rs - Release artifact categories
//
// The category decides which template folder is copied and which literal
// token inside the template is replaced by the identifier. The set is closed:
// anything outside it is an unrecognized category.

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Enumerated artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hotfix,
    Config,
    Module,
    MsiModule,
    U,
    Umc,
}

impl Category {
    /// Every recognized category, in the order usage text lists them
    pub const ALL: [Category; 6] = [
        Category::Hotfix,
        Category::Config,
        Category::Module,
        Category::MsiModule,
        Category::U,
        Category::Umc,
    ];

    /// Upper-case name, also the template folder name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hotfix => "HOTFIX",
            Category::Config => "CONFIG",
            Category::Module => "MODULE",
            Category::MsiModule => "MSIMODULE",
            Category::U => "U",
            Category::Umc => "UMC",
        }
    }

    /// Literal text in the template that stands for the identifier
    ///
    /// The token contains `-` and `.`, so it must only ever be matched as
    /// plain text.
    pub fn placeholder_token(&self) -> &'static str {
        match self {
            Category::Hotfix => "HOTFIX-x.x.x.x",
            Category::Config => "CONFIG-x.x.x.x",
            Category::Module => "MODULE-x.x.x.x",
            Category::MsiModule => "MSIMODULE-x.x.x.x",
            Category::U => "U-x.x.x.x",
            Category::Umc => "UMC-x.x.x.x",
        }
    }

    pub fn template_dir_name(&self) -> &'static str {
        self.as_str()
    }

    /// Whether identifiers of this category start with the category name,
    /// so the category argument can be left out
    pub fn is_derivable(&self) -> bool {
        matches!(self, Category::Hotfix | Category::Config | Category::Umc)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Category::as_str).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == upper)
            .ok_or(ScaffoldError::UnrecognizedCategory { category: upper })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("hotfix".parse::<Category>().unwrap(), Category::Hotfix);
        assert_eq!("MsiModule".parse::<Category>().unwrap(), Category::MsiModule);
        assert_eq!("u".parse::<Category>().unwrap(), Category::U);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "PATCH".parse::<Category>().unwrap_err();
        match err {
            ScaffoldError::UnrecognizedCategory { category } => assert_eq!(category, "PATCH"),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_unrecognized_message_lists_all_categories() {
        let message = "NOPE".parse::<Category>().unwrap_err().to_string();
        for name in Category::names() {
            assert!(message.contains(name), "missing {name} in: {message}");
        }
        assert!(message.contains("explicitly"));
    }

    #[test]
    fn test_placeholder_tokens_are_prefixed_by_category() {
        for category in Category::ALL {
            let token = category.placeholder_token();
            assert!(token.starts_with(category.as_str()));
            assert!(token.ends_with("-x.x.x.x"));
        }
    }

    #[test]
    fn test_derivable_categories() {
        let derivable: Vec<_> = Category::ALL
            .into_iter()
            .filter(Category::is_derivable)
            .collect();
        assert_eq!(
            derivable,
            vec![Category::Hotfix, Category::Config, Category::Umc]
        );
    }
}
