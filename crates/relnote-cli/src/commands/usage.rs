// crates/relnote-cli/src/commands/usage.rs - Usage text and category listing

use console::style;
use relnote_core::Category;

/// Usage text shown when no identifier is given
///
/// Lists every recognized category and which of them can be derived from
/// the identifier prefix.
pub fn usage_text() -> String {
    let derivable: Vec<&str> = Category::ALL
        .iter()
        .filter(|category| category.is_derivable())
        .map(Category::as_str)
        .collect();

    let mut text = String::new();
    text.push_str("Usage: relnote [--root DIR] [--no-pause] [--debug] <IDENTIFIER> [CATEGORY]\n\n");
    text.push_str("Creates <IDENTIFIER>/<IDENTIFIER>.md from _Templates/<CATEGORY>/.\n\n");
    text.push_str("Categories:\n");
    for category in Category::ALL {
        text.push_str(&format!("  {}\n", category));
    }
    text.push('\n');
    text.push_str(&format!(
        "{} identifiers carry their category as prefix, so CATEGORY can be omitted:\n",
        derivable.join("/")
    ));
    text.push_str("  relnote HOTFIX-12.11.0.9\n");
    text.push_str("Other categories must be given explicitly:\n");
    text.push_str("  relnote BILLING-3.0.1.0 MODULE\n");
    text
}

pub fn print_usage() {
    print!("{}", usage_text());
}

/// Print each category with the placeholder token its template must use
pub fn list_categories() {
    for category in Category::ALL {
        println!(
            "{:<10} {}",
            style(category.as_str()).bold(),
            category.placeholder_token()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_category() {
        let text = usage_text();
        for name in Category::names() {
            assert!(text.contains(&format!("  {}\n", name)), "missing {name}");
        }
    }

    #[test]
    fn test_usage_names_derivable_categories() {
        assert!(usage_text().contains("HOTFIX/CONFIG/UMC identifiers"));
    }
}
