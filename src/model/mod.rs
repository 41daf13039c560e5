//! Inventory data model: product categories and product records.

mod product;

pub use product::{Availability, ProductRecord};

use std::fmt;
use std::str::FromStr;

/// Product category served by the backend. Each category has exactly one
/// list endpoint and one tab in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Gloves,
    Beanies,
    Facemasks,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Gloves, Category::Beanies, Category::Facemasks];

    /// Relative path of the category list endpoint.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Category::Gloves => "/products/gloves/",
            Category::Beanies => "/products/beanies/",
            Category::Facemasks => "/products/facemasks/",
        }
    }

    /// Lowercase identifier, used for fixture file names and CLI values.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Gloves => "gloves",
            Category::Beanies => "beanies",
            Category::Facemasks => "facemasks",
        }
    }

    /// Display name of the tab.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gloves => "Gloves",
            Category::Beanies => "Beanies",
            Category::Facemasks => "Facemasks",
        }
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Category::Gloves => 0,
            Category::Beanies => 1,
            Category::Facemasks => 2,
        }
    }

    /// Returns the next category, wrapping around.
    pub fn next(&self) -> Category {
        match self {
            Category::Gloves => Category::Beanies,
            Category::Beanies => Category::Facemasks,
            Category::Facemasks => Category::Gloves,
        }
    }

    /// Returns the previous category, wrapping around.
    pub fn prev(&self) -> Category {
        match self {
            Category::Gloves => Category::Facemasks,
            Category::Beanies => Category::Gloves,
            Category::Facemasks => Category::Beanies,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: gloves, beanies, facemasks)",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths_match_category_names() {
        for category in Category::ALL {
            assert_eq!(
                category.endpoint_path(),
                format!("/products/{}/", category.slug())
            );
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn next_and_prev_cycle() {
        let mut c = Category::Gloves;
        for _ in 0..3 {
            c = c.next();
        }
        assert_eq!(c, Category::Gloves);
        assert_eq!(Category::Gloves.prev(), Category::Facemasks);
        assert_eq!(Category::Facemasks.next(), Category::Gloves);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Beanies".parse::<Category>(), Ok(Category::Beanies));
        assert_eq!(" FACEMASKS ".parse::<Category>(), Ok(Category::Facemasks));
        assert!("jackets".parse::<Category>().is_err());
    }
}
