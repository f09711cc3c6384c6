//! Case-insensitive substring matching on name columns.
//!
//! Each searchable table stores a folded copy of its name next to the name
//! itself. Both sides are folded here in Rust, so matching does not depend
//! on the engine's `lower()`, which only folds ASCII on SQLite.

use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::EntityTrait;

const LIKE_ESCAPE: char = '\\';

/// Unicode lowercase form stored in `search_name` columns
pub(crate) fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Build `%term%` with LIKE wildcards in `term` escaped so they match literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in fold_name(term).chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `<entity>.<folded column> LIKE '%term%'`; an empty term matches every row.
pub(crate) fn folded_contains<E: EntityTrait>(column: E::Column, term: &str) -> SimpleExpr {
    Expr::col((E::default(), column)).like(LikeExpr::new(contains_pattern(term)).escape(LIKE_ESCAPE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_lowercased_and_wrapped() {
        assert_eq!(contains_pattern("VeN"), "%ven%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_folding_covers_non_ascii() {
        assert_eq!(fold_name("CAFÉ ÉTOILE"), "café étoile");
        assert_eq!(contains_pattern("Étoile"), "%étoile%");
        assert_eq!(fold_name("ÖSTERREICH"), fold_name("österreich"));
    }

    #[test]
    fn test_wildcards_are_escaped() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\"), "%c:\\\\%");
    }
}
