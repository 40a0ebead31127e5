//! Identifier normalization.
//!
//! Database identifiers arrive with locale-specific letters, mixed casing, and
//! `snake_case`/`kebab-case`/spaced fragments. Everything emitted downstream goes
//! through [`pascal_case`] first so that type and property names are plain ASCII
//! PascalCase identifiers.

/// Locale-specific letters replaced with their unaccented ASCII equivalents,
/// preserving case.
const ACCENT_TABLE: &[(char, char)] = &[
    ('ç', 'c'),
    ('Ç', 'C'),
    ('ğ', 'g'),
    ('Ğ', 'G'),
    ('ı', 'i'),
    ('İ', 'I'),
    ('ö', 'o'),
    ('Ö', 'O'),
    ('ş', 's'),
    ('Ş', 'S'),
    ('ü', 'u'),
    ('Ü', 'U'),
];

/// Delimiters that separate word fragments in a raw identifier.
const DELIMITERS: &[char] = &['_', ' ', '-', '.'];

/// How the remainder of each fragment is treated after its first character is
/// uppercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Keep the fragment remainder exactly as written (`customerID` -> `CustomerID`).
    #[default]
    Preserve,
    /// Lowercase the fragment remainder (`customerID` -> `Customerid`).
    Lower,
}

fn strip_accent(c: char) -> char {
    ACCENT_TABLE
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

/// Normalize a raw database identifier into a PascalCase identifier.
///
/// Accented letters are replaced first, then the input is split on underscores,
/// spaces, hyphens, and periods; each non-empty fragment gets its first character
/// uppercased and the fragments are concatenated without a separator.
///
/// Empty or whitespace-only input yields an empty string rather than an error.
pub fn pascal_case(raw: &str, mode: CaseMode) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let unaccented: String = raw.chars().map(strip_accent).collect();

    let mut out = String::with_capacity(unaccented.len());
    for fragment in unaccented.split(DELIMITERS).filter(|f| !f.is_empty()) {
        let mut chars = fragment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            match mode {
                CaseMode::Preserve => out.push_str(chars.as_str()),
                CaseMode::Lower => out.extend(chars.flat_map(|c| c.to_lowercase())),
            }
        }
    }
    out
}

/// Extract a lowercase abbreviation from a PascalCase identifier.
///
/// Every uppercase letter is kept and lowercased, so `OrderItems` becomes `oi`.
/// Used to synthesize short lambda parameter names in relationship declarations.
/// Two different identifiers may yield the same abbreviation; no collision
/// detection is performed.
pub fn abbreviation(pascal: &str) -> String {
    pascal
        .chars()
        .map(strip_accent)
        .filter(|c| c.is_uppercase())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case_snake() {
        assert_eq!(pascal_case("order_items", CaseMode::Preserve), "OrderItems");
    }

    #[test]
    fn test_pascal_case_mixed_delimiters() {
        assert_eq!(
            pascal_case("customer addresses.home-v2", CaseMode::Preserve),
            "CustomerAddressesHomeV2"
        );
    }

    #[test]
    fn test_pascal_case_discards_empty_fragments() {
        assert_eq!(pascal_case("__order__items__", CaseMode::Preserve), "OrderItems");
    }

    #[test]
    fn test_pascal_case_accents() {
        assert_eq!(pascal_case("ürün_kategorisi", CaseMode::Preserve), "UrunKategorisi");
        assert_eq!(pascal_case("Şehir", CaseMode::Preserve), "Sehir");
        assert_eq!(pascal_case("çılgın_İndirim", CaseMode::Preserve), "CilginIndirim");
    }

    #[test]
    fn test_pascal_case_preserve_keeps_inner_case() {
        assert_eq!(pascal_case("customerID", CaseMode::Preserve), "CustomerID");
    }

    #[test]
    fn test_pascal_case_lower_mode() {
        assert_eq!(pascal_case("customerID", CaseMode::Lower), "Customerid");
        assert_eq!(pascal_case("ORDER_ITEMS", CaseMode::Lower), "OrderItems");
    }

    #[test]
    fn test_pascal_case_empty_input() {
        assert_eq!(pascal_case("", CaseMode::Preserve), "");
        assert_eq!(pascal_case("   ", CaseMode::Preserve), "");
        assert_eq!(pascal_case("\t\n", CaseMode::Preserve), "");
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(abbreviation("OrderItems"), "oi");
        assert_eq!(abbreviation("Customer"), "c");
        assert_eq!(abbreviation("CustomerID"), "cid");
    }

    #[test]
    fn test_abbreviation_empty() {
        assert_eq!(abbreviation(""), "");
        assert_eq!(abbreviation("lowercase"), "");
    }

    #[test]
    fn test_abbreviation_collisions_are_allowed() {
        // Documented limitation: different identifiers can share an abbreviation.
        assert_eq!(abbreviation("CustomerAddress"), abbreviation("CategoryAttribute"));
    }
}
