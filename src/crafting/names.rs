//! Item key <-> display name conversion.
//!
//! Inventory keys look like `wood_scrap` or `coal_fine`; the recipe catalog
//! uses display names such as `Wood Scrap`. Conversion is purely mechanical.

/// Raw-key suffix marking the fine quality tier.
pub const FINE_SUFFIX: &str = "_fine";

/// Display qualifier placed in front of fine-tier names.
pub const FINE_PREFIX: &str = "Fine ";

/// Split a raw key into its base key and whether it carried the fine suffix.
pub fn split_fine_suffix(raw_key: &str) -> (&str, bool) {
    match raw_key.strip_suffix(FINE_SUFFIX) {
        Some(base) => (base, true),
        None => (raw_key, false),
    }
}

/// Title-case underscore-delimited words. Only the first character of each
/// word is touched; the rest keeps its case.
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a raw inventory key into its display name.
///
/// `wood_scrap` becomes `Wood Scrap`, `coal_fine` becomes `Fine Coal`.
pub fn normalize(raw_key: &str) -> String {
    let (base, fine) = split_fine_suffix(raw_key);
    if fine {
        format!("{}{}", FINE_PREFIX, title_case_key(base))
    } else {
        title_case_key(base)
    }
}

/// Approximate reverse of [`normalize`] used for catalog-name matching:
/// lowercase, every whitespace run collapsed to one underscore. The fine
/// suffix is not reconstructed.
pub fn denormalize(display_name: &str) -> String {
    let mut out = String::with_capacity(display_name.len());
    let mut in_space = false;
    for ch in display_name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_plain_keys() {
        assert_eq!(normalize("wood_scrap"), "Wood Scrap");
        assert_eq!(normalize("coal"), "Coal");
        assert_eq!(normalize("iron_ORE_chunk"), "Iron ORE Chunk");
    }

    #[test]
    fn normalizes_fine_keys() {
        assert_eq!(normalize("coal_fine"), "Fine Coal");
        assert_eq!(normalize("birch_log_fine"), "Fine Birch Log");
    }

    #[test]
    fn fine_word_elsewhere_is_not_a_suffix() {
        assert_eq!(split_fine_suffix("fine_sand"), ("fine_sand", false));
        assert_eq!(normalize("fine_sand"), "Fine Sand");
        assert_eq!(split_fine_suffix("finery"), ("finery", false));
    }

    #[test]
    fn normalization_is_mechanical() {
        assert_eq!(normalize("a__b"), "A  B");
        assert_eq!(normalize("king's_ring"), "King's Ring");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn denormalize_collapses_whitespace() {
        assert_eq!(denormalize("Wood Scrap"), "wood_scrap");
        assert_eq!(denormalize("Iron   Ore\tChunk"), "iron_ore_chunk");
        assert_eq!(denormalize("Fine Coal"), "fine_coal");
    }

    #[test]
    fn denormalize_inverts_plain_normalize() {
        for key in ["wood_scrap", "copper_bar", "oak"] {
            assert_eq!(denormalize(&normalize(key)), key);
        }
    }
}
