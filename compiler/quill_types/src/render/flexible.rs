//! Compact display form of a flexible type from its rendered bounds.
//!
//! `Int..Int?` reads as `Int!`, `MutableList<T>..List<T>?` as
//! `(Mutable)List<T>!`, `Array<T>..Array<out T>` as `Array<(out) T>`; any
//! other pair falls back to `(lower..upper)`.

const MUTABLE: &str = "Mutable";

/// Fold two rendered bounds into one display string.
///
/// `short_names` drops the `kotlin.` and `kotlin.collections.` prefixes the
/// bounds were rendered without.
pub(crate) fn compact_flexible(lower: &str, upper: &str, short_names: bool) -> String {
    if differs_only_in_nullability(lower, upper) {
        return if upper.starts_with('(') {
            format!("({lower})!")
        } else {
            format!("{lower}!")
        };
    }

    let (collections, kotlin) = if short_names {
        ("", "")
    } else {
        ("kotlin.collections.", "kotlin.")
    };

    let mutable_lower = format!("{collections}{MUTABLE}");
    let folded_collection = format!("{collections}({MUTABLE})");
    if let Some(folded) =
        replace_prefixes(lower, &mutable_lower, upper, collections, &folded_collection)
    {
        return folded;
    }

    let entry_lower = format!("{collections}MutableMap.MutableEntry");
    let entry_upper = format!("{collections}Map.Entry");
    let folded_entry = format!("{collections}(Mutable)Map.(Mutable)Entry");
    if let Some(folded) =
        replace_prefixes(lower, &entry_lower, upper, &entry_upper, &folded_entry)
    {
        return folded;
    }

    let array_lower = format!("{kotlin}Array<");
    let array_upper = format!("{kotlin}Array<out ");
    let folded_array = format!("{kotlin}Array<(out) ");
    if let Some(folded) =
        replace_prefixes(lower, &array_lower, upper, &array_upper, &folded_array)
    {
        return folded;
    }

    format!("({lower}..{upper})")
}

/// `lower` and `upper` render the same type up to `?` markers.
pub(crate) fn differs_only_in_nullability(lower: &str, upper: &str) -> bool {
    lower == upper.replace('?', "")
        || (upper.ends_with('?') && upper.strip_suffix('?') == Some(lower))
        || upper
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(")?"))
            == Some(lower)
}

/// When `lower` starts with `lower_prefix` and `upper` with `upper_prefix`,
/// replace the prefix by `folded_prefix` provided the remainders agree (up
/// to nullability, which appends `!`).
fn replace_prefixes(
    lower: &str,
    lower_prefix: &str,
    upper: &str,
    upper_prefix: &str,
    folded_prefix: &str,
) -> Option<String> {
    let lower_rest = lower.strip_prefix(lower_prefix)?;
    let upper_rest = upper.strip_prefix(upper_prefix)?;
    let folded = format!("{folded_prefix}{lower_rest}");
    if lower_rest == upper_rest {
        Some(folded)
    } else if differs_only_in_nullability(lower_rest, upper_rest) {
        Some(folded + "!")
    } else {
        None
    }
}
