//! Identifier escaping for rendered names.

/// Hard keywords that must be backquoted when used as identifiers.
const KEYWORDS: &[&str] = &[
    "package",
    "as",
    "typealias",
    "class",
    "this",
    "super",
    "val",
    "var",
    "fun",
    "for",
    "null",
    "true",
    "false",
    "is",
    "in",
    "throw",
    "return",
    "break",
    "continue",
    "object",
    "if",
    "try",
    "else",
    "while",
    "do",
    "when",
    "interface",
    "typeof",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Whether `name` needs backquotes to be read back as one identifier.
///
/// Special names (`<anonymous>`, `<no name provided>`) are never escaped.
pub fn needs_escaping(name: &str) -> bool {
    if name.starts_with('<') {
        return false;
    }
    is_keyword(name) || name.chars().any(|c| !(c.is_alphanumeric() || c == '_'))
}

/// Append `name`, backquoted if needed.
pub fn push_escaped(buf: &mut String, name: &str) {
    if needs_escaping(name) {
        buf.push('`');
        buf.push_str(name);
        buf.push('`');
    } else {
        buf.push_str(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn escaped(name: &str) -> String {
        let mut buf = String::new();
        push_escaped(&mut buf, name);
        buf
    }

    #[test]
    fn escapes_keywords_and_odd_characters() {
        assert_eq!(escaped("Foo"), "Foo");
        assert_eq!(escaped("in"), "`in`");
        assert_eq!(escaped("my name"), "`my name`");
        assert_eq!(escaped("a-b"), "`a-b`");
        assert_eq!(escaped("_x9"), "_x9");
    }

    #[test]
    fn special_names_stay_bare() {
        assert_eq!(escaped("<no name provided>"), "<no name provided>");
    }
}
