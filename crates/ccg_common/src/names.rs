//! C# identifier rules used when naming generated members and files.

/// Reserved C# keywords. A derived member name that collides with one of these
/// is emitted with the `@` verbatim prefix.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Returns `true` if `word` is a reserved C# keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns `true` if `name` is usable as a C# member or type name.
///
/// Accepts the `@` verbatim prefix, which also makes keywords legal.
pub fn is_identifier(name: &str) -> bool {
    let (verbatim, body) = match name.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, name),
    };
    let mut chars = body.chars();
    let first_ok = match chars.next() {
        Some(c) => c == '_' || c.is_alphabetic(),
        None => false,
    };
    first_ok
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && (verbatim || !is_keyword(body))
}

/// Derives a cache property name from a dependency type's simple name.
///
/// The first character is lower-cased (`Rigidbody` becomes `rigidbody`). A
/// result that is a keyword gets the `@` prefix (`Object` becomes `@object`).
pub fn derive_property_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    let derived: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    if is_keyword(&derived) {
        format!("@{derived}")
    } else {
        derived
    }
}

/// Returns the last dot-separated segment of a possibly qualified type name,
/// with any generic argument list removed.
///
/// `UnityEngine.MonoBehaviour` and `Base<T>` yield `MonoBehaviour` and `Base`.
pub fn simple_name(name: &str) -> &str {
    let without_args = match name.find('<') {
        Some(pos) => &name[..pos],
        None => name,
    };
    let without_global = without_args
        .strip_prefix("global::")
        .unwrap_or(without_args);
    let last = match without_global.rfind('.') {
        Some(pos) => &without_global[pos + 1..],
        None => without_global,
    };
    last.trim()
}

/// Turns a qualified type name into a file-system safe stem.
///
/// Each generic argument list becomes a backtick and its arity, as in CLR
/// metadata names. Whitespace and the `global::` alias are dropped:
/// `Game.Pool<T, U>` becomes ``Game.Pool`2``. Identifiers cannot contain a
/// backtick, so a generic type never maps to the stem of a non-generic one.
pub fn file_safe_name(qualified: &str) -> String {
    let mut out = String::with_capacity(qualified.len());
    let mut depth = 0usize;
    let mut arity = 0usize;
    for c in qualified.replace("global::", "").chars() {
        match c {
            '<' => {
                if depth == 0 {
                    arity = 1;
                }
                depth += 1;
            }
            ',' if depth == 1 => arity += 1,
            '>' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    out.push('`');
                    out.push_str(&arity.to_string());
                }
            }
            _ if depth > 0 || c.is_whitespace() => {}
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_lower_first() {
        assert_eq!(derive_property_name("Rigidbody"), "rigidbody");
        assert_eq!(derive_property_name("SampleComponent"), "sampleComponent");
        assert_eq!(derive_property_name("_Private"), "_Private");
    }

    #[test]
    fn derived_keyword_is_escaped() {
        assert_eq!(derive_property_name("Object"), "@object");
        assert_eq!(derive_property_name("Event"), "@event");
    }

    #[test]
    fn identifier_rules() {
        assert!(is_identifier("rb"));
        assert!(is_identifier("_cache2"));
        assert!(is_identifier("@class"));
        assert!(!is_identifier("class"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("@"));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("has space"));
        assert!(!is_identifier("a.b"));
    }

    #[test]
    fn simple_name_strips_qualification() {
        assert_eq!(simple_name("UnityEngine.MonoBehaviour"), "MonoBehaviour");
        assert_eq!(simple_name("global::UnityEngine.MonoBehaviour"), "MonoBehaviour");
        assert_eq!(simple_name("Base<Game.Item>"), "Base");
        assert_eq!(simple_name("MonoBehaviour"), "MonoBehaviour");
    }

    #[test]
    fn file_safe_encodes_generic_arity() {
        assert_eq!(file_safe_name("Sandbox"), "Sandbox");
        assert_eq!(file_safe_name("Game.Pool<T>"), "Game.Pool`1");
        assert_eq!(file_safe_name("Game.Map<K, V>"), "Game.Map`2");
        assert_eq!(file_safe_name("Game.Map<List<K>, V>"), "Game.Map`2");
        assert_eq!(file_safe_name("global::Game.Player"), "Game.Player");
    }

    #[test]
    fn generic_stem_differs_from_lookalike_plain_name() {
        assert_ne!(file_safe_name("Game.Pool<T>"), file_safe_name("Game.Pool_T_"));
        assert_ne!(file_safe_name("Game.Pool<T>"), file_safe_name("Game.Pool<T, U>"));
        assert_ne!(file_safe_name("Game.Pool<T>"), file_safe_name("Game.Pool"));
    }
}
