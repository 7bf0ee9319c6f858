// Signature formatting for member functions
//
// Doxygen stores a member's declaration in pieces: `definition` holds the
// return type and qualified name, `argsstring` the parameter list and trailing
// qualifiers, and `virt`/`static` live on the memberdef as attributes.

use crate::tree::Element;

/// Declaration qualifiers carried as memberdef attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Qualifiers {
    pub is_virtual: bool,
    pub is_static: bool,
}

impl Qualifiers {
    /// Read `virt="virtual"` and `static="yes"` from a memberdef
    pub fn from_element(el: &Element) -> Self {
        Self {
            is_virtual: el.attr("virt") == Some("virtual"),
            is_static: el.attr("static") == Some("yes"),
        }
    }
}

/// Build the displayed signature: definition plus argument string, with the
/// `virtual`/`static` keyword prepended when set and not already present.
///
/// The virtual keyword is applied first, so a member that somehow carried both
/// would read `static virtual ...`.
pub fn format_signature(definition: &str, args: &str, qualifiers: Qualifiers) -> String {
    let mut signature = format!("{}{}", definition, args).trim().to_string();

    if qualifiers.is_virtual && !signature.starts_with("virtual") {
        signature = format!("virtual {}", signature);
    }
    if qualifiers.is_static && !signature.starts_with("static") {
        signature = format!("static {}", signature);
    }

    signature
}

/// Derive the return type from a class-qualified definition such as
/// `std::vector<Peripheral> SimpleBLE::Adapter::scan_get_results`.
///
/// Everything before the last occurrence of `name` is taken, a trailing `::`
/// is dropped, and the text is split at the right-most space outside angle
/// brackets. Returns an empty string when no return type can be found
/// (constructors, or a definition without a type prefix).
pub fn return_type(definition: &str, name: &str) -> String {
    if definition.is_empty() || name.is_empty() {
        return String::new();
    }

    let Some(name_index) = definition.rfind(name) else {
        return String::new();
    };

    let mut before = definition[..name_index].trim();
    if let Some(stripped) = before.strip_suffix("::") {
        before = stripped.trim();
    }

    if before.split_whitespace().count() <= 1 {
        return String::new();
    }

    let mut depth: i32 = 0;
    let mut split_at = None;
    for (i, c) in before.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            ' ' if depth == 0 => split_at = Some(i),
            _ => {}
        }
    }

    match split_at {
        Some(i) => before[..i].trim().to_string(),
        None => before.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_virtual_member() {
        let qualifiers = Qualifiers {
            is_virtual: true,
            is_static: false,
        };
        assert_eq!(
            format_signature("bool SimpleBLE::Safe::Adapter::is_valid", "() const", qualifiers),
            "virtual bool SimpleBLE::Safe::Adapter::is_valid() const"
        );
    }

    #[test]
    fn test_format_static_member() {
        let qualifiers = Qualifiers {
            is_virtual: false,
            is_static: true,
        };
        assert_eq!(
            format_signature("std::vector<Adapter> get_adapters", "()", qualifiers),
            "static std::vector<Adapter> get_adapters()"
        );
    }

    #[test]
    fn test_format_does_not_duplicate_keyword() {
        let qualifiers = Qualifiers {
            is_virtual: true,
            is_static: false,
        };
        assert_eq!(
            format_signature("virtual void scan_stop", "()", qualifiers),
            "virtual void scan_stop()"
        );
    }

    #[test]
    fn test_format_both_qualifiers_static_leads() {
        let qualifiers = Qualifiers {
            is_virtual: true,
            is_static: true,
        };
        assert_eq!(format_signature("void f", "()", qualifiers), "static virtual void f()");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(
            format_signature("void scan_for", "(int timeout_ms)", Qualifiers::default()),
            "void scan_for(int timeout_ms)"
        );
    }

    #[test]
    fn test_qualifiers_from_element() {
        let el = Element::new("memberdef")
            .with_attr("static", "yes")
            .with_attr("virt", "non-virtual");
        let q = Qualifiers::from_element(&el);
        assert!(q.is_static);
        assert!(!q.is_virtual);

        let pure = Element::new("memberdef").with_attr("virt", "pure-virtual");
        assert!(!Qualifiers::from_element(&pure).is_virtual);
    }

    #[test]
    fn test_return_type_simple() {
        assert_eq!(return_type("bool SimpleBLE::Safe::Adapter::is_valid", "is_valid"), "bool");
    }

    #[test]
    fn test_return_type_template() {
        assert_eq!(
            return_type(
                "std::map<std::string, ByteArray> SimpleBLE::Peripheral::manufacturer_data",
                "manufacturer_data"
            ),
            "std::map<std::string, ByteArray>"
        );
    }

    #[test]
    fn test_return_type_nested_templates() {
        assert_eq!(
            return_type(
                "static std::optional<std::vector<Adapter>> SimpleBLE::Adapter::get_adapters",
                "get_adapters"
            ),
            "static std::optional<std::vector<Adapter>>"
        );
    }

    #[test]
    fn test_return_type_constructor() {
        assert_eq!(return_type("SimpleBLE::Adapter::Adapter", "Adapter"), "");
        assert_eq!(return_type("Adapter", "Adapter"), "");
    }

    #[test]
    fn test_return_type_missing_name() {
        assert_eq!(return_type("void scan", "connect"), "");
        assert_eq!(return_type("", "scan"), "");
    }
}
