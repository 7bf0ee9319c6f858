// Document assembler: Doxygen compound trees into symbol descriptors

mod model;

pub use model::*;

use crate::extract::extract_text;
use crate::notes::{parse_description, Description};
use crate::signature::{format_signature, return_type, Qualifiers};
use crate::tree::{first_child, Element, Node};

/// Placeholder used when a compound has no `compoundname`
pub const UNKNOWN_SYMBOL: &str = "Unknown";

/// Build the descriptor for one compound detail tree.
///
/// Expects the `doxygen > compounddef` layout Doxygen writes per class.
/// Returns `None` when that root structure is absent.
pub fn build_symbol(forest: &[Node]) -> Option<SymbolDescriptor> {
    let doxygen = first_child(forest, "doxygen")?;
    let compounddef = doxygen.first_child("compounddef")?;

    let qualified_name = compounddef
        .first_child("compoundname")
        .map(|n| extract_text(&n.children))
        .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string());

    let member_sections = compounddef
        .children_named("sectiondef")
        .filter_map(|sectiondef| build_section(sectiondef, &qualified_name))
        .collect();

    Some(SymbolDescriptor {
        anchor: symbol_anchor(&qualified_name),
        brief: description_of(compounddef, "briefdescription"),
        detailed: description_of(compounddef, "detaileddescription"),
        member_sections,
        qualified_name,
    })
}

fn build_section(sectiondef: &Element, class_name: &str) -> Option<MemberSection> {
    let kind = SectionKind::from_attr(sectiondef.attr("kind")?)?;

    let members = sectiondef
        .children_named("memberdef")
        .filter(|m| m.attr("kind") == Some("function"))
        .map(|m| build_member(m, class_name))
        .collect();

    Some(MemberSection { kind, members })
}

/// Build a member descriptor from a `memberdef` of kind `function`
pub fn build_member(memberdef: &Element, class_name: &str) -> MemberDescriptor {
    let name = child_text(memberdef, "name").unwrap_or_else(|| "unknown".to_string());
    let definition = child_text(memberdef, "definition").unwrap_or_default();
    let args = child_text(memberdef, "argsstring").unwrap_or_else(|| "()".to_string());

    let qualifiers = Qualifiers::from_element(memberdef);
    let scoped_definition = definition.replacen(&format!("{}::", class_name), "", 1);

    let parameters = memberdef
        .children_named("param")
        .filter_map(|param| {
            let declname = child_text(param, "declname").unwrap_or_default();
            let type_name = child_text(param, "type").unwrap_or_default();
            Parameter::new(&declname, &type_name)
        })
        .collect();

    MemberDescriptor {
        signature: format_signature(&scoped_definition, &args, qualifiers),
        return_type: return_type(&definition, &name),
        is_virtual: qualifiers.is_virtual,
        is_static: qualifiers.is_static,
        brief: description_of(memberdef, "briefdescription"),
        detailed: description_of(memberdef, "detaileddescription"),
        parameters,
        name,
    }
}

fn child_text(el: &Element, name: &str) -> Option<String> {
    el.first_child(name).map(|child| extract_text(&child.children))
}

fn description_of(el: &Element, name: &str) -> Description {
    el.first_child(name).map(parse_description).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::CalloutKind;
    use crate::tree::parse_tree;

    const ADAPTER_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8">
  <compounddef id="class_simple_b_l_e_1_1_safe_1_1_adapter" kind="class" language="C++" prot="public">
    <compoundname>SimpleBLE::Safe::Adapter</compoundname>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="x1" prot="public" static="no" const="yes" virt="virtual">
        <type>bool</type>
        <definition>bool SimpleBLE::Safe::Adapter::is_valid</definition>
        <argsstring>() const</argsstring>
        <name>is_valid</name>
        <briefdescription><para>Whether the adapter is usable.</para></briefdescription>
        <detaileddescription>
          <para>Checks the handle. NOTE: only valid while powered.</para>
        </detaileddescription>
      </memberdef>
      <memberdef kind="function" id="x2" prot="public" static="no" const="no" virt="non-virtual">
        <type>bool</type>
        <definition>bool SimpleBLE::Safe::Adapter::scan_for</definition>
        <argsstring>(int timeout_ms) noexcept</argsstring>
        <name>scan_for</name>
        <param><type>int</type><declname>timeout_ms</declname></param>
        <param><type></type><declname>ignored</declname></param>
        <briefdescription></briefdescription>
        <detaileddescription></detaileddescription>
      </memberdef>
      <memberdef kind="typedef" id="x3" prot="public" static="no">
        <name>callback_t</name>
      </memberdef>
    </sectiondef>
    <sectiondef kind="public-static-func">
      <memberdef kind="function" id="x4" prot="public" static="yes" const="no" virt="non-virtual">
        <type>std::optional&lt; std::vector&lt; Adapter &gt; &gt;</type>
        <definition>static std::optional&lt; std::vector&lt; Adapter &gt; &gt; SimpleBLE::Safe::Adapter::get_adapters</definition>
        <argsstring>() noexcept</argsstring>
        <name>get_adapters</name>
      </memberdef>
    </sectiondef>
    <sectiondef kind="private-attrib">
      <memberdef kind="variable" id="x5" prot="private" static="no"><name>internal_</name></memberdef>
    </sectiondef>
    <briefdescription><para>Exception-free adapter wrapper.</para></briefdescription>
    <detaileddescription>
      <para>Wraps <ref refid="class_simple_b_l_e_1_1_adapter" kindref="compound">Adapter</ref>.<simplesect kind="warning"><para>Not thread-safe.</para></simplesect></para>
    </detaileddescription>
  </compounddef>
</doxygen>
"#;

    fn adapter() -> SymbolDescriptor {
        let forest = parse_tree(ADAPTER_XML).unwrap();
        build_symbol(&forest).unwrap()
    }

    #[test]
    fn test_class_identity() {
        let symbol = adapter();
        assert_eq!(symbol.qualified_name, "SimpleBLE::Safe::Adapter");
        assert_eq!(symbol.anchor, "simpleble-safe-adapter");
        assert_eq!(symbol.brief.text, "Exception-free adapter wrapper.");
        assert_eq!(symbol.detailed.text, "Wraps [Adapter](#simpleble-adapter).");
        assert_eq!(symbol.detailed.admonitions.len(), 1);
        assert_eq!(symbol.detailed.admonitions[0].kind, CalloutKind::Warn);
    }

    #[test]
    fn test_only_public_function_sections() {
        let symbol = adapter();
        let kinds: Vec<SectionKind> = symbol.member_sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::PublicFunc, SectionKind::PublicStaticFunc]);
    }

    #[test]
    fn test_non_function_members_skipped() {
        let symbol = adapter();
        let names: Vec<&str> = symbol.members().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["is_valid", "scan_for", "get_adapters"]);
    }

    #[test]
    fn test_member_signature_strips_class_scope() {
        let symbol = adapter();
        let is_valid = &symbol.member_sections[0].members[0];
        assert_eq!(is_valid.signature, "virtual bool is_valid() const");
        assert_eq!(is_valid.return_type, "bool");
        assert!(is_valid.is_virtual);
        assert!(is_valid.has_callouts());
        assert_eq!(is_valid.detailed.text, "Checks the handle.");
    }

    #[test]
    fn test_static_member() {
        let symbol = adapter();
        let get_adapters = &symbol.member_sections[1].members[0];
        assert_eq!(
            get_adapters.signature,
            "static std::optional< std::vector< Adapter > > get_adapters() noexcept"
        );
        assert_eq!(get_adapters.return_type, "static std::optional< std::vector< Adapter > >");
        assert!(get_adapters.is_static);
        assert!(!get_adapters.has_callouts());
    }

    #[test]
    fn test_parameters_require_name_and_type() {
        let symbol = adapter();
        let scan_for = &symbol.member_sections[0].members[1];
        assert_eq!(scan_for.parameters, vec![Parameter::new("timeout_ms", "int").unwrap()]);
    }

    #[test]
    fn test_missing_compoundname_uses_placeholder() {
        let forest = parse_tree(
            r#"<doxygen><compounddef kind="class"><sectiondef kind="public-func"/></compounddef></doxygen>"#,
        )
        .unwrap();
        let symbol = build_symbol(&forest).unwrap();
        assert_eq!(symbol.qualified_name, UNKNOWN_SYMBOL);
        assert_eq!(symbol.anchor, "unknown");
        assert!(symbol.member_sections[0].members.is_empty());
    }

    #[test]
    fn test_member_defaults_for_missing_nodes() {
        let memberdef = Element::new("memberdef").with_attr("kind", "function");
        let member = build_member(&memberdef, "SimpleBLE::Adapter");
        assert_eq!(member.name, "unknown");
        assert_eq!(member.signature, "()");
        assert!(member.parameters.is_empty());
    }

    #[test]
    fn test_missing_compounddef() {
        let forest = parse_tree("<doxygen/>").unwrap();
        assert!(build_symbol(&forest).is_none());
        let forest = parse_tree("<doxygenindex/>").unwrap();
        assert!(build_symbol(&forest).is_none());
    }

    #[test]
    fn test_build_is_pure() {
        assert_eq!(adapter(), adapter());
    }
}
