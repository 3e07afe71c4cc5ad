use crate::{transform, CodemodConfig};
use propstyle_style::Breakpoints;

fn run(source: &str) -> String {
    transform(source, &CodemodConfig::default()).unwrap_or_else(|e| panic!("Transform failed: {}\n{}", e, source))
}

#[test]
fn test_mapped_tag_has_no_as() {
    let output = run(r#"<button className="x"></button>"#);
    assert_eq!(output, r#"<Button className="x"></Button>"#);
    assert!(!output.contains("as="));
}

#[test]
fn test_unmapped_tag_uses_wrapper() {
    assert_eq!(run("<span></span>"), r#"<Box as="span"></Box>"#);
}

#[test]
fn test_style_object_becomes_flat_props() {
    assert_eq!(
        run("const el = <div style={{backgroundColor:'blue', color:'white'}} />;"),
        r#"const el = <Box as="div" backgroundColor="blue" color="white" />;"#
    );
}

#[test]
fn test_styled_states_and_breakpoints() {
    let source = r#"import styled from 'styled-components';

export const Title = styled.h1`
  font-size: 24px;
  &:hover {
    color: blue;
  }
  @media (min-width: 768px) {
    font-size: 32px;
  }
`;
"#;
    assert_eq!(
        run(source),
        r#"
export const Title = (props) => <Box as="h1" fontSize="24px" on={{ hover: { color: "blue" } }} media={{ md: { fontSize: "32px" } }} {...props} />;
"#
    );
}

#[test]
fn test_custom_breakpoints() {
    let mut breakpoints = Breakpoints::new();
    breakpoints.insert("tablet", 600);
    let config = CodemodConfig {
        breakpoints,
        ..Default::default()
    };

    let output = transform(
        "const A = styled.div`@media (min-width: 600px) { width: 50%; }`;",
        &config,
    )
    .unwrap();
    assert_eq!(
        output,
        r#"const A = (props) => <Box as="div" media={{ tablet: { width: "50%" } }} {...props} />;"#
    );
}

#[test]
fn test_custom_wrapper_and_factory() {
    let config = CodemodConfig {
        wrapper: "View".to_string(),
        styled_factory: "s".to_string(),
        ..Default::default()
    };

    let output = transform("import s from 'styled-components';\nconst A = s.p`margin: 0;`;\n<em />", &config).unwrap();
    assert_eq!(output, "const A = (props) => <View as=\"p\" margin=\"0\" {...props} />;\n<View as=\"em\" />");
}

#[test]
fn test_import_source_lists_components() {
    let config = CodemodConfig {
        import_source: Some("@acme/ui".to_string()),
        ..Default::default()
    };

    let output = transform("export default () => <section><a href=\"/\">Home</a></section>;", &config).unwrap();
    assert_eq!(
        output,
        "import { Box, Link } from \"@acme/ui\";\nexport default () => <Box as=\"section\"><Link href=\"/\">Home</Link></Box>;"
    );
}

#[test]
fn test_styled_import_kept_when_disabled() {
    let config = CodemodConfig {
        remove_styled_import: false,
        ..Default::default()
    };
    let output = transform("import styled from 'styled-components';\nconst A = styled.div``;\n", &config).unwrap();
    assert!(output.starts_with("import styled from 'styled-components';\n"));
}

#[test]
fn test_transform_is_deterministic() {
    let source = "const A = styled.a`color: red; &:focus { color: blue; }`;\nconst B = () => <img src={x} style=\"width: 10px\" />;";
    let first = run(source);
    for _ in 0..5 {
        assert_eq!(run(source), first);
    }
    assert!(first.contains(r#"<Link color="red" on={{ focus: { color: "blue" } }} {...props} />"#));
    assert!(first.contains(r#"<Image src={x} width="10px" />"#));
}

#[test]
fn test_tags_in_every_jsx_position() {
    assert_eq!(
        run("const a = <div /* note */ className=\"x\">hi</div>;"),
        r#"const a = <Box as="div" /* note */ className="x">hi</Box>;"#
    );
    assert_eq!(run("if (ok) <div />;"), r#"if (ok) <Box as="div" />;"#);
    assert_eq!(run("`${render(<span />)}`"), r#"`${render(<Box as="span" />)}`"#);
}

#[test]
fn test_prop_function_in_mixed_value() {
    assert_eq!(
        run("const A = styled.div`padding: ${(p) => p.size}px;`;"),
        "const A = (props) => <Box as=\"div\" padding={`${((p) => p.size)(props)}px`} {...props} />;"
    );
}
