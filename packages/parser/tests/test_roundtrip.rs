use propstyle_parser::ast::Item;
use propstyle_parser::{parse, serialize, ParseError};

const APP: &str = r#"import React from "react";
import styled from "styled-components";

const Wrapper = styled.section`
  padding: 4em;
  background: papayawhip;

  @media (min-width: 768px) {
    padding: 2em;
  }
`;

const pattern = /^<[a-z]+>$/i;

export default function App({ user }) {
  const greeting = `Hello ${user ? user.name : "<anonymous>"}`;
  // <not-jsx>
  return (
    <Wrapper>
      <header style="display: flex">
        <h1 className={cx("title", { active: user != null })}>{greeting}</h1>
      </header>
      {user && <span>{user.email}</span>}
      <>
        <button onClick={() => alert(1 < 2)}>Click</button>
      </>
    </Wrapper>
  );
}
"#;

#[test]
fn test_app_roundtrip() {
    let module = parse(APP).expect("Failed to parse");
    assert_eq!(serialize(&module), APP);
}

#[test]
fn test_app_structure() {
    let module = parse(APP).expect("Failed to parse");

    let styled = module.items.iter().filter(|i| matches!(i, Item::Styled(_))).count();
    let elements = module.items.iter().filter(|i| matches!(i, Item::Element(_))).count();

    assert_eq!(styled, 1);
    assert_eq!(elements, 1, "only <Wrapper> is a top-level element");
}

#[test]
fn test_error_position_is_reported() {
    let source = "const a = (\n  <div>\n    <p>text</div>\n);";
    let err = parse(source).unwrap_err();

    match err {
        ParseError::MismatchedClosingTag { expected, found, pos } => {
            assert_eq!(expected, "p");
            assert_eq!(found, "div");
            assert_eq!(&source[pos..pos + 2], "</");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[cfg(feature = "pretty-errors")]
#[test]
fn test_pretty_error() {
    let source = "<div>";
    let err = parse(source).unwrap_err();
    let report = propstyle_parser::format_error(source, "App.jsx", &err);
    assert!(report.contains("Unclosed element <div>"));
}
