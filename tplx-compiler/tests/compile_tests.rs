use rstest::rstest;
use tplx_compiler::{CompileOptions, FactoryNames, SyntaxErrorKind, compile};

fn default_compile(template: &str) -> String {
    compile(template, &CompileOptions::default()).unwrap()
}

const ALIASES: &str =
    "const frg=React.Fragment;const jsx=React.createElement;const jsxs=React.createElement;";

#[rstest]
#[case("Hello world!", "<>Hello world!</>")]
#[case("<div>Hello world!</div>", "<div>Hello world!</div>")]
#[case("<br/>", "<br/>")]
#[case("<br/><!-- xxx -->", "<br/>")]
#[case(
    r#"<div class='good' title="heel">Hello world!</div>"#,
    r#"<div className="good" title="heel">Hello world!</div>"#
)]
#[case(
    "<div><span>Hello</span> world!<br/>  </div>",
    "<div><span>Hello</span>world!<br/></div>"
)]
#[case("<p>Hi {name}, {first_name}!</p>", r#"<p>Hi {props.name}, {props["first_name"]}!</p>"#)]
#[case("", "<></>")]
fn compact_jsx_text(#[case] template: &str, #[case] body: &str) {
    assert_eq!(
        default_compile(template),
        format!("function TemplateComponent(props){{return {body}}}")
    );
}

#[rstest]
#[case("<p>{first-name}</p>", r#"<p>{props["first-name"]}</p>"#, r#"jsxs("p",null,[props["first-name"]])"#)]
#[case("<p>{first name}!</p>", r#"<p>{props["first name"]}!</p>"#, r#"jsxs("p",null,[props["first name"]+"!"])"#)]
#[case("<p>{2col}</p>", r#"<p>{props["2col"]}</p>"#, r#"jsxs("p",null,[props["2col"]])"#)]
#[case(
    "<p>{first-name} {alert(1)}</p>",
    r#"<p>{props["first-name"]} {props["alert(1)"]}</p>"#,
    r#"jsxs("p",null,[props["first-name"]+" "+props["alert(1)"]])"#
)]
fn text_markers_resolve_to_props_lookups(#[case] template: &str, #[case] jsx_text: &str, #[case] factory: &str) {
    assert_eq!(
        default_compile(template),
        format!("function TemplateComponent(props){{return {jsx_text}}}")
    );
    let out = compile(template, &CompileOptions::new().jsx(true)).unwrap();
    assert_eq!(out, format!("function TemplateComponent(props){{{ALIASES}return {factory}}}"));
}

#[test]
fn text_and_attribute_markers_resolve_alike() {
    assert_eq!(
        default_compile(r#"<p title="{first-name}">{first-name}</p>"#),
        r#"function TemplateComponent(props){return <p title={props["first-name"]}>{props["first-name"]}</p>}"#
    );
}

#[rstest]
#[case(r#"<label for="y">x</label>"#, r#"<label htmlFor="y">x</label>"#)]
#[case(r#"<i class="x"/>"#, r#"<i className="x"/>"#)]
#[case(r#"<i data-for="x" classname="y"/>"#, r#"<i data-for="x" classname="y"/>"#)]
fn attribute_names_are_mapped(#[case] template: &str, #[case] body: &str) {
    assert!(default_compile(template).contains(body));
}

#[test]
fn preserve_whitespace_keeps_text_edges() {
    let opts = CompileOptions::new().preserve_whitespace(true);
    assert_eq!(
        compile("<div><span>Hello</span> world!<br/>  </div>", &opts).unwrap(),
        "function TemplateComponent(props){return <div><span>Hello</span> world!<br/>  </div>}"
    );
}

#[test]
fn preserve_whitespace_is_ignored_for_pretty_factory_calls() {
    let opts = CompileOptions::new().preserve_whitespace(true).pretty(true).jsx(true);
    let out = compile("<p> a </p>", &opts).unwrap();
    assert!(out.contains("[\n    \"a\"\n  ]"), "{out}");

    let opts = CompileOptions::new().preserve_whitespace(true).jsx(true);
    let out = compile("<p> a </p>", &opts).unwrap();
    assert!(out.ends_with(r#"return jsxs("p",null,[" a "])}"#), "{out}");
}

#[test]
fn pretty_text() {
    let out = compile("Hello world!", &CompileOptions::new().pretty(true)).unwrap();
    assert_eq!(
        out,
        "function TemplateComponent(props) {\n  return (<>\n    Hello world!\n  </>)\n}"
    );
}

#[test]
fn pretty_div() {
    let out = compile("<div>Hello world!</div>", &CompileOptions::new().pretty(true)).unwrap();
    assert_eq!(
        out,
        "function TemplateComponent(props) {\n  return (<div>\n    Hello world!\n  </div>)\n}"
    );
}

#[test]
fn pretty_with_initial_indent() {
    let out = compile("Hello world!", &CompileOptions::new().indent(2, 1)).unwrap();
    assert_eq!(
        out,
        "  function TemplateComponent(props) {\n   return (<>\n    Hello world!\n   </>)\n  }"
    );
}

#[test]
fn pretty_indent_size_from_json_number() {
    let opts: CompileOptions = serde_json::from_str(r#"{"pretty":4}"#).unwrap();
    let out = compile("Hello world!", &opts).unwrap();
    assert_eq!(
        out,
        "function TemplateComponent(props) {\n    return (<>\n        Hello world!\n    </>)\n}"
    );
}

#[rstest]
#[case("<{p1}>Hello world!</{p1}>", "const C$c0=props.p1;return <C$c0>Hello world!</C$c0>")]
#[case(
    r#"<{p1} class="12" title='what'>Hello world!</{p1}>"#,
    r#"const C$c0=props.p1;return <C$c0 className="12" title="what">Hello world!</C$c0>"#
)]
#[case("<{p1} />", "const C$c0=props.p1;return <C$c0/>")]
#[case(
    "<{p1}>A</{p1}><{p1}>B</{p1}><{p2}/>",
    "const C$c0=props.p1;const C$c1=props.p2;return <><C$c0>A</C$c0><C$c0>B</C$c0><C$c1/></>"
)]
fn placeholder_tags_are_hoisted(#[case] template: &str, #[case] body: &str) {
    assert_eq!(
        default_compile(template),
        format!("function TemplateComponent(props){{{body}}}")
    );
}

#[test]
fn placeholder_pretty_short_attributes() {
    let out = compile(r#"<{p1} c="12" d='what'>Hello world!</{p1}>"#, &CompileOptions::new().pretty(true))
        .unwrap();
    assert_eq!(
        out,
        r#"function TemplateComponent(props) {
  const C$c0 = props.p1;
  return (<C$c0 c="12" d="what">
    Hello world!
  </C$c0>)
}"#
    );
}

#[test]
fn placeholder_pretty_wrapped_attributes() {
    let out = compile(
        r#"<{p1} class="12" title='what'>Hello world!</{p1}>"#,
        &CompileOptions::new().pretty(true),
    )
    .unwrap();
    assert_eq!(
        out,
        r#"function TemplateComponent(props) {
  const C$c0 = props.p1;
  return (<C$c0
    className="12"
    title="what"
  >
    Hello world!
  </C$c0>)
}"#
    );
}

#[test]
fn placeholder_pretty_self_closing_siblings() {
    let out = compile("<{p1} /><{p1} />", &CompileOptions::new().pretty(true)).unwrap();
    assert_eq!(
        out,
        r#"function TemplateComponent(props) {
  const C$c0 = props.p1;
  return (<>
    <C$c0/>
    <C$c0/>
  </>)
}"#
    );
}

#[test]
fn hoisting_restarts_on_every_compile() {
    let first = default_compile("<{a}/><{b}/>");
    let second = default_compile("<{b}/>");
    assert!(first.contains("const C$c1=props.b;"));
    assert!(second.contains("const C$c0=props.b;"));
    assert!(!second.contains("C$c1"));
}

#[test]
fn concurrent_compiles_do_not_share_hoisting_state() {
    let expected = default_compile("<{p1}/><{p2}/>");
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| default_compile("<{p1}/><{p2}/>")))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
    assert!(expected.starts_with("function TemplateComponent(props){const C$c0=props.p1;"));
}

#[rstest]
#[case("Hello world!", r#"jsxs(frg,null,["Hello world!"])"#)]
#[case("<div>Hello world!</div>", r#"jsxs("div",null,["Hello world!"])"#)]
#[case(
    "<{p1}>Hello world!</{p1}><span>123</span>",
    r#"jsxs(frg,null,[jsx(props.p1,null,["Hello world!"]),jsx("span",null,["123"])])"#
)]
#[case(
    r#"<div class='abc' title="hello" data-id="xxx">Hello world!<br/></div>"#,
    r#"jsxs("div",{className:"abc",title:"hello","data-id":"xxx"},["Hello world!",jsx("br",null,[])])"#
)]
#[case(
    "<div>Hello world!<span>abc</span></div>",
    r#"jsxs("div",null,["Hello world!",jsx("span",null,["abc"])])"#
)]
#[case("<br/>", r#"jsxs("br",null,[])"#)]
fn compact_factory_calls(#[case] template: &str, #[case] body: &str) {
    let out = compile(template, &CompileOptions::new().jsx(true)).unwrap();
    assert_eq!(out, format!("function TemplateComponent(props){{{ALIASES}return {body}}}"));
}

#[test]
fn pretty_factory_calls_with_attributes() {
    let out = compile(
        r#"<div class='abc' title="hello" data-id="xxx">Hello world!</div>"#,
        &CompileOptions::new().jsx(true).pretty(true),
    )
    .unwrap();
    assert_eq!(
        out,
        r#"function TemplateComponent(props) {
  const frg = React.Fragment;
  const jsx = React.createElement;
  const jsxs = React.createElement;
  return jsxs("div", {
    className: "abc",
    title: "hello",
    "data-id": "xxx"
  }, [
    "Hello world!"
  ])
}"#
    );
}

#[test]
fn pretty_factory_calls_nested() {
    let out = compile(
        r#"<div id="a"><span>x</span></div>"#,
        &CompileOptions::new().jsx(true).pretty(true),
    )
    .unwrap();
    assert_eq!(
        out,
        r#"function TemplateComponent(props) {
  const frg = React.Fragment;
  const jsx = React.createElement;
  const jsxs = React.createElement;
  return jsxs("div", { id: "a" }, [
    jsx("span", null, [
      "x"
    ])
  ])
}"#
    );
}

#[test]
fn custom_component_and_factory_names() {
    let opts = CompileOptions::new().component_name("Card").factory_names(FactoryNames {
        fragment: "Fragment".into(),
        jsx: "_jsx".into(),
        jsxs: "_jsxs".into(),
    });
    assert_eq!(
        compile("<b>{label}</b>", &opts).unwrap(),
        r#"function Card(props){const frg=Fragment;const jsx=_jsx;const jsxs=_jsxs;return jsxs("b",null,[props.label])}"#
    );
}

#[test]
fn options_from_json_select_factory_output() {
    let opts: CompileOptions =
        serde_json::from_str(r#"{"componentName":"Row","jsx":{"jsx":"h","jsxs":"h"}}"#).unwrap();
    let out = compile("<td>{v}</td>", &opts).unwrap();
    assert_eq!(
        out,
        r#"function Row(props){const frg=React.Fragment;const jsx=h;const jsxs=h;return jsxs("td",null,[props.v])}"#
    );
}

#[rstest]
#[case("<DIV>x</DIV>", SyntaxErrorKind::UppercaseTag)]
#[case("<{p1}>x</{p2}>", SyntaxErrorKind::MismatchedTag)]
#[case("<div>x", SyntaxErrorKind::Unexpected)]
#[case("a < b", SyntaxErrorKind::Unexpected)]
fn compile_fails_with_syntax_error(#[case] template: &str, #[case] kind: SyntaxErrorKind) {
    let err = compile(template, &CompileOptions::default()).unwrap_err();
    assert_eq!(err.kind, kind);
}
