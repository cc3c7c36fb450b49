//! End-to-end tests driving the public library API.

use std::io::{BufReader, Cursor};

use reindent::process::reindent_stream;
use reindent::{reindent_markup, reindent_script, Config, Syntax};

#[test]
fn test_script_function_with_nested_constructs() {
    let input = "function f(x) {\n\
                 if (x) {\n\
                 return 1;\n\
                 }\n\
                 var y = 2,\n\
                 z = 3;\n\
                 return y + z;\n\
                 }\n";
    let expected = "function f(x) {\r\n\
                    \x20 if (x) {\r\n\
                    \x20   return 1;\r\n\
                    \x20 }\r\n\
                    \x20 var y = 2,\r\n\
                    \x20   z = 3;\r\n\
                    \x20 return y + z;\r\n\
                    }\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_script_multiline_if_condition() {
    let input = "if (a &&\nb) {\nc();\n}\n";
    let expected = "if (a &&\r\n  b) {\r\n  c();\r\n}\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_script_regex_literal_shields_delimiters() {
    // The braces and brackets inside the literal must not open scopes
    let input = "var re = /[{]/;\nx();\n";
    let expected = "var re = /[{]/;\r\nx();\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_script_division_is_not_a_regex() {
    let input = "a = b / c / d;\nx();\n";
    let expected = "a = b / c / d;\r\nx();\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_script_string_shields_delimiters() {
    let input = "var s = \"{ not a block\";\nx();\n";
    let expected = "var s = \"{ not a block\";\r\nx();\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_markup_nested_tags() {
    let input = "<html>\n\
                 <body>\n\
                 <div id=\"x\">\n\
                 hello\n\
                 </div>\n\
                 </body>\n\
                 </html>\n";
    let expected = "<html>\r\n\
                    \x20 <body>\r\n\
                    \x20   <div id=\"x\">\r\n\
                    \x20     hello\r\n\
                    \x20   </div>\r\n\
                    \x20 </body>\r\n\
                    </html>\r\n";
    assert_eq!(reindent_markup(input, "  "), expected);
}

#[test]
fn test_markup_embedded_script() {
    let input = "<script>\nif (a) {\nb();\n}\n</script>\n";
    let expected = "<script>\r\n  if (a) {\r\n    b();\r\n  }\r\n</script>\r\n";
    assert_eq!(reindent_markup(input, "  "), expected);
}

#[test]
fn test_markup_comment_interior_passes_through() {
    // Lines inside an unterminated comment keep their original text; the
    // terminator line resumes scanning and gets the enclosing depth
    let input = "<div>\n<!--\nraw   line\n-->\n</div>\n";
    let expected = "<div>\r\n<!--\r\nraw   line\r\n  -->\r\n</div>\r\n";
    assert_eq!(reindent_markup(input, "  "), expected);
}

#[test]
fn test_unbalanced_closers_tolerated() {
    // Stray closers never drive the depth negative
    let input = "}\n}\nx();\n";
    let expected = "}\r\n}\r\nx();\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_unbalanced_opener_carries_to_end() {
    let input = "a {\nb;\n";
    let expected = "a {\r\n  b;\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_depth_restored_after_balanced_block() {
    let input = "a {\nb;\n}\nc;\n";
    let expected = "a {\r\n  b;\r\n}\r\nc;\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_trimmed_content_is_preserved() {
    let input = "function f(x) {\n\
                 \t  if (x) {\n\
                 return 1;\n\
                 \t}\n\
                 }\n";
    let output = reindent_script(input, "  ");
    let input_trimmed: Vec<&str> = input.lines().map(str::trim).collect();
    let output_trimmed: Vec<&str> = output.lines().map(str::trim).collect();
    assert_eq!(input_trimmed, output_trimmed);
}

#[test]
fn test_idempotent() {
    let input = "function f(x) {\n\
                 if (x) {\n\
                 return 1;\n\
                 }\n\
                 var y = 2,\n\
                 z = 3;\n\
                 }\n";
    let once = reindent_script(input, "  ");
    let twice = reindent_script(&once, "  ");
    assert_eq!(once, twice);
}

#[test]
fn test_crlf_input() {
    let input = "a {\r\nb;\r\n}\r\n";
    let expected = "a {\r\n  b;\r\n}\r\n";
    assert_eq!(reindent_script(input, "  "), expected);
}

#[test]
fn test_stream_script_default_indent() {
    let config = Config::default();
    let reader = BufReader::new(Cursor::new("if (x) {\ny();\n}\n".as_bytes()));
    let mut output = Vec::new();
    reindent_stream(reader, &mut output, &config, Syntax::Script).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "if (x) {\r\n    y();\r\n}\r\n"
    );
}

#[test]
fn test_stream_markup_with_tabs() {
    let config = Config {
        use_tabs: true,
        ..Default::default()
    };
    let reader = BufReader::new(Cursor::new("<div>\n<p>hi</p>\n</div>\n".as_bytes()));
    let mut output = Vec::new();
    reindent_stream(reader, &mut output, &config, Syntax::Markup).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "<div>\r\n\t<p>hi</p>\r\n</div>\r\n"
    );
}

#[test]
fn test_stream_output_feeds_back_unchanged() {
    let config = Config {
        indent: 2,
        ..Default::default()
    };
    let reader = BufReader::new(Cursor::new("a {\nb;\n}\n".as_bytes()));
    let mut first = Vec::new();
    reindent_stream(reader, &mut first, &config, Syntax::Script).unwrap();

    let reader = BufReader::new(Cursor::new(first.clone()));
    let mut second = Vec::new();
    reindent_stream(reader, &mut second, &config, Syntax::Script).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_syntax_detection_matches_stream_dispatch() {
    assert_eq!(Syntax::from_extension("js"), Some(Syntax::Script));
    assert_eq!(Syntax::from_extension("html"), Some(Syntax::Markup));
    assert_eq!(Syntax::from_extension("txt"), None);
}
