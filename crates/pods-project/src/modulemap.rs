//! Link directives inside a framework's module map.
//!
//! Only lines of the form `link framework "Name"` and `link name` matter;
//! every other line tokenizes to [`LinkDirective::Ignored`]. Any argument
//! starting with `framework` is a framework; anything else is passed to the
//! linker as written.

/// One tokenized module map line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDirective {
    /// A framework to link, already suffixed with `.framework`.
    Framework(String),
    /// A linker flag of the form `-lname`.
    Flag(String),
    Ignored,
}

/// Tokenize a single line.
///
/// Leading whitespace is dropped and the rest is split into at most two
/// tokens: the keyword and its argument.
pub fn parse_line(line: &str) -> LinkDirective {
    let mut tokens = line.trim_start().splitn(2, char::is_whitespace);
    let (Some("link"), Some(argument)) = (tokens.next(), tokens.next()) else {
        return LinkDirective::Ignored;
    };

    let argument = argument.trim();
    if argument.is_empty() {
        return LinkDirective::Ignored;
    }

    if let Some(rest) = argument.strip_prefix("framework") {
        let name = rest.trim().trim_matches('"');
        if name.is_empty() {
            return LinkDirective::Ignored;
        }
        return LinkDirective::Framework(format!("{name}.framework"));
    }

    LinkDirective::Flag(format!("-l{argument}"))
}

/// Tokenize every line of a module map.
pub fn parse(content: &str) -> impl Iterator<Item = LinkDirective> + '_ {
    content.lines().map(parse_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_directive() {
        assert_eq!(
            parse_line("  link framework \"Foo\""),
            LinkDirective::Framework("Foo.framework".into())
        );
    }

    #[test]
    fn library_directive_keeps_its_value() {
        assert_eq!(parse_line("link bar"), LinkDirective::Flag("-lbar".into()));
        assert_eq!(
            parse_line("\tlink \"sqlite3\""),
            LinkDirective::Flag("-l\"sqlite3\"".into())
        );
    }

    #[test]
    fn any_framework_prefix_names_a_framework() {
        assert_eq!(
            parse_line("link frameworks"),
            LinkDirective::Framework("s.framework".into())
        );
        assert_eq!(
            parse_line("link framework\tFoo"),
            LinkDirective::Framework("Foo.framework".into())
        );
    }

    #[test]
    fn everything_else_is_ignored() {
        for line in [
            "",
            "framework module Foo {",
            "  umbrella header \"Foo.h\"",
            "  export *",
            "link",
            "link   ",
            "link framework",
            "linked bar",
            "}",
        ] {
            assert_eq!(parse_line(line), LinkDirective::Ignored, "line: {line:?}");
        }
    }

    #[test]
    fn parses_whole_module_map() {
        let content = "framework module Foo {\n  umbrella header \"Foo.h\"\n  link framework \"Bar\"\n  link z\n}\n";
        let directives: Vec<_> = parse(content)
            .filter(|directive| *directive != LinkDirective::Ignored)
            .collect();
        assert_eq!(
            directives,
            vec![
                LinkDirective::Framework("Bar.framework".into()),
                LinkDirective::Flag("-lz".into()),
            ]
        );
    }
}
