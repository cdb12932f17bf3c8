//! The ordered highlighting rule table.
//!
//! Order matters: rules are applied top to bottom and later matches
//! overwrite earlier ones on overlap.

use regex::Regex;

use super::TokenClass;

pub(crate) struct Rule {
    pub pattern: Regex,
    /// Capture group to style; 0 styles the whole match
    pub group: usize,
    pub class: TokenClass,
}

impl Rule {
    fn whole(pattern: &str, class: TokenClass) -> Rule {
        Rule {
            pattern: Regex::new(pattern).expect("rule pattern"),
            group: 0,
            class,
        }
    }

    fn capture(pattern: &str, group: usize, class: TokenClass) -> Rule {
        Rule {
            pattern: Regex::new(pattern).expect("rule pattern"),
            group,
            class,
        }
    }
}

const KEYWORDS: &[&str] = &[
    "class", "const", "enum", "explicit", "friend", "inline", "namespace", "operator", "private",
    "protected", "public", "signals", "signed", "slots", "static", "struct", "template", "typedef",
    "typename", "union", "unsigned", "virtual", "volatile", "using", "if", "else", "for", "while",
    "do", "switch", "case", "break", "return", "continue", "new", "delete", "try", "catch",
    "throw", "this", "true", "false", "nullptr", "void", "int", "float", "double", "char", "bool",
    "string", "auto", "override",
];

pub(crate) fn table() -> Vec<Rule> {
    let keywords = format!(r"\b(?:{})\b", KEYWORDS.join("|"));
    vec![
        Rule::whole(&keywords, TokenClass::Keyword),
        // Capitalized identifiers read as type names
        Rule::whole(r"\b[A-Z][A-Za-z0-9_]*\b", TokenClass::Type),
        // Call sites: style the identifier, not the paren
        Rule::capture(r"\b([A-Za-z0-9_]+)\(", 1, TokenClass::Function),
        Rule::whole(r"\b\d+(\.\d+)?\b", TokenClass::Number),
        Rule::whole(r"[+\-*/=<>!&|^~%]+", TokenClass::Operator),
        Rule::whole(r"#[a-zA-Z]+\b", TokenClass::Preprocessor),
        Rule::whole(r"//[^\n]*", TokenClass::Comment),
        Rule::whole(r#"".*""#, TokenClass::Str),
    ]
}
