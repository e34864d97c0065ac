//! Java-aware definition extractor.
//!
//! Unlike [`PatternExtractor`](crate::PatternExtractor), this extractor
//! tokenizes the source (skipping comments, string literals and annotations)
//! and follows the structure of the first type declaration:
//!
//! - `enum`: the enum constants, in order
//! - `record`: the record components
//! - `class`: field declarators at the top level of the body
//! - `interface`: nothing, since interface fields are implicitly `static`
//!
//! Methods, constructors, initializer blocks, nested types and `static`
//! fields are skipped. Generic parameters and array brackets never show up
//! as field names.

use crate::definition::TypeDefinition;
use crate::extract::DefinitionExtractor;

const TYPE_KEYWORDS: [&str; 4] = ["class", "enum", "record", "interface"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Punct(char),
    Literal,
}

impl Token {
    fn is_punct(&self, c: char) -> bool {
        matches!(self, Token::Punct(p) if *p == c)
    }

    fn word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclarationKind {
    Class,
    Enum,
    Record,
    Interface,
}

impl DeclarationKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "enum" => Some(Self::Enum),
            "record" => Some(Self::Record),
            "interface" => Some(Self::Interface),
            _ => None,
        }
    }
}

/// The first type declaration found in a token stream.
#[derive(Debug)]
struct Declaration {
    kind: DeclarationKind,
    name: String,
    /// Index of the token right after the type name.
    after_name: usize,
}

/// Grammar-aware extractor for Java type declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationExtractor;

impl DeclarationExtractor {
    /// Create a new declaration extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DefinitionExtractor for DeclarationExtractor {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn extract_type_name(&self, source: &str) -> Option<String> {
        let tokens = tokenize(source);
        find_declaration(&tokens).map(|decl| decl.name)
    }

    fn extract_field_names(&self, source: &str) -> Vec<String> {
        self.extract(source)
            .map(|definition| definition.fields)
            .unwrap_or_default()
    }

    fn extract(&self, source: &str) -> Option<TypeDefinition> {
        let tokens = tokenize(source);
        let decl = find_declaration(&tokens)?;
        let fields = declared_fields(&tokens, &decl);
        Some(TypeDefinition::new(decl.name, fields))
    }
}

/// Field names declared by `decl`.
fn declared_fields(tokens: &[Token], decl: &Declaration) -> Vec<String> {
    let mut fields = Vec::new();
    let mut pos = decl.after_name;

    if decl.kind == DeclarationKind::Record {
        if let Some(open) = find_punct(tokens, pos, '(') {
            let (components, end) = group_inner(tokens, open);
            fields.extend(declarator_names(components));
            pos = end;
        }
    }

    let Some(open) = find_punct(tokens, pos, '{') else {
        return fields;
    };
    let (body, _) = group_inner(tokens, open);

    match decl.kind {
        DeclarationKind::Enum => fields.extend(enum_constants(body)),
        // Interface fields are implicitly static
        DeclarationKind::Interface => {}
        DeclarationKind::Class | DeclarationKind::Record => fields.extend(member_fields(body)),
    }
    fields
}

/// Split source text into words and punctuation, dropping comments and
/// replacing string/char literals with a placeholder.
fn tokenize(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c.is_whitespace() {
            i += 1;
        } else if c == '/' && next == Some('/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
        } else if c == '/' && next == Some('*') {
            i += 2;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            i += 2;
        } else if c == '"' && next == Some('"') && chars.get(i + 2) == Some(&'"') {
            // Text block
            i += 3;
            while i < chars.len() && !chars[i..].starts_with(&['"', '"', '"']) {
                i += if chars[i] == '\\' { 2 } else { 1 };
            }
            i += 3;
            tokens.push(Token::Literal);
        } else if c == '"' || c == '\'' {
            i += 1;
            while i < chars.len() && chars[i] != c {
                i += if chars[i] == '\\' { 2 } else { 1 };
            }
            i += 1;
            tokens.push(Token::Literal);
        } else if is_word_char(c) {
            let start = i;
            while i < chars.len() && is_word_char(chars[i]) {
                i += 1;
            }
            tokens.push(Token::Word(chars[start..i].iter().collect()));
        } else {
            tokens.push(Token::Punct(c));
            i += 1;
        }
    }

    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn find_declaration(tokens: &[Token]) -> Option<Declaration> {
    tokens.iter().enumerate().find_map(|(i, token)| {
        let keyword = token.word().filter(|w| TYPE_KEYWORDS.contains(w))?;
        // `Foo.class` is an expression, not a declaration
        if i > 0 && tokens[i - 1].is_punct('.') {
            return None;
        }
        let name = tokens.get(i + 1)?.word()?;
        Some(Declaration {
            kind: DeclarationKind::from_keyword(keyword)?,
            name: name.to_string(),
            after_name: i + 2,
        })
    })
}

fn find_punct(tokens: &[Token], from: usize, c: char) -> Option<usize> {
    tokens
        .iter()
        .skip(from)
        .position(|t| t.is_punct(c))
        .map(|offset| from + offset)
}

/// Given the index of an opening bracket, return the index just past its
/// matching closer (or the end of input when unbalanced).
fn skip_group(tokens: &[Token], open: usize) -> usize {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::Punct('(' | '[' | '{') => depth += 1,
            Token::Punct(')' | ']' | '}') => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    tokens.len()
}

/// Tokens between the bracket at `open` and its matching closer, plus the
/// index just past the closer.
fn group_inner(tokens: &[Token], open: usize) -> (&[Token], usize) {
    let end = skip_group(tokens, open);
    let inner_end = match tokens.get(end.wrapping_sub(1)) {
        Some(Token::Punct(')' | ']' | '}')) if end > open + 1 => end - 1,
        _ => end,
    };
    (&tokens[open + 1..inner_end], end)
}

/// Given the index of an `@`, return the index just past the annotation.
fn skip_annotation(tokens: &[Token], at: usize) -> usize {
    let mut i = at + 1;
    if tokens.get(i).and_then(Token::word).is_some() {
        i += 1;
    }
    while tokens.get(i).is_some_and(|t| t.is_punct('.'))
        && tokens.get(i + 1).and_then(Token::word).is_some()
    {
        i += 2;
    }
    if tokens.get(i).is_some_and(|t| t.is_punct('(')) {
        i = skip_group(tokens, i);
    }
    i
}

/// Read enum constants from the start of an enum body, stopping at the `;`
/// that opens the member section.
fn enum_constants(body: &[Token]) -> Vec<String> {
    let mut constants = Vec::new();
    let mut i = 0;

    while i < body.len() {
        match &body[i] {
            Token::Punct('@') => i = skip_annotation(body, i),
            Token::Punct(';') => break,
            Token::Word(name) => {
                constants.push(name.clone());
                i += 1;
                if body.get(i).is_some_and(|t| t.is_punct('(')) {
                    i = skip_group(body, i);
                }
                if body.get(i).is_some_and(|t| t.is_punct('{')) {
                    i = skip_group(body, i);
                }
            }
            _ => i += 1,
        }
    }

    constants
}

/// Collect field names from the members of a type body.
fn member_fields(members: &[Token]) -> Vec<String> {
    let mut fields = Vec::new();
    let mut statement: Vec<Token> = Vec::new();
    let mut i = 0;

    while i < members.len() {
        match &members[i] {
            Token::Punct('@') => i = skip_annotation(members, i),
            Token::Punct('{') => {
                let end = skip_group(members, i);
                if statement.iter().any(|t| t.is_punct('=')) {
                    // Array initializer or lambda body
                    statement.push(Token::Literal);
                } else {
                    // Method body, initializer block or nested type
                    statement.clear();
                }
                i = end;
            }
            Token::Punct(c @ ('(' | '[')) => {
                statement.push(Token::Punct(*c));
                i = skip_group(members, i);
            }
            Token::Punct(';') => {
                fields.extend(declarator_names(&statement));
                statement.clear();
                i += 1;
            }
            token => {
                statement.push(token.clone());
                i += 1;
            }
        }
    }

    fields
}

/// Names declared by one field statement or record component list.
///
/// Groups are expected to be collapsed to their opening bracket. A `(` ahead
/// of any initializer marks a method declaration, which declares no fields.
fn declarator_names(statement: &[Token]) -> Vec<String> {
    let mut names = Vec::new();
    let mut last_word: Option<&str> = None;
    let mut in_initializer = false;
    let mut angle_depth = 0usize;
    let mut i = 0;

    while i < statement.len() {
        let token = &statement[i];
        if in_initializer {
            if token.is_punct(',') {
                in_initializer = false;
            }
            i += 1;
            continue;
        }
        match token {
            Token::Word(w) if w == "static" => return Vec::new(),
            Token::Word(w) => last_word = Some(w.as_str()),
            Token::Punct('@') => {
                i = skip_annotation(statement, i);
                continue;
            }
            Token::Punct('(') => return Vec::new(),
            Token::Punct('<') => angle_depth += 1,
            Token::Punct('>') => angle_depth = angle_depth.saturating_sub(1),
            Token::Punct(',') if angle_depth == 0 => {
                names.extend(last_word.take().map(str::to_string));
            }
            Token::Punct('=') if angle_depth == 0 => {
                names.extend(last_word.take().map(str::to_string));
                in_initializer = true;
            }
            _ => {}
        }
        i += 1;
    }

    if !in_initializer {
        names.extend(last_word.map(str::to_string));
    }
    names
}
