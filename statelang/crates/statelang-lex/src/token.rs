//! Token definitions for statelang.
//!
//! A [`Token`] couples its kind and payload in a single enum variant, so the
//! payload type can never disagree with the kind. Keywords and operators are
//! closed sets with fixed spelling tables, see [`KeywordKind::ALL`] and
//! [`OperatorKind::ALL`].

use std::fmt;

use crate::cursor::Position;

/// A lexical token produced by the [`Lexer`](crate::Lexer).
///
/// Tokens own their payload and hold no reference back into the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A double-quoted string with escapes already decoded.
    StringLiteral(String),

    /// A decimal integer that fits in 32 signed bits.
    IntLiteral(i32),

    /// A decimal literal with a fractional part, e.g. `123.5`.
    FloatLiteral(f32),

    /// A reserved word.
    Keyword(KeywordKind),

    /// Any other `[A-Za-z_][A-Za-z0-9_]*` spelling.
    Identifier(String),

    /// An operator, see [`OperatorKind`].
    Operator(OperatorKind),
}

impl Token {
    /// Short human-readable name of the token's shape.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::StringLiteral(_) => "string literal",
            Token::IntLiteral(_) => "integer literal",
            Token::FloatLiteral(_) => "float literal",
            Token::Keyword(_) => "keyword",
            Token::Identifier(_) => "identifier",
            Token::Operator(_) => "operator",
        }
    }

    /// Returns the keyword kind if this is a keyword token.
    pub fn as_keyword(&self) -> Option<KeywordKind> {
        match self {
            Token::Keyword(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the operator kind if this is an operator token.
    pub fn as_operator(&self) -> Option<OperatorKind> {
        match self {
            Token::Operator(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns the identifier text if this is an identifier token.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this token is the given keyword.
    pub fn is_keyword(&self, kind: KeywordKind) -> bool {
        self.as_keyword() == Some(kind)
    }

    /// Returns true if this token is the given operator.
    pub fn is_operator(&self, kind: OperatorKind) -> bool {
        self.as_operator() == Some(kind)
    }
}

/// Renders the token in a form the lexer accepts again.
///
/// String literals are re-quoted and re-escaped; floats always carry a
/// fractional part so they are not read back as integers.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::StringLiteral(text) => {
                f.write_str("\"")?;
                for c in text.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        '\0' => f.write_str("\\0")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            Token::IntLiteral(value) => write!(f, "{}", value),
            Token::FloatLiteral(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{:.1}", value)
                } else {
                    write!(f, "{}", value)
                }
            }
            Token::Keyword(kind) => f.write_str(kind.as_str()),
            Token::Identifier(name) => f.write_str(name),
            Token::Operator(kind) => f.write_str(kind.as_str()),
        }
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The scanned token.
    pub token: Token,
    /// Where the token starts in the source.
    pub start: Position,
}

/// Reserved words of statelang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordKind {
    /// `bool`
    Bool,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `else`
    Else,
    /// `enum`
    Enum,
    /// `false`
    False,
    /// `float`
    Float,
    /// `function`
    Function,
    /// `if`
    If,
    /// `mutator`
    Mutator,
    /// `state`
    State,
    /// `string`
    String,
    /// `struct`
    Struct,
    /// `switch`
    Switch,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,
}

impl KeywordKind {
    /// Every keyword, in declaration order.
    pub const ALL: [KeywordKind; 19] = [
        KeywordKind::Bool,
        KeywordKind::Break,
        KeywordKind::Case,
        KeywordKind::Continue,
        KeywordKind::Default,
        KeywordKind::Else,
        KeywordKind::Enum,
        KeywordKind::False,
        KeywordKind::Float,
        KeywordKind::Function,
        KeywordKind::If,
        KeywordKind::Mutator,
        KeywordKind::State,
        KeywordKind::String,
        KeywordKind::Struct,
        KeywordKind::Switch,
        KeywordKind::True,
        KeywordKind::Var,
        KeywordKind::While,
    ];

    /// Looks up a keyword by its exact, case-sensitive spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use statelang_lex::KeywordKind;
    ///
    /// assert_eq!(KeywordKind::from_spelling("mutator"), Some(KeywordKind::Mutator));
    /// assert_eq!(KeywordKind::from_spelling("Mutator"), None);
    /// assert_eq!(KeywordKind::from_spelling("mut"), None);
    /// ```
    pub fn from_spelling(text: &str) -> Option<KeywordKind> {
        let kind = match text {
            "bool" => KeywordKind::Bool,
            "break" => KeywordKind::Break,
            "case" => KeywordKind::Case,
            "continue" => KeywordKind::Continue,
            "default" => KeywordKind::Default,
            "else" => KeywordKind::Else,
            "enum" => KeywordKind::Enum,
            "false" => KeywordKind::False,
            "float" => KeywordKind::Float,
            "function" => KeywordKind::Function,
            "if" => KeywordKind::If,
            "mutator" => KeywordKind::Mutator,
            "state" => KeywordKind::State,
            "string" => KeywordKind::String,
            "struct" => KeywordKind::Struct,
            "switch" => KeywordKind::Switch,
            "true" => KeywordKind::True,
            "var" => KeywordKind::Var,
            "while" => KeywordKind::While,
            _ => return None,
        };
        Some(kind)
    }

    /// The source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordKind::Bool => "bool",
            KeywordKind::Break => "break",
            KeywordKind::Case => "case",
            KeywordKind::Continue => "continue",
            KeywordKind::Default => "default",
            KeywordKind::Else => "else",
            KeywordKind::Enum => "enum",
            KeywordKind::False => "false",
            KeywordKind::Float => "float",
            KeywordKind::Function => "function",
            KeywordKind::If => "if",
            KeywordKind::Mutator => "mutator",
            KeywordKind::State => "state",
            KeywordKind::String => "string",
            KeywordKind::Struct => "struct",
            KeywordKind::Switch => "switch",
            KeywordKind::True => "true",
            KeywordKind::Var => "var",
            KeywordKind::While => "while",
        }
    }
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators of statelang.
///
/// `+` and `-` are not split into unary and binary forms here; the parser
/// decides which one it is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorKind {
    /// `!`
    Not,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `+`
    AddOrPositive,
    /// `-`
    SubtractOrNegative,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `=`
    Assignment,
}

impl OperatorKind {
    /// Every operator, in declaration order.
    pub const ALL: [OperatorKind; 15] = [
        OperatorKind::Not,
        OperatorKind::Multiply,
        OperatorKind::Divide,
        OperatorKind::Modulo,
        OperatorKind::AddOrPositive,
        OperatorKind::SubtractOrNegative,
        OperatorKind::LessThan,
        OperatorKind::LessThanOrEqual,
        OperatorKind::GreaterThan,
        OperatorKind::GreaterThanOrEqual,
        OperatorKind::Equal,
        OperatorKind::NotEqual,
        OperatorKind::And,
        OperatorKind::Or,
        OperatorKind::Assignment,
    ];

    /// Looks up an operator by its exact spelling.
    pub fn from_spelling(text: &str) -> Option<OperatorKind> {
        let kind = match text {
            "!" => OperatorKind::Not,
            "*" => OperatorKind::Multiply,
            "/" => OperatorKind::Divide,
            "%" => OperatorKind::Modulo,
            "+" => OperatorKind::AddOrPositive,
            "-" => OperatorKind::SubtractOrNegative,
            "<" => OperatorKind::LessThan,
            "<=" => OperatorKind::LessThanOrEqual,
            ">" => OperatorKind::GreaterThan,
            ">=" => OperatorKind::GreaterThanOrEqual,
            "==" => OperatorKind::Equal,
            "!=" => OperatorKind::NotEqual,
            "&&" => OperatorKind::And,
            "||" => OperatorKind::Or,
            "=" => OperatorKind::Assignment,
            _ => return None,
        };
        Some(kind)
    }

    /// The source spelling of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorKind::Not => "!",
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
            OperatorKind::Modulo => "%",
            OperatorKind::AddOrPositive => "+",
            OperatorKind::SubtractOrNegative => "-",
            OperatorKind::LessThan => "<",
            OperatorKind::LessThanOrEqual => "<=",
            OperatorKind::GreaterThan => ">",
            OperatorKind::GreaterThanOrEqual => ">=",
            OperatorKind::Equal => "==",
            OperatorKind::NotEqual => "!=",
            OperatorKind::And => "&&",
            OperatorKind::Or => "||",
            OperatorKind::Assignment => "=",
        }
    }

    /// Returns true if `c` can begin an operator.
    pub fn is_start(c: char) -> bool {
        matches!(
            c,
            '-' | '!' | '*' | '/' | '%' | '+' | '<' | '>' | '=' | '&' | '|'
        )
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
