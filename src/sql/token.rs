//! SQL tokens - the atomic units of SQL output.
//!
//! Tokens are dialect-agnostic; serialization applies dialect quoting rules.

use super::dialect::Dialect;

/// Every element that can appear in the SQL this crate renders.
///
/// Adding a variant forces every serialization site to handle it
/// (exhaustive matching).
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // === Keywords ===
    Select,
    From,
    Where,
    And,
    Or,
    Not,
    As,
    In,
    Between,
    IsNull,
    IsNotNull,
    GroupBy,
    OrderBy,
    Asc,
    Desc,
    Limit,
    Distinct,
    Case,
    When,
    Then,
    Else,
    End,

    // === DDL keywords ===
    Create,
    Table,
    Index,
    Unique,
    If,
    Exists,
    On,
    Primary,
    Key,
    Null,
    Default,
    Check,

    // === Punctuation ===
    Comma,
    Dot,
    Star,
    LParen,
    RParen,

    // === Operators ===
    Eq,
    Ne,
    Lt,
    Gt,
    Lte,
    Gte,
    Plus,
    Minus,
    Mul,
    Div,

    // === Whitespace / formatting ===
    Space,
    Newline,
    Indent(usize),

    // === Dynamic content ===
    /// Simple identifier (table, column, alias).
    Ident(String),
    /// Qualified identifier: schema.table or just table.
    QualifiedIdent {
        schema: Option<String>,
        name: String,
    },
    LitInt(i64),
    LitFloat(f64),
    LitString(String),
    LitBool(bool),
    LitNull,

    /// Function name, rendered uppercase.
    FunctionName(String),

    /// Raw SQL passed through without escaping. Never receives user input;
    /// only static fragments such as data type spellings.
    Raw(String),
}

impl Token {
    /// Serialize this token to a string for the given dialect.
    pub fn serialize(&self, dialect: Dialect) -> String {
        match self {
            Token::Select => "SELECT".into(),
            Token::From => "FROM".into(),
            Token::Where => "WHERE".into(),
            Token::And => "AND".into(),
            Token::Or => "OR".into(),
            Token::Not => "NOT".into(),
            Token::As => "AS".into(),
            Token::In => "IN".into(),
            Token::Between => "BETWEEN".into(),
            Token::IsNull => "IS NULL".into(),
            Token::IsNotNull => "IS NOT NULL".into(),
            Token::GroupBy => "GROUP BY".into(),
            Token::OrderBy => "ORDER BY".into(),
            Token::Asc => "ASC".into(),
            Token::Desc => "DESC".into(),
            Token::Limit => "LIMIT".into(),
            Token::Distinct => "DISTINCT".into(),
            Token::Case => "CASE".into(),
            Token::When => "WHEN".into(),
            Token::Then => "THEN".into(),
            Token::Else => "ELSE".into(),
            Token::End => "END".into(),

            Token::Create => "CREATE".into(),
            Token::Table => "TABLE".into(),
            Token::Index => "INDEX".into(),
            Token::Unique => "UNIQUE".into(),
            Token::If => "IF".into(),
            Token::Exists => "EXISTS".into(),
            Token::On => "ON".into(),
            Token::Primary => "PRIMARY".into(),
            Token::Key => "KEY".into(),
            Token::Null => "NULL".into(),
            Token::Default => "DEFAULT".into(),
            Token::Check => "CHECK".into(),

            Token::Comma => ",".into(),
            Token::Dot => ".".into(),
            Token::Star => "*".into(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),

            Token::Eq => "=".into(),
            Token::Ne => "<>".into(),
            Token::Lt => "<".into(),
            Token::Gt => ">".into(),
            Token::Lte => "<=".into(),
            Token::Gte => ">=".into(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Mul => "*".into(),
            Token::Div => "/".into(),

            Token::Space => " ".into(),
            Token::Newline => "\n".into(),
            Token::Indent(n) => "  ".repeat(*n),

            Token::Ident(name) => dialect.quote_identifier(name),
            Token::QualifiedIdent { schema, name } => match schema {
                Some(s) => format!(
                    "{}.{}",
                    dialect.quote_identifier(s),
                    dialect.quote_identifier(name)
                ),
                None => dialect.quote_identifier(name),
            },
            Token::LitInt(n) => n.to_string(),
            Token::LitFloat(f) => {
                if !f.is_finite() {
                    panic!("Cannot serialize non-finite float to SQL");
                }
                let mut buffer = ryu::Buffer::new();
                buffer.format(*f).to_string()
            }
            Token::LitString(s) => dialect.quote_string(s),
            Token::LitBool(b) => dialect.format_bool(*b).into(),
            Token::LitNull => "NULL".into(),

            Token::FunctionName(name) => name.to_uppercase(),

            Token::Raw(s) => s.clone(),
        }
    }
}

/// A stream of tokens that can be serialized to SQL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self { tokens: vec![] }
    }

    /// Push a single token.
    pub fn push(&mut self, token: Token) -> &mut Self {
        self.tokens.push(token);
        self
    }

    /// Extend with multiple tokens.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = Token>) -> &mut Self {
        self.tokens.extend(tokens);
        self
    }

    /// Append another token stream.
    pub fn append(&mut self, other: &TokenStream) -> &mut Self {
        self.tokens.extend(other.tokens.iter().cloned());
        self
    }

    /// Serialize all tokens to a SQL string.
    pub fn serialize(&self, dialect: Dialect) -> String {
        self.tokens.iter().map(|t| t.serialize(dialect)).collect()
    }

    // Convenience methods for common tokens
    pub fn space(&mut self) -> &mut Self {
        self.push(Token::Space)
    }
    pub fn newline(&mut self) -> &mut Self {
        self.push(Token::Newline)
    }
    pub fn indent(&mut self, n: usize) -> &mut Self {
        self.push(Token::Indent(n))
    }
    pub fn comma(&mut self) -> &mut Self {
        self.push(Token::Comma)
    }
    pub fn lparen(&mut self) -> &mut Self {
        self.push(Token::LParen)
    }
    pub fn rparen(&mut self) -> &mut Self {
        self.push(Token::RParen)
    }
}
