// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Abstract Syntax Tree (AST) node shapes for Monkey.
//!
//! Only the shapes needed by a first parser pass exist: the program root,
//! the `let` binding statement and the identifier expression. Every node
//! keeps the token it was built from.

use crate::lexer::Token;

/// Common behaviour of every AST node.
pub trait Node {
    /// Returns the literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// A complete Monkey program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The statements in the program
    pub statements: Vec<Statement>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

/// A Monkey statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// let binding
    Let(LetStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
        }
    }
}

/// A Monkey expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Identifier reference
    Identifier(Identifier),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    /// The name being bound
    pub name: Identifier,
    /// The bound value, absent until expressions are parsed
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.text
    }
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The `Ident` token
    pub token: Token,
    /// The name of the identifier
    pub value: String,
}

impl Identifier {
    /// Creates an identifier node from its token.
    pub fn from_token(token: Token) -> Self {
        let value = token.text.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.text
    }
}
