// IPPcode23 Assembler
// Parser and XML translator for the IPPcode23 language
//
// Designed & written in 2023 for the IPP language toolchain

#[macro_use]
extern crate pest_derive;
#[macro_use]
extern crate amplify;

mod analyzer;
pub mod ast;
pub mod document;
pub mod issues;
pub mod lexer;

use std::error::Error;

pub use crate::ast::Program;
pub use crate::document::Document;
pub use crate::issues::{LineError, SyntaxError};

/// Lexical validator for operand tokens; the rules live in `grammar.pest`
#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct OperandParser;

#[derive(Debug, Display, Error, From)]
pub enum MainError {
    #[display("\x1B[1;31mError:\x1B[0m {0}")]
    #[from]
    Access(BuildError),

    #[display(
        "{0}\n\x1B[1;31mError:\x1B[0m could not translate the provided source due to a previous \
         syntax error"
    )]
    #[from]
    Syntax(LineError),
}

impl MainError {
    pub fn exit_code(&self) -> i32 {
        match self {
            MainError::Access(_) => 11,
            MainError::Syntax(err) => err.exit_code(),
        }
    }
}

#[derive(Debug, Display, Error)]
#[display(doc_comments)]
pub enum BuildError {
    /// no file named `{file}`
    /// \n
    /// details: {details}
    FileNotFound { file: String, details: Box<dyn Error> },

    /// unable to read the source program from standard input
    /// \n
    /// details: {details}
    StdinNoAccess { details: Box<dyn Error> },
}
