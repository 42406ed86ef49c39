// IPPcode23 Assembler
// Parser and XML translator for the IPPcode23 language
//
// Designed & written in 2023 for the IPP language toolchain

//! Analyzer converting normalized source lines into the validated
//! instruction sequence

use std::str::FromStr;

use pest::Parser;

use crate::ast::{Frame, Instruction, Opcode, Operand, OperandKind, Program, ValueType};
use crate::issues::{LineError, SyntaxError};
use crate::lexer::{self, Line};
use crate::{OperandParser, Rule};

impl Program {
    /// Runs the whole front end over the raw source: line normalization,
    /// the header check and per-line instruction analysis. The first
    /// violation, in source order, aborts the translation; no partial
    /// program is ever returned.
    pub fn parse(source: &str) -> Result<Program, LineError> {
        let lines = lexer::expect_header(lexer::normalize(source))?;
        let mut instructions = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let instruction = Instruction::analyze(line, index + 1)
                .map_err(|error| LineError::with(error, line.no))?;
            instructions.push(instruction);
        }
        Ok(Program { instructions })
    }
}

impl Instruction {
    /// Splits the line into tokens, resolves the opcode, checks the token
    /// count against the opcode arity and validates every operand slot.
    /// Mnemonic matching is case-insensitive: the first token is folded
    /// to upper case before lookup.
    fn analyze(line: &Line, order: usize) -> Result<Instruction, SyntaxError> {
        let mut tokens = line.text.split(' ');
        let mnemonic = tokens.next().expect("normalized lines are never empty");
        let opcode = Opcode::from_str(&mnemonic.to_uppercase())
            .map_err(|_| SyntaxError::UnknownMnemonic(mnemonic.to_owned()))?;

        let args = tokens.collect::<Vec<_>>();
        let slots = opcode.operands();
        if args.len() != slots.len() {
            return Err(SyntaxError::OperandWrongCount {
                operator: opcode,
                expected: opcode.arity(),
                found: args.len(),
            });
        }

        let mut operands = Vec::with_capacity(slots.len());
        for (kind, token) in slots.iter().zip(args) {
            operands.push(Operand::analyze(*kind, token)?);
        }

        Ok(Instruction { order, opcode, operands })
    }
}

impl Operand {
    fn analyze(kind: OperandKind, token: &str) -> Result<Operand, SyntaxError> {
        match kind {
            OperandKind::Var => Operand::var(token),
            OperandKind::Symb => Operand::symb(token),
            OperandKind::Label => Operand::label(token),
            OperandKind::Type => Operand::keyword(token),
        }
    }

    /// Validates a frame-prefixed variable token (`GF@name`)
    pub fn var(token: &str) -> Result<Operand, SyntaxError> {
        OperandParser::parse(Rule::var_token, token)
            .map_err(|_| SyntaxError::WrongVariable(token.to_owned()))?;
        let (prefix, name) = token.split_once('@').expect("var rule guarantees the separator");
        let frame = Frame::from_str(prefix).expect("var rule admits frame prefixes only");
        Ok(Operand::Var { frame, name: name.to_owned() })
    }

    /// Validates a bare identifier naming a jump target
    pub fn label(token: &str) -> Result<Operand, SyntaxError> {
        OperandParser::parse(Rule::label_token, token)
            .map_err(|_| SyntaxError::WrongLabel(token.to_owned()))?;
        Ok(Operand::Label(token.to_owned()))
    }

    /// Validates the type keyword operand of READ
    pub fn keyword(token: &str) -> Result<Operand, SyntaxError> {
        ValueType::from_str(token)
            .map(Operand::Type)
            .map_err(|_| SyntaxError::WrongType(token.to_owned()))
    }

    /// Validates a constant-or-variable token. The token is split on its
    /// first `@`: frame prefixes delegate to the variable grammar on the
    /// whole token, value type prefixes select the literal grammar the
    /// payload must satisfy. A token without `@` is a prefix with an
    /// empty payload, so bare `string` is a valid empty string constant.
    pub fn symb(token: &str) -> Result<Operand, SyntaxError> {
        let (prefix, value) = match token.split_once('@') {
            Some((prefix, value)) => (prefix, value),
            None => (token, ""),
        };
        if Frame::from_str(prefix).is_ok() {
            return Operand::var(token);
        }
        let ty = ValueType::from_str(prefix)
            .map_err(|_| SyntaxError::WrongSymbolPrefix(token.to_owned()))?;
        let rule = match ty {
            ValueType::int => Rule::int_token,
            ValueType::bool => Rule::bool_token,
            ValueType::string => Rule::str_token,
            ValueType::nil => Rule::nil_token,
        };
        OperandParser::parse(rule, value)
            .map_err(|_| SyntaxError::WrongSymbolValue { ty, value: value.to_owned() })?;
        Ok(Operand::Lit { ty, value: value.to_owned() })
    }
}
