// IPPcode23 Assembler
// Parser and XML translator for the IPPcode23 language
//
// Designed & written in 2023 for the IPP language toolchain

//! Data types for the validated program representation

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Instruction mnemonics of the IPPcode23 instruction set
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(Debug)]
#[allow(non_camel_case_types)]
pub enum Opcode {
    MOVE,
    CREATEFRAME,
    PUSHFRAME,
    POPFRAME,
    DEFVAR,
    CALL,
    RETURN,
    PUSHS,
    POPS,
    ADD,
    SUB,
    MUL,
    IDIV,
    LT,
    GT,
    EQ,
    AND,
    OR,
    NOT,
    INT2CHAR,
    STRI2INT,
    READ,
    WRITE,
    CONCAT,
    STRLEN,
    GETCHAR,
    SETCHAR,
    TYPE,
    LABEL,
    JUMP,
    JUMPIFEQ,
    JUMPIFNEQ,
    EXIT,
    DPRINT,
    BREAK,
}

impl Opcode {
    pub const fn all() -> [Opcode; 35] {
        use Opcode::*;
        [
            MOVE, CREATEFRAME, PUSHFRAME, POPFRAME, DEFVAR, CALL, RETURN, PUSHS, POPS, ADD, SUB,
            MUL, IDIV, LT, GT, EQ, AND, OR, NOT, INT2CHAR, STRI2INT, READ, WRITE, CONCAT, STRLEN,
            GETCHAR, SETCHAR, TYPE, LABEL, JUMP, JUMPIFEQ, JUMPIFNEQ, EXIT, DPRINT, BREAK,
        ]
    }

    /// Operand shape of the instruction: the expected grammatical
    /// category for every positional slot. Arity is the slice length.
    pub const fn operands(self) -> &'static [OperandKind] {
        match self {
            Opcode::CREATEFRAME
            | Opcode::PUSHFRAME
            | Opcode::POPFRAME
            | Opcode::RETURN
            | Opcode::BREAK => &[],

            Opcode::DEFVAR | Opcode::POPS => &[OperandKind::Var],

            Opcode::PUSHS | Opcode::WRITE | Opcode::EXIT | Opcode::DPRINT => &[OperandKind::Symb],

            Opcode::CALL | Opcode::LABEL | Opcode::JUMP => &[OperandKind::Label],

            Opcode::READ => &[OperandKind::Var, OperandKind::Type],

            Opcode::MOVE | Opcode::NOT | Opcode::INT2CHAR | Opcode::STRLEN | Opcode::TYPE => {
                &[OperandKind::Var, OperandKind::Symb]
            }

            Opcode::ADD
            | Opcode::SUB
            | Opcode::MUL
            | Opcode::IDIV
            | Opcode::LT
            | Opcode::GT
            | Opcode::EQ
            | Opcode::AND
            | Opcode::OR
            | Opcode::STRI2INT
            | Opcode::CONCAT
            | Opcode::GETCHAR
            | Opcode::SETCHAR => &[OperandKind::Var, OperandKind::Symb, OperandKind::Symb],

            Opcode::JUMPIFEQ | Opcode::JUMPIFNEQ => {
                &[OperandKind::Label, OperandKind::Symb, OperandKind::Symb]
            }
        }
    }

    pub fn arity(self) -> u8 { self.operands().len() as u8 }
}

impl FromStr for Opcode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for m in Opcode::all() {
            if m.to_string().as_str() == s {
                return Ok(m);
            }
        }
        Err(())
    }
}

/// Grammatical category of an instruction argument
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum OperandKind {
    /// Frame-prefixed variable
    Var,
    /// Constant or variable
    Symb,
    /// Jump target name
    Label,
    /// Type keyword (second operand of READ)
    Type,
}

/// Variable frame designator
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(Debug)]
#[allow(non_camel_case_types)]
pub enum Frame {
    GF,
    LF,
    TF,
}

impl Frame {
    pub const fn all() -> [Frame; 3] {
        use Frame::*;
        [GF, LF, TF]
    }
}

impl FromStr for Frame {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for frame in Frame::all() {
            if frame.to_string().as_str() == s {
                return Ok(frame);
            }
        }
        Err(())
    }
}

/// Value type of a constant, also usable as a bare type keyword
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Display)]
#[display(Debug)]
#[allow(non_camel_case_types)]
pub enum ValueType {
    int,
    bool,
    string,
    nil,
}

impl ValueType {
    pub const fn all() -> [ValueType; 4] {
        use ValueType::*;
        [int, bool, string, nil]
    }
}

impl FromStr for ValueType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for ty in ValueType::all() {
            if ty.to_string().as_str() == s {
                return Ok(ty);
            }
        }
        Err(())
    }
}

/// A validated instruction argument. Every operand carries exactly one of
/// the four tags; the prefix before `@` disambiguates variables from
/// constants inside the symb grammar.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub enum Operand {
    Var { frame: Frame, name: String },
    Lit { ty: ValueType, value: String },
    Label(String),
    Type(ValueType),
}

impl Operand {
    pub fn description(&self) -> &'static str {
        match self {
            Operand::Var { .. } => "variable",
            Operand::Lit { .. } => "literal",
            Operand::Label(_) => "label",
            Operand::Type(_) => "type keyword",
        }
    }

    /// Value of the `type` attribute in the interchange document
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Var { .. } => "var",
            Operand::Label(_) => "label",
            Operand::Type(_) => "type",
            Operand::Lit { ty: ValueType::int, .. } => "int",
            Operand::Lit { ty: ValueType::bool, .. } => "bool",
            Operand::Lit { ty: ValueType::string, .. } => "string",
            Operand::Lit { ty: ValueType::nil, .. } => "nil",
        }
    }
}

/// Displays the operand in its interchange text form: the full
/// `FRAME@identifier` token for variables, the bare payload for
/// constants, the token verbatim for labels and type keywords.
impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Var { frame, name } => write!(f, "{}@{}", frame, name),
            Operand::Lit { value, .. } => f.write_str(value),
            Operand::Label(name) => f.write_str(name),
            Operand::Type(ty) => write!(f, "{}", ty),
        }
    }
}

/// A single validated instruction. `order` is the 1-based position among
/// the instruction lines of the source, dense and monotonic; the
/// downstream interpreter uses it as the execution index.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Instruction {
    pub order: usize,
    pub opcode: Opcode,
    pub operands: Vec<Operand>,
}

/// The validated program: instructions in source order
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}
