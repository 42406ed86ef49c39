// IPPcode23 Assembler
// Parser and XML translator for the IPPcode23 language
//
// Designed & written in 2023 for the IPP language toolchain

//! XML interchange document handed over to the downstream interpreter

use std::fmt::{self, Display, Formatter};

use crate::ast::Program;

/// Dialect identifier carried by the document root
pub const LANGUAGE: &str = "IPPcode23";

/// A node of the interchange document tree
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    content: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl ToString) -> Element {
        Element {
            name: name.to_string(),
            attributes: vec![],
            content: String::new(),
            children: vec![],
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Element {
        self.attributes.push((name.to_owned(), value.to_string()));
        self
    }

    pub fn content(mut self, text: impl ToString) -> Element {
        self.content = text.to_string();
        self
    }

    pub fn child(&mut self, element: Element) { self.children.push(element) }

    fn write(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}<{}", "", self.name, indent = depth * 2)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if self.content.is_empty() && self.children.is_empty() {
            return writeln!(f, "/>");
        }
        write!(f, ">{}", escape(&self.content))?;
        if !self.children.is_empty() {
            writeln!(f)?;
            for child in &self.children {
                child.write(f, depth + 1)?;
            }
            write!(f, "{:indent$}", "", indent = depth * 2)?;
        }
        writeln!(f, "</{}>", self.name)
    }
}

/// The complete interchange document: one `program` root with a
/// `language` attribute, one `instruction` element per instruction in
/// program order and one `argN` element per operand. The `Display` impl
/// performs the serialization, escaping markup metacharacters in text
/// content and attribute values.
#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn with(program: &Program) -> Document {
        let mut root = Element::new("program").attr("language", LANGUAGE);
        for instruction in &program.instructions {
            let mut element = Element::new("instruction")
                .attr("order", instruction.order)
                .attr("opcode", instruction.opcode);
            for (pos, operand) in instruction.operands.iter().enumerate() {
                element.child(
                    Element::new(format!("arg{}", pos + 1))
                        .attr("type", operand.type_name())
                        .content(operand),
                );
            }
            root.child(element);
        }
        Document { root }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        self.root.write(f, 0)
    }
}

/// Escapes the five XML metacharacters
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
