// IPPcode23 Assembler
// Parser and XML translator for the IPPcode23 language
//
// Designed & written in 2023 for the IPP language toolchain

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use ippasm::{BuildError, Document, MainError, Program};

#[derive(Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Parser)]
#[clap(name = "ippasm", bin_name = "ippasm", author, version, about)]
pub struct Args {
    /// Source file to translate; standard input is read when omitted
    pub file: Option<PathBuf>,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(10);
        }
        Err(err) => {
            // --help and --version land here
            let _ = err.print();
            process::exit(0);
        }
    };
    match run(args) {
        Ok(document) => print!("{}", document),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    }
}

fn run(args: Args) -> Result<Document, MainError> {
    let source = read_source(&args)?;
    let program = Program::parse(&source)?;
    Ok(Document::with(&program))
}

fn read_source(args: &Args) -> Result<String, BuildError> {
    match &args.file {
        Some(file) => fs::read_to_string(file).map_err(|err| BuildError::FileNotFound {
            file: file.display().to_string(),
            details: Box::new(err),
        }),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| BuildError::StdinNoAccess { details: Box::new(err) })?;
            Ok(source)
        }
    }
}
