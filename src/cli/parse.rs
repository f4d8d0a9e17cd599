use randkey::Mode;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    InvalidMode(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::InvalidMode(s) => {
                write!(f, "Invalid mode: {} (expected password, hex or base64)", s)
            }
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-a" | "--avoid-ambiguous" => flags.avoid_ambiguous = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-symbols" => flags.no_symbols = true,
            "--hex" => flags.mode = Some(Mode::KeyHex),
            "--base64" => flags.mode = Some(Mode::KeyBase64),
            "-m" | "--mode" => {
                let value = value_of(args, &mut i)?;
                flags.mode = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidMode(value.to_string()))?,
                );
            }
            "-l" | "--length" => flags.length = Some(number_of(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(number_of(args, &mut i)?),
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number_of(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let value = value_of(args, i)?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}
