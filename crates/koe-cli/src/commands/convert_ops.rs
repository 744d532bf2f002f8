use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::process;

use koe_core::converter::explain::{explain, format_text};
use koe_core::tokenizer::Tokenizer;
use koe_core::Converter;

use super::{build_converter, CliError};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Convert every line of `input`, writing one markup line per input line.
/// Returns the number of lines converted.
pub fn convert_lines<T, R, W>(
    converter: &Converter<T>,
    input: R,
    mut output: W,
) -> Result<usize, CliError>
where
    T: Tokenizer,
    R: BufRead,
    W: Write,
{
    let mut count = 0;
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", converter.convert(&line)?)?;
        count += 1;
    }
    output.flush()?;
    Ok(count)
}

pub fn convert_cmd(dict: Option<&Path>, text: Option<&str>) {
    let converter = die!(build_converter(dict), "Error: {}");
    match text {
        Some(text) => {
            let koe = die!(converter.convert(text), "Error: {}");
            println!("{koe}");
        }
        None => {
            let stdin = io::stdin().lock();
            let stdout = BufWriter::new(io::stdout().lock());
            die!(convert_lines(&converter, stdin, stdout), "Error: {}");
        }
    }
}

pub fn explain_cmd(dict: Option<&Path>, text: &str, json: bool) {
    let converter = die!(build_converter(dict), "Error: {}");
    let result = die!(explain(&converter, text), "Error: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&result), "Error: {}");
        println!("{out}");
    } else {
        print!("{}", format_text(&result));
    }
}
