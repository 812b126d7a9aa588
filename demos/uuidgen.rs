//! Simple command that prints one or '-n count' UUIDs of a chosen version and format
//!
//! Set `RUST_LOG=rfc4122=debug` to see how the node and the clock sequence are chosen.

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::{Format, GenerationRequest, Representation};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "[-v version] [-f bin|str|txt] [-n count] [namespace name]";

struct Options {
    version: u8,
    format: Format,
    count: usize,
    namespace_and_name: Option<(String, String)>,
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} {}",
                    program.as_deref().unwrap_or("uuidgen"),
                    USAGE
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let pair = opts
        .namespace_and_name
        .as_ref()
        .map(|(ns, name)| (ns.as_str(), name.as_bytes()));
    let request = match GenerationRequest::from_args(opts.version, pair) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("Error: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        match rfc4122::uuid(&request, opts.format) {
            Ok(e) => emit(&mut buf, &e)?,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Writes raw bytes for `bin`, one line for `str`, and the dump, which ends in a line break, as
/// is for `txt`.
fn emit(out: &mut impl Write, e: &Representation) -> io::Result<()> {
    match e {
        Representation::Bin(bytes) => out.write_all(bytes),
        Representation::Str(text) => writeln!(out, "{}", text),
        Representation::Txt(text) => write!(out, "{}", text),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut version: Option<u8> = None;
    let mut format: Option<Format> = None;
    let mut count: Option<usize> = None;
    let mut positional = Vec::new();
    while let Some(arg) = args.next() {
        if !arg.starts_with('-') {
            positional.push(arg);
            continue;
        }
        let opt = match arg.as_str() {
            "-v" => 'v',
            "-f" => 'f',
            "-n" => 'n',
            _ => return Err(format!("unrecognized option '{}'", arg)),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{}' missing", opt));
        };
        let invalid = || format!("invalid argument to option '{}': '{}'", opt, value);
        let given_twice = match opt {
            'v' => version.replace(value.parse().map_err(|_| invalid())?).is_some(),
            'f' => format.replace(value.parse().map_err(|_| invalid())?).is_some(),
            _ => count.replace(value.parse().map_err(|_| invalid())?).is_some(),
        };
        if given_twice {
            return Err(format!("option '{}' given more than once", opt));
        }
    }

    let mut positional = positional.into_iter();
    let namespace_and_name = match (positional.next(), positional.next(), positional.next()) {
        (None, _, _) => None,
        (Some(ns), Some(name), None) => Some((ns, name)),
        (Some(_), None, _) => return Err("namespace given without name".to_owned()),
        (Some(_), Some(_), Some(arg)) => return Err(format!("unexpected argument '{}'", arg)),
    };

    // name-based versions are implied by a namespace and name
    let version = version.unwrap_or(if namespace_and_name.is_some() { 5 } else { 1 });
    Ok(Options {
        version,
        format: format.unwrap_or_default(),
        count: count.unwrap_or(1),
        namespace_and_name,
    })
}

#[cfg(test)]
mod tests {
    use super::{emit, parse_args};
    use rfc4122::{Format, Uuid};

    /// Emits each format without extra blank lines
    #[test]
    fn emits_each_format_without_extra_blank_lines() {
        let e = Uuid::NAMESPACE_DNS;

        let mut out = Vec::new();
        emit(&mut out, &e.export(Format::Bin)).unwrap();
        assert_eq!(&out, e.as_bytes());

        let mut out = Vec::new();
        emit(&mut out, &e.export(Format::Str)).unwrap();
        assert_eq!(out, b"6ba7b810-9dad-11d1-80b4-00c04fd430c8\n");

        let mut out = Vec::new();
        emit(&mut out, &e.export(Format::Txt)).unwrap();
        emit(&mut out, &e.export(Format::Txt)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("encode: STR:").count(), 2);
        assert!(!text.contains("\n\n"));
    }

    /// Parses options and positional arguments
    #[test]
    fn parses_options_and_positional_arguments() {
        let args = ["-f", "txt", "-n", "3", "ns:DNS", "www.example.com"];
        let opts = parse_args(args.iter().map(|e| e.to_string())).unwrap();
        assert_eq!(opts.version, 5);
        assert_eq!(opts.format, Format::Txt);
        assert_eq!(opts.count, 3);

        let opts = parse_args(std::iter::empty()).unwrap();
        assert_eq!((opts.version, opts.format, opts.count), (1, Format::Str, 1));

        let cases: [&[&str]; 5] = [
            &["-x"],
            &["-n"],
            &["-n", "a"],
            &["-v", "1", "-v", "4"],
            &["ns:DNS"],
        ];
        for args in cases {
            assert!(parse_args(args.iter().map(|e| e.to_string())).is_err());
        }
    }
}
