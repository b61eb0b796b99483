//! unosf CLI - Open Screenplay Format to plain text tool

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use unosf::detect::has_extension;
use unosf::{parse_file, parse_reader, Document, RenderOptions};

const LICENSE: &str = "MIT License

Copyright (c) iyulab

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

const EXAMPLES: &str = "Examples:
  Convert screenplay.osf into screenplay.txt:
    unosf -i screenplay.osf -o screenplay.txt

  Read from standard input:
    cat screenplay.osf | unosf > screenplay.txt

  Unpack a Fade In project to OSF XML:
    unosf -i screenplay.fadein --xml -o screenplay.osf";

const QUIET_ENV: &str = "UNOSF_QUIET";

#[derive(Parser)]
#[command(name = "unosf")]
#[command(author = "iyulab")]
#[command(about = "Convert Open Screenplay Format and Fade In files to plain text", long_about = None)]
#[command(after_help = EXAMPLES)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Input file (.osf, .xml, .fadein); stdin if not specified
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Add a trailing newline
    #[arg(long, visible_alias = "nl")]
    newline: bool,

    /// Suppress error messages
    #[arg(long, env = QUIET_ENV)]
    quiet: bool,

    /// Write normalized OSF XML instead of plain text
    #[arg(long)]
    xml: bool,

    /// Leave the title page out of the text
    #[arg(long)]
    no_title_page: bool,

    /// Display license
    #[arg(short, long)]
    license: bool,

    /// Display version
    #[arg(short, long)]
    version: bool,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if e.use_stderr()
                && quiet_requested(std::env::args_os(), std::env::var_os(QUIET_ENV)) =>
        {
            std::process::exit(e.exit_code());
        }
        Err(e) => e.exit(),
    };
    let quiet = cli.quiet;

    if let Err(e) = run(cli) {
        if !quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

/// Quiet mode as clap would read it, for errors raised before parsing succeeds.
fn quiet_requested<I>(args: I, env: Option<OsString>) -> bool
where
    I: IntoIterator<Item = OsString>,
{
    let from_args = args
        .into_iter()
        .skip(1)
        .take_while(|a| a != "--")
        .any(|a| a == "--quiet");
    let from_env = env.map_or(false, |v| {
        let v = v.to_string_lossy().trim().to_ascii_lowercase();
        !matches!(v.as_str(), "" | "0" | "n" | "no" | "f" | "false" | "off")
    });
    from_args || from_env
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.license {
        write_output(cli.output.as_deref(), LICENSE)?;
        return Ok(());
    }
    if cli.version {
        write_output(cli.output.as_deref(), &version_text())?;
        return Ok(());
    }

    let doc = read_document(cli.input.as_deref())?;

    let rendered = if cli.xml {
        let mut xml = unosf::render::to_xml(&doc)?;
        if cli.newline {
            xml.push('\n');
        }
        xml
    } else {
        let options = RenderOptions::new()
            .with_title_page(!cli.no_title_page)
            .with_trailing_newline(cli.newline);
        unosf::render::to_text(&doc, &options)
    };

    write_output(cli.output.as_deref(), &rendered)?;
    Ok(())
}

/// Named files with an extension go through container detection; files
/// without one and stdin are read as flat OSF XML.
fn read_document(input: Option<&Path>) -> unosf::Result<Document> {
    match input {
        Some(path) if has_extension(path) => parse_file(path),
        Some(path) => {
            log::debug!("No extension on {}, reading as OSF XML", path.display());
            parse_reader(File::open(path)?)
        }
        None => parse_reader(io::stdin().lock()),
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()
        }
    }
}

fn version_text() -> String {
    format!("unosf {}\n", env!("CARGO_PKG_VERSION"))
}
