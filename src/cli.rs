// Command-line front end for framerle.
//
// Thin wrappers over the library: every subcommand reads whole files (or
// stdin), runs one transform, and writes the result (or stdout).

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::delta::{self, DeltaError};
use crate::frame::{self, Bitmap, FrameError};
use crate::rle::decoder::{
    self, DEFAULT_MAX_OUTPUT_LEN, DecodeError, DecodeOptions, Record, RleDecoder,
};

const BUF_SIZE: usize = 64 * 1024;

/// Literal bytes shown per record by `inspect`.
const INSPECT_PREVIEW: usize = 8;

/// Column at which rendered arrays wrap.
const ARRAY_WIDTH: usize = 80;

// ---------------------------------------------------------------------------
// Byte size parsing (supports K, M, G suffixes)
// ---------------------------------------------------------------------------

fn parse_byte_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty size string".into());
    }
    let (num_part, multiplier) = match s.as_bytes().last() {
        Some(b'k' | b'K') => (&s[..s.len() - 1], 1024usize),
        Some(b'm' | b'M') => (&s[..s.len() - 1], 1024 * 1024),
        Some(b'g' | b'G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1usize),
    };
    let num: usize = num_part
        .trim()
        .parse()
        .map_err(|e| format!("invalid size '{s}': {e}"))?;
    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size overflow: '{s}'"))
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Decoder for 7-bit run-length frames and byte-wise deltas.
#[derive(Parser, Debug)]
#[command(
    name = "framerle",
    version,
    about = "RLE frame decoder and delta reversal",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// RLE-decode an input stream.
    Decode(DecodeArgs),
    /// Reverse a byte-wise delta against a base file.
    Undiff(DeltaArgs),
    /// Decode a compressed frame delta and reverse it against a base frame.
    Apply(DeltaArgs),
    /// Print one line per record of an RLE stream.
    Inspect(InspectArgs),
    /// Print build/configuration details.
    Config,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Raw bytes.
    Raw,
    /// `static const uint8_t PROGMEM NAME[N] = { ... };`
    C,
    /// `const NAME: [u8; N] = [ ... ];`
    Rust,
    /// Page-major bitmap drawn with block characters (needs `--width`).
    Ascii,
}

/// Array literal syntax for `render_array`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayStyle {
    C,
    Rust,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Check/compute only (do not write output).
    #[arg(long = "check-only")]
    no_output: bool,

    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw)]
    format: OutputFormat,

    /// Array name for `--format c|rust` (default: input file stem, uppercased).
    #[arg(long)]
    name: Option<String>,

    /// Bitmap width in pixels for `--format ascii`.
    #[arg(
        long,
        required_if_eq("format", "ascii"),
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    width: Option<usize>,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Reject streams expanding past this size (supports K/M/G suffix).
    #[arg(long = "max-output", value_parser = parse_byte_size, default_value_t = DEFAULT_MAX_OUTPUT_LEN)]
    max_output: usize,

    #[command(flatten)]
    out: OutputArgs,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DeltaArgs {
    /// Base file the delta was taken against.
    #[arg(long, short = 's', value_hint = ValueHint::FilePath)]
    base: PathBuf,

    /// Input file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    #[command(flatten)]
    out: OutputArgs,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// RLE input file.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Decode,
    Undiff,
    Apply,
    Inspect,
    Config,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Command::Decode => "decode",
            Command::Undiff => "undiff",
            Command::Apply => "apply",
            Command::Inspect => "inspect",
            Command::Config => "config",
        }
    }
}

struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    no_output: bool,
    format: OutputFormat,
    array_name: Option<String>,
    bitmap_width: Option<usize>,
    max_output_len: usize,
    base_file: Option<PathBuf>,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

fn apply_output(opts: &mut Options, out: OutputArgs, output_pos: Option<PathBuf>) {
    opts.use_stdout = out.stdout;
    opts.no_output = out.no_output;
    opts.format = out.format;
    opts.array_name = out.name;
    opts.bitmap_width = out.width;
    opts.output_file = out.output.or(output_pos);
}

fn resolve_options(cli: Cli) -> Options {
    let mut opts = Options {
        command: Command::Config,
        use_stdout: false,
        force: cli.force,
        quiet: cli.quiet,
        verbose: cli.verbose.min(2),
        json_output: cli.json_output,
        no_output: false,
        format: OutputFormat::Raw,
        array_name: None,
        bitmap_width: None,
        max_output_len: DEFAULT_MAX_OUTPUT_LEN,
        base_file: None,
        input_file: None,
        output_file: None,
    };

    match cli.command {
        Cmd::Decode(args) => {
            opts.command = Command::Decode;
            opts.max_output_len = args.max_output;
            opts.input_file = args.input.or(args.input_pos);
            apply_output(&mut opts, args.out, args.output_pos);
        }
        Cmd::Undiff(args) => {
            opts.command = Command::Undiff;
            opts.base_file = Some(args.base);
            opts.input_file = args.input.or(args.input_pos);
            apply_output(&mut opts, args.out, args.output_pos);
        }
        Cmd::Apply(args) => {
            opts.command = Command::Apply;
            opts.base_file = Some(args.base);
            opts.input_file = args.input.or(args.input_pos);
            apply_output(&mut opts, args.out, args.output_pos);
        }
        Cmd::Inspect(args) => {
            opts.command = Command::Inspect;
            opts.input_file = Some(args.input);
        }
        Cmd::Config => {}
    }

    // -c wins over an output filename.
    if opts.use_stdout {
        opts.output_file = None;
    }
    opts
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("framerle".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{what}: {}: {source}", .path.display())]
    File {
        what: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("output file exists, use -f to overwrite: {}", .0.display())]
    OutputExists(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Delta(#[from] DeltaError),
    #[error("{0}")]
    Frame(#[from] FrameError),
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_file(what: &'static str, path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::File {
        what,
        path: path.to_path_buf(),
        source,
    })
}

fn read_input(opts: &Options) -> Result<Vec<u8>, CliError> {
    match &opts.input_file {
        Some(path) => read_file("input file", path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

fn read_base(opts: &Options) -> Result<Vec<u8>, CliError> {
    match &opts.base_file {
        Some(path) => read_file("base file", path),
        None => Ok(Vec::new()),
    }
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, CliError> {
    if opts.no_output {
        return Ok(Box::new(io::sink()));
    }
    match &opts.output_file {
        None => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        Some(path) => {
            if path.exists() && !opts.force {
                return Err(CliError::OutputExists(path.clone()));
            }
            let f = File::create(path).map_err(|source| CliError::File {
                what: "output file",
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufWriter::with_capacity(BUF_SIZE, f)))
        }
    }
}

fn array_name(opts: &Options) -> String {
    if let Some(name) = &opts.array_name {
        return name.clone();
    }
    opts.input_file
        .as_deref()
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| "DATA".to_string())
}

/// Render `data` as a C or Rust array literal, wrapped at `ARRAY_WIDTH`.
fn render_array(style: ArrayStyle, name: &str, data: &[u8]) -> String {
    let (open, close) = match style {
        ArrayStyle::C => (
            format!("static const uint8_t PROGMEM {name}[{}] = {{", data.len()),
            "};",
        ),
        ArrayStyle::Rust => (format!("const {name}: [u8; {}] = [", data.len()), "];"),
    };

    let mut out = open;
    out.push('\n');
    let mut line = String::new();
    for (i, b) in data.iter().enumerate() {
        let item = if i + 1 == data.len() {
            b.to_string()
        } else {
            format!("{b}, ")
        };
        if !line.is_empty() && line.len() + item.len() > ARRAY_WIDTH {
            out.push_str(line.trim_end());
            out.push('\n');
            line.clear();
        }
        line.push_str(&item);
    }
    if !line.is_empty() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(close);
    out.push('\n');
    out
}

fn write_output(opts: &Options, data: &[u8]) -> Result<(), CliError> {
    let rendered = match opts.format {
        OutputFormat::Raw => None,
        OutputFormat::C => Some(render_array(ArrayStyle::C, &array_name(opts), data)),
        OutputFormat::Rust => Some(render_array(ArrayStyle::Rust, &array_name(opts), data)),
        // clap guarantees a width for ascii; a missing one fails as a 0-wide bitmap.
        OutputFormat::Ascii => {
            Some(Bitmap::from_pages(opts.bitmap_width.unwrap_or(0), data)?.to_string())
        }
    };

    let mut w = open_output(opts)?;
    match rendered {
        Some(text) => w.write_all(text.as_bytes())?,
        None => w.write_all(data)?,
    }
    w.flush()?;
    Ok(())
}

fn emit_stats(opts: &Options, stats: serde_json::Value) {
    if opts.json_output && !opts.quiet {
        eprintln!("{stats:#}");
    }
}

fn say(opts: &Options, msg: std::fmt::Arguments<'_>) {
    if opts.verbose > 0 && !opts.quiet {
        eprintln!("framerle: {}: {msg}", opts.command.name());
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_config() -> Result<(), CliError> {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("framerle version {version} (Rust)");

    let parallel = cfg!(feature = "parallel") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();

    eprintln!("PARALLEL={parallel}");
    eprintln!("MAX_RUN={}", crate::rle::MAX_RUN);
    eprintln!("DEFAULT_MAX_OUTPUT_LEN={DEFAULT_MAX_OUTPUT_LEN}");
    eprintln!("sizeof(usize)={ptr_size}");
    Ok(())
}

fn cmd_decode(opts: &Options) -> Result<(), CliError> {
    let input = read_input(opts)?;
    let mut dec = RleDecoder::with_options(DecodeOptions {
        max_output_len: opts.max_output_len,
    });
    let output = dec.decode(&input)?;
    write_output(opts, output)?;

    say(
        opts,
        format_args!(
            "input size: {}, output size: {}, records: {}",
            input.len(),
            dec.bytes_decoded(),
            dec.records_decoded()
        ),
    );
    emit_stats(
        opts,
        serde_json::json!({
            "command": "decode",
            "input_size": input.len(),
            "output_size": dec.bytes_decoded(),
            "records": dec.records_decoded(),
        }),
    );
    Ok(())
}

fn cmd_undiff(opts: &Options) -> Result<(), CliError> {
    let base = read_base(opts)?;
    let mut data = read_input(opts)?;

    #[cfg(feature = "parallel")]
    delta::undiff_in_place_par(&base, &mut data)?;
    #[cfg(not(feature = "parallel"))]
    delta::undiff_in_place(&base, &mut data)?;

    write_output(opts, &data)?;

    say(opts, format_args!("output size: {}", data.len()));
    emit_stats(
        opts,
        serde_json::json!({
            "command": "undiff",
            "base_size": base.len(),
            "output_size": data.len(),
        }),
    );
    Ok(())
}

fn cmd_apply(opts: &Options) -> Result<(), CliError> {
    let base = read_base(opts)?;
    let compressed = read_input(opts)?;
    let (frame, stats) = frame::reconstruct_with_stats(&base, &compressed)?;
    write_output(opts, &frame)?;

    say(
        opts,
        format_args!(
            "compressed: {}, expanded: {}, frame: {}",
            stats.compressed_len, stats.expanded_len, stats.frame_len
        ),
    );
    emit_stats(
        opts,
        serde_json::json!({
            "command": "apply",
            "base_size": base.len(),
            "compressed_size": stats.compressed_len,
            "expanded_size": stats.expanded_len,
            "frame_size": stats.frame_len,
            "ratio": stats.ratio(),
        }),
    );
    Ok(())
}

fn describe_record(record: &Record<'_>) -> String {
    match record {
        Record::Repeat { count, value } => format!("REPEAT  n={count:<3} value={value:#04x}"),
        Record::Literal { bytes } => {
            let shown: Vec<String> = bytes
                .iter()
                .take(INSPECT_PREVIEW)
                .map(|b| format!("{b:02x}"))
                .collect();
            let more = if bytes.len() > INSPECT_PREVIEW { " .." } else { "" };
            format!("LITERAL n={:<3} [{}{more}]", bytes.len(), shown.join(" "))
        }
    }
}

fn cmd_inspect(opts: &Options) -> Result<(), CliError> {
    let input = read_input(opts)?;
    let stdout = io::stdout();
    let mut out = BufWriter::with_capacity(BUF_SIZE, stdout.lock());

    let mut records = 0u64;
    let mut expanded = 0usize;
    for item in decoder::records(&input) {
        let (offset, record) = item?;
        writeln!(out, "{offset:>8}  {}", describe_record(&record))?;
        records += 1;
        expanded += record.output_len();
    }
    if !opts.quiet {
        writeln!(
            out,
            "records: {records}, input: {} bytes, expanded: {expanded} bytes",
            input.len()
        )?;
    }
    out.flush()?;

    emit_stats(
        opts,
        serde_json::json!({
            "command": "inspect",
            "input_size": input.len(),
            "expanded_size": expanded,
            "records": records,
        }),
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let opts = resolve_options(cli);

    let default_filter = match opts.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let result = match opts.command {
        Command::Decode => cmd_decode(&opts),
        Command::Undiff => cmd_undiff(&opts),
        Command::Apply => cmd_apply(&opts),
        Command::Inspect => cmd_inspect(&opts),
        Command::Config => cmd_config(),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("framerle: {}: {e}", opts.command.name());
            process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_opts(args: &[&str]) -> Options {
        let argv: Vec<String> = std::iter::once("framerle".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let cli = Cli::try_parse_from(argv).expect("cli parse failed");
        resolve_options(cli)
    }

    #[test]
    fn parse_byte_size_suffixes() {
        assert_eq!(parse_byte_size("1").unwrap(), 1);
        assert_eq!(parse_byte_size("2K").unwrap(), 2 * 1024);
        assert_eq!(parse_byte_size("3m").unwrap(), 3 * 1024 * 1024);
        assert!(parse_byte_size("").is_err());
        assert!(parse_byte_size("12x").is_err());
    }

    #[test]
    fn decode_subcommand_maps_correctly() {
        let opts = parse_opts(&["decode", "--max-output", "4K", "in.rle", "out.bin"]);
        assert_eq!(opts.command, Command::Decode);
        assert_eq!(opts.max_output_len, 4096);
        assert_eq!(opts.input_file, Some(PathBuf::from("in.rle")));
        assert_eq!(opts.output_file, Some(PathBuf::from("out.bin")));
        assert_eq!(opts.format, OutputFormat::Raw);
    }

    #[test]
    fn decode_defaults_to_library_limit() {
        let opts = parse_opts(&["decode"]);
        assert_eq!(opts.max_output_len, DEFAULT_MAX_OUTPUT_LEN);
        assert!(opts.input_file.is_none());
        assert!(opts.output_file.is_none());
    }

    #[test]
    fn apply_and_undiff_take_base() {
        let opts = parse_opts(&["apply", "--base", "base.bin", "frame.rle"]);
        assert_eq!(opts.command, Command::Apply);
        assert_eq!(opts.base_file, Some(PathBuf::from("base.bin")));
        assert_eq!(opts.input_file, Some(PathBuf::from("frame.rle")));

        let opts = parse_opts(&["undiff", "-s", "base.bin", "--input", "d.bin"]);
        assert_eq!(opts.command, Command::Undiff);
        assert_eq!(opts.input_file, Some(PathBuf::from("d.bin")));
    }

    #[test]
    fn base_is_required() {
        let argv = ["framerle", "apply", "frame.rle"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn stdout_flag_overrides_output() {
        let opts = parse_opts(&["--force", "decode", "--stdout", "in", "out"]);
        assert!(opts.use_stdout);
        assert!(opts.force);
        assert!(opts.output_file.is_none());
    }

    #[test]
    fn verbose_is_capped() {
        let opts = parse_opts(&["-vvv", "decode", "in"]);
        assert_eq!(opts.verbose, 2);
    }

    #[test]
    fn format_flags_parse() {
        let opts = parse_opts(&["decode", "--format", "c", "--name", "IDLE", "in"]);
        assert_eq!(opts.format, OutputFormat::C);
        assert_eq!(array_name(&opts), "IDLE");

        let opts = parse_opts(&["decode", "--format", "rust", "frames/walk_1.rle"]);
        assert_eq!(array_name(&opts), "WALK_1");
    }

    #[test]
    fn render_c_array() {
        assert_eq!(
            render_array(ArrayStyle::C, "F", &[5, 1]),
            "static const uint8_t PROGMEM F[2] = {\n5, 1\n};\n"
        );
    }

    #[test]
    fn render_rust_array_wraps() {
        let data = vec![200u8; 40];
        let text = render_array(ArrayStyle::Rust, "BASE", &data);
        assert!(text.starts_with("const BASE: [u8; 40] = [\n"));
        assert!(text.ends_with("200\n];\n"));
        for line in text.lines() {
            assert!(line.len() <= ARRAY_WIDTH, "line too long: {line:?}");
        }
        assert_eq!(text.matches("200").count(), 40);
    }

    #[test]
    fn render_empty_array() {
        assert_eq!(
            render_array(ArrayStyle::Rust, "E", &[]),
            "const E: [u8; 0] = [\n];\n"
        );
    }

    #[test]
    fn describe_records() {
        assert_eq!(
            describe_record(&Record::Repeat { count: 5, value: 1 }),
            "REPEAT  n=5   value=0x01"
        );
        assert_eq!(
            describe_record(&Record::Literal { bytes: &[1, 0] }),
            "LITERAL n=2   [01 00]"
        );
        let long = [0xAB; 10];
        assert!(describe_record(&Record::Literal { bytes: &long }).ends_with(" ..]"));
    }

    #[test]
    fn ascii_format_needs_width() {
        let opts = parse_opts(&["apply", "-s", "b", "--format", "ascii", "--width", "128", "f"]);
        assert_eq!(opts.format, OutputFormat::Ascii);
        assert_eq!(opts.bitmap_width, Some(128));

        let argv = ["framerle", "decode", "--format", "ascii", "in"];
        assert!(Cli::try_parse_from(argv).is_err());
        let argv = ["framerle", "decode", "--format", "ascii", "--width", "0", "in"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn quiet_is_kept_with_json() {
        let opts = parse_opts(&["--quiet", "--json", "decode", "in"]);
        assert!(opts.quiet);
        assert!(opts.json_output);
    }

    #[test]
    fn fuzz_helper_tolerates_garbage() {
        let args: Vec<String> = ["decode", "--width", "-3", "--format", "nope"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        fuzz_try_parse_args(&args);
        fuzz_try_parse_args(&[]);
    }

    #[test]
    fn config_command_maps() {
        assert_eq!(parse_opts(&["config"]).command, Command::Config);
        assert_eq!(
            parse_opts(&["inspect", "in.rle"]).command,
            Command::Inspect
        );
    }
}
