use anyhow::{bail, Context, Result};
use clap::Parser;
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Output locations tried in order when no `--output` is given.
const DEFAULT_OUTPUTS: [&str; 2] = ["resources/output.json", "../resources/output.json"];

/// Converts the regex on the first line of a file into an NFA and a DFA and
/// saves both as JSON.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// File whose first line is the regex (e.g. `(a|b)*.c`).
    input: PathBuf,
    /// Where to write the JSON document.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Could not open file {}", args.input.display()))?;

    let regex = content
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    if regex.is_empty() {
        bail!("Empty regex in input file");
    }

    let compiled = redfa::compile(&regex)?;
    let json = compiled.to_document().to_json()?;

    let (path, mut file) = create_output(args.output.as_deref())?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!("Regex converted. Results saved to {}", path.display());
    Ok(())
}

/// Creates the output file, falling back on the default locations.
fn create_output(output: Option<&Path>) -> Result<(PathBuf, File)> {
    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Could not create {}", path.display()))?;
        return Ok((path.to_path_buf(), file));
    }

    for path in DEFAULT_OUTPUTS.map(PathBuf::from) {
        match File::create(&path) {
            Ok(file) => return Ok((path, file)),
            Err(err) => log::debug!("cannot create {}: {}", path.display(), err),
        }
    }

    bail!("Could not create output.json")
}
