mod report;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use obj_adapter::{parse_obj, Mesh, ParseOptions, TrailingComponents};
use rs42::extensions::PipeLine;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Reads a Wavefront `.obj` file, checks it, and writes it back in the face
/// layout it was read with.
#[derive(Parser, Debug)]
#[command(name = "obj-roundtrip", version)]
struct Cli {
    /// The `.obj` file to read
    input: PathBuf,

    /// Where to write the mesh (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only check the file, do not write anything
    #[arg(long, conflicts_with = "output")]
    check: bool,

    /// Reject `v`, `vn` and `vt` lines with more components than needed
    #[arg(long)]
    reject_trailing: bool,

    /// Reject files without any face
    #[arg(long)]
    require_faces: bool,

    /// Log parser progress
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            trailing_components: if self.reject_trailing {
                TrailingComponents::Reject
            } else {
                TrailingComponents::Ignore
            },
            require_faces: self.require_faces,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(io::stderr)
        .init();

    let reader = File::open(&cli.input)
        .with_context(|| format!("Failed to open {}", cli.input.display()))?
        .pipe(BufReader::new);

    let mesh = match parse_obj(reader, &cli.parse_options()) {
        Ok(mesh) => mesh,
        Err(err) => {
            eprintln!("{}", report::diagnostic(&err));
            return Ok(ExitCode::FAILURE);
        }
    };

    eprintln!("{}", report::summary(&mesh));

    if !cli.check {
        write_mesh(&mesh, cli.output.as_ref())?;
    }

    Ok(if mesh.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn write_mesh(mesh: &Mesh, output: Option<&PathBuf>) -> Result<()> {
    let output: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(output);

    mesh.write_obj(&mut writer).context("Failed to write the mesh")?;
    writer.flush().context("Failed to write the mesh")
}
