use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use hexecontahedra::math::bounds::Aabb;
use hexecontahedra::tessellation::{BuildMesh, MeshParams, TriangleMesh};
use hexecontahedra::{HexecontahedraError, PolyhedronDescriptor, Registry};

/// Hexecontahedra - Catalan solids and the rhombic hexecontahedron as meshes
#[derive(Parser, Debug)]
#[command(name = "hexecontahedra", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every shape in display order
    List,
    /// Describe one shape and its mesh
    Show {
        /// Shape identifier, e.g. `rhombic-hexecontahedron`
        #[arg(long)]
        shape: Option<String>,
    },
    /// Write a shape's normalized mesh as JSON
    Export {
        /// Shape identifier, e.g. `rhombic-hexecontahedron`
        #[arg(long)]
        shape: Option<String>,

        /// Bounding-sphere radius of the exported mesh
        #[arg(long, default_value_t = MeshParams::default().target_radius)]
        target_radius: f64,

        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("No shape specified")]
    NoShape,

    #[error("Unknown shape: {0}")]
    UnknownShape(String),

    #[error(transparent)]
    Library(#[from] HexecontahedraError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The mesh and labels handed to a renderer.
#[derive(Serialize)]
struct MeshExport<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    vertices: Vec<[f64; 3]>,
    normals: Vec<[f64; 3]>,
    indices: &'a [[u32; 3]],
}

impl<'a> MeshExport<'a> {
    fn new(descriptor: &'a PolyhedronDescriptor, mesh: &'a TriangleMesh) -> Self {
        Self {
            id: descriptor.id(),
            name: descriptor.name(),
            description: descriptor.description(),
            vertices: mesh.vertices.iter().map(|p| [p.x, p.y, p.z]).collect(),
            normals: mesh.normals.iter().map(|n| [n.x, n.y, n.z]).collect(),
            indices: &mesh.indices,
        }
    }
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for hexecontahedra.
    // Override with RUST_LOG (e.g. RUST_LOG=hexecontahedra=debug).
    let env_filter = EnvFilter::from_default_env()
        .add_directive(LevelFilter::WARN.into())
        .add_directive("hexecontahedra=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            for line in messages(&e) {
                eprintln!("{line}");
            }
            ExitCode::FAILURE
        }
    }
}

/// The lines printed to stderr for a failed command.
fn messages(error: &CliError) -> Vec<String> {
    match error {
        CliError::NoShape => vec![
            error.to_string(),
            "Pass --shape <id>; `hexecontahedra list` shows the identifiers.".to_owned(),
        ],
        CliError::UnknownShape(_) => vec!["Shape not found".to_owned(), error.to_string()],
        _ => vec![format!("error: {error}")],
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let registry = Registry::builtin()?;
    match command {
        Command::List => list(&registry),
        Command::Show { shape } => show(find(&registry, shape)?),
        Command::Export {
            shape,
            target_radius,
            output,
        } => export(find(&registry, shape)?, target_radius, output),
    }
}

fn find(registry: &Registry, shape: Option<String>) -> Result<&PolyhedronDescriptor, CliError> {
    let id = shape.ok_or(CliError::NoShape)?;
    registry.lookup(&id).ok_or(CliError::UnknownShape(id))
}

fn list(registry: &Registry) -> Result<(), CliError> {
    let mut out = io::stdout().lock();
    for descriptor in registry.iter() {
        let faces = if descriptor.faces().is_empty() {
            "hull".to_owned()
        } else {
            format!("{} faces", descriptor.faces().len())
        };
        writeln!(
            out,
            "{:<28} {} ({} vertices, {faces})",
            descriptor.id(),
            descriptor.name(),
            descriptor.vertices().len()
        )?;
        writeln!(out, "{:<28} {}", "", descriptor.description())?;
    }
    Ok(())
}

fn show(descriptor: &PolyhedronDescriptor) -> Result<(), CliError> {
    let mesh = BuildMesh::new(descriptor, MeshParams::default()).execute()?;
    let extents = Aabb::from_points(&mesh.vertices).map(|aabb| aabb.extents());

    let mut out = io::stdout().lock();
    writeln!(out, "{}", descriptor.name())?;
    writeln!(out, "{}", descriptor.description())?;
    writeln!(out, "topology:  {:?}", descriptor.strategy())?;
    writeln!(out, "vertices:  {}", mesh.vertices.len())?;
    writeln!(out, "triangles: {}", mesh.triangle_count())?;
    writeln!(out, "volume:    {:.6}", mesh.signed_volume())?;
    if let Some(e) = extents {
        writeln!(out, "extents:   {:.6} x {:.6} x {:.6}", e.x, e.y, e.z)?;
    }
    Ok(())
}

fn export(
    descriptor: &PolyhedronDescriptor,
    target_radius: f64,
    output: Option<PathBuf>,
) -> Result<(), CliError> {
    let mesh = BuildMesh::new(descriptor, MeshParams { target_radius }).execute()?;
    let export = MeshExport::new(descriptor, &mesh);

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &export)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "wrote mesh");
        }
        None => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &export)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
