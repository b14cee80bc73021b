//! Crumb CLI - vertex indexing command-line tool.
//!
//! Usage: crumb <COMMAND> <INPUT> [OUTPUT]
//!
//! Run `crumb --help` for available commands.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use crumb::error::Result;
use crumb::io;
use crumb::mesh::{IndexedMesh, VertexIndex};

#[derive(Parser)]
#[command(name = "crumb")]
#[command(author, version, about = "Vertex indexing CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh statistics without writing anything
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Deduplicate a mesh and write it back out
    Dedup {
        /// Input mesh file
        input: PathBuf,

        /// Output mesh file
        output: PathBuf,

        /// Index buffer element width
        #[arg(short, long, value_enum, default_value = "u32")]
        width: IndexWidth,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum IndexWidth {
    /// 16-bit indices (up to 65536 unique vertices)
    U16,
    /// 32-bit indices
    U32,
    /// 64-bit indices
    U64,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { input } => cmd_info(&input),
        Commands::Dedup {
            input,
            output,
            width,
        } => match width {
            IndexWidth::U16 => cmd_dedup::<u16>(&input, &output),
            IndexWidth::U32 => cmd_dedup::<u32>(&input, &output),
            IndexWidth::U64 => cmd_dedup::<u64>(&input, &output),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn cmd_info(input: &Path) -> Result<()> {
    let start = Instant::now();
    let mesh: IndexedMesh = io::load(input)?;
    let elapsed = start.elapsed();

    println!("{}", input.display());
    print_stats(&mesh);
    println!("  indexed in:      {:.2?}", elapsed);
    Ok(())
}

fn cmd_dedup<I: VertexIndex>(input: &Path, output: &Path) -> Result<()> {
    let start = Instant::now();
    let mesh: IndexedMesh<I> = io::load(input)?;
    let indexed = start.elapsed();

    io::save(&mesh, output)?;

    println!("{} -> {}", input.display(), output.display());
    print_stats(&mesh);
    println!("  indexed in:      {:.2?}", indexed);
    println!("  total:           {:.2?}", start.elapsed());
    Ok(())
}

fn print_stats<I: VertexIndex>(mesh: &IndexedMesh<I>) {
    println!("  corners:         {}", mesh.num_indices());
    println!("  triangles:       {}", mesh.num_indices() / 3);
    println!("  unique vertices: {}", mesh.num_vertices());
    println!("  removed:         {:.1}%", mesh.dedup_ratio() * 100.0);
}
