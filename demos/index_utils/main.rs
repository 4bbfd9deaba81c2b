//! Compatibility index CLI utility.
//!
//! Works on a directory of raw records laid out as
//! `<records>/{sequences,frames,skeletons,npcs}/<id>.dat`.
//!
//! # Features
//!
//! - **build**: build the index (or restore it from the cache) and print the report
//! - **compat**: list the animations an NPC can play
//! - **info**: show frame count and kind of one sequence
//! - **pack**: pack a single vertex and normal and print the words
//!
//! # Usage
//!
//! ```bash
//! # Build the index, caching the snapshot under .rigdex/
//! cargo run --example index_utils -- --records cache/ build
//!
//! # Animations compatible with NPC 3010
//! cargo run --example index_utils -- --records cache/ compat 3010
//!
//! # Pack a vertex
//! cargo run --example index_utils -- pack --position 10,-20,30 --normal 0,1,0
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;
use rigdex::prelude::*;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "index_utils")]
#[command(author = "rigdex project")]
#[command(version)]
#[command(about = "Build and query the skeleton compatibility index", long_about = None)]
struct Cli {
	/// Directory of raw record files
	#[arg(short, long, global = true, value_name = "DIR", env = "RIGDEX_RECORDS", default_value = "records")]
	records: PathBuf,

	/// Directory holding index snapshots
	#[arg(short, long, global = true, value_name = "DIR", env = "RIGDEX_CACHE", default_value = ".rigdex")]
	cache: PathBuf,

	/// Sequence ids per build batch
	#[arg(long, global = true, value_name = "COUNT", default_value_t = DEFAULT_BATCH_SIZE)]
	batch_size: u32,

	/// Print results as JSON
	#[arg(long, global = true, default_value_t = false)]
	json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Build the index, or restore it from the cache
	Build(BuildArgs),
	/// List the animations an NPC can play
	Compat {
		/// NPC id
		#[arg(value_name = "NPC")]
		npc: u32,
	},
	/// Show frame count and kind of a sequence
	Info {
		/// Sequence id
		#[arg(value_name = "SEQUENCE")]
		sequence: u32,
	},
	/// Pack one vertex and normal
	Pack(PackArgs),
}

#[derive(Args)]
struct BuildArgs {
	/// Ignore any cached snapshot and rebuild
	#[arg(long, default_value_t = false)]
	rebuild: bool,
}

#[derive(Args)]
struct PackArgs {
	/// Model-space position
	#[arg(long, value_name = "X,Y,Z", value_delimiter = ',', num_args = 3, allow_negative_numbers = true)]
	position: Vec<i32>,

	/// Unit normal
	#[arg(long, value_name = "X,Y,Z", value_delimiter = ',', num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 1.0, 0.0])]
	normal: Vec<f32>,

	/// 16-bit HSL colour
	#[arg(long, default_value_t = 0)]
	color: u16,

	/// Opacity
	#[arg(long, default_value_t = 255)]
	alpha: u8,

	/// Texture id
	#[arg(long)]
	texture: Option<u16>,

	/// Texture coordinates
	#[arg(long, value_name = "U,V", value_delimiter = ',', num_args = 2, default_values_t = [0.0, 0.0])]
	uv: Vec<f32>,

	/// Render priority
	#[arg(long, default_value_t = 0)]
	priority: u8,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match &cli.command {
		Command::Build(args) => run_build(&cli, args),
		Command::Compat {
			npc,
		} => run_compat(&cli, *npc),
		Command::Info {
			sequence,
		} => run_info(&cli, *sequence),
		Command::Pack(args) => run_pack(&cli, args),
	}
}

fn open_records(cli: &Cli) -> Result<RecordDirectory> {
	RecordDirectory::open(&cli.records)
		.with_context(|| format!("Failed to open record directory {}", cli.records.display()))
}

/// Restores the index from the cache or builds it, logging progress.
fn load_index(cli: &Cli, source: &RecordDirectory, rebuild: bool) -> Result<(CompatibilityIndex, IndexOrigin)> {
	let mut store = DirectoryStore::new(&cli.cache);
	let mut index = CompatibilityIndex::with_config(IndexConfig::new(cli.batch_size));

	if rebuild {
		store.remove(&index.config().snapshot_key).context("Failed to clear cached snapshot")?;
	}

	let mut last_logged = 0;
	let origin = index.restore_or_build(&mut store, source, |fraction| {
		let percent = (fraction * 100.0) as u32;
		if percent >= last_logged + 10 || percent == 100 {
			info!("Building compatibility index: {percent}%");
			last_logged = percent;
		}
	});
	Ok((index, origin))
}

fn print<T: Serialize + std::fmt::Debug>(cli: &Cli, value: &T) -> Result<()> {
	if cli.json {
		println!("{}", serde_json::to_string_pretty(value)?);
	} else {
		println!("{value:#?}");
	}
	Ok(())
}

fn run_build(cli: &Cli, args: &BuildArgs) -> Result<()> {
	let source = open_records(cli)?;
	let (index, origin) = load_index(cli, &source, args.rebuild)?;

	match origin {
		IndexOrigin::Restored => {
			info!("Restored compatibility index from {}", cli.cache.display());
		}
		IndexOrigin::Built(report) => print(cli, &report)?,
	}
	info!("{} sequences over {} skeleton bases", index.sequence_count(), index.base_count());
	Ok(())
}

#[derive(Debug, Serialize)]
struct CompatReport {
	npc: u32,
	references: Vec<u32>,
	compatible: Vec<u32>,
}

fn run_compat(cli: &Cli, npc_id: u32) -> Result<()> {
	let source = open_records(cli)?;
	let Some(npc) = source.npc(npc_id)? else {
		bail!("NPC {npc_id} not found in {}", cli.records.display());
	};

	let (index, _) = load_index(cli, &source, false)?;
	print(
		cli,
		&CompatReport {
			npc: npc_id,
			references: npc.reference_animations(),
			compatible: index.find_compatible_animations(&npc),
		},
	)
}

fn run_info(cli: &Cli, sequence: u32) -> Result<()> {
	let source = open_records(cli)?;
	match get_animation_info(&source, sequence)? {
		Some(info) => print(cli, &info),
		None => bail!("Sequence {sequence} not found in {}", cli.records.display()),
	}
}

#[derive(Debug, Serialize)]
struct PackReport {
	words: [String; 3],
	normal: String,
	position: [u32; 3],
	uv: [u32; 2],
	normal_components: [i16; 3],
}

fn run_pack(cli: &Cli, args: &PackArgs) -> Result<()> {
	let [x, y, z] = args.position[..] else {
		bail!("--position takes exactly three values");
	};
	let [nx, ny, nz] = args.normal[..] else {
		bail!("--normal takes exactly three values");
	};
	let [u, v] = args.uv[..] else {
		bail!("--uv takes exactly two values");
	};

	let vertex = pack_vertex(VertexInput {
		position: [x, y, z],
		color: args.color,
		alpha: args.alpha,
		uv: [u, v],
		texture_id: args.texture,
		priority: args.priority,
	});
	let normal = pack_normal(nx, ny, nz);

	print(
		cli,
		&PackReport {
			words: vertex.words.map(|word| format!("{word:#010x}")),
			normal: format!("{:#010x}", normal.0),
			position: vertex.position(),
			uv: vertex.uv(),
			normal_components: normal.components(),
		},
	)
}
