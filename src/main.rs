use clap::{ArgAction, Parser};
use log::error;
use packer::{
    config::{self, OverflowPolicy, PackOptions},
    logging, pipeline,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser, Debug)]
#[command(name = "packer", version, about = "Pack a directory of sprites into a texture atlas")]
struct Args {
    /// The directory of the input folder
    #[arg(short, long, default_value = config::DEFAULT_INPUT)]
    input: PathBuf,
    /// The filename of the output json and png
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    output: PathBuf,
    /// The amount to extrude each sprite
    #[arg(short, long, default_value_t = config::DEFAULT_PADDING)]
    extrude: u32,
    /// Canvas width in pixels
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    width: u32,
    /// Canvas height in pixels
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    height: u32,
    /// What to do when sprites run past the canvas edge
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Clip)]
    overflow: OverflowPolicy,
    /// Indent the JSON manifest
    #[arg(long)]
    pretty: bool,
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for PackOptions {
    fn from(args: Args) -> Self {
        PackOptions {
            input: args.input,
            output: args.output,
            padding: args.extrude,
            width: args.width,
            height: args.height,
            overflow: args.overflow,
            pretty: args.pretty,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match pipeline::run(&args.into()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("packer: {err}");
            ExitCode::FAILURE
        }
    }
}
