use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use backtrack_maze::grids::tile_grid::TilePainter;
use backtrack_maze::model::{MazeConfig, MazeModel};
use backtrack_maze::renderer::{AsciiRenderer, Renderer, VertexRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// one character per tile
    Ascii,
    /// raw triangle list, 6 f32 per vertex
    Vertices,
}

/// Carve a perfect maze and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Random seed, zero or negative draws a fresh one
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    seed: i64,

    /// Chests scattered over the maze
    #[arg(long, default_value_t = 3)]
    chests: usize,

    /// Keys scattered over the maze
    #[arg(long, default_value_t = 0)]
    keys: usize,

    /// Leave the exit without a door
    #[arg(long)]
    no_door: bool,

    /// Show every door and chest opened
    #[arg(long)]
    opened: bool,

    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Viewport size used for vertex output
    #[arg(long, default_value_t = 800)]
    viewport: u32,

    /// Write here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl Args {
    fn checked_config(&self) -> anyhow::Result<MazeConfig> {
        let config = self.config();
        config
            .validate()
            .context("maze dimensions rejected")?;
        Ok(config)
    }

    fn config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            chests: self.chests,
            keys: self.keys,
            door: !self.no_door,
        }
    }
}

pub struct State {
    pub model: MazeModel,
    pub painter: TilePainter,
    pub renderer: Box<dyn Renderer>,
    pub opened: bool,
}

impl State {
    fn run(&mut self) -> anyhow::Result<()> {
        self.model.generate();

        if self.model.paint(&self.painter).is_none() {
            anyhow::bail!("nothing was generated to paint");
        }
        let tiles = self
            .model
            .tiles_mut()
            .context("maze produced no tiles")?;

        if self.opened {
            for y in 0..tiles.dims.height {
                for x in 0..tiles.dims.width {
                    if tiles.get_object(x, y).is_some() {
                        tiles.open_object(x, y)?;
                    }
                }
            }
        }

        self.renderer
            .render(tiles)
            .context("failed to write rendered maze")?;

        log::info!("seed {}", self.model.config.seed);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };

    let renderer: Box<dyn Renderer> = match args.format {
        Format::Ascii => Box::new(AsciiRenderer::new(out)),
        Format::Vertices => Box::new(VertexRenderer::new(out, (args.viewport, args.viewport))),
    };

    let config = args.checked_config()?;
    let mut state = State {
        painter: config.painter(),
        model: MazeModel::new(config),
        renderer,
        opened: args.opened,
    };

    state.run()
}
