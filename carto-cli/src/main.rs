mod error;

use std::path::PathBuf;

use carto_map::{render_map, MapConfig, MapLayers};
use clap::{Args, Parser, Subcommand};
use error::CartoCliError;
use log::info;

/// Render static thematic maps from shapefiles
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the map to a PNG image
    Render(RenderArgs),
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// Directory holding the shapefiles
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Output path for the PNG image (default: map.png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Resolution of the PNG image (default: 200)
    #[arg(long)]
    dpi: Option<f32>,

    /// JSON file overriding the default map configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the scene as SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,
}

impl RenderArgs {
    /// Load the config file if one was given, then apply flag overrides
    fn map_config(&self) -> Result<MapConfig, CartoCliError> {
        let mut config = match &self.config {
            Some(path) => MapConfig::from_json_file(path)?,
            None => MapConfig::default(),
        };
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(dpi) = self.dpi {
            if !dpi.is_finite() || dpi <= 0.0 {
                return Err(CartoCliError::InvalidArgument(format!(
                    "dpi must be positive, got {dpi}"
                )));
            }
            config.dpi = dpi;
        }
        Ok(config)
    }
}

fn render(args: &RenderArgs) -> Result<(), CartoCliError> {
    let config = args.map_config()?;
    info!("Reading layers from {}", config.data_dir.display());
    let layers = MapLayers::load(&config)?;

    let canvas = render_map(&layers, &config)?;
    if let Some(svg_path) = &args.svg {
        canvas.save_svg(svg_path)?;
    }
    canvas.save_png(&config.output)?;
    Ok(())
}

fn main() -> Result<(), CartoCliError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "carto", "render", "--data-dir", "shp", "--output", "ni.png", "--dpi", "96",
        ]);
        let Commands::Render(args) = cli.command;
        let config = args.map_config().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("shp"));
        assert_eq!(config.output, PathBuf::from("ni.png"));
        assert_eq!(config.dpi, 96.0);
        assert_eq!(config.county_field, "CountyName");
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = RenderArgs::default();
        let config = args.map_config().unwrap();
        assert_eq!(config.output, PathBuf::from("map.png"));
        assert_eq!(config.dpi, 200.0);
    }

    #[test]
    fn test_rejects_non_positive_dpi() {
        let args = RenderArgs {
            dpi: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            args.map_config(),
            Err(CartoCliError::InvalidArgument(_))
        ));
    }
}
