use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use rym_bar_engine::logging::{init_logging, LoggingConfig};
use rym_bar_engine::paint::{GradientBuilder, LinearGradient, Palette};
use rym_bar_ui::prelude::*;

#[derive(Parser)]
#[command(name = "rym-bar", about = "Visual rating bar: gradients, bar styles and stored settings")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Settings file [default: <config dir>/rym-visual-rating/settings.json]
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the gradient stop list for a theme or a color list
    Gradient {
        #[arg(short, long, default_value = "vibrant")]
        theme: String,
        /// Comma-separated hex colors, used instead of the theme
        #[arg(short, long, conflicts_with = "theme")]
        colors: Option<String>,
        #[arg(short, long, default_value = "gradual")]
        style: RenderStyle,
        #[arg(short, long, default_value = "masked")]
        layout: StopLayout,
        /// Print a full `linear-gradient(...)` value instead of the bare stops
        #[arg(long)]
        css: bool,
        /// Direction of the `--css` gradient, in degrees
        #[arg(short, long, default_value_t = 90.0)]
        angle: f64,
    },
    /// Print the bar's CSS for a rating, using the stored options
    Render {
        /// Rating text as shown on the release page, e.g. 3.45
        rating: String,
        /// Page background behind the bar
        #[arg(long)]
        background: Option<CssColor>,
        /// Site theme (eve, night, light); read from the store when omitted
        #[arg(long)]
        theme_mode: Option<String>,
        /// Print the mask at its final width instead of the animation start
        #[arg(long)]
        settled: bool,
    },
    /// Inspect or edit stored bar options
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// List built-in themes and their colors
    Themes,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective options
    Show,
    /// Store one option, e.g. `set height 24`
    Set { key: OptionKey, value: String },
    /// Remove every stored option
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::from_verbosity(cli.verbose));
    run(cli, &mut io::stdout().lock())
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let themes = ThemeRegistry::default();
    match cli.command {
        Commands::Gradient { theme, colors, style, layout, css, angle } => {
            let palette = match colors {
                Some(list) => Palette::parse_list(&list).context("parsing --colors")?,
                None => themes.resolve(&theme)?.clone(),
            };
            let stops = GradientBuilder::new(style).layout(layout).build(palette.colors())?;
            if css {
                writeln!(out, "{}", LinearGradient::new(angle, stops))?;
            } else {
                writeln!(out, "{stops}")?;
            }
        }
        Commands::Render { rating, background, theme_mode, settled } => {
            let store = open_store(cli.store)?;
            let options = BarOptions::load_with(&store, &themes);
            let rating =
                Rating::parse(&rating).with_context(|| format!("reading rating {rating:?}"))?;
            let mode = match theme_mode {
                Some(name) => {
                    let mode = ThemeMode::parse(&name);
                    if mode.is_none() {
                        log::warn!("unknown theme mode {name:?}, using the default look");
                    }
                    mode
                }
                None => ThemeMode::from_store(&store),
            };

            let mut bar = RatingBar::new(options, rating).theme_mode(mode).themes(themes);
            if let Some(bg) = background {
                bar = bar.background(bg);
            }
            let mut layout = bar.layout()?;
            if settled {
                layout.settle();
            }

            writeln!(out, "/* {} */", layout.title)?;
            writeln!(out, "{}", layout.wrapper.to_rule(&format!("#{WRAPPER_ID}")))?;
            writeln!(out, "{}", layout.gradient.to_rule(&format!("#{WRAPPER_ID} > .gradient")))?;
            writeln!(out, "{}", layout.mask.to_rule(&format!("#{WRAPPER_ID} > .mask")))?;
        }
        Commands::Settings { action } => {
            let mut store = open_store(cli.store)?;
            match action {
                SettingsAction::Show => {
                    writeln!(out, "# {}", store.path().display())?;
                    let options = BarOptions::load_with(&store, &themes);
                    for key in OptionKey::ALL {
                        writeln!(out, "{:<14}{}", key.name(), options.field(key))?;
                    }
                }
                SettingsAction::Set { key, value } => {
                    let mut options = BarOptions::load_with(&store, &themes);
                    options.set_field_in(key, &value, &themes)?;
                    store.set(&key.storage_key(), &options.field(key));
                    store.flush()?;
                    log::info!("{key} = {}", options.field(key));
                }
                SettingsAction::Reset => {
                    BarOptions::reset(&mut store);
                    store.flush()?;
                    log::info!("stored options removed");
                }
            }
        }
        Commands::Themes => {
            for (name, palette) in themes.iter() {
                let colors: Vec<&str> = palette.colors().iter().map(CssColor::as_str).collect();
                writeln!(out, "{name:<12}{}", colors.join(" "))?;
            }
        }
    }

    Ok(())
}

fn open_store(explicit: Option<PathBuf>) -> Result<JsonFileStore> {
    let path = match explicit {
        Some(p) => p,
        None => dirs::config_dir()
            .context("no configuration directory on this platform, pass --store")?
            .join("rym-visual-rating")
            .join("settings.json"),
    };
    Ok(JsonFileStore::open(path)?)
}
