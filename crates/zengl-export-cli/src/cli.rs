use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "zengl-export", version, about = "Dump a context snapshot as raw OpenGL calls")]
pub struct Cli {
    #[arg(long, global = true, help = "Log filter in env_logger syntax (falls back to RUST_LOG)")]
    pub log_level: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, help = "Colorize log output")]
    pub color: ColorChoice,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the call listing of a snapshot.
    Dump {
        snapshot: PathBuf,
        #[arg(short, long, help = "Write to a file instead of stdout")]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Skip the default state block")]
        no_defaults: bool,
        #[arg(long, default_value_t = false, help = "Skip the final blit to the screen")]
        no_blit: bool,
        #[arg(long, value_name = "IMAGE", conflicts_with = "no_blit", help = "Blit from the framebuffer rendering into IMAGE")]
        blit_source: Option<String>,
    },
    /// Print object counts per kind.
    Inspect {
        snapshot: PathBuf,
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for env_logger::WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
            ColorChoice::Always => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
        }
    }
}
