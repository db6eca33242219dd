use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use folio_core::{KeyName, PageImageFormat, Region};

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Capture e-reader pages as screenshots and compile them into a PDF")]
#[command(version)]
pub struct Cli {
    /// Settings file, defaults to folio/folio.toml in the user config directory
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Runs the interactive prompts when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Capture pages without prompting
    Capture(CaptureArgs),

    /// Compile a folder of page images into a PDF
    Assemble(AssembleArgs),

    /// List recognized page-flip key names
    Keys,
}

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Number of pages to capture
    #[arg(short, long)]
    pub pages: u32,

    /// Key that advances one page (e.g. right, pagedown, space, n)
    #[arg(short, long)]
    pub key: Option<KeyName>,

    /// Seconds to wait after each page flip
    #[arg(short, long)]
    pub delay: Option<f64>,

    /// Capture area as left,top,width,height in screen coordinates
    #[arg(short, long, allow_hyphen_values = true, value_name = "L,T,W,H")]
    pub region: Option<Region>,

    /// Seconds to wait before the first capture
    #[arg(long)]
    pub grace: Option<f64>,

    /// Click the reader again every N pages, 0 to disable
    #[arg(long, value_name = "N")]
    pub refocus_every: Option<u32>,

    /// Skip the initial click that focuses the reader
    #[arg(long)]
    pub no_focus_click: bool,

    /// Leave the mouse pointer visible while capturing
    #[arg(long)]
    pub no_hide_pointer: bool,

    /// Page image format (png or jpeg)
    #[arg(short, long)]
    pub format: Option<PageImageFormat>,

    /// Directory that receives the session folder
    #[arg(short, long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Compile the captured pages into this PDF afterwards
    #[arg(long, value_name = "PATH")]
    pub pdf: Option<PathBuf>,

    /// Remove the page images once the PDF has been written
    #[arg(long, requires = "pdf")]
    pub delete_images: bool,
}

#[derive(Debug, Args)]
pub struct AssembleArgs {
    /// Folder containing page images
    pub dir: PathBuf,

    /// Output PDF, defaults to <DIR>.pdf
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JPEG quality of the embedded pages (1-100)
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Resolution used to size pages
    #[arg(long)]
    pub dpi: Option<f32>,

    /// Document title, defaults to the folder name
    #[arg(short, long)]
    pub title: Option<String>,
}
