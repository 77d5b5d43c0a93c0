use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use vitae::{CvRecord, Error, Exporter, PageGeometry, Resolver};

#[derive(Parser, Debug)]
#[command(name = "vitae", version, about = "Render a CV record to a single-page PDF")]
struct Args {
    /// CV record in JSON format
    record: PathBuf,

    /// Where to write the PDF
    #[arg(short, long, default_value = "cv.pdf")]
    output: PathBuf,

    /// JSON theme overriding colors, sizes and section titles
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Bottom-right watermark text
    #[arg(long)]
    watermark: Option<String>,

    /// Page margin in points
    #[arg(long)]
    margin: Option<f32>,

    /// Use US Letter instead of A4
    #[arg(long)]
    letter: bool,

    /// TrueType font to measure with and embed
    #[arg(long)]
    font: Option<PathBuf>,

    /// Bold companion to --font
    #[arg(long, requires = "font")]
    bold_font: Option<PathBuf>,

    /// Reference date for the age (YYYY-MM-DD), defaults to today
    #[arg(long)]
    today: Option<NaiveDate>,
}

fn read(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("vitae=info"))
        .init();
    let args = Args::parse();

    log::info!("Loading record from {}", args.record.display());
    let record = CvRecord::from_file(&args.record)?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let document = Resolver::new(today).resolve(&record)?;

    let mut geometry = if args.letter {
        PageGeometry::letter()
    } else {
        PageGeometry::a4()
    };
    if let Some(margin) = args.margin {
        geometry = geometry.with_margin(margin);
    }

    let mut builder = Exporter::builder().with_geometry(geometry);
    if let Some(theme) = &args.theme {
        builder = builder.with_theme_file(theme)?;
    }
    if let Some(text) = args.watermark {
        builder = builder.with_watermark(text);
    }
    if let Some(font) = &args.font {
        let bold = args.bold_font.as_deref().map(read).transpose()?;
        builder = builder.with_font_set(read(font)?, bold)?;
    }

    builder.build()?.export_to_file(&document, &args.output)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
