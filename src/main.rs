use clap::Parser;
use ghostdeck::config::DeckConfig;
use ghostdeck::deck::{build_deck, summary_lines};
use ghostdeck::ooxml::pptx::read_slides;
use log::info;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(
    name = "ghostdeck",
    about = "Build the Ghost Protocol client presentation",
    long_about = "Writes the five-slide Ghost Protocol deck (title, about, products & services,\n\
                  strategic value, pricing) as a PowerPoint .pptx file.",
    version
)]
struct Args {
    /// Output .pptx file (overrides the configuration file)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Re-open the written file and log each slide title
    #[arg(long)]
    verify: bool,
}

fn main() -> ghostdeck::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DeckConfig::from_yaml_file(path)?,
        None => DeckConfig::default(),
    };
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    let pres = build_deck(&config);
    pres.save(&config.output)?;

    for line in summary_lines(&config.output, pres.slide_count()) {
        println!("{}", line);
    }

    if args.verify {
        let slides = read_slides(&config.output)?;
        for (index, slide) in slides.iter().enumerate() {
            info!("slide {}: {}", index + 1, slide.title().unwrap_or("<untitled>"));
        }
        if slides.len() != pres.slide_count() {
            return Err(ghostdeck::Error::Verify {
                written: pres.slide_count(),
                read: slides.len(),
            });
        }
    }

    Ok(())
}
