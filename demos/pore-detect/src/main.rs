use argh::FromArgs;
use std::path::PathBuf;

use poros::analysis::{analyze, config::PoreConfig, report::area_histogram};
use poros::io::{export::save_pore_areas, png};
use poros::viz::render_pores;

#[derive(FromArgs)]
/// Detect pores in a black & white micrograph and report their sizes
struct Args {
    /// path to an input 8-bit grayscale PNG
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// minimum pore size in pixels; smaller pores are erased
    #[argh(option, short = 't', default = "20")]
    size_threshold: i64,

    /// physical area covered by one pixel (e.g. um^2)
    #[argh(option, short = 'p', default = "1.35 * 1.35")]
    pixel_area: f64,

    /// seed for the pore color shuffle
    #[argh(option, default = "42")]
    seed: u64,

    /// path of the JSON file receiving the pore areas
    #[argh(option, default = "PathBuf::from(\"pore_areas.json\")")]
    areas_path: PathBuf,

    /// path of the PNG file receiving the colored overlay
    #[argh(option, default = "PathBuf::from(\"pores.png\")")]
    overlay_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image and binarize it
    let bw = png::read_binary_image_png(&args.image_path, 127)?;
    log::info!(
        "loaded {}x{} image with {} white pixels",
        bw.rows(),
        bw.cols(),
        bw.num_white_pixels()
    );

    // detect the pores, erase the small ones, and compute areas
    let config = PoreConfig::new(args.pixel_area, args.size_threshold)?;
    let analysis = analyze(&bw, &config)?;
    log::info!(
        "retained {} pores above {} pixels",
        analysis.pores.len(),
        config.size_threshold
    );

    // plot an RGB representation of the pores
    let overlay = render_pores(&analysis.filtered, &analysis.pores, args.seed)?;
    png::write_image_png_rgb8(&args.overlay_path, &overlay)?;

    // export the pore areas for downstream tooling
    let dataset_name = args
        .image_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
        .to_string()
        + "_pore_area";
    save_pore_areas(&args.areas_path, &dataset_name, &analysis.areas)?;

    // print a coarse area distribution
    let mut hist = vec![0usize; 150];
    area_histogram(&analysis.areas, (0.0, 1500.0), &mut hist)?;
    for (bin, count) in hist.iter().enumerate().filter(|(_, &c)| c > 0) {
        println!(
            "area [{:7.1}, {:7.1}): {}",
            bin as f64 * 10.0,
            (bin + 1) as f64 * 10.0,
            count
        );
    }

    Ok(())
}
