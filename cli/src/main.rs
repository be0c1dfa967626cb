use clap::{Parser, Subcommand};
use heatmap::structures::{DayOrdering, HeatmapGrid, DAYS_PER_WEEK};
use heatmap::{bucketize, hour_label, ColorScale, DiscreteScale, GradientScale};
use std::fs::File;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render a weekly activity heatmap to an image
    Render {
        data_file: String,
        out_file: String,
        #[clap(short, long, default_value = "12")]
        segments: usize,
        /// Continuous gradient instead of the discrete 6-level palette
        #[clap(long)]
        gradient: bool,
        #[clap(long)]
        monday_first: bool,
        #[clap(long, default_value = "24")]
        cell_size: u32,
        /// Gradient start color, e.g. "#F4F4F4"
        #[clap(long)]
        start_color: Option<String>,
        /// Gradient end color, e.g. "#FF0000"
        #[clap(long)]
        end_color: Option<String>,
    },
    /// Print the bucketed grid as a text table
    Show {
        data_file: String,
        #[clap(short, long, default_value = "12")]
        segments: usize,
        #[clap(long)]
        monday_first: bool,
    },
}

fn day_ordering(monday_first: bool) -> DayOrdering {
    if monday_first {
        DayOrdering::MondayFirst
    } else {
        DayOrdering::SundayFirst
    }
}

/// JSON files hold a plain array of timestamp strings; CSV files carry the
/// timestamp in the first column with a header row.
fn read_timestamps(path: &str) -> Vec<String> {
    let file = File::open(path).expect("Could not open file");

    if path.ends_with(".csv") {
        let mut reader = csv::Reader::from_reader(file);
        reader
            .records()
            .map(|result| {
                let record = result.expect("Could not read record");
                record.get(0).expect("Missing timestamp column").to_string()
            })
            .collect()
    } else {
        serde_json::from_reader(file).expect("Could not parse timestamp array")
    }
}

fn render_image(grid: &HeatmapGrid, scale: &ColorScale, cell_size: u32) -> image::RgbImage {
    let width = grid.segments_per_day as u32 * cell_size;
    let height = DAYS_PER_WEEK as u32 * cell_size;

    image::RgbImage::from_fn(width, height, |x, y| {
        let day_index = (y / cell_size) as usize;
        let segment_index = (x / cell_size) as usize;

        image::Rgb(scale.rgb_for(grid.magnitude(day_index, segment_index), grid.max_magnitude))
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            data_file,
            out_file,
            segments,
            gradient,
            monday_first,
            cell_size,
            start_color,
            end_color,
        } => {
            let timestamps = read_timestamps(&data_file);
            let grid = bucketize(&timestamps, segments, day_ordering(monday_first))
                .expect("Could not bucket timestamps");

            let scale = if gradient {
                let start = start_color.as_deref().unwrap_or("#F4F4F4");
                let end = end_color.as_deref().unwrap_or("#FF0000");
                ColorScale::Gradient(
                    GradientScale::from_hex_strs(start, end).expect("Could not parse color"),
                )
            } else {
                ColorScale::Discrete(DiscreteScale::default())
            };

            let canvas = render_image(&grid, &scale, cell_size);
            canvas.save(out_file).expect("Could not save image");
        }
        Commands::Show {
            data_file,
            segments,
            monday_first,
        } => {
            let timestamps = read_timestamps(&data_file);
            println!("Found {} items!", timestamps.len());

            let grid = bucketize(&timestamps, segments, day_ordering(monday_first))
                .expect("Could not bucket timestamps");

            print!("{:<5}", "");
            for segment in 0..grid.segments_per_day {
                print!("{:>7}", hour_label(segment, grid.segments_per_day));
            }
            println!();

            for (day_index, row) in grid.rows().iter().enumerate() {
                print!("{:<5}", grid.day_ordering.label(day_index));
                for bucket in row {
                    print!("{:>7}", bucket.magnitude());
                }
                println!();
            }

            println!("Max bucket: {}", grid.max_magnitude);
        }
    }
}
