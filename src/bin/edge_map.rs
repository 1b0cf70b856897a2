use sobel_bands::config::load_config;
use sobel_bands::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use sobel_bands::{FilterObserver, FilterParams, RowRange, SobelFilter};
use std::env;
use std::path::Path;

/// Prints worker lifecycle events to stdout.
struct ConsoleObserver;

impl FilterObserver for ConsoleObserver {
    fn worker_started(&self, worker: usize, rows: RowRange) {
        println!(
            "Worker {worker} started on rows [{}, {})",
            rows.begin, rows.end
        );
    }

    fn worker_finished(&self, worker: usize, _rows: RowRange, elapsed_ms: f64) {
        println!("Worker {worker} finished in {elapsed_ms:.3} ms");
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    println!(
        "Loaded {}: {} x {} pixels, 1 channel",
        config.input.display(),
        gray.width(),
        gray.height()
    );

    let filter = SobelFilter::new(FilterParams {
        workers: config.filter.workers,
        border: config.filter.border,
    });
    let output = filter
        .run_observed(&gray.as_view(), &ConsoleObserver)
        .map_err(|e| e.to_string())?;
    println!(
        "Sobel pass: {} workers  --  {:.3} ms",
        output.report.workers, output.report.total_ms
    );

    save_grayscale_u8(&output.image, &config.output.image)?;
    println!("Saved edge map to {}", config.output.image.display());

    if let Some(report_path) = &config.output.report_json {
        write_json_file(report_path, &output.report)?;
        println!("Saved timing report to {}", report_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: edge_map <config.json>".to_string()
}
