//! CLI tool for gridview - renders a JSON table headlessly and outputs the
//! paint log as JSON
//!
//! Usage:
//!   gridview_cli <table.json>                                  # JSON to stdout
//!   gridview_cli <table.json> --width 400 --height 300          # viewport size
//!   gridview_cli <table.json> --scroll-left 120 --scroll-top 40 # scrolled frame
//!   gridview_cli <table.json> --hit 60,25                       # hit test a point
//!   gridview_cli <table.json> -o out.json                       # JSON to file
//!
//! Set `RUST_LOG=gridview=trace` to see render and scroll tracing on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use gridview::layout::Axis;
use gridview::{Grid, GridConfig, HeadlessHost};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: gridview_cli <table.json> [--width W] [--height H] \
                     [--scroll-left X] [--scroll-top Y] [--hit X,Y] [-o output.json]";

struct Args {
    input: String,
    width: f64,
    height: f64,
    scroll_left: f64,
    scroll_top: f64,
    hit: Option<(f64, f64)>,
    output: Option<String>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn number(flag: &str, value: Option<&String>) -> f64 {
    match value.map(|v| v.parse::<f64>()) {
        Some(Ok(n)) => n,
        _ => fail(&format!("{flag} expects a number\n{USAGE}")),
    }
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        fail(USAGE);
    }

    let mut parsed = Args {
        input: args[1].clone(),
        width: 800.0,
        height: 600.0,
        scroll_left: 0.0,
        scroll_top: 0.0,
        hit: None,
        output: None,
    };

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--width" => parsed.width = number("--width", value),
            "--height" => parsed.height = number("--height", value),
            "--scroll-left" => parsed.scroll_left = number("--scroll-left", value),
            "--scroll-top" => parsed.scroll_top = number("--scroll-top", value),
            "--hit" => {
                let point = value
                    .and_then(|v| v.split_once(','))
                    .and_then(|(x, y)| Some((x.trim().parse().ok()?, y.trim().parse().ok()?)));
                match point {
                    Some(point) => parsed.hit = Some(point),
                    None => fail(&format!("--hit expects X,Y\n{USAGE}")),
                }
            }
            "-o" => match value {
                Some(path) => parsed.output = Some(path.clone()),
                None => fail(USAGE),
            },
            other => fail(&format!("Unknown argument: {other}\n{USAGE}")),
        }
        i += 2;
    }
    parsed
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args();

    // Read input file
    let json = match fs::read_to_string(&args.input) {
        Ok(j) => j,
        Err(e) => fail(&format!("Error reading {}: {}", args.input, e)),
    };

    // Parse and validate the table
    let (table, options) = match GridConfig::from_json(&json).and_then(GridConfig::into_parts) {
        Ok(parts) => parts,
        Err(e) => fail(&format!("Error loading table: {e}")),
    };

    let mut host = HeadlessHost::new(args.width, args.height);
    let mut grid = match Grid::new(&mut host, table, options) {
        Ok(grid) => grid,
        Err(e) => fail(&format!("Error creating grid: {e}")),
    };

    grid.set_scroll(Axis::Horizontal, args.scroll_left);
    grid.set_scroll(Axis::Vertical, args.scroll_top);

    // Record only the final frame
    grid.surface_mut().clear();
    let stats = grid.render();
    let hit = args.hit.map(|(x, y)| grid.bound_at(x, y));

    let report = serde_json::json!({
        "rows": grid.table().row_count(),
        "cols": grid.table().col_count(),
        "contentWidth": grid.layout().total_width(),
        "contentHeight": grid.layout().total_height(),
        "scrollLeft": grid.scroll_left(),
        "scrollTop": grid.scroll_top(),
        "visible": stats,
        "scrollbars": {
            "horizontal": grid.scrollbar(Axis::Horizontal).geometry(),
            "vertical": grid.scrollbar(Axis::Vertical).geometry(),
        },
        "hit": hit,
        "ops": grid.surface().ops(),
    });

    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => fail(&format!("Error serializing JSON: {e}")),
    };

    // Output
    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                fail(&format!("Error writing {path}: {e}"));
            }
            eprintln!("Written: {path}");
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
