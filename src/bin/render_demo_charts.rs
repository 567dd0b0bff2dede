use std::fs;
use std::path::{Path, PathBuf};

use linechart_rs::api::{demo_host, mount_demo_charts};
use linechart_rs::engine::{EngineOptions, LineChartConstructor};
use linechart_rs::error::ChartResult;
use linechart_rs::host::{Surface, SurfaceRegistry, Viewport};
use linechart_rs::render::SvgRenderer;
use linechart_rs::telemetry::init_default_tracing;

const DEFAULT_OUTPUT_DIR: &str = "target/demo-charts";
const DEFAULT_SURFACE_WIDTH: u32 = 800;
const DEFAULT_SURFACE_HEIGHT: u32 = 400;

#[derive(Debug)]
struct CliArgs {
    output_dir: PathBuf,
    options_path: Option<PathBuf>,
    host_path: Option<PathBuf>,
    png: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let options = match &args.options_path {
        Some(path) => {
            let raw = read_file(path)?;
            EngineOptions::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => EngineOptions::default(),
    };
    let host = match &args.host_path {
        Some(path) => {
            let raw = read_file(path)?;
            SurfaceRegistry::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => demo_host(Viewport::new(DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)),
    };

    fs::create_dir_all(&args.output_dir).map_err(|err| {
        format!(
            "failed to create output dir `{}`: {err}",
            args.output_dir.display()
        )
    })?;

    let written = if args.png {
        render_png(&host, options, &args.output_dir)?
    } else {
        render_svg(&host, options, &args.output_dir).map_err(|err| err.to_string())?
    };

    println!("done: wrote {written} chart file(s) to {}", args.output_dir.display());
    Ok(())
}

fn render_svg(
    host: &SurfaceRegistry,
    options: EngineOptions,
    output_dir: &Path,
) -> ChartResult<usize> {
    let mut constructor =
        LineChartConstructor::new(options, |_surface: &Surface| -> ChartResult<SvgRenderer> {
            Ok(SvgRenderer::new())
        });
    let outcome = mount_demo_charts(host, &mut constructor)?;
    for surface_id in &outcome.omitted {
        eprintln!("warning: surface `{surface_id}` not found; chart omitted");
    }
    for (surface_id, chart) in &outcome.mounted {
        chart
            .renderer()
            .write_to(output_dir.join(format!("{surface_id}.svg")))?;
    }
    Ok(outcome.mounted.len())
}

#[cfg(feature = "cairo-backend")]
fn render_png(
    host: &SurfaceRegistry,
    options: EngineOptions,
    output_dir: &Path,
) -> Result<usize, String> {
    use linechart_rs::render::CairoRenderer;

    let mut constructor =
        LineChartConstructor::new(options, |surface: &Surface| -> ChartResult<CairoRenderer> {
            CairoRenderer::new(surface.viewport)
        });
    let outcome = mount_demo_charts(host, &mut constructor).map_err(|err| err.to_string())?;
    for surface_id in &outcome.omitted {
        eprintln!("warning: surface `{surface_id}` not found; chart omitted");
    }
    for (surface_id, chart) in &outcome.mounted {
        chart
            .renderer()
            .write_png(output_dir.join(format!("{surface_id}.png")))
            .map_err(|err| err.to_string())?;
    }
    Ok(outcome.mounted.len())
}

#[cfg(not(feature = "cairo-backend"))]
fn render_png(
    _host: &SurfaceRegistry,
    _options: EngineOptions,
    _output_dir: &Path,
) -> Result<usize, String> {
    Err("--png requires feature `cairo-backend`".to_owned())
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut options_path = None;
    let mut host_path = None;
    let mut png = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--options" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --options".to_owned())?;
                options_path = Some(PathBuf::from(value));
            }
            "--host" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --host".to_owned())?;
                host_path = Some(PathBuf::from(value));
            }
            "--png" => png = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        output_dir,
        options_path,
        host_path,
        png,
    })
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin render_demo_charts -- [options]\n\nOptions:\n  --output-dir <path>   Directory for rendered charts (default: {DEFAULT_OUTPUT_DIR})\n  --options <path>      Engine options json\n  --host <path>         Host layout json listing surfaces\n  --png                 Render png through cairo (feature `cairo-backend`)\n  -h, --help            Show this message"
    )
}
