extern crate kaboom as root;

#[macro_use]
extern crate tracing;

use root::camera::PinholeCamera;
use root::parsing::config::Config;
use root::parsing::{get_settings, parse_config};
use root::renderer::{output_film, NaiveRenderer};
use root::tracer::Tracer;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    // overrides output_directory from the config file
    #[structopt(long)]
    pub output_directory: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: String, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::OFF,
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn init_logging(term_log_level: LevelFilter, write_log_level: LevelFilter) -> anyhow::Result<()> {
    let log_file = File::create("main.log").context("couldn't create main.log")?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(term_log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .with_filter(write_log_level),
        )
        .try_init()?;
    Ok(())
}

fn dry_run(tracer: &Tracer, config: &Config) {
    for render_settings in &config.render_settings {
        let resolution = render_settings.resolution;
        let camera =
            PinholeCamera::new(resolution.width, resolution.height, render_settings.vfov);
        let (px, py) = (resolution.width / 2, resolution.height / 2);
        let r = camera.get_ray(px, py);
        println!(
            "{}: center pixel ({}, {}) marched to {:?}, color {:?}",
            render_settings.filename,
            px,
            py,
            tracer.march(r),
            tracer.trace(&r)
        );
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let settings = get_settings(&opts.config_file)?;
    let mut config = parse_config(settings)?;

    // override output directory based on provided command line argument
    if let Some(output_directory) = opts.output_directory {
        config.output_directory = output_directory;
    }

    let threads = config
        .render_settings
        .iter()
        .map(|i| i.threads)
        .fold(1, |a, b| a.max(b));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .context("couldn't build the render thread pool")?;

    let tracer = Tracer::new(config.scene);

    if opts.dry_run {
        dry_run(&tracer, &config);
        return Ok(());
    }

    let renderer = NaiveRenderer::new();
    let output_directory = PathBuf::from(&config.output_directory);
    for render_settings in &config.render_settings {
        let resolution = render_settings.resolution;
        let camera =
            PinholeCamera::new(resolution.width, resolution.height, render_settings.vfov);
        let (film, _profile) = renderer.render(&tracer, &camera);
        let path = output_film(&output_directory, render_settings, &film)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    let term_log_level = parse_log_level(opts.print_log_level.clone(), LevelFilter::WARN);
    let write_log_level = parse_log_level(opts.write_log_level.clone(), LevelFilter::INFO);

    if let Err(e) = init_logging(term_log_level, write_log_level) {
        eprintln!("couldn't set up logging: {:?}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
