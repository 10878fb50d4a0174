// Copyright 2025. Command-line front end for the shapes dataset writer.
//
// Usage:
//   shapes-dataset [generate] [--out <dir>] [--count <n>] [--seed <n>]
//                  [--shapes <a,b,..>] [--threads <n>]
//   shapes-dataset render <shape> -o <file.png> [--seed <n>] [--color <c>]
//                  [--size <n>] [--angle <deg>]
//   shapes-dataset list

use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shape_synth::{sample_params, EngineConfig, PaletteColor, ShapeKind, ShapeSynth};
use shapes_dataset::{save_png, write_dataset, DatasetConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("generate");

    match command {
        "generate" => cmd_generate(args.get(2..).unwrap_or(&[])),
        flag if flag.starts_with("--") => cmd_generate(&args[1..]),
        "render" => cmd_render(&args[2..]),
        "list" => cmd_list(),
        "help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("shapes-dataset: synthetic 2D geometric shape images");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate [--out <dir>] [--count <n>] [--seed <n>] [--shapes <a,b,..>] [--threads <n>]");
    eprintln!("      Write <count> images per shape to <dir>/<shape>/<shape>_<i>.png.");
    eprintln!("      This is the default command.");
    eprintln!();
    eprintln!("  render <shape> -o <file.png> [--seed <n>] [--color <c>] [--size <n>] [--angle <deg>]");
    eprintln!("      Render a single image.");
    eprintln!();
    eprintln!("  list");
    eprintln!("      List shape names and palette colors.");
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", msg);
    process::exit(1);
}

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> T {
    let Some(value) = value else {
        fail(format!("{} needs a value", flag));
    };
    value
        .parse()
        .unwrap_or_else(|_| fail(format!("invalid value for {}: {}", flag, value)))
}

fn engine() -> ShapeSynth {
    ShapeSynth::new(EngineConfig::default()).unwrap_or_else(|e| fail(e))
}

fn cmd_list() {
    println!("Shapes:");
    for kind in ShapeKind::ALL {
        println!("  {:<14} {:?}", kind.name(), kind.symmetry());
    }
    println!("Colors:");
    for color in PaletteColor::ALL {
        let c = color.rgba();
        println!("  {:<14} ({}, {}, {})", color.name(), c.r, c.g, c.b);
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = DatasetConfig::default();

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "--out" => config.out_dir = PathBuf::from(parse_value::<String>(flag, value)),
            "--count" => config.count = parse_value(flag, value),
            "--seed" => config.seed = Some(parse_value(flag, value)),
            "--threads" => config.threads = parse_value(flag, value),
            "--shapes" => {
                let list: String = parse_value(flag, value);
                config.shapes = list
                    .split(',')
                    .map(|name| ShapeKind::from_str(name.trim()).unwrap_or_else(|e| fail(e)))
                    .collect();
            }
            _ => {
                eprintln!("Unknown option: {}", flag);
                print_usage();
                process::exit(1);
            }
        }
        i += 2;
    }

    let engine = engine();
    match write_dataset(&engine, &config) {
        Ok(summary) => {
            log::info!(
                "done: {} written, {} skipped, seed {}",
                summary.written,
                summary.skipped,
                summary.seed
            );
            println!(
                "Wrote {} images ({} skipped) to {}",
                summary.written,
                summary.skipped,
                summary.out_dir.display()
            );
        }
        Err(e) => fail(e),
    }
}

fn cmd_render(args: &[String]) {
    if args.is_empty() {
        eprintln!("Usage: shapes-dataset render <shape> -o <file.png> [--seed <n>] [--color <c>] [--size <n>] [--angle <deg>]");
        process::exit(1);
    }

    let kind = ShapeKind::from_str(&args[0]).unwrap_or_else(|e| fail(e));
    let mut output: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut color: Option<PaletteColor> = None;
    let mut size: Option<u32> = None;
    let mut angle: Option<u32> = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "-o" => output = Some(parse_value(flag, value)),
            "--seed" => seed = Some(parse_value(flag, value)),
            "--color" => color = Some(parse_value(flag, value)),
            "--size" => size = Some(parse_value(flag, value)),
            "--angle" => angle = Some(parse_value::<u32>(flag, value) % 360),
            _ => {
                eprintln!("Unknown option: {}", flag);
                process::exit(1);
            }
        }
        i += 2;
    }

    let output = output.unwrap_or_else(|| format!("{}.png", kind.name()));
    let engine = engine();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut params =
        sample_params(kind, &engine.config().sampler, &mut rng).unwrap_or_else(|e| fail(e));
    params.color = color.unwrap_or(params.color);
    params.size = size.unwrap_or(params.size);
    params.angle = angle.unwrap_or(params.angle);

    println!(
        "Rendering {} ({}, size {}, {}°)...",
        kind, params.color, params.size, params.angle
    );
    let canvas = engine
        .render(kind, &params, &mut rng)
        .unwrap_or_else(|e| fail(e));
    save_png(Path::new(&output), canvas).unwrap_or_else(|e| fail(e));
    println!("Saved: {}", output);
}
