//! Karnaugh map minimizer - Command Line Interface
//!
//! Reads a function either from position lists or from a single-output PLA
//! file, prints the minimized expression and its groups, and optionally the
//! rectangles a map renderer would draw.

use clap::{ArgAction, Parser, ValueEnum};
use kmap_logic::{
    resolve_rectangles, Form, GridLayout, KmapError, MinimizeConfig, Minimized, Position,
    TieBreak, TruthTable,
};
use std::path::PathBuf;
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormArg {
    /// Sum of products
    Sop,
    /// Product of sums
    Pos,
}

impl From<FormArg> for Form {
    fn from(val: FormArg) -> Self {
        match val {
            FormArg::Sop => Form::Sop,
            FormArg::Pos => Form::Pos,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Earliest generated implicant wins
    Generation,
    /// Smallest pattern wins (0 < 1 < -)
    Lexicographic,
}

impl From<TieBreakArg> for TieBreak {
    fn from(val: TieBreakArg) -> Self {
        match val {
            TieBreakArg::Generation => TieBreak::GenerationOrder,
            TieBreakArg::Lexicographic => TieBreak::Lexicographic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Karnaugh map logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Number of variables (2 to 5), required unless --pla is given
    #[arg(short = 'n', long = "vars", required_unless_present = "pla")]
    vars: Option<usize>,

    /// True positions, comma separated
    #[arg(short = 'm', long = "ones", value_delimiter = ',', conflicts_with = "pla")]
    ones: Vec<Position>,

    /// Don't-care positions, comma separated
    #[arg(short = 'd', long = "dont-cares", value_delimiter = ',', conflicts_with = "pla")]
    dont_cares: Vec<Position>,

    /// Read the function from a single-output PLA file
    #[arg(long = "pla", value_name = "FILE")]
    pla: Option<PathBuf>,

    /// Normal form of the result
    #[arg(short = 'f', long = "form", value_enum, default_value = "sop")]
    form: FormArg,

    /// Tie-break rule for the greedy cover phase
    #[arg(long = "tie-break", value_enum, default_value = "generation")]
    tie_break: TieBreakArg,

    /// Print the map rectangles of every group
    #[arg(short = 'r', long = "rectangles")]
    rectangles: bool,

    /// Provide execution summary
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Log minimizer decisions to stderr (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn load_table(args: &Args) -> Result<TruthTable, KmapError> {
    match &args.pla {
        Some(path) => Ok(TruthTable::from_pla_file(path)?),
        None => {
            let vars = args.vars.unwrap_or_default();
            Ok(TruthTable::from_sets(vars, &args.ones, &args.dont_cares)?)
        }
    }
}

fn print_rectangles(result: &Minimized) -> Result<(), KmapError> {
    let layout = GridLayout::for_variables(result.num_vars())?;
    let groups = result.groups();
    for map in 0..layout.num_maps() {
        let selector = (layout.num_maps() > 1).then_some(map);
        let rects = resolve_rectangles(&groups, &layout, selector);
        println!(
            "map {} ({} x {}): {} rectangle(s)",
            map,
            layout.rows(),
            layout.cols(),
            rects.len()
        );
        for rect in &rects {
            let tiles: Vec<String> = rect
                .tiles
                .iter()
                .map(|t| format!("({}, {})", t.row, t.col))
                .collect();
            println!(
                "  group {}: {}x{} at ({}, {}) tiles {}",
                rect.group,
                rect.height,
                rect.width,
                rect.row,
                rect.col,
                tiles.join(" ")
            );
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), KmapError> {
    let table = load_table(args)?;
    let config = MinimizeConfig::new().with_tie_break(args.tie_break.into());

    if args.summary {
        eprintln!(
            "Input: {} variables, {} true, {} don't-care",
            table.num_vars(),
            table.true_set().len(),
            table.dont_care_set().len()
        );
    }

    let result = table.minimize_with_config(args.form.into(), &config);

    println!("{}", result.expression());
    for (cube, group) in result.cubes().iter().zip(result.groups()) {
        println!("{} {:?}", cube, group);
    }

    if args.summary {
        eprintln!(
            "Output: {} implicant(s), {} essential, {} literal(s)",
            result.cubes().len(),
            result.essentials().len(),
            result.num_literals()
        );
    }

    if args.rectangles {
        print_rectangles(&result)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
