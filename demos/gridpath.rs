//! Terminal grid pathfinding visualizer.
//!
//! Run: cargo run --bin gridpath -- --help

use std::error::Error;
use std::io::Write;

use gridpath_core::GridEditor;
use gridpath_demos::cli::{self, Args};
use gridpath_demos::config::load_config;
use gridpath_demos::headless::run_headless;
use gridpath_demos::interactive::{Visualizer, run_interactive};
use gridpath_demos::starting_grid;
use gridpath_store::{JsonStore, LayoutStore};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n");
            eprintln!("{}", cli::HELP);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", cli::HELP);
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = load_config(args)?;
    let mut store = JsonStore::open(&cfg.store_dir)?;

    if args.list {
        let layouts = store.list()?;
        if layouts.is_empty() {
            println!("no saved layouts in {}", store.dir().display());
        }
        for l in layouts {
            println!("{:>4}  {}  ({})", l.id, l.name, l.created_at);
        }
        return Ok(());
    }

    let grid = starting_grid(args, &cfg, &store)?;
    let algorithm = cfg.algorithm()?;

    if args.headless {
        if args.save {
            let id = store.save(&cfg.layout_name, &grid)?;
            println!("saved layout {id}");
        }
        let outcome = run_headless(&grid, algorithm, cfg.speed())?;
        println!("{outcome}");
        return Ok(());
    }

    let vis = Visualizer::new(
        GridEditor::from_grid(grid),
        algorithm,
        cfg.speed(),
        store,
        cfg.layout_name.clone(),
    );
    run_interactive(vis)
}
