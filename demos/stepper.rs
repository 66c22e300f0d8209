//! Animated A* in the terminal: prints one ASCII frame per timer tick until
//! the search finishes.
//!
//! Run: cargo run --bin pathviz-demo -- --diagonal --rate 2
//! Set RUST_LOG=debug (or trace) to see engine logging.

use std::thread;
use std::time::Duration;

use clap::Parser;
use pathviz_astar::{SearchStatus, Session};
use pathviz_demos::{Args, render_frame};

const FRAME: Duration = Duration::from_millis(80);

fn main() {
    env_logger::init();

    let opts = Args::parse().into_options();
    let grid = match opts.grid() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!("searching a {}x{} map with {:?}", grid.width(), grid.height(), opts.search);

    let mut session = Session::new(grid, opts.search, opts.animation);
    loop {
        let snap = session.snapshot();
        print!("\x1b[2J\x1b[H");
        println!("{}", render_frame(session.grid(), &snap));
        println!(
            "expansions {:>4}  open {:>3}  closed {:>3}  {:?}",
            snap.expansions(),
            snap.open_list().len(),
            snap.closed().len(),
            snap.status()
        );
        if snap.status() == SearchStatus::Idle {
            println!("map needs both a start and an end");
            break;
        }
        if snap.status().is_finished() {
            if let Some(cost) = snap.path_cost() {
                println!("path: {} steps, cost {}", snap.path().len(), cost);
            }
            break;
        }
        session.tick();
        thread::sleep(FRAME);
    }
}
