use std::time::Instant;

use mazewalk::{generators, logging, solvers::Solver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = logging::init("profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);

    let mut rng = generators::get_rng(Some(0));
    for iter in 0..num_iters {
        let started = Instant::now();
        let maze = generators::generate_maze(u8::MAX, u8::MAX, &mut rng)?;
        let generated = started.elapsed();

        for solver in [Solver::Dfs, Solver::Bfs] {
            let started = Instant::now();
            let path = mazewalk::solvers::solve_maze(&maze, solver)?;
            tracing::info!(
                "[profile] iter {}: {} solved in {:?}, path length {}",
                iter,
                solver,
                started.elapsed(),
                path.map_or(0, |p| p.len())
            );
        }
        tracing::info!("[profile] iter {}: generated in {:?}", iter, generated);
    }
    Ok(())
}
