use mazewalk::{
    app::{Session, SessionConfig},
    logging,
    maze::Direction,
    solvers::Solver,
};

fn read_line(input: &mut String) -> std::io::Result<&str> {
    input.clear();
    std::io::stdin().read_line(input)?;
    Ok(input.trim())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = logging::init("mazewalk.log");

    let mut input = String::new();
    println!("Enter maze dimensions (width height). Maximum size is 255x255:");
    let dims = read_line(&mut input)?
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u8>().ok())
        .collect::<Vec<_>>();

    let &[width, height] = dims.as_slice() else {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    };

    let mut session = match Session::new(&SessionConfig {
        width,
        height,
        ..SessionConfig::default()
    }) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };

    println!("Select how to explore the maze:");
    println!("1. {}", Solver::Dfs);
    println!("2. {}", Solver::Bfs);
    println!("3. Manual (w/a/s/d to move, q to quit)");
    match read_line(&mut input)? {
        "1" => run_search(&mut session, Solver::Dfs)?,
        "2" => run_search(&mut session, Solver::Bfs)?,
        "3" => run_manual(&mut session)?,
        _ => eprintln!("Invalid selection."),
    }
    Ok(())
}

/// Drives the search one tick at a time until it completes.
fn run_search(session: &mut Session, solver: Solver) -> Result<(), Box<dyn std::error::Error>> {
    session.start_search(solver)?;
    while !session.search().is_complete() {
        session.tick()?;
    }

    let search = session.search();
    println!(
        "{} visited {} of {} cells in {} steps.",
        solver,
        search.visited().len(),
        session.maze().cell_count(),
        search.steps()
    );
    match search.current_path() {
        Some(path) => {
            let route = path
                .iter()
                .rev()
                .map(|(x, y)| format!("({x},{y})"))
                .collect::<Vec<_>>()
                .join(" -> ");
            println!("Maze solved! Path of {} cells: {}", path.len(), route);
        }
        None => println!("No path found to the goal."),
    }
    Ok(())
}

fn run_manual(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    let goal = session.maze().goal();
    println!("You are at {:?}. The goal is {:?}.", session.current_position(), goal);

    while !session.is_complete() {
        input.clear();
        if std::io::stdin().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(());
        }
        for key in input.trim().chars() {
            let direction = match key {
                'w' => Direction::Up,
                's' => Direction::Down,
                'a' => Direction::Left,
                'd' => Direction::Right,
                'q' => return Ok(()),
                _ => continue,
            };
            if session.move_player(direction)?.is_none() {
                println!("A wall blocks the way {direction:?}.");
            }
        }
        println!(
            "At {:?}, {} cells from the goal.",
            session.current_position(),
            session.maze().distance_to_end(session.current_position())?
        );
    }
    println!(
        "Goal reached with {} wrong moves.",
        session.game().wrong_moves()
    );
    Ok(())
}
