use std::time::Instant;

use clap::{Parser, Subcommand};
use crossterm::style::{Attribute, Color as TermColor, Stylize};
use mixupcube::cube::Cube;
use mixupcube::error::Error;
use mixupcube::heuristic::{self, Heuristics, HEURISTICS};
use mixupcube::scramble::{gen_scramble, scramble_to_str, turns_from_str};
use mixupcube::solver::solve;
use mixupcube::turn::turn;
use spinners::Spinner;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "generates and writes one heuristic table to heuristics/<name>.ht")]
    Generate {
        name: String,
    },

    #[command(about = "generates and writes every registered heuristic table")]
    GenerateAll,

    #[command(about = "solves a cube, loading every heuristic table found on disk")]
    #[clap(group(
        clap::ArgGroup::new("state")
            .required(true)
            .args(&["cube", "scramble"]),
    ))]
    Solve {
        #[arg(short, long, help = "\"solved\" or 26 space-separated id,orient pairs")]
        cube: Option<String>,

        #[arg(short, long, help = "scramble a solved cube with this move string first")]
        scramble: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },

    #[command(about = "generates a random scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 25)]
        length: usize,
    },
}

fn parse_cube(s: &str) -> Result<Cube, Error> {
    if s.trim() == "solved" {
        return Ok(Cube::new_solved());
    }

    let mut cube = Cube::new_solved();
    let pairs: Vec<&str> = s.split_whitespace().collect();
    if pairs.len() != 26 {
        return Err(Error::InvalidCubeDescription(format!(
            "expected 26 id,orient pairs, got {}",
            pairs.len()
        )));
    }
    for (slot, pair) in pairs.iter().enumerate() {
        let (id, orient) = pair
            .split_once(',')
            .ok_or_else(|| Error::InvalidCubeDescription(pair.to_string()))?;
        cube.cubies[slot].id = id
            .parse()
            .map_err(|_| Error::InvalidCubeDescription(pair.to_string()))?;
        cube.cubies[slot].orient = orient
            .parse()
            .map_err(|_| Error::InvalidCubeDescription(pair.to_string()))?;
    }
    Ok(cube)
}

fn cmd_generate(name: &str) -> Result<(), Error> {
    let spec = heuristic::find(name)?;
    println!("Generating {}", spec.name);
    let table = heuristic::generate(spec)?;
    heuristic::save(spec.name, &table)?;
    println!("Wrote heuristics/{}.ht", spec.name);
    Ok(())
}

fn cmd_generate_all() -> Result<(), Error> {
    for spec in HEURISTICS {
        cmd_generate(spec.name)?;
    }
    Ok(())
}

fn cmd_solve(cube_desc: &Option<String>, scramble_desc: &Option<String>, verbose: bool) -> Result<(), Error> {
    let cube = if let Some(moves) = scramble_desc {
        let turns = turns_from_str(moves)?;
        let mut c = Cube::new_solved();
        for t in turns {
            c = turn(&c, t);
        }
        c
    } else {
        parse_cube(cube_desc.as_ref().unwrap())?
    };

    if verbose {
        println!("Loading heuristic tables...");
    }
    let heuristics = Heuristics::load_all();

    let start = Instant::now();
    let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
    let solution = solve(&cube, &heuristics);
    let elapsed = start.elapsed();
    spinner.stop_with_newline();

    let moves: Vec<i32> = solution.iter().copied().take_while(|&t| t >= 0).collect();
    println!("Solution: {}", scramble_to_str(&moves));
    println!("Move count: {}", moves.len());
    println!("Solve time: {elapsed:?}");
    println!("Wire format: {solution:?}");

    Ok(())
}

fn cmd_scramble(length: usize) -> Result<(), Error> {
    let turns = gen_scramble(length);
    println!("Scramble: {}", scramble_to_str(&turns));
    println!("Wire format: {turns:?}");
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Generate { name }) => cmd_generate(name),
        Some(Commands::GenerateAll) => cmd_generate_all(),
        Some(Commands::Solve { cube, scramble, verbose }) => cmd_solve(cube, scramble, *verbose),
        Some(Commands::Scramble { length }) => cmd_scramble(*length),
        None => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}
