extern crate orbitsim;
extern crate clap;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use orbitsim::tools::{now_utc, now_utc_compact, calculate_total_energy};
use orbitsim::{Case, TrajectoryExporter, TrajectorySink};
use std::path::Path;
use std::process;
use std::time::Instant;

fn main() {
    let matches = Command::new("orbitsim")
                            .version(env!("CARGO_PKG_VERSION"))
                            .about("2D N-Body simulator for gravitationally bound systems. Exports body trajectories for plotting.")
                            .subcommand(Command::new("run")
                                    .about("Run a simulation and export the trajectories")
                                    .arg(Arg::new("case_filename")
                                        .index(1)
                                        .help("JSON case description (default: solar system)"))
                                    .arg(Arg::new("output_filename")
                                        .short('o')
                                        .long("output")
                                        .value_name("file")
                                        .help("Output file (.json, .csv or binary for any other extension)"))
                                    .arg(Arg::new("delta_time")
                                        .long("delta-time")
                                        .value_name("seconds")
                                        .value_parser(value_parser!(f64))
                                        .allow_negative_numbers(true)
                                        .help("Override the time step of the case"))
                                    .arg(Arg::new("steps")
                                        .long("steps")
                                        .value_name("n")
                                        .value_parser(value_parser!(u32))
                                        .help("Override the number of steps of the case"))
                                    .arg(Arg::new("with_moons")
                                        .long("with-moons")
                                        .action(ArgAction::SetTrue)
                                        .conflicts_with("case_filename")
                                        .help("Add the Moon and the Galilean moons to the default solar system"))
                                    .arg(Arg::new("silent")
                                        .short('s')
                                        .long("silent")
                                        .action(ArgAction::SetTrue)
                                        .help("Only print WARNING/ERROR messages"))
                                     )
                            .subcommand(Command::new("new")
                                    .about("Write the default solar system case to a JSON file")
                                    .arg(Arg::new("case_filename")
                                        .required(true)
                                        .index(1)
                                        .help("JSON case description to create"))
                                    .arg(Arg::new("with_moons")
                                        .long("with-moons")
                                        .action(ArgAction::SetTrue)
                                        .help("Add the Moon and the Galilean moons"))
                                    )
                            .subcommand_required(true)
                            .arg_required_else_help(true)
                          .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => run(run_matches),
        Some(("new", new_matches)) => new(new_matches),
        _ => unreachable!(),
    };

    if let Err(message) = result {
        println!("[ERROR {} UTC] {}", now_utc(), message);
        process::exit(1);
    }
}

fn new(matches: &ArgMatches) -> Result<(), String> {
    let case_filename = matches.get_one::<String>("case_filename").ok_or("Missing case filename")?;
    let case_path = Path::new(case_filename);
    if case_path.exists() {
        return Err(format!("File '{}' already exists.", case_filename));
    }
    let case = Case::solar_system(matches.get_flag("with_moons"));
    case.write(case_path).map_err(|e| e.to_string())?;
    println!("[INFO {} UTC] Case with {} bodies written to '{}'.", now_utc(), case.bodies.len(), case_filename);
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let t1 = Instant::now();
    let silent_mode = matches.get_flag("silent");

    let mut case = match matches.get_one::<String>("case_filename") {
        Some(case_filename) => {
            let case = Case::from_path(Path::new(case_filename)).map_err(|e| format!("{} '{}'", e, case_filename))?;
            if !silent_mode {
                println!("[INFO {} UTC] Loaded case '{}'.", now_utc(), case_filename);
            }
            case
        },
        None => Case::solar_system(matches.get_flag("with_moons")),
    };
    if let Some(delta_time) = matches.get_one::<f64>("delta_time") {
        case.delta_time = *delta_time;
    }
    if let Some(steps) = matches.get_one::<u32>("steps") {
        case.steps = *steps;
    }

    let output_filename = match matches.get_one::<String>("output_filename") {
        Some(output_filename) => output_filename.clone(),
        None => format!("solar_system_simulation_2d_{}.json", now_utc_compact()),
    };

    let mut simulator = case.build_simulator().map_err(|e| e.to_string())?;
    let initial_energy = calculate_total_energy(case.gravitational_constant, simulator.bodies());
    if !silent_mode {
        println!("[INFO {} UTC] Simulating {} bodies: {} steps of {} seconds.", now_utc(), simulator.bodies().len(), case.steps, case.delta_time);
    }

    let mut exporter = TrajectoryExporter::new(silent_mode);
    simulator.simulate(case.delta_time, case.steps, &mut exporter).map_err(|e| e.to_string())?;

    let final_energy = calculate_total_energy(case.gravitational_constant, simulator.bodies());
    if initial_energy != 0. {
        let relative_energy_drift = (final_energy - initial_energy) / initial_energy.abs();
        if !silent_mode {
            println!("[INFO {} UTC] Relative energy drift: {:0.3e}", now_utc(), relative_energy_drift);
        }
    }

    exporter.finalize(&output_filename).map_err(|e| format!("{} '{}'", e, output_filename))?;

    if !silent_mode {
        println!("[INFO {} UTC] Execution time: {:0.3} seconds", now_utc(), t1.elapsed().as_secs_f64());
    }
    Ok(())
}
