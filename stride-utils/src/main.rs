// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Green, Purple, Yellow};
use clap::Parser;
use stride_core::nalgebra::Point2;
use stride_core::{Config, JointAngles, Solver};

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Stride leg kinematics tool", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", alias = "conf", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Solve the joint angles and encoder positions for a foot target.
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Target X.
        x: f64,
        /// Target Y.
        y: f64,
    },
    /// Calculate the joint positions for the given angles.
    #[command(allow_negative_numbers = true)]
    Forward {
        /// Hip angle in degrees.
        theta1: f64,
        /// Knee angle in degrees.
        theta2: f64,
    },
    /// Convert an actuator angle to an encoder position.
    #[command(allow_negative_numbers = true)]
    Encoder {
        /// Angle in degrees.
        angle: f64,
    },
    /// Show the reachable workspace.
    Reach,
}

fn solve(solver: &Solver, target: Point2<f64>) -> anyhow::Result<()> {
    let solution = solver.solve(&target)?;

    let angles = &solution.angles;
    let foot = solution.chain.foot();

    println!(
        "{} θ1 = {:.2}°, θ2 = {:.2}°",
        Yellow.bold().paint("Calculated angles:"),
        angles.hip(),
        angles.knee()
    );
    println!(
        "{} θ1 = {:.2}rad, θ2 = {:.2}rad",
        Yellow.bold().paint("Calculated angles in radians:"),
        angles.hip_rad(),
        angles.knee_rad()
    );
    println!(
        "{} ({:.2}, {:.2})",
        Yellow.bold().paint("Calculated position:"),
        foot.x,
        foot.y
    );
    println!(
        "{} ({}, {})",
        Yellow.bold().paint("Calculated offset:"),
        solution.offsets.0,
        solution.offsets.1
    );
    println!(
        "{} ({}), ({})",
        Yellow.bold().paint("Calculated digital positions:"),
        solution.positions.0,
        solution.positions.1
    );

    log::debug!(
        "Knee joint: ({:.2}, {:.2})",
        solution.chain.knee().x,
        solution.chain.knee().y
    );
    log::debug!("Reconstruction error: {:e}", solution.error());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config: Config = match &args.config {
        Some(path) => {
            log::debug!("Reading configuration from {}", path.display());
            stride_core::from_file(path)?
        }
        None => Config::default(),
    };

    log::trace!("{}", config);

    let solver = Solver::from_config(&config)?;

    match args.command {
        Command::Solve { x, y } => {
            log::debug!("Solving target ({}, {})", x, y);

            solve(&solver, Point2::new(x, y))?;
        }
        Command::Forward { theta1, theta2 } => {
            let angles = JointAngles::from_degrees(theta1, theta2);
            let chain = solver.forward(&angles);

            println!("{} {}", Purple.bold().paint("Angles:"), angles);
            for (name, joint) in ["Hip", "Knee", "Foot"].iter().zip(chain.joints()) {
                println!(
                    "{} ({:.2}, {:.2})",
                    Yellow.bold().paint(format!("{:<5}", name)),
                    joint.x,
                    joint.y
                );
            }
        }
        Command::Encoder { angle } => {
            println!(
                "{} {:.2}° » {}",
                Yellow.bold().paint("Encoder"),
                angle,
                solver.position(angle)
            );
        }
        Command::Reach => {
            let links = solver.links();

            println!("{} {}", Purple.bold().paint("Links:"), links);
            println!(
                "{} [{:.2}, {:.2}]",
                Green.bold().paint("Reachable annulus:"),
                links.min_reach(),
                links.max_reach()
            );
        }
    }

    Ok(())
}
