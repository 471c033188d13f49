use anyhow::Result;
use clap::Parser;

use openlaunch_session::{ClubType, SessionAggregator, Shot, ShotSimulator};

#[derive(Parser, Debug)]
#[command(name = "openlaunch-session")]
#[command(about = "Golf Launch Monitor - simulated session statistics", long_about = None)]
struct Args {
    /// Number of shots to simulate
    #[arg(short = 'n', long, default_value = "10")]
    shots: usize,

    /// Club for the session (e.g. driver, 3-wood, 7-iron, pw, 7i)
    #[arg(short, long, default_value = "driver")]
    club: ClubType,

    /// Seed for repeatable simulated readings
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate readings without club head speed
    #[arg(long)]
    no_club_speed: bool,

    /// Print the full session state as JSON
    #[arg(long)]
    json: bool,
}

fn print_shot(index: usize, shot: &Shot) {
    let (carry_low, carry_high) = shot.estimated_carry_range();

    println!("{}", "-".repeat(40));
    println!("  Shot #{} ({})", index, shot.club().label());
    if let Some(club_speed) = shot.club_speed_mph() {
        println!("  Club Speed:   {:.1} mph", club_speed);
    }
    println!("  Ball Speed:   {:.1} mph", shot.ball_speed_mph());
    if let Some(smash) = shot.smash_factor() {
        println!("  Smash Factor: {:.2}", smash);
    }
    println!("  Est. Carry:   {:.0} yards", shot.estimated_carry_yards());
    println!("  Range:        {:.0}-{:.0} yards", carry_low, carry_high);
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut session = SessionAggregator::with_club(args.club);
    let simulator = ShotSimulator::new(args.seed, !args.no_club_speed);

    log::info!(
        "[SESSION] Simulating {} shots with {}",
        args.shots,
        session.current_club()
    );

    for reading in simulator.take(args.shots) {
        let shot = session.record_shot(reading.ball_speed_mph, reading.club_speed_mph, None)?;
        if !args.json {
            print_shot(session.len(), &shot);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.session_state())?);
    } else {
        println!("{}", "=".repeat(40));
        println!("  Session Summary");
        println!("{}", "=".repeat(40));
        println!("{}", session.get_session_stats());
    }

    Ok(())
}
