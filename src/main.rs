use std::io::Read;
use std::path::PathBuf;
use std::{env, fs, process};

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::prelude::*;

use teamdraw::models::TeamAssignment;
use teamdraw::{parsing, roster, teams};

struct Params {
    input: Option<PathBuf>,
    players_per_team: Option<usize>,
    seed: Option<u64>,
    min_players: usize,
    json: bool,
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let params = parse_args()?;
    run(&params)
}

fn run(params: &Params) -> Result<()> {
    let raw_text = read_input(params)?;
    let players = parsing::parse_from_text(&raw_text)?;
    info!(count = players.len(), "parsed roster");

    // Headless runs have no selection step, so every parsed player is in.
    let confirmed = roster::filter_selected(&players);
    if !roster::validate_min_count(&confirmed, params.min_players) {
        bail!(
            "need at least {} players to draw teams, got {}",
            params.min_players,
            confirmed.len()
        );
    }

    let names = roster::selected_names(&confirmed);
    let players_per_team = params
        .players_per_team
        .unwrap_or_else(|| roster::suggest_players_per_team(names.len()));

    let assignment = match params.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            teams::distribute_with_rng(&names, players_per_team, &mut rng)?
        }
        None => teams::distribute(&names, players_per_team)?,
    };
    info!(
        total_teams = assignment.total_teams,
        players_per_team, "teams drawn"
    );

    if params.json {
        print_json(&assignment)?;
    } else {
        print_text(&assignment);
    }

    Ok(())
}

fn parse_args() -> Result<Params> {
    let mut params = Params {
        input: None,
        players_per_team: None,
        seed: None,
        min_players: 2,
        json: false,
    };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-n" | "--per-team" => {
                let v = args.next().context("Missing value for --per-team")?;
                let v: usize = v.parse().context("Invalid value for --per-team")?;
                if v == 0 {
                    bail!("--per-team must be at least 1");
                }
                params.players_per_team = Some(v);
            }
            "--seed" => {
                let v = args.next().context("Missing value for --seed")?;
                params.seed = Some(v.parse().context("Invalid value for --seed")?);
            }
            "--min" => {
                let v = args.next().context("Missing value for --min")?;
                params.min_players = v.parse().context("Invalid value for --min")?;
            }
            "--json" => params.json = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                process::exit(0);
            }
            _ if !a.starts_with('-') && params.input.is_none() => {
                params.input = Some(PathBuf::from(a));
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(params)
}

fn read_input(params: &Params) -> Result<String> {
    match &params.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read roster from stdin")?;
            Ok(buf)
        }
    }
}

fn print_text(assignment: &TeamAssignment) {
    for (index, members) in assignment.teams.iter().enumerate() {
        let color = teams::team_color_for(index);
        println!("{} ({})", color.label, color.border_color);
        for name in members {
            println!("  {name}");
        }
        println!();
    }
}

#[derive(Serialize)]
struct TeamJson<'a> {
    label: &'static str,
    border_color: &'static str,
    members: &'a [String],
}

#[derive(Serialize)]
struct DrawJson<'a> {
    total_teams: usize,
    players_per_team: usize,
    teams: Vec<TeamJson<'a>>,
}

fn print_json(assignment: &TeamAssignment) -> Result<()> {
    let draw = DrawJson {
        total_teams: assignment.total_teams,
        players_per_team: assignment.players_per_team,
        teams: assignment
            .teams
            .iter()
            .enumerate()
            .map(|(index, members)| {
                let color = teams::team_color_for(index);
                TeamJson {
                    label: color.label,
                    border_color: color.border_color,
                    members,
                }
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&draw)?);
    Ok(())
}
