use chrono::{Local, NaiveTime};
use clap::{Args, Subcommand};
use dincharya_core::routine::{format_clock, parse_clock};
use dincharya_core::{
    character_by_name, match_birth_date, parse_birth_date, spawn_ticker, Character, Config,
    DincharyaPlanner, Event, SystemClock, ValidationError,
};

use crate::display;

/// Whose routine to show.
#[derive(Args)]
pub struct Whose {
    /// Character name (e.g. "Arjuna")
    #[arg(long, conflicts_with = "born")]
    character: Option<String>,
    /// Birth date (YYYY-MM-DD); picks the matching character
    #[arg(long)]
    born: Option<String>,
}

impl Whose {
    fn resolve(&self) -> Result<Option<&'static Character>, ValidationError> {
        if let Some(name) = &self.character {
            return character_by_name(name)
                .map(Some)
                .ok_or_else(|| ValidationError::UnknownCharacter(name.clone()));
        }
        match &self.born {
            Some(born) => parse_birth_date(born)
                .map(|date| Some(match_birth_date(date)))
                .ok_or_else(|| ValidationError::InvalidBirthDate(born.clone())),
            None => Ok(None),
        }
    }
}

#[derive(Subcommand)]
pub enum RoutineAction {
    /// Show the full day's routine
    Show {
        #[command(flatten)]
        whose: Whose,
        /// Clock time to mark as current (HH:MM, default now)
        #[arg(long)]
        at: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the activity for the current time
    Current {
        #[command(flatten)]
        whose: Whose,
        /// Clock time (HH:MM, default now)
        #[arg(long)]
        at: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Follow the routine, printing each time the activity changes (Ctrl-C to stop)
    Watch {
        #[command(flatten)]
        whose: Whose,
    },
}

fn clock_time(at: Option<&str>) -> Result<NaiveTime, ValidationError> {
    match at {
        Some(at) => parse_clock(at),
        None => Ok(Local::now().time()),
    }
}

fn planner(
    config: &Config,
    whose: &Whose,
    at: Option<&str>,
) -> Result<DincharyaPlanner, Box<dyn std::error::Error>> {
    let character = whose.resolve()?;
    let mut planner = DincharyaPlanner::new(config.schedule.time_mode, clock_time(at)?);
    planner.set_character(character);
    Ok(planner)
}

pub fn run(action: RoutineAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    match action {
        RoutineAction::Show { whose, at, json } => {
            let planner = planner(&config, &whose, at.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(planner.routine())?);
            } else {
                display::routine_table(&planner);
            }
        }
        RoutineAction::Current { whose, at, json } => {
            let planner = planner(&config, &whose, at.as_deref())?;
            if json {
                let out = serde_json::json!({
                    "now": format_clock(planner.now()),
                    "mode": planner.mode(),
                    "character": planner.character().map(|c| c.name),
                    "current": planner.current(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                display::current_activity(&planner);
            }
        }
        RoutineAction::Watch { whose } => {
            let mut planner = planner(&config, &whose, None)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(watch(&mut planner, &config))?;
        }
    }
    Ok(())
}

async fn watch(
    planner: &mut DincharyaPlanner,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    display::current_activity(planner);

    let (_ticker, mut ticks) = spawn_ticker(SystemClock, config.tick_interval());
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            Some(now) = ticks.recv() => {
                if let Some(Event::ActivityChanged { .. }) = planner.tick(now) {
                    display::current_activity(planner);
                }
            }
            signal = &mut ctrl_c => {
                signal?;
                break;
            }
        }
    }
    Ok(())
}
