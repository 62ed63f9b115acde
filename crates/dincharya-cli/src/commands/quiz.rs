use std::io::{BufRead, Write};

use chrono::Local;
use clap::Subcommand;
use dincharya_core::quiz::letter_index;
use dincharya_core::{AppSession, Config, Event, GestureBus, GestureKind, NullAudio, QuizSession, Tab};
use serde::Serialize;

use crate::display;

#[derive(Subcommand)]
pub enum QuizAction {
    /// Play interactively: A-D to answer, Enter for the next question,
    /// m to toggle music, r to restart, q to quit
    Play,
    /// Answer the questions in order and print the result
    Answers {
        /// One letter (A-D) per question
        #[arg(required = true)]
        letters: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct AnswerReport {
    question: &'static str,
    chosen: &'static str,
    answer: &'static str,
    correct: bool,
}

#[derive(Serialize)]
struct QuizReport {
    answers: Vec<AnswerReport>,
    score: u32,
    total: usize,
    completed: bool,
    message: Option<&'static str>,
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuizAction::Play => play(&Config::load()?),
        QuizAction::Answers { letters, json } => answers(&letters, json),
    }
}

fn answers(letters: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let picks = letters
        .iter()
        .map(|l| letter_index(l))
        .collect::<Result<Vec<_>, _>>()?;
    let mut quiz = QuizSession::default();
    if picks.len() > quiz.total() {
        return Err(format!("got {} answers for {} questions", picks.len(), quiz.total()).into());
    }

    let mut report = Vec::with_capacity(picks.len());
    for pos in picks {
        let Some(question) = quiz.current_question() else {
            break;
        };
        if let Some(Event::AnswerSelected { correct, .. }) = quiz.select_index(pos) {
            report.push(AnswerReport {
                question: question.question,
                chosen: question.options[pos],
                answer: question.answer,
                correct,
            });
        }
        quiz.advance();
    }

    if json {
        let out = QuizReport {
            answers: report,
            score: quiz.score(),
            total: quiz.total(),
            completed: quiz.is_completed(),
            message: quiz.is_completed().then(|| quiz.tier().message()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (i, answer) in report.iter().enumerate() {
        let mark = if answer.correct { "✓" } else { "✗" };
        println!("{}. {mark} {}", i + 1, answer.chosen);
    }
    if quiz.is_completed() {
        display::quiz_result(&quiz);
    } else {
        println!("Score so far: {} / {}", quiz.score(), quiz.total());
    }
    Ok(())
}

fn play(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = config.session_options();
    options.tab = Tab::Quiz;

    let backend = if config.audio.autoplay {
        NullAudio::new(config.audio.track.as_str())
    } else {
        NullAudio::new(config.audio.track.as_str()).blocking_autoplay()
    };
    let bus = GestureBus::new();
    let mut app = AppSession::new(options, Local::now().time(), backend, bus.clone());
    report_audio(app.audio_mut().start(), app.audio().mute_glyph());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let Some(quiz) = app.quiz() else {
            break;
        };
        if quiz.is_completed() {
            display::quiz_result(quiz);
            prompt("[r]estart or [q]uit")?;
        } else {
            display::quiz_question(quiz);
            let hint = if quiz.explanation_visible() {
                quiz.next_label()
            } else {
                "answer A-D"
            };
            prompt(hint)?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        bus.dispatch(GestureKind::KeyDown);
        report_audio(app.audio_mut().poll_gestures(), app.audio().mute_glyph());

        let input = line.trim();
        match input {
            "q" | "Q" => break,
            "m" | "M" => {
                app.audio_mut().toggle_mute();
                println!("{} {}", app.audio().mute_glyph(), app.audio().mute_label());
            }
            _ => {
                let Some(quiz) = app.quiz_mut() else {
                    break;
                };
                if quiz.is_completed() {
                    if input.eq_ignore_ascii_case("r") {
                        quiz.reset();
                    }
                } else if input.is_empty() {
                    quiz.advance();
                } else {
                    match letter_index(input) {
                        Ok(pos) => {
                            if quiz.select_index(pos).is_none() {
                                println!("Already answered; press Enter to continue.");
                            }
                        }
                        Err(e) => println!("{e}"),
                    }
                }
            }
        }
    }

    Ok(())
}

fn prompt(hint: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "({hint}) > ")?;
    stdout.flush()
}

fn report_audio(event: Option<Event>, glyph: &str) {
    match event {
        Some(Event::PlaybackStarted { .. }) => println!("{glyph} Background music playing"),
        Some(Event::AutoplayBlocked { .. }) => {
            println!("{glyph} Background music will start on your first keypress")
        }
        _ => {}
    }
}
