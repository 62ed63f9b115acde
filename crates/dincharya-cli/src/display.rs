//! Plain-text rendering shared by the commands.

use dincharya_core::content::BACKGROUND_IMAGE;
use dincharya_core::{Character, DincharyaPlanner, OptionState, QuizSession};

pub fn character_card(character: &Character) {
    println!("{}", character.name);
    println!("  Traits:       {}", character.traits);
    println!("  Quote:        \"{}\"", character.quote);
    println!("  Best time:    {}", character.time_of_day);
    println!("  Daily wisdom: {}", character.daily_wisdom);
    println!("  Portrait:     {}", character.image);
    println!("  Backdrop:     {BACKGROUND_IMAGE}");
}

pub fn routine_table(planner: &DincharyaPlanner) {
    match planner.character() {
        Some(c) => println!("Daily routine for {}", c.name),
        None => println!("Daily routine"),
    }
    if let Some(wisdom) = planner.wisdom() {
        println!("  {wisdom}");
    }
    println!();

    let current = planner.current();
    for entry in planner.routine() {
        let marker = if current.is_some_and(|c| c == entry) { ">" } else { " " };
        let tag = if planner.is_character_specific(entry) { " *" } else { "" };
        println!(
            "{marker} {:<9} {} {}{tag}",
            entry.time, entry.icon, entry.activity
        );
        if !entry.description.is_empty() {
            println!("            {}", entry.description);
        }
    }
}

pub fn current_activity(planner: &DincharyaPlanner) {
    let now = planner.now().format("%H:%M");
    match planner.current() {
        Some(entry) => println!("{now}  {} {} ({})", entry.icon, entry.activity, entry.time),
        None => println!("{now}  no activity scheduled"),
    }
}

pub fn quiz_question(quiz: &QuizSession<'_>) {
    let (Some(question), Some(index)) = (quiz.current_question(), quiz.index()) else {
        return;
    };
    println!();
    println!(
        "Question {} of {}  Score: {}  [{:.0}%]",
        index + 1,
        quiz.total(),
        quiz.score(),
        quiz.progress_pct()
    );
    println!("{}", question.question);
    for (pos, (option, state)) in question
        .options
        .iter()
        .zip(quiz.option_states())
        .enumerate()
    {
        let mark = match state {
            OptionState::Unanswered => "",
            OptionState::Correct => "  ✓",
            OptionState::Wrong => "  ✗",
            OptionState::Revealed => "  ← correct",
        };
        println!("  {}) {option}{mark}", dincharya_core::quiz::letter(pos));
    }
    if let Some(explanation) = quiz.explanation() {
        println!("  {explanation}");
    }
}

pub fn quiz_result(quiz: &QuizSession<'_>) {
    println!();
    println!("Quiz Complete!");
    println!("You scored {} out of {}", quiz.score(), quiz.total());
    println!("{}", quiz.tier().message());
}
