use serde::Serialize;

/// A Mahabharata figure a birth date can be matched to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    /// Unique key; also used to look up routine overrides.
    pub name: &'static str,
    pub traits: &'static str,
    pub quote: &'static str,
    /// Portrait asset path.
    pub image: &'static str,
    pub daily_wisdom: &'static str,
    /// Label for the part of the day this character favours.
    pub time_of_day: &'static str,
}

/// Fixed, ordered character table. The order is significant:
/// the matcher indexes into it by `day-of-month mod len`.
pub static CHARACTERS: [Character; 6] = [
    Character {
        name: "Arjuna",
        traits: "Focused, disciplined, excellent archer 🎯",
        quote: "Focus on your goal with unwavering determination!",
        image: "assets/arjuna.png",
        daily_wisdom: "Practice your skills daily with complete concentration",
        time_of_day: "Early Morning (Brahma Muhurta)",
    },
    Character {
        name: "Krishna",
        traits: "Wise, calm, strategist 🧠",
        quote: "Do your duty without attachment to results.",
        image: "assets/krishna.png",
        daily_wisdom: "Meditate and seek wisdom in all actions",
        time_of_day: "Dawn (Sunrise)",
    },
    Character {
        name: "Bhima",
        traits: "Strong, loyal, protector 💪",
        quote: "Strength and loyalty protect those we love!",
        image: "assets/bhima.png",
        daily_wisdom: "Exercise your body and strengthen your resolve",
        time_of_day: "Morning (Physical Activities)",
    },
    Character {
        name: "Yudhishthira",
        traits: "Truthful, fair, responsible 📜",
        quote: "Truth and dharma are the paths to peace.",
        image: "assets/yudhishthira.png",
        daily_wisdom: "Always speak truth and act with righteousness",
        time_of_day: "Midday (Decision Making)",
    },
    Character {
        name: "Draupadi",
        traits: "Bold, intelligent, courageous 👑",
        quote: "Stand tall with dignity, no matter the challenge.",
        image: "assets/draupadi.png",
        daily_wisdom: "Face challenges with grace and inner strength",
        time_of_day: "Afternoon (Community Service)",
    },
    Character {
        name: "Karna",
        traits: "Generous, skilled, honorable 🎯❤️",
        quote: "True nobility comes from your actions, not your birth.",
        image: "assets/karna.png",
        daily_wisdom: "Practice charity and kindness to all beings",
        time_of_day: "Evening (Reflection & Gratitude)",
    },
];

/// Look up a character by name, ignoring ASCII case.
pub fn character_by_name(name: &str) -> Option<&'static Character> {
    let name = name.trim();
    CHARACTERS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}
