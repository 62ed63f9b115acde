use crate::routine::{RoutineActivity, RoutineOverride};

/// The universal daily routine, in time-of-day order.
pub static BASE_ROUTINE: [RoutineActivity; 15] = [
    RoutineActivity::universal(
        "5:00 AM",
        "Brahma Muhurta (Sacred Hour)",
        "Wake up during the most sacred time for meditation and prayer",
        "🌅",
    ),
    RoutineActivity::universal(
        "5:30 AM",
        "Sandhya Vandana (Dawn Prayer)",
        "Greet the sun god with gratitude and set intentions for the day",
        "🙏",
    ),
    RoutineActivity::universal(
        "6:00 AM",
        "Yoga & Pranayama",
        "Physical and breathing exercises to energize body and mind",
        "🧘",
    ),
    RoutineActivity::universal(
        "7:00 AM",
        "Study & Learning",
        "Read scriptures, learn new skills, or practice your craft",
        "📚",
    ),
    RoutineActivity::universal(
        "8:00 AM",
        "Morning Meal",
        "Eat a sattvic (pure) breakfast with gratitude",
        "🥣",
    ),
    RoutineActivity::universal(
        "9:00 AM",
        "Karma Yoga (Duty)",
        "Perform your daily duties and responsibilities",
        "⚡",
    ),
    RoutineActivity::universal(
        "12:00 PM",
        "Madhyahna (Midday Prayer)",
        "Brief prayer and reflection at the peak of the day",
        "☀️",
    ),
    RoutineActivity::universal(
        "1:00 PM",
        "Main Meal",
        "Eat your largest meal when digestive fire is strongest",
        "🍽️",
    ),
    RoutineActivity::universal(
        "2:00 PM",
        "Rest & Reflection",
        "Short rest to recharge for the afternoon",
        "🌸",
    ),
    RoutineActivity::universal(
        "4:00 PM",
        "Service (Seva)",
        "Help others, practice charity, or community service",
        "❤️",
    ),
    RoutineActivity::universal(
        "6:00 PM",
        "Sandhya Vandana (Evening Prayer)",
        "Evening prayer and gratitude for the day's blessings",
        "🌅",
    ),
    RoutineActivity::universal(
        "7:00 PM",
        "Family Time",
        "Spend quality time with loved ones, share stories",
        "👨‍👩‍👧‍👦",
    ),
    RoutineActivity::universal(
        "8:00 PM",
        "Light Evening Meal",
        "Simple, light dinner that's easy to digest",
        "🥗",
    ),
    RoutineActivity::universal(
        "9:00 PM",
        "Self-Reflection",
        "Review the day, practice gratitude, plan tomorrow",
        "📔",
    ),
    RoutineActivity::universal(
        "10:00 PM",
        "Peaceful Sleep",
        "Early sleep for natural body rhythms and health",
        "😴",
    ),
];

static ARJUNA: [RoutineOverride; 2] = [
    RoutineOverride::adjustment(
        "6:00 AM",
        "Archery Practice",
        "Practice your focus and skill with concentrated effort",
        "Arjuna",
    ),
    RoutineOverride::adjustment(
        "4:00 PM",
        "Target Practice",
        "Afternoon practice to perfect your aim and concentration",
        "Arjuna",
    ),
];

static KRISHNA: [RoutineOverride; 2] = [
    RoutineOverride::adjustment(
        "5:30 AM",
        "Deep Meditation",
        "Connect with divine wisdom through silent contemplation",
        "Krishna",
    ),
    RoutineOverride::adjustment(
        "7:00 AM",
        "Spiritual Study",
        "Study sacred texts and philosophical wisdom",
        "Krishna",
    ),
];

static BHIMA: [RoutineOverride; 2] = [
    RoutineOverride::adjustment(
        "6:00 AM",
        "Strength Training",
        "Build physical strength and endurance",
        "Bhima",
    ),
    RoutineOverride::adjustment(
        "8:00 AM",
        "Hearty Breakfast",
        "Fuel your strong body with nutritious food",
        "Bhima",
    ),
];

static YUDHISHTHIRA: [RoutineOverride; 2] = [
    RoutineOverride::adjustment(
        "9:00 AM",
        "Just Decisions",
        "Make fair and righteous decisions for the day",
        "Yudhishthira",
    ),
    RoutineOverride::adjustment(
        "12:00 PM",
        "Truth Practice",
        "Speak only truth and act with righteousness",
        "Yudhishthira",
    ),
];

static DRAUPADI: [RoutineOverride; 2] = [
    RoutineOverride::adjustment(
        "4:00 PM",
        "Community Leadership",
        "Lead and inspire others with grace and wisdom",
        "Draupadi",
    ),
    RoutineOverride::adjustment(
        "7:00 PM",
        "Dignified Interactions",
        "Maintain dignity and respect in all relationships",
        "Draupadi",
    ),
];

static KARNA: [RoutineOverride; 2] = [
    RoutineOverride::adjustment(
        "4:00 PM",
        "Charitable Giving",
        "Practice generosity and help those in need",
        "Karna",
    ),
    RoutineOverride::adjustment(
        "9:00 PM",
        "Honor Reflection",
        "Reflect on maintaining honor in all circumstances",
        "Karna",
    ),
];

/// Routine adjustments for a character, empty for unknown names.
pub fn overrides_for(character: &str) -> &'static [RoutineOverride] {
    match character {
        "Arjuna" => &ARJUNA,
        "Krishna" => &KRISHNA,
        "Bhima" => &BHIMA,
        "Yudhishthira" => &YUDHISHTHIRA,
        "Draupadi" => &DRAUPADI,
        "Karna" => &KARNA,
        _ => &[],
    }
}
