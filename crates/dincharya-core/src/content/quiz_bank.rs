use serde::Serialize;

/// A trivia question with four options in fixed display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// Equals one of `options` verbatim.
    pub answer: &'static str,
    pub explanation: &'static str,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }
}

pub static QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        question: "Who gave Arjuna the celestial bow Gandiva?",
        options: [
            "Agni (Fire God)",
            "Indra (King of Gods)",
            "Shiva (The Destroyer)",
            "Hanuman (Devoted Monkey)",
        ],
        answer: "Agni (Fire God)",
        explanation: "Agni, the fire god, gifted Gandiva to Arjuna during the burning of Khandava forest.",
    },
    QuizQuestion {
        question: "What was Krishna's role in the Kurukshetra war?",
        options: ["Archer", "Warrior King", "Charioteer", "Army General"],
        answer: "Charioteer",
        explanation: "Krishna chose to be Arjuna's charioteer and guide, giving us the wisdom of Bhagavad Gita.",
    },
    QuizQuestion {
        question: "Which brother was known for his strength and appetite?",
        options: ["Arjuna", "Bhima", "Nakula", "Sahadeva"],
        answer: "Bhima",
        explanation: "Bhima was the strongest of the Pandavas and famous for his enormous appetite and protective nature.",
    },
    QuizQuestion {
        question: "What was Draupadi also known as?",
        options: ["Sita", "Panchali", "Radha", "Ganga"],
        answer: "Panchali",
        explanation: "Draupadi was called Panchali as she was the princess of Panchala kingdom.",
    },
    QuizQuestion {
        question: "Who was the eldest of the Pandava brothers?",
        options: ["Arjuna", "Bhima", "Yudhishthira", "Nakula"],
        answer: "Yudhishthira",
        explanation: "Yudhishthira, known for his truthfulness and righteousness, was the eldest Pandava.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_answer_is_one_of_its_options() {
        for q in &QUIZ_QUESTIONS {
            assert!(q.answer_index().is_some(), "{}", q.question);
        }
    }

    #[test]
    fn options_are_distinct() {
        for q in &QUIZ_QUESTIONS {
            for (i, a) in q.options.iter().enumerate() {
                assert!(!q.options[i + 1..].contains(a), "{}", q.question);
            }
        }
    }
}
