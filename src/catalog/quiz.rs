use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

static PROGRAMMING: [QuizQuestion; 2] = [
    QuizQuestion {
        question: "What is a variable in programming?",
        options: ["Data storage", "Function", "Loop", "Condition"],
        answer: "Data storage",
    },
    QuizQuestion {
        question: "Which language is known for web development?",
        options: ["Python", "JavaScript", "C++", "Java"],
        answer: "JavaScript",
    },
];

static MATHEMATICS: [QuizQuestion; 2] = [
    QuizQuestion {
        question: "What is 2 + 2?",
        options: ["3", "4", "5", "6"],
        answer: "4",
    },
    QuizQuestion {
        question: "Solve: x + 5 = 10",
        options: ["x=3", "x=5", "x=10", "x=15"],
        answer: "x=5",
    },
];

static SCIENCE: [QuizQuestion; 2] = [
    QuizQuestion {
        question: "What is H2O?",
        options: ["Oxygen", "Hydrogen", "Water", "Carbon dioxide"],
        answer: "Water",
    },
    QuizQuestion {
        question: "Which planet is known as the Red Planet?",
        options: ["Earth", "Mars", "Jupiter", "Venus"],
        answer: "Mars",
    },
];

/// CBT question bank lookup. Unknown or missing topics get no questions.
pub fn questions_for(topic: Option<&str>) -> &'static [QuizQuestion] {
    match topic {
        Some("programming") => &PROGRAMMING[..],
        Some("mathematics") => &MATHEMATICS[..],
        Some("science") => &SCIENCE[..],
        _ => &[],
    }
}
