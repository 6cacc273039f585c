pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_WELCOME_TITLE: &str = "EduCounselor";
pub const DEFAULT_WELCOME_TEXT: &str = "Ask about counseling programs, course pricing, school partnerships \
or age-appropriate guidance for your child.";
pub const DEFAULT_QUICK_QUESTIONS: &[&str] = &[
    "What counseling programs do you offer?",
    "How much do your courses cost?",
    "Do you partner with schools?",
    "Which programs suit my child's age?",
];

/// Quick questions are bound to F1..F9
pub const MAX_QUICK_QUESTIONS: usize = 9;
