//! Canned trainer answers used whenever the live model can't be
//! reached. Rules are checked in order and the first rule with a
//! keyword contained in the lower-cased message wins, so a message
//! mentioning both "diet" and "muscle" gets the nutrition answer.
//! Matching is plain substring containment ("great" contains "eat").

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Workout,
    Nutrition,
    WeightLoss,
    MuscleGain,
    Membership,
    Location,
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub category: Category,
    pub keywords: Vec<String>,
    pub response: String,
}

impl Rule {
    pub fn new(category: Category, keywords: &[&str], response: &str) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.to_string(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

pub const WORKOUT_RESPONSE: &str = "Great question! For beginners, I recommend starting with 3 days a week: Day 1 - Full body (squats, push-ups, rows), Day 2 - Cardio & core, Day 3 - Upper/Lower split. Visit Surefit Gym at Oregun, Ikeja for personalized training!";

pub const NUTRITION_RESPONSE: &str = "Nutrition is 70% of fitness success! Focus on: 1) High protein (chicken, fish, beans), 2) Complex carbs (oats, brown rice), 3) Plenty of vegetables, 4) Stay hydrated with 2-3L water daily. Avoid excessive processed foods and sugary drinks.";

pub const WEIGHT_LOSS_RESPONSE: &str = "For weight loss: 1) Create a calorie deficit (eat slightly less than you burn), 2) Combine cardio (30-45 mins) with strength training, 3) Prioritize sleep (7-8 hours), 4) Stay consistent! Surefit Gym offers excellent weight loss programs - call 0802 360 9696.";

pub const MUSCLE_GAIN_RESPONSE: &str = "To build muscle: 1) Progressive overload (increase weights gradually), 2) Eat in a slight calorie surplus with high protein (1.6-2g per kg bodyweight), 3) Focus on compound lifts (squats, deadlifts, bench press), 4) Rest 48 hours between training same muscle group.";

pub const MEMBERSHIP_RESPONSE: &str = "Surefit Gym offers flexible plans to fit your budget! We have Monthly Basic, VIP Yearly (best value), and Corporate packages. Call us at 0802 360 9696 for current pricing and seasonal discounts. We also offer day passes!";

pub const LOCATION_RESPONSE: &str = "We're conveniently located at: 2 Adewunmi Estate, Kudirat Abiola Way, By First Bank Bus Stop, Opposite The Citadel Church, Oregun, Ikeja, Lagos. Open Mon-Sat 7am-9pm!";

pub const DEFAULT_RESPONSE: &str = "Thanks for reaching out! I'm here to help with workout plans, nutrition tips, and fitness advice. For personalized training, visit Surefit Gym in Ikeja or call 0802 360 9696. What specific fitness goal can I help you with today?";

#[derive(Clone, Debug)]
pub struct FallbackTable {
    rules: Vec<Rule>,
    default_response: String,
}

impl FallbackTable {
    pub fn new(rules: Vec<Rule>, default_response: &str) -> Self {
        Self {
            rules,
            default_response: default_response.to_string(),
        }
    }

    /// Returns the first rule matching the message, if any.
    pub fn classify(&self, message: &str) -> Option<&Rule> {
        let lowered = message.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn respond(&self, message: &str) -> &str {
        self.classify(message)
            .map(|rule| rule.response.as_str())
            .unwrap_or(self.default_response.as_str())
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        // "plan" is listed under both workout and membership. Workout is
        // checked first so membership only ever matches on its other
        // keywords.
        let rules = vec![
            Rule::new(
                Category::Workout,
                &["workout", "exercise", "plan"],
                WORKOUT_RESPONSE,
            ),
            Rule::new(
                Category::Nutrition,
                &["diet", "nutrition", "food", "eat"],
                NUTRITION_RESPONSE,
            ),
            Rule::new(
                Category::WeightLoss,
                &["weight", "fat", "lose"],
                WEIGHT_LOSS_RESPONSE,
            ),
            Rule::new(
                Category::MuscleGain,
                &["muscle", "gain", "bulk"],
                MUSCLE_GAIN_RESPONSE,
            ),
            Rule::new(
                Category::Membership,
                &["price", "cost", "membership", "plan"],
                MEMBERSHIP_RESPONSE,
            ),
            Rule::new(
                Category::Location,
                &["location", "address", "where"],
                LOCATION_RESPONSE,
            ),
        ];
        Self::new(rules, DEFAULT_RESPONSE)
    }
}
