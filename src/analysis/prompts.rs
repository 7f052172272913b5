use crate::config::PromptPreset;

/// Open-ended detection: any ingredient the model sees.
pub const OPEN_PROMPT: &str = r#"
You are a food ingredient detection system.
Identify all ingredients present in the uploaded image.
Return the result in pure JSON format only, like this:
{
  "ingredients": ["Tomato", "Onion", "Carrot"],
  "shelf_life_days": {
      "Tomato": 5,
      "Onion": 30,
      "Carrot": 14
  }
}
"#;

/// Detection restricted to [`INGREDIENT_VOCABULARY`].
pub const VOCABULARY_PROMPT_HEADER: &str = r#"
You are a food ingredient detection system.
Look at the uploaded image and report which of the following ingredients are present.
Only use names from this list, spelled exactly as written:
"#;

pub const VOCABULARY_PROMPT_FOOTER: &str = r#"
For every detected ingredient estimate how many days it stays fresh when stored properly.
Return the result in pure JSON format only, like this:
{
  "ingredients_detected": ["Tomato", "Onion"],
  "shelf_life_days": {
      "Tomato": 5,
      "Onion": 30
  }
}
"#;

pub const INGREDIENT_VOCABULARY: &[&str] = &[
    "Apple",
    "Banana",
    "Bell Pepper",
    "Broccoli",
    "Cabbage",
    "Carrot",
    "Cauliflower",
    "Cheese",
    "Chicken",
    "Cucumber",
    "Egg",
    "Garlic",
    "Ginger",
    "Lemon",
    "Lettuce",
    "Milk",
    "Mushroom",
    "Onion",
    "Orange",
    "Potato",
    "Spinach",
    "Tomato",
];

pub fn preset_prompt(preset: PromptPreset) -> String {
    match preset {
        PromptPreset::Open => OPEN_PROMPT.to_string(),
        PromptPreset::Vocabulary => format!(
            "{}{}\n{}",
            VOCABULARY_PROMPT_HEADER,
            INGREDIENT_VOCABULARY.join(", "),
            VOCABULARY_PROMPT_FOOTER
        ),
    }
}
