//! Static per-category advice catalog.
//!
//! Every BMI band maps to fixed presentation metadata and guidance: an
//! emoji, a severity tone, a diet/exercise advice line, and a four-slot
//! diet plan. The catalog is immutable data, built once and shared.

use crate::types::{BmiCategory, DietPlan, Tone};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Everything the presentation layer needs to render a category
#[derive(Clone, Debug)]
pub struct CategoryInfo {
    pub emoji: &'static str,
    pub tone: Tone,
    pub advice: &'static str,
    pub plan: DietPlan,
}

/// Cached advice catalog, built once and reused across all lookups
static CATALOG: Lazy<HashMap<BmiCategory, CategoryInfo>> = Lazy::new(build_catalog);

/// Look up the static advice bundle for a category
///
/// The catalog covers every category, so this never fails.
pub fn category_info(category: BmiCategory) -> &'static CategoryInfo {
    &CATALOG[&category]
}

fn build_catalog() -> HashMap<BmiCategory, CategoryInfo> {
    let mut catalog = HashMap::new();

    catalog.insert(
        BmiCategory::Underweight,
        CategoryInfo {
            emoji: "🍞",
            tone: Tone::Danger,
            advice: "Consider high-calorie foods like nuts, avocados, and whole \
                     grains. Focus on strength training to build muscle mass.",
            plan: DietPlan {
                breakfast: "Oatmeal with whole milk, banana, and a handful of nuts",
                lunch: "Chicken and avocado sandwich on whole-grain bread",
                dinner: "Salmon with rice, olive oil, and roasted vegetables",
                tip: "Add an extra snack between meals, such as trail mix or a smoothie",
            },
        },
    );

    catalog.insert(
        BmiCategory::Normal,
        CategoryInfo {
            emoji: "😊",
            tone: Tone::Success,
            advice: "Maintain a balanced diet rich in fruits, vegetables, and lean \
                     proteins. Regular cardio and strength training are recommended.",
            plan: DietPlan {
                breakfast: "Greek yogurt with berries and granola",
                lunch: "Grilled chicken salad with mixed greens",
                dinner: "Lean protein with vegetables and a whole-grain side",
                tip: "Keep portion sizes steady and stay hydrated through the day",
            },
        },
    );

    catalog.insert(
        BmiCategory::Overweight,
        CategoryInfo {
            emoji: "🥗",
            tone: Tone::Warning,
            advice: "Reduce sugar and refined carbs; focus on whole foods. \
                     Incorporate more cardio and strength training into your routine.",
            plan: DietPlan {
                breakfast: "Vegetable omelette with a slice of whole-grain toast",
                lunch: "Quinoa bowl with beans, greens, and a light dressing",
                dinner: "Baked fish with steamed vegetables",
                tip: "Swap sugary drinks for water or unsweetened tea",
            },
        },
    );

    catalog.insert(
        BmiCategory::Obese,
        CategoryInfo {
            emoji: "🚶",
            tone: Tone::Warning,
            advice: "Consult a nutritionist for a personalized diet plan. Aim for \
                     at least 150 minutes of moderate aerobic activity each week.",
            plan: DietPlan {
                breakfast: "High-fibre cereal with low-fat milk",
                lunch: "Turkey and vegetable wrap with a side salad",
                dinner: "Grilled chicken with leafy greens, no heavy sauces",
                tip: "Track meals for a week to find hidden calorie sources",
            },
        },
    );

    catalog.insert(
        BmiCategory::SeverelyObese,
        CategoryInfo {
            emoji: "⚠️",
            tone: Tone::Warning,
            advice: "Focus on portion control and nutrient-dense foods. Consider \
                     working with a trainer for safe exercise options.",
            plan: DietPlan {
                breakfast: "Egg whites with spinach and a small portion of fruit",
                lunch: "Lentil soup with a side of raw vegetables",
                dinner: "Steamed fish with broccoli and a small sweet potato",
                tip: "Use smaller plates and eat slowly to aid portion control",
            },
        },
    );

    catalog.insert(
        BmiCategory::MorbidlyObese,
        CategoryInfo {
            emoji: "🏥",
            tone: Tone::Warning,
            advice: "Seek professional guidance for a comprehensive weight loss \
                     plan. Start with low-impact activities and gradually increase \
                     intensity.",
            plan: DietPlan {
                breakfast: "Protein smoothie with leafy greens",
                lunch: "Grilled vegetables with a lean protein portion",
                dinner: "Clear soup with vegetables and shredded chicken",
                tip: "Begin with short daily walks or water-based exercise",
            },
        },
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_categories() {
        for category in BmiCategory::ALL {
            let info = category_info(category);
            assert!(!info.emoji.is_empty());
            assert!(!info.advice.is_empty());
        }
    }

    #[test]
    fn test_tone_mapping() {
        assert_eq!(category_info(BmiCategory::Underweight).tone, Tone::Danger);
        assert_eq!(category_info(BmiCategory::Normal).tone, Tone::Success);
        assert_eq!(category_info(BmiCategory::Overweight).tone, Tone::Warning);
        assert_eq!(category_info(BmiCategory::Obese).tone, Tone::Warning);
        assert_eq!(category_info(BmiCategory::SeverelyObese).tone, Tone::Warning);
        assert_eq!(category_info(BmiCategory::MorbidlyObese).tone, Tone::Warning);
    }

    #[test]
    fn test_plans_have_all_slots() {
        for category in BmiCategory::ALL {
            let plan = &category_info(category).plan;
            assert!(!plan.breakfast.is_empty());
            assert!(!plan.lunch.is_empty());
            assert!(!plan.dinner.is_empty());
            assert!(!plan.tip.is_empty());
        }
    }
}
