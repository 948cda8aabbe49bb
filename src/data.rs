//! Built-in storefront dataset and consultation questionnaire.

use crate::models::{
    AnswerCardinality, AnswerOption, BudgetBand, Category, OptionWeight, PriorityTag, Product,
    Question, StyleTag, UsageLevel,
};

fn product(id: u32, name: &str, price: f64, image: u32, category: &str, rating: f64, slug: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        image: format!("/images/products/placeholder{}.jpg", image),
        category: category.to_string(),
        rating,
        slug: slug.to_string(),
    }
}

/// The twelve-product kitchen catalog
pub fn default_products() -> Vec<Product> {
    vec![
        product(1, "GROHE Eurosmart Kitchen Faucet", 15999.0, 1, "Faucets", 4.8, "grohe-eurosmart-kitchen-faucet"),
        product(2, "Blanco Stainless Steel Kitchen Sink", 24999.0, 2, "Sinks", 4.6, "blanco-stainless-kitchen-sink"),
        product(3, "Milan Kitchen Set", 35999.0, 3, "Kitchen Sets", 4.9, "milan-kitchen-set"),
        product(4, "Bosch Built-in Oven", 48999.0, 4, "Built-in Appliances", 4.7, "bosch-built-in-oven"),
        product(5, "Kitchen Waste Disposer", 8999.0, 5, "Accessories", 4.5, "kitchen-waste-disposer"),
        product(6, "Quartz Kitchen Countertop", 8999.0, 6, "Countertops", 4.4, "quartz-kitchen-countertop"),
        product(7, "Pull-out Spout Kitchen Faucet", 32999.0, 7, "Faucets", 4.7, "pull-out-kitchen-faucet"),
        product(8, "Kuppersbusch Kitchen Hood", 18999.0, 9, "Hoods", 4.6, "kuppersbusch-kitchen-hood"),
        product(9, "Naples Kitchen Set", 12999.0, 8, "Kitchen Sets", 4.8, "naples-kitchen-set"),
        product(10, "Kitchen Faucet with Filter", 45999.0, 10, "Faucets", 4.9, "filtered-kitchen-faucet"),
        product(11, "Granite Kitchen Sink", 14999.0, 11, "Sinks", 4.5, "granite-kitchen-sink"),
        product(12, "Blanco Stainless Steel Sink", 7999.0, 12, "Sinks", 4.3, "blanco-stainless-sink"),
    ]
}

pub fn default_categories() -> Vec<Category> {
    [
        (1, "Faucets", "faucets"),
        (2, "Sinks", "sinks"),
        (3, "Kitchen Sets", "kitchen-sets"),
        (4, "Built-in Appliances", "built-in-appliances"),
        (5, "Countertops", "countertops"),
        (6, "Hoods", "hoods"),
        (7, "Accessories", "accessories"),
        (8, "Microwaves", "microwaves"),
    ]
    .into_iter()
    .map(|(id, name, slug)| Category {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

fn option(id: &str, text: &str, weight: OptionWeight) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        weight,
    }
}

fn question(id: &str, text: &str, cardinality: AnswerCardinality, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        cardinality,
        options,
    }
}

/// The five-step consultation questionnaire
pub fn default_questions() -> Vec<Question> {
    use AnswerCardinality::{Multiple, Single};

    vec![
        question("budget", "What is your budget?", Single, vec![
            option("low", "Up to 20,000", OptionWeight::Budget(BudgetBand::Low)),
            option("medium", "20,000 - 50,000", OptionWeight::Budget(BudgetBand::Medium)),
            option("high", "Over 50,000", OptionWeight::Budget(BudgetBand::High)),
        ]),
        question("category", "What are you looking for?", Single, vec![
            option("faucets", "Faucets and taps", OptionWeight::Category("Faucets".to_string())),
            option("sinks", "Sinks and basins", OptionWeight::Category("Sinks".to_string())),
            option("kitchen-sets", "Kitchen sets", OptionWeight::Category("Kitchen Sets".to_string())),
            option("appliances", "Built-in appliances", OptionWeight::Category("Built-in Appliances".to_string())),
            option("accessories", "Accessories and fittings", OptionWeight::Category("Accessories".to_string())),
        ]),
        question("style", "Which kitchen style do you like?", Single, vec![
            option("modern", "Modern minimalism", OptionWeight::Style(StyleTag::Modern)),
            option("classic", "Classic", OptionWeight::Style(StyleTag::Classic)),
            option("loft", "Loft and industrial", OptionWeight::Style(StyleTag::Loft)),
            option("scandinavian", "Scandinavian", OptionWeight::Style(StyleTag::Scandinavian)),
        ]),
        question("priority", "What matters most to you?", Multiple, vec![
            option("quality", "High quality", OptionWeight::Priority(PriorityTag::Quality)),
            option("price", "Affordable price", OptionWeight::Priority(PriorityTag::Price)),
            option("design", "Beautiful design", OptionWeight::Priority(PriorityTag::Design)),
            option("functionality", "Functionality", OptionWeight::Priority(PriorityTag::Functionality)),
        ]),
        question("usage", "How often do you cook at home?", Single, vec![
            option("rarely", "Rarely, mostly reheating", OptionWeight::Usage(UsageLevel::Light)),
            option("sometimes", "A few times a week", OptionWeight::Usage(UsageLevel::Medium)),
            option("often", "Every day, I love cooking", OptionWeight::Usage(UsageLevel::Heavy)),
            option("professional", "I cook professionally", OptionWeight::Usage(UsageLevel::Professional)),
        ]),
    ]
}
