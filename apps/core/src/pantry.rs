//! Static ingredient catalog.
//!
//! Categorized ingredient lists and the popular-ingredients shortlist the
//! search surface offers before the user has typed anything.

/// A named ingredient category.
pub struct IngredientCategory {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const INGREDIENT_CATEGORIES: &[IngredientCategory] = &[
    IngredientCategory {
        name: "Pantry Essentials",
        items: &[
            "butter", "egg", "garlic", "milk", "onion", "sugar", "flour", "olive oil",
            "garlic powder", "white rice", "cinnamon", "ketchup", "soy sauce",
            "vanilla extract", "baking powder", "baking soda",
        ],
    },
    IngredientCategory {
        name: "Vegetables & Greens",
        items: &[
            "lettuce", "spinach", "carrot", "tomato", "potato", "broccoli", "bell pepper",
            "cucumber", "corn", "celery", "mushroom", "zucchini", "sweet potato",
            "asparagus", "cauliflower",
        ],
    },
    IngredientCategory {
        name: "Fruits",
        items: &[
            "apple", "banana", "orange", "lemon", "lime", "strawberry", "blueberry",
            "raspberry", "grape", "mango", "pineapple", "avocado",
        ],
    },
    IngredientCategory {
        name: "Meat & Protein",
        items: &[
            "chicken breast", "ground beef", "salmon", "tuna", "pork chop", "bacon",
            "shrimp", "tofu", "eggs", "turkey", "lamb", "sausage",
        ],
    },
    IngredientCategory {
        name: "Dairy & Alternatives",
        items: &[
            "milk", "cheese", "yogurt", "butter", "cream cheese", "heavy cream",
            "sour cream", "almond milk", "soy milk", "oat milk", "cottage cheese",
        ],
    },
    IngredientCategory {
        name: "Grains & Pasta",
        items: &[
            "rice", "pasta", "bread", "quinoa", "oats", "flour", "cornmeal",
            "breadcrumbs", "couscous", "tortilla", "noodles",
        ],
    },
    IngredientCategory {
        name: "Spices & Seasonings",
        items: &[
            "salt", "black pepper", "garlic powder", "cumin", "paprika", "cinnamon",
            "oregano", "thyme", "basil", "chili powder", "ginger", "nutmeg",
            "curry powder", "cayenne",
        ],
    },
    IngredientCategory {
        name: "Condiments & Sauces",
        items: &[
            "mayonnaise", "ketchup", "mustard", "soy sauce", "hot sauce",
            "worcestershire sauce", "olive oil", "vinegar", "honey", "maple syrup",
        ],
    },
];

/// Shortlist of popular ingredients offered as one-tap suggestions.
pub const SUGGESTED_INGREDIENTS: &[&str] = &[
    "bread", "flour", "lemon", "milk", "chive", "heavy cream", "cream", "cheddar",
    "baking mix", "dark chocolate", "tomato sauce", "chicken broth", "ground beef",
    "pasta", "rice", "onion powder", "vegetable oil",
];

/// Categories an ingredient appears in (some staples are listed in several).
pub fn categories_of(ingredient: &str) -> Vec<&'static str> {
    let needle = ingredient.to_lowercase();
    INGREDIENT_CATEGORIES
        .iter()
        .filter(|c| c.items.iter().any(|i| *i == needle))
        .map(|c| c.name)
        .collect()
}
