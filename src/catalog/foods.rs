use crate::models::{Food, FoodCategory, NutritionalInfo};

fn food(
    id: &str,
    name: &str,
    portion: &str,
    category: FoodCategory,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        portion: portion.to_string(),
        category,
        nutritional_info: NutritionalInfo {
            calories,
            protein,
            carbs,
            fats,
        },
    }
}

/// The full food catalog used by the meal plan generator.
pub fn food_catalog() -> Vec<Food> {
    use FoodCategory::*;

    vec![
        // Proteins - meats
        food("chicken_breast", "Peito de Frango Grelhado", "150g", Protein, 165.0, 31.0, 0.0, 3.6),
        food("chicken_thigh", "Coxa de Frango", "150g", Protein, 210.0, 26.0, 0.0, 11.0),
        food("ground_beef", "Carne Moída Magra", "150g", Protein, 250.0, 26.0, 0.0, 15.0),
        food("steak", "Filé Mignon", "150g", Protein, 220.0, 30.0, 0.0, 10.0),
        // Proteins - fish
        food("salmon", "Salmão Grelhado", "150g", Protein, 280.0, 30.0, 0.0, 17.0),
        food("tilapia", "Tilápia Grelhada", "150g", Protein, 150.0, 30.0, 0.0, 3.0),
        food("tuna", "Atum em Água", "100g", Protein, 116.0, 26.0, 0.0, 1.0),
        food("cod", "Bacalhau", "150g", Protein, 135.0, 29.0, 0.0, 1.5),
        // Proteins - eggs and dairy
        food("eggs", "Ovos Mexidos", "2 unidades", Protein, 140.0, 12.0, 1.0, 10.0),
        food("egg_whites", "Claras de Ovo", "4 unidades", Protein, 68.0, 14.0, 1.0, 0.0),
        food("cottage_cheese", "Queijo Cottage", "100g", Protein, 98.0, 11.0, 3.0, 4.0),
        food("greek_yogurt", "Iogurte Grego Natural", "150g", Protein, 100.0, 17.0, 6.0, 0.5),
        // Proteins - plant based
        food("tofu", "Tofu Grelhado", "150g", Protein, 120.0, 14.0, 3.0, 6.0),
        food("tempeh", "Tempeh", "100g", Protein, 193.0, 19.0, 9.0, 11.0),
        food("lentils", "Lentilhas Cozidas", "150g", Protein, 165.0, 12.0, 28.0, 1.0),
        // Carbs - grains
        food("brown_rice", "Arroz Integral", "150g cozido", Carb, 170.0, 4.0, 35.0, 1.5),
        food("white_rice", "Arroz Branco", "150g cozido", Carb, 195.0, 4.0, 43.0, 0.5),
        food("quinoa", "Quinoa", "150g cozida", Carb, 170.0, 6.0, 30.0, 3.0),
        food("oats", "Aveia", "50g", Carb, 190.0, 7.0, 32.0, 4.0),
        food("granola", "Granola", "40g", Carb, 180.0, 4.0, 28.0, 6.0),
        // Carbs - tubers
        food("sweet_potato", "Batata Doce", "200g", Carb, 180.0, 2.0, 41.0, 0.3),
        food("potato", "Batata Inglesa", "200g", Carb, 160.0, 4.0, 37.0, 0.2),
        food("cassava", "Mandioca Cozida", "150g", Carb, 180.0, 1.0, 42.0, 0.3),
        // Carbs - breads and pasta
        food("whole_bread", "Pão Integral", "2 fatias", Carb, 140.0, 6.0, 24.0, 2.0),
        food("french_bread", "Pão Francês", "1 unidade", Carb, 140.0, 4.0, 28.0, 1.0),
        food("whole_pasta", "Macarrão Integral", "100g cozido", Carb, 150.0, 6.0, 30.0, 1.0),
        food("tapioca", "Tapioca", "2 unidades", Carb, 140.0, 0.0, 35.0, 0.0),
        // Vegetables - leafy
        food("salad", "Salada Verde Mista", "100g", Vegetable, 20.0, 1.0, 4.0, 0.2),
        food("spinach", "Espinafre", "100g", Vegetable, 23.0, 3.0, 4.0, 0.4),
        food("kale", "Couve", "100g", Vegetable, 35.0, 3.0, 6.0, 0.7),
        // Vegetables - cruciferous
        food("broccoli", "Brócolis", "100g", Vegetable, 35.0, 3.0, 7.0, 0.4),
        food("cauliflower", "Couve-flor", "100g", Vegetable, 25.0, 2.0, 5.0, 0.3),
        food("cabbage", "Repolho", "100g", Vegetable, 25.0, 1.0, 6.0, 0.1),
        // Vegetables - other
        food("tomato", "Tomate", "100g", Vegetable, 18.0, 1.0, 4.0, 0.2),
        food("cucumber", "Pepino", "100g", Vegetable, 15.0, 1.0, 4.0, 0.1),
        food("carrot", "Cenoura", "100g", Vegetable, 41.0, 1.0, 10.0, 0.2),
        food("zucchini", "Abobrinha", "100g", Vegetable, 17.0, 1.0, 3.0, 0.3),
        // Fruits - citrus
        food("orange", "Laranja", "1 unidade", Fruit, 62.0, 1.0, 15.0, 0.2),
        food("apple", "Maçã", "1 unidade", Fruit, 95.0, 0.5, 25.0, 0.3),
        // Fruits - tropical
        food("banana", "Banana", "1 unidade", Fruit, 105.0, 1.0, 27.0, 0.4),
        food("papaya", "Mamão", "1 fatia (150g)", Fruit, 60.0, 1.0, 15.0, 0.2),
        food("pineapple", "Abacaxi", "2 fatias", Fruit, 82.0, 1.0, 22.0, 0.2),
        food("mango", "Manga", "1/2 unidade", Fruit, 100.0, 1.0, 25.0, 0.4),
        // Fruits - berries
        food("strawberry", "Morango", "100g", Fruit, 32.0, 1.0, 8.0, 0.3),
        food("blueberry", "Mirtilo", "100g", Fruit, 57.0, 1.0, 14.0, 0.3),
        food("watermelon", "Melancia", "200g", Fruit, 60.0, 1.0, 15.0, 0.2),
        // Fats - oils and seeds
        food("olive_oil", "Azeite de Oliva", "1 colher sopa", Fat, 120.0, 0.0, 0.0, 14.0),
        food("coconut_oil", "Óleo de Coco", "1 colher sopa", Fat, 117.0, 0.0, 0.0, 14.0),
        // Fats - nuts
        food("nuts", "Castanhas Mistas", "30g", Fat, 180.0, 5.0, 6.0, 16.0),
        food("almonds", "Amêndoas", "30g", Fat, 170.0, 6.0, 6.0, 15.0),
        food("walnuts", "Nozes", "30g", Fat, 185.0, 4.0, 4.0, 18.0),
        food("peanut_butter", "Pasta de Amendoim", "1 colher sopa", Fat, 95.0, 4.0, 3.0, 8.0),
        food("chia", "Chia", "1 colher sopa", Fat, 60.0, 2.0, 5.0, 4.0),
        food("flaxseed", "Linhaça", "1 colher sopa", Fat, 55.0, 2.0, 3.0, 4.0),
        // Fats - avocado
        food("avocado", "Abacate", "1/2 unidade", Fat, 160.0, 2.0, 9.0, 15.0),
    ]
}

/// Synthetic post-workout shake used by the afternoon snack slot; not part of
/// the base catalog.
pub fn whey_shake() -> Food {
    food("whey_shake", "Whey Protein Shake", "30g", FoodCategory::Protein, 120.0, 24.0, 3.0, 1.0)
}
