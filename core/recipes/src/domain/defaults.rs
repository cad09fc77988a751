//! 初回起動時に投入する既定レシピ（3 件）

use super::recipe::{Recipe, RecipeId};

/// 画像未指定で追加されたレシピに付ける既定画像
pub const DEFAULT_IMAGE: &str = "/icecreamberry.png";

/// 既定のレシピコレクション
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: RecipeId::new(1),
            title: "🍰 Bolu Strawberry".to_string(),
            short_desc: "Bolu lembut beraroma strawberry dengan tekstur moist dan rasa manis yang pas. Cocok untuk camilan sore ditemani teh hangat".to_string(),
            ingredients: [
                "200 gr tepung terigu",
                "150 gr gula pasir",
                "4 butir telur",
                "100 ml minyak goreng",
                "4 sdm sirup / pasta strawberry",
                "1 sdt baking powder",
            ]
            .join("\n"),
            steps: [
                "1. Kocok telur & gula hingga mengembang.",
                "2. Masukkan tepung & baking powder, aduk perlahan.",
                "3. Tambahkan minyak & pasta strawberry.",
                "4. Tuang ke loyang, panggang 30–40 menit suhu 170°C.",
                "5. Angkat, dinginkan, potong dan sajikan 💗",
            ]
            .join("\n"),
            image: Some("/bolustrawberry.png".to_string()),
        },
        Recipe {
            id: RecipeId::new(2),
            title: "🍡 Mochi Pink".to_string(),
            short_desc: "Mochi kenyal isi kacang merah favorit semua orang".to_string(),
            ingredients: [
                "200 gr tepung ketan",
                "100 ml susu cair",
                "50 gr gula pasir",
                "Pewarna makanan pink",
                "Isian kacang merah",
            ]
            .join("\n"),
            steps: [
                "1. Campur tepung ketan, gula, dan santan.",
                "2. Kukus adonan selama 20 menit.",
                "3. Beri pewarna pink.",
                "4. Isi dengan pasta kacang merah dan bulatkan.",
            ]
            .join("\n"),
            image: Some("/mochipink.png".to_string()),
        },
        Recipe {
            id: RecipeId::new(3),
            title: "🍨 Ice Cream Berry".to_string(),
            short_desc: "Ice cream homemade creamy rasa berry segar".to_string(),
            ingredients: [
                "200 ml whipping cream",
                "100 ml susu kental manis",
                "100 gr buah berry (strawberry/blueberry)",
                "1 sdt lemon juice",
            ]
            .join("\n"),
            steps: [
                "1. Haluskan buah berry segar.",
                "2. Campur dengan whipped cream cair.",
                "3. Mixer hingga kaku.",
                "4. Bekukan di freezer semalaman.",
            ]
            .join("\n"),
            image: Some(DEFAULT_IMAGE.to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete_and_unique() {
        let recipes = default_recipes();
        assert_eq!(recipes.len(), 3);
        let mut ids: Vec<u64> = recipes.iter().map(|r| r.id.value()).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3]);
        for r in &recipes {
            assert!(!r.ingredients.is_empty());
            assert!(!r.steps.is_empty());
            assert!(r.image.is_some());
        }
        assert_eq!(recipes[1].ingredient_list().len(), 5);
    }
}
