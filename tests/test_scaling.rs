use recipe_catalog::{scale, scale_ingredient, Catalog, CatalogError, Servings};

#[test]
fn test_scale_examples() {
    assert_eq!(scale("2 cups", 4, 8).unwrap(), "4 cups");
    assert_eq!(scale("1.5 tsp", 3, 1).unwrap(), "0.5 tsp");
    assert_eq!(scale("pinch of salt", 4, 8).unwrap(), "pinch of salt");
}

#[test]
fn test_scale_zero_original_servings_is_invalid() {
    let err = scale("2 cups", 0, 8).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidServings { original: 0, .. }));
    assert!(err.to_string().contains("Invalid servings"));
}

#[test]
fn test_same_servings_keeps_quantities() {
    let catalog = Catalog::builder().build().unwrap();

    for recipe in catalog.all() {
        for line in &recipe.ingredients {
            let scaled = scale_ingredient(line, recipe.servings, recipe.servings).unwrap();
            // "500g chicken" becomes "500 g chicken"; compare without spaces
            assert_eq!(scaled.replace(' ', ""), line.replace(' ', ""));
        }
    }
}

#[test]
fn test_butter_chicken_for_two() {
    let catalog = Catalog::builder().build().unwrap();

    let lines = catalog.scaled_ingredients("butter-chicken", 2).unwrap().unwrap();
    assert_eq!(
        lines,
        vec![
            "250 g chicken thighs",
            "0.5 cup yogurt",
            "1 tbsp butter",
            "200 g tomato puree",
            "0.75 tsp garam masala",
            "0.25 cup cream",
            "Salt to taste",
        ]
    );
}

#[test]
fn test_serving_control_drives_scaling() {
    let catalog = Catalog::builder().build().unwrap();
    let recipe = catalog.by_id("egg-fried-rice").unwrap();

    let mut servings = Servings::for_recipe(recipe);
    servings.decrement();
    servings.decrement();
    assert_eq!(servings.get(), 1);

    let lines = catalog
        .scaled_ingredients(&recipe.id, servings.get())
        .unwrap()
        .unwrap();
    assert_eq!(lines[0], "1 cups cooked rice");
    assert_eq!(lines[1], "1 eggs");
}
