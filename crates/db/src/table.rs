use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Description,
    PrepTime,
    CookTime,
    Servings,
    Image,
    Tags,
    Ingredients,
    Instructions,
    Nutrition,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    Category,
    ServingSize,
    ServingUnit,
    Nutrition,
}

#[derive(Iden, Clone)]
pub enum ShoppingList {
    Table,
    Id,
    Name,
    Items,
}

#[derive(Iden, Clone)]
pub enum ShoppingListRecipe {
    Table,
    Id,
    ShoppingListId,
    RecipeId,
    Servings,
}
