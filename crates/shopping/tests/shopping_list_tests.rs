use recipebox_shared::{SelectedRecipe, ShoppingItem};
use recipebox_shopping::{Command, Query, ShoppingListError};

mod helpers;

#[tokio::test]
async fn test_create_and_find() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let created = command
        .create(helpers::list_input("Weekly", &["Milk", "Eggs"]), &[])
        .await?;

    let found = query.find(created.id).await?.expect("list exists");
    assert_eq!(found, created);
    assert_eq!(found.items.len(), 2);
    assert!(query.recipes(created.id).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_from_recipes() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool.clone());

    let omelette =
        helpers::create_recipe(&pool, "Omelette", 1, &[("eggs", 3.0, "pcs"), ("butter", 10.0, "g")])
            .await?;
    let cake =
        helpers::create_recipe(&pool, "Cake", 8, &[("eggs", 4.0, "pcs"), ("flour", 250.0, "g")])
            .await?;

    let mut input = helpers::list_input("Brunch", &[]);
    input.recipes = vec![
        SelectedRecipe { id: omelette.id, servings: 2 },
        SelectedRecipe { id: cake.id, servings: 4 },
    ];

    let created = command.create(input, &[omelette.clone(), cake.clone()]).await?;

    let items: Vec<(&str, f64)> = created
        .items
        .iter()
        .map(|i| (i.name(), i.ingredient.quantity))
        .collect();
    assert_eq!(
        items,
        vec![("eggs", 8.0), ("butter", 20.0), ("flour", 125.0)]
    );

    let found = query.find(created.id).await?.expect("list exists");
    assert_eq!(found.items, created.items);

    let links = query.recipes(created.id).await?;
    assert_eq!(
        links,
        vec![
            SelectedRecipe { id: omelette.id, servings: 2 },
            SelectedRecipe { id: cake.id, servings: 4 },
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_create_keeps_explicit_items_and_links_recipes() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool.clone());

    let omelette = helpers::create_recipe(&pool, "Omelette", 1, &[("eggs", 3.0, "pcs")]).await?;

    let mut input = helpers::list_input("Brunch", &[]);
    input.items = vec![ShoppingItem::new("eggs", 6.0, "pcs")];
    input.recipes = vec![SelectedRecipe { id: omelette.id, servings: 2 }];

    let created = command.create(input, &[omelette.clone()]).await?;
    assert_eq!(created.items, vec![ShoppingItem::new("eggs", 6.0, "pcs")]);

    let found = query.find(created.id).await?.expect("list exists");
    assert_eq!(found.items, created.items);
    assert_eq!(
        query.recipes(created.id).await?,
        vec![SelectedRecipe { id: omelette.id, servings: 2 }]
    );

    Ok(())
}

#[tokio::test]
async fn test_create_with_unknown_recipe_writes_nothing() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;
    let command = Command(pool.clone());

    let mut input = helpers::list_input("Party", &[]);
    input.recipes = vec![SelectedRecipe { id: 77, servings: 2 }];

    let result = command.create(input, &[]).await;
    assert!(matches!(result, Err(ShoppingListError::RecipeNotFound(77))));
    assert!(Query(pool).all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_blank_name() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;

    let result = Command(pool)
        .create(helpers::list_input("", &["Milk"]), &[])
        .await;

    assert!(matches!(result, Err(ShoppingListError::ValidationError(_))));

    Ok(())
}

#[tokio::test]
async fn test_update_replaces_items() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool);

    let created = command
        .create(helpers::list_input("Weekly", &["Milk"]), &[])
        .await?;

    let mut input = helpers::list_input("Weekly shop", &[]);
    let mut milk = ShoppingItem::new("Milk", 2.0, "l");
    milk.bought = true;
    input.items = vec![milk];

    command.update(created.id, input).await?;

    let found = query.find(created.id).await?.expect("list exists");
    assert_eq!(found.name, "Weekly shop");
    assert_eq!(found.items.len(), 1);
    assert!(found.items[0].bought);
    assert_eq!(found.items[0].ingredient.quantity, 2.0);

    let missing = command.update(999, helpers::list_input("Ghost", &[])).await;
    assert!(matches!(missing, Err(ShoppingListError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn test_delete_cascades_recipe_links() -> anyhow::Result<()> {
    let pool = helpers::setup_test_pool().await?;
    let command = Command(pool.clone());
    let query = Query(pool.clone());

    let soup = helpers::create_recipe(&pool, "Soup", 2, &[("leek", 1.0, "pcs")]).await?;
    let mut input = helpers::list_input("Soup night", &[]);
    input.recipes = vec![SelectedRecipe { id: soup.id, servings: 2 }];
    let created = command.create(input, &[soup]).await?;

    command.delete(created.id).await?;

    assert!(query.find(created.id).await?.is_none());

    let (links,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shopping_list_recipe")
        .fetch_one(&pool)
        .await?;
    assert_eq!(links, 0);

    Ok(())
}
