use anyhow::Result;
use mealwise::session::Session;

#[tracing::instrument(skip(session))]
pub fn run(session: &mut Session, json: bool) -> Result<()> {
    let plan = session.generate_plan()?;
    let list = session.grocery_list(&plan);

    if json {
        return super::print_json(&list);
    }

    for (category, items) in &list {
        println!("{category}");
        for item in items {
            println!(
                "  {:<28} {:>8} {:<10} {}",
                item.name,
                item.quantity,
                item.unit,
                item.recipes.join(", ")
            );
        }
    }

    Ok(())
}
