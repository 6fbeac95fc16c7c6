use anyhow::Result;
use mealwise::session::Session;
use mealwise_mealplan::MealPlan;

#[tracing::instrument(skip(session))]
pub fn run(session: &mut Session, json: bool) -> Result<()> {
    let plan = session.generate_plan()?;

    if json {
        return super::print_json(&plan);
    }

    print_plan(&plan);

    Ok(())
}

pub(crate) fn print_plan(plan: &MealPlan) {
    for (day, entry) in plan.entries().iter().enumerate() {
        let recipe = &entry.recipe;
        let rating = entry
            .user_rating
            .map(|r| format!("{r}/5"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{day:>2}  {}  {:<28} {:<14} {:<12} {:>3} min  {}  {rating}",
            entry.date.format("%a %Y-%m-%d"),
            recipe.name,
            recipe.cuisine,
            recipe.protein,
            recipe.prep_time,
            recipe.difficulty,
        );
    }
}
