use anyhow::Result;
use mealwise::session::Session;
use serde::Serialize;

#[derive(Serialize)]
struct AlternativesOutput<'a> {
    day: usize,
    current: &'a str,
    alternatives: Vec<&'a str>,
}

#[tracing::instrument(skip(session))]
pub fn run(session: &mut Session, day: usize, json: bool) -> Result<()> {
    let plan = session.generate_plan()?;
    let alternatives = session.alternatives(&plan, day)?;
    let current = &plan.entries()[day].recipe;

    if json {
        return super::print_json(&AlternativesOutput {
            day,
            current: &current.id,
            alternatives: alternatives.iter().map(|r| r.id.as_str()).collect(),
        });
    }

    super::plan::print_plan(&plan);
    println!();
    println!("Alternatives for day {day} ({}):", current.name);

    if alternatives.is_empty() {
        println!("  no recipe fits the plan's variety rules for this day");
        return Ok(());
    }

    for recipe in &alternatives {
        println!(
            "  {:<28} {:<14} {:<12} {:>3} min",
            recipe.name, recipe.cuisine, recipe.protein, recipe.prep_time
        );
    }

    Ok(())
}
