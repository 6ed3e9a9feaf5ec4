use std::rc::Rc;

use composite_pattern::{Apple, Banana, Eatable, FruitBasket};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("composite_pattern=info".parse()?),
        )
        .init();

    let apple: Rc<dyn Eatable> = Rc::new(Apple);
    let banana: Rc<dyn Eatable> = Rc::new(Banana);

    let mut basket1 = FruitBasket::new();
    basket1.add(Rc::clone(&apple));
    basket1.add(Rc::clone(&banana));

    let mut basket2 = FruitBasket::new();
    basket2.add(Rc::clone(&apple));

    println!("Eating from individual fruits:");
    apple.eat()?;
    banana.eat()?;

    println!();
    basket1.eat()?;

    println!();
    basket2.eat()?;

    Ok(())
}
