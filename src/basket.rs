use std::io::{self, Write};
use std::rc::Rc;

use crate::Eatable;

pub struct FruitBasket {
    //插入顺序就是遍历顺序
    fruits: Vec<Rc<dyn Eatable>>,
}

impl FruitBasket {
    pub fn new() -> FruitBasket {
        FruitBasket { fruits: Vec::new() }
    }

    pub fn add(&mut self, fruit: Rc<dyn Eatable>) {
        self.fruits.push(fruit);
        tracing::debug!(fruits = self.fruits.len(), "fruit added to basket");
    }
}

impl Eatable for FruitBasket {
    fn eat_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Eating from the fruit basket:")?;
        for fruit in &self.fruits {
            fruit.eat_to(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
fn render(item: &dyn Eatable) -> String {
    let mut out = Vec::new();
    item.eat_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_basket_prints_only_header() {
    let basket = FruitBasket::new();
    assert_eq!(render(&basket), "Eating from the fruit basket:\n");
}

#[test]
fn test_fruits_eaten_in_insertion_order() {
    use crate::{Apple, Banana};

    let mut basket = FruitBasket::new();
    basket.add(Rc::new(Banana));
    basket.add(Rc::new(Apple));

    assert_eq!(
        render(&basket),
        "Eating from the fruit basket:\n\
         Eating a banana\n\
         Eating an apple\n"
    );
}

#[test]
fn test_repeated_traversal_is_identical() {
    use crate::Apple;

    let mut basket = FruitBasket::new();
    basket.add(Rc::new(Apple));

    let first = render(&basket);
    assert_eq!(first, render(&basket));
}

#[test]
fn test_fruit_shared_by_two_baskets() {
    use crate::{Apple, Banana};

    let apple: Rc<dyn Eatable> = Rc::new(Apple);

    let mut basket1 = FruitBasket::new();
    basket1.add(Rc::clone(&apple));
    basket1.add(Rc::new(Banana));

    let mut basket2 = FruitBasket::new();
    basket2.add(Rc::clone(&apple));

    assert_eq!(Rc::strong_count(&apple), 3);
    assert_eq!(
        render(&basket1),
        "Eating from the fruit basket:\n\
         Eating an apple\n\
         Eating a banana\n"
    );
    assert_eq!(
        render(&basket2),
        "Eating from the fruit basket:\n\
         Eating an apple\n"
    );
}

#[test]
fn test_nested_basket() {
    use crate::{Apple, Banana};

    let mut inner = FruitBasket::new();
    inner.add(Rc::new(Banana));

    let mut outer = FruitBasket::new();
    outer.add(Rc::new(Apple));
    outer.add(Rc::new(inner));

    assert_eq!(
        render(&outer),
        "Eating from the fruit basket:\n\
         Eating an apple\n\
         Eating from the fruit basket:\n\
         Eating a banana\n"
    );
}

#[test]
fn test_add_after_traversal_shows_in_next_traversal() {
    use crate::{Apple, Banana};

    let mut basket = FruitBasket::new();
    basket.add(Rc::new(Apple));
    assert_eq!(
        render(&basket),
        "Eating from the fruit basket:\n\
         Eating an apple\n"
    );

    basket.add(Rc::new(Banana));
    assert_eq!(
        render(&basket),
        "Eating from the fruit basket:\n\
         Eating an apple\n\
         Eating a banana\n"
    );
}
