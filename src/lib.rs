mod basket;
mod fruit;

pub use basket::FruitBasket;
pub use fruit::{Apple, Banana};

use std::io::{self, Write};

pub trait Eatable {
    fn eat_to(&self, out: &mut dyn Write) -> io::Result<()>;

    fn eat(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.eat_to(&mut stdout.lock())
    }
}

/*
   利用Trait对象，篮子可以把不同类型的水果(甚至别的篮子)放入同一个容器中统一遍历,
   同一个Rc实例也可以同时被多个篮子共享。
*/
#[test]
fn test_composite_pattern() {
    use std::rc::Rc;

    let apple: Rc<dyn Eatable> = Rc::new(Apple);
    let banana: Rc<dyn Eatable> = Rc::new(Banana);

    let mut basket1 = FruitBasket::new();
    basket1.add(Rc::clone(&apple));
    basket1.add(Rc::clone(&banana));

    let mut basket2 = FruitBasket::new();
    basket2.add(Rc::clone(&apple));

    let mut out = Vec::new();
    writeln!(out, "Eating from individual fruits:").unwrap();
    apple.eat_to(&mut out).unwrap();
    banana.eat_to(&mut out).unwrap();
    writeln!(out).unwrap();
    basket1.eat_to(&mut out).unwrap();
    writeln!(out).unwrap();
    basket2.eat_to(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Eating from individual fruits:\n\
         Eating an apple\n\
         Eating a banana\n\
         \n\
         Eating from the fruit basket:\n\
         Eating an apple\n\
         Eating a banana\n\
         \n\
         Eating from the fruit basket:\n\
         Eating an apple\n"
    );
}
