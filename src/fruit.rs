use std::io::{self, Write};

use crate::Eatable;

pub struct Apple;

impl Eatable for Apple {
    fn eat_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Eating an apple")
    }
}

pub struct Banana;

impl Eatable for Banana {
    fn eat_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Eating a banana")
    }
}

#[test]
fn test_fruit_output_is_fixed() {
    let apple = Apple;
    let mut first = Vec::new();
    apple.eat_to(&mut first).unwrap();
    assert_eq!(first, b"Eating an apple\n");

    let mut second = Vec::new();
    apple.eat_to(&mut second).unwrap();
    assert_eq!(first, second);

    let mut out = Vec::new();
    Banana.eat_to(&mut out).unwrap();
    assert_eq!(out, b"Eating a banana\n");
}
