//! Combine two matrices given as text and print every result

use spmx::{decode, Operation};

const A: &str = "rows=2
cols=2
(0, 0, 5)
(0, 1, -3)
(1, 1, 2)
";

const B: &str = "rows=2
cols=2
(0, 1, 3)
(1, 0, 1)
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let a = decode(A)?;
    let b = decode(B)?;

    for op in Operation::ALL {
        println!("{op}:");
        match op.apply(&a, &b) {
            Ok(result) => print!("{result}"),
            Err(err) => println!("{err}"),
        }
        println!();
    }
    Ok(())
}
