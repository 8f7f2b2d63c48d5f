use anyhow::{Context, Result};
use mm_matrix::Matrix;

pub fn run() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1i64, 2], vec![3, 4]])?;
    let b = Matrix::from_rows(vec![vec![5i64, 6], vec![7, 8]])?;
    let c = mm_strassen::multiply(&a, &b).context("multiplying the example matrices")?;

    println!("A     = {}", a);
    println!("B     = {}", b);
    println!("A x B = {}", c);
    Ok(())
}
