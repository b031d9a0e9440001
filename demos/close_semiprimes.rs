use prime_factor_seq::nt_funcs;

/// List consecutive semiprimes (numbers with two prime factors) that differ by one,
/// and twin primes for comparison.
/// Reference: <https://oeis.org/A070552>
fn main() -> prime_factor_seq::Result<()> {
    let semiprimes = nt_funcs::numbers_with_small_gap(200, 2, 1)?;
    println!("Consecutive semiprimes under 200:");
    for pair in semiprimes {
        println!("{}", pair);
    }

    let twins = nt_funcs::numbers_with_small_gap(200, 1, 2)?;
    println!("Twin primes (and (2, 3)) under 200: {}", twins.len());
    Ok(())
}
