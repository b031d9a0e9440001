use prime_factor_seq::PrimeFactorSequence;

/// Print the (big) prime omega function Ω(n), the number of prime factors with multiplicity
/// Reference: <https://en.wikipedia.org/wiki/Prime_omega_function>
fn main() -> prime_factor_seq::Result<()> {
    let seq = PrimeFactorSequence::new(99)?;
    let omega = seq.prime_factor_sequence();

    println!("Prime omega of numbers from 10 to 99:");
    for i in 10..100 {
        println!("{}: Ω={}", i, omega[i]);
    }
    Ok(())
}
