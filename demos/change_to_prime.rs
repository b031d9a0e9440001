use prime_factor_seq::{PrimeFactorSequence, SearchConfig, SequenceConfig};

/// Print the shortest transformation into a prime for the numbers under 64,
/// e.g. `4 -> 1 -> 5` since 4 + 1 = 5 is a prime
fn main() -> prime_factor_seq::Result<()> {
    let config = SequenceConfig {
        search: SearchConfig::level_order(),
        ..SequenceConfig::default()
    };
    let seq = PrimeFactorSequence::with_config(1000, Some(config))?;

    for n in 0..64 {
        let result = seq.change_to_prime(n)?;
        match result.path().and_then(|p| p.apply(n as u64)) {
            Some(p) => println!("{} -> {} -> {}", n, result, p),
            None => println!("{} -> {}", n, result),
        }
    }
    Ok(())
}
