use rand::{Rng, rng};


/// Generates a random string of length `n` drawn from `runes`, using the
/// thread-local cryptographically seeded generator.
pub fn generate_crypto_random_string(n: usize, runes: &[u8]) -> String {
    let mut rng = rng();

    let rand_string: String = (0..n)
        .map(|_| {
            let idx = rng.random_range(0..runes.len());
            runes[idx] as char
        })
        .collect();

    rand_string
}
